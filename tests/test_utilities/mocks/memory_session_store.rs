use std::sync::{Arc, Mutex};
use swapi_explorer::prelude::*;

/// In-memory SessionStore; clones share the same flag
#[derive(Default, Clone)]
pub struct MemorySessionStore {
    flag: Arc<Mutex<bool>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logged_in() -> Self {
        let store = Self::default();
        *store.flag.lock().unwrap() = true;
        store
    }

    pub fn is_set(&self) -> bool {
        *self.flag.lock().unwrap()
    }
}

impl SessionStore for MemorySessionStore {
    fn read_flag(&self) -> Result<bool> {
        Ok(self.is_set())
    }

    fn write_flag(&self) -> Result<()> {
        *self.flag.lock().unwrap() = true;
        Ok(())
    }

    fn clear_flag(&self) -> Result<()> {
        *self.flag.lock().unwrap() = false;
        Ok(())
    }
}
