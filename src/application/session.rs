use crate::ports::outbound::SessionStore;
use crate::shared::error::CatalogError;
use crate::shared::Result;

/// SessionContext - explicit holder of the authentication flag
///
/// Created once at startup from the persisted flag and passed to whatever
/// needs to gate on it. Login and logout update memory and storage together.
pub struct SessionContext<S> {
    store: S,
    authenticated: bool,
}

impl<S: SessionStore> SessionContext<S> {
    /// Reads the persisted flag; a missing session means logged out
    pub fn init(store: S) -> Result<Self> {
        let authenticated = store.read_flag()?;
        Ok(Self {
            store,
            authenticated,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Marks the session as authenticated. No credentials are checked.
    pub fn login(&mut self) -> Result<()> {
        self.store.write_flag()?;
        self.authenticated = true;
        Ok(())
    }

    /// Clears the flag; logging out twice is harmless
    pub fn logout(&mut self) -> Result<()> {
        self.store.clear_flag()?;
        self.authenticated = false;
        Ok(())
    }

    /// Gate for the catalog screens
    pub fn require_authenticated(&self) -> Result<()> {
        if self.authenticated {
            Ok(())
        } else {
            Err(CatalogError::NotAuthenticated.into())
        }
    }
}
