use crate::ports::outbound::SessionStore;
use crate::shared::error::CatalogError;
use crate::shared::security::{validate_not_symlink, validate_regular_file};
use crate::shared::Result;
use directories::ProjectDirs;
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Key the authentication flag is stored under
pub const SESSION_KEY: &str = "isAuthenticated";

const SESSION_FILENAME: &str = "session.json";

/// FileSessionStore adapter keeping the session flag in a small JSON file
///
/// The file is a flat key/value object, `{"isAuthenticated": "true"}` when
/// logged in. Logging out removes the key, and the file once it is empty.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `<platform config dir>/swapi-explorer/session.json`
    pub fn default_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "swapi-explorer")
            .map(|dirs| dirs.config_dir().join(SESSION_FILENAME))
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Could not determine the configuration directory\n\n💡 Hint: Pass --session-file to choose where the session is stored"
                )
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn session_error(&self, details: impl ToString) -> anyhow::Error {
        CatalogError::SessionError {
            path: self.path.clone(),
            details: details.to_string(),
        }
        .into()
    }

    fn read_entries(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        validate_regular_file(&self.path, "session file").map_err(|e| self.session_error(e))?;

        let content = fs::read_to_string(&self.path).map_err(|e| self.session_error(e))?;
        if content.trim().is_empty() {
            return Ok(Map::new());
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(entries)) => Ok(entries),
            Ok(_) => Err(self.session_error("Session file does not contain a JSON object")),
            Err(e) => Err(self.session_error(e)),
        }
    }

    fn write_entries(&self, entries: Map<String, Value>) -> Result<()> {
        if self.path.exists() {
            validate_not_symlink(&self.path, "write").map_err(|e| self.session_error(e))?;
        }

        if entries.is_empty() {
            if self.path.exists() {
                fs::remove_file(&self.path).map_err(|e| self.session_error(e))?;
            }
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if parent != Path::new("") {
                fs::create_dir_all(parent).map_err(|e| self.session_error(e))?;
            }
        }

        let content =
            serde_json::to_string_pretty(&Value::Object(entries)).map_err(|e| self.session_error(e))?;
        fs::write(&self.path, content).map_err(|e| self.session_error(e))?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn read_flag(&self) -> Result<bool> {
        let entries = self.read_entries()?;
        Ok(entries.get(SESSION_KEY).and_then(Value::as_str) == Some("true"))
    }

    fn write_flag(&self) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(SESSION_KEY.to_string(), Value::String("true".to_string()));
        self.write_entries(entries)
    }

    fn clear_flag(&self) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.remove(SESSION_KEY);
        self.write_entries(entries)
    }
}
