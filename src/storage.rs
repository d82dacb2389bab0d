//! Persistence of the session token between runs

use crate::error::{ApiError, Result};
use std::io::Write;
use std::sync::Mutex;

pub trait TokenStore: Send + Sync {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str) -> Result<()>;
    fn clear(&self) -> Result<()>;
}

/// Browser `localStorage`, keyed like the rest of the site expects.
#[cfg(feature = "web")]
pub struct LocalTokenStore;

#[cfg(feature = "web")]
impl LocalTokenStore {
    fn storage() -> Result<web_sys::Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or_else(|| ApiError::Storage("localStorage unavailable".to_string()))
    }
}

#[cfg(feature = "web")]
impl TokenStore for LocalTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()
            .ok()?
            .get_item(crate::config::TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) -> Result<()> {
        Self::storage()?
            .set_item(crate::config::TOKEN_STORAGE_KEY, token)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }

    fn clear(&self) -> Result<()> {
        Self::storage()?
            .remove_item(crate::config::TOKEN_STORAGE_KEY)
            .map_err(|e| ApiError::Storage(format!("{:?}", e)))
    }
}

/// Plain file holding the token, for the terminal client.
pub struct FileTokenStore {
    path: std::path::PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<std::path::PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[cfg(feature = "cli")]
    pub fn default_path() -> std::path::PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join(".thanks")
            .join(crate::config::TOKEN_STORAGE_KEY)
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        let token = std::fs::read_to_string(&self.path).ok()?;
        let token = token.trim();
        (!token.is_empty()).then(|| token.to_string())
    }

    fn save(&self, token: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ApiError::Storage(e.to_string()))?;
        }
        open_private(&self.path)
            .and_then(|mut file| file.write_all(token.as_bytes()))
            .map_err(|e| ApiError::Storage(e.to_string()))?;
        log::debug!("Token saved to {}", self.path.display());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::Storage(e.to_string())),
        }
    }
}

/// Opens `path` for writing, readable by the owner only on unix. An existing
/// file with looser permissions is tightened.
fn open_private(path: &std::path::Path) -> std::io::Result<std::fs::File> {
    let mut options = std::fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let file = options.open(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }
    Ok(file)
}

#[derive(Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: Mutex::new(Some(token.to_string())),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().ok()?.clone()
    }

    fn save(&self, token: &str) -> Result<()> {
        let mut slot = self
            .token
            .lock()
            .map_err(|e| ApiError::Storage(e.to_string()))?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self
            .token
            .lock()
            .map_err(|e| ApiError::Storage(e.to_string()))?;
        *slot = None;
        Ok(())
    }
}
