//! Persisted anonymous identity
//!
//! The owner id is generated on first use and stored in a small file so the
//! same list is found again on the next run.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::config::Config;
use crate::domain::entities::OwnerId;
use crate::domain::ports::{IdentityProvider, StaticIdentity};
use crate::error::IdentityError;

const IDENTITY_FILE_NAME: &str = "user_id";

/// Identity stored in a plain text file
#[derive(Debug, Clone)]
pub struct FileIdentityProvider {
    path: PathBuf,
}

impl FileIdentityProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/speedlist/user_id` for the current platform
    pub fn default_path() -> Result<PathBuf, IdentityError> {
        ProjectDirs::from("dev", "speedlist", "speedlist")
            .map(|dirs| dirs.config_dir().join(IDENTITY_FILE_NAME))
            .ok_or(IdentityError::NoConfigDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_existing(&self) -> Result<Option<OwnerId>, IdentityError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let id = contents.trim();
                if id.is_empty() {
                    tracing::warn!(path = %self.path.display(), "Identity file is empty");
                    Ok(None)
                } else {
                    Ok(Some(OwnerId::from(id)))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn persist(&self, id: &OwnerId) -> Result<(), IdentityError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, id.as_str())?;
        Ok(())
    }
}

impl IdentityProvider for FileIdentityProvider {
    fn owner_id(&self) -> Result<OwnerId, IdentityError> {
        if let Some(id) = self.read_existing()? {
            return Ok(id);
        }

        let id = OwnerId::generate();
        self.persist(&id)?;
        tracing::info!(path = %self.path.display(), "Created anonymous identity");
        Ok(id)
    }
}

/// Resolve the owner id for this run
///
/// An explicit `SPEEDLIST_USER_ID` wins; otherwise the identity file
/// (configured or platform default) is read or created.
pub fn resolve_owner(config: &Config) -> Result<OwnerId, IdentityError> {
    if let Some(id) = &config.user_id {
        return StaticIdentity(OwnerId::from(id.as_str())).owner_id();
    }

    let path = match &config.identity_file {
        Some(path) => path.clone(),
        None => FileIdentityProvider::default_path()?,
    };
    FileIdentityProvider::new(path).owner_id()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_and_persists_on_first_use() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("user_id");
        let provider = FileIdentityProvider::new(&path);

        let first = provider.owner_id().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), first.as_str());
        assert_eq!(provider.owner_id().unwrap(), first);
    }

    #[test]
    fn reuses_existing_identity() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_id");
        fs::write(&path, "anon-existing\n").unwrap();

        let id = FileIdentityProvider::new(&path).owner_id().unwrap();

        assert_eq!(id.as_str(), "anon-existing");
    }

    #[test]
    fn empty_file_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_id");
        fs::write(&path, "  \n").unwrap();

        let id = FileIdentityProvider::new(&path).owner_id().unwrap();

        assert!(!id.as_str().is_empty());
        assert_eq!(fs::read_to_string(&path).unwrap(), id.as_str());
    }

    #[test]
    fn explicit_user_id_wins() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            user_id: Some("anon-configured".to_string()),
            identity_file: Some(dir.path().join("user_id")),
            ..Config::default()
        };

        let id = resolve_owner(&config).unwrap();

        assert_eq!(id.as_str(), "anon-configured");
        assert!(!dir.path().join("user_id").exists());
    }

    #[test]
    fn configured_identity_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_id");
        let config = Config {
            identity_file: Some(path.clone()),
            ..Config::default()
        };

        let first = resolve_owner(&config).unwrap();
        let second = resolve_owner(&config).unwrap();

        assert_eq!(first, second);
        assert!(path.exists());
    }
}
