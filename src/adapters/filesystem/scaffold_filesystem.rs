//! `ScaffoldFilesystem` implementation for `FilesystemStore`.

use std::fs;

use crate::domain::AppError;
use crate::ports::ScaffoldFilesystem;

use super::FilesystemStore;

impl ScaffoldFilesystem for FilesystemStore {
    fn ensure_root(&self) -> Result<(), AppError> {
        fs::create_dir_all(self.root()).map_err(AppError::from)
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path)?;
        fs::create_dir_all(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path)?;
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn set_executable(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&full_path).map_err(AppError::from)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&full_path, perms).map_err(AppError::from)?;
        }
        #[cfg(not(unix))]
        let _ = full_path;
        Ok(())
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve_path(path).map(|full_path| full_path.exists()).unwrap_or(false)
    }

    fn is_dir(&self, path: &str) -> bool {
        self.resolve_path(path).map(|full_path| full_path.is_dir()).unwrap_or(false)
    }
}
