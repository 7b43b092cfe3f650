use crate::{
    errors::{AppError, IOError},
    logging::logger::log_error,
    providers::{fs::path::get_roster_file_path, roster_writer::RosterWriter},
    shapes::roster::RosterEntry,
};
use async_trait::async_trait;
use serde_json::to_vec_pretty;
use std::path::{Path, PathBuf};
use tokio::fs::{create_dir_all, remove_file, write};

pub struct FileSystemRosterWriter(PathBuf);

impl FileSystemRosterWriter {
    pub fn new(base_path: &Path) -> Self {
        Self(base_path.to_path_buf())
    }
}

#[async_trait]
impl RosterWriter for FileSystemRosterWriter {
    async fn save(&self, roster: &RosterEntry) -> Result<(), AppError> {
        create_dir_all(&self.0)
            .await
            .map_err(|e| AppError::IO(IOError::from(e)))?;
        let json = to_vec_pretty(roster).map_err(|e| AppError::IO(IOError::from(e)))?;
        write(get_roster_file_path(&self.0), json)
            .await
            .map_err(|e| {
                log_error(format!("could not save roster: {}", e).as_str());
                AppError::IO(IOError::from(e))
            })
    }

    async fn clear(&self) -> Result<(), AppError> {
        let path = get_roster_file_path(&self.0);
        if !path.exists() {
            return Ok(());
        }
        remove_file(&path).await.map_err(|e| {
            log_error(format!("could not remove roster file: {}", e).as_str());
            AppError::IO(IOError::from(e))
        })
    }
}
