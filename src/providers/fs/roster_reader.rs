use crate::{
    errors::{AppError, IOError},
    providers::{fs::path::get_roster_file_path, roster_reader::RosterReader},
    shapes::roster::RosterEntry,
};
use async_trait::async_trait;
use serde_json::from_str;
use std::path::{Path, PathBuf};
use tokio::fs::read_to_string;

pub struct FileSystemRosterReader(PathBuf);

impl FileSystemRosterReader {
    pub fn new(base_path: &Path) -> Self {
        Self(base_path.to_path_buf())
    }
}

#[async_trait]
impl RosterReader for FileSystemRosterReader {
    async fn read(&self) -> Result<RosterEntry, AppError> {
        let path = get_roster_file_path(&self.0);
        if !path.exists() {
            return Ok(RosterEntry::default());
        }
        let content = read_to_string(&path)
            .await
            .map_err(|e| AppError::IO(IOError::from(e)))?;
        from_str::<RosterEntry>(&content).map_err(|e| AppError::IO(IOError::from(e)))
    }
}
