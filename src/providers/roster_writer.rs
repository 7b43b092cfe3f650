use crate::{errors::AppError, shapes::roster::RosterEntry};
use async_trait::async_trait;

#[async_trait]
pub trait RosterWriter {
    async fn save(&self, roster: &RosterEntry) -> Result<(), AppError>;
    async fn clear(&self) -> Result<(), AppError>;
}
