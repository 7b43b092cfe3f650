use crate::{errors::AppError, shapes::roster::RosterEntry};
use async_trait::async_trait;

#[async_trait]
pub trait RosterReader {
    async fn read(&self) -> Result<RosterEntry, AppError>;
}
