use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn storage(err: impl std::fmt::Display) -> Self { Self::Storage(err.to_string()) }

    pub fn is_not_found(&self) -> bool { matches!(self, Self::NotFound(_)) }
}
