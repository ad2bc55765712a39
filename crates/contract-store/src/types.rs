use crate::status::ContractStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Contract not found: {0}")]
    NotFound(String),
    #[error("Contract {0} is signed and can no longer be changed")]
    Immutable(String),
    #[error("Contract {0} is marked signed but has no signature")]
    MissingSignature(String),
    #[error("Cannot move contract from {from} to {to}")]
    InvalidTransition {
        from: ContractStatus,
        to: ContractStatus,
    },
    #[error("Unsupported vendor schema version: {0}")]
    UnsupportedSchema(u32),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, StoreError>;
