use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("Store error: {0}")]
    Store(#[from] contract_store::StoreError),
    #[error("PDF error: {0}")]
    Pdf(#[from] contract_pdf::PdfError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Draft generation failed: {0}")]
    Generation(String),
    #[error("Delivery failed: {0}")]
    Delivery(String),
    #[error("Contract not found: {0}")]
    NotFound(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
