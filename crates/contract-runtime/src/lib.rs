//! Contract workflow runtime
//!
//! Commands go in over one channel, updates come back over another, and a
//! single worker task runs them one at a time against a
//! [`ContractService`].

mod error;
mod generator;
mod service;
mod sheet;
mod sink;
mod worker;

use chrono::{DateTime, Utc};
use std::path::PathBuf;

pub use error::{Result, RuntimeError};
pub use generator::{DraftGenerator, TemplateDraftGenerator, draft_body};
pub use service::{ContractService, SignOutcome};
pub use sheet::contract_sheet;
pub use sink::{DirectorySink, DocumentSink, SignedDelivery, signed_file_name};
pub use worker::worker_task;

// Re-export types from library crates
pub use contract_pdf::{LayoutOptions, SignatureImage};
pub use contract_store::{ContractDocument, ContractStatus, VendorProfile};

/// Commands sent to the worker
#[derive(Debug)]
pub enum ContractCommand {
    Draft {
        vendor: VendorProfile,
    },
    Send {
        id: String,
    },
    Sign {
        id: String,
        signature: SignatureImage,
    },
    Render {
        id: String,
        output_path: PathBuf,
    },
    List,
}

/// Updates sent back from the worker
#[derive(Debug, Clone)]
pub enum ContractUpdate {
    Drafted {
        id: String,
        vendor_name: String,
    },
    Sent {
        id: String,
    },
    Signed {
        id: String,
        page_count: usize,
        delivered: bool,
    },
    Rendered {
        id: String,
        path: PathBuf,
        page_count: usize,
    },
    Listed {
        contracts: Vec<ContractSummary>,
    },
    Error {
        message: String,
    },
}

/// One line of a contract listing
#[derive(Debug, Clone, PartialEq)]
pub struct ContractSummary {
    pub id: String,
    pub vendor_name: String,
    pub company: String,
    pub status: ContractStatus,
    pub created_at: DateTime<Utc>,
    pub signed_at: Option<DateTime<Utc>>,
}

impl From<&ContractDocument> for ContractSummary {
    fn from(contract: &ContractDocument) -> Self {
        Self {
            id: contract.id.clone(),
            vendor_name: contract.vendor_name().to_string(),
            company: contract.company().to_string(),
            status: contract.status,
            created_at: contract.created_at,
            signed_at: contract.signed_at,
        }
    }
}
