//! Contract lifecycle and storage.
//!
//! A [`ContractDocument`] moves `draft → sent → signed` and is frozen once
//! signed. Vendor data is kept in one versioned schema ([`VendorProfile`]);
//! older records are normalized on the way in through [`VendorRecord`].

mod contract;
mod status;
mod store;
mod types;
mod vendor;

pub use contract::{ContractDocument, new_contract_id};
pub use status::ContractStatus;
pub use store::{ContractStore, JsonFileStore, MemoryStore, check_replace};
pub use types::*;
pub use vendor::*;
