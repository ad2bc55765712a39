//! Distribution of signed contracts
//!
//! Production deployments push the signed PDF to a webhook and a cloud
//! folder. Here the destination is a [`DocumentSink`]; delivery problems
//! are reported to the caller but never undo a signature.

use crate::error::Result;
use std::future::Future;
use std::path::{Path, PathBuf};

/// A signed contract ready to leave the system.
#[derive(Debug, Clone)]
pub struct SignedDelivery {
    pub contract_id: String,
    pub email: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

pub trait DocumentSink: Send + Sync {
    fn deliver(&self, delivery: &SignedDelivery) -> impl Future<Output = Result<()>> + Send;
}

/// `Signed_Contract_<Vendor_Name>_<unix-millis>.pdf`, whitespace runs in
/// the name collapsed to `_` and path separators replaced.
pub fn signed_file_name(vendor_name: &str, unix_millis: i64) -> String {
    let name = vendor_name
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .replace(['/', '\\'], "_");
    format!("Signed_Contract_{}_{}.pdf", name, unix_millis)
}

/// Archives signed contracts into a local folder.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl DocumentSink for DirectorySink {
    async fn deliver(&self, delivery: &SignedDelivery) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        let path = self.dir.join(&delivery.file_name);
        tokio::fs::write(&path, &delivery.bytes).await?;
        log::info!(
            "Archived signed contract {} to {}",
            delivery.contract_id,
            path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_file_name() {
        assert_eq!(
            signed_file_name("Jane  van Doe", 1700000000000),
            "Signed_Contract_Jane_van_Doe_1700000000000.pdf"
        );
        assert_eq!(
            signed_file_name("A/B", 1),
            "Signed_Contract_A_B_1.pdf"
        );
    }
}
