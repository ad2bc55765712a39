//! Contract persistence
//!
//! Storage sits behind [`ContractStore`] so the backend can be swapped per
//! environment: [`MemoryStore`] for tests and one-shot runs,
//! [`JsonFileStore`] for a local operator keeping contracts on disk.

use crate::contract::ContractDocument;
use crate::types::{Result, StoreError};
use std::collections::BTreeMap;
use std::future::Future;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Keyed contract storage.
pub trait ContractStore: Send + Sync {
    fn get(&self, id: &str) -> impl Future<Output = Result<Option<ContractDocument>>> + Send;

    /// Insert or replace by id. Signed contracts are immutable and status
    /// never moves backwards.
    fn put(&self, contract: ContractDocument) -> impl Future<Output = Result<()>> + Send;

    /// All contracts, oldest first
    fn list(&self) -> impl Future<Output = Result<Vec<ContractDocument>>> + Send;
}

/// Reject writes that would rewrite a signed contract or undo a transition.
pub fn check_replace(existing: &ContractDocument, next: &ContractDocument) -> Result<()> {
    check_signature_present(next)?;
    if existing.is_signed() {
        if existing == next {
            return Ok(());
        }
        return Err(StoreError::Immutable(existing.id.clone()));
    }
    if next.status < existing.status {
        return Err(StoreError::InvalidTransition {
            from: existing.status,
            to: next.status,
        });
    }
    Ok(())
}

/// A signed contract always carries its signature image and timestamp.
fn check_signature_present(contract: &ContractDocument) -> Result<()> {
    if contract.is_signed() && (contract.signature.is_none() || contract.signed_at.is_none()) {
        return Err(StoreError::MissingSignature(contract.id.clone()));
    }
    Ok(())
}

fn sort_oldest_first(contracts: &mut [ContractDocument]) {
    contracts.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
}

/// In-process store; contents vanish with the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contracts: Mutex<BTreeMap<String, ContractDocument>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContractStore for MemoryStore {
    async fn get(&self, id: &str) -> Result<Option<ContractDocument>> {
        Ok(self.contracts.lock().await.get(id).cloned())
    }

    async fn put(&self, contract: ContractDocument) -> Result<()> {
        check_signature_present(&contract)?;
        let mut contracts = self.contracts.lock().await;
        if let Some(existing) = contracts.get(&contract.id) {
            check_replace(existing, &contract)?;
        }
        log::debug!("Stored contract {} ({})", contract.id, contract.status);
        contracts.insert(contract.id.clone(), contract);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<ContractDocument>> {
        let mut all: Vec<_> = self.contracts.lock().await.values().cloned().collect();
        sort_oldest_first(&mut all);
        Ok(all)
    }
}

/// All contracts in one JSON array file.
///
/// Every write rewrites the whole file through a temporary sibling and a
/// rename, so readers never see a half-written file. A missing file reads
/// as an empty store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<Vec<ContractDocument>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(Vec::new());
        }
        let contracts = tokio::task::spawn_blocking(move || {
            serde_json::from_slice::<Vec<ContractDocument>>(&bytes)
        })
        .await??;
        Ok(contracts)
    }

    async fn write_all(&self, contracts: Vec<ContractDocument>) -> Result<()> {
        let json =
            tokio::task::spawn_blocking(move || serde_json::to_vec_pretty(&contracts)).await??;

        let mut tmp_name = self.path.file_name().unwrap_or_default().to_os_string();
        tmp_name.push(".tmp");
        let tmp_path = self.path.with_file_name(tmp_name);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&tmp_path, json).await?;
        tokio::fs::rename(&tmp_path, &self.path).await?;
        Ok(())
    }
}

impl ContractStore for JsonFileStore {
    async fn get(&self, id: &str) -> Result<Option<ContractDocument>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_all().await?.into_iter().find(|c| c.id == id))
    }

    async fn put(&self, contract: ContractDocument) -> Result<()> {
        check_signature_present(&contract)?;
        let _guard = self.lock.lock().await;
        let mut contracts = self.read_all().await?;
        match contracts.iter_mut().find(|c| c.id == contract.id) {
            Some(existing) => {
                check_replace(existing, &contract)?;
                *existing = contract;
            }
            None => contracts.push(contract),
        }
        self.write_all(contracts).await?;
        log::debug!("Saved contract store to {}", self.path.display());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<ContractDocument>> {
        let _guard = self.lock.lock().await;
        let mut all = self.read_all().await?;
        sort_oldest_first(&mut all);
        Ok(all)
    }
}
