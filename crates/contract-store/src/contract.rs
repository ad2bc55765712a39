use crate::status::ContractStatus;
use crate::types::{Result, StoreError};
use crate::vendor::VendorProfile;
use chrono::{DateTime, Utc};
use contract_pdf::SignatureImage;
use serde::{Deserialize, Serialize};

const ID_PREFIX: &str = "contract_";
const ID_SUFFIX_LEN: usize = 9;
const ID_ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a fresh `contract_xxxxxxxxx` identifier.
pub fn new_contract_id() -> String {
    let mut bits = uuid::Uuid::new_v4().as_u128();
    let mut id = String::with_capacity(ID_PREFIX.len() + ID_SUFFIX_LEN);
    id.push_str(ID_PREFIX);
    for _ in 0..ID_SUFFIX_LEN {
        id.push(ID_ALPHABET[(bits % 36) as usize] as char);
        bits /= 36;
    }
    id
}

/// A vendor contract. Created as a draft with generated body text; signed
/// at most once, after which it never changes again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractDocument {
    pub id: String,
    pub vendor: VendorProfile,
    pub status: ContractStatus,
    /// Markdown-ish contract text
    pub body: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<SignatureImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signed_at: Option<DateTime<Utc>>,
}

impl ContractDocument {
    pub fn draft(vendor: VendorProfile, body: impl Into<String>) -> Self {
        Self {
            id: new_contract_id(),
            vendor,
            status: ContractStatus::Draft,
            body: body.into(),
            created_at: Utc::now(),
            signature: None,
            signed_at: None,
        }
    }

    pub fn vendor_name(&self) -> &str {
        self.vendor.display_name()
    }

    pub fn company(&self) -> &str {
        &self.vendor.company
    }

    pub fn email(&self) -> &str {
        self.vendor.contact_email()
    }

    pub fn is_signed(&self) -> bool {
        self.status.is_final()
    }

    /// Record that the contract went out to the vendor for review.
    pub fn mark_sent(&mut self) -> Result<()> {
        self.advance(ContractStatus::Sent)
    }

    /// Attach the vendor's signature. Allowed once, from draft or sent.
    pub fn sign(&mut self, signature: SignatureImage, at: DateTime<Utc>) -> Result<()> {
        if self.is_signed() {
            return Err(StoreError::Immutable(self.id.clone()));
        }
        self.advance(ContractStatus::Signed)?;
        self.signature = Some(signature);
        self.signed_at = Some(at);
        Ok(())
    }

    fn advance(&mut self, next: ContractStatus) -> Result<()> {
        if !self.status.can_advance_to(next) {
            return Err(StoreError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}
