use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a contract is in its lifecycle. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractStatus {
    #[default]
    Draft,
    Sent,
    Signed,
}

impl ContractStatus {
    pub fn can_advance_to(self, next: ContractStatus) -> bool {
        next > self
    }

    pub fn is_final(self) -> bool {
        self == ContractStatus::Signed
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContractStatus::Draft => "draft",
            ContractStatus::Sent => "sent",
            ContractStatus::Signed => "signed",
        }
    }
}

impl fmt::Display for ContractStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
