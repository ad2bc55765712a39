use crate::types::FixtureType;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One row of a fixture allocation: a fixture type and how many of it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FixtureAllocation {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub fixture_type: String,
    pub quantity: u32,
}

impl FixtureAllocation {
    pub fn new(fixture_type: impl Into<String>, quantity: u32) -> Self {
        Self {
            fixture_type: fixture_type.into(),
            quantity,
        }
    }
}

/// How an allocation compares against the booth quota.
///
/// Informational only: allocating more than the quota is billed as
/// overage, allocating less leaves quota unused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaUsage {
    pub used: u32,
    pub quota: u32,
    /// Fixtures beyond the quota
    pub overage: u32,
    /// Quota not yet allocated
    pub unused: u32,
}

impl QuotaUsage {
    pub fn is_over_quota(&self) -> bool {
        self.overage > 0
    }

    /// Warning shown to the exhibitor when the allocation exceeds the quota.
    pub fn warning(&self) -> Option<String> {
        self.is_over_quota().then(|| {
            format!(
                "You have exceeded the standard fixture quota ({}). Extra charges may apply for {} additional fixtures.",
                self.quota, self.overage
            )
        })
    }
}

/// Ordered fixture allocation rows for a booth.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FixtureList {
    rows: Vec<FixtureAllocation>,
}

impl FixtureList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The form's starting state: one large display counter covering the quota.
    pub fn single(quota: u32) -> Self {
        Self {
            rows: vec![FixtureAllocation::new(
                FixtureType::default().label(),
                quota,
            )],
        }
    }

    pub fn rows(&self) -> &[FixtureAllocation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total(&self) -> u32 {
        self.rows
            .iter()
            .fold(0u32, |total, row| total.saturating_add(row.quantity))
    }

    /// Keep the common single-row case consistent with a new quota.
    ///
    /// With exactly one row its quantity becomes `quota`. With several rows
    /// nothing changes and the caller adjusts quantities by hand.
    pub fn rebalance(&mut self, quota: u32) {
        if let [only] = self.rows.as_mut_slice() {
            only.quantity = quota;
        }
    }

    /// Append a row sized to whatever quota is still unallocated, or 1 when
    /// the quota is already used up. Returns the new row's quantity.
    pub fn add_row(&mut self, fixture_type: impl Into<String>, quota: u32) -> u32 {
        let remaining = quota.saturating_sub(self.total());
        let quantity = if remaining == 0 { 1 } else { remaining };
        self.rows.push(FixtureAllocation::new(fixture_type, quantity));
        quantity
    }

    /// Remove a row. The last remaining row is never removed.
    pub fn remove_row(&mut self, index: usize) -> Option<FixtureAllocation> {
        if self.rows.len() <= 1 || index >= self.rows.len() {
            return None;
        }
        Some(self.rows.remove(index))
    }

    pub fn set_quantity(&mut self, index: usize, quantity: u32) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn set_type(&mut self, index: usize, fixture_type: impl Into<String>) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.fixture_type = fixture_type.into();
                true
            }
            None => false,
        }
    }

    pub fn usage(&self, quota: u32) -> QuotaUsage {
        let used = self.total();
        QuotaUsage {
            used,
            quota,
            overage: used.saturating_sub(quota),
            unused: quota.saturating_sub(used),
        }
    }

    /// Plain-text bullet list, one `- Type (Qty: N)` line per row.
    pub fn summary(&self) -> String {
        self.rows
            .iter()
            .map(|row| format!("- {} (Qty: {})", row.fixture_type, row.quantity))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl From<Vec<FixtureAllocation>> for FixtureList {
    fn from(rows: Vec<FixtureAllocation>) -> Self {
        Self { rows }
    }
}

impl FromIterator<FixtureAllocation> for FixtureList {
    fn from_iter<I: IntoIterator<Item = FixtureAllocation>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}
