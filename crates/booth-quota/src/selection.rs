use crate::fixtures::{FixtureList, QuotaUsage};
use crate::quota::{calculate_quota, is_custom_label};
use crate::types::BoothSize;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Booth package chosen by an exhibitor together with its fixture rows.
///
/// Changing the package or the custom unit count recomputes the quota and
/// rebalances a single-row allocation to match it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoothSelection {
    pub booth_size: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub custom_units: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub custom_dimensions: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fixtures: FixtureList,
}

impl Default for BoothSelection {
    fn default() -> Self {
        let size = BoothSize::default();
        Self {
            booth_size: size.label().to_string(),
            custom_units: None,
            custom_dimensions: None,
            fixtures: FixtureList::single(calculate_quota(size.label(), None)),
        }
    }
}

impl BoothSelection {
    pub fn quota(&self) -> u32 {
        calculate_quota(&self.booth_size, self.custom_units.as_deref())
    }

    pub fn is_custom(&self) -> bool {
        is_custom_label(&self.booth_size)
    }

    pub fn usage(&self) -> QuotaUsage {
        self.fixtures.usage(self.quota())
    }

    pub fn select_booth_size(&mut self, booth_size: impl Into<String>) -> u32 {
        self.booth_size = booth_size.into();
        self.refresh_quota()
    }

    pub fn set_custom_units(&mut self, units: Option<String>) -> u32 {
        self.custom_units = units.filter(|u| !u.trim().is_empty());
        self.refresh_quota()
    }

    pub fn set_custom_dimensions(&mut self, dimensions: Option<String>) {
        self.custom_dimensions = dimensions.filter(|d| !d.trim().is_empty());
    }

    pub fn add_fixture(&mut self, fixture_type: impl Into<String>) -> u32 {
        let quota = self.quota();
        self.fixtures.add_row(fixture_type, quota)
    }

    /// Package description carried into the contract.
    ///
    /// Standard packages use their label verbatim; the custom package is
    /// spelled out as `units Custom || dimensions || (N Fixtures)`.
    pub fn final_description(&self) -> String {
        if !self.is_custom() {
            return self.booth_size.clone();
        }
        let units = self.custom_units.as_deref().unwrap_or("Custom");
        let dimensions = self
            .custom_dimensions
            .as_deref()
            .unwrap_or("Custom Dimensions");
        format!("{units} Custom || {dimensions} || ({} Fixtures)", self.quota())
    }

    fn refresh_quota(&mut self) -> u32 {
        let quota = self.quota();
        self.fixtures.rebalance(quota);
        quota
    }
}
