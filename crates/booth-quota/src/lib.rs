//! Booth packages and fixture quotas for trade-show exhibitors.
//!
//! The quota engine maps a booth-size label (and an optional custom unit
//! count) to the number of fixtures included in the package, and keeps a
//! fixture allocation list consistent with that quota.

mod fixture_csv;
mod fixtures;
mod quota;
mod selection;
mod types;

pub use fixture_csv::load_fixtures_csv;
pub use fixtures::{FixtureAllocation, FixtureList, QuotaUsage};
pub use quota::{DEFAULT_QUOTA, FIXTURES_PER_CUSTOM_UNIT, calculate_quota, is_custom_label};
pub use selection::BoothSelection;
pub use types::*;
