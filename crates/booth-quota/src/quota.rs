//! Booth-size label to fixture quota.

use regex::Regex;
use std::sync::LazyLock;

/// Quota used when a label carries no readable fixture count.
pub const DEFAULT_QUOTA: u32 = 4;

/// Fixtures granted per custom booth unit.
pub const FIXTURES_PER_CUSTOM_UNIT: f64 = 4.0;

/// Labels that select the custom booth variant. "Custom Booth" is the label
/// older forms stored.
const CUSTOM_LABELS: [&str; 2] = ["Custom Fixture", "Custom Booth"];

static FIXTURE_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)\s+Fixtures\)").expect("static regex"));

pub fn is_custom_label(size_spec: &str) -> bool {
    CUSTOM_LABELS.contains(&size_spec.trim())
}

/// Resolve the fixture quota for a booth-size label.
///
/// Never fails. The custom variant with a readable, finite, non-negative
/// unit count yields `ceil(units * 4)`; otherwise the last `(N Fixtures)`
/// group in the label wins; anything else resolves to [`DEFAULT_QUOTA`].
pub fn calculate_quota(size_spec: &str, custom_units: Option<&str>) -> u32 {
    if is_custom_label(size_spec) {
        if let Some(units) = custom_units.and_then(parse_units) {
            return (units * FIXTURES_PER_CUSTOM_UNIT).ceil() as u32;
        }
    }

    FIXTURE_COUNT
        .captures_iter(size_spec)
        .last()
        .and_then(|caps| caps[1].parse::<u32>().ok())
        .unwrap_or_else(|| {
            log::debug!("No fixture count in booth size {size_spec:?}, using default quota");
            DEFAULT_QUOTA
        })
}

fn parse_units(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|units| units.is_finite() && *units >= 0.0)
}
