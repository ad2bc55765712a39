use std::fmt;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuotaError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, QuotaError>;

/// Booth packages offered to exhibitors.
///
/// Every standard package carries its fixture quota inside its label as
/// `(N Fixtures)`; the custom package derives its quota from a unit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoothSize {
    #[default]
    OneStandard,
    OneAndHalfStandard,
    TwoStandard,
    TwoAndHalfStandard,
    ThreeStandard,
    AccessoryTwo,
    AccessoryThree,
    Custom,
}

impl BoothSize {
    pub const ALL: [BoothSize; 8] = [
        BoothSize::OneStandard,
        BoothSize::OneAndHalfStandard,
        BoothSize::TwoStandard,
        BoothSize::TwoAndHalfStandard,
        BoothSize::ThreeStandard,
        BoothSize::AccessoryTwo,
        BoothSize::AccessoryThree,
        BoothSize::Custom,
    ];

    /// The label shown in the booking form. This string is also what gets
    /// stored and later fed back into `calculate_quota`.
    pub fn label(self) -> &'static str {
        match self {
            BoothSize::OneStandard => "1 Standard || 13' x 8' || (4 Fixtures)",
            BoothSize::OneAndHalfStandard => "1.5 Standard || 20' x 8' || (6 Fixtures)",
            BoothSize::TwoStandard => "2 Standard || (8 Fixtures)",
            BoothSize::TwoAndHalfStandard => "2.5 Standard || (10 Fixtures)",
            BoothSize::ThreeStandard => "3 Standard || (12 Fixtures)",
            BoothSize::AccessoryTwo => "Accessory Booth (2 Fixtures)",
            BoothSize::AccessoryThree => "Accessory Booth (3 Fixtures)",
            BoothSize::Custom => "Custom Fixture",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        if crate::quota::is_custom_label(label) {
            return Some(BoothSize::Custom);
        }
        Self::ALL.into_iter().find(|size| size.label() == label)
    }

    pub fn is_custom(self) -> bool {
        self == BoothSize::Custom
    }
}

impl fmt::Display for BoothSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Physical booth furnishings that can be allocated to a booth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FixtureType {
    #[default]
    DisplayCounterLarge,
    DisplayCounterSmall,
    ShelvingUnit4ft,
    ShelvingUnit6ft,
    RectangularTable6ft,
    RectangularTable4ft,
    ExhibitionChair,
    ClothingRail,
    ShowcaseCabinet,
    BrochureRack,
    PowerDrop,
}

impl FixtureType {
    pub const ALL: [FixtureType; 11] = [
        FixtureType::DisplayCounterLarge,
        FixtureType::DisplayCounterSmall,
        FixtureType::ShelvingUnit4ft,
        FixtureType::ShelvingUnit6ft,
        FixtureType::RectangularTable6ft,
        FixtureType::RectangularTable4ft,
        FixtureType::ExhibitionChair,
        FixtureType::ClothingRail,
        FixtureType::ShowcaseCabinet,
        FixtureType::BrochureRack,
        FixtureType::PowerDrop,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FixtureType::DisplayCounterLarge => "Display Counter (Large)",
            FixtureType::DisplayCounterSmall => "Display Counter (Small)",
            FixtureType::ShelvingUnit4ft => "Shelving Unit (4ft)",
            FixtureType::ShelvingUnit6ft => "Shelving Unit (6ft)",
            FixtureType::RectangularTable6ft => "Rectangular Table (6ft)",
            FixtureType::RectangularTable4ft => "Rectangular Table (4ft)",
            FixtureType::ExhibitionChair => "Standard Exhibition Chair",
            FixtureType::ClothingRail => "Clothing Rail / Rack",
            FixtureType::ShowcaseCabinet => "Showcase Cabinet (Glass)",
            FixtureType::BrochureRack => "Brochure Rack (Floor Stand)",
            FixtureType::PowerDrop => "Power Drop (15 Amp)",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }
}

impl fmt::Display for FixtureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
