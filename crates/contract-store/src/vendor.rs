//! Vendor profile schema
//!
//! Profiles are stored in schema v2. Records written by the first version
//! of the intake form (one brand, one primary contact plus an optional
//! second one, a single fixture type) are still accepted and converted on
//! the way in.

use crate::types::{Result, StoreError};
use booth_quota::{BoothSelection, FixtureAllocation, FixtureList, FixtureType};
use serde::{Deserialize, Deserializer, Serialize};

pub const CURRENT_SCHEMA_VERSION: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ExhibitorType {
    #[default]
    #[serde(rename = "Brand")]
    Brand,
    #[serde(rename = "Multi-line showroom")]
    MultiLineShowroom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaymentMode {
    #[default]
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Bank Transfer")]
    BankTransfer,
    #[serde(rename = "Check")]
    Check,
    #[serde(rename = "Cash")]
    Cash,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BrandInfo {
    pub brand_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub showroom_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl BrandInfo {
    pub fn is_blank(&self) -> bool {
        self.brand_name.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl ContactInfo {
    pub fn is_blank(&self) -> bool {
        self.name.trim().is_empty() && self.email.trim().is_empty()
    }
}

/// Vendor data in the current (v2) schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorProfile {
    pub schema_version: u32,
    #[serde(default)]
    pub exhibitor_type: ExhibitorType,
    pub company: String,
    #[serde(default)]
    pub brands: Vec<BrandInfo>,
    #[serde(default)]
    pub contacts: Vec<ContactInfo>,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_category: Option<String>,
    #[serde(default)]
    pub booth: BoothSelection,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special_requirements: Option<String>,
    #[serde(default)]
    pub payment_mode: PaymentMode,
}

impl Default for VendorProfile {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            exhibitor_type: ExhibitorType::default(),
            company: String::new(),
            brands: Vec::new(),
            contacts: Vec::new(),
            email: String::new(),
            phone: None,
            address: String::new(),
            categories: Vec::new(),
            other_category: None,
            booth: BoothSelection::default(),
            event_date: None,
            special_requirements: None,
            payment_mode: PaymentMode::default(),
        }
    }
}

impl VendorProfile {
    pub fn primary_contact(&self) -> Option<&ContactInfo> {
        self.contacts.first()
    }

    /// Name printed on the contract: the primary contact, else the company.
    pub fn display_name(&self) -> &str {
        self.primary_contact()
            .map(|c| c.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.company)
    }

    /// Contract email: the profile's own, else the primary contact's.
    pub fn contact_email(&self) -> &str {
        if !self.email.trim().is_empty() {
            return &self.email;
        }
        self.primary_contact().map(|c| c.email.as_str()).unwrap_or("")
    }

    /// Categories joined for display, with the free-text "other" appended.
    pub fn categories_line(&self) -> String {
        let mut line = self.categories.join(", ");
        if let Some(other) = self.other_category.as_deref().filter(|o| !o.trim().is_empty()) {
            if line.is_empty() {
                line = other.to_string();
            } else {
                line = format!("{} ({})", line, other);
            }
        }
        line
    }

    /// Drop blank brand and contact rows left over from the form.
    pub fn normalize(mut self) -> Self {
        self.brands.retain(|b| !b.is_blank());
        self.contacts.retain(|c| !c.is_blank());
        self
    }
}

/// Second contact block of the legacy form
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegacyContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country_code: String,
}

/// Vendor data as written by the first version of the intake form.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyVendorDetails {
    pub company: String,
    pub name: String,
    #[serde(default)]
    pub brand_name: String,
    #[serde(default)]
    pub showroom_name: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub other_category: Option<String>,
    #[serde(default)]
    pub booth_size: Option<String>,
    #[serde(default)]
    pub final_booth_size: Option<String>,
    #[serde(default)]
    pub custom_booth_size: Option<String>,
    #[serde(default)]
    pub custom_booth_requirements: Option<String>,
    #[serde(default)]
    pub selected_fixtures: Option<Vec<FixtureAllocation>>,
    #[serde(default)]
    pub additional_contact: Option<LegacyContact>,
    #[serde(default)]
    pub fixture: Option<String>,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub fixture_quantity: Option<u32>,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub special_requirements: Option<String>,
}

/// Legacy forms stored the quantity as either a number or a string.
fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<u32>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u32),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Number(n)) => Some(n),
        Some(Raw::Text(s)) => s.trim().parse().ok(),
        None => None,
    })
}

fn phone_with_code(code: &str, phone: &str) -> Option<String> {
    let phone = phone.trim();
    if phone.is_empty() {
        return None;
    }
    let code = code.trim();
    Some(if code.is_empty() {
        phone.to_string()
    } else {
        format!("{} {}", code, phone)
    })
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl LegacyVendorDetails {
    pub fn into_profile(self) -> VendorProfile {
        let phone = phone_with_code(&self.country_code, &self.phone);

        let brands = vec![BrandInfo {
            brand_name: self.brand_name,
            showroom_name: non_blank(self.showroom_name),
            website: non_blank(self.website),
            instagram: non_blank(self.instagram),
        }];

        let mut contacts = vec![ContactInfo {
            name: self.name,
            email: self.email.clone(),
            title: non_blank(self.title),
            phone: phone.clone(),
        }];
        if let Some(extra) = self.additional_contact {
            contacts.push(ContactInfo {
                name: extra.name,
                email: extra.email,
                title: None,
                phone: phone_with_code(&extra.country_code, &extra.phone),
            });
        }

        let fixtures = match self.selected_fixtures {
            Some(rows) if !rows.is_empty() => FixtureList::from(rows),
            _ => FixtureList::from(vec![FixtureAllocation::new(
                self.fixture
                    .filter(|f| !f.trim().is_empty())
                    .unwrap_or_else(|| FixtureType::default().label().to_string()),
                self.fixture_quantity.unwrap_or(booth_quota::DEFAULT_QUOTA),
            )]),
        };

        let booth = BoothSelection {
            booth_size: self
                .booth_size
                .or(self.final_booth_size)
                .unwrap_or_else(|| BoothSelection::default().booth_size),
            custom_units: non_blank(self.custom_booth_size),
            custom_dimensions: non_blank(self.custom_booth_requirements),
            fixtures,
        };

        VendorProfile {
            schema_version: CURRENT_SCHEMA_VERSION,
            exhibitor_type: ExhibitorType::Brand,
            company: self.company,
            brands,
            contacts,
            email: self.email,
            phone,
            address: self.address,
            categories: self.categories,
            other_category: non_blank(self.other_category),
            booth,
            event_date: non_blank(self.event_date),
            special_requirements: non_blank(self.special_requirements),
            payment_mode: PaymentMode::default(),
        }
        .normalize()
    }
}

/// A vendor record in any supported schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum VendorRecord {
    Current(VendorProfile),
    Legacy(LegacyVendorDetails),
}

impl VendorRecord {
    /// Convert to the current schema.
    pub fn normalize(self) -> Result<VendorProfile> {
        match self {
            VendorRecord::Current(profile) => {
                if profile.schema_version != CURRENT_SCHEMA_VERSION {
                    return Err(StoreError::UnsupportedSchema(profile.schema_version));
                }
                Ok(profile.normalize())
            }
            VendorRecord::Legacy(details) => {
                log::debug!("Migrating legacy vendor record for {}", details.company);
                Ok(details.into_profile())
            }
        }
    }

    /// Parse a JSON vendor record of any schema version into a v2 profile.
    pub fn from_json(json: &str) -> Result<VendorProfile> {
        let record: VendorRecord = serde_json::from_str(json)?;
        record.normalize()
    }
}

impl From<VendorProfile> for VendorRecord {
    fn from(profile: VendorProfile) -> Self {
        VendorRecord::Current(profile)
    }
}
