//! Contract body drafting
//!
//! The body text comes from an external collaborator (a language model
//! service in production). The runtime only hands it the vendor profile and
//! takes back a string; a failure is written into the body instead of
//! aborting the draft.

use crate::error::{Result, RuntimeError};
use chrono::NaiveDate;
use contract_store::VendorProfile;
use std::fmt::Write as _;
use std::future::Future;

/// Produces contract body text for a vendor.
pub trait DraftGenerator: Send + Sync {
    fn generate(&self, vendor: &VendorProfile) -> impl Future<Output = Result<String>> + Send;
}

/// Generate a body, turning failure into an `Error: ...` body text.
pub async fn draft_body(generator: &impl DraftGenerator, vendor: &VendorProfile) -> String {
    match generator.generate(vendor).await {
        Ok(body) if !body.trim().is_empty() => body,
        Ok(_) => {
            log::warn!("Draft generator returned no content for {}", vendor.company);
            "Error: No content generated.".to_string()
        }
        Err(e) => {
            log::error!("Draft generation failed for {}: {}", vendor.company, e);
            let message = match e {
                RuntimeError::Generation(message) => message,
                other => other.to_string(),
            };
            format!("Error: {}", message)
        }
    }
}

/// Offline generator filling a fixed agreement template.
#[derive(Debug, Clone)]
pub struct TemplateDraftGenerator {
    pub organizer: String,
    /// Agreement date; today when unset
    pub date: Option<NaiveDate>,
}

impl Default for TemplateDraftGenerator {
    fn default() -> Self {
        Self {
            organizer: "Event Organizer".to_string(),
            date: None,
        }
    }
}

impl TemplateDraftGenerator {
    pub fn render(&self, vendor: &VendorProfile) -> String {
        let mut body = String::new();
        // Writing into a String cannot fail
        let _ = self.write_body(vendor, &mut body);
        body.trim_end().to_string()
    }

    fn write_body(&self, vendor: &VendorProfile, body: &mut String) -> std::fmt::Result {
        let date = self
            .date
            .unwrap_or_else(|| chrono::Local::now().date_naive());
        let booth = &vendor.booth;
        let or_na = |value: &str| {
            if value.trim().is_empty() {
                "N/A".to_string()
            } else {
                value.to_string()
            }
        };

        writeln!(body, "# EXHIBITION SERVICE AGREEMENT\n")?;
        writeln!(body, "**Date:** {}\n", date.format("%B %-d, %Y"))?;

        writeln!(body, "## 1. AGREEMENT PARTIES")?;
        writeln!(
            body,
            "This agreement is between **{}** (\"Organizer\") and **{}**, located at {} (\"Vendor\").\n",
            self.organizer,
            vendor.company,
            or_na(&vendor.address)
        )?;

        writeln!(body, "## 2. EXHIBITOR INFORMATION")?;
        writeln!(body, "* **Exhibitor Type:** {}", exhibitor_label(vendor))?;
        writeln!(body, "* **Company:** {}", vendor.company)?;
        for brand in &vendor.brands {
            match brand.showroom_name.as_deref() {
                Some(showroom) => writeln!(body, "* **Brand:** {} ({})", brand.brand_name, showroom)?,
                None => writeln!(body, "* **Brand:** {}", brand.brand_name)?,
            }
        }
        writeln!(body)?;

        writeln!(body, "## 3. CONTACT DETAILS")?;
        for contact in &vendor.contacts {
            write!(body, "* **{}**", contact.name)?;
            if let Some(title) = contact.title.as_deref() {
                write!(body, ", {}", title)?;
            }
            if !contact.email.is_empty() {
                write!(body, " | {}", contact.email)?;
            }
            if let Some(phone) = contact.phone.as_deref() {
                write!(body, " | {}", phone)?;
            }
            writeln!(body)?;
        }
        if vendor.contacts.is_empty() {
            writeln!(body, "* {}", or_na(vendor.contact_email()))?;
        }
        writeln!(body)?;

        writeln!(body, "## 4. BOOTH ALLOCATION & FIXTURES")?;
        writeln!(body, "* **Booth Package:** {}", booth.final_description())?;
        if let Some(dimensions) = booth.custom_dimensions.as_deref() {
            writeln!(body, "* **Custom Requirements:** {}", dimensions)?;
        }
        let categories = vendor.categories_line();
        writeln!(
            body,
            "* **Categories:** {}",
            if categories.is_empty() { "General" } else { categories.as_str() }
        )?;
        writeln!(body, "\n**Selected Fixtures:**")?;
        writeln!(body, "{}", booth.fixtures.summary())?;
        if let Some(warning) = booth.usage().warning() {
            writeln!(body, "\n{}", warning)?;
        }
        writeln!(body)?;

        writeln!(body, "## 5. SPECIAL REQUIREMENTS")?;
        writeln!(
            body,
            "{}\n",
            vendor.special_requirements.as_deref().unwrap_or("None")
        )?;

        writeln!(body, "## 6. TERMS")?;
        writeln!(
            body,
            "Payment is due in full on invoice. Standard terms and conditions apply. The Vendor agrees to indemnify the Organizer against all claims arising from the Vendor's exhibit."
        )
    }
}

fn exhibitor_label(vendor: &VendorProfile) -> &'static str {
    match vendor.exhibitor_type {
        contract_store::ExhibitorType::Brand => "Brand",
        contract_store::ExhibitorType::MultiLineShowroom => "Multi-line showroom",
    }
}

impl DraftGenerator for TemplateDraftGenerator {
    async fn generate(&self, vendor: &VendorProfile) -> Result<String> {
        if vendor.company.trim().is_empty() {
            return Err(RuntimeError::Generation(
                "vendor profile has no company name".to_string(),
            ));
        }
        Ok(self.render(vendor))
    }
}
