use contract_pdf::constants::DEFAULT_TITLE;
use contract_pdf::{ContractSheet, MetadataField, SignatureStamp};
use contract_store::ContractDocument;

/// Printable form of a stored contract: title, record and vendor lines,
/// body and the signature once there is one.
pub fn contract_sheet(contract: &ContractDocument) -> ContractSheet {
    let signature = match (&contract.signature, contract.signed_at) {
        (Some(image), Some(signed_at)) => Some(SignatureStamp {
            image: image.clone(),
            signed_at,
        }),
        _ => None,
    };

    ContractSheet {
        title: DEFAULT_TITLE.to_string(),
        metadata: vec![
            MetadataField::new("Contract ID", &contract.id),
            MetadataField::new("Date", contract.created_at.format("%Y-%m-%d").to_string()),
            MetadataField::new("Vendor", contract.vendor_name()),
            MetadataField::new("Company", contract.company()),
            MetadataField::new("Email", contract.email()),
        ],
        body: contract.body.clone(),
        signature,
    }
}
