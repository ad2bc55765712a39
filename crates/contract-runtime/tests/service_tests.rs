use chrono::{NaiveDate, TimeZone, Utc};
use contract_pdf::paginate_standard;
use contract_runtime::*;
use contract_store::{ContactInfo, MemoryStore, StoreError};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use tempfile::TempDir;

struct FailingGenerator;

impl DraftGenerator for FailingGenerator {
    async fn generate(&self, _vendor: &VendorProfile) -> Result<String> {
        Err(RuntimeError::Generation(
            "Failed to connect to AI service".to_string(),
        ))
    }
}

struct FailingSink;

impl DocumentSink for FailingSink {
    async fn deliver(&self, _delivery: &SignedDelivery) -> Result<()> {
        Err(RuntimeError::Delivery("webhook unreachable".to_string()))
    }
}

fn generator() -> TemplateDraftGenerator {
    TemplateDraftGenerator {
        organizer: "Expo Org".to_string(),
        date: NaiveDate::from_ymd_opt(2025, 9, 1),
    }
}

fn vendor() -> VendorProfile {
    VendorProfile {
        company: "Acme Displays".to_string(),
        contacts: vec![ContactInfo {
            name: "Jane Doe".to_string(),
            email: "jane@acme.test".to_string(),
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn signature_png() -> SignatureImage {
    let img = RgbaImage::from_pixel(120, 40, Rgba([0, 0, 0, 255]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    SignatureImage::new(bytes)
}

#[tokio::test]
async fn test_draft_stores_generated_body() {
    let archive = TempDir::new().unwrap();
    let service = ContractService::new(
        MemoryStore::new(),
        generator(),
        DirectorySink::new(archive.path()),
    );

    let contract = service.draft(vendor()).await.unwrap();
    assert_eq!(contract.status, ContractStatus::Draft);
    assert!(contract.body.starts_with("# EXHIBITION SERVICE AGREEMENT"));
    assert!(contract.body.contains("**Date:** September 1, 2025"));
    assert!(contract.body.contains("- Display Counter (Large) (Qty: 4)"));

    assert_eq!(service.load(&contract.id).await.unwrap(), contract);
}

#[tokio::test]
async fn test_failed_generation_becomes_error_body() {
    let archive = TempDir::new().unwrap();
    let service = ContractService::new(
        MemoryStore::new(),
        FailingGenerator,
        DirectorySink::new(archive.path()),
    );

    let contract = service.draft(vendor()).await.unwrap();
    assert_eq!(contract.body, "Error: Failed to connect to AI service");

    // still renders like any other body text
    let out = archive.path().join("draft.pdf");
    let rendered = service.render(&contract.id, &out).await.unwrap();
    assert_eq!(rendered.page_count, 1);
}

#[tokio::test]
async fn test_sign_archives_pdf() {
    let archive = TempDir::new().unwrap();
    let service = ContractService::new(
        MemoryStore::new(),
        generator(),
        DirectorySink::new(archive.path().join("signed")),
    );

    let contract = service.draft(vendor()).await.unwrap();
    service.send(&contract.id).await.unwrap();
    let outcome = service.sign(&contract.id, signature_png()).await.unwrap();

    assert!(outcome.delivered);
    assert!(outcome.page_count >= 1);
    assert_eq!(outcome.contract.status, ContractStatus::Signed);

    let stored = service.load(&contract.id).await.unwrap();
    assert_eq!(stored, outcome.contract);

    let mut entries = tokio::fs::read_dir(archive.path().join("signed")).await.unwrap();
    let entry = entries.next_entry().await.unwrap().unwrap();
    let name = entry.file_name().into_string().unwrap();
    assert!(name.starts_with("Signed_Contract_Jane_Doe_"));
    assert!(name.ends_with(".pdf"));
    let bytes = tokio::fs::read(entry.path()).await.unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn test_delivery_failure_keeps_signature() {
    let service = ContractService::new(MemoryStore::new(), generator(), FailingSink);

    let contract = service.draft(vendor()).await.unwrap();
    let outcome = service.sign(&contract.id, signature_png()).await.unwrap();
    assert!(!outcome.delivered);

    let stored = service.load(&contract.id).await.unwrap();
    assert_eq!(stored.status, ContractStatus::Signed);
}

#[tokio::test]
async fn test_second_signature_is_rejected() {
    let service = ContractService::new(MemoryStore::new(), generator(), FailingSink);
    let contract = service.draft(vendor()).await.unwrap();
    service.sign(&contract.id, signature_png()).await.unwrap();

    let result = service.sign(&contract.id, signature_png()).await;
    assert!(matches!(
        result,
        Err(RuntimeError::Store(StoreError::Immutable(_)))
    ));
}

#[tokio::test]
async fn test_invalid_layout_leaves_contract_unsigned() {
    let mut layout = LayoutOptions::default();
    layout.page.margin_pt = 400.0;
    let service =
        ContractService::new(MemoryStore::new(), generator(), FailingSink).with_layout(layout);

    let contract = service.draft(vendor()).await.unwrap();
    let result = service.sign(&contract.id, signature_png()).await;
    assert!(matches!(result, Err(RuntimeError::Pdf(_))));

    let stored = service.load(&contract.id).await.unwrap();
    assert_eq!(stored.status, ContractStatus::Draft);
}

#[tokio::test]
async fn test_unknown_contract() {
    let service = ContractService::new(MemoryStore::new(), generator(), FailingSink);
    let result = service.sign("contract_nope", signature_png()).await;
    assert!(matches!(result, Err(RuntimeError::NotFound(_))));
}

#[tokio::test]
async fn test_render_signed_contract() {
    let dir = TempDir::new().unwrap();
    let service = ContractService::new(MemoryStore::new(), generator(), FailingSink);
    let contract = service.draft(vendor()).await.unwrap();
    service.sign(&contract.id, signature_png()).await.unwrap();

    let out = dir.path().join("signed.pdf");
    let rendered = service.render(&contract.id, &out).await.unwrap();
    assert_eq!(tokio::fs::read(&out).await.unwrap(), rendered.bytes);
}

#[test]
fn test_contract_sheet_fields() {
    let mut contract = ContractDocument::draft(vendor(), "Body text");
    contract.id = "contract_k3j9x0a7q".to_string();
    contract.created_at = Utc.with_ymd_and_hms(2025, 3, 14, 22, 15, 0).unwrap();

    let sheet = contract_sheet(&contract);
    assert_eq!(sheet.title, "VENDOR AGREEMENT");
    let lines: Vec<String> = sheet.metadata.iter().map(|m| m.line()).collect();
    assert_eq!(
        lines,
        vec![
            "Contract ID: contract_k3j9x0a7q",
            "Date: 2025-03-14",
            "Vendor: Jane Doe",
            "Company: Acme Displays",
            "Email: jane@acme.test"
        ]
    );
    assert!(sheet.signature.is_none());
}

#[test]
fn test_rendered_page_identifies_contract() {
    let contract = ContractDocument::draft(vendor(), "Body text");
    let pages = paginate_standard(&contract_sheet(&contract));
    let lines = pages[0].lines();

    assert_eq!(lines[0], "VENDOR AGREEMENT");
    assert_eq!(lines[1], format!("Contract ID: {}", contract.id));
    assert_eq!(
        lines[2],
        format!("Date: {}", contract.created_at.format("%Y-%m-%d"))
    );
}
