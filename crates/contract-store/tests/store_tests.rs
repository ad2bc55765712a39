use chrono::{Duration, Utc};
use contract_pdf::SignatureImage;
use contract_store::*;
use tempfile::TempDir;

fn contract(company: &str) -> ContractDocument {
    let vendor = VendorProfile {
        company: company.to_string(),
        ..Default::default()
    };
    ContractDocument::draft(vendor, format!("Agreement with {}", company))
}

async fn exercise_store(store: &impl ContractStore) {
    let mut first = contract("Acme");
    let mut second = contract("Globex");
    second.created_at = first.created_at + Duration::seconds(5);

    store.put(second.clone()).await.unwrap();
    store.put(first.clone()).await.unwrap();

    let listed = store.list().await.unwrap();
    assert_eq!(listed, vec![first.clone(), second.clone()]);

    first.mark_sent().unwrap();
    store.put(first.clone()).await.unwrap();
    assert_eq!(
        store.get(&first.id).await.unwrap().unwrap().status,
        ContractStatus::Sent
    );

    // stale draft copy cannot roll the status back
    let stale = ContractDocument {
        status: ContractStatus::Draft,
        ..first.clone()
    };
    assert!(matches!(
        store.put(stale).await,
        Err(StoreError::InvalidTransition { .. })
    ));

    // a status flip without a signature does not count as signing
    let forged = ContractDocument {
        status: ContractStatus::Signed,
        ..first.clone()
    };
    assert!(matches!(
        store.put(forged).await,
        Err(StoreError::MissingSignature(_))
    ));
    assert_eq!(
        store.get(&first.id).await.unwrap().unwrap().status,
        ContractStatus::Sent
    );

    first
        .sign(SignatureImage::new(vec![1, 2, 3]), Utc::now())
        .unwrap();
    store.put(first.clone()).await.unwrap();

    // rewriting the identical signed contract is a no-op
    store.put(first.clone()).await.unwrap();

    let mut tampered = first.clone();
    tampered.body.push_str(" (amended)");
    assert!(matches!(
        store.put(tampered).await,
        Err(StoreError::Immutable(_))
    ));
    assert_eq!(store.get(&first.id).await.unwrap().unwrap(), first);

    assert!(store.get("contract_missing").await.unwrap().is_none());
    assert_eq!(store.list().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_memory_store() {
    exercise_store(&MemoryStore::new()).await;
}

#[tokio::test]
async fn test_json_file_store() {
    let dir = TempDir::new().unwrap();
    exercise_store(&JsonFileStore::new(dir.path().join("contracts.json"))).await;
}

#[tokio::test]
async fn test_json_file_store_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(dir.path().join("nested").join("contracts.json"));
    assert!(store.list().await.unwrap().is_empty());

    store.put(contract("Acme")).await.unwrap();
    assert!(store.path().exists());
    assert!(!dir.path().join("nested").join("contracts.json.tmp").exists());
}

#[tokio::test]
async fn test_json_file_store_persists_across_instances() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contracts.json");

    let saved = contract("Acme");
    JsonFileStore::new(&path).put(saved.clone()).await.unwrap();

    let reopened = JsonFileStore::new(&path);
    assert_eq!(reopened.get(&saved.id).await.unwrap(), Some(saved));
}

#[tokio::test]
async fn test_json_file_store_rejects_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contracts.json");
    tokio::fs::write(&path, b"[{ broken").await.unwrap();

    let store = JsonFileStore::new(&path);
    assert!(matches!(store.list().await, Err(StoreError::Json(_))));
}

#[test]
fn test_check_replace_rules() {
    let draft = contract("Acme");
    let mut sent = draft.clone();
    sent.mark_sent().unwrap();

    assert!(check_replace(&draft, &sent).is_ok());
    assert!(check_replace(&sent, &draft).is_err());
    assert!(check_replace(&draft, &draft).is_ok());

    let mut unsigned = sent.clone();
    unsigned.status = ContractStatus::Signed;
    assert!(matches!(
        check_replace(&sent, &unsigned),
        Err(StoreError::MissingSignature(_))
    ));

    let mut signed = sent.clone();
    signed
        .sign(SignatureImage::new(vec![1, 2, 3]), Utc::now())
        .unwrap();
    assert!(check_replace(&sent, &signed).is_ok());

    let mut no_timestamp = signed.clone();
    no_timestamp.signed_at = None;
    assert!(check_replace(&sent, &no_timestamp).is_err());
}

#[tokio::test]
async fn test_new_contract_cannot_arrive_signed_without_signature() {
    let store = MemoryStore::new();
    let mut contract = contract("Acme");
    contract.status = ContractStatus::Signed;

    assert!(matches!(
        store.put(contract.clone()).await,
        Err(StoreError::MissingSignature(_))
    ));
    assert!(store.get(&contract.id).await.unwrap().is_none());
}
