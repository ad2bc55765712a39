use contract_runtime::*;
use contract_store::MemoryStore;
use tempfile::TempDir;
use tokio::sync::mpsc;

fn vendor(company: &str) -> VendorProfile {
    VendorProfile {
        company: company.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_worker_processes_commands_in_order() {
    let dir = TempDir::new().unwrap();
    let service = ContractService::new(
        MemoryStore::new(),
        TemplateDraftGenerator::default(),
        DirectorySink::new(dir.path().join("signed")),
    );

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    let worker = tokio::spawn(worker_task(service, command_rx, update_tx));

    command_tx
        .send(ContractCommand::Draft {
            vendor: vendor("Acme"),
        })
        .unwrap();
    let id = match update_rx.recv().await.unwrap() {
        ContractUpdate::Drafted { id, vendor_name } => {
            assert_eq!(vendor_name, "Acme");
            id
        }
        other => panic!("unexpected update: {:?}", other),
    };

    command_tx
        .send(ContractCommand::Send { id: id.clone() })
        .unwrap();
    assert!(matches!(
        update_rx.recv().await.unwrap(),
        ContractUpdate::Sent { id: sent } if sent == id
    ));

    let output_path = dir.path().join("draft.pdf");
    command_tx
        .send(ContractCommand::Render {
            id: id.clone(),
            output_path: output_path.clone(),
        })
        .unwrap();
    match update_rx.recv().await.unwrap() {
        ContractUpdate::Rendered {
            path, page_count, ..
        } => {
            assert_eq!(path, output_path);
            assert!(page_count >= 1);
            assert!(output_path.exists());
        }
        other => panic!("unexpected update: {:?}", other),
    }

    command_tx.send(ContractCommand::List).unwrap();
    match update_rx.recv().await.unwrap() {
        ContractUpdate::Listed { contracts } => {
            assert_eq!(contracts.len(), 1);
            assert_eq!(contracts[0].id, id);
            assert_eq!(contracts[0].status, ContractStatus::Sent);
        }
        other => panic!("unexpected update: {:?}", other),
    }

    drop(command_tx);
    worker.await.unwrap();
}

#[tokio::test]
async fn test_worker_reports_errors() {
    let dir = TempDir::new().unwrap();
    let service = ContractService::new(
        MemoryStore::new(),
        TemplateDraftGenerator::default(),
        DirectorySink::new(dir.path()),
    );

    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, mut update_rx) = mpsc::unbounded_channel();
    let worker = tokio::spawn(worker_task(service, command_rx, update_tx));

    command_tx
        .send(ContractCommand::Sign {
            id: "contract_missing".to_string(),
            signature: SignatureImage::new(vec![1, 2, 3]),
        })
        .unwrap();
    match update_rx.recv().await.unwrap() {
        ContractUpdate::Error { message } => {
            assert!(message.starts_with("Failed to sign contract"));
            assert!(message.contains("contract_missing"));
        }
        other => panic!("unexpected update: {:?}", other),
    }

    // a blank company makes the template generator fail; the draft still
    // goes through with an error body
    command_tx
        .send(ContractCommand::Draft { vendor: vendor("") })
        .unwrap();
    assert!(matches!(
        update_rx.recv().await.unwrap(),
        ContractUpdate::Drafted { .. }
    ));

    drop(command_tx);
    worker.await.unwrap();
}
