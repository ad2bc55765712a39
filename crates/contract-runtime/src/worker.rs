use crate::service::ContractService;
use crate::{ContractCommand, ContractSummary, ContractUpdate, DocumentSink, DraftGenerator};
use contract_store::ContractStore;
use tokio::sync::mpsc;

/// Async worker task that processes contract commands and sends updates.
/// Runs until the command channel closes.
pub async fn worker_task<S, G, K>(
    service: ContractService<S, G, K>,
    mut command_rx: mpsc::UnboundedReceiver<ContractCommand>,
    update_tx: mpsc::UnboundedSender<ContractUpdate>,
) where
    S: ContractStore,
    G: DraftGenerator,
    K: DocumentSink,
{
    while let Some(cmd) = command_rx.recv().await {
        let update = process_command(&service, cmd).await;
        if update_tx.send(update).is_err() {
            log::debug!("Update receiver dropped, stopping worker");
            break;
        }
    }
}

async fn process_command<S, G, K>(
    service: &ContractService<S, G, K>,
    cmd: ContractCommand,
) -> ContractUpdate
where
    S: ContractStore,
    G: DraftGenerator,
    K: DocumentSink,
{
    match cmd {
        ContractCommand::Draft { vendor } => {
            log::debug!("Drafting contract for {}", vendor.company);
            match service.draft(vendor).await {
                Ok(contract) => ContractUpdate::Drafted {
                    vendor_name: contract.vendor_name().to_string(),
                    id: contract.id,
                },
                Err(e) => ContractUpdate::Error {
                    message: format!("Failed to draft contract: {e}"),
                },
            }
        }
        ContractCommand::Send { id } => {
            log::debug!("Sending contract {}", id);
            match service.send(&id).await {
                Ok(contract) => ContractUpdate::Sent { id: contract.id },
                Err(e) => ContractUpdate::Error {
                    message: format!("Failed to send contract: {e}"),
                },
            }
        }
        ContractCommand::Sign { id, signature } => {
            log::debug!("Signing contract {}", id);
            match service.sign(&id, signature).await {
                Ok(outcome) => ContractUpdate::Signed {
                    id: outcome.contract.id,
                    page_count: outcome.page_count,
                    delivered: outcome.delivered,
                },
                Err(e) => ContractUpdate::Error {
                    message: format!("Failed to sign contract: {e}"),
                },
            }
        }
        ContractCommand::Render { id, output_path } => {
            log::debug!("Rendering contract {} to {}", id, output_path.display());
            match service.render(&id, &output_path).await {
                Ok(rendered) => ContractUpdate::Rendered {
                    id,
                    path: output_path,
                    page_count: rendered.page_count,
                },
                Err(e) => ContractUpdate::Error {
                    message: format!("Failed to render contract: {e}"),
                },
            }
        }
        ContractCommand::List => match service.list().await {
            Ok(contracts) => ContractUpdate::Listed {
                contracts: contracts.iter().map(ContractSummary::from).collect(),
            },
            Err(e) => ContractUpdate::Error {
                message: format!("Failed to list contracts: {e}"),
            },
        },
    }
}
