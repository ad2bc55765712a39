use crate::error::{Result, RuntimeError};
use crate::generator::{DraftGenerator, draft_body};
use crate::sheet::contract_sheet;
use crate::sink::{DocumentSink, SignedDelivery, signed_file_name};
use chrono::Utc;
use contract_pdf::{LayoutOptions, RenderedContract, SignatureImage, generate_pdf, render_sheet};
use contract_store::{ContractDocument, ContractStore, VendorProfile};
use std::path::Path;

/// Result of signing a contract
#[derive(Debug, Clone)]
pub struct SignOutcome {
    pub contract: ContractDocument,
    pub page_count: usize,
    /// Whether the sink accepted the signed PDF
    pub delivered: bool,
}

/// Contract workflow over injected storage, drafting and distribution.
pub struct ContractService<S, G, K> {
    store: S,
    generator: G,
    sink: K,
    layout: LayoutOptions,
}

impl<S, G, K> ContractService<S, G, K>
where
    S: ContractStore,
    G: DraftGenerator,
    K: DocumentSink,
{
    pub fn new(store: S, generator: G, sink: K) -> Self {
        Self {
            store,
            generator,
            sink,
            layout: LayoutOptions::default(),
        }
    }

    pub fn with_layout(mut self, layout: LayoutOptions) -> Self {
        self.layout = layout;
        self
    }

    pub fn layout(&self) -> &LayoutOptions {
        &self.layout
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Draft a new contract for a vendor and store it.
    pub async fn draft(&self, vendor: VendorProfile) -> Result<ContractDocument> {
        let body = draft_body(&self.generator, &vendor).await;
        let contract = ContractDocument::draft(vendor, body);
        self.store.put(contract.clone()).await?;
        log::info!(
            "Drafted contract {} for {}",
            contract.id,
            contract.vendor_name()
        );
        Ok(contract)
    }

    /// Mark a draft as sent to the vendor for review.
    pub async fn send(&self, id: &str) -> Result<ContractDocument> {
        let mut contract = self.load(id).await?;
        contract.mark_sent()?;
        self.store.put(contract.clone()).await?;
        log::info!("Contract {} sent to {}", contract.id, contract.email());
        Ok(contract)
    }

    /// Sign, store, render and distribute a contract.
    ///
    /// The signed PDF is rendered before anything is stored so a layout
    /// failure leaves the contract unsigned. A delivery failure is logged
    /// and does not affect the stored signature.
    pub async fn sign(&self, id: &str, signature: SignatureImage) -> Result<SignOutcome> {
        let mut contract = self.load(id).await?;
        let signed_at = Utc::now();
        contract.sign(signature, signed_at)?;

        let sheet = contract_sheet(&contract);
        let layout = self.layout.clone();
        let rendered =
            tokio::task::spawn_blocking(move || render_sheet(&sheet, &layout)).await??;

        self.store.put(contract.clone()).await?;
        log::info!(
            "Contract {} signed by {} ({} page(s))",
            contract.id,
            contract.vendor_name(),
            rendered.page_count
        );

        let delivery = SignedDelivery {
            contract_id: contract.id.clone(),
            email: contract.email().to_string(),
            file_name: signed_file_name(contract.vendor_name(), signed_at.timestamp_millis()),
            bytes: rendered.bytes,
        };
        let delivered = match self.sink.deliver(&delivery).await {
            Ok(()) => true,
            Err(e) => {
                log::error!(
                    "Failed to deliver signed contract {}: {}",
                    contract.id,
                    e
                );
                false
            }
        };

        Ok(SignOutcome {
            contract,
            page_count: rendered.page_count,
            delivered,
        })
    }

    /// Render a contract, signed or not, to a PDF file.
    pub async fn render(&self, id: &str, output_path: impl AsRef<Path>) -> Result<RenderedContract> {
        let contract = self.load(id).await?;
        let rendered =
            generate_pdf(contract_sheet(&contract), self.layout.clone(), output_path).await?;
        Ok(rendered)
    }

    pub async fn list(&self) -> Result<Vec<ContractDocument>> {
        Ok(self.store.list().await?)
    }

    pub async fn load(&self, id: &str) -> Result<ContractDocument> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| RuntimeError::NotFound(id.to_string()))
    }
}
