//! Sheet-to-file rendering

use crate::layout::paginate;
use crate::metrics::StandardMetrics;
use crate::options::LayoutOptions;
use crate::render::{DocumentInfo, render_pdf};
use crate::types::*;
use std::path::Path;

/// A finished contract PDF
#[derive(Debug, Clone)]
pub struct RenderedContract {
    pub page_count: usize,
    pub bytes: Vec<u8>,
}

/// Validate options, paginate with Helvetica metrics and serialize.
pub fn render_sheet(sheet: &ContractSheet, options: &LayoutOptions) -> Result<RenderedContract> {
    options.validate()?;

    let pages = paginate(sheet, options, &StandardMetrics);
    let info = DocumentInfo {
        title: sheet.title.clone(),
        created: sheet.signature.as_ref().map(|stamp| stamp.signed_at),
        ..Default::default()
    };
    let bytes = render_pdf(&pages, &info)?;

    Ok(RenderedContract {
        page_count: pages.len(),
        bytes,
    })
}

/// Render a sheet off the async executor and write it to `path`.
pub async fn generate_pdf(
    sheet: ContractSheet,
    options: LayoutOptions,
    path: impl AsRef<Path>,
) -> Result<RenderedContract> {
    let path = path.as_ref().to_owned();
    let rendered = tokio::task::spawn_blocking(move || render_sheet(&sheet, &options)).await??;
    tokio::fs::write(&path, &rendered.bytes).await?;
    log::info!(
        "Wrote {} ({} page(s))",
        path.display(),
        rendered.page_count
    );
    Ok(rendered)
}
