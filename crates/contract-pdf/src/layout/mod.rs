//! Contract pagination
//!
//! Lays out a [`ContractSheet`] top to bottom on fixed-size pages:
//! - Title and `label: value` metadata lines
//! - Body paragraphs, greedily word-wrapped
//! - Optional signature block (label, image, timestamp caption)
//!
//! Page breaks are decided just before each line is drawn, never ahead of
//! time. The result is a list of [`Page`]s holding absolutely positioned
//! draw operations.

mod cursor;
mod wrap;

pub use wrap::{strip_markup, wrap_paragraph};

use crate::constants::{SIGNATURE_CAPTION_GRAY, SIGNATURE_PLACEHOLDER};
use crate::metrics::{StandardMetrics, TextMeasure};
use crate::options::LayoutOptions;
use crate::types::{ContractSheet, FontFace, Page, SignatureStamp};
use cursor::PageCursor;
use std::sync::Arc;

/// Lay out a contract with the given options and font metrics.
pub fn paginate(
    sheet: &ContractSheet,
    options: &LayoutOptions,
    metrics: &impl TextMeasure,
) -> Vec<Page> {
    let mut cursor = PageCursor::new(&options.page);
    let max_width = options.page.max_line_width();

    // Title
    if !sheet.title.is_empty() {
        cursor.text(&sheet.title, FontFace::Bold, options.title_size_pt, 0.0);
    }
    cursor.advance(options.title_leading_pt);

    // Metadata
    let size = options.metadata_size_pt;
    for field in &sheet.metadata {
        let lines = wrap_paragraph(&field.line(), max_width, |s| {
            metrics.text_width(s, FontFace::Bold, size)
        });
        for line in lines {
            cursor.ensure_line_fits(size);
            cursor.text(line, FontFace::Bold, size, 0.0);
            cursor.advance(size * options.line_spacing);
        }
    }
    cursor.advance(options.metadata_gap_pt);

    // Body
    let size = options.body_size_pt;
    let body = strip_markup(&sheet.body);
    for paragraph in body.split('\n') {
        let lines = wrap_paragraph(paragraph, max_width, |s| {
            metrics.text_width(s, FontFace::Regular, size)
        });
        for line in lines {
            cursor.ensure_line_fits(size);
            cursor.text(line, FontFace::Regular, size, 0.0);
            cursor.advance(size * options.line_spacing);
        }
        cursor.advance(size * options.paragraph_spacing);
    }

    if let Some(stamp) = &sheet.signature {
        layout_signature(&mut cursor, stamp, options);
    }

    let pages = cursor.finish();
    log::debug!("Paginated \"{}\" into {} page(s)", sheet.title, pages.len());
    pages
}

/// Lay out with the default options and Helvetica metrics.
pub fn paginate_standard(sheet: &ContractSheet) -> Vec<Page> {
    paginate(sheet, &LayoutOptions::default(), &StandardMetrics)
}

fn layout_signature(cursor: &mut PageCursor, stamp: &SignatureStamp, options: &LayoutOptions) {
    let block = &options.signature;
    // The caption baseline has to stay on or above the bottom margin
    let room = cursor.y() - options.page.margin_pt;
    if cursor.y() < block.min_cursor_y_pt || room < block.block_height() {
        cursor.new_page();
    }

    cursor.advance(block.label_gap_pt);
    cursor.text(&block.label, FontFace::Bold, block.label_size_pt, 0.0);

    // The image box is reserved at full height whatever the image's shape
    cursor.advance(block.image_max_height_pt + block.image_gap_pt);
    match stamp.image.decode() {
        Ok(raster) => {
            let mut width = block.image_width_pt;
            let mut height = width * raster.aspect_ratio();
            if height > block.image_max_height_pt {
                width *= block.image_max_height_pt / height;
                height = block.image_max_height_pt;
            }
            cursor.image(Arc::new(raster), width, height);
        }
        Err(e) => {
            log::warn!("Signature image could not be decoded: {}", e);
            cursor.text(
                SIGNATURE_PLACEHOLDER,
                FontFace::Regular,
                options.body_size_pt,
                0.0,
            );
        }
    }

    cursor.advance(block.caption_gap_pt);
    cursor.text(
        format!(
            "Signed digitally on: {}",
            stamp.signed_at.format("%Y-%m-%d %H:%M:%S UTC")
        ),
        FontFace::Regular,
        block.caption_size_pt,
        SIGNATURE_CAPTION_GRAY,
    );
}
