//! Contract document layout and PDF output.
//!
//! `paginate` lays a title, metadata lines, free-form body text and an
//! optional drawn signature across fixed-size pages as positioned draw
//! operations. `render_pdf` serializes those pages to PDF bytes.

pub mod constants;
mod io;
pub mod layout;
mod metrics;
mod options;
pub mod render;
mod signature;
mod types;

pub use io::{RenderedContract, generate_pdf, render_sheet};
pub use layout::{paginate, paginate_standard, strip_markup, wrap_paragraph};
pub use metrics::{MonospaceMetrics, StandardMetrics, TextMeasure};
pub use options::*;
pub use render::{DocumentInfo, render_pdf};
pub use signature::{RasterImage, SignatureImage};
pub use types::*;
