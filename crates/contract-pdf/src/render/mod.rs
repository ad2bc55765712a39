//! PDF serialization of laid-out pages
//!
//! Each page gets one content stream. Text uses the two standard Helvetica
//! faces (never embedded) and each distinct signature raster becomes one
//! uncompressed RGB image XObject shared by every page that shows it.

mod content;
mod document;

pub use document::{DocumentInfo, render_pdf};
