use crate::signature::{RasterImage, SignatureImage};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("Invalid signature data: {0}")]
    Signature(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("No pages to render")]
    NoPages,
}

pub type Result<T> = std::result::Result<T, PdfError>;

/// Font faces available to the layout. Both map to standard PDF Type1
/// fonts so nothing needs embedding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontFace {
    Regular,
    Bold,
}

impl FontFace {
    pub fn base_font(self) -> &'static str {
        match self {
            FontFace::Regular => "Helvetica",
            FontFace::Bold => "Helvetica-Bold",
        }
    }

    /// Name of the font in each page's resource dictionary
    pub fn resource_name(self) -> &'static str {
        match self {
            FontFace::Regular => "F1",
            FontFace::Bold => "F2",
        }
    }
}

/// One absolutely positioned drawing instruction. Coordinates are PDF
/// points with the origin at the bottom-left corner of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A single line of text with its baseline at `y`
    Text {
        x: f32,
        y: f32,
        text: String,
        face: FontFace,
        size: f32,
        /// Fill gray level, 0.0 = black
        gray: f32,
    },
    /// A raster image with its lower-left corner at (`x`, `y`)
    Image {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        image: Arc<RasterImage>,
    },
}

/// A laid-out page. Immutable once produced by the paginator.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// Zero-based position in the document
    pub index: usize,
    pub width: f32,
    pub height: f32,
    pub ops: Vec<DrawOp>,
}

impl Page {
    /// Text of every text run on the page, in drawing order
    pub fn lines(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                DrawOp::Image { .. } => None,
            })
            .collect()
    }

    pub fn images(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Image { .. }))
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// A `label: value` line printed under the document title.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetadataField {
    pub label: String,
    pub value: String,
}

impl MetadataField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn line(&self) -> String {
        format!("{}: {}", self.label, self.value)
    }
}

/// A drawn signature and the moment it was applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SignatureStamp {
    pub image: SignatureImage,
    pub signed_at: DateTime<Utc>,
}

/// Everything the paginator needs to lay out one contract.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContractSheet {
    pub title: String,
    pub metadata: Vec<MetadataField>,
    /// Plain or lightly marked-up text; `\n` separates paragraphs
    pub body: String,
    pub signature: Option<SignatureStamp>,
}
