use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PaperSize {
    Letter,
    Legal,
    A4,
}

impl PaperSize {
    /// Portrait dimensions in points
    pub fn dimensions_pt(self) -> (f32, f32) {
        match self {
            PaperSize::Letter => (612.0, 792.0),
            PaperSize::Legal => (612.0, 1008.0),
            PaperSize::A4 => (mm_to_pt(210.0), mm_to_pt(297.0)),
        }
    }
}

/// Fixed page canvas: size and a uniform margin, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PageGeometry {
    pub width_pt: f32,
    pub height_pt: f32,
    pub margin_pt: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self {
            width_pt: DEFAULT_PAGE_WIDTH_PT,
            height_pt: DEFAULT_PAGE_HEIGHT_PT,
            margin_pt: DEFAULT_MARGIN_PT,
        }
    }
}

impl PageGeometry {
    pub fn for_paper(paper: PaperSize, margin_pt: f32) -> Self {
        let (width_pt, height_pt) = paper.dimensions_pt();
        Self {
            width_pt,
            height_pt,
            margin_pt,
        }
    }

    /// Widest line that fits between the left and right margins
    pub fn max_line_width(&self) -> f32 {
        self.width_pt - 2.0 * self.margin_pt
    }

    /// Baseline of the first line on a fresh page
    pub fn top(&self) -> f32 {
        self.height_pt - self.margin_pt
    }
}

/// Placement of the drawn signature after the body text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignatureLayout {
    /// Start a new page first when the cursor sits below this height
    pub min_cursor_y_pt: f32,
    pub label: String,
    pub label_gap_pt: f32,
    pub label_size_pt: f32,
    pub image_width_pt: f32,
    pub image_max_height_pt: f32,
    pub image_gap_pt: f32,
    pub caption_gap_pt: f32,
    pub caption_size_pt: f32,
}

impl Default for SignatureLayout {
    fn default() -> Self {
        Self {
            min_cursor_y_pt: SIGNATURE_MIN_CURSOR_Y_PT,
            label: SIGNATURE_LABEL.to_string(),
            label_gap_pt: SIGNATURE_LABEL_GAP_PT,
            label_size_pt: SIGNATURE_LABEL_SIZE_PT,
            image_width_pt: SIGNATURE_IMAGE_WIDTH_PT,
            image_max_height_pt: SIGNATURE_IMAGE_MAX_HEIGHT_PT,
            image_gap_pt: SIGNATURE_IMAGE_GAP_PT,
            caption_gap_pt: SIGNATURE_CAPTION_GAP_PT,
            caption_size_pt: SIGNATURE_CAPTION_SIZE_PT,
        }
    }
}

impl SignatureLayout {
    /// Vertical space the block needs below the cursor it starts at, down to
    /// the caption's descenders
    pub fn block_height(&self) -> f32 {
        self.label_gap_pt
            + self.image_max_height_pt
            + self.image_gap_pt
            + self.caption_gap_pt
            + self.caption_size_pt
    }
}

/// Comprehensive layout configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutOptions {
    pub page: PageGeometry,

    // Heading
    pub title_size_pt: f32,
    pub title_leading_pt: f32,

    // Metadata block
    pub metadata_size_pt: f32,
    pub metadata_gap_pt: f32,

    // Body
    pub body_size_pt: f32,
    pub line_spacing: f32,
    pub paragraph_spacing: f32,

    pub signature: SignatureLayout,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            page: PageGeometry::default(),
            title_size_pt: TITLE_SIZE_PT,
            title_leading_pt: TITLE_LEADING_PT,
            metadata_size_pt: METADATA_SIZE_PT,
            metadata_gap_pt: METADATA_GAP_PT,
            body_size_pt: BODY_SIZE_PT,
            line_spacing: LINE_SPACING,
            paragraph_spacing: PARAGRAPH_SPACING,
            signature: SignatureLayout::default(),
        }
    }
}

impl LayoutOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| PdfError::Config(format!("Failed to parse layout options: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PdfError::Config(format!("Failed to serialize layout options: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        let page = &self.page;
        if !(page.width_pt > 0.0 && page.height_pt > 0.0) {
            return Err(PdfError::Config(
                "Page dimensions must be positive".to_string(),
            ));
        }
        if page.margin_pt < 0.0 || page.max_line_width() <= 0.0 {
            return Err(PdfError::Config(
                "Margins leave no printable width".to_string(),
            ));
        }

        let sizes = [
            self.title_size_pt,
            self.metadata_size_pt,
            self.body_size_pt,
            self.signature.label_size_pt,
            self.signature.caption_size_pt,
        ];
        if sizes.iter().any(|size| !(*size > 0.0)) {
            return Err(PdfError::Config("Font sizes must be positive".to_string()));
        }
        if !(self.line_spacing > 0.0) || self.paragraph_spacing < 0.0 {
            return Err(PdfError::Config(
                "Line spacing must be positive and paragraph spacing non-negative".to_string(),
            ));
        }
        if page.top() < page.margin_pt + self.body_size_pt {
            return Err(PdfError::Config(
                "Page is too short to hold a single body line".to_string(),
            ));
        }

        let signature = &self.signature;
        if !(signature.image_width_pt > 0.0 && signature.image_max_height_pt > 0.0) {
            return Err(PdfError::Config(
                "Signature image box must be positive".to_string(),
            ));
        }
        if page.margin_pt + signature.image_width_pt > page.width_pt {
            return Err(PdfError::Config(
                "Signature image is wider than the page".to_string(),
            ));
        }
        if page.top() - page.margin_pt < signature.block_height() {
            return Err(PdfError::Config(format!(
                "Signature block needs {} pt above the bottom margin but a page only has {} pt",
                signature.block_height(),
                page.top() - page.margin_pt
            )));
        }
        if signature.min_cursor_y_pt > page.top() {
            return Err(PdfError::Config(
                "Signature block cannot start on an empty page".to_string(),
            ));
        }

        Ok(())
    }
}
