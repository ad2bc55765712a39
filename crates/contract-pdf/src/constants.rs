//! Shared constants for contract layout
//!
//! Defaults for page geometry, type sizes and the signature block. All
//! lengths are PDF points.

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

// =============================================================================
// Page Geometry
// =============================================================================

/// Default page width in points (US Letter: 8.5" × 11")
pub const DEFAULT_PAGE_WIDTH_PT: f32 = 612.0;

/// Default page height in points (US Letter)
pub const DEFAULT_PAGE_HEIGHT_PT: f32 = 792.0;

/// Uniform page margin
pub const DEFAULT_MARGIN_PT: f32 = 50.0;

// =============================================================================
// Text
// =============================================================================

pub const DEFAULT_TITLE: &str = "VENDOR AGREEMENT";

pub const TITLE_SIZE_PT: f32 = 20.0;

/// Distance from the title baseline to the first metadata line
pub const TITLE_LEADING_PT: f32 = 40.0;

pub const METADATA_SIZE_PT: f32 = 12.0;

/// Blank space between the metadata block and the body
pub const METADATA_GAP_PT: f32 = 20.0;

pub const BODY_SIZE_PT: f32 = 10.0;

/// Baseline-to-baseline distance as a multiple of the font size
pub const LINE_SPACING: f32 = 1.5;

/// Extra space after each paragraph as a multiple of the font size
pub const PARAGRAPH_SPACING: f32 = 0.5;

/// Characters removed from body text before measuring and drawing
pub const MARKUP_CHARS: [char; 2] = ['#', '*'];

// =============================================================================
// Signature Block
// =============================================================================

/// The signature block starts on a fresh page when the cursor is below this
pub const SIGNATURE_MIN_CURSOR_Y_PT: f32 = 150.0;

pub const SIGNATURE_LABEL: &str = "SIGNED BY VENDOR:";

pub const SIGNATURE_LABEL_GAP_PT: f32 = 20.0;

pub const SIGNATURE_LABEL_SIZE_PT: f32 = 12.0;

/// Width the signature image is scaled to
pub const SIGNATURE_IMAGE_WIDTH_PT: f32 = 200.0;

/// Height reserved for the signature image; taller images are scaled down
pub const SIGNATURE_IMAGE_MAX_HEIGHT_PT: f32 = 100.0;

pub const SIGNATURE_IMAGE_GAP_PT: f32 = 10.0;

pub const SIGNATURE_CAPTION_GAP_PT: f32 = 20.0;

pub const SIGNATURE_CAPTION_SIZE_PT: f32 = 8.0;

pub const SIGNATURE_CAPTION_GRAY: f32 = 0.5;

/// Drawn in place of a signature image that cannot be decoded
pub const SIGNATURE_PLACEHOLDER: &str = "(Signature unavailable)";
