use crate::options::PageGeometry;
use crate::signature::RasterImage;
use crate::types::{DrawOp, FontFace, Page};
use std::sync::Arc;

/// Write head moving down a stack of fixed-size pages.
///
/// Pages are only opened when something is about to be drawn on them, so
/// the output never ends with an empty page.
pub(crate) struct PageCursor<'a> {
    geometry: &'a PageGeometry,
    pages: Vec<Page>,
    ops: Vec<DrawOp>,
    y: f32,
}

impl<'a> PageCursor<'a> {
    pub fn new(geometry: &'a PageGeometry) -> Self {
        Self {
            geometry,
            pages: Vec::new(),
            ops: Vec::new(),
            y: geometry.top(),
        }
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    pub fn advance(&mut self, dy: f32) {
        self.y -= dy;
    }

    pub fn new_page(&mut self) {
        let index = self.pages.len();
        log::debug!("Page break after page {} at y={}", index + 1, self.y);
        self.pages.push(Page {
            index,
            width: self.geometry.width_pt,
            height: self.geometry.height_pt,
            ops: std::mem::take(&mut self.ops),
        });
        self.y = self.geometry.top();
    }

    /// Break the page if a line of `size` would drop below the bottom margin
    pub fn ensure_line_fits(&mut self, size: f32) {
        if self.y < self.geometry.margin_pt + size {
            self.new_page();
        }
    }

    pub fn text(&mut self, text: impl Into<String>, face: FontFace, size: f32, gray: f32) {
        self.ops.push(DrawOp::Text {
            x: self.geometry.margin_pt,
            y: self.y,
            text: text.into(),
            face,
            size,
            gray,
        });
    }

    pub fn image(&mut self, image: Arc<RasterImage>, width: f32, height: f32) {
        self.ops.push(DrawOp::Image {
            x: self.geometry.margin_pt,
            y: self.y,
            width,
            height,
            image,
        });
    }

    pub fn finish(mut self) -> Vec<Page> {
        if !self.ops.is_empty() || self.pages.is_empty() {
            let index = self.pages.len();
            self.pages.push(Page {
                index,
                width: self.geometry.width_pt,
                height: self.geometry.height_pt,
                ops: self.ops,
            });
        }
        self.pages
    }
}
