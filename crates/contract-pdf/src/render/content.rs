//! Content stream encoding for laid-out pages

use crate::types::{DrawOp, FontFace};

/// Map text to WinAnsiEncoding bytes.
///
/// Latin-1 maps straight through; the typographic punctuation people paste
/// into contracts (smart quotes, dashes, bullet, ellipsis, euro) uses the
/// 0x80..0x9F slots. Anything else becomes `?`.
pub(crate) fn win_ansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            '\u{2122}' => 0x99,
            '\t' => b' ',
            c if (' '..='~').contains(&c) => c as u8,
            c if ('\u{A0}'..='\u{FF}').contains(&c) => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

/// Body of a PDF literal string: WinAnsi bytes with `(`, `)` and `\\` escaped
pub(crate) fn encode_literal(text: &str) -> Vec<u8> {
    let bytes = win_ansi_bytes(text);
    let mut out = Vec::with_capacity(bytes.len());
    for byte in bytes {
        if matches!(byte, b'(' | b')' | b'\\') {
            out.push(b'\\');
        }
        out.push(byte);
    }
    out
}

/// Append the operators for one text run
pub(crate) fn write_text(
    out: &mut Vec<u8>,
    x: f32,
    y: f32,
    text: &str,
    face: FontFace,
    size: f32,
    gray: f32,
) {
    out.extend_from_slice(
        format!(
            "BT {} g /{} {} Tf {} {} Td (",
            gray,
            face.resource_name(),
            size,
            x,
            y
        )
        .as_bytes(),
    );
    out.extend_from_slice(&encode_literal(text));
    out.extend_from_slice(b") Tj ET\n");
}

/// Append the operators placing image XObject `name` in the given box
pub(crate) fn write_image(out: &mut Vec<u8>, name: &str, x: f32, y: f32, width: f32, height: f32) {
    out.extend_from_slice(
        format!("q {} 0 0 {} {} {} cm /{} Do Q\n", width, height, x, y, name).as_bytes(),
    );
}

/// Build the whole content stream of a page. `image_name` returns the
/// resource name registered for each image op, in order.
pub(crate) fn page_content<'a>(
    ops: &'a [DrawOp],
    mut image_name: impl FnMut(&'a DrawOp) -> String,
) -> Vec<u8> {
    let mut out = Vec::new();
    for op in ops {
        match op {
            DrawOp::Text {
                x,
                y,
                text,
                face,
                size,
                gray,
            } => write_text(&mut out, *x, *y, text, *face, *size, *gray),
            DrawOp::Image {
                x,
                y,
                width,
                height,
                ..
            } => {
                let name = image_name(op);
                write_image(&mut out, &name, *x, *y, *width, *height);
            }
        }
    }
    out
}
