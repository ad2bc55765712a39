use super::content::{page_content, win_ansi_bytes};
use crate::signature::RasterImage;
use crate::types::*;
use chrono::{DateTime, Utc};
use lopdf::{Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use std::sync::Arc;

/// Document information dictionary entries
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInfo {
    pub title: String,
    pub producer: String,
    pub created: Option<DateTime<Utc>>,
}

impl Default for DocumentInfo {
    fn default() -> Self {
        Self {
            title: String::new(),
            producer: concat!("vcontract ", env!("CARGO_PKG_VERSION")).to_string(),
            created: None,
        }
    }
}

impl DocumentInfo {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }
}

/// Serialize laid-out pages into PDF bytes.
pub fn render_pdf(pages: &[Page], info: &DocumentInfo) -> Result<Vec<u8>> {
    let mut doc = build_document(pages, info)?;
    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    log::debug!("Rendered {} page(s), {} bytes", pages.len(), bytes.len());
    Ok(bytes)
}

fn build_document(pages: &[Page], info: &DocumentInfo) -> Result<Document> {
    if pages.is_empty() {
        return Err(PdfError::NoPages);
    }

    let mut doc = Document::with_version("1.7");
    let pages_tree_id = doc.new_object_id();

    let fonts = font_resources(&mut doc);
    let mut images: Vec<(Arc<RasterImage>, ObjectId)> = Vec::new();
    let mut page_refs = Vec::with_capacity(pages.len());

    for page in pages {
        let mut xobjects = Dictionary::new();
        let content = page_content(&page.ops, |op| {
            let DrawOp::Image { image, .. } = op else {
                return String::new();
            };
            let id = match images.iter().find(|(known, _)| Arc::ptr_eq(known, image)) {
                Some((_, id)) => *id,
                None => {
                    let id = doc.add_object(image_xobject(image));
                    images.push((Arc::clone(image), id));
                    id
                }
            };
            let name = format!("Im{}", xobjects.len() + 1);
            xobjects.set(name.as_bytes(), Object::Reference(id));
            name
        });

        let content_id = doc.add_object(Stream::new(Dictionary::new(), content));

        let mut resources = Dictionary::new();
        resources.set("Font", Object::Dictionary(fonts.clone()));
        if !xobjects.is_empty() {
            resources.set("XObject", Object::Dictionary(xobjects));
        }

        let page_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Page".to_vec())),
            ("Parent", Object::Reference(pages_tree_id)),
            (
                "MediaBox",
                Object::Array(vec![
                    Object::Integer(0),
                    Object::Integer(0),
                    Object::Real(page.width),
                    Object::Real(page.height),
                ]),
            ),
            ("Contents", Object::Reference(content_id)),
            ("Resources", Object::Dictionary(resources)),
        ]));
        page_refs.push(Object::Reference(page_id));
    }

    // Create pages tree
    let count = page_refs.len() as i64;
    let pages_dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Pages".to_vec())),
        ("Kids", Object::Array(page_refs)),
        ("Count", Object::Integer(count)),
    ]);
    doc.objects
        .insert(pages_tree_id, Object::Dictionary(pages_dict));

    // Create catalog
    let catalog_id = doc.add_object(Dictionary::from_iter(vec![
        ("Type", Object::Name(b"Catalog".to_vec())),
        ("Pages", Object::Reference(pages_tree_id)),
    ]));
    doc.trailer.set("Root", catalog_id);

    let info_id = doc.add_object(info_dictionary(info));
    doc.trailer.set("Info", info_id);

    Ok(doc)
}

fn font_resources(doc: &mut Document) -> Dictionary {
    let mut fonts = Dictionary::new();
    for face in [FontFace::Regular, FontFace::Bold] {
        let font_id = doc.add_object(Dictionary::from_iter(vec![
            ("Type", Object::Name(b"Font".to_vec())),
            ("Subtype", Object::Name(b"Type1".to_vec())),
            ("BaseFont", Object::Name(face.base_font().as_bytes().to_vec())),
            ("Encoding", Object::Name(b"WinAnsiEncoding".to_vec())),
        ]));
        fonts.set(face.resource_name(), Object::Reference(font_id));
    }
    fonts
}

fn image_xobject(image: &RasterImage) -> Stream {
    let dict = Dictionary::from_iter(vec![
        ("Type", Object::Name(b"XObject".to_vec())),
        ("Subtype", Object::Name(b"Image".to_vec())),
        ("Width", Object::Integer(image.width as i64)),
        ("Height", Object::Integer(image.height as i64)),
        ("ColorSpace", Object::Name(b"DeviceRGB".to_vec())),
        ("BitsPerComponent", Object::Integer(8)),
    ]);
    Stream::new(dict, image.rgb.clone())
}

fn info_dictionary(info: &DocumentInfo) -> Dictionary {
    let mut dict = Dictionary::new();
    if !info.title.is_empty() {
        dict.set("Title", text_string(&info.title));
    }
    dict.set("Producer", text_string(&info.producer));
    if let Some(created) = info.created {
        let stamp = created.format("D:%Y%m%d%H%M%SZ").to_string();
        dict.set("CreationDate", Object::String(stamp.into_bytes(), StringFormat::Literal));
    }
    dict
}

fn text_string(text: &str) -> Object {
    Object::String(win_ansi_bytes(text), StringFormat::Literal)
}
