use contract_pdf::*;

/// 6 pt per character at the 10 pt body size, so 85 characters fill a line
fn mono() -> MonospaceMetrics {
    MonospaceMetrics { advance_em: 0.6 }
}

/// Letter width, 760 pt tall: the first body line sits at y = 650 and
/// exactly 40 single-line words fit on the first page.
fn short_page() -> LayoutOptions {
    LayoutOptions {
        page: PageGeometry {
            width_pt: 612.0,
            height_pt: 760.0,
            margin_pt: 50.0,
        },
        ..Default::default()
    }
}

fn sheet(body: &str) -> ContractSheet {
    ContractSheet {
        title: "VENDOR AGREEMENT".to_string(),
        metadata: vec![],
        body: body.to_string(),
        signature: None,
    }
}

/// `n` words that each need a line of their own
fn one_word_lines(n: usize) -> String {
    vec!["w".repeat(50); n].join(" ")
}

fn body_ys(page: &Page) -> Vec<f32> {
    page.ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Text {
                y,
                face: FontFace::Regular,
                ..
            } => Some(*y),
            _ => None,
        })
        .collect()
}

#[test]
fn test_pagination_is_idempotent() {
    let sheet = ContractSheet {
        metadata: vec![
            MetadataField::new("Vendor", "Jane Doe"),
            MetadataField::new("Company", "Acme Displays"),
        ],
        ..sheet(&"Lorem ipsum dolor sit amet, consectetur adipiscing. ".repeat(200))
    };
    let options = LayoutOptions::default();

    let first = paginate(&sheet, &options, &StandardMetrics);
    let second = paginate(&sheet, &options, &StandardMetrics);
    assert!(first.len() > 1);
    assert_eq!(first, second);
}

#[test]
fn test_exactly_full_page_does_not_overflow() {
    let pages = paginate(&sheet(&one_word_lines(40)), &short_page(), &mono());
    assert_eq!(pages.len(), 1);

    let ys = body_ys(&pages[0]);
    assert_eq!(ys.len(), 40);
    assert_eq!(ys[0], 650.0);
    assert_eq!(ys[39], 65.0);
}

#[test]
fn test_one_more_line_adds_exactly_one_page() {
    let pages = paginate(&sheet(&one_word_lines(41)), &short_page(), &mono());
    assert_eq!(pages.len(), 2);
    assert_eq!(body_ys(&pages[0]).len(), 40);
    assert_eq!(body_ys(&pages[1]), vec![710.0]);
    assert_eq!(pages[1].index, 1);
}

#[test]
fn test_line_that_fits_is_not_split() {
    let body = format!("{} {}", "a".repeat(40), "b".repeat(44));
    let pages = paginate(&sheet(&body), &short_page(), &mono());
    assert_eq!(pages[0].lines()[1..], [body.as_str()]);
}

#[test]
fn test_breaks_before_first_overflowing_word() {
    let body = format!("{} {} cc", "a".repeat(40), "b".repeat(44));
    let pages = paginate(&sheet(&body), &short_page(), &mono());
    let lines = pages[0].lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], format!("{} {}", "a".repeat(40), "b".repeat(44)));
    assert_eq!(lines[2], "cc");
}

#[test]
fn test_oversized_word_overflows_on_its_own_line() {
    let long = "x".repeat(120);
    let body = format!("short {} tail", long);
    let pages = paginate(&sheet(&body), &short_page(), &mono());
    assert_eq!(pages[0].lines()[1..], ["short", long.as_str(), "tail"]);
}

#[test]
fn test_empty_paragraph_adds_paragraph_gap() {
    let options = short_page();
    let tight = paginate(&sheet("a\nb"), &options, &mono());
    let loose = paginate(&sheet("a\n\nb"), &options, &mono());

    let tight_ys = body_ys(&tight[0]);
    let loose_ys = body_ys(&loose[0]);
    assert_eq!(tight_ys, vec![650.0, 630.0]);
    assert_eq!(loose_ys, vec![650.0, 625.0]);
}

#[test]
fn test_markup_is_stripped() {
    let pages = paginate(
        &sheet("## 1. Terms\n**Payment** is due *on* signing"),
        &short_page(),
        &mono(),
    );
    assert_eq!(
        pages[0].lines()[1..],
        ["1. Terms", "Payment is due on signing"]
    );
}

#[test]
fn test_header_layout() {
    let sheet = ContractSheet {
        metadata: vec![
            MetadataField::new("Vendor", "Jane Doe"),
            MetadataField::new("Email", "jane@example.com"),
        ],
        ..sheet("Body")
    };
    let pages = paginate(&sheet, &LayoutOptions::default(), &StandardMetrics);
    let page = &pages[0];

    match &page.ops[0] {
        DrawOp::Text {
            x, y, face, size, ..
        } => {
            assert_eq!((*x, *y), (50.0, 742.0));
            assert_eq!(*face, FontFace::Bold);
            assert_eq!(*size, 20.0);
        }
        other => panic!("expected title text, got {:?}", other),
    }
    assert_eq!(
        page.lines(),
        vec![
            "VENDOR AGREEMENT",
            "Vendor: Jane Doe",
            "Email: jane@example.com",
            "Body"
        ]
    );

    // 742 - 40 = 702, two metadata lines at 18 pt pitch, then a 20 pt gap
    let ys: Vec<f32> = page
        .ops
        .iter()
        .map(|op| match op {
            DrawOp::Text { y, .. } => *y,
            DrawOp::Image { y, .. } => *y,
        })
        .collect();
    assert_eq!(ys, vec![742.0, 702.0, 684.0, 646.0]);
}

#[test]
fn test_empty_sheet_still_has_one_page() {
    let pages = paginate_standard(&ContractSheet::default());
    assert_eq!(pages.len(), 1);
    assert!(pages[0].is_empty());
}

#[test]
fn test_error_body_is_plain_text() {
    let pages = paginate_standard(&sheet("Error: generation service unavailable"));
    assert_eq!(
        pages[0].lines()[1],
        "Error: generation service unavailable"
    );
}
