//! Text width measurement.
//!
//! Widths come from static advance tables, not from font files: the layout
//! only needs to know where a line must break, and the standard Type1
//! fonts are never embedded.

use crate::types::FontFace;

/// Measures the rendered width of a run of text, in points.
pub trait TextMeasure {
    fn text_width(&self, text: &str, face: FontFace, size: f32) -> f32;
}

/// Advance widths of the standard Helvetica and Helvetica-Bold fonts
/// (Adobe AFM, 1/1000 em), indexed by `char - 0x20` over 0x20..=0x7E.
///
/// ```text
/// [0]=sp  [1]=!   [2]="   [3]=#   [4]=$   [5]=%   [6]=&   [7]='
/// [8]=(   [9]=)   [10]=*  [11]=+  [12]=,  [13]=-  [14]=.  [15]=/
/// [16..25]=0-9
/// [26]=:  [27]=;  [28]=<  [29]==  [30]=>  [31]=?  [32]=@
/// [33..58]=A-Z
/// [59]=[  [60]=\  [61]=]  [62]=^  [63]=_  [64]=`
/// [65..90]=a-z
/// [91]={  [92]=|  [93]=}  [94]=~
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardMetrics;

/// Width used for characters outside the tables
const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
static HELVETICA: [u16; 95] = [
    // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    278, 278, 584, 584, 584, 556, 1015,
    // A-M
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    // N-Z
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    278, 278, 278, 469, 556, 333,
    // a-m
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    // n-z
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // {    |    }    ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
static HELVETICA_BOLD: [u16; 95] = [
    // sp   !    "    #    $    %    &    '    (    )    *    +    ,    -    .    /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // :    ;    <    =    >    ?    @
    333, 333, 584, 584, 584, 611, 975,
    // A-M
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    // N-Z
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [    \    ]    ^    _    `
    333, 278, 333, 584, 556, 333,
    // a-m
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    // n-z
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // {    |    }    ~
    389, 280, 389, 584,
];

impl StandardMetrics {
    fn advance(face: FontFace, c: char) -> u16 {
        let table = match face {
            FontFace::Regular => &HELVETICA,
            FontFace::Bold => &HELVETICA_BOLD,
        };
        let code = c as usize;
        if (0x20..=0x7E).contains(&code) {
            table[code - 0x20]
        } else {
            FALLBACK_WIDTH
        }
    }
}

impl TextMeasure for StandardMetrics {
    fn text_width(&self, text: &str, face: FontFace, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| Self::advance(face, c) as u32).sum();
        units as f32 / 1000.0 * size
    }
}

/// Every character advances by the same fraction of the font size.
/// Gives layouts whose line breaks can be predicted by counting characters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    pub advance_em: f32,
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self { advance_em: 0.6 }
    }
}

impl TextMeasure for MonospaceMetrics {
    fn text_width(&self, text: &str, _face: FontFace, size: f32) -> f32 {
        text.chars().count() as f32 * self.advance_em * size
    }
}
