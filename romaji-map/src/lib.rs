//! Convert [ATOK](https://www.justsystems.com/jp/products/atok/) romaji maps to
//! [Google Japanese Input](https://www.google.co.jp/ime/) (Mozc) romaji tables.
//!
//! ## Usage
//! ```rust
//! use romaji_map::Converter;
//!
//! // Header lines of the ATOK export, then `<input> <output>` rows
//! let atok = "[ATOK]\r\nversion\r\n\r\n\r\nｋｋ\tっ\r\nｌｔｓｕ\tっ\r\n";
//! let (bytes, _, _) = encoding_rs::SHIFT_JIS.encode(atok);
//!
//! let converter = Converter::default();
//! let table = converter.convert(&bytes).unwrap();
//! let mut lines = table.lines();
//! assert_eq!(lines.next(), Some("kk\tっ\t "));
//! assert_eq!(lines.next(), Some("ltsu\tっ\t "));
//! // `kk` is defined, the other 19 doubled consonants are added
//! assert_eq!(lines.next(), Some("bb\tっ\tb"));
//! assert_eq!(table.lines().count(), 2 + 19);
//! ```
//!
//! ## Conversion
//! 1. The export is decoded strictly from Shift_JIS. Malformed bytes are an error.
//! 2. The text is split on `\r\n`, `\n` and bare `\r`. The first 4 lines are the
//!    export header and are skipped without validation.
//! 3. Each non-blank line is split on whitespace; the first column is normalized
//!    to [half-width](romaji_width::width), the second is kept verbatim.
//! 4. ATOK geminates [doubled consonants](geminate) implicitly, so every one
//!    the map doesn't define gets an explicit `kk\tっ\tk` row, appended in
//!    table order.
//! 5. Rows are written as `<input>\t<output>\t<next input>` and joined with `\n`.
//!    Rows without a next input get a space, so every row has three fields.
//!
//! Conversion is a pure function of the input bytes, and [`Converter`] can be
//! shared between threads.
//!
//! ## Features
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]
use std::iter;

use bon::Builder;
use encoding_rs::{Encoding, SHIFT_JIS};
use itertools::Itertools;

mod decode;
mod error;
pub mod geminate;
pub mod row;

pub use error::ConvertError;

use geminate::DoubledConsonant;
use row::{ConvertedRow, MappingRow};

/// Number of header lines in an ATOK romaji map export.
pub const ATOK_HEADER_LINES: usize = 4;

/// ## Example
/// ```
/// use romaji_map::Converter;
///
/// let converter = Converter::builder()
///     .encoding(encoding_rs::UTF_8)
///     .header_lines(0)
///     .build();
/// let table = converter.convert("ｘｔｕ\tっ".as_bytes()).unwrap();
/// assert!(table.starts_with("xtu\tっ\t \nbb\tっ\tb\n"));
/// ```
#[derive(Builder, Clone, Debug)]
pub struct Converter {
    /// Default: [`SHIFT_JIS`], what ATOK exports.
    #[builder(default = SHIFT_JIS)]
    encoding: &'static Encoding,

    /// Lines skipped unconditionally at the start of the source.
    ///
    /// Default: [`ATOK_HEADER_LINES`]
    #[builder(default = ATOK_HEADER_LINES)]
    header_lines: usize,

    /// Written as the third field of rows without a next input.
    ///
    /// Default: `' '`
    #[builder(default = ' ')]
    placeholder: char,
}

impl Default for Converter {
    /// Use [`ConverterBuilder`] for more options.
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Converter {
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Decode an ATOK export and convert it. See [crate docs](crate#conversion).
    pub fn convert(&self, bytes: &[u8]) -> Result<String, ConvertError> {
        let text = decode::decode_strict(self.encoding, bytes)?;
        self.convert_str(&text)
    }

    /// [`convert()`](Self::convert) for already decoded text.
    pub fn convert_str(&self, text: &str) -> Result<String, ConvertError> {
        let rows = self.convert_rows(text)?;
        Ok(rows
            .iter()
            .map(|row| row.display(self.placeholder))
            .join("\n"))
    }

    /// Source rows in order, followed by the synthesized doubled consonant rows.
    ///
    /// ## Example
    /// ```
    /// use romaji_map::{geminate::DoubledConsonant, Converter};
    ///
    /// let rows = Converter::default()
    ///     .convert_rows("1\n2\n3\n4\nｂｂ　ぶ\n")
    ///     .unwrap();
    /// assert_eq!(rows.len(), DoubledConsonant::COUNT);
    /// assert_eq!(rows[0].input, "bb");
    /// assert_eq!(rows[0].output, "ぶ");
    /// assert_eq!(rows[1].input, "cc");
    /// assert_eq!(rows[1].next_input, Some('c'));
    /// ```
    pub fn convert_rows<'a>(&self, text: &'a str) -> Result<Vec<ConvertedRow<'a>>, ConvertError> {
        let mut defined = [false; DoubledConsonant::COUNT];
        let mut rows = Vec::new();

        for (i, line) in lines(text).enumerate().skip(self.header_lines) {
            let Some(row) = MappingRow::parse(line, i + 1)? else {
                continue;
            };
            let row = ConvertedRow::from_mapping(row);
            if let Some(d) = DoubledConsonant::from_trigger(&row.input) {
                log::trace!("line {}: {} is defined", i + 1, d.trigger());
                defined[d as usize] = true;
            }
            rows.push(row);
        }

        let source_rows = rows.len();
        rows.extend(
            DoubledConsonant::ALL
                .into_iter()
                .filter(|&d| !defined[d as usize])
                .map(ConvertedRow::geminate),
        );
        log::debug!(
            "converted {source_rows} rows, added {} doubled consonants",
            rows.len() - source_rows
        );

        Ok(rows)
    }
}

/// Like [`str::lines()`], but a bare `\r` also ends a line.
///
/// `\r\n` is a single line ending, and a final line ending doesn't start an empty line.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text).filter(|s| !s.is_empty());
    iter::from_fn(move || {
        let s = rest?;
        let Some(i) = s.find(['\r', '\n']) else {
            rest = None;
            return Some(s);
        };
        let next = if s[i..].starts_with("\r\n") { i + 2 } else { i + 1 };
        rest = Some(&s[next..]).filter(|s| !s.is_empty());
        Some(&s[..i])
    })
}
