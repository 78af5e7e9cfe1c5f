use std::{borrow::Cow, fmt};

use romaji_width::width::StrToHalfWidth;

use crate::{
    ConvertError,
    geminate::{DoubledConsonant, GEMINATE_MARKER},
};

/// A row of an ATOK romaji map: `<input><whitespace><output>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MappingRow<'a> {
    pub input: &'a str,
    pub output: &'a str,
}

impl<'a> MappingRow<'a> {
    /// Returns `Ok(None)` for blank lines.
    ///
    /// Columns are separated by any Unicode whitespace, including the
    /// ideographic space (`U+3000`) ATOK puts between full-width columns.
    /// Columns after the second one are ignored.
    ///
    /// `line_number` is only used for error reporting.
    ///
    /// ```
    /// use romaji_map::row::MappingRow;
    ///
    /// let row = MappingRow::parse("ｋｋ　っ", 5).unwrap().unwrap();
    /// assert_eq!((row.input, row.output), ("ｋｋ", "っ"));
    /// assert_eq!(MappingRow::parse("", 6).unwrap(), None);
    /// assert!(MappingRow::parse("ｋｋ", 7).is_err());
    /// ```
    pub fn parse(line: &'a str, line_number: usize) -> Result<Option<Self>, ConvertError> {
        let mut columns = line.split_whitespace();
        let Some(input) = columns.next() else {
            return Ok(None);
        };
        let Some(output) = columns.next() else {
            return Err(ConvertError::Format {
                line: line_number,
                content: line.to_owned(),
            });
        };
        if columns.next().is_some() {
            log::trace!("line {line_number}: extra columns ignored");
        }
        Ok(Some(Self { input, output }))
    }
}

/// A row of a Google Japanese Input romaji table: `<input>\t<output>\t<next input>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConvertedRow<'a> {
    /// Always half-width.
    pub input: Cow<'a, str>,
    pub output: &'a str,
    pub next_input: Option<char>,
}

impl<'a> ConvertedRow<'a> {
    /// Normalize the input of an ATOK row to half-width.
    pub fn from_mapping(row: MappingRow<'a>) -> Self {
        Self {
            input: row.input.to_half_width(),
            output: row.output,
            next_input: None,
        }
    }

    /// The row an ATOK map implies for a doubled consonant, e.g. `kk` -> `っ` + `k`.
    pub fn geminate(d: DoubledConsonant) -> Self {
        Self {
            input: Cow::Borrowed(d.trigger()),
            output: GEMINATE_MARKER,
            next_input: Some(d.follow_up()),
        }
    }

    /// Serialize with `placeholder` standing in for an empty next input.
    ///
    /// ```
    /// use romaji_map::{geminate::DoubledConsonant, row::ConvertedRow};
    ///
    /// let row = ConvertedRow::geminate(DoubledConsonant::Kk);
    /// assert_eq!(row.display(' ').to_string(), "kk\tっ\tk");
    /// ```
    pub fn display(&self, placeholder: char) -> RowDisplay<'_, 'a> {
        RowDisplay {
            row: self,
            placeholder,
        }
    }
}

/// The default placeholder is a single space.
impl fmt::Display for ConvertedRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display(' '), f)
    }
}

/// See [`ConvertedRow::display()`].
pub struct RowDisplay<'r, 'a> {
    row: &'r ConvertedRow<'a>,
    placeholder: char,
}

impl fmt::Display for RowDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = self.row;
        write!(
            f,
            "{}\t{}\t{}",
            row.input,
            row.output,
            row.next_input.unwrap_or(self.placeholder)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        fn row(line: &str) -> MappingRow<'_> {
            MappingRow::parse(line, 1).unwrap().unwrap()
        }
        assert_eq!(
            row("ka\tか"),
            MappingRow {
                input: "ka",
                output: "か"
            }
        );
        assert_eq!(row("  ka   か  ").input, "ka");
        assert_eq!(row("  ka   か  ").output, "か");
        assert_eq!(row("ｔｓｕ　つ").input, "ｔｓｕ");
        assert_eq!(row("ｔｓｕ　つ").output, "つ");
        assert_eq!(row("nn ん extra columns").output, "ん");
    }

    #[test]
    fn blank() {
        for line in ["", " ", "\t", "\u{3000}", " \t\u{3000} "] {
            assert_eq!(MappingRow::parse(line, 1), Ok(None), "{line:?}");
        }
    }

    #[test]
    fn one_column() {
        assert_eq!(
            MappingRow::parse("ｋｙａ ", 12),
            Err(ConvertError::Format {
                line: 12,
                content: "ｋｙａ ".into()
            })
        );
    }

    #[test]
    fn convert() {
        let row = ConvertedRow::from_mapping(MappingRow {
            input: "ｂｂ",
            output: "ぶ",
        });
        assert_eq!(row.input, "bb");
        assert_eq!(row.next_input, None);
        assert_eq!(row.to_string(), "bb\tぶ\t ");
        assert_eq!(row.display('\u{0}').to_string(), "bb\tぶ\t\u{0}");

        assert!(matches!(
            ConvertedRow::from_mapping(MappingRow {
                input: "ka",
                output: "か"
            })
            .input,
            Cow::Borrowed("ka")
        ));
    }

    #[test]
    fn geminate() {
        let row = ConvertedRow::geminate(DoubledConsonant::Zz);
        assert_eq!(row.to_string(), "zz\tっ\tz");
        assert_eq!(row.display('_').to_string(), "zz\tっ\tz");
    }
}
