/*!
## Full-width forms
The "full-width forms" in this module are the code points `U+FF01..=U+FF5E` of the
[Halfwidth and Fullwidth Forms](https://www.unicode.org/charts/PDF/UFF00.pdf) block,
i.e. the full-width counterparts of the printable ASCII characters `!` to `~`.
Each one sits exactly [`FULL_WIDTH_OFFSET`] above its ASCII form.

Other wide characters are left alone, notably:
- `U+3000` (ideographic space), which is not in the block.
- `U+FF5F..` (full-width brackets, half-width katakana), which have no ASCII form.
- Kana and kanji.
*/
use std::borrow::Cow;

use crate::{ascii::find_non_ascii_byte, Sealed};

/// `！`
pub const FULL_WIDTH_START: char = '\u{FF01}';
/// `～`
pub const FULL_WIDTH_END: char = '\u{FF5E}';
/// Distance between a full-width form and its ASCII form.
pub const FULL_WIDTH_OFFSET: u32 = 0xFEE0;

#[inline]
pub const fn is_full_width(c: char) -> bool {
    matches!(c, FULL_WIDTH_START..=FULL_WIDTH_END)
}

pub trait CharToHalfWidth: Sealed {
    /// Map a [full-width form](super::width) to its ASCII form.
    /// Any other char is returned unchanged.
    ///
    /// ```
    /// use romaji_width::width::CharToHalfWidth;
    ///
    /// assert_eq!('ｋ'.to_half_width(), 'k');
    /// assert_eq!('～'.to_half_width(), '~');
    /// assert_eq!('っ'.to_half_width(), 'っ');
    /// ```
    fn to_half_width(self) -> char;
}

impl CharToHalfWidth for char {
    #[inline]
    fn to_half_width(self) -> char {
        if is_full_width(self) {
            // Always in 0x21..=0x7E
            (self as u32 - FULL_WIDTH_OFFSET) as u8 as char
        } else {
            self
        }
    }
}

pub trait StrToHalfWidth: Sealed {
    /// See [`CharToHalfWidth::to_half_width()`].
    ///
    /// The string is only copied if it contains a full-width form.
    ///
    /// ```
    /// use std::borrow::Cow;
    /// use romaji_width::width::StrToHalfWidth;
    ///
    /// assert_eq!("ｂｂ".to_half_width(), "bb");
    /// assert!(matches!("bb".to_half_width(), Cow::Borrowed("bb")));
    /// ```
    fn to_half_width(&self) -> Cow<'_, str>;
}

impl StrToHalfWidth for str {
    fn to_half_width(&self) -> Cow<'_, str> {
        let Some(start) = find_non_ascii_byte(self.as_bytes()) else {
            return Cow::Borrowed(self);
        };
        // The first non-ASCII byte of valid UTF-8 is always a leading byte
        let Some((i, _)) = self[start..]
            .char_indices()
            .find(|&(_, c)| is_full_width(c))
        else {
            return Cow::Borrowed(self);
        };
        let i = start + i;

        let mut s = String::with_capacity(self.len());
        s.push_str(&self[..i]);
        s.extend(self[i..].chars().map(CharToHalfWidth::to_half_width));
        Cow::Owned(s)
    }
}
