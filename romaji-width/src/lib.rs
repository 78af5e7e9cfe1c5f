//! Unicode width utils.
/*!
## Features
- [Full-width to half-width](width) normalization of the
  [Halfwidth and Fullwidth Forms](https://www.unicode.org/charts/PDF/UFF00.pdf) Latin block
- Fast [ASCII](ascii) detection, so already half-width strings are never copied

## Usage
```
use romaji_width::width::StrToHalfWidth;

assert_eq!("ｋｙａ".to_half_width(), "kya");
assert_eq!("きゃ".to_half_width(), "きゃ");
```

## Crate features
*/
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", doc = document_features::document_features!())]
pub mod ascii;
pub mod width;

mod private {
    pub trait Sealed {}
}
use private::Sealed;

impl Sealed for char {}
impl Sealed for str {}
