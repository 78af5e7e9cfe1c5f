use thiserror::Error;

/// Why a conversion failed. Nothing is produced on failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The source bytes are not valid in the configured encoding.
    #[error("source is not valid {encoding}: malformed byte sequence at offset {offset}")]
    Decode {
        encoding: &'static str,
        /// Byte offset of the first malformed sequence.
        offset: usize,
    },

    /// A non-blank line has fewer than two columns.
    #[error("line {line}: expected `<input> <output>`, found {content:?}")]
    Format {
        /// 1-based, counted from the top of the file including the header.
        line: usize,
        content: String,
    },
}

impl ConvertError {
    pub fn kind(&self) -> &'static str {
        match self {
            ConvertError::Decode { .. } => "decode",
            ConvertError::Format { .. } => "format",
        }
    }
}
