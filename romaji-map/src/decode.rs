use encoding_rs::{DecoderResult, Encoding};

use crate::ConvertError;

/// Decode without replacement characters, so a broken export is reported
/// instead of being converted into `�` rows.
pub(crate) fn decode_strict(
    encoding: &'static Encoding,
    bytes: &[u8],
) -> Result<String, ConvertError> {
    let mut decoder = encoding.new_decoder_without_bom_handling();
    let mut text = String::with_capacity(
        decoder
            .max_utf8_buffer_length_without_replacement(bytes.len())
            .unwrap_or(bytes.len()),
    );

    let mut read = 0;
    loop {
        let (result, n) =
            decoder.decode_to_string_without_replacement(&bytes[read..], &mut text, true);
        read += n;
        match result {
            DecoderResult::InputEmpty => return Ok(text),
            DecoderResult::OutputFull => text.reserve(
                decoder
                    .max_utf8_buffer_length_without_replacement(bytes.len() - read)
                    .unwrap_or(bytes.len() - read)
                    .max(4),
            ),
            DecoderResult::Malformed(malformed, extra) => {
                let offset = read.saturating_sub(malformed as usize + extra as usize);
                log::debug!("malformed {} sequence at {offset}", encoding.name());
                return Err(ConvertError::Decode {
                    encoding: encoding.name(),
                    offset,
                });
            }
        }
    }
}
