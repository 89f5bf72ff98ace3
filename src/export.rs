//! Text preparation for the PDF export collaborator.
//!
//! The downstream renderer works in a single-byte-per-character encoding
//! (Latin-1), so exported content is truncated to a page budget and
//! transliterated, substituting `?` for anything the encoding cannot hold.

const SUBSTITUTE: char = '?';

/// Truncate to `max_chars` characters (on a char boundary) and replace
/// every character outside the Latin-1 range with [`SUBSTITUTE`].
pub fn prepare_report_text(text: &str, max_chars: usize) -> String {
    text.chars()
        .take(max_chars)
        .map(|c| if (c as u32) <= 0xFF { c } else { SUBSTITUTE })
        .collect()
}

/// Encode prepared text as Latin-1 bytes. Characters outside the range are
/// substituted here too, so the output is always exactly one byte per
/// character.
pub fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            if code <= 0xFF {
                code as u8
            } else {
                SUBSTITUTE as u8
            }
        })
        .collect()
}
