use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use wc_logging::wc_warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedText {
    pub text: String,
    pub encoding_label: String,
    /// True when the encoding had to be guessed rather than read from a BOM
    /// or confirmed as valid UTF-8.
    pub detected: bool,
    /// True when malformed sequences were replaced with U+FFFD.
    pub replaced: bool,
}

impl DecodedText {
    /// Lines with their terminators removed. `\n`, `\r\n` and a lone `\r`
    /// each end a line; a final terminator does not start an empty line.
    pub fn lines(&self) -> InputLines<'_> {
        InputLines { rest: &self.text }
    }
}

#[derive(Debug, Clone)]
pub struct InputLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for InputLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(['\n', '\r']) {
            Some(end) => {
                let line = &self.rest[..end];
                let terminator = if self.rest[end..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[end + terminator..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Decode raw input bytes using: BOM -> strict UTF-8 -> chardetng fallback.
///
/// Never fails: malformed sequences become U+FFFD and are logged.
pub fn decode_text(bytes: &[u8]) -> DecodedText {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding, false);
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return DecodedText {
            text: text.to_owned(),
            encoding_label: UTF_8.name().to_string(),
            detected: false,
            replaced: false,
        };
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc, true)
}

fn decode_with(bytes: &[u8], enc: &'static Encoding, detected: bool) -> DecodedText {
    // `decode` strips a matching BOM itself.
    let (text, used, had_errors) = enc.decode(bytes);
    if had_errors {
        wc_warn!(
            "Malformed {} input; invalid sequences replaced with U+FFFD",
            used.name()
        );
    }
    DecodedText {
        text: text.into_owned(),
        encoding_label: used.name().to_string(),
        detected,
        replaced: had_errors,
    }
}
