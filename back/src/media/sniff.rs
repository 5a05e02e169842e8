// The detector spells WAV in several ways, the allow-list only knows one of them
const WAV_ALIASES: &[&str] = &["audio/x-wav", "audio/wave", "audio/vnd.wave"];

/// Detects the MIME type of `contents` from its magic bytes.
pub fn detect(contents: &[u8]) -> Option<&'static str> {
    let mime_type = infer::get(contents)?.mime_type();

    if WAV_ALIASES.contains(&mime_type) {
        return Some("audio/wav");
    }

    Some(mime_type)
}


#[cfg(test)]
mod tests {
    use super::{detect, samples};

    #[test]
    fn detects_allowed_media() {
        assert_eq!(detect(&samples::mp3()), Some("audio/mpeg"));
        assert_eq!(detect(&samples::mp4()), Some("video/mp4"));
        assert_eq!(detect(&samples::webm()), Some("video/webm"));
        assert_eq!(detect(&samples::wav()), Some("audio/wav"));
    }

    #[test]
    fn detects_other_types_as_is() {
        assert_eq!(detect(&samples::png()), Some("image/png"));
    }

    #[test]
    fn unknown_content() {
        assert_eq!(detect(b"just some plain text"), None);
        assert_eq!(detect(&[]), None);
    }
}
