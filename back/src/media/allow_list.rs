/// Sniffed MIME type → stored extension, in the order they are listed to clients
pub const ALLOWED_UPLOAD_TYPES: [(&str, &str); 4] = [
    ("audio/mpeg", "mp3"),
    ("video/mp4", "mp4"),
    ("video/webm", "webm"),
    ("audio/wav", "wav"),
];

lazy_static! {
    static ref ALLOWED_UPLOAD_MAP: std::collections::HashMap<&'static str, &'static str> =
        ALLOWED_UPLOAD_TYPES.into_iter().collect();
}

pub fn extension_for(mime_type: &str) -> Option<&'static str> {
    ALLOWED_UPLOAD_MAP.get(mime_type).copied()
}

/// "mp3, mp4, webm, or wav"
pub fn accepted_extensions() -> String {
    let extensions = ALLOWED_UPLOAD_TYPES
        .iter()
        .map(|(_, ext)| *ext)
        .collect::<Vec<&str>>();

    match extensions.split_last() {
        Some((last, [])) => last.to_string(),
        Some((last, rest)) => format!("{}, or {last}", rest.join(", ")),
        None => String::new(),
    }
}
