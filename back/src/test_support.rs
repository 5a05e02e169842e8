use rocket::figment::Figment;

/// Server using the bundled views and the given media directory, with logs turned off
pub async fn test_rocket(media_dir: &std::path::Path) -> rocket::Rocket<rocket::Ignite> {
    test_rocket_with(media_dir, |figment| figment).await
}

pub async fn test_rocket_with(
    media_dir: &std::path::Path,
    customize: impl FnOnce(Figment) -> Figment,
) -> rocket::Rocket<rocket::Ignite> {
    let figment = rocket::Config::figment()
        .merge(("log_level", "off"))
        .merge(("media_dir", media_dir))
        .merge(("views_dir", crate::views::test_views_dir()));

    crate::build_rocket(customize(figment))
        .await
        .expect("test rocket should build")
}

const BOUNDARY: &str = "X-MEDIA-BOUNDARY";

/// Builds a multipart body, a `None` field is left out of the form
pub fn multipart_body(
    name: Option<&str>,
    media: Option<(&str, &[u8])>,
) -> (rocket::http::ContentType, Vec<u8>) {
    let mut body = Vec::new();

    if let Some(name) = name {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\n{name}\r\n"
            )
            .as_bytes(),
        );
    }

    if let Some((declared_type, content)) = media {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"media\"; filename=\"upload.bin\"\r\nContent-Type: {declared_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }

    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    let content_type = rocket::http::ContentType::new("multipart", "form-data")
        .with_params(("boundary", BOUNDARY));

    (content_type, body)
}
