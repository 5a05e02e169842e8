use rocket::http::{ContentType, Status};

use crate::{
    error::UploadError,
    response::{Response, ResponseBuilder},
};

#[derive(rocket::FromForm)]
pub struct UploadForm<'r> {
    name: Option<String>,
    // Kept as a Result to be able to report it alongside a missing name
    media: rocket::form::Result<'r, rocket::fs::TempFile<'r>>,
}

/// Runs both checks and collects every failure instead of stopping at the first one
fn validate<'r>(
    id: &uuid::Uuid,
    form: UploadForm<'r>,
) -> Result<rocket::fs::TempFile<'r>, Vec<UploadError>> {
    let mut errors = Vec::new();

    if form.name.as_deref().unwrap_or_default().is_empty() {
        errors.push(UploadError::MissingName);
    }

    let media = match form.media {
        Ok(media) => Some(media),
        Err(e) => {
            debug!("[{id}] Could not retrieve the media field: {e}");
            errors.push(UploadError::MissingFile);
            None
        }
    };

    match media {
        Some(media) if errors.is_empty() => Ok(media),
        _ => Err(errors),
    }
}

/// Renders the error page with the given status
pub fn rejection<T: std::fmt::Display>(
    views: &crate::views::Views,
    status: Status,
    errors: &[T],
) -> Response {
    ResponseBuilder::default()
        .with_status(status)
        .with_content(views.upload_received(errors))
        .with_content_type(ContentType::HTML)
        .build()
}

///
/// This route is the only way to store a new media file
///
///     As input, it requires a multipart form with a non-empty `name` and a `media` file
///
///     The file type is sniffed from its content, and only allow-listed types are written to the media directory.
///     It returns the saved path on success and the error page (422) otherwise
///
#[rocket::post("/upload", data = "<form>")]
pub async fn api_upload(
    form: rocket::form::Form<UploadForm<'_>>,
    config: &rocket::State<crate::config::UploadConfig>,
    views: &rocket::State<crate::views::Views>,
    remote_addr: Option<std::net::SocketAddr>,
) -> Response {
    use {std::time::Instant, uuid::Uuid};
    let start_timer = Instant::now();

    let id = Uuid::new_v4();

    debug!(
        "[{id}] Received new upload request from {}",
        super::display_addr(remote_addr)
    );

    let media = match validate(&id, form.into_inner()) {
        Ok(media) => media,
        Err(errors) => {
            warn!("[{id}] Invalid upload form: {errors:?}");
            return rejection(views, Status::UnprocessableEntity, &errors);
        }
    };

    debug!(
        "[{id}] File name: {}\nDeclared type: {}\nFile size: {}",
        media.name().unwrap_or("NO_NAME"),
        media
            .content_type()
            .map(ToString::to_string)
            .unwrap_or_default(),
        media.len()
    );

    let path = match crate::media::store(&id, &media, &config.media_dir).await {
        Ok(path) => path,
        Err(e) => {
            use std::error::Error as _;
            error!(
                "[{id}] An error occured while storing the given data: {e}{}",
                e.source().map(|why| format!(" ({why})")).unwrap_or_default()
            );
            return rejection(views, Status::UnprocessableEntity, &[e]);
        }
    };

    let response = ResponseBuilder::default()
        .with_status(Status::Ok)
        .with_content(format!("Saved in {}", path.display()))
        .with_content_type(ContentType::Text)
        .build();

    info!(
        "[{id}] Responded {} in {:?}",
        response.status(),
        start_timer.elapsed()
    );
    response
}
