// Form failures on /upload are answered with the same error page as a failed validation

fn views<'a>(req: &'a rocket::Request<'_>) -> Option<&'a crate::views::Views> {
    let views = req.rocket().state::<crate::views::Views>();
    if views.is_none() {
        error!("Views are not managed, cannot render the error page");
    }
    views
}

fn text_fallback(status: rocket::http::Status, message: String) -> crate::response::Response {
    use rocket::http::ContentType;

    crate::response::Response::builder()
        .with_status(status)
        .with_content(message)
        .with_content_type(ContentType::Text)
        .build()
}

fn unparsable_form(req: &rocket::Request<'_>) -> crate::response::Response {
    use rocket::http::Status;

    let message = "Could not understand the given data.";
    warn!(
        "[{}] Unparsable upload form",
        crate::routes::display_addr(req.remote())
    );

    match views(req) {
        Some(views) => crate::routes::rejection(views, Status::UnprocessableEntity, &[message]),
        None => text_fallback(Status::UnprocessableEntity, message.to_string()),
    }
}

#[rocket::catch(400)]
pub fn upload_400(req: &rocket::Request<'_>) -> crate::response::Response {
    unparsable_form(req)
}

#[rocket::catch(422)]
pub fn upload_422(req: &rocket::Request<'_>) -> crate::response::Response {
    unparsable_form(req)
}

#[rocket::catch(413)]
pub fn upload_413(req: &rocket::Request<'_>) -> crate::response::Response {
    use rocket::http::Status;

    let limit = req
        .limits()
        .get("data-form")
        .map(|limit| limit.to_string())
        .unwrap_or_else(|| "[ERROR] Undefined".to_string());
    let message = format!("Data too large, {limit} max");
    warn!(
        "[{}] Upload rejected: {message}",
        crate::routes::display_addr(req.remote())
    );

    match views(req) {
        Some(views) => crate::routes::rejection(views, Status::PayloadTooLarge, &[&message]),
        None => text_fallback(Status::PayloadTooLarge, message),
    }
}

// Nothing could be read from a body that isn't a form, so both fields are missing
#[rocket::catch(415)]
pub fn upload_415(req: &rocket::Request<'_>) -> crate::response::Response {
    use {crate::error::UploadError, rocket::http::Status};

    warn!(
        "[{}] Upload with unsupported content type: {}",
        crate::routes::display_addr(req.remote()),
        req.content_type()
            .map(ToString::to_string)
            .unwrap_or_default()
    );

    let errors = [UploadError::MissingName, UploadError::MissingFile];
    match views(req) {
        Some(views) => crate::routes::rejection(views, Status::UnprocessableEntity, &errors),
        None => text_fallback(
            Status::UnprocessableEntity,
            errors.map(|e| e.to_string()).join("\n"),
        ),
    }
}
