#[path = "routes/upload.rs"] // Naming conflict in main when registering route
mod upload_route;

#[allow(unused_imports)] // Used by main.rs
pub use upload_route::*;

#[rocket::get("/")]
pub async fn root() -> crate::response::Response {
    use rocket::http::ContentType;

    crate::response::Response::builder()
        .with_content(r#"<a href="/upload">Upload new media</a>"#)
        .with_content_type(ContentType::HTML)
        .build()
}

#[rocket::get("/upload")]
pub async fn upload_form(
    views: &rocket::State<crate::views::Views>,
    remote_addr: Option<std::net::SocketAddr>,
) -> crate::response::Response {
    use rocket::http::ContentType;

    trace!("Upload form query from {}", display_addr(remote_addr));

    crate::response::Response::builder()
        .with_content(views.upload())
        .with_content_type(ContentType::HTML)
        .build()
}

pub fn display_addr(remote_addr: Option<std::net::SocketAddr>) -> String {
    remote_addr
        .map(|addr| addr.to_string())
        .unwrap_or_else(|| "UNKNOWN ADDRESS".to_string())
}
