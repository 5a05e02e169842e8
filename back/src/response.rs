pub struct Response {
    status: rocket::http::Status,
    content: Vec<u8>,
    content_type: rocket::http::ContentType,
}

impl Response {
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder::default()
    }

    pub fn status(&self) -> &rocket::http::Status {
        &self.status
    }
}

impl<'r> rocket::response::Responder<'r, 'static> for Response {
    fn respond_to(self, _: &'r rocket::Request<'_>) -> rocket::response::Result<'static> {
        use {
            rocket::response::{Builder, Response},
            std::io::Cursor,
        };

        let mut resp = Builder::new(Response::default());

        resp.status(self.status);

        resp.raw_header("Content-Type", self.content_type.to_string());

        resp.sized_body(self.content.len(), Cursor::new(self.content));

        resp.ok()
    }
}

pub struct ResponseBuilder {
    inner: Response,
}

impl ResponseBuilder {
    pub fn with_content(mut self, value: impl Into<Vec<u8>>) -> Self {
        self.inner.content = value.into();
        self
    }

    pub fn with_content_type(mut self, ctype: rocket::http::ContentType) -> Self {
        self.inner.content_type = ctype;
        self
    }

    pub fn with_status(mut self, status: rocket::http::Status) -> Self {
        self.inner.status = status;
        self
    }

    pub fn build(self) -> Response {
        self.inner
    }
}

impl Default for ResponseBuilder {
    fn default() -> Self {
        use rocket::http::{ContentType, Status};

        ResponseBuilder {
            inner: Response {
                status: Status::Ok,
                content: Vec::new(),
                content_type: ContentType::Any,
            },
        }
    }
}
