/*
    Two html views, read once at startup from the views directory:
    - upload.html: the upload form, served as is
    - upload-received.html: the error page, `{{errors}}` is replaced by one <li> per message
*/

const UPLOAD_VIEW: &str = "upload.html";
const UPLOAD_RECEIVED_VIEW: &str = "upload-received.html";
const ERRORS_PLACEHOLDER: &str = "{{errors}}";

pub struct Views {
    upload: String,
    upload_received: String,
}

impl Views {
    pub fn load(dir: &std::path::Path) -> Result<Self, crate::error::StartupError> {
        let read_view = |name: &str| -> Result<String, crate::error::StartupError> {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|e| crate::error::StartupError::ViewLoad {
                file: path.display().to_string(),
                why: e,
            })
        };

        let views = Self {
            upload: read_view(UPLOAD_VIEW)?,
            upload_received: read_view(UPLOAD_RECEIVED_VIEW)?,
        };

        if !views.upload_received.contains(ERRORS_PLACEHOLDER) {
            warn!("{UPLOAD_RECEIVED_VIEW} has no {ERRORS_PLACEHOLDER} placeholder, errors won't be displayed");
        }

        Ok(views)
    }

    pub fn upload(&self) -> &str {
        &self.upload
    }

    pub fn upload_received<T: std::fmt::Display>(&self, errors: &[T]) -> String {
        let items = errors.iter().fold(String::new(), |mut out, error| {
            out.push_str("<li>");
            out.push_str(&escape_html(&error.to_string()));
            out.push_str("</li>");
            out
        });

        self.upload_received.replace(ERRORS_PLACEHOLDER, &items)
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
pub fn test_views_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../views")
}
