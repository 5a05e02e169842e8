/// Application keys read from Rocket's figment (`Rocket.toml`, `ROCKET_*` env vars)
#[derive(Debug, Clone, serde::Deserialize)]
pub struct UploadConfig {
    #[serde(default = "default_media_dir")]
    pub media_dir: std::path::PathBuf,

    #[serde(default = "default_views_dir")]
    pub views_dir: std::path::PathBuf,
}

fn default_media_dir() -> std::path::PathBuf {
    std::path::PathBuf::from("media")
}

fn default_views_dir() -> std::path::PathBuf {
    std::path::PathBuf::from("views")
}

impl UploadConfig {
    pub fn from_figment(figment: &rocket::figment::Figment) -> Result<Self, crate::error::StartupError> {
        Ok(figment.extract::<Self>()?)
    }

    /// Creates the media directory if it isn't there yet
    pub fn prepare_media_dir(&self) -> Result<(), crate::error::StartupError> {
        std::fs::create_dir_all(&self.media_dir).map_err(|e| {
            crate::error::StartupError::MediaDirCreate {
                dir: self.media_dir.display().to_string(),
                why: e,
            }
        })
    }
}
