// The Display impl of each variant is what the client sees in the error list
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Missing name!")]
    MissingName,

    #[error("Missing or invalid file")]
    MissingFile,

    #[error("Failed to parse file")]
    FileOpen {
        #[source]
        why: std::io::Error,
    },

    #[error("Could not read the uploaded file")]
    FileRead {
        #[source]
        why: std::io::Error,
    },

    #[error("Invalid file type. Must be one of: {}", crate::media::accepted_extensions())]
    WrongFileType,

    // Raw io error text, the path stays in the logs
    #[error("{why}")]
    FileCreate { why: std::io::Error },

    #[error("{why}")]
    FileWrite { why: std::io::Error },
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Could not read the configuration due to: {0}")]
    Config(#[from] rocket::figment::Error),

    #[error("Could not create media directory '{dir}' due to: {why}")]
    MediaDirCreate { dir: String, why: std::io::Error },

    #[error("Could not load view '{file}' due to: {why}")]
    ViewLoad { file: String, why: std::io::Error },

    #[error("Rocket failed to ignite: {0}")]
    Ignite(#[from] rocket::Error),
}
