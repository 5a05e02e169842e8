/*
    Media storage: one file per accepted upload
    - Type detection:
        The uploaded bytes are sniffed, the client's filename and declared content type are never trusted.
    - Allow-list:
        Only the types in allow_list::ALLOWED_UPLOAD_TYPES are stored, each one maps to a fixed extension.
    - Stored files:
        `<media_dir>/<unix ms timestamp>.<extension>`, opened with create_new so a collision fails instead of overwriting.
*/

mod allow_list;
mod fs;
mod sniff;

pub use allow_list::accepted_extensions;
#[cfg(test)]
pub use sniff::samples;

use crate::error::UploadError;

/// Sniffs the uploaded file, then copies it to a freshly created file in `media_dir`.
/// Returns the path the file was saved to.
pub async fn store(
    id: &uuid::Uuid,
    file: &rocket::fs::TempFile<'_>,
    media_dir: &std::path::Path,
) -> Result<std::path::PathBuf, UploadError> {
    use rocket::tokio::io::AsyncReadExt as _;

    let mut contents = Vec::with_capacity(file.len() as usize);
    {
        let source = file
            .open()
            .await
            .map_err(|e| UploadError::FileOpen { why: e })?;
        rocket::tokio::pin!(source);

        source
            .read_to_end(&mut contents)
            .await
            .map_err(|e| UploadError::FileRead { why: e })?;
    }

    let mime_type = sniff::detect(&contents);
    let Some(extension) = mime_type.and_then(allow_list::extension_for) else {
        warn!(
            "[{id}] Rejected upload with sniffed type: {}",
            mime_type.unwrap_or("unknown")
        );
        return Err(UploadError::WrongFileType);
    };

    debug!(
        "[{id}] Sniffed {} bytes as {} (.{extension})",
        contents.len(),
        mime_type.unwrap_or_default()
    );

    // The sniffing buffer is not reused, the copy reads the upload again from its start
    drop(contents);

    let source = file
        .open()
        .await
        .map_err(|e| UploadError::FileOpen { why: e })?;
    rocket::tokio::pin!(source);

    let path = fs::destination_path(media_dir, extension);
    let destination = fs::create_media_file(&path).await?;

    let written = fs::copy_into(source, destination, &path).await?;

    debug!("[{id}] Wrote {written} bytes to {}", path.display());

    Ok(path)
}
