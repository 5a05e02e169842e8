use crate::error::UploadError;

pub fn destination_path(media_dir: &std::path::Path, extension: &str) -> std::path::PathBuf {
    use std::time::{SystemTime, UNIX_EPOCH};

    // A clock set before 1970 would only produce a weird name, not a failed upload
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();

    media_dir.join(format!("{millis}.{extension}"))
}

pub async fn create_media_file(
    path: &std::path::Path,
) -> Result<rocket::tokio::fs::File, UploadError> {
    rocket::tokio::fs::OpenOptions::new()
        .create_new(true) // Two uploads in the same millisecond must not overwrite each other
        .write(true)
        .open(path)
        .await
        .map_err(|e| {
            error!("Could not create '{}' due to: {e}", path.display());
            UploadError::FileCreate { why: e }
        })
}

/// Copies the whole `source` into `destination`.
/// On failure the partially written file at `path` is removed.
pub async fn copy_into<R>(
    mut source: R,
    mut destination: rocket::tokio::fs::File,
    path: &std::path::Path,
) -> Result<u64, UploadError>
where
    R: rocket::tokio::io::AsyncRead + Unpin,
{
    use rocket::tokio::io::AsyncWriteExt as _;

    let copied = match rocket::tokio::io::copy(&mut source, &mut destination).await {
        Ok(written) => destination.flush().await.map(|()| written),
        Err(e) => Err(e),
    };

    let written = match copied {
        Ok(written) => written,
        Err(e) => {
            error!("Could not write to '{}' due to: {e}", path.display());
            drop(destination);

            if let Err(remove_e) = rocket::tokio::fs::remove_file(path).await {
                warn!(
                    "Could not remove partial file '{}' due to: {remove_e}",
                    path.display()
                );
            }

            return Err(UploadError::FileWrite { why: e });
        }
    };

    Ok(written)
}
