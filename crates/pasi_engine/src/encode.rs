use std::io;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use pasi_core::FileHandle;
use widget_logging::widget_debug;

use crate::ReadFailure;

#[async_trait::async_trait]
pub trait FileEncoder: Send + Sync {
    /// Reads the whole file and returns it as a `data:` URI.
    async fn encode(&self, file: &FileHandle) -> Result<String, ReadFailure>;
}

/// Reads file content from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsFileEncoder;

#[async_trait::async_trait]
impl FileEncoder for FsFileEncoder {
    async fn encode(&self, file: &FileHandle) -> Result<String, ReadFailure> {
        let path = file.location.display().to_string();
        let bytes = tokio::fs::read(&file.location)
            .await
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => ReadFailure::NotFound { path: path.clone() },
                _ => ReadFailure::Io {
                    path: path.clone(),
                    message: err.to_string(),
                },
            })?;
        if bytes.is_empty() {
            return Err(ReadFailure::Empty { path });
        }
        widget_debug!("read {} bytes from {}", bytes.len(), path);
        Ok(encode_data_uri(&file.name, &bytes))
    }
}

/// Builds `data:<mime>;base64,<content>` for the given file name and bytes.
pub fn encode_data_uri(name: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_for_name(name), STANDARD.encode(bytes))
}

/// Guess the MIME type from the file extension.
pub fn mime_for_name(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" | "jfif" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "heic" => "image/heic",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}
