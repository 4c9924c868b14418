//! Turning an `<img src>` into an [`ImageSource`] for vision requests.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::debug;

use altwise_protocols::{ImageSource, ImageSourceError, mime_for_path};

/// Byte access for local image files.
#[async_trait]
pub trait ImageReader: Send + Sync {
    async fn read(&self, path: &Path) -> Result<Vec<u8>, ImageSourceError>;
}

/// Reads from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageReader;

#[async_trait]
impl ImageReader for FsImageReader {
    async fn read(&self, path: &Path) -> Result<Vec<u8>, ImageSourceError> {
        tokio::fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => ImageSourceError::NotFound(path.to_path_buf()),
            _ => ImageSourceError::Io(e),
        })
    }
}

/// Parse a `data:<mime>[;base64],<payload>` URI.
///
/// Payloads without the `;base64` marker are encoded as-is.
pub fn parse_data_uri(uri: &str) -> Option<ImageSource> {
    let rest = uri.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;

    let mut params = meta.split(';');
    let media_type = match params.next() {
        Some(m) if !m.trim().is_empty() => m.trim().to_ascii_lowercase(),
        _ => "text/plain".to_string(),
    };
    let is_base64 = params.any(|p| p.trim().eq_ignore_ascii_case("base64"));

    let data = if is_base64 {
        payload.trim().to_string()
    } else {
        STANDARD.encode(payload.as_bytes())
    };
    Some(ImageSource::base64(media_type, data))
}

fn strip_query(src: &str) -> &str {
    src.split(['?', '#']).next().unwrap_or(src)
}

fn local_path(src: &str, base_dir: Option<&Path>) -> Result<PathBuf, ImageSourceError> {
    if let Some(rest) = src.strip_prefix("file://") {
        return Ok(PathBuf::from(strip_query(rest)));
    }

    // `/img/a.png` is a site-root web path, not a filesystem one.
    let trimmed = strip_query(src);
    let path = match trimmed.strip_prefix('/') {
        Some(rooted) => Path::new(rooted.trim_start_matches('/')),
        None if Path::new(trimmed).is_absolute() => return Ok(PathBuf::from(trimmed)),
        None => Path::new(trimmed),
    };
    match base_dir {
        Some(dir) => Ok(dir.join(path)),
        None => Err(ImageSourceError::Unresolvable(src.to_string())),
    }
}

/// Resolve an image source for vision mode.
///
/// Remote URLs and data URIs pass through without I/O. Local paths are read
/// through `reader` and base64-encoded. Relative and site-root (`/…`) paths
/// are joined to `base_dir` and are unresolvable without one.
pub async fn resolve_img_source(
    src: &str,
    base_dir: Option<&Path>,
    reader: &dyn ImageReader,
) -> Result<ImageSource, ImageSourceError> {
    let src = src.trim();
    if src.is_empty() {
        return Err(ImageSourceError::Unresolvable(String::new()));
    }

    let lower = src.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        return Ok(ImageSource::url(src));
    }
    if src.starts_with("//") {
        return Ok(ImageSource::url(format!("https:{}", src)));
    }
    if lower.starts_with("data:") {
        return parse_data_uri(src).ok_or_else(|| ImageSourceError::Unresolvable(src.to_string()));
    }

    let path = local_path(src, base_dir)?;
    debug!(path = %path.display(), "reading local image");
    let bytes = reader.read(&path).await?;
    let media_type = mime_for_path(&path.to_string_lossy());
    Ok(ImageSource::base64(media_type, STANDARD.encode(bytes)))
}
