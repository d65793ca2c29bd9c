//! Profile picture loading.
//!
//! A picked file is read on tokio's blocking pool and turned into a
//! `data:<mime>;base64,...` URL. The UI thread polls the pending
//! [`AvatarUpload`] once per frame and applies the result when it lands.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::oneshot;

/// Extensions offered by the file picker
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Why an avatar could not be loaded
#[derive(Debug, Error)]
pub enum AvatarError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a supported image", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Avatar read was cancelled")]
    Cancelled,
}

/// Encode image bytes as a data URL, sniffing the MIME type from the content
pub fn encode_data_url(bytes: &[u8]) -> Option<String> {
    let format = image::guess_format(bytes).ok()?;
    Some(format!(
        "data:{};base64,{}",
        format.to_mime_type(),
        STANDARD.encode(bytes)
    ))
}

/// Read an image file into a data URL (blocking)
pub fn read_avatar(path: &Path) -> Result<String, AvatarError> {
    let bytes = std::fs::read(path).map_err(|source| AvatarError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    encode_data_url(&bytes).ok_or_else(|| AvatarError::UnsupportedFormat(path.to_path_buf()))
}

/// Decode the payload of a base64 `data:` URL
pub fn decode_data_url(url: &str) -> Option<Vec<u8>> {
    let rest = url.strip_prefix("data:")?;
    let (_, payload) = rest.split_once(";base64,")?;
    STANDARD.decode(payload).ok()
}

/// Decode image bytes into an egui texture image
pub fn to_color_image(bytes: &[u8]) -> Option<egui::ColorImage> {
    let rgba = image::load_from_memory(bytes).ok()?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Some(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

/// Show the native picker filtered to image files
pub fn pick_avatar_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_title("Choose a profile picture")
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
}

/// An avatar read in flight
#[derive(Debug)]
pub struct AvatarUpload {
    path: PathBuf,
    receiver: oneshot::Receiver<Result<String, AvatarError>>,
}

impl AvatarUpload {
    /// Start reading `path` on the runtime's blocking pool
    pub fn start(runtime: &tokio::runtime::Handle, path: PathBuf) -> Self {
        let (tx, rx) = oneshot::channel();
        let read_path = path.clone();
        runtime.spawn_blocking(move || {
            let result = read_avatar(&read_path);
            // Receiver gone means the upload was superseded
            let _ = tx.send(result);
        });
        log::info!("Avatar read started: {:?}", path);
        Self { path, receiver: rx }
    }

    /// File being read
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Non-blocking check for the result.
    ///
    /// Returns `None` while the read is still running.
    pub fn poll(&mut self) -> Option<Result<String, AvatarError>> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(oneshot::error::TryRecvError::Empty) => None,
            Err(oneshot::error::TryRecvError::Closed) => Some(Err(AvatarError::Cancelled)),
        }
    }
}
