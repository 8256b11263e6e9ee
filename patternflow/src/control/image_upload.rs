//! Local image files for image-upload controls.
//!
//! Reading a file is the one step of the control system that may complete
//! "later": the host asks the renderer for an [`UploadTicket`], reads the
//! file however and whenever it likes, then hands the result back with
//! [`super::renderer::ControlRenderer::complete_image_upload`]. Until then
//! the parameter keeps its previous value.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Identifies one in-flight upload. Tickets from an earlier
/// `generate_controls` session are rejected on completion.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UploadTicket {
    pub(crate) session: u64,
    pub(crate) name: String,
}

impl UploadTicket {
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug)]
pub enum UploadError {
    Io(io::Error),
    Empty,
    UnsupportedFormat(String),
}

impl fmt::Display for UploadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadError::Io(err) => write!(f, "failed to read image: {}", err),
            UploadError::Empty => write!(f, "image file is empty"),
            UploadError::UnsupportedFormat(name) => {
                write!(f, "unsupported image format: {}", name)
            }
        }
    }
}

impl Error for UploadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            UploadError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for UploadError {
    fn from(err: io::Error) -> Self {
        UploadError::Io(err)
    }
}

/// An image fully read into memory
#[derive(Clone, Debug, PartialEq)]
pub struct ImageFile {
    pub name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn read(path: impl AsRef<Path>) -> Result<Self, UploadError> {
        let path = path.as_ref();
        let bytes = fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self::from_bytes(name, bytes)
    }

    pub fn from_bytes(
        name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, UploadError> {
        let name = name.into();

        if bytes.is_empty() {
            return Err(UploadError::Empty);
        }

        let mime = sniff_mime(&bytes)
            .or_else(|| mime_from_extension(&name))
            .ok_or_else(|| UploadError::UnsupportedFormat(name.clone()))?;

        Ok(Self { name, mime, bytes })
    }

    /// `data:<mime>;base64,<payload>`, the value stored in the parameter
    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    const SIGNATURES: &[(&[u8], &str)] = &[
        (b"\x89PNG\r\n\x1a\n", "image/png"),
        (b"\xff\xd8\xff", "image/jpeg"),
        (b"GIF87a", "image/gif"),
        (b"GIF89a", "image/gif"),
        (b"BM", "image/bmp"),
    ];

    for (signature, mime) in SIGNATURES {
        if bytes.starts_with(signature) {
            return Some(*mime);
        }
    }

    if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP"
    {
        return Some("image/webp");
    }

    None
}

fn mime_from_extension(name: &str) -> Option<&'static str> {
    let extension = Path::new(name).extension()?.to_str()?.to_lowercase();
    match extension.as_str() {
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

    #[test]
    fn test_sniffs_common_formats() {
        let cases: &[(&[u8], &str)] = &[
            (PNG_HEADER, "image/png"),
            (b"\xff\xd8\xff\xe0\0\x10JFIF", "image/jpeg"),
            (b"GIF89a\x01\0", "image/gif"),
            (b"RIFF\x24\0\0\0WEBPVP8 ", "image/webp"),
            (b"BM\x36\0\0\0", "image/bmp"),
        ];

        for (bytes, mime) in cases {
            let file = ImageFile::from_bytes("x", bytes.to_vec()).unwrap();
            assert_eq!(file.mime, *mime);
        }
    }

    #[test]
    fn test_svg_falls_back_to_extension() {
        let file =
            ImageFile::from_bytes("logo.SVG", b"<svg></svg>".to_vec()).unwrap();
        assert_eq!(file.mime, "image/svg+xml");
    }

    #[test]
    fn test_rejects_empty_and_unknown() {
        assert!(matches!(
            ImageFile::from_bytes("a.png", vec![]),
            Err(UploadError::Empty)
        ));
        assert!(matches!(
            ImageFile::from_bytes("notes.txt", b"hello".to_vec()),
            Err(UploadError::UnsupportedFormat(name)) if name == "notes.txt"
        ));
    }

    #[test]
    fn test_data_uri() {
        let file = ImageFile::from_bytes("a.gif", b"GIF89a".to_vec()).unwrap();
        assert_eq!(file.to_data_uri(), "data:image/gif;base64,R0lGODlh");
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let result = ImageFile::read("/definitely/not/here.png");
        assert!(matches!(result, Err(UploadError::Io(_))));
    }
}
