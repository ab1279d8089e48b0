//! Client-side checks matching the server's upload rules.
//!
//! The server stays authoritative; these checks only let the preview
//! warn before the form is posted.

use web_sys::File;

use crate::{AppError, AppResult, ControllerConfig};

/// Check a file name and size against the configured upload rules.
pub fn validate_upload(name: &str, size: u64, config: &ControllerConfig) -> AppResult<()> {
    let extension = match name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => ext.to_ascii_lowercase(),
        _ => return Err(AppError::UnsupportedFile(name.to_string())),
    };

    if !config.allowed_extensions.iter().any(|allowed| *allowed == extension) {
        return Err(AppError::UnsupportedFile(name.to_string()));
    }

    if size > config.max_upload_size {
        return Err(AppError::FileTooLarge {
            size,
            limit: config.max_upload_size,
        });
    }

    Ok(())
}

/// [`validate_upload`] for a browser [`File`].
pub fn validate_file(file: &File, config: &ControllerConfig) -> AppResult<()> {
    validate_upload(&file.name(), file.size() as u64, config)
}

/// Whether the browser reports an image MIME type for `file`.
pub fn is_image(file: &File) -> bool {
    file.type_().starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_allowed_extensions() {
        let config = ControllerConfig::default();
        assert!(validate_upload("print.png", 1024, &config).is_ok());
        assert!(validate_upload("photo.JPG", 1024, &config).is_ok());
        assert!(validate_upload("archive.tar.pdf", 1024, &config).is_ok());
    }

    #[test]
    fn test_rejects_other_extensions() {
        let config = ControllerConfig::default();
        assert_eq!(
            validate_upload("notes.txt", 10, &config),
            Err(AppError::UnsupportedFile("notes.txt".to_string()))
        );
        assert!(matches!(
            validate_upload("README", 10, &config),
            Err(AppError::UnsupportedFile(_))
        ));
        assert!(matches!(
            validate_upload("trailing.", 10, &config),
            Err(AppError::UnsupportedFile(_))
        ));
    }

    #[test]
    fn test_rejects_oversized_files() {
        let config = ControllerConfig::default();
        let limit = config.max_upload_size;

        assert!(validate_upload("print.png", limit, &config).is_ok());
        assert_eq!(
            validate_upload("print.png", limit + 1, &config),
            Err(AppError::FileTooLarge { size: limit + 1, limit })
        );
    }

    #[test]
    fn test_respects_configured_extensions() {
        let config = ControllerConfig {
            allowed_extensions: vec!["pdf".to_string()],
            ..Default::default()
        };
        assert!(validate_upload("print.png", 10, &config).is_err());
        assert!(validate_upload("print.pdf", 10, &config).is_ok());
    }
}
