//! Upload validation for project files.
//!
//! Every check is a pure function over the declared file name or the
//! payload size. `validate_upload` combines them into a typed error.

use thiserror::Error;

use super::MAX_UPLOAD_SIZE;
use crate::HubError;

/// File extensions accepted for upload (case-sensitive, without the dot).
pub const ALLOWED_EXTENSIONS: &[&str] = &["csv", "doc", "pdf", "xlsx"];

/// Upload validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FileValidationError {
    /// File name is empty.
    #[error("File name must not be empty.")]
    EmptyName,

    /// File name contains a path separator.
    #[error("File name must not contain path separators.")]
    PathSeparator,

    /// File name has no extension.
    #[error("File name must have an extension.")]
    MissingExtension,

    /// Extension is not in the allow-list.
    #[error("Valid file extensions: ['.csv', '.doc', '.pdf', '.xlsx']")]
    ExtensionNotAllowed,

    /// File name contains non-ASCII characters.
    #[error("File name must contain only ASCII characters.")]
    NonAscii,

    /// Payload exceeds the upload size limit.
    #[error("File size is too large ({} as maximum).", format_size(.max_size))]
    TooLarge {
        /// Limit that was exceeded, in bytes.
        max_size: u64,
    },
}

/// Format a byte limit the way it appears in messages, e.g. `2 MB`.
fn format_size(bytes: &u64) -> String {
    let bytes = *bytes;
    const KB: u64 = 1024;
    const MB: u64 = 1024 * 1024;
    if bytes >= MB && bytes % MB == 0 {
        format!("{} MB", bytes / MB)
    } else if bytes >= KB && bytes % KB == 0 {
        format!("{} KB", bytes / KB)
    } else {
        format!("{} bytes", bytes)
    }
}

impl From<FileValidationError> for HubError {
    fn from(e: FileValidationError) -> Self {
        HubError::Validation(e.to_string())
    }
}

/// Check whether the file name ends in an allowed extension.
///
/// The suffix after the last `.` must equal one of [`ALLOWED_EXTENSIONS`]
/// exactly. Names without a `.` or with an empty suffix are not allowed.
///
/// # Examples
///
/// ```
/// use projecthub::file::is_allowed_extension;
///
/// assert!(is_allowed_extension("report.pdf"));
/// assert!(!is_allowed_extension("report.PDF"));
/// assert!(!is_allowed_extension("report"));
/// ```
pub fn is_allowed_extension(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((_, ext)) => ALLOWED_EXTENSIONS.contains(&ext),
        None => false,
    }
}

/// Check whether every character of the file name is ASCII.
pub fn is_ascii(file_name: &str) -> bool {
    file_name.is_ascii()
}

/// Check whether a payload of `size` bytes is within the upload limit.
pub fn is_within_size_limit(size: u64) -> bool {
    size <= MAX_UPLOAD_SIZE
}

/// Validate an upload against all file rules.
///
/// Checks run in order: empty name, path separators, extension, ASCII,
/// size. The first failure is returned.
pub fn validate_upload(file_name: &str, size: u64) -> Result<(), FileValidationError> {
    validate_upload_with_limit(file_name, size, MAX_UPLOAD_SIZE)
}

/// Validate an upload using a custom size limit.
pub fn validate_upload_with_limit(
    file_name: &str,
    size: u64,
    max_size: u64,
) -> Result<(), FileValidationError> {
    if file_name.trim().is_empty() {
        return Err(FileValidationError::EmptyName);
    }
    if file_name.contains('/') || file_name.contains('\\') {
        return Err(FileValidationError::PathSeparator);
    }
    if !is_allowed_extension(file_name) {
        return Err(FileValidationError::ExtensionNotAllowed);
    }
    if !is_ascii(file_name) {
        return Err(FileValidationError::NonAscii);
    }
    if size > max_size {
        return Err(FileValidationError::TooLarge { max_size });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_extensions() {
        for name in ["a.csv", "a.doc", "a.pdf", "a.xlsx", "archive.tar.pdf"] {
            assert!(is_allowed_extension(name), "{name} should be allowed");
        }
    }

    #[test]
    fn test_disallowed_extensions() {
        for name in ["a.txt", "a.exe", "a.docx", "a.", "a.PDF", "a.Csv", "pdf", ""] {
            assert!(!is_allowed_extension(name), "{name} should be rejected");
        }
    }

    #[test]
    fn test_is_ascii() {
        assert!(is_ascii("report 1.pdf"));
        assert!(is_ascii(""));
        assert!(!is_ascii("résumé.pdf"));
        assert!(!is_ascii("report\u{80}.pdf"));
        assert!(!is_ascii("報告.pdf"));
    }

    #[test]
    fn test_size_limit_boundary() {
        assert!(is_within_size_limit(0));
        assert!(is_within_size_limit(2 * 1024 * 1024));
        assert!(!is_within_size_limit(2 * 1024 * 1024 + 1));
        assert!(!is_within_size_limit(u64::MAX));
    }

    #[test]
    fn test_validate_upload_ok() {
        assert_eq!(validate_upload("data.csv", 1024), Ok(()));
    }

    #[test]
    fn test_validate_upload_errors() {
        assert_eq!(validate_upload("", 1), Err(FileValidationError::EmptyName));
        assert_eq!(
            validate_upload("../x.pdf", 1),
            Err(FileValidationError::PathSeparator)
        );
        assert_eq!(
            validate_upload("dir\\x.pdf", 1),
            Err(FileValidationError::PathSeparator)
        );
        assert_eq!(
            validate_upload("notes.txt", 1),
            Err(FileValidationError::ExtensionNotAllowed)
        );
        assert_eq!(
            validate_upload("résumé.pdf", 1),
            Err(FileValidationError::NonAscii)
        );
        assert_eq!(
            validate_upload("big.pdf", 3 * 1024 * 1024),
            Err(FileValidationError::TooLarge {
                max_size: MAX_UPLOAD_SIZE
            })
        );
    }

    #[test]
    fn test_validate_upload_custom_limit() {
        assert!(validate_upload_with_limit("a.pdf", 10, 10).is_ok());
        assert_eq!(
            validate_upload_with_limit("a.pdf", 11, 10),
            Err(FileValidationError::TooLarge { max_size: 10 })
        );
    }

    #[test]
    fn test_too_large_message_names_configured_limit() {
        let err = validate_upload_with_limit("a.pdf", 2 * 1024 * 1024, 1024 * 1024).unwrap_err();
        assert_eq!(err.to_string(), "File size is too large (1 MB as maximum).");

        let err = validate_upload_with_limit("a.pdf", 600 * 1024, 512 * 1024).unwrap_err();
        assert_eq!(err.to_string(), "File size is too large (512 KB as maximum).");

        let err = validate_upload_with_limit("a.pdf", 11, 10).unwrap_err();
        assert_eq!(err.to_string(), "File size is too large (10 bytes as maximum).");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FileValidationError::ExtensionNotAllowed.to_string(),
            "Valid file extensions: ['.csv', '.doc', '.pdf', '.xlsx']"
        );
        assert_eq!(
            FileValidationError::NonAscii.to_string(),
            "File name must contain only ASCII characters."
        );
        assert_eq!(
            FileValidationError::TooLarge {
                max_size: MAX_UPLOAD_SIZE
            }
            .to_string(),
            "File size is too large (2 MB as maximum)."
        );
    }
}
