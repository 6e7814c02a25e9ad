//! Storage path construction for project files.

use super::validation::FileValidationError;

/// Build the storage-relative path for a project file.
///
/// The file name is split at its last `.`; spaces in the project name and
/// in the stem are replaced with `_`. The extension is kept as-is.
///
/// # Examples
///
/// ```
/// use projecthub::file::build_path;
///
/// assert_eq!(
///     build_path("downloads", "My Project", "report 1.pdf").unwrap(),
///     "downloads/My_Project/report_1.pdf"
/// );
/// ```
pub fn build_path(
    base_dir: &str,
    project_name: &str,
    file_name: &str,
) -> Result<String, FileValidationError> {
    let (stem, extension) = file_name
        .rsplit_once('.')
        .ok_or(FileValidationError::MissingExtension)?;

    let project = project_dir_name(project_name);
    let stem = stem.replace(' ', "_");

    Ok(format!("{base_dir}/{project}/{stem}.{extension}"))
}

/// Directory name used for a project's stored files.
pub fn project_dir_name(project_name: &str) -> String {
    project_name.replace(' ', "_")
}
