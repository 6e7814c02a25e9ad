//! Project file handlers.

use axum::{
    body::Body,
    extract::{multipart::MultipartError, Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::Response,
    Json,
};
use std::sync::Arc;

use super::{created, list_response, AppState};
use crate::file::{FileValidationError, UploadRequest};
use crate::web::dto::{ApiResponse, FileListQuery, FileResponse, MessageResponse};
use crate::web::error::ApiError;
use crate::HubError;

/// Build a safe Content-Disposition header value.
///
/// Control characters, quotes and backslashes are stripped from the plain
/// `filename` parameter. Non-ASCII names also get an RFC 5987
/// `filename*` parameter.
fn content_disposition_header(filename: &str) -> String {
    let sanitized: String = filename
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| match c {
            '"' | '\\' => '_',
            _ => c,
        })
        .collect();

    if filename.is_ascii() && sanitized == filename {
        return format!("attachment; filename=\"{}\"", filename);
    }

    let encoded = urlencoding::encode(filename);
    format!(
        "attachment; filename=\"{}\"; filename*=UTF-8''{}",
        sanitized, encoded
    )
}

/// Map a multipart read failure to an API error.
///
/// A body over the request limit is reported like any other oversized
/// upload, under the `file` field.
fn multipart_error(state: &AppState, err: MultipartError, message: &str) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!("Upload exceeds request body limit: {}", err);
        return ApiError::field(
            "file",
            FileValidationError::TooLarge {
                max_size: state.max_upload_size,
            }
            .to_string(),
        );
    }
    tracing::warn!("Failed to read multipart data: {}", err);
    ApiError::bad_request(message)
}

/// GET /api/v1/projects/files - List stored files.
#[utoipa::path(
    get,
    path = "/api/v1/projects/files",
    tag = "files",
    params(FileListQuery),
    responses(
        (status = 200, description = "List of files", body = Vec<FileResponse>),
        (status = 204, description = "No files")
    )
)]
pub async fn list_files(
    State(state): State<Arc<AppState>>,
    Query(query): Query<FileListQuery>,
) -> Result<Response, ApiError> {
    let files = state
        .file_service()
        .list(query.project_name.as_deref())
        .await?;
    let responses: Vec<FileResponse> = files.into_iter().map(Into::into).collect();
    Ok(list_response(responses))
}

/// POST /api/v1/projects/files - Upload a file to a project.
///
/// Request body: multipart/form-data with "file" and "project_id" fields.
#[utoipa::path(
    post,
    path = "/api/v1/projects/files",
    tag = "files",
    request_body(content = crate::web::dto::UploadFileForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "File uploaded", body = FileResponse),
        (status = 400, description = "Invalid file or missing fields"),
        (status = 404, description = "Project not found")
    )
)]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut file_name: Option<String> = None;
    let mut content: Option<Vec<u8>> = None;
    let mut project_id: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(&state, e, "Invalid multipart data"))?
    {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                file_name = field.file_name().map(|s| s.to_string());
                content = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| multipart_error(&state, e, "Failed to read file"))?
                        .to_vec(),
                );
            }
            "project_id" => {
                project_id = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| multipart_error(&state, e, "Invalid project_id"))?,
                );
            }
            _ => {}
        }
    }

    let (file_name, content) = match (file_name, content) {
        (Some(name), Some(content)) => (name, content),
        _ => return Err(ApiError::field("file", "No file was submitted.")),
    };
    let project_id: i64 = project_id
        .ok_or_else(|| ApiError::field("project_id", "This field is required."))?
        .trim()
        .parse()
        .map_err(|_| ApiError::field("project_id", "A valid integer is required."))?;

    let request = UploadRequest::new(project_id, file_name, content);
    let file = state
        .file_service()
        .upload(&request)
        .await
        .map_err(|e| match e {
            HubError::Validation(msg) => ApiError::field("file", msg),
            other => other.into(),
        })?;

    Ok(created(FileResponse::from(file)))
}

/// GET /api/v1/projects/files/:id - Get a file record.
#[utoipa::path(
    get,
    path = "/api/v1/projects/files/{id}",
    tag = "files",
    params(
        ("id" = i64, Path, description = "File ID")
    ),
    responses(
        (status = 200, description = "File record", body = FileResponse),
        (status = 404, description = "File not found")
    )
)]
pub async fn get_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<FileResponse>>, ApiError> {
    let file = state.file_service().get(id).await?;
    Ok(Json(ApiResponse::new(file.into())))
}

/// GET /api/v1/projects/files/:id/download - Download a stored file.
#[utoipa::path(
    get,
    path = "/api/v1/projects/files/{id}/download",
    tag = "files",
    params(
        ("id" = i64, Path, description = "File ID")
    ),
    responses(
        (status = 200, description = "File content with Content-Disposition"),
        (status = 400, description = "Stored file is missing"),
        (status = 404, description = "File not found")
    )
)]
pub async fn download_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Response, ApiError> {
    let download = state.file_service().download(id).await?;

    let content_type = mime_guess::from_path(&download.file.file_name)
        .first_or_octet_stream()
        .to_string();
    let length = download.content.len();

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(
            header::CONTENT_DISPOSITION,
            content_disposition_header(&download.file.file_name),
        )
        .header(header::CONTENT_LENGTH, length)
        .body(Body::from(download.content))
        .map_err(|e| {
            tracing::error!("Failed to build download response: {}", e);
            ApiError::internal("Failed to build response")
        })
}

/// DELETE /api/v1/projects/files/:id - Delete a file and its record.
///
/// A record whose file is already gone from disk is removed as well, but
/// the request is answered with 400.
#[utoipa::path(
    delete,
    path = "/api/v1/projects/files/{id}",
    tag = "files",
    params(
        ("id" = i64, Path, description = "File ID")
    ),
    responses(
        (status = 200, description = "File deleted", body = MessageResponse),
        (status = 400, description = "Stored file was already missing"),
        (status = 404, description = "File not found")
    )
)]
pub async fn delete_file(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.file_service().delete(id).await?;
    Ok(Json(MessageResponse::new("File was successfully deleted.")))
}
