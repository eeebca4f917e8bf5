use crate::application::LibraryApplicationError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::types::ErrorResponse;

/// API層のエラー型
///
/// アプリケーション層のエラーをラップし、HTTPレスポンスへのマッピングを提供する。
#[derive(Debug)]
pub enum ApiError {
    Application(LibraryApplicationError),
    BadRequest(String),
}

impl From<LibraryApplicationError> for ApiError {
    fn from(err: LibraryApplicationError) -> Self {
        ApiError::Application(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),

            // 404 Not Found - リクエストされたリソースが存在しない
            ApiError::Application(LibraryApplicationError::BookNotFound) => {
                (StatusCode::NOT_FOUND, "BOOK_NOT_FOUND", "Book not found".to_string())
            }
            ApiError::Application(LibraryApplicationError::MemberNotFound) => (
                StatusCode::NOT_FOUND,
                "MEMBER_NOT_FOUND",
                "Member not found".to_string(),
            ),
            ApiError::Application(LibraryApplicationError::BorrowNotFound) => (
                StatusCode::NOT_FOUND,
                "BORROW_NOT_FOUND",
                "Borrow record not found".to_string(),
            ),
            ApiError::Application(LibraryApplicationError::InventoryNotFound) => (
                StatusCode::NOT_FOUND,
                "INVENTORY_NOT_FOUND",
                "Inventory not found for book".to_string(),
            ),

            // 422 Unprocessable Entity - ビジネスルール違反
            ApiError::Application(LibraryApplicationError::NoAvailableCopies) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "NO_AVAILABLE_COPIES",
                "No copies available for borrowing".to_string(),
            ),
            ApiError::Application(LibraryApplicationError::AlreadyReturned) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "BORROW_ALREADY_RETURNED",
                "Borrow has already been returned".to_string(),
            ),
            ApiError::Application(LibraryApplicationError::DomainError(msg)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "DOMAIN_ERROR", msg)
            }

            // 500 Internal Server Error - システム障害
            // 内部エラーの詳細はログに記録し、クライアントには一般的なメッセージのみを返す
            ApiError::Application(LibraryApplicationError::RepositoryError(ref e)) => {
                tracing::error!("Repository error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "REPOSITORY_ERROR",
                    "Repository operation failed".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse::new(error_type, message));
        (status, body).into_response()
    }
}
