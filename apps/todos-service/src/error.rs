//! # Todos Service エラー定義
//!
//! サービス固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | バリアント | ステータス |
//! |-----------|-----------|
//! | `Validation` | 400 |
//! | `NotFound` | 404 |
//! | `Database` | 500（詳細はログのみ） |

use axum::{
   Json,
   extract::rejection::{JsonRejection, PathRejection, QueryRejection},
   http::StatusCode,
   response::{IntoResponse, Response},
};
use thiserror::Error;
use todos_domain::DomainError;
use todos_infra::InfraError;
use todos_shared::ErrorResponse;

/// Todos Service で発生するエラー
#[derive(Debug, Error)]
pub enum TodoServiceError {
   /// 入力値の検証失敗（ボディ・クエリ・パスの解析失敗を含む）
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// リソースが見つからない
   #[error("{0}")]
   NotFound(String),

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] InfraError),
}

impl From<DomainError> for TodoServiceError {
   fn from(err: DomainError) -> Self {
      match err {
         DomainError::Validation(msg) => Self::Validation(msg),
         not_found @ DomainError::NotFound { .. } => Self::NotFound(not_found.to_string()),
      }
   }
}

impl From<JsonRejection> for TodoServiceError {
   fn from(rejection: JsonRejection) -> Self {
      Self::Validation(rejection.body_text())
   }
}

impl From<QueryRejection> for TodoServiceError {
   fn from(rejection: QueryRejection) -> Self {
      Self::Validation(rejection.body_text())
   }
}

impl From<PathRejection> for TodoServiceError {
   fn from(rejection: PathRejection) -> Self {
      Self::Validation(rejection.body_text())
   }
}

impl IntoResponse for TodoServiceError {
   fn into_response(self) -> Response {
      let body = match self {
         TodoServiceError::Validation(detail) => ErrorResponse::validation_error(detail),
         TodoServiceError::NotFound(detail) => ErrorResponse::not_found(detail),
         TodoServiceError::Database(e) => {
            tracing::error!(
               error = %e,
               span_trace = %e.span_trace(),
               "データベースエラー"
            );
            ErrorResponse::internal_error()
         }
      };

      let status =
         StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
      (status, Json(body)).into_response()
   }
}
