//! # OpenAPI 仕様定義
//!
//! utoipa を使用して OpenAPI 仕様を Rust の型から生成する。
//! `ApiDoc::openapi()` で取得したドキュメントは `/api-docs/openapi.json` で配信し、
//! `generate-openapi` バイナリで YAML として出力できる。

use axum::Json;
use utoipa::OpenApi;

use crate::handler::{health, todo};

#[derive(OpenApi)]
#[openapi(
   info(
      title = "Todos API",
      version = "0.1.0",
      description = "ページネーション付き Todo 管理 API"
   ),
   paths(
      // health
      health::health_check,
      // todos
      todo::create_todo,
      todo::list_todos,
      todo::get_todo,
      todo::update_todo,
      todo::delete_todo,
   ),
   components(schemas(
      todos_shared::ErrorResponse,
   )),
   tags(
      (name = "health", description = "ヘルスチェック"),
      (name = "todos", description = "Todo 管理"),
   )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
   Json(ApiDoc::openapi())
}
