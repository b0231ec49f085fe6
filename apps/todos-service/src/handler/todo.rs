//! # Todo ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /todos` - Todo 作成
//! - `GET /todos` - Todo 一覧（`page` / `take` / `order`）
//! - `GET /todos/{id}` - Todo 取得
//! - `PATCH /todos/{id}` - Todo の部分更新
//! - `DELETE /todos/{id}` - Todo 削除

use std::sync::Arc;

use axum::{
   Json,
   extract::State,
   http::StatusCode,
   response::IntoResponse,
};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use todos_domain::{
   pagination::{PageMeta, PageOptions},
   todo::{Todo, TodoId, TodoTitle},
};
use todos_shared::{ErrorResponse, PaginatedResponse};
use utoipa::{IntoParams, ToSchema};

use super::extract::{ValidJson, ValidPath, ValidQuery};
use crate::{
   error::TodoServiceError,
   usecase::{CreateTodoInput, TodoUseCaseImpl, UpdateTodoInput},
};

/// Todo API の共有状態
pub struct TodoState {
   pub usecase: TodoUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// Todo 作成リクエスト
///
/// 未知のフィールドは無視する。
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTodoRequest {
   /// 前後の空白を除いて 1 文字以上
   #[schema(example = "Buy milk")]
   pub title: Option<String>,
}

/// Todo 更新リクエスト
///
/// 省略または `null` のフィールドは変更しない。
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateTodoRequest {
   pub title:     Option<String>,
   pub completed: Option<bool>,
}

/// 一覧取得のクエリパラメータ
///
/// 値の検証は [`PageOptions::parse`] が行うため、ここでは文字列のまま受け取る。
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListTodosQuery {
   /// ページ番号（1 以上、デフォルト 1）
   #[param(example = "1")]
   pub page:  Option<String>,
   /// 1 ページあたりの件数（1 以上、デフォルト 10）
   #[param(example = "10")]
   pub take:  Option<String>,
   /// 作成日時の並び順（`ASC` / `DESC`、デフォルト `ASC`）
   #[param(example = "ASC")]
   pub order: Option<String>,
}

/// Todo DTO
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodoDto {
   pub id:         i64,
   pub title:      String,
   pub completed:  bool,
   /// ISO 8601（UTC、ミリ秒精度）
   #[schema(example = "2023-11-14T22:13:20.000Z")]
   pub created_at: String,
   #[schema(example = "2023-11-14T22:13:20.000Z")]
   pub updated_at: String,
}

impl From<&Todo> for TodoDto {
   fn from(todo: &Todo) -> Self {
      Self {
         id:         todo.id().as_i64(),
         title:      todo.title().as_str().to_string(),
         completed:  todo.completed(),
         created_at: format_timestamp(todo.created_at()),
         updated_at: format_timestamp(todo.updated_at()),
      }
   }
}

/// ページネーションのメタデータ DTO
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetaDto {
   pub page:              u32,
   pub take:              u32,
   pub item_count:        u64,
   pub page_count:        u64,
   pub has_previous_page: bool,
   pub has_next_page:     bool,
}

impl From<PageMeta> for PageMetaDto {
   fn from(meta: PageMeta) -> Self {
      Self {
         page:              meta.page,
         take:              meta.take,
         item_count:        meta.item_count,
         page_count:        meta.page_count,
         has_previous_page: meta.has_previous_page,
         has_next_page:     meta.has_next_page,
      }
   }
}

/// Todo 一覧レスポンス
pub type TodoListResponse = PaginatedResponse<TodoDto, PageMetaDto>;

fn format_timestamp(at: DateTime<Utc>) -> String {
   at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_title(raw: String) -> Result<TodoTitle, TodoServiceError> {
   TodoTitle::new(raw).map_err(TodoServiceError::from)
}

// --- ハンドラ ---

/// POST /todos
///
/// Todo を作成する。
#[utoipa::path(
   post,
   path = "/todos",
   tag = "todos",
   request_body = CreateTodoRequest,
   responses(
      (status = 201, description = "作成された Todo", body = TodoDto),
      (status = 400, description = "バリデーションエラー", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn create_todo(
   State(state): State<Arc<TodoState>>,
   ValidJson(req): ValidJson<CreateTodoRequest>,
) -> Result<impl IntoResponse, TodoServiceError> {
   let Some(title) = req.title else {
      return Err(TodoServiceError::Validation("title は必須です".to_string()));
   };
   let input = CreateTodoInput {
      title: parse_title(title)?,
   };

   let todo = state.usecase.create(input).await?;

   Ok((StatusCode::CREATED, Json(TodoDto::from(&todo))))
}

/// GET /todos
///
/// Todo 一覧を作成日時順で取得する。
#[utoipa::path(
   get,
   path = "/todos",
   tag = "todos",
   params(ListTodosQuery),
   responses(
      (status = 200, description = "Todo 一覧", body = PaginatedResponse<TodoDto, PageMetaDto>),
      (status = 400, description = "不正なページ指定", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all)]
pub async fn list_todos(
   State(state): State<Arc<TodoState>>,
   ValidQuery(query): ValidQuery<ListTodosQuery>,
) -> Result<impl IntoResponse, TodoServiceError> {
   let options = PageOptions::parse(
      query.page.as_deref(),
      query.take.as_deref(),
      query.order.as_deref(),
   )?;

   let page = state.usecase.find_all(options).await?;

   let response = TodoListResponse::new(
      page.items.iter().map(TodoDto::from).collect(),
      page.meta.into(),
   );
   Ok((StatusCode::OK, Json(response)))
}

/// GET /todos/{id}
#[utoipa::path(
   get,
   path = "/todos/{id}",
   tag = "todos",
   params(("id" = i64, Path, description = "Todo ID")),
   responses(
      (status = 200, description = "Todo", body = TodoDto),
      (status = 400, description = "ID が整数でない", body = ErrorResponse),
      (status = 404, description = "Todo が存在しない", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all, fields(%id))]
pub async fn get_todo(
   State(state): State<Arc<TodoState>>,
   ValidPath(id): ValidPath<i64>,
) -> Result<impl IntoResponse, TodoServiceError> {
   let todo = state.usecase.find_one(TodoId::new(id)).await?;

   Ok((StatusCode::OK, Json(TodoDto::from(&todo))))
}

/// PATCH /todos/{id}
///
/// 指定されたフィールドのみを更新する。空のオブジェクトでも `updatedAt` は更新される。
#[utoipa::path(
   patch,
   path = "/todos/{id}",
   tag = "todos",
   params(("id" = i64, Path, description = "Todo ID")),
   request_body = UpdateTodoRequest,
   responses(
      (status = 200, description = "更新後の Todo", body = TodoDto),
      (status = 400, description = "バリデーションエラー", body = ErrorResponse),
      (status = 404, description = "Todo が存在しない", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all, fields(%id))]
pub async fn update_todo(
   State(state): State<Arc<TodoState>>,
   ValidPath(id): ValidPath<i64>,
   ValidJson(req): ValidJson<UpdateTodoRequest>,
) -> Result<impl IntoResponse, TodoServiceError> {
   let input = UpdateTodoInput {
      title:     req.title.map(parse_title).transpose()?,
      completed: req.completed,
   };

   let todo = state.usecase.update(TodoId::new(id), input).await?;

   Ok((StatusCode::OK, Json(TodoDto::from(&todo))))
}

/// DELETE /todos/{id}
#[utoipa::path(
   delete,
   path = "/todos/{id}",
   tag = "todos",
   params(("id" = i64, Path, description = "Todo ID")),
   responses(
      (status = 204, description = "削除成功"),
      (status = 400, description = "ID が整数でない", body = ErrorResponse),
      (status = 404, description = "Todo が存在しない", body = ErrorResponse)
   )
)]
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_todo(
   State(state): State<Arc<TodoState>>,
   ValidPath(id): ValidPath<i64>,
) -> Result<impl IntoResponse, TodoServiceError> {
   state.usecase.remove(TodoId::new(id)).await?;

   Ok(StatusCode::NO_CONTENT)
}
