//! # ルーター構築
//!
//! ルーティングとミドルウェアを組み立てる。
//! `main` と HTTP 統合テストは同じルーターを使用する。

use std::sync::Arc;

use axum::{Router, routing::get};
use sqlx::SqlitePool;
use todos_domain::clock::Clock;
use todos_infra::repository::SqliteTodoRepository;
use tower_http::trace::TraceLayer;

use crate::{
   handler::{
      TodoState,
      create_todo,
      delete_todo,
      get_todo,
      health_check,
      list_todos,
      update_todo,
   },
   openapi::openapi_json,
   usecase::TodoUseCaseImpl,
};

/// 接続プールと時計から依存コンポーネントを組み立て、ルーターを返す
pub fn build_app(pool: SqlitePool, clock: Arc<dyn Clock>) -> Router {
   let todo_repository = Arc::new(SqliteTodoRepository::new(pool));
   let usecase = TodoUseCaseImpl::new(todo_repository, clock);

   router(Arc::new(TodoState { usecase }))
}

/// 全エンドポイントのルーター
pub fn router(todo_state: Arc<TodoState>) -> Router {
   Router::new()
      .route("/health", get(health_check))
      .route("/api-docs/openapi.json", get(openapi_json))
      .route("/todos", get(list_todos).post(create_todo))
      .route(
         "/todos/{id}",
         get(get_todo).patch(update_todo).delete(delete_todo),
      )
      .with_state(todo_state)
      .layer(TraceLayer::new_for_http())
}
