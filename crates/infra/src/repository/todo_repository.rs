//! # TodoRepository
//!
//! Todo の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ID 採番はストアの責務**: `INSERT ... RETURNING` で採番済みの行を受け取る
//! - **一覧は 1 トランザクション**: ページ取得と総件数カウントを同じスナップショットで読む
//! - **並び順**: `created_at` → `id` の順（同じ方向）で安定させる

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use todos_domain::{
   pagination::SortOrder,
   todo::{NewTodo, Todo, TodoId, TodoTitle},
};

use crate::error::InfraError;

/// Todo リポジトリトレイト
#[async_trait]
pub trait TodoRepository: Send + Sync {
   /// Todo を挿入し、ID が採番された Todo を返す
   async fn insert(&self, todo: &NewTodo) -> Result<Todo, InfraError>;

   /// ID で Todo を検索する
   async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError>;

   /// 既存の Todo を更新する（title, completed, updated_at）
   async fn save(&self, todo: &Todo) -> Result<Todo, InfraError>;

   /// Todo を物理削除する
   async fn delete(&self, id: &TodoId) -> Result<(), InfraError>;

   /// 1 ページ分の Todo と総件数を取得する
   async fn list_page(
      &self,
      offset: i64,
      limit: i64,
      order: SortOrder,
   ) -> Result<(Vec<Todo>, u64), InfraError>;
}

/// `todos` テーブルの行
#[derive(Debug, sqlx::FromRow)]
struct TodoRow {
   id:         i64,
   title:      String,
   completed:  bool,
   created_at: DateTime<Utc>,
   updated_at: DateTime<Utc>,
}

impl TryFrom<TodoRow> for Todo {
   type Error = InfraError;

   fn try_from(row: TodoRow) -> Result<Self, Self::Error> {
      // CHECK 制約があるため通常は失敗しない
      let title = TodoTitle::new(row.title)
         .map_err(|e| InfraError::unexpected(format!("不正な title (id={}): {e}", row.id)))?;

      Ok(Todo::from_db(
         TodoId::new(row.id),
         title,
         row.completed,
         row.created_at,
         row.updated_at,
      ))
   }
}

/// SQLite 実装の TodoRepository
#[derive(Debug, Clone)]
pub struct SqliteTodoRepository {
   pool: SqlitePool,
}

impl SqliteTodoRepository {
   pub fn new(pool: SqlitePool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl TodoRepository for SqliteTodoRepository {
   #[tracing::instrument(skip_all, level = "debug")]
   async fn insert(&self, todo: &NewTodo) -> Result<Todo, InfraError> {
      let row: TodoRow = sqlx::query_as(
         r#"
         INSERT INTO todos (title, completed, created_at, updated_at)
         VALUES (?, ?, ?, ?)
         RETURNING id, title, completed, created_at, updated_at
         "#,
      )
      .bind(todo.title().as_str())
      .bind(todo.completed())
      .bind(todo.created_at())
      .bind(todo.updated_at())
      .fetch_one(&self.pool)
      .await?;

      row.try_into()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError> {
      let row: Option<TodoRow> = sqlx::query_as(
         r#"
         SELECT id, title, completed, created_at, updated_at
         FROM todos
         WHERE id = ?
         "#,
      )
      .bind(id.as_i64())
      .fetch_optional(&self.pool)
      .await?;

      row.map(Todo::try_from).transpose()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(id = %todo.id()))]
   async fn save(&self, todo: &Todo) -> Result<Todo, InfraError> {
      let row: Option<TodoRow> = sqlx::query_as(
         r#"
         UPDATE todos
         SET title = ?, completed = ?, updated_at = ?
         WHERE id = ?
         RETURNING id, title, completed, created_at, updated_at
         "#,
      )
      .bind(todo.title().as_str())
      .bind(todo.completed())
      .bind(todo.updated_at())
      .bind(todo.id().as_i64())
      .fetch_optional(&self.pool)
      .await?;

      let Some(row) = row else {
         return Err(InfraError::unexpected(format!(
            "更新対象の Todo が存在しません (id={})",
            todo.id()
         )));
      };
      row.try_into()
   }

   #[tracing::instrument(skip_all, level = "debug", fields(%id))]
   async fn delete(&self, id: &TodoId) -> Result<(), InfraError> {
      sqlx::query("DELETE FROM todos WHERE id = ?")
         .bind(id.as_i64())
         .execute(&self.pool)
         .await?;

      Ok(())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(offset = offset, limit = limit, order = %order))]
   async fn list_page(
      &self,
      offset: i64,
      limit: i64,
      order: SortOrder,
   ) -> Result<(Vec<Todo>, u64), InfraError> {
      let direction = match order {
         SortOrder::Asc => "ASC",
         SortOrder::Desc => "DESC",
      };
      let sql = format!(
         r#"
         SELECT id, title, completed, created_at, updated_at
         FROM todos
         ORDER BY created_at {direction}, id {direction}
         LIMIT ? OFFSET ?
         "#
      );

      let mut tx = self.pool.begin().await?;

      let rows: Vec<TodoRow> = sqlx::query_as(&sql)
         .bind(limit)
         .bind(offset)
         .fetch_all(&mut *tx)
         .await?;

      let (total,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todos")
         .fetch_one(&mut *tx)
         .await?;

      tx.commit().await?;

      let todos = rows
         .into_iter()
         .map(Todo::try_from)
         .collect::<Result<Vec<_>, _>>()?;
      let total = u64::try_from(total)
         .map_err(|_| InfraError::unexpected(format!("不正な件数: {total}")))?;

      Ok((todos, total))
   }
}
