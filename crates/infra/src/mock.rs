//! # テスト用モックリポジトリ
//!
//! ユースケーステストで使用するインメモリモックリポジトリ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! todos-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use todos_domain::{
   pagination::SortOrder,
   todo::{NewTodo, Todo, TodoId},
};

use crate::{error::InfraError, repository::TodoRepository};

/// SQLite 実装と同じ採番・並び順の規則を持つインメモリ実装
///
/// ID は 1 から採番し、削除後も再利用しない。
#[derive(Clone)]
pub struct MockTodoRepository {
   todos:   Arc<Mutex<Vec<Todo>>>,
   next_id: Arc<Mutex<i64>>,
}

impl Default for MockTodoRepository {
   fn default() -> Self {
      Self::new()
   }
}

impl MockTodoRepository {
   pub fn new() -> Self {
      Self {
         todos:   Arc::new(Mutex::new(Vec::new())),
         next_id: Arc::new(Mutex::new(1)),
      }
   }

   /// 格納されている Todo を ID 順で取得する
   pub fn snapshot(&self) -> Vec<Todo> {
      let mut todos = self.todos.lock().unwrap().clone();
      todos.sort_by_key(Todo::id);
      todos
   }
}

#[async_trait]
impl TodoRepository for MockTodoRepository {
   async fn insert(&self, todo: &NewTodo) -> Result<Todo, InfraError> {
      let id = {
         let mut next_id = self.next_id.lock().unwrap();
         let id = TodoId::new(*next_id);
         *next_id += 1;
         id
      };
      let todo = todo.clone().with_id(id);
      self.todos.lock().unwrap().push(todo.clone());
      Ok(todo)
   }

   async fn find_by_id(&self, id: &TodoId) -> Result<Option<Todo>, InfraError> {
      Ok(self
         .todos
         .lock()
         .unwrap()
         .iter()
         .find(|t| t.id() == *id)
         .cloned())
   }

   async fn save(&self, todo: &Todo) -> Result<Todo, InfraError> {
      let mut todos = self.todos.lock().unwrap();
      let Some(existing) = todos.iter_mut().find(|t| t.id() == todo.id()) else {
         return Err(InfraError::unexpected(format!(
            "更新対象の Todo が存在しません (id={})",
            todo.id()
         )));
      };
      *existing = todo.clone();
      Ok(todo.clone())
   }

   async fn delete(&self, id: &TodoId) -> Result<(), InfraError> {
      self.todos.lock().unwrap().retain(|t| t.id() != *id);
      Ok(())
   }

   async fn list_page(
      &self,
      offset: i64,
      limit: i64,
      order: SortOrder,
   ) -> Result<(Vec<Todo>, u64), InfraError> {
      let mut todos = self.todos.lock().unwrap().clone();
      todos.sort_by_key(|t| (t.created_at(), t.id()));
      if order == SortOrder::Desc {
         todos.reverse();
      }

      let total = todos.len() as u64;
      let page = todos
         .into_iter()
         .skip(usize::try_from(offset).unwrap_or(usize::MAX))
         .take(usize::try_from(limit).unwrap_or(0))
         .collect();

      Ok((page, total))
   }
}
