//! Todo 管理ユースケース

use std::sync::Arc;

use todos_domain::{
   DomainError,
   clock::Clock,
   pagination::{Page, PageMeta, PageOptions},
   todo::{NewTodo, Todo, TodoId, TodoTitle},
};
use todos_infra::repository::TodoRepository;

use crate::error::TodoServiceError;

/// Todo 作成の入力
#[derive(Debug, Clone)]
pub struct CreateTodoInput {
   pub title: TodoTitle,
}

/// Todo 更新の入力
///
/// `None` のフィールドは変更しない。
#[derive(Debug, Clone)]
pub struct UpdateTodoInput {
   pub title:     Option<TodoTitle>,
   pub completed: Option<bool>,
}

/// Todo 管理ユースケース
pub struct TodoUseCaseImpl {
   todo_repository: Arc<dyn TodoRepository>,
   clock: Arc<dyn Clock>,
}

impl TodoUseCaseImpl {
   pub fn new(todo_repository: Arc<dyn TodoRepository>, clock: Arc<dyn Clock>) -> Self {
      Self {
         todo_repository,
         clock,
      }
   }

   /// Todo を作成する
   pub async fn create(&self, input: CreateTodoInput) -> Result<Todo, TodoServiceError> {
      let new_todo = NewTodo::new(input.title, self.clock.now());
      let todo = self.todo_repository.insert(&new_todo).await?;

      tracing::debug!(id = %todo.id(), "Todo を作成しました");
      Ok(todo)
   }

   /// ID で Todo を取得する
   ///
   /// 存在しない場合は NotFound。`update` と `remove` もこの経路で存在確認する。
   pub async fn find_one(&self, id: TodoId) -> Result<Todo, TodoServiceError> {
      self
         .todo_repository
         .find_by_id(&id)
         .await?
         .ok_or_else(|| {
            DomainError::NotFound {
               entity_type: "Todo",
               id:          id.to_string(),
            }
            .into()
         })
   }

   /// 指定されたフィールドのみを更新する
   pub async fn update(
      &self,
      id: TodoId,
      input: UpdateTodoInput,
   ) -> Result<Todo, TodoServiceError> {
      let todo = self.find_one(id).await?;
      let updated = todo.update(input.title, input.completed, self.clock.now());

      let saved = self.todo_repository.save(&updated).await?;
      Ok(saved)
   }

   /// Todo を削除する
   pub async fn remove(&self, id: TodoId) -> Result<(), TodoServiceError> {
      let todo = self.find_one(id).await?;
      self.todo_repository.delete(&todo.id()).await?;

      tracing::debug!(%id, "Todo を削除しました");
      Ok(())
   }

   /// 1 ページ分の Todo とページネーション情報を取得する
   ///
   /// `item_count` は実際に返す件数、`page_count` は総件数から計算する。
   pub async fn find_all(&self, options: PageOptions) -> Result<Page<Todo>, TodoServiceError> {
      let (items, total) = self
         .todo_repository
         .list_page(
            options.offset(),
            i64::from(options.take()),
            options.order(),
         )
         .await?;

      let meta = PageMeta::new(&options, items.len(), total);
      Ok(Page { items, meta })
   }
}

#[cfg(test)]
mod tests {
   use std::sync::Mutex;

   use chrono::{DateTime, Duration, Utc};
   use pretty_assertions::assert_eq;
   use todos_domain::{clock::FixedClock, pagination::SortOrder};
   use todos_infra::mock::MockTodoRepository;

   use super::*;

   /// 呼び出すたびに 1 秒進む時計
   struct SteppingClock {
      now: Mutex<DateTime<Utc>>,
   }

   impl SteppingClock {
      fn starting_at(start: DateTime<Utc>) -> Self {
         Self {
            now: Mutex::new(start),
         }
      }
   }

   impl Clock for SteppingClock {
      fn now(&self) -> DateTime<Utc> {
         let mut now = self.now.lock().unwrap();
         let current = *now;
         *now += Duration::seconds(1);
         current
      }
   }

   fn fixed_now() -> DateTime<Utc> {
      DateTime::from_timestamp(1_700_000_000, 0).unwrap()
   }

   fn sut_with(repo: MockTodoRepository, clock: impl Clock + 'static) -> TodoUseCaseImpl {
      TodoUseCaseImpl::new(Arc::new(repo), Arc::new(clock))
   }

   fn title(value: &str) -> TodoTitle {
      TodoTitle::new(value).unwrap()
   }

   // =========================================================================
   // create / find_one
   // =========================================================================

   #[tokio::test]
   async fn test_create_未完了で作成日時と更新日時が等しいtodoを返す() {
      // Given
      let sut = sut_with(MockTodoRepository::new(), FixedClock::new(fixed_now()));

      // When
      let todo = sut
         .create(CreateTodoInput {
            title: title("Buy milk"),
         })
         .await
         .unwrap();

      // Then
      assert_eq!(todo.id(), TodoId::new(1));
      assert_eq!(todo.title().as_str(), "Buy milk");
      assert!(!todo.completed());
      assert_eq!(todo.created_at(), fixed_now());
      assert_eq!(todo.updated_at(), todo.created_at());
   }

   #[tokio::test]
   async fn test_create_したtodoをfind_oneで取得できる() {
      let sut = sut_with(MockTodoRepository::new(), FixedClock::new(fixed_now()));
      let created = sut
         .create(CreateTodoInput {
            title: title("Buy milk"),
         })
         .await
         .unwrap();

      let found = sut.find_one(created.id()).await.unwrap();

      assert_eq!(found, created);
   }

   #[tokio::test]
   async fn test_find_one_存在しないidはnot_foundを返す() {
      let sut = sut_with(MockTodoRepository::new(), FixedClock::new(fixed_now()));

      let result = sut.find_one(TodoId::new(42)).await;

      assert!(matches!(
         result,
         Err(TodoServiceError::NotFound(msg)) if msg == "Todo #42 が見つかりません"
      ));
   }

   // =========================================================================
   // update
   // =========================================================================

   #[tokio::test]
   async fn test_update_指定したフィールドのみ変更しupdated_atが進む() {
      // Given
      let repo = MockTodoRepository::new();
      let sut = sut_with(repo.clone(), SteppingClock::starting_at(fixed_now()));
      let created = sut
         .create(CreateTodoInput {
            title: title("Buy milk"),
         })
         .await
         .unwrap();

      // When
      let updated = sut
         .update(
            created.id(),
            UpdateTodoInput {
               title:     None,
               completed: Some(true),
            },
         )
         .await
         .unwrap();

      // Then
      assert_eq!(updated.title(), created.title());
      assert!(updated.completed());
      assert_eq!(updated.created_at(), created.created_at());
      assert!(updated.updated_at() > created.updated_at());
      assert_eq!(repo.snapshot(), vec![updated]);
   }

   #[tokio::test]
   async fn test_update_時計が進まなくてもupdated_atは増加する() {
      let sut = sut_with(MockTodoRepository::new(), FixedClock::new(fixed_now()));
      let created = sut
         .create(CreateTodoInput {
            title: title("Buy milk"),
         })
         .await
         .unwrap();

      let updated = sut
         .update(
            created.id(),
            UpdateTodoInput {
               title:     Some(title("Buy oat milk")),
               completed: None,
            },
         )
         .await
         .unwrap();

      assert_eq!(updated.title().as_str(), "Buy oat milk");
      assert!(!updated.completed());
      assert!(updated.updated_at() > created.updated_at());
   }

   #[tokio::test]
   async fn test_update_存在しないidはnot_foundを返す() {
      let sut = sut_with(MockTodoRepository::new(), FixedClock::new(fixed_now()));

      let result = sut
         .update(
            TodoId::new(1),
            UpdateTodoInput {
               title:     None,
               completed: Some(true),
            },
         )
         .await;

      assert!(matches!(result, Err(TodoServiceError::NotFound(_))));
   }

   // =========================================================================
   // remove
   // =========================================================================

   #[tokio::test]
   async fn test_remove_削除後はfind_oneでnot_foundになる() {
      let repo = MockTodoRepository::new();
      let sut = sut_with(repo.clone(), FixedClock::new(fixed_now()));
      let created = sut
         .create(CreateTodoInput {
            title: title("Buy milk"),
         })
         .await
         .unwrap();

      sut.remove(created.id()).await.unwrap();

      assert!(repo.snapshot().is_empty());
      assert!(matches!(
         sut.find_one(created.id()).await,
         Err(TodoServiceError::NotFound(_))
      ));
   }

   #[tokio::test]
   async fn test_remove_存在しないidはnot_foundを返す() {
      let sut = sut_with(MockTodoRepository::new(), FixedClock::new(fixed_now()));

      let result = sut.remove(TodoId::new(3)).await;

      assert!(matches!(result, Err(TodoServiceError::NotFound(_))));
   }

   // =========================================================================
   // find_all
   // =========================================================================

   async fn seed(sut: &TodoUseCaseImpl, count: usize) {
      for i in 0..count {
         sut.create(CreateTodoInput {
            title: title(&format!("todo {i}")),
         })
         .await
         .unwrap();
      }
   }

   #[tokio::test]
   async fn test_find_all_15件の1ページ目() {
      // Given
      let sut = sut_with(MockTodoRepository::new(), SteppingClock::starting_at(fixed_now()));
      seed(&sut, 15).await;

      // When
      let page = sut
         .find_all(PageOptions::new(1, 10, SortOrder::Asc).unwrap())
         .await
         .unwrap();

      // Then
      assert_eq!(page.items.len(), 10);
      assert_eq!(page.meta.item_count, 10);
      assert_eq!(page.meta.page_count, 2);
      assert!(!page.meta.has_previous_page);
      assert!(page.meta.has_next_page);
   }

   #[tokio::test]
   async fn test_find_all_15件の2ページ目() {
      let sut = sut_with(MockTodoRepository::new(), SteppingClock::starting_at(fixed_now()));
      seed(&sut, 15).await;

      let page = sut
         .find_all(PageOptions::new(2, 10, SortOrder::Asc).unwrap())
         .await
         .unwrap();

      assert_eq!(page.meta.item_count, 5);
      assert!(page.meta.has_previous_page);
      assert!(!page.meta.has_next_page);
      assert_eq!(page.items[0].title().as_str(), "todo 10");
   }

   #[tokio::test]
   async fn test_find_all_空のストアは0件() {
      let sut = sut_with(MockTodoRepository::new(), FixedClock::new(fixed_now()));

      let page = sut.find_all(PageOptions::default()).await.unwrap();

      assert!(page.items.is_empty());
      assert_eq!(page.meta.item_count, 0);
      assert_eq!(page.meta.page_count, 0);
      assert!(!page.meta.has_next_page);
   }

   #[tokio::test]
   async fn test_find_all_descは作成日時の新しい順() {
      let sut = sut_with(MockTodoRepository::new(), SteppingClock::starting_at(fixed_now()));
      seed(&sut, 3).await;

      let page = sut
         .find_all(PageOptions::new(1, 10, SortOrder::Desc).unwrap())
         .await
         .unwrap();

      let titles: Vec<&str> = page.items.iter().map(|t| t.title().as_str()).collect();
      assert_eq!(titles, vec!["todo 2", "todo 1", "todo 0"]);
   }
}
