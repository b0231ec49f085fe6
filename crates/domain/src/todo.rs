//! # Todo
//!
//! 管理対象となる唯一のエンティティ。
//!
//! ## ライフサイクル
//!
//! 1. [`NewTodo::new`] で作成（`completed = false`、`created_at = updated_at`）
//! 2. リポジトリへの挿入時に ID が採番され [`Todo`] になる
//! 3. [`Todo::update`] で部分更新（指定されたフィールドのみ変更）
//! 4. リポジトリから物理削除（論理削除・カスケードなし）
//!
//! ## 不変条件
//!
//! - `id` は採番後に変更されず、再利用されない（採番はストアの責務）
//! - `title` は空文字列・空白のみにならない
//! - `updated_at >= created_at`
//! - 更新のたびに `updated_at` は直前の値より真に大きくなる
//! - 日時はミリ秒精度で保持する（API の表現と同じ精度）

use chrono::{DateTime, Duration, SubsecRound, Utc};
use derive_more::Display;

use crate::DomainError;

/// Todo の一意識別子
///
/// ストアが採番する整数 ID。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("{_0}")]
pub struct TodoId(i64);

impl TodoId {
   /// 既存の整数値から ID を作成する
   pub fn new(value: i64) -> Self {
      Self(value)
   }

   /// 内部の整数値を取得する
   pub fn as_i64(&self) -> i64 {
      self.0
   }
}

// =========================================================================
// TodoTitle（タイトル）
// =========================================================================

/// Todo のタイトル（値オブジェクト）
///
/// 前後の空白はトリミングした上で保持する。
///
/// # 不変条件
///
/// - トリミング後に空文字列ではない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
   pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
      let value = value.into().trim().to_string();

      if value.is_empty() {
         return Err(DomainError::Validation(
            "title は空にできません".to_string(),
         ));
      }

      Ok(Self(value))
   }

   /// 文字列参照を取得する
   pub fn as_str(&self) -> &str {
      &self.0
   }

   /// 所有権を持つ文字列に変換する
   pub fn into_string(self) -> String {
      self.0
   }
}

impl std::fmt::Display for TodoTitle {
   fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
      write!(f, "{}", self.0)
   }
}

// =========================================================================
// NewTodo（挿入前の Todo）
// =========================================================================

/// ID 採番前の Todo
///
/// リポジトリの `insert` に渡し、採番済みの [`Todo`] を受け取る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
   title:      TodoTitle,
   completed:  bool,
   created_at: DateTime<Utc>,
   updated_at: DateTime<Utc>,
}

impl NewTodo {
   /// 新しい Todo を作成する
   ///
   /// `completed` は `false`、`created_at` と `updated_at` は同じ時刻になる。
   /// 時刻はミリ秒未満を切り捨てる。
   pub fn new(title: TodoTitle, now: DateTime<Utc>) -> Self {
      let now = now.trunc_subsecs(3);
      Self {
         title,
         completed: false,
         created_at: now,
         updated_at: now,
      }
   }

   pub fn title(&self) -> &TodoTitle {
      &self.title
   }

   pub fn completed(&self) -> bool {
      self.completed
   }

   pub fn created_at(&self) -> DateTime<Utc> {
      self.created_at
   }

   pub fn updated_at(&self) -> DateTime<Utc> {
      self.updated_at
   }

   /// 採番された ID を付与して [`Todo`] にする
   pub fn with_id(self, id: TodoId) -> Todo {
      Todo {
         id,
         title: self.title,
         completed: self.completed,
         created_at: self.created_at,
         updated_at: self.updated_at,
      }
   }
}

// =========================================================================
// Todo（エンティティ）
// =========================================================================

/// Todo エンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
   id:         TodoId,
   title:      TodoTitle,
   completed:  bool,
   created_at: DateTime<Utc>,
   updated_at: DateTime<Utc>,
}

impl Todo {
   /// データベースから Todo を復元する
   pub fn from_db(
      id: TodoId,
      title: TodoTitle,
      completed: bool,
      created_at: DateTime<Utc>,
      updated_at: DateTime<Utc>,
   ) -> Self {
      Self {
         id,
         title,
         completed,
         created_at,
         updated_at,
      }
   }

   /// 指定されたフィールドのみを差し替えた新インスタンスを返す
   ///
   /// `None` のフィールドは元の値を保持する（置換ではなくマージ）。
   /// `updated_at` は常に更新され、ミリ秒精度で直前の値より大きくなる。
   pub fn update(
      self,
      title: Option<TodoTitle>,
      completed: Option<bool>,
      now: DateTime<Utc>,
   ) -> Self {
      // 時計が 1ms 以上進んでいなくても updated_at は単調増加させる
      let now = now.trunc_subsecs(3);
      let previous = self.updated_at.trunc_subsecs(3);
      let updated_at = if now > previous {
         now
      } else {
         previous + Duration::milliseconds(1)
      };

      Self {
         id: self.id,
         title: title.unwrap_or(self.title),
         completed: completed.unwrap_or(self.completed),
         created_at: self.created_at,
         updated_at,
      }
   }

   // --- ゲッター ---

   pub fn id(&self) -> TodoId {
      self.id
   }

   pub fn title(&self) -> &TodoTitle {
      &self.title
   }

   pub fn completed(&self) -> bool {
      self.completed
   }

   pub fn created_at(&self) -> DateTime<Utc> {
      self.created_at
   }

   pub fn updated_at(&self) -> DateTime<Utc> {
      self.updated_at
   }
}
