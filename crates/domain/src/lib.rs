//! # Todos ドメイン層
//!
//! Todo 管理の中核となるドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（[`todo::Todo`]）
//! - **値オブジェクト**: 検証済みの不変な値（[`todo::TodoTitle`], [`pagination::PageOptions`]）
//! - **ドメインエラー**: 入力検証の失敗や存在しないエンティティを表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! service → infra → domain
//!    ↘        ↘
//!      shared
//! ```
//!
//! ドメイン層はインフラ層（DB）にも HTTP にも依存しない。
//!
//! ## モジュール構成
//!
//! - [`clock`] - 現在時刻の抽象化
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`pagination`] - ページネーション要求とメタデータの計算
//! - [`todo`] - Todo エンティティ
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use todos_domain::{
//!     pagination::{PageMeta, PageOptions},
//!     todo::{NewTodo, TodoTitle},
//! };
//!
//! let title = TodoTitle::new("  牛乳を買う  ")?;
//! let new_todo = NewTodo::new(title, chrono::Utc::now());
//! assert_eq!(new_todo.title().as_str(), "牛乳を買う");
//! assert!(!new_todo.completed());
//!
//! let options = PageOptions::parse(Some("2"), Some("10"), None)?;
//! let meta = PageMeta::new(&options, 5, 15);
//! assert_eq!(meta.page_count, 2);
//! assert!(!meta.has_next_page);
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod error;
pub mod pagination;
pub mod todo;

pub use error::DomainError;
