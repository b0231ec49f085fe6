//! # リポジトリ実装
//!
//! 永続化の抽象（トレイト）と SQLite による具体実装を提供する。
//! ユースケース層はトレイトにのみ依存し、テストではモックに差し替える。

pub mod todo_repository;

pub use todo_repository::{SqliteTodoRepository, TodoRepository};
