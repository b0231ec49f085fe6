//! # ユースケース層
//!
//! Todos Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: リポジトリと時計を `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: 入力の検証はハンドラ、処理の流れはユースケースに集約

pub mod todo;

pub use todo::{CreateTodoInput, TodoUseCaseImpl, UpdateTodoInput};
