//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - 入力の検証（型変換・必須チェック）はハンドラで行い、検証済みの値をユースケースへ渡す
//! - 抽出失敗（不正な JSON、数値でない ID など）は [`extract`] のラッパーで 400 に揃える

pub mod extract;
pub mod health;
pub mod todo;

pub use health::health_check;
pub use todo::{TodoState, create_todo, delete_todo, get_todo, list_todos, update_todo};
