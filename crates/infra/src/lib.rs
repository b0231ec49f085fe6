//! # Todos インフラ層
//!
//! 外部システム（SQLite）との接続を担当する。
//!
//! ## モジュール構成
//!
//! - [`db`] - 接続プールの作成とマイグレーション
//! - [`error`] - インフラ層のエラー型
//! - [`repository`] - Todo の永続化
//! - `mock` - インメモリのモックリポジトリ（`test-utils` feature）

pub mod db;
pub mod error;
#[cfg(feature = "test-utils")]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
