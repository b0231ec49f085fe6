//! テスト共通フィクスチャ
//!
//! インメモリ SQLite のプール作成と、時刻・エンティティ生成のヘルパー。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use sqlx::SqlitePool;
use todos_domain::todo::{NewTodo, TodoTitle};
use todos_infra::db;

/// マイグレーション適用済みのインメモリ DB を作成する
pub async fn setup_pool() -> SqlitePool {
   let pool = db::create_pool("sqlite::memory:", 1).await.unwrap();
   db::run_migrations(&pool).await.unwrap();
   pool
}

/// テスト用の基準時刻（2023-11-14T22:13:20Z）
pub fn test_now() -> DateTime<Utc> {
   DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

/// 基準時刻から `minutes` 分後に作成された NewTodo
pub fn new_todo_at(title: &str, minutes: i64) -> NewTodo {
   NewTodo::new(
      TodoTitle::new(title).unwrap(),
      test_now() + Duration::minutes(minutes),
   )
}
