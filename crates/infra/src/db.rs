//! # SQLite データベース接続管理
//!
//! 接続プールの作成とマイグレーションの適用を行う。
//!
//! ## インメモリデータベース
//!
//! `sqlite::memory:` は接続ごとに別のデータベースになる。
//! そのためインメモリの場合は接続数を 1 に固定し、アイドル切断も無効にする
//! （切断するとデータが失われる）。
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use todos_infra::db;
//!
//! let pool = db::create_pool("sqlite://todo.db", 5).await?;
//! db::run_migrations(&pool).await?;
//! ```

use std::{str::FromStr, time::Duration};

use sqlx::{
   SqlitePool,
   sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};

use crate::error::InfraError;

/// データベースマイグレーションを実行する
///
/// `migrations/` 配下のファイルはビルド時にバイナリへ埋め込まれる。
/// 適用済みのマイグレーションはスキップされる。
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), InfraError> {
   sqlx::migrate!("../../migrations").run(pool).await?;
   Ok(())
}

/// SQLite 接続プールを作成する
///
/// ファイルが存在しない場合は作成する。
///
/// # 引数
///
/// * `database_url` - `sqlite://todo.db` / `sqlite::memory:` 形式の URL
/// * `max_connections` - 最大接続数（インメモリの場合は無視され 1 になる）
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<SqlitePool, InfraError> {
   let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

   let pool_options = if is_in_memory(database_url) {
      SqlitePoolOptions::new()
         .max_connections(1)
         .idle_timeout(None)
         .max_lifetime(None)
   } else {
      SqlitePoolOptions::new().max_connections(max_connections.max(1))
   };

   let pool = pool_options
      .acquire_timeout(Duration::from_secs(5))
      .connect_with(options)
      .await?;

   tracing::debug!(database_url, "データベース接続プールを作成しました");
   Ok(pool)
}

fn is_in_memory(database_url: &str) -> bool {
   database_url.contains(":memory:") || database_url.contains("mode=memory")
}
