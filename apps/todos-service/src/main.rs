//! # Todos Service サーバー
//!
//! Todo の CRUD とページネーション付き一覧を提供する HTTP サーバー。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `TODOS_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `TODOS_PORT` | No | ポート番号（デフォルト: `3000`） |
//! | `DATABASE_URL` | No | SQLite 接続 URL（デフォルト: `sqlite://todo.db`） |
//! | `DATABASE_MAX_CONNECTIONS` | No | 最大接続数（デフォルト: `5`） |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,todos=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p todos-service
//!
//! TODOS_PORT=8080 DATABASE_URL=sqlite::memory: cargo run -p todos-service
//! ```

use std::sync::Arc;

use anyhow::Context as _;
use todos_domain::clock::SystemClock;
use todos_infra::db;
use todos_service::{app, config::TodosConfig};
use todos_shared::observability::{self, TracingConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   let config = TodosConfig::from_env().context("設定の読み込みに失敗しました")?;

   let tracing_config = TracingConfig::new("todos-service", config.log_format);
   observability::init_tracing(&tracing_config);

   let _tracing_guard =
      tracing::info_span!("app", service = %tracing_config.service_name).entered();

   tracing::info!("Todos Service サーバーを起動します: {}", config.bind_address());

   let pool = db::create_pool(&config.database_url, config.database_max_connections)
      .await
      .context("データベース接続に失敗しました")?;
   db::run_migrations(&pool)
      .await
      .context("マイグレーションの適用に失敗しました")?;
   tracing::info!("データベースに接続しました");

   let app = app::build_app(pool, Arc::new(SystemClock));

   let listener = TcpListener::bind(config.bind_address())
      .await
      .with_context(|| format!("{} へのバインドに失敗しました", config.bind_address()))?;
   tracing::info!("Todos Service サーバーが起動しました: {}", listener.local_addr()?);

   axum::serve(listener, app)
      .with_graceful_shutdown(shutdown_signal())
      .await?;

   tracing::info!("Todos Service サーバーを停止しました");
   Ok(())
}

async fn shutdown_signal() {
   if let Err(e) = tokio::signal::ctrl_c().await {
      tracing::error!("シグナルの待機に失敗しました: {}", e);
   }
}
