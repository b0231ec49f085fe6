//! # Observability 基盤
//!
//! トレーシングの初期化とログ出力形式の切り替えを提供する。
//!
//! - `RUST_LOG`: ログレベルのフィルタ（未設定時は `info,todos=debug`）
//! - `LOG_FORMAT`: `json` / `pretty` の切り替え（未設定・不正値は `pretty`）
//!
//! `tracing-error` の `ErrorLayer` を登録するため、インフラ層のエラーは
//! 発生時点のスパン情報（`SpanTrace`）を保持できる。

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_LOG_FILTER: &str = "info,todos=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
   /// JSON 形式（本番環境向け）
   Json,
   /// 人間が読みやすい形式（開発環境向け）
   #[default]
   Pretty,
}

impl LogFormat {
   /// 文字列からログ形式をパースする
   ///
   /// 大文字小文字と前後の空白は無視する。認識できない値は
   /// [`Pretty`](LogFormat::Pretty) にフォールバックし、stderr に警告を出す
   /// （この時点ではまだ subscriber が存在しないため）。
   pub fn parse(s: &str) -> Self {
      match s.trim().to_ascii_lowercase().as_str() {
         "json" => Self::Json,
         "pretty" => Self::Pretty,
         _ => {
            eprintln!("WARNING: unknown LOG_FORMAT={s:?}, falling back to pretty");
            Self::Pretty
         }
      }
   }
}

/// トレーシング初期化設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
   /// サービス名（起動ログとルートスパンに出力）
   pub service_name: String,
   pub log_format:   LogFormat,
}

impl TracingConfig {
   pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
      Self {
         service_name: service_name.into(),
         log_format,
      }
   }
}

/// グローバル subscriber を登録する
///
/// プロセス内で 1 度だけ呼び出すこと。
///
/// JSON モードではイベントのフィールドをトップレベルに展開し、
/// 現在のスパン（`span.*`）を併せて出力する。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) {
   use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

   let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

   let fmt_layer = match config.log_format {
      LogFormat::Json => tracing_subscriber::fmt::layer()
         .json()
         .flatten_event(true)
         .with_current_span(true)
         .with_span_list(false)
         .boxed(),
      LogFormat::Pretty => tracing_subscriber::fmt::layer().with_target(true).boxed(),
   };

   tracing_subscriber::registry()
      .with(env_filter)
      .with(fmt_layer)
      .with(tracing_error::ErrorLayer::default())
      .init();
}
