//! # インフラ層エラー定義
//!
//! データベースとの通信で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別（Database, Migration, Unexpected）
//!
//! `From` 実装と convenience constructor はエラー生成時点の
//! スパン情報を自動的にキャプチャする。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別に応じた処理には [`kind()`](InfraError::kind) を使用する。
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
   kind:       InfraErrorKind,
   span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
   /// SQL の実行失敗、接続エラー、制約違反など
   #[error("データベースエラー: {0}")]
   Database(#[source] sqlx::Error),

   /// マイグレーションの適用失敗
   #[error("マイグレーションエラー: {0}")]
   Migration(#[source] sqlx::migrate::MigrateError),

   /// 格納済みデータの不整合など、上記に分類できないエラー
   #[error("予期しないエラー: {0}")]
   Unexpected(String),
}

impl InfraError {
   pub fn kind(&self) -> &InfraErrorKind {
      &self.kind
   }

   pub fn span_trace(&self) -> &SpanTrace {
      &self.span_trace
   }

   /// 予期しないエラーを生成する
   pub fn unexpected(msg: impl Into<String>) -> Self {
      Self::capture(InfraErrorKind::Unexpected(msg.into()))
   }

   fn capture(kind: InfraErrorKind) -> Self {
      Self {
         kind,
         span_trace: SpanTrace::capture(),
      }
   }
}

impl fmt::Debug for InfraError {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("InfraError")
         .field("kind", &self.kind)
         .field("span_trace", &self.span_trace)
         .finish()
   }
}

impl std::error::Error for InfraError {
   fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
      self.kind.source()
   }
}

impl From<sqlx::Error> for InfraError {
   fn from(source: sqlx::Error) -> Self {
      Self::capture(InfraErrorKind::Database(source))
   }
}

impl From<sqlx::migrate::MigrateError> for InfraError {
   fn from(source: sqlx::migrate::MigrateError) -> Self {
      Self::capture(InfraErrorKind::Migration(source))
   }
}

#[cfg(test)]
mod tests {
   use std::error::Error as _;

   use tracing_subscriber::layer::SubscriberExt as _;

   use super::*;

   /// ErrorLayer 付き subscriber の下で `f` を実行する
   fn with_error_layer(f: impl FnOnce()) {
      let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
      let _guard = tracing::subscriber::set_default(subscriber);
      f();
   }

   #[test]
   fn test_from_sqlx_errorでspan_traceがキャプチャされる() {
      with_error_layer(|| {
         let span = tracing::info_span!("todo_repo_find");
         let _enter = span.enter();

         let err: InfraError = sqlx::Error::RowNotFound.into();

         assert!(matches!(err.kind(), InfraErrorKind::Database(_)));
         let trace = format!("{}", err.span_trace());
         assert!(
            trace.contains("todo_repo_find"),
            "SpanTrace がスパン名を含むこと: {trace}",
         );
      });
   }

   #[test]
   fn test_unexpectedはメッセージを保持する() {
      with_error_layer(|| {
         let err = InfraError::unexpected("壊れた行");

         assert!(matches!(err.kind(), InfraErrorKind::Unexpected(msg) if msg == "壊れた行"));
         assert_eq!(err.to_string(), "予期しないエラー: 壊れた行");
      });
   }

   #[test]
   fn test_databaseはsourceとしてsqlxエラーを返す() {
      let err: InfraError = sqlx::Error::PoolTimedOut.into();

      assert!(err.source().is_some());
      assert!(err.to_string().starts_with("データベースエラー: "));
   }

   #[test]
   fn test_unexpectedはsourceを持たない() {
      let err = InfraError::unexpected("x");
      assert!(err.source().is_none());
   }
}
