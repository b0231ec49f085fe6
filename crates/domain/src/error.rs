//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//! | `NotFound` | 404 Not Found | エンティティが存在しない |
//!
//! ## 使用例
//!
//! ```rust
//! use todos_domain::DomainError;
//!
//! fn validate_title(title: &str) -> Result<(), DomainError> {
//!     if title.trim().is_empty() {
//!         return Err(DomainError::Validation("タイトルは必須です".to_string()));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_title("").is_err());
//! ```

use thiserror::Error;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
   /// バリデーションエラー
   ///
   /// 入力値がルールに違反している場合に使用する。
   ///
   /// # 例
   ///
   /// - 必須フィールドが未入力
   /// - 空白のみのタイトル
   /// - 数値でないページ番号
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// エンティティが見つからない
   ///
   /// `entity_type` にはエンティティの種類（"Todo" など）を指定し、
   /// エラーメッセージを具体的にする。
   #[error("{entity_type} #{id} が見つかりません")]
   NotFound {
      /// エンティティの種類
      entity_type: &'static str,
      /// 検索に使用した識別子
      id:          String,
   },
}
