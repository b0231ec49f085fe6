//! # Todos 共有ユーティリティ
//!
//! サービスとインフラ層の双方から使われる、ビジネスロジックを含まない
//! 純粋なユーティリティを提供する。
//!
//! - [`ErrorResponse`]: RFC 9457 Problem Details 形式のエラーボディ
//! - [`PaginatedResponse`]: `{ "data": [...], "meta": {...} }` 形式の一覧レスポンス
//! - [`HealthResponse`]: ヘルスチェックのレスポンス
//! - [`observability`]: トレーシング初期化

pub mod error_response;
pub mod health;
pub mod observability;
pub mod paginated_response;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
pub use paginated_response::PaginatedResponse;
