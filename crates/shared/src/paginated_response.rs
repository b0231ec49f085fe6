//! # ページネーション付きレスポンス
//!
//! オフセット（page / take）ベースのページネーションに対応した一覧レスポンス型。

use serde::{Deserialize, Serialize};

/// ページネーション付きレスポンス
///
/// 一覧データとページのメタデータを並べて返す。
/// メタデータの形はエンドポイントごとに `M` で指定する。
///
/// ## JSON 形式
///
/// ```json
/// {
///   "data": [...],
///   "meta": { "page": 1, "take": 10, ... }
/// }
/// ```
///
/// ## 使用例
///
/// ```
/// use todos_shared::PaginatedResponse;
///
/// let response = PaginatedResponse::new(vec![1, 2, 3], "meta");
/// assert_eq!(response.data.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PaginatedResponse<T, M> {
   pub data: Vec<T>,
   pub meta: M,
}

impl<T, M> PaginatedResponse<T, M> {
   /// 新しい `PaginatedResponse` を作成する
   pub fn new(data: Vec<T>, meta: M) -> Self {
      Self { data, meta }
   }
}
