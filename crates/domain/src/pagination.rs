//! # ページネーション
//!
//! 一覧取得のページ指定（page / take / order）と、レスポンスに付与する
//! メタデータ（総ページ数・前後ページの有無）を計算する。
//!
//! ## 計算式
//!
//! | 項目 | 式 |
//! |------|-----|
//! | offset | `(page - 1) * take` |
//! | `page_count` | `ceil(total / take)` |
//! | `has_previous_page` | `page > 1` |
//! | `has_next_page` | `page < page_count` |
//!
//! `item_count` は実際に返却した件数であり、最終ページでは `take` 未満になりうる。

use strum::{AsRefStr, Display, EnumString};

use crate::DomainError;

/// page のデフォルト値
pub const DEFAULT_PAGE: u32 = 1;

/// take（1 ページあたりの件数）のデフォルト値
pub const DEFAULT_TAKE: u32 = 10;

/// 作成日時による並び順
#[derive(
   Debug,
   Clone,
   Copy,
   PartialEq,
   Eq,
   Default,
   EnumString,
   Display,
   AsRefStr,
)]
pub enum SortOrder {
   /// 昇順（古い順）
   #[default]
   #[strum(serialize = "ASC")]
   Asc,
   /// 降順（新しい順）
   #[strum(serialize = "DESC")]
   Desc,
}

/// 検証済みのページ指定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
   page:  u32,
   take:  u32,
   order: SortOrder,
}

impl Default for PageOptions {
   fn default() -> Self {
      Self {
         page:  DEFAULT_PAGE,
         take:  DEFAULT_TAKE,
         order: SortOrder::default(),
      }
   }
}

impl PageOptions {
   /// ページ指定を作成する
   ///
   /// `page` と `take` は 1 以上でなければならない。
   pub fn new(page: u32, take: u32, order: SortOrder) -> Result<Self, DomainError> {
      if page == 0 {
         return Err(DomainError::Validation(
            "page は 1 以上の整数である必要があります".to_string(),
         ));
      }
      if take == 0 {
         return Err(DomainError::Validation(
            "take は 1 以上の整数である必要があります".to_string(),
         ));
      }
      Ok(Self { page, take, order })
   }

   /// クエリ文字列の値からページ指定を検証・生成する
   ///
   /// 未指定の項目はデフォルト値（page=1, take=10, order=ASC）を使う。
   /// `order` は `ASC` または `DESC` のみ受け付ける。
   pub fn parse(
      page: Option<&str>,
      take: Option<&str>,
      order: Option<&str>,
   ) -> Result<Self, DomainError> {
      let page = match page {
         Some(raw) => parse_positive(raw, "page")?,
         None => DEFAULT_PAGE,
      };
      let take = match take {
         Some(raw) => parse_positive(raw, "take")?,
         None => DEFAULT_TAKE,
      };
      let order = match order {
         Some(raw) => raw.parse::<SortOrder>().map_err(|_| {
            DomainError::Validation(format!(
               "order は ASC または DESC である必要があります: {raw:?}"
            ))
         })?,
         None => SortOrder::default(),
      };

      Self::new(page, take, order)
   }

   pub fn page(&self) -> u32 {
      self.page
   }

   pub fn take(&self) -> u32 {
      self.take
   }

   pub fn order(&self) -> SortOrder {
      self.order
   }

   /// 読み飛ばす件数（`(page - 1) * take`）
   pub fn offset(&self) -> i64 {
      (i64::from(self.page) - 1) * i64::from(self.take)
   }
}

fn parse_positive(raw: &str, field: &str) -> Result<u32, DomainError> {
   match raw.parse::<u32>() {
      Ok(value) if value >= 1 => Ok(value),
      _ => Err(DomainError::Validation(format!(
         "{field} は 1 以上の整数である必要があります: {raw:?}"
      ))),
   }
}

/// ページネーションのメタデータ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
   pub page:              u32,
   pub take:              u32,
   pub item_count:        u64,
   pub page_count:        u64,
   pub has_previous_page: bool,
   pub has_next_page:     bool,
}

impl PageMeta {
   /// 返却件数と総件数からメタデータを計算する
   pub fn new(options: &PageOptions, item_count: usize, total: u64) -> Self {
      let page_count = total.div_ceil(u64::from(options.take));

      Self {
         page: options.page,
         take: options.take,
         item_count: item_count as u64,
         page_count,
         has_previous_page: options.page > 1,
         has_next_page: u64::from(options.page) < page_count,
      }
   }
}

/// 1 ページ分の取得結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
   pub items: Vec<T>,
   pub meta:  PageMeta,
}
