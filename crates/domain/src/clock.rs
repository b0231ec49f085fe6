//! # Clock（時刻プロバイダ）
//!
//! ユースケース層は `Utc::now()` を直接呼ばず、このトレイト経由で現在時刻を得る。
//!
//! Todo の日時は API でミリ秒精度で表現されるため、[`SystemClock`] も
//! ミリ秒未満を切り捨てた時刻を返す。

use chrono::{DateTime, SubsecRound, Utc};

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
   fn now(&self) -> DateTime<Utc>;
}

/// システム時刻をミリ秒精度で返す実装
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
   fn now(&self) -> DateTime<Utc> {
      Utc::now().trunc_subsecs(3)
   }
}

/// 常に同じ時刻を返す実装（テスト・デモ用）
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
   pub fn new(now: DateTime<Utc>) -> Self {
      Self(now)
   }
}

impl Clock for FixedClock {
   fn now(&self) -> DateTime<Utc> {
      self.0
   }
}
