//! # Todos Service 設定
//!
//! 環境変数からサーバーの設定を読み込む。
//!
//! | 変数名 | デフォルト |
//! |--------|-----------|
//! | `TODOS_HOST` | `0.0.0.0` |
//! | `TODOS_PORT` | `3000` |
//! | `DATABASE_URL` | `sqlite://todo.db` |
//! | `DATABASE_MAX_CONNECTIONS` | `5` |
//! | `LOG_FORMAT` | `pretty` |

use std::{env, str::FromStr};

use thiserror::Error;
use todos_shared::observability::LogFormat;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_DATABASE_URL: &str = "sqlite://todo.db";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// 設定の読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
   #[error("{name} の値が不正です: {value:?}")]
   InvalidValue { name: &'static str, value: String },
}

/// Todos Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodosConfig {
   /// バインドアドレス
   pub host: String,
   /// ポート番号
   pub port: u16,
   /// データベース接続 URL
   pub database_url: String,
   /// 接続プールの最大接続数
   pub database_max_connections: u32,
   pub log_format: LogFormat,
}

impl TodosConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// 未設定（`None`）の項目はデフォルト値になる。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let database_max_connections =
         parse_or("DATABASE_MAX_CONNECTIONS", &lookup, DEFAULT_MAX_CONNECTIONS)?;
      if database_max_connections == 0 {
         return Err(ConfigError::InvalidValue {
            name:  "DATABASE_MAX_CONNECTIONS",
            value: "0".to_string(),
         });
      }

      Ok(Self {
         host: lookup("TODOS_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
         port: parse_or("TODOS_PORT", &lookup, DEFAULT_PORT)?,
         database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
         database_max_connections,
         log_format: lookup("LOG_FORMAT")
            .map(|v| LogFormat::parse(&v))
            .unwrap_or_default(),
      })
   }

   /// `host:port` 形式のバインドアドレス
   pub fn bind_address(&self) -> String {
      format!("{}:{}", self.host, self.port)
   }
}

fn parse_or<T: FromStr>(
   name: &'static str,
   lookup: &impl Fn(&str) -> Option<String>,
   default: T,
) -> Result<T, ConfigError> {
   match lookup(name) {
      Some(value) => value
         .trim()
         .parse()
         .map_err(|_| ConfigError::InvalidValue { name, value }),
      None => Ok(default),
   }
}

#[cfg(test)]
mod tests {
   use std::collections::HashMap;

   use pretty_assertions::assert_eq;
   use rstest::rstest;

   use super::*;

   fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
      let map: HashMap<String, String> = vars
         .iter()
         .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
         .collect();
      move |name| map.get(name).cloned()
   }

   #[test]
   fn test_未設定の場合はデフォルト値になる() {
      let config = TodosConfig::from_lookup(lookup_from(&[])).unwrap();

      assert_eq!(
         config,
         TodosConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: "sqlite://todo.db".to_string(),
            database_max_connections: 5,
            log_format: LogFormat::Pretty,
         }
      );
      assert_eq!(config.bind_address(), "0.0.0.0:3000");
   }

   #[test]
   fn test_環境変数の値が反映される() {
      let config = TodosConfig::from_lookup(lookup_from(&[
         ("TODOS_HOST", "127.0.0.1"),
         ("TODOS_PORT", "8080"),
         ("DATABASE_URL", "sqlite::memory:"),
         ("DATABASE_MAX_CONNECTIONS", "1"),
         ("LOG_FORMAT", "json"),
      ]))
      .unwrap();

      assert_eq!(config.bind_address(), "127.0.0.1:8080");
      assert_eq!(config.database_url, "sqlite::memory:");
      assert_eq!(config.database_max_connections, 1);
      assert_eq!(config.log_format, LogFormat::Json);
   }

   #[rstest]
   #[case("TODOS_PORT", "abc")]
   #[case("TODOS_PORT", "70000")]
   #[case("DATABASE_MAX_CONNECTIONS", "-1")]
   #[case("DATABASE_MAX_CONNECTIONS", "0")]
   fn test_不正な数値はconfig_errorになる(#[case] name: &'static str, #[case] value: &str) {
      let result = TodosConfig::from_lookup(lookup_from(&[(name, value)]));

      assert_eq!(
         result,
         Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
         })
      );
   }
}
