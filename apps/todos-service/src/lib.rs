//! # Todos Service ライブラリ
//!
//! ルーター・ハンドラ・ユースケースを公開する。
//! バイナリ（`main.rs`, `generate-openapi`）と統合テストから利用する。

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod openapi;
pub mod usecase;
