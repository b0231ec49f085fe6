//! # リクエスト抽出ラッパー
//!
//! axum 標準のエクストラクタは失敗時に 415 / 422 などを返すが、
//! このサービスでは入力の不備をすべて 400（Problem Details）で返す。
//! 各ラッパーは rejection を [`TodoServiceError::Validation`] に変換する。

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::TodoServiceError;

/// JSON ボディ
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(TodoServiceError))]
pub struct ValidJson<T>(pub T);

/// クエリ文字列
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(TodoServiceError))]
pub struct ValidQuery<T>(pub T);

/// パスパラメータ
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(TodoServiceError))]
pub struct ValidPath<T>(pub T);
