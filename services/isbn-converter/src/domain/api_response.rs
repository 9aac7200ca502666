// API Gatewayプロキシ統合向けレスポンス
//
// Lambdaの戻り値としてそのままシリアライズされ、
// statusCode / headers / body（JSON文字列）の形でクライアントに返却される。

use serde::Serialize;
use serde_json::json;

use crate::domain::Isbn13;

/// 成功
pub const STATUS_OK: u16 = 200;

/// クライアント起因のエラー
pub const STATUS_BAD_REQUEST: u16 = 400;

/// サーバー起因のエラー
pub const STATUS_INTERNAL_SERVER_ERROR: u16 = 500;

/// レスポンスのContent-Type
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// レスポンスヘッダー
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResponseHeaders {
    #[serde(rename = "Content-Type")]
    pub content_type: String,
}

impl Default for ResponseHeaders {
    fn default() -> Self {
        Self {
            content_type: CONTENT_TYPE_JSON.to_string(),
        }
    }
}

/// Lambdaレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// HTTPステータスコード
    pub status_code: u16,
    /// レスポンスヘッダー
    pub headers: ResponseHeaders,
    /// JSONエンコード済みの本文
    pub body: String,
}

impl ApiResponse {
    /// 変換成功レスポンス: `{"isbn13": "..."}`
    pub fn converted(isbn13: &Isbn13) -> Self {
        Self::json(STATUS_OK, json!({ "isbn13": isbn13 }))
    }

    /// エラーレスポンス: `{"error": "..."}`
    ///
    /// 本文はserde_jsonで生成するため、メッセージ中の引用符や改行もエスケープされる。
    pub fn error(status_code: u16, message: &str) -> Self {
        Self::json(status_code, json!({ "error": message }))
    }

    fn json(status_code: u16, body: serde_json::Value) -> Self {
        Self {
            status_code,
            headers: ResponseHeaders::default(),
            body: body.to_string(),
        }
    }

    /// 2xxかどうか
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}
