// 変換ハンドラー設定
//
// 環境変数からレスポンス方針を読み込むインフラストラクチャ層コンポーネント。

use std::str::FromStr;

use thiserror::Error;
use tracing::{info, warn};

use crate::domain::{STATUS_BAD_REQUEST, STATUS_INTERNAL_SERVER_ERROR};

/// 環境変数名: 変換失敗時のステータス方針
pub const ENV_CONVERSION_FAILURE_STATUS: &str = "ISBN_CONVERSION_FAILURE_STATUS";

/// 設定読み込みのエラー型
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HandlerConfigError {
    #[error("Invalid value for {key}: {value} (expected \"client\" or \"server\")")]
    InvalidValue { key: String, value: String },
}

/// 変換失敗（isbn10の形式不正）時に返すステータスの方針
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConversionFailureStatus {
    /// 400を返す
    #[default]
    Client,
    /// 500を返す（旧来の挙動）
    Server,
}

impl ConversionFailureStatus {
    /// 対応するHTTPステータスコード
    pub fn status_code(&self) -> u16 {
        match self {
            ConversionFailureStatus::Client => STATUS_BAD_REQUEST,
            ConversionFailureStatus::Server => STATUS_INTERNAL_SERVER_ERROR,
        }
    }

    /// 設定値としての表記
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionFailureStatus::Client => "client",
            ConversionFailureStatus::Server => "server",
        }
    }
}

impl FromStr for ConversionFailureStatus {
    type Err = HandlerConfigError;

    /// 大文字小文字と前後の空白は無視する
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "client" => Ok(ConversionFailureStatus::Client),
            "server" => Ok(ConversionFailureStatus::Server),
            _ => Err(HandlerConfigError::InvalidValue {
                key: ENV_CONVERSION_FAILURE_STATUS.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

/// 変換ハンドラー設定
///
/// コールドスタート時に一度だけ読み込み、以降のリクエストで共有する。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandlerConfig {
    /// 変換失敗時のステータス方針
    pub conversion_failure_status: ConversionFailureStatus,
}

impl HandlerConfig {
    /// 明示的な値で作成
    pub fn new(conversion_failure_status: ConversionFailureStatus) -> Self {
        Self {
            conversion_failure_status,
        }
    }

    /// 環境変数から設定を読み込み
    ///
    /// 未設定の場合はデフォルト値、不正な値の場合は警告を出してデフォルト値を使用する。
    ///
    /// # 環境変数
    /// - ISBN_CONVERSION_FAILURE_STATUS: `client`（400、デフォルト）または`server`（500）
    pub fn from_env() -> Self {
        match Self::try_from_env() {
            Ok(config) => config,
            Err(err) => {
                warn!(error = %err, "HandlerConfig parse error, using default");
                Self::default()
            }
        }
    }

    /// 環境変数から設定を読み込み（不正な値はエラー）
    pub fn try_from_env() -> Result<Self, HandlerConfigError> {
        let conversion_failure_status = match std::env::var(ENV_CONVERSION_FAILURE_STATUS) {
            Ok(value) => value.parse()?,
            Err(_) => ConversionFailureStatus::default(),
        };

        info!(
            conversion_failure_status = conversion_failure_status.as_str(),
            "HandlerConfig loaded"
        );

        Ok(Self::new(conversion_failure_status))
    }
}
