/// ISBN変換ハンドラー
///
/// Lambdaイベントからisbn10を取り出してISBN-13に変換し、
/// API Gatewayプロキシ形式のレスポンスを構築する。
/// 失敗時は注入された`DiagnosticSink`に診断ログを1件だけ記録する。
use serde_json::Value;
use thiserror::Error;

use crate::application::{ParseError, RequestParser};
use crate::domain::{convert, ApiResponse, ConversionError, Isbn13, STATUS_BAD_REQUEST};
use crate::infrastructure::{DiagnosticSink, HandlerConfig};

/// ハンドラーのエラー型
#[derive(Debug, Clone, PartialEq, Error)]
pub enum HandlerError {
    /// イベントの形が不正、またはisbn10が未指定
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// isbn10の形式が不正で変換できない
    #[error("Cannot convert given isbn10: {isbn10} to isbn13")]
    Conversion {
        isbn10: String,
        #[source]
        source: ConversionError,
    },
}

impl HandlerError {
    /// レスポンスのステータスコード
    ///
    /// 変換失敗のみ設定に従い、それ以外は常に400。
    pub fn status_code(&self, config: &HandlerConfig) -> u16 {
        match self {
            HandlerError::Parse(_) => STATUS_BAD_REQUEST,
            HandlerError::Conversion { .. } => config.conversion_failure_status.status_code(),
        }
    }
}

/// ISBN変換ハンドラー
pub struct ConvertHandler<D>
where
    D: DiagnosticSink,
{
    /// 診断ログの出力先
    diagnostics: D,
    /// ハンドラー設定
    config: HandlerConfig,
}

impl<D> ConvertHandler<D>
where
    D: DiagnosticSink,
{
    /// デフォルト設定でConvertHandlerを作成
    pub fn new(diagnostics: D) -> Self {
        Self::with_config(diagnostics, HandlerConfig::default())
    }

    /// 設定を指定してConvertHandlerを作成
    pub fn with_config(diagnostics: D, config: HandlerConfig) -> Self {
        Self {
            diagnostics,
            config,
        }
    }

    /// ハンドラー設定
    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Lambdaイベントを処理してレスポンスを返す
    ///
    /// 入力がどのような形でもパニックせず、必ずレスポンスを返す。
    pub fn handle(&self, event: &Value) -> ApiResponse {
        match self.try_convert(event) {
            Ok(isbn13) => ApiResponse::converted(&isbn13),
            Err(err) => {
                self.report(&err);
                ApiResponse::error(err.status_code(&self.config), &err.to_string())
            }
        }
    }

    /// イベントからisbn10を取り出して変換する
    ///
    /// # 戻り値
    /// * `Ok(Isbn13)` - 変換成功時
    /// * `Err(HandlerError)` - パース失敗または変換失敗時
    pub fn try_convert(&self, event: &Value) -> Result<Isbn13, HandlerError> {
        let isbn10 = RequestParser::parse(event)?;

        convert(&isbn10).map_err(|source| HandlerError::Conversion { isbn10, source })
    }

    /// エラーの種類に応じて診断ログを記録
    fn report(&self, err: &HandlerError) {
        match err {
            HandlerError::Parse(ParseError::MissingIsbn10) => {
                self.diagnostics.error(&err.to_string(), None);
            }
            HandlerError::Parse(ParseError::MalformedInput(_)) => {
                self.diagnostics.warn(&err.to_string(), None);
            }
            HandlerError::Conversion { isbn10, source } => {
                self.diagnostics
                    .warn(&format!("{}: {}", err, source), Some(isbn10));
            }
        }
    }
}
