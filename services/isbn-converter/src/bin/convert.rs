/// ISBN変換Lambdaエントリポイント
///
/// API Gateway経由のリクエストを受け取り、
/// `queryStringParameters.isbn10`をISBN-13に変換して返却する。
use std::sync::OnceLock;

use isbn_converter::application::ConvertHandler;
use isbn_converter::domain::ApiResponse;
use isbn_converter::infrastructure::{init_logging, HandlerConfig, TracingDiagnosticSink};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

/// ハンドラー設定の静的インスタンス
///
/// コールドスタート時に一度だけ環境変数から読み込み、warm start時は再利用する。
static HANDLER_CONFIG: OnceLock<HandlerConfig> = OnceLock::new();

fn handler_config() -> &'static HandlerConfig {
    HANDLER_CONFIG.get_or_init(HandlerConfig::from_env)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("ISBN変換Lambda関数を初期化");
    handler_config();

    let func = service_fn(handler);
    lambda_runtime::run(func).await?;
    Ok(())
}

/// Lambda関数のメインハンドラー
///
/// 変換に失敗した場合もエラーレスポンスを返すため、`Err`は返さない。
async fn handler(event: LambdaEvent<Value>) -> Result<ApiResponse, Error> {
    Ok(process(event, handler_config()))
}

/// 設定を指定してイベントを処理
fn process(event: LambdaEvent<Value>, config: &HandlerConfig) -> ApiResponse {
    let request_id = event.context.request_id.clone();

    info!(request_id = %request_id, "ISBN変換リクエスト受信");

    let convert_handler = ConvertHandler::with_config(TracingDiagnosticSink::new(), *config);
    let response = convert_handler.handle(&event.payload);

    info!(
        request_id = %request_id,
        status_code = response.status_code,
        success = response.is_success(),
        "ISBN変換レスポンス送信"
    );

    response
}
