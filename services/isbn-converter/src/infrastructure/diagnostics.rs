/// 診断ログ出力
///
/// ハンドラーはグローバルなロガーを直接呼ばず、このトレイト経由で
/// 警告・エラーを1件ずつ記録する（本番: tracing、テスト: 記録用モック）。
use tracing::{error, warn};

/// 診断ログ出力用トレイト
pub trait DiagnosticSink: Send + Sync {
    /// 警告を記録
    ///
    /// # 引数
    /// * `message` - ログメッセージ
    /// * `isbn10` - 対象のisbn10（取得できた場合）
    fn warn(&self, message: &str, isbn10: Option<&str>);

    /// エラーを記録
    fn error(&self, message: &str, isbn10: Option<&str>);
}

/// tracingに委譲する実装
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnosticSink;

impl TracingDiagnosticSink {
    pub fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingDiagnosticSink {
    fn warn(&self, message: &str, isbn10: Option<&str>) {
        match isbn10 {
            Some(isbn10) => warn!(isbn10 = isbn10, "{}", message),
            None => warn!("{}", message),
        }
    }

    fn error(&self, message: &str, isbn10: Option<&str>) {
        match isbn10 {
            Some(isbn10) => error!(isbn10 = isbn10, "{}", message),
            None => error!("{}", message),
        }
    }
}
