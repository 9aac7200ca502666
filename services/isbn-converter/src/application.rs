// アプリケーション層モジュール
pub mod convert_handler;
pub mod request_parser;

// 再エクスポート
pub use convert_handler::{ConvertHandler, HandlerError};
pub use request_parser::{ConvertRequest, ParseError, QueryParameters, RequestParser};
