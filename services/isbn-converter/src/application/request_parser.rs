/// Lambdaイベントパーサー
///
/// API Gatewayプロキシ統合のイベントから`queryStringParameters.isbn10`を取り出す。
/// 未知のフィールドは無視し、型が合わない場合はパースエラーとして扱う。
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// イベントパースエラー
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    /// イベントが期待する形にデコードできない
    #[error("failed to parse url parameters: {0}")]
    MalformedInput(String),

    /// isbn10が未指定または空
    #[error("isbn10 is not given")]
    MissingIsbn10,
}

/// 変換リクエスト
///
/// API Gatewayはクエリ文字列がない場合に`queryStringParameters: null`を送るため、
/// 各フィールドはOptionで受ける。
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    #[serde(default)]
    pub query_string_parameters: Option<QueryParameters>,
}

/// クエリパラメータ
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct QueryParameters {
    #[serde(default)]
    pub isbn10: Option<String>,
}

impl ConvertRequest {
    /// 空白のみの値は未指定として扱う
    pub fn isbn10(&self) -> Option<&str> {
        self.query_string_parameters
            .as_ref()
            .and_then(|params| params.isbn10.as_deref())
            .filter(|value| !value.trim().is_empty())
    }
}

/// Lambdaイベントパーサー
pub struct RequestParser;

impl RequestParser {
    /// イベントをデコードしてisbn10を返す
    ///
    /// # 戻り値
    /// * `Ok(String)` - isbn10の値（加工しない）
    /// * `Err(ParseError::MalformedInput)` - イベントの形が不正
    /// * `Err(ParseError::MissingIsbn10)` - isbn10が未指定または空
    ///
    /// # 例
    /// ```
    /// use isbn_converter::application::RequestParser;
    /// use serde_json::json;
    ///
    /// let event = json!({ "queryStringParameters": { "isbn10": "0470059020" } });
    /// assert_eq!(RequestParser::parse(&event).unwrap(), "0470059020");
    /// ```
    pub fn parse(event: &Value) -> Result<String, ParseError> {
        // serdeの構造体デコードは配列も位置指定で受け付けるため、先にオブジェクトであることを確認する
        let fields = Self::expect_object(event, "event")?;
        if let Some(params) = fields.get("queryStringParameters").filter(|v| !v.is_null()) {
            Self::expect_object(params, "queryStringParameters")?;
        }

        let request = ConvertRequest::deserialize(event)
            .map_err(|err| ParseError::MalformedInput(err.to_string()))?;

        request
            .isbn10()
            .map(str::to_string)
            .ok_or(ParseError::MissingIsbn10)
    }

    fn expect_object<'a>(
        value: &'a Value,
        name: &str,
    ) -> Result<&'a serde_json::Map<String, Value>, ParseError> {
        value.as_object().ok_or_else(|| {
            ParseError::MalformedInput(format!("{} must be an object, got {}", name, value))
        })
    }
}
