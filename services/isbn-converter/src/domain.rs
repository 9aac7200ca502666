// Domain layer modules
pub mod api_response;
pub mod isbn;

// Re-exports
pub use api_response::{
    ApiResponse, ResponseHeaders, CONTENT_TYPE_JSON, STATUS_BAD_REQUEST,
    STATUS_INTERNAL_SERVER_ERROR, STATUS_OK,
};
pub use isbn::{convert, isbn13_check_digit, ConversionError, Isbn10, Isbn13};
