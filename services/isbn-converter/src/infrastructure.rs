// Infrastructure layer modules
pub mod diagnostics;
pub mod handler_config;
pub mod logging;

// Re-exports
pub use diagnostics::{DiagnosticSink, TracingDiagnosticSink};
pub use handler_config::{
    ConversionFailureStatus, HandlerConfig, HandlerConfigError, ENV_CONVERSION_FAILURE_STATUS,
};
pub use logging::init_logging;
