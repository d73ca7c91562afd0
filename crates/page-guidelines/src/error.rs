use mcp_common::error::CommonError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Common(#[from] CommonError),

    #[error("config error: {0}")]
    Config(String),

    #[error("unknown operation: {0}")]
    UnknownOperation(String),

    #[error("unknown template kind: {0} (expected page, api or hook)")]
    UnknownTemplateKind(String),

    #[error("unknown category: {0} (expected header, api, component, hook or all)")]
    UnknownCategory(String),

    #[error("unsupported {field}: {value}")]
    UnsupportedKind { field: &'static str, value: String },

    #[error("{0} must not be empty")]
    EmptyArgument(&'static str),

    #[error("invalid name '{0}': must not contain '[' or ']'")]
    InvalidName(String),

    #[error("unresolved placeholder {0} in generated template")]
    UnresolvedPlaceholder(String),
}
