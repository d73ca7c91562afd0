use std::env::VarError;

use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
///
/// Everything is optional; with no variables set the server speaks MCP on stdio
/// and falls back to the full guideline set for unknown categories.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// TCP address to accept MCP sessions on (e.g. "127.0.0.1:7410"). `None` serves stdio.
    pub tcp_listen_addr: Option<String>,
    /// Reject unknown guideline categories instead of returning every category.
    pub strict_category: bool,
}

impl Config {
    /// Optional:
    /// - `MCP_TCP_LISTEN_ADDR`: serve over TCP instead of stdio
    /// - `PAGE_GUIDELINES_STRICT_CATEGORY`: boolean flag (default: off)
    pub fn from_env() -> Result<Self, AppError> {
        let strict_category = match optional_var(
            "PAGE_GUIDELINES_STRICT_CATEGORY",
            std::env::var("PAGE_GUIDELINES_STRICT_CATEGORY"),
        )? {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                AppError::Config(format!(
                    "PAGE_GUIDELINES_STRICT_CATEGORY must be a boolean, got '{raw}'"
                ))
            })?,
            None => false,
        };

        let tcp_listen_addr =
            optional_var("MCP_TCP_LISTEN_ADDR", std::env::var("MCP_TCP_LISTEN_ADDR"))?
                .filter(|addr| !addr.trim().is_empty());

        Ok(Self {
            tcp_listen_addr,
            strict_category,
        })
    }
}

/// An unset variable is `None`; a set but non-UTF-8 one is a config error.
fn optional_var(name: &str, value: Result<String, VarError>) -> Result<Option<String>, AppError> {
    match value {
        Ok(raw) => Ok(Some(raw)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => Err(AppError::Config(format!(
            "{name} must be valid UTF-8"
        ))),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
