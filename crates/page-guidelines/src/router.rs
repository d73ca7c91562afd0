//! Name-based dispatch of tool invocations.
//!
//! The MCP surface routes through rmcp's tool router; this module serves callers that
//! hold a raw tool name and argument bag, such as the `call` subcommand.
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::AppError;
use crate::model::{NamingKind, SnippetKind, TemplateKind};
use crate::{guidelines, naming, templates, validate};
use mcp_common::error::CommonError;
use mcp_common::mcp_api::{
    GeneratePageTemplateParams, GetNamingSuggestionsParams, GetPageGuidelinesParams,
    ValidatePageStructureParams,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetPageGuidelines,
    GeneratePageTemplate,
    ValidatePageStructure,
    GetNamingSuggestions,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Self::GetPageGuidelines,
        Self::GeneratePageTemplate,
        Self::ValidatePageStructure,
        Self::GetNamingSuggestions,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::GetPageGuidelines => "get_page_guidelines",
            Self::GeneratePageTemplate => "generate_page_template",
            Self::ValidatePageStructure => "validate_page_structure",
            Self::GetNamingSuggestions => "get_naming_suggestions",
        }
    }
}

impl FromStr for Operation {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| AppError::UnknownOperation(s.to_string()))
    }
}

pub fn get_page_guidelines(
    params: GetPageGuidelinesParams,
    config: &Config,
) -> Result<String, AppError> {
    let category = guidelines::resolve_category(params.category.as_deref(), config.strict_category)?;
    debug!(?category, "rendering guidelines");
    guidelines::render(category)
}

pub fn generate_page_template(params: GeneratePageTemplateParams) -> Result<String, AppError> {
    let kind: TemplateKind = params.kind.parse()?;
    debug!(?kind, name = %params.name, "generating template");
    templates::generate(kind, &params.name)
}

pub fn validate_page_structure(params: ValidatePageStructureParams) -> Result<String, AppError> {
    let kind: SnippetKind = params.kind.parse()?;
    let report = validate::validate(&params.code, kind);
    debug!(
        ?kind,
        issues = report.issues.len(),
        hard_failures = report.hard_failures(),
        "validated snippet"
    );
    Ok(report.to_string())
}

pub fn get_naming_suggestions(params: GetNamingSuggestionsParams) -> Result<String, AppError> {
    let kind: NamingKind = params.kind.parse()?;
    let suggestions = naming::suggest(&params.description, kind);
    debug!(%kind, count = suggestions.names.len(), "suggested names");
    Ok(suggestions.to_string())
}

/// Runs the operation called `name` with a JSON argument bag. `Value::Null` stands for
/// "no arguments".
pub fn dispatch(name: &str, args: Value, config: &Config) -> Result<String, AppError> {
    match name.parse::<Operation>()? {
        Operation::GetPageGuidelines => get_page_guidelines(parse_args(args)?, config),
        Operation::GeneratePageTemplate => generate_page_template(parse_args(args)?),
        Operation::ValidatePageStructure => validate_page_structure(parse_args(args)?),
        Operation::GetNamingSuggestions => get_naming_suggestions(parse_args(args)?),
    }
}

fn parse_args<T: DeserializeOwned>(args: Value) -> Result<T, AppError> {
    let args = match args {
        Value::Null => Value::Object(Default::default()),
        other => other,
    };
    serde_json::from_value(args)
        .map_err(|e| AppError::Common(CommonError::InvalidArguments(e)))
}
