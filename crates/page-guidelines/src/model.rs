use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::AppError;

/// Guideline category accepted by `get_page_guidelines`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuidelineCategory {
    Header,
    Api,
    Component,
    Hook,
    All,
}

impl FromStr for GuidelineCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "header" => Ok(Self::Header),
            "api" => Ok(Self::Api),
            "component" => Ok(Self::Component),
            "hook" => Ok(Self::Hook),
            "all" => Ok(Self::All),
            _ => Err(AppError::UnknownCategory(s.to_string())),
        }
    }
}

/// Template kinds the template engine can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Page,
    Api,
    Hook,
}

impl FromStr for TemplateKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "page" => Ok(Self::Page),
            "api" => Ok(Self::Api),
            "hook" => Ok(Self::Hook),
            _ => Err(AppError::UnknownTemplateKind(s.to_string())),
        }
    }
}

/// Snippet kinds the validation checker has rule sets for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnippetKind {
    Page,
    Api,
    Hook,
    Component,
}

impl FromStr for SnippetKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "page" => Ok(Self::Page),
            "api" => Ok(Self::Api),
            "hook" => Ok(Self::Hook),
            "component" => Ok(Self::Component),
            _ => Err(AppError::UnsupportedKind {
                field: "snippet type",
                value: s.to_string(),
            }),
        }
    }
}

impl From<TemplateKind> for SnippetKind {
    fn from(kind: TemplateKind) -> Self {
        match kind {
            TemplateKind::Page => Self::Page,
            TemplateKind::Api => Self::Api,
            TemplateKind::Hook => Self::Hook,
        }
    }
}

/// Kinds of identifiers the naming suggester produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingKind {
    Api,
    Component,
    Hook,
    File,
}

impl NamingKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Api => "api",
            Self::Component => "component",
            Self::Hook => "hook",
            Self::File => "file",
        }
    }
}

impl fmt::Display for NamingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "api" => Ok(Self::Api),
            "component" => Ok(Self::Component),
            "hook" => Ok(Self::Hook),
            "file" => Ok(Self::File),
            _ => Err(AppError::UnsupportedKind {
                field: "naming type",
                value: s.to_string(),
            }),
        }
    }
}

// --- Guideline records ---

/// The complete guideline table, one field per category.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageGuidelines {
    pub header_config: HeaderConfig,
    pub api_guidelines: ApiGuidelines,
    pub component_guidelines: ComponentGuidelines,
    pub hook_guidelines: HookGuidelines,
}

/// Page header configuration every new page must use.
#[derive(Debug, Serialize)]
pub struct HeaderConfig {
    pub description: &'static str,
    /// JSX snippet for the `header` prop of `PageContainer`.
    pub code: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGuidelines {
    pub file_organization: FileOrganization,
    pub naming_conventions: ApiNamingConventions,
    /// Signature of the shared request helper.
    pub request_wrapper: &'static str,
    pub list_api_response: ResponseShape,
    pub normal_api_response: ResponseShape,
}

#[derive(Debug, Serialize)]
pub struct FileOrganization {
    pub description: &'static str,
    pub examples: &'static [&'static str],
}

/// Function name pattern per API action, with `Xxx` standing for the model name.
#[derive(Debug, Serialize)]
pub struct ApiNamingConventions {
    pub list: &'static str,
    pub add: &'static str,
    pub update: &'static str,
    pub delete: &'static str,
    pub detail: &'static str,
    pub toggle: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ResponseShape {
    pub structure: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentGuidelines {
    pub file_naming: ComponentFileNaming,
    pub structure: ComponentStructure,
    pub implementation: &'static [&'static str],
    pub styling: &'static [&'static str],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentFileNaming {
    pub component_file: &'static str,
    pub component_name: &'static str,
    pub directory: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStructure {
    pub shared: &'static str,
    pub page_specific: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookGuidelines {
    pub naming: &'static str,
    pub location: &'static str,
    pub data_fetching: &'static str,
    pub state_management: &'static str,
    pub event_tracking: &'static str,
}
