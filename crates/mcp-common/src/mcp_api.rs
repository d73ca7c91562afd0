use schemars::JsonSchema;
use serde::Deserialize;

// `type` fields stay plain strings so each server can decide how to treat unknown values;
// the accepted values are published through the schema's `enum`.

#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetPageGuidelinesParams {
    /// Guideline category: "header", "api", "component", "hook" or "all" (default: "all").
    #[serde(rename = "type", default)]
    #[schemars(extend("enum" = ["header", "api", "component", "hook", "all"]))]
    pub category: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GeneratePageTemplateParams {
    /// Template kind: "page", "api" or "hook".
    #[serde(rename = "type")]
    #[schemars(extend("enum" = ["page", "api", "hook"]))]
    pub kind: String,
    /// Name substituted into the template placeholders, e.g. "task" or "UserProfile".
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ValidatePageStructureParams {
    /// Source code of the snippet to check.
    pub code: String,
    /// Snippet kind: "page", "api", "hook" or "component".
    #[serde(rename = "type")]
    #[schemars(extend("enum" = ["page", "api", "hook", "component"]))]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetNamingSuggestionsParams {
    /// Free-text description of the feature, e.g. "user profile".
    pub description: String,
    /// Naming kind: "api", "component", "hook" or "file".
    #[serde(rename = "type")]
    #[schemars(extend("enum" = ["api", "component", "hook", "file"]))]
    pub kind: String,
}

/// Name and description of a tool as listed by a server's tool router.
#[derive(Debug, Clone)]
pub struct ToolSummary {
    pub name: String,
    pub description: String,
}
