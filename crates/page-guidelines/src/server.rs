/// MCP server implementation for the Jingle frontend page guidelines.
///
/// Exposes four tools:
/// - `get_page_guidelines`: Fetch the style guide, whole or by category
/// - `generate_page_template`: Render a page, API or hook template for a name
/// - `validate_page_structure`: Check a snippet against the rule set for its kind
/// - `get_naming_suggestions`: Suggest identifiers from a free-text description
use rmcp::{
    ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};

use crate::config::Config;
use crate::router;
use mcp_common::mcp_api::{
    GeneratePageTemplateParams, GetNamingSuggestionsParams, GetPageGuidelinesParams,
    ToolSummary, ValidatePageStructureParams,
};

/// Name announced during the MCP handshake; client configs key on it.
pub const SERVER_NAME: &str = "jingle-page-guidelines";

#[derive(Clone)]
pub struct PageGuidelinesServer {
    config: Config,
    tool_router: ToolRouter<PageGuidelinesServer>,
}

impl PageGuidelinesServer {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            tool_router: Self::tool_router(),
        }
    }

    /// Name and description of every tool this server publishes.
    pub fn tool_summaries() -> Vec<ToolSummary> {
        Self::tool_router()
            .list_all()
            .into_iter()
            .map(|t| ToolSummary {
                name: t.name.to_string(),
                description: t.description.as_deref().unwrap_or_default().to_string(),
            })
            .collect()
    }
}

#[tool_router]
impl PageGuidelinesServer {
    #[tool(description = "Get the page development guidelines: header config, API, component and hook conventions. Pass type to select one category or 'all'.")]
    async fn get_page_guidelines(
        &self,
        Parameters(params): Parameters<GetPageGuidelinesParams>,
    ) -> Result<String, String> {
        router::get_page_guidelines(params, &self.config).map_err(|e| e.to_string())
    }

    #[tool(description = "Generate page, API or hook template code that follows the guidelines. The name replaces the template placeholders.")]
    async fn generate_page_template(
        &self,
        Parameters(params): Parameters<GeneratePageTemplateParams>,
    ) -> Result<String, String> {
        router::generate_page_template(params).map_err(|e| e.to_string())
    }

    #[tool(description = "Check whether page, API, hook or component code follows the guidelines.")]
    async fn validate_page_structure(
        &self,
        Parameters(params): Parameters<ValidatePageStructureParams>,
    ) -> Result<String, String> {
        router::validate_page_structure(params).map_err(|e| e.to_string())
    }

    #[tool(description = "Suggest API, component, hook or file names from a feature description.")]
    async fn get_naming_suggestions(
        &self,
        Parameters(params): Parameters<GetNamingSuggestionsParams>,
    ) -> Result<String, String> {
        router::get_naming_suggestions(params).map_err(|e| e.to_string())
    }
}

#[tool_handler]
impl ServerHandler for PageGuidelinesServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Jingle frontend page guidelines MCP server. Use get_page_guidelines to read the \
                 conventions, generate_page_template to scaffold a page, API module or hook, \
                 validate_page_structure to check code against the conventions, and \
                 get_naming_suggestions to name new APIs, components, hooks and files."
                    .to_string(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use rmcp::ServerHandler;

    use super::{PageGuidelinesServer, SERVER_NAME};
    use crate::config::Config;
    use crate::router::Operation;

    #[test]
    fn tools_publish_input_schemas() {
        let tools = PageGuidelinesServer::tool_router().list_all();
        let expected = [
            ("get_page_guidelines", &["type"][..]),
            ("generate_page_template", &["type", "name"][..]),
            ("validate_page_structure", &["code", "type"][..]),
            ("get_naming_suggestions", &["description", "type"][..]),
        ];
        for (name, fields) in expected {
            let tool = tools
                .iter()
                .find(|t| t.name == name)
                .unwrap_or_else(|| panic!("missing tool: {name}"));
            let properties = tool
                .input_schema
                .get("properties")
                .and_then(|p| p.as_object())
                .unwrap_or_else(|| panic!("tool {name} should publish input properties"));
            for field in fields {
                assert!(properties.contains_key(*field), "tool {name} missing {field}");
            }
        }
    }

    #[test]
    fn type_arguments_list_their_accepted_values() {
        let tools = PageGuidelinesServer::tool_router().list_all();
        let expected = [
            ("get_page_guidelines", &["header", "api", "component", "hook", "all"][..]),
            ("generate_page_template", &["page", "api", "hook"][..]),
            ("validate_page_structure", &["page", "api", "hook", "component"][..]),
            ("get_naming_suggestions", &["api", "component", "hook", "file"][..]),
        ];
        for (name, values) in expected {
            let tool = tools
                .iter()
                .find(|t| t.name == name)
                .unwrap_or_else(|| panic!("missing tool: {name}"));
            let schema = serde_json::Value::Object((*tool.input_schema).clone());
            let published: Vec<&str> = schema["properties"]["type"]["enum"]
                .as_array()
                .unwrap_or_else(|| panic!("tool {name} should publish an enum for type"))
                .iter()
                .filter_map(|v| v.as_str())
                .collect();
            assert_eq!(published, values, "tool {name}");
        }
    }

    #[test]
    fn announces_the_jingle_server_name() {
        let info = PageGuidelinesServer::new(Config::default()).get_info();
        assert_eq!(info.server_info.name, SERVER_NAME);
        assert_eq!(SERVER_NAME, "jingle-page-guidelines");
        assert!(info.capabilities.tools.is_some());
    }

    #[test]
    fn router_and_server_agree_on_tool_names() {
        let summaries = PageGuidelinesServer::tool_summaries();
        assert_eq!(summaries.len(), Operation::ALL.len());
        for op in Operation::ALL {
            let summary = summaries
                .iter()
                .find(|s| s.name == op.name())
                .unwrap_or_else(|| panic!("missing tool: {}", op.name()));
            assert!(!summary.description.is_empty());
        }
    }
}
