use serde::Serialize;
use tracing::warn;

use crate::error::AppError;
use crate::model::{
    ApiGuidelines, ApiNamingConventions, ComponentFileNaming, ComponentGuidelines,
    ComponentStructure, FileOrganization, GuidelineCategory, HeaderConfig, HookGuidelines,
    PageGuidelines, ResponseShape,
};
use mcp_common::error::CommonError;

pub const TITLE: &str = "# Jingle Frontend Page Guidelines";

pub static GUIDELINES: PageGuidelines = PageGuidelines {
    header_config: HeaderConfig {
        description: "New pages must use an empty header configuration",
        code: r#"header={{
  title: null,
  children: <div className="h-0 w-0" />,
  childrenContentStyle: {
    padding: 0,
    height: 0,
    overflow: 'hidden',
    display: 'none',
    width: 0,
  },
  style: {
    height: 0,
    padding: 0,
  },
}}"#,
    },
    api_guidelines: ApiGuidelines {
        file_organization: FileOrganization {
            description: "APIs are grouped by feature module and live under src/api/",
            examples: &["task.ts", "user.ts", "order.ts"],
        },
        naming_conventions: ApiNamingConventions {
            list: "xxxList",
            add: "addXxx",
            update: "updateXxx",
            delete: "delXxx",
            detail: "getXxxById or getXxxDetail",
            toggle: "toggleXxxStatus",
        },
        request_wrapper: "request(url: string, method: Method, data?: any, opts?: any)",
        list_api_response: ResponseShape {
            structure: r#"{
  "code": 0,
  "msg": "string",
  "data": {
    "records": []
  },
  "time": "2019-08-24T14:15:22.123Z",
  "isSuccess": true
}"#,
        },
        normal_api_response: ResponseShape {
            structure: r#"{
  "code": 0,
  "msg": "string",
  "data": {},
  "time": "2019-08-24T14:15:22.123Z",
  "isSuccess": true
}"#,
        },
    },
    component_guidelines: ComponentGuidelines {
        file_naming: ComponentFileNaming {
            component_file: "kebab-case (e.g. language-switcher.tsx)",
            component_name: "PascalCase (e.g. LanguageSwitcher)",
            directory: "kebab-case (e.g. signal-display/)",
        },
        structure: ComponentStructure {
            shared: "src/components/",
            page_specific: "inside the owning page's directory",
        },
        implementation: &[
            "Prefer function components and React Hooks",
            "Define component props with TypeScript types",
            "Split large components into small reusable ones",
        ],
        styling: &[
            "Prefer Tailwind CSS for styling",
            "Component-specific styles may use CSS Modules",
            "Follow the project's existing style conventions and UI design",
        ],
    },
    hook_guidelines: HookGuidelines {
        naming: "Start with `use` and follow camelCase",
        location: "src/hooks/",
        data_fetching: "Prefer @tanstack/react-query",
        state_management: "Prefer Zustand",
        event_tracking: "Use useSensor for event tracking",
    },
};

/// The subset of [`GUIDELINES`] selected by a category, keyed like the full table.
#[derive(Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuidelineView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_config: Option<&'static HeaderConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_guidelines: Option<&'static ApiGuidelines>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_guidelines: Option<&'static ComponentGuidelines>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hook_guidelines: Option<&'static HookGuidelines>,
}

impl GuidelineView {
    pub fn select(category: GuidelineCategory) -> Self {
        let g = &GUIDELINES;
        match category {
            GuidelineCategory::Header => Self {
                header_config: Some(&g.header_config),
                ..Self::default()
            },
            GuidelineCategory::Api => Self {
                api_guidelines: Some(&g.api_guidelines),
                ..Self::default()
            },
            GuidelineCategory::Component => Self {
                component_guidelines: Some(&g.component_guidelines),
                ..Self::default()
            },
            GuidelineCategory::Hook => Self {
                hook_guidelines: Some(&g.hook_guidelines),
                ..Self::default()
            },
            GuidelineCategory::All => Self {
                header_config: Some(&g.header_config),
                api_guidelines: Some(&g.api_guidelines),
                component_guidelines: Some(&g.component_guidelines),
                hook_guidelines: Some(&g.hook_guidelines),
            },
        }
    }
}

/// Resolves the requested category. A missing category means all of them; an unknown
/// one falls back to all of them unless `strict` is set.
pub fn resolve_category(raw: Option<&str>, strict: bool) -> Result<GuidelineCategory, AppError> {
    let Some(raw) = raw else {
        return Ok(GuidelineCategory::All);
    };

    match raw.parse::<GuidelineCategory>() {
        Ok(category) => Ok(category),
        Err(e) if strict => Err(e),
        Err(_) => {
            warn!(category = %raw, "unknown guideline category, returning all guidelines");
            Ok(GuidelineCategory::All)
        }
    }
}

/// Renders the selected guidelines as a titled, pretty-printed JSON document.
pub fn render(category: GuidelineCategory) -> Result<String, AppError> {
    let body = serde_json::to_string_pretty(&GuidelineView::select(category))
        .map_err(CommonError::Serialization)?;
    Ok(format!("{TITLE}\n\n{body}"))
}
