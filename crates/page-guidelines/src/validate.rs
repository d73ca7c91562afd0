use std::fmt;

use crate::model::SnippetKind;

pub const SUCCESS_MESSAGE: &str = "✅ Code structure conforms to the guidelines!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A required pattern is missing.
    Hard,
    /// A recommended pattern is missing.
    Soft,
}

impl Severity {
    fn marker(self) -> &'static str {
        match self {
            Self::Hard => "❌",
            Self::Soft => "⚠️",
        }
    }
}

/// A rule passes when the snippet contains at least one of `any_of`.
#[derive(Debug)]
pub struct Rule {
    pub any_of: &'static [&'static str],
    pub severity: Severity,
    pub message: &'static str,
}

const PAGE_RULES: &[Rule] = &[
    Rule {
        any_of: &["title: null"],
        severity: Severity::Hard,
        message: "missing `title: null` in the header config",
    },
    Rule {
        any_of: &[r#"children: <div className="h-0 w-0" />"#],
        severity: Severity::Hard,
        message: "missing the empty `children` element in the header config",
    },
    Rule {
        any_of: &["childrenContentStyle"],
        severity: Severity::Hard,
        message: "missing `childrenContentStyle` in the header config",
    },
];

const API_RULES: &[Rule] = &[
    Rule {
        any_of: &["List", "add", "update", "del"],
        severity: Severity::Hard,
        message: "API function names do not follow the conventions (expected List, add, update, del, ...)",
    },
    Rule {
        any_of: &["request("],
        severity: Severity::Hard,
        message: "the shared `request` helper is not used",
    },
];

const HOOK_RULES: &[Rule] = &[
    Rule {
        any_of: &["use"],
        severity: Severity::Hard,
        message: "hook names must start with `use`",
    },
    Rule {
        any_of: &["useQuery", "useMutation"],
        severity: Severity::Soft,
        message: "consider React Query (useQuery/useMutation) for data management",
    },
];

const COMPONENT_RULES: &[Rule] = &[
    Rule {
        any_of: &["Props"],
        severity: Severity::Hard,
        message: "component props must be declared with a TypeScript type (e.g. `interface XxxProps`)",
    },
    Rule {
        any_of: &["FC", "function "],
        severity: Severity::Soft,
        message: "prefer function components with React Hooks",
    },
    Rule {
        any_of: &["className="],
        severity: Severity::Soft,
        message: "prefer Tailwind CSS classes for styling",
    },
];

pub fn rules_for(kind: SnippetKind) -> &'static [Rule] {
    match kind {
        SnippetKind::Page => PAGE_RULES,
        SnippetKind::Api => API_RULES,
        SnippetKind::Hook => HOOK_RULES,
        SnippetKind::Component => COMPONENT_RULES,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub severity: Severity,
    pub message: &'static str,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.severity.marker(), self.message)
    }
}

/// Issues found in a snippet, in rule-definition order.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn hard_failures(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Hard)
            .count()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_clean() {
            return f.write_str(SUCCESS_MESSAGE);
        }
        f.write_str("Found the following issues:")?;
        for issue in &self.issues {
            write!(f, "\n{issue}")?;
        }
        Ok(())
    }
}

/// Runs the rule set for `kind` against the raw snippet text.
pub fn validate(code: &str, kind: SnippetKind) -> ValidationReport {
    let issues = rules_for(kind)
        .iter()
        .filter(|rule| !rule.any_of.iter().any(|needle| code.contains(needle)))
        .map(|rule| Issue {
            severity: rule.severity,
            message: rule.message,
        })
        .collect();
    ValidationReport { issues }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_page_reports_three_hard_failures_in_order() {
        let report = validate("", SnippetKind::Page);
        assert_eq!(report.issues.len(), 3);
        assert_eq!(report.hard_failures(), 3);
        let messages: Vec<_> = report.issues.iter().map(|i| i.message).collect();
        assert_eq!(
            messages,
            PAGE_RULES.iter().map(|r| r.message).collect::<Vec<_>>()
        );
    }

    #[test]
    fn api_naming_accepts_any_keyword() {
        let report = validate("export const delTask = () => request('/x')", SnippetKind::Api);
        assert!(report.is_clean(), "{report}");

        let report = validate("export const fetchTask = () => fetch('/x')", SnippetKind::Api);
        assert_eq!(report.hard_failures(), 2);
    }

    #[test]
    fn hook_without_react_query_is_a_soft_warning() {
        let report = validate("export const useTasks = () => useState([])", SnippetKind::Hook);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].severity, Severity::Soft);
        assert_eq!(report.hard_failures(), 0);
    }

    #[test]
    fn component_rules_apply() {
        let code = r#"interface BadgeProps { label: string }
export const Badge: FC<BadgeProps> = ({ label }) => <span className="px-2">{label}</span>"#;
        assert!(validate(code, SnippetKind::Component).is_clean());

        let report = validate("class Badge extends Component {}", SnippetKind::Component);
        assert_eq!(report.issues.len(), 3);
        assert_eq!(report.hard_failures(), 1);
    }

    #[test]
    fn report_renders_success_or_issue_list() {
        let clean = ValidationReport::default();
        assert_eq!(clean.to_string(), SUCCESS_MESSAGE);

        let rendered = validate("const x = 1", SnippetKind::Hook).to_string();
        let mut lines = rendered.lines();
        assert_eq!(lines.next(), Some("Found the following issues:"));
        assert_eq!(lines.next(), Some("❌ hook names must start with `use`"));
        assert!(lines.next().is_some_and(|l| l.starts_with("⚠️ ")));
        assert_eq!(lines.next(), None);
    }
}
