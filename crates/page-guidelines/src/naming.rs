use std::fmt;

use mcp_common::text::{pascal_join, upper_first};

use crate::model::NamingKind;

/// Token used when a description has no words.
pub const DEFAULT_TOKEN: &str = "item";

#[derive(Debug, Clone)]
pub struct NamingSuggestions {
    pub description: String,
    pub kind: NamingKind,
    pub names: Vec<String>,
}

impl fmt::Display for NamingSuggestions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Naming suggestions for \"{}\" ({}):",
            self.description, self.kind
        )?;
        for name in &self.names {
            write!(f, "\n• {name}")?;
        }
        Ok(())
    }
}

fn tokens(description: &str) -> Vec<String> {
    let words: Vec<String> = description
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();
    if words.is_empty() {
        vec![DEFAULT_TOKEN.to_string()]
    } else {
        words
    }
}

pub fn suggest(description: &str, kind: NamingKind) -> NamingSuggestions {
    let words = tokens(description);

    let names = match kind {
        NamingKind::Api => {
            let main = &words[0];
            let cap = upper_first(main);
            vec![
                format!("{main}List"),
                format!("add{cap}"),
                format!("update{cap}"),
                format!("del{cap}"),
                format!("get{cap}ById"),
            ]
        }
        NamingKind::Component => vec![pascal_join(&words)],
        NamingKind::Hook => vec![format!("use{}", pascal_join(&words))],
        NamingKind::File => vec![words.join("-")],
    };

    NamingSuggestions {
        description: description.to_string(),
        kind,
        names,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_suggestions_use_first_word() {
        let s = suggest("user profile", NamingKind::Api);
        assert_eq!(
            s.names,
            ["userList", "addUser", "updateUser", "delUser", "getUserById"]
        );
    }

    #[test]
    fn component_and_hook_concatenate_all_words() {
        assert_eq!(suggest("user profile", NamingKind::Component).names, ["UserProfile"]);
        assert_eq!(suggest("user profile", NamingKind::Hook).names, ["useUserProfile"]);
        assert_eq!(suggest("  Order   DETAIL ", NamingKind::Hook).names, ["useOrderDetail"]);
    }

    #[test]
    fn file_names_are_hyphenated_lowercase() {
        assert_eq!(suggest("Language Switcher", NamingKind::File).names, ["language-switcher"]);
    }

    #[test]
    fn empty_description_falls_back_to_default_token() {
        assert_eq!(suggest("", NamingKind::File).names, ["item"]);
        assert_eq!(suggest("   ", NamingKind::Component).names, ["Item"]);
        assert_eq!(suggest("", NamingKind::Api).names[0], "itemList");
    }

    #[test]
    fn renders_bulleted_list() {
        let rendered = suggest("user profile", NamingKind::Hook).to_string();
        assert_eq!(
            rendered,
            "Naming suggestions for \"user profile\" (hook):\n• useUserProfile"
        );
    }
}
