use mcp_common::text::{lower_first, upper_first};

use crate::error::AppError;
use crate::model::TemplateKind;

/// Placeholder standing for the PascalCase page name.
pub const PAGE_NAME: &str = "[PageName]";
/// Placeholder standing for the camelCase page name.
pub const PAGE_NAME_CAMEL: &str = "[pageName]";
/// Placeholder standing for the PascalCase model name.
pub const MODEL_NAME: &str = "[ModelName]";
/// Placeholder standing for the camelCase model name.
pub const MODEL_NAME_CAMEL: &str = "[modelName]";

const PLACEHOLDERS: [&str; 4] = [PAGE_NAME, PAGE_NAME_CAMEL, MODEL_NAME, MODEL_NAME_CAMEL];

const PAGE_TEMPLATE: &str = r#"import { FC } from 'react'
import { PageContainer } from '@ant-design/pro-layout'
import { useTranslation } from 'react-i18next'

const [PageName]: FC = () => {
  const { t } = useTranslation()

  return (
    <PageContainer
      header={{
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
      }}
    >
      {/* [pageName] page content */}
    </PageContainer>
  )
}

export default [PageName]"#;

const API_TEMPLATE: &str = r#"import { request } from '@/utils/request'

// Request parameter types
export interface [ModelName]ListParams {
  name?: string
  status?: number
  pageNumber: number
  pageSize: number
}

export interface [ModelName] {
  id: string
  name: string
  status: number
  createTime: string
}

// List
export const [modelName]List = (params: [ModelName]ListParams) => {
  return request('/api/[modelName]', 'POST', params, {
    headers: {
      'Content-Type': 'application/json',
    },
  })
}

// Create
export const add[ModelName] = (data: Partial<[ModelName]>) => {
  return request('/api/[modelName]', 'POST', data)
}

// Update
export const update[ModelName] = (id: string, data: Partial<[ModelName]>) => {
  return request(`/api/[modelName]/${id}`, 'PUT', data)
}

// Delete
export const del[ModelName] = (id: string) => {
  return request(`/api/[modelName]/${id}`, 'DELETE')
}

// Detail
export const get[ModelName]ById = (id: string) => {
  return request(`/api/[modelName]/${id}`, 'GET')
}"#;

const HOOK_TEMPLATE: &str = r#"import { useQuery, useMutation, useQueryClient } from '@tanstack/react-query'
import { [modelName]List, add[ModelName], update[ModelName], del[ModelName] } from '@/api/[modelName]'
import type { [ModelName]ListParams, [ModelName] } from '@/api/[modelName]'

// List query
export const use[ModelName]List = (params?: [ModelName]ListParams) => {
  return useQuery({
    queryKey: ['[modelName]List', params],
    queryFn: () => [modelName]List(params || { pageNumber: 1, pageSize: 10 }),
  })
}

// Create
export const useAdd[ModelName] = () => {
  const queryClient = useQueryClient()

  return useMutation({
    mutationFn: add[ModelName],
    onSuccess: () => {
      queryClient.invalidateQueries({ queryKey: ['[modelName]List'] })
    },
  })
}

// Update
export const useUpdate[ModelName] = () => {
  const queryClient = useQueryClient()

  return useMutation({
    mutationFn: ({ id, data }: { id: string; data: Partial<[ModelName]> }) =>
      update[ModelName](id, data),
    onSuccess: () => {
      queryClient.invalidateQueries({ queryKey: ['[modelName]List'] })
    },
  })
}

// Delete
export const useDel[ModelName] = () => {
  const queryClient = useQueryClient()

  return useMutation({
    mutationFn: del[ModelName],
    onSuccess: () => {
      queryClient.invalidateQueries({ queryKey: ['[modelName]List'] })
    },
  })
}"#;

impl TemplateKind {
    fn template(self) -> &'static str {
        match self {
            Self::Page => PAGE_TEMPLATE,
            Self::Api => API_TEMPLATE,
            Self::Hook => HOOK_TEMPLATE,
        }
    }
}

/// Renders the template for `kind` with every placeholder replaced by a casing of `name`.
pub fn generate(kind: TemplateKind, name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::EmptyArgument("name"));
    }
    if name.contains(['[', ']']) {
        return Err(AppError::InvalidName(name.to_string()));
    }

    let pascal = upper_first(name);
    let camel = lower_first(name);
    let output = substitute(
        kind.template(),
        &[
            (PAGE_NAME, pascal.as_str()),
            (PAGE_NAME_CAMEL, camel.as_str()),
            (MODEL_NAME, pascal.as_str()),
            (MODEL_NAME_CAMEL, camel.as_str()),
        ],
    );

    if let Some(token) = PLACEHOLDERS.iter().find(|t| output.contains(**t)) {
        return Err(AppError::UnresolvedPlaceholder(token.to_string()));
    }
    Ok(output)
}

/// Replaces every occurrence of each token in one left-to-right pass. Replacement text is
/// never re-scanned, so a value can't expand into another token.
fn substitute(template: &str, replacements: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(idx) = rest.find('[') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];
        match replacements.iter().find(|(token, _)| rest.starts_with(token)) {
            Some((token, value)) => {
                out.push_str(value);
                rest = &rest[token.len()..];
            }
            None => {
                out.push('[');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;

    const KINDS: [TemplateKind; 3] = [TemplateKind::Page, TemplateKind::Api, TemplateKind::Hook];

    #[test]
    fn every_kind_resolves_all_placeholders_and_carries_both_casings() {
        for kind in KINDS {
            for name in ["task", "Task", "userProfile", "x", "Ärger"] {
                let output = generate(kind, name).unwrap();
                for token in PLACEHOLDERS {
                    assert!(!output.contains(token), "{kind:?}/{name}: {token} survived");
                }
                assert!(output.contains(&upper_first(name)), "{kind:?}/{name}: pascal");
                assert!(output.contains(&lower_first(name)), "{kind:?}/{name}: camel");
            }
        }
    }

    #[test]
    fn replacement_is_global() {
        let output = generate(TemplateKind::Api, "order").unwrap();
        assert!(output.contains("export interface OrderListParams"));
        assert!(output.contains("export const orderList = (params: OrderListParams)"));
        assert!(output.contains("export const getOrderById"));
        assert_eq!(
            output.matches("/api/order").count(),
            API_TEMPLATE.matches("/api/[modelName]").count()
        );
    }

    #[test]
    fn only_the_first_character_changes_case() {
        let output = generate(TemplateKind::Hook, "userProfile").unwrap();
        assert!(output.contains("export const useUserProfileList"));
        assert!(output.contains("queryKey: ['userProfileList', params]"));

        let output = generate(TemplateKind::Page, "order detail").unwrap();
        assert!(output.contains("const Order detail: FC"));
    }

    #[test]
    fn generated_templates_pass_their_own_validation() {
        for kind in KINDS {
            let output = generate(kind, "task").unwrap();
            let report = validate(&output, kind.into());
            assert!(report.is_clean(), "{kind:?}: {report}");
        }
    }

    #[test]
    fn unknown_kind_is_an_error() {
        let err = "bogus".parse::<TemplateKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown template kind: bogus (expected page, api or hook)");
    }

    #[test]
    fn rejects_empty_and_bracketed_names() {
        assert!(matches!(
            generate(TemplateKind::Page, "  "),
            Err(AppError::EmptyArgument("name"))
        ));
        assert!(matches!(
            generate(TemplateKind::Api, "[ModelName]"),
            Err(AppError::InvalidName(_))
        ));
    }

    #[test]
    fn substitute_leaves_unknown_brackets_alone() {
        let out = substitute("a[b] [X] [X][", &[("[X]", "y")]);
        assert_eq!(out, "a[b] y y[");
    }
}
