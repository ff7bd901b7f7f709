//! Prompt templates module.
//!
//! This module contains the PromptTemplate struct and the small template
//! language used to render prompt messages.

use rmcp::model::PromptArgument;
use serde_json::Value;
use std::collections::HashMap;

use super::error::PromptError;
use crate::core::response::{PromptMessage, PromptResponse, Role};

/// One message of a prompt, before rendering.
#[derive(Debug, Clone)]
pub struct MessageTemplate {
    pub role: Role,
    pub template: String,
}

/// A prompt template that can be instantiated with arguments.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    /// The unique name of the prompt.
    pub name: String,

    /// A description of what the prompt does.
    pub description: Option<String>,

    /// The arguments that this prompt accepts.
    pub arguments: Vec<PromptArgument>,

    /// Messages in the order the server returns them.
    pub messages: Vec<MessageTemplate>,
}

impl PromptTemplate {
    /// Render every message with the given arguments.
    pub fn render(&self, arguments: &HashMap<String, String>) -> Result<PromptResponse, PromptError> {
        let messages = self
            .messages
            .iter()
            .map(|m| Ok(PromptMessage::new(m.role, render(&m.template, arguments)?)))
            .collect::<Result<Vec<_>, PromptError>>()?;

        Ok(PromptResponse {
            description: self.description.clone(),
            messages,
        })
    }
}

/// Flatten JSON arguments into template variables.
///
/// Strings are used as-is, booleans and numbers are stringified, nulls are
/// dropped. Nested values are rejected.
pub fn template_arguments(arguments: &Value) -> Result<HashMap<String, String>, PromptError> {
    let Some(object) = arguments.as_object() else {
        if arguments.is_null() {
            return Ok(HashMap::new());
        }
        return Err(PromptError::invalid_argument(
            "arguments",
            "expected a JSON object",
        ));
    };

    let mut vars = HashMap::new();
    for (key, value) in object {
        let rendered = match value {
            Value::Null => continue,
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::Array(_) | Value::Object(_) => {
                return Err(PromptError::invalid_argument(key, "expected a scalar value"));
            }
        };
        vars.insert(key.clone(), rendered);
    }
    Ok(vars)
}

/// Render a template string.
///
/// - `{{variable}}` is replaced with the value of `variable`
/// - `{{#if variable}}content{{/if}}` keeps content only if variable is set
/// - `{{#if variable}}content{{else}}alternative{{/if}}` with else support
///
/// A variable is set when present, non-empty and not `"false"`. The result
/// is trimmed.
pub fn render(template: &str, arguments: &HashMap<String, String>) -> Result<String, PromptError> {
    let mut result = process_conditionals(template, arguments)?;

    for (key, value) in arguments {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    Ok(strip_unset_variables(&result).trim().to_string())
}

fn is_set(arguments: &HashMap<String, String>, name: &str) -> bool {
    arguments
        .get(name)
        .map(|v| !v.is_empty() && v != "false")
        .unwrap_or(false)
}

fn process_conditionals(
    template: &str,
    arguments: &HashMap<String, String>,
) -> Result<String, PromptError> {
    const IF_OPEN: &str = "{{#if ";
    const ELSE: &str = "{{else}}";
    const ENDIF: &str = "{{/if}}";

    let mut result = template.to_string();

    while let Some(if_start) = result.find(IF_OPEN) {
        let var_end = if_start
            + result[if_start..]
                .find("}}")
                .ok_or_else(|| PromptError::template("Unclosed {{#if}} tag"))?;
        let var_name = result[if_start + IF_OPEN.len()..var_end].trim().to_string();

        let endif_pos = var_end
            + result[var_end..]
                .find(ENDIF)
                .ok_or_else(|| PromptError::template("Missing {{/if}} tag"))?;

        let block = &result[var_end + 2..endif_pos];
        let (when_set, when_unset) = match block.find(ELSE) {
            Some(else_pos) => (&block[..else_pos], &block[else_pos + ELSE.len()..]),
            None => (block, ""),
        };

        let replacement = if is_set(arguments, &var_name) {
            when_set
        } else {
            when_unset
        };

        result = format!(
            "{}{}{}",
            &result[..if_start],
            replacement,
            &result[endif_pos + ENDIF.len()..]
        );
    }

    Ok(result)
}

/// Drop `{{name}}` tags left after substitution. Block tags and an
/// unterminated `{{` are kept as written.
fn strip_unset_variables(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let tag = &rest[open..];

        let Some(close) = tag.find("}}") else {
            rest = tag;
            break;
        };
        let name = &tag[2..close];
        if name.starts_with('#') || name.starts_with('/') {
            out.push_str(&tag[..close + 2]);
        }
        rest = &tag[close + 2..];
    }

    out.push_str(rest);
    out
}
