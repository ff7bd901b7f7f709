//! Request envelopes sent from an LLM client to the Audius MCP server.
//!
//! Every request is a `{ "method": ..., "params": ... }` object. The three
//! free functions below are the only way requests are built; they wrap their
//! inputs into the envelope and do nothing else.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A request addressed to the MCP server.
///
/// Serialized with the method as the tag and the payload under `params`:
///
/// ```
/// use audius_mcp_examples::core::request::read_resource;
///
/// let request = read_resource("audius://track/12345");
/// assert_eq!(
///     serde_json::to_string(&request).unwrap(),
///     r#"{"method":"read_resource","params":{"uri":"audius://track/12345"}}"#
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "method", content = "params", rename_all = "snake_case")]
pub enum McpRequest {
    /// Invoke a named tool.
    CallTool(NamedParams),

    /// Fetch a named prompt.
    GetPrompt(NamedParams),

    /// Read a URI-addressed resource.
    ReadResource(ResourceParams),
}

/// Parameters shared by `call_tool` and `get_prompt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedParams {
    /// Tool or prompt name, e.g. `search-tracks`.
    pub name: String,

    /// Arguments forwarded verbatim.
    pub arguments: Value,
}

/// Parameters for `read_resource`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceParams {
    /// Resource URI, e.g. `audius://user/789`.
    pub uri: String,
}

/// Build a `call_tool` request.
pub fn call_tool(name: impl Into<String>, arguments: Value) -> McpRequest {
    McpRequest::CallTool(NamedParams {
        name: name.into(),
        arguments,
    })
}

/// Build a `get_prompt` request.
pub fn get_prompt(name: impl Into<String>, arguments: Value) -> McpRequest {
    McpRequest::GetPrompt(NamedParams {
        name: name.into(),
        arguments,
    })
}

/// Build a `read_resource` request.
pub fn read_resource(uri: impl Into<String>) -> McpRequest {
    McpRequest::ReadResource(ResourceParams { uri: uri.into() })
}

impl McpRequest {
    /// The wire method name.
    pub fn method(&self) -> &'static str {
        match self {
            Self::CallTool(_) => "call_tool",
            Self::GetPrompt(_) => "get_prompt",
            Self::ReadResource(_) => "read_resource",
        }
    }

    /// The tool name, prompt name or resource URI this request targets.
    pub fn target(&self) -> &str {
        match self {
            Self::CallTool(params) | Self::GetPrompt(params) => &params.name,
            Self::ReadResource(params) => &params.uri,
        }
    }

    /// One-line description for logs and headings.
    pub fn summary(&self) -> String {
        format!("{} {}", self.method(), self.target())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_call_tool_envelope() {
        let request = call_tool(
            "search-tracks",
            json!({ "query": "electronic dance music", "limit": 5 }),
        );

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "method": "call_tool",
                "params": {
                    "name": "search-tracks",
                    "arguments": { "query": "electronic dance music", "limit": 5 }
                }
            })
        );
    }

    #[test]
    fn test_call_tool_keeps_key_order() {
        let request = call_tool(
            "search-tracks",
            json!({ "query": "electronic dance music", "limit": 5 }),
        );
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"method":"call_tool","params":{"name":"search-tracks","arguments":{"query":"electronic dance music","limit":5}}}"#
        );
    }

    #[test]
    fn test_get_prompt_envelope() {
        let arguments = json!({
            "userId": "789",
            "includeConnections": true,
            "includePopularContent": true
        });
        let request = get_prompt("artist-profile", arguments.clone());

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "method": "get_prompt",
                "params": { "name": "artist-profile", "arguments": arguments }
            })
        );
    }

    #[test]
    fn test_read_resource_envelope() {
        let request = read_resource("audius://track/12345");
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"method":"read_resource","params":{"uri":"audius://track/12345"}}"#
        );
    }

    #[test]
    fn test_arguments_pass_through_untouched() {
        // Nested arrays, nulls and non-object values all survive as given.
        let arguments = json!({
            "trackIds": ["789", "101112", "131415"],
            "description": null,
            "nested": { "deep": [1, 2.5, false] }
        });
        let request = call_tool("add-tracks-to-playlist", arguments.clone());
        match &request {
            McpRequest::CallTool(params) => assert_eq!(params.arguments, arguments),
            other => panic!("unexpected request: {:?}", other),
        }

        let scalar = call_tool("anything", json!(42));
        assert_eq!(
            serde_json::to_value(&scalar).unwrap()["params"]["arguments"],
            json!(42)
        );
    }

    #[test]
    fn test_builders_are_deterministic() {
        let a = call_tool("get-user", json!({ "userId": "789" }));
        let b = call_tool("get-user", json!({ "userId": "789" }));
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_method_and_summary() {
        assert_eq!(call_tool("get-user", json!({})).method(), "call_tool");
        assert_eq!(get_prompt("artist-profile", json!({})).method(), "get_prompt");
        let read = read_resource("audius://playlist/456");
        assert_eq!(read.method(), "read_resource");
        assert_eq!(read.target(), "audius://playlist/456");
        assert_eq!(read.summary(), "read_resource audius://playlist/456");
    }

    #[test]
    fn test_parse_request_from_json() {
        let request: McpRequest = serde_json::from_str(
            r#"{"method":"get_prompt","params":{"name":"artist-profile","arguments":{"userId":"789"}}}"#,
        )
        .unwrap();
        assert_eq!(request, get_prompt("artist-profile", json!({ "userId": "789" })));
    }
}
