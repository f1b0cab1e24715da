// ABOUTME: MCP server exposing the SvgForge prompt-to-SVG generator
// ABOUTME: Tools for generation, example prompts, guides, best practices and snippets

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;
use tracing::info;

pub mod content;
pub mod error;

// The crate `Result` alias stays in `error`: re-exporting it here would
// shadow the prelude `Result` the tool_handler expansion spells out.
pub use error::SvgForgeServerError;

const INSTRUCTIONS: &str = "SvgForge generates complete SVG documents from natural-language \
prompts. Call generate_svg_from_prompt with a description of the graphic you want; the prompt \
may include dimensions ('400 x 300'), a style ('cyberpunk', 'minimalist', 'art deco', ...), \
colors qualified by role ('blue background', 'red accent') and a subject ('gear', 'star', \
'city', ...). Use svg_prompt_examples for prompt ideas, generate_svg_guide for a walkthrough, \
and svg_best_practices / svg_code_snippets for working with the emitted markup.";

#[derive(Deserialize, JsonSchema)]
pub struct GenerateSvgRequest {
    /// Natural-language description of the desired graphic
    pub prompt: String,
}

#[derive(Deserialize, JsonSchema)]
pub struct PromptExamplesRequest {
    /// Example category to fetch, or "all" for every category
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "all".to_string()
}

#[derive(Deserialize, JsonSchema)]
pub struct EmptyRequest {
    /// Unused; present so the tool accepts an empty argument object
    #[serde(default)]
    pub _unused: Option<String>,
}

#[derive(Clone)]
pub struct SvgForgeMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for SvgForgeMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl SvgForgeMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Generate a complete SVG document from a natural-language prompt. The prompt may specify dimensions ('400 x 300'), a visual style ('cyberpunk', 'minimalist', ...), role-qualified colors ('blue background') and a subject ('gear with 12 teeth', '8 pointed star', 'city skyline'). Returns the SVG markup and the detected style. Required: prompt."
    )]
    async fn generate_svg_from_prompt(
        &self,
        params: Parameters<GenerateSvgRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request = params.0;
        info!(prompt_len = request.prompt.len(), "generating SVG from prompt");

        let generation = svgforge_core::generate(&request.prompt);
        let payload = json!({
            "success": true,
            "svg_code": generation.svg,
            "detected_style": generation.detected_style,
        });

        let text = serde_json::to_string(&payload)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        description = "Fetch example prompts for SVG generation. Optional: category (one of shapes, icons, illustrations, charts, ui_elements, logos, abstract_patterns, data_visualizations; default 'all')."
    )]
    async fn svg_prompt_examples(
        &self,
        params: Parameters<PromptExamplesRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let request = params.0;

        // An unknown category is reported in-band so the caller can
        // recover by listing the valid names.
        let payload = match content::example_prompts(&request.category) {
            Ok(value) => value,
            Err(err) => json!({
                "success": false,
                "error": err.to_string(),
                "examples": null,
            }),
        };

        let text = serde_json::to_string(&payload)
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        description = "Get a step-by-step guide to writing effective SVG generation prompts, including styling and color guidance."
    )]
    async fn generate_svg_guide(
        &self,
        _params: Parameters<EmptyRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let text = serde_json::to_string(&content::guide())
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        description = "Get best practices for working with SVG documents: viewBox and namespace usage, precision, styling, reuse and accessibility."
    )]
    async fn svg_best_practices(
        &self,
        _params: Parameters<EmptyRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let text = serde_json::to_string(&content::best_practices())
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    #[tool(
        description = "Get reusable SVG building-block snippets: basic shapes, text, gradients, paths and animation."
    )]
    async fn svg_code_snippets(
        &self,
        _params: Parameters<EmptyRequest>,
    ) -> std::result::Result<CallToolResult, McpError> {
        let text = serde_json::to_string(&content::snippets())
            .map_err(|e| McpError::internal_error(e.to_string(), None))?;
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }
}

#[tool_handler]
impl ServerHandler for SvgForgeMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests;
