use rmcp::{transport::stdio, ServiceExt};
use std::env;
use svgforge_mcp_server::SvgForgeMcpServer;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
        .init();

    info!("Starting SvgForge MCP Server (STDIO)...");

    let server = SvgForgeMcpServer::new();

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("Error starting server: {}", e);
    })?;

    info!("SvgForge MCP Server started on STDIO transport");
    info!("Available tools:");
    info!("  - generate_svg_from_prompt: Generate an SVG document from a natural-language prompt");
    info!("  - svg_prompt_examples: Example prompts by category");
    info!("  - generate_svg_guide: Step-by-step prompting guide");
    info!("  - svg_best_practices: SVG authoring best practices");
    info!("  - svg_code_snippets: Reusable SVG building-block snippets");

    let result = service.waiting().await;

    match result {
        Ok(_) => info!("Server shut down gracefully"),
        Err(e) => error!("Server error: {}", e),
    }

    Ok(())
}
