use super::*;
use rmcp::handler::server::wrapper::Parameters;

fn server() -> SvgForgeMcpServer {
    SvgForgeMcpServer::new()
}

// Read the tool result through its wire shape rather than the struct
// fields, then parse the embedded JSON payload.
fn payload_of(result: &CallToolResult) -> serde_json::Value {
    let wire = serde_json::to_value(result).expect("serializable result");
    let text = wire["content"][0]["text"].as_str().expect("text content");
    serde_json::from_str(text).expect("JSON payload")
}

#[tokio::test]
async fn test_server_creation() {
    let server = server();
    let info = server.get_info();
    assert!(info.instructions.is_some());
    assert!(info.capabilities.tools.is_some());
}

#[tokio::test]
async fn test_generate_svg_from_prompt() {
    let server = server();
    let result = server
        .generate_svg_from_prompt(Parameters(GenerateSvgRequest {
            prompt: "a cyberpunk gear with 10 teeth, 400 x 300".to_string(),
        }))
        .await;
    assert!(result.is_ok());

    let result = result.unwrap();
    let payload = payload_of(&result);
    assert_eq!(payload["success"], true);
    assert_eq!(payload["detected_style"], "cyberpunk");
    let svg = payload["svg_code"].as_str().unwrap();
    assert!(svg.contains(r#"viewBox="0 0 400 300""#));
    assert!(svg.ends_with("</svg>"));
}

#[tokio::test]
async fn test_prompt_examples_single_category() {
    let server = server();
    let result = server
        .svg_prompt_examples(Parameters(PromptExamplesRequest {
            category: "icons".to_string(),
        }))
        .await
        .unwrap();

    let payload = payload_of(&result);
    assert_eq!(payload["success"], true);
    assert_eq!(payload["category"], "icons");
    assert!(!payload["examples"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_prompt_examples_all_categories() {
    let server = server();
    let result = server
        .svg_prompt_examples(Parameters(PromptExamplesRequest {
            category: "all".to_string(),
        }))
        .await
        .unwrap();

    let payload = payload_of(&result);
    assert_eq!(payload["success"], true);
    assert_eq!(
        payload["examples"].as_object().unwrap().len(),
        content::EXAMPLE_PROMPTS.len()
    );
}

#[tokio::test]
async fn test_prompt_examples_unknown_category_is_in_band() {
    let server = server();
    let result = server
        .svg_prompt_examples(Parameters(PromptExamplesRequest {
            category: "frescoes".to_string(),
        }))
        .await;
    // Not a protocol error: the failure travels inside the payload.
    assert!(result.is_ok());

    let result = result.unwrap();
    let payload = payload_of(&result);
    assert_eq!(payload["success"], false);
    assert!(payload["error"].as_str().unwrap().contains("not found"));
    assert!(payload["examples"].is_null());
}

#[tokio::test]
async fn test_static_content_tools() {
    let server = server();

    let guide = server
        .generate_svg_guide(Parameters(EmptyRequest { _unused: None }))
        .await
        .unwrap();
    let payload = payload_of(&guide);
    assert!(payload["steps"].as_array().unwrap().len() >= 5);

    let practices = server
        .svg_best_practices(Parameters(EmptyRequest { _unused: None }))
        .await
        .unwrap();
    let payload = payload_of(&practices);
    assert_eq!(payload["success"], true);
    assert!(!payload["best_practices"].as_array().unwrap().is_empty());

    let snippets = server
        .svg_code_snippets(Parameters(EmptyRequest { _unused: None }))
        .await
        .unwrap();
    let payload = payload_of(&snippets);
    assert!(!payload["snippets"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_router_exposes_every_tool() {
    let server = server();
    let tools = server.tool_router.list_all();
    let names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
    for expected in [
        "generate_svg_from_prompt",
        "svg_prompt_examples",
        "generate_svg_guide",
        "svg_best_practices",
        "svg_code_snippets",
    ] {
        assert!(names.contains(&expected), "missing tool {expected}");
    }
}

#[tokio::test]
async fn test_generation_payload_round_trips() {
    let generation = svgforge_core::generate("a minimalist heart");
    let encoded = serde_json::to_string(&generation).unwrap();
    let decoded: serde_json::Value = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded["detected_style"], "minimalist");
    assert!(decoded["svg"].as_str().unwrap().contains("<svg "));
}
