// ABOUTME: Static content payloads served by the MCP tools
// ABOUTME: Guide text, best practices, example prompts and reusable SVG snippets

use serde_json::{json, Value};

use crate::error::{Result, SvgForgeServerError};

/// Example prompts by category. Fixed at compile time; `example_prompts`
/// only ever reads this table.
pub const EXAMPLE_PROMPTS: &[(&str, &[&str])] = &[
    (
        "shapes",
        &[
            "Create an SVG of a red circle with blue border, 3px width, on a transparent background",
            "Generate SVG code for a rounded rectangle with gradient from blue to purple",
            "Create an SVG with three overlapping transparent circles in red, green, and blue",
            "Generate an SVG star shape with 5 points and yellow fill",
            "SVG of an ellipse with a dashed stroke and orange fill",
            "Create a polygon with 7 sides, green fill and black stroke",
        ],
    ),
    (
        "icons",
        &[
            "Create an SVG icon of a simple house with a chimney",
            "Generate an SVG hamburger menu icon with three lines",
            "Create an SVG search icon with a magnifying glass",
            "Generate an SVG settings gear icon with 8 teeth",
            "SVG user profile icon, minimalist style",
            "Generate a download arrow icon, flat design",
            "Create a shopping cart icon with a small badge",
            "SVG notification bell icon with a subtle animation hint",
            "Generate a simple folder icon in blue tones",
            "Create an SVG checkmark icon, bold and green",
        ],
    ),
    (
        "illustrations",
        &[
            "Create a simple SVG landscape with mountains, a sun, and trees",
            "Generate an SVG cityscape with buildings of different heights",
            "Create an SVG of a sailing boat on waves",
            "Generate a simple SVG face with basic features",
            "SVG illustration of a coffee cup with steam, retro style",
            "Create a whimsical illustration of a cat playing with yarn",
            "Generate an SVG for a stack of books with one open",
        ],
    ),
    (
        "charts",
        &[
            "Create a simple SVG bar chart with 4 bars in different colors",
            "Generate an SVG pie chart divided into 3 sections",
            "Create an SVG line graph showing an upward trend",
            "Generate a simple SVG scatter plot with 5 points",
        ],
    ),
    (
        "ui_elements",
        &[
            "Generate an SVG for a sleek, modern button with a slight gradient",
            "Create an SVG toggle switch in the 'on' state, cyberpunk style",
            "SVG for a progress bar at 75% completion, minimalist",
            "Generate a set of 3 radio buttons, one selected, simple style",
            "Create an SVG slider control with a circular handle",
        ],
    ),
    (
        "logos",
        &[
            "Generate a minimalist SVG logo for a tech startup named 'Nova'",
            "Create an abstract geometric logo with a sense of motion, using blue and green",
            "SVG logo for a coffee shop, vintage style, with a coffee bean element",
            "Generate a text-based logo for 'EcoWorld' with a leaf integrated into the text",
            "Create a corporate-style shield logo with the letter 'S' in the center",
        ],
    ),
    (
        "abstract_patterns",
        &[
            "Generate an SVG seamless pattern of intertwined circles, monochrome",
            "Create an abstract SVG background with flowing organic shapes, nature palette",
            "SVG of a repeating geometric pattern with triangles and hexagons, art deco style",
            "Generate a dynamic abstract pattern with glitch art effects",
            "Create a simple wave pattern SVG, suitable for a website footer",
        ],
    ),
    (
        "data_visualizations",
        &[
            "Generate an SVG for a donut chart with 4 segments and percentage labels",
            "Create a horizontal bar graph comparing three products, corporate style",
            "SVG for a simple flowchart with 3 steps and connecting arrows",
            "Generate a radial progress indicator for a fitness app",
            "Create an SVG representation of a network graph with 5 nodes and connections",
        ],
    ),
];

fn available_categories() -> String {
    EXAMPLE_PROMPTS
        .iter()
        .map(|(name, _)| *name)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Look up example prompts. `"all"` returns the full mapping; an
/// unknown category is a tagged failure, not a protocol error.
pub fn example_prompts(category: &str) -> Result<Value> {
    if category == "all" {
        let mapping: Value = EXAMPLE_PROMPTS
            .iter()
            .map(|(name, prompts)| ((*name).to_string(), json!(prompts)))
            .collect::<serde_json::Map<_, _>>()
            .into();
        return Ok(json!({
            "success": true,
            "category": "all",
            "examples": mapping,
        }));
    }

    EXAMPLE_PROMPTS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(name, prompts)| {
            json!({
                "success": true,
                "category": name,
                "examples": prompts,
            })
        })
        .ok_or_else(|| SvgForgeServerError::CategoryNotFound {
            category: category.to_string(),
            available: available_categories(),
        })
}

/// Instructional payload for the guide tool.
pub fn guide() -> Value {
    json!({
        "title": "Guide to Generating SVG with SvgForge",
        "description": "How to turn a descriptive prompt into a scalable, crisp SVG graphic. \
            The generator reads dimensions, style cues, colors and subject matter directly \
            from your prompt text.",
        "steps": [
            "1. Describe the subject you want (e.g. 'a gear', 'a city skyline', 'an eye').",
            "2. Name a visual style ('cyberpunk', 'minimalist', 'art deco', ...) to pick the palette and treatment.",
            "3. Optionally give dimensions as 'W x H' (50-2000 per side); 300x300 is the default.",
            "4. Optionally name colors, qualified by a role ('blue background', 'red accent').",
            "5. Review the generated markup and refine the prompt as needed.",
        ],
        "styling_your_svgs": {
            "title": "Styling Your SVGs",
            "points": [
                {
                    "point": "Prioritize Your Vision",
                    "details": "Clearly describe your desired style in your prompt (e.g., 'minimalist logo', 'vintage illustration', 'flat design icon')."
                },
                {
                    "point": "Modern by Default",
                    "details": "Without explicit style cues the generator falls back to a clean, general-purpose palette."
                },
                {
                    "point": "Specify Colors and Dimensions",
                    "details": "Be explicit about colors (e.g., 'a blue circle with a red border') and sizes (e.g., 'an icon 24x24 pixels')."
                }
            ]
        },
        "example_prompts_info": "Use the `svg_prompt_examples` tool for prompt ideas per category.",
        "best_practices_info": "Consult the `svg_best_practices` tool for optimization and accessibility guidelines.",
    })
}

/// Best-practice payload for prompting and for using the emitted SVG.
pub fn best_practices() -> Value {
    json!({
        "success": true,
        "title": "SVG Best Practices for Generation and Web Use",
        "introduction": "Guidelines for prompting the generator and for using the emitted documents on the web.",
        "best_practices": [
            {
                "title": "Use appropriate viewBox",
                "description": "Always include a `viewBox` attribute to define the coordinate system and aspect ratio. The generator emits one on every document.",
                "example": "<svg viewBox=\"0 0 100 100\" xmlns=\"http://www.w3.org/2000/svg\">...</svg>"
            },
            {
                "title": "Specify xmlns namespace",
                "description": "Always include `xmlns=\"http://www.w3.org/2000/svg\"` on the root element to declare the document as SVG.",
                "example": "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 100 100\">...</svg>"
            },
            {
                "title": "Minimize decimal places",
                "description": "Limit coordinate precision to 1-2 decimal places unless higher precision is necessary; procedural paths here use two.",
                "example": "Use cx=\"10.5\" instead of cx=\"10.4999998\""
            },
            {
                "title": "Use CSS for styling on the web",
                "description": "For web use, prefer styling SVGs with CSS classes over per-element presentation attributes to ease theming and animation.",
                "example": "<style>.icon-primary { fill: blue; }</style><circle class=\"icon-primary\" cx=\"50\" cy=\"50\" r=\"40\" />"
            },
            {
                "title": "Reuse elements with symbol and use",
                "description": "For repeating graphics, define them once with `<symbol>` inside `<defs>` and instance them with `<use>`.",
                "example": "<defs><symbol id=\"myIcon\">...</symbol></defs> <use href=\"#myIcon\" x=\"10\" y=\"10\" />"
            },
            {
                "title": "Ensure accessibility",
                "description": "Provide a `<title>` as the first child of the root element so assistive technology can describe the graphic; the generator embeds the prompt there.",
                "example": "<svg role=\"img\"><title>Company Logo</title>...</svg>"
            },
            {
                "title": "Escape text content",
                "description": "Text interpolated into XML must escape `<`, `>`, `&` and `\"` to keep the document well-formed.",
                "example": "<title>Generated from: a &lt;bold&gt; idea</title>"
            },
            {
                "title": "Choose SVG for the right task",
                "description": "Excellent for logos, icons, illustrations and charts. For photographic detail, raster formats are more suitable.",
                "example": "Use SVG for a company logo; use JPEG/WebP for a product photo."
            }
        ],
        "optimization_tools_info": {
            "title": "SVG Optimization Tools",
            "tools": [
                {
                    "name": "SVGO (SVG Optimizer)",
                    "description": "A Node.js-based tool for optimizing SVG files by removing redundant information and optimizing paths.",
                    "url": "https://github.com/svg/svgo"
                },
                {
                    "name": "SVGOMG",
                    "description": "A web GUI for SVGO, for visually inspecting optimization results.",
                    "url": "https://jakearchibald.github.io/svgomg/"
                }
            ]
        }
    })
}

/// Reusable SVG building-block snippets.
pub fn snippets() -> Value {
    json!({
        "snippets": [
            {
                "name": "Basic Shape: Circle",
                "description": "A simple circle with styling",
                "code": "<circle cx=\"50\" cy=\"50\" r=\"40\" stroke=\"blue\" stroke-width=\"3\" fill=\"red\" />"
            },
            {
                "name": "Basic Shape: Rectangle",
                "description": "A rectangle with rounded corners",
                "code": "<rect x=\"10\" y=\"10\" width=\"80\" height=\"60\" rx=\"5\" fill=\"green\" />"
            },
            {
                "name": "Text Element",
                "description": "Basic text with styling",
                "code": "<text x=\"10\" y=\"20\" font-family=\"Arial\" font-size=\"16\" fill=\"black\">Hello SVG</text>"
            },
            {
                "name": "Linear Gradient",
                "description": "Definition and use of a linear gradient",
                "code": "<defs>\n  <linearGradient id=\"grad\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"0%\">\n    <stop offset=\"0%\" style=\"stop-color:rgb(255,0,0);stop-opacity:1\" />\n    <stop offset=\"100%\" style=\"stop-color:rgb(0,0,255);stop-opacity:1\" />\n  </linearGradient>\n</defs>\n<rect x=\"10\" y=\"10\" width=\"80\" height=\"80\" fill=\"url(#grad)\" />"
            },
            {
                "name": "Simple Path",
                "description": "A path element creating a custom shape",
                "code": "<path d=\"M10,30 A20,20 0,0,1 50,30 A20,20 0,0,1 90,30 Q90,60 50,90 Q10,60 10,30 z\" fill=\"blue\"/>"
            },
            {
                "name": "Basic Animation",
                "description": "A simple animation using animate",
                "code": "<circle cx=\"50\" cy=\"50\" r=\"20\" fill=\"red\">\n  <animate attributeName=\"r\" values=\"20;40;20\" dur=\"2s\" repeatCount=\"indefinite\" />\n</circle>"
            }
        ]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_returns_every_category() {
        let value = example_prompts("all").unwrap();
        assert_eq!(value["success"], true);
        let examples = value["examples"].as_object().unwrap();
        assert_eq!(examples.len(), EXAMPLE_PROMPTS.len());
        assert!(examples.contains_key("data_visualizations"));
    }

    #[test]
    fn icons_category_is_non_empty() {
        let value = example_prompts("icons").unwrap();
        assert_eq!(value["category"], "icons");
        assert!(!value["examples"].as_array().unwrap().is_empty());
    }

    #[test]
    fn unknown_category_is_a_tagged_failure() {
        let err = example_prompts("bogus").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("not found"));
        assert!(message.contains("bogus"));
        assert!(message.contains("icons"));
    }

    #[test]
    fn static_payloads_are_well_formed() {
        assert!(guide()["steps"].as_array().unwrap().len() >= 5);
        assert_eq!(best_practices()["success"], true);
        assert!(!snippets()["snippets"].as_array().unwrap().is_empty());
    }
}
