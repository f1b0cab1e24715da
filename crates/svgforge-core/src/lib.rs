//! SvgForge core: turns a free-form natural-language prompt into a
//! styled SVG document.
//!
//! Two stages run in sequence for every request: the [`analyzer`]
//! produces an [`Interpretation`] from the prompt text and the static
//! catalogs, and the [`synthesizer`] renders it into a complete SVG
//! string. Both stages are pure functions over immutable tables, so
//! [`generate`] is safe to call from any number of threads with no
//! coordination and is deterministic for a given prompt.

pub mod analyzer;
pub mod catalog;
pub mod geometry;
pub mod synthesizer;
pub mod templates;
pub mod types;

pub use types::*;

use serde::Serialize;

/// Outcome of one generation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Generation {
    /// The complete SVG document.
    pub svg: String,
    /// The dominant style the prompt classified into.
    pub detected_style: Style,
}

/// Generate an SVG document from a prompt. Total: every input string,
/// including the empty one, yields a well-formed document.
pub fn generate(prompt: &str) -> Generation {
    let interpretation = analyzer::analyze(prompt);
    let svg = synthesizer::synthesize(&interpretation);
    Generation {
        svg,
        detected_style: interpretation.style,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic() {
        let prompt = "a neon cyberpunk city, 500 x 400, with glow";
        let first = generate(prompt);
        let second = generate(prompt);
        assert_eq!(first, second);
    }

    #[test]
    fn detected_style_is_always_a_known_name() {
        for prompt in ["", "a gear", "qqqq zzzz", "flat design icon", "magical dragon"] {
            let generation = generate(prompt);
            assert!(Style::CATALOG.contains(&generation.detected_style));
        }
    }

    #[test]
    fn empty_prompt_still_renders_a_document() {
        let generation = generate("");
        assert_eq!(generation.detected_style, Style::General);
        assert!(generation.svg.contains("xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(generation.svg.contains("viewBox=\"0 0 300 300\""));
    }

    #[test]
    fn adversarially_long_prompts_are_handled() {
        let prompt = "star ".repeat(10_000);
        let generation = generate(&prompt);
        assert!(generation.svg.ends_with("</svg>"));
    }
}
