//! Template synthesizer: renders a complete SVG document from an
//! [`Interpretation`] by ordered concatenation of template fragments.
//! Total for any well-formed interpretation; the output is always a
//! balanced document.

use crate::templates;
use crate::types::{Interpretation, ObjectKind, Style};

/// Render the document. Fragment order is fixed: defs, background,
/// optional pattern overlay, the primary content block, supplementary
/// overlays, caption bar.
pub fn synthesize(interp: &Interpretation) -> String {
    let dims = interp.dimensions;
    let palette = &interp.palette;
    let style = interp.style;
    let (cx, cy) = dims.center();

    let mut parts: Vec<String> = Vec::with_capacity(8);
    parts.push(templates::defs(palette));
    parts.push(templates::background(dims, palette));

    if matches!(style, Style::Abstract | Style::Cyberpunk | Style::Retro) {
        parts.push(templates::pattern_overlay(dims));
    }

    parts.push(match interp.object {
        Some(ObjectKind::Eye) => templates::eye(palette, cx, cy, interp.flags.scan),
        Some(ObjectKind::Circuit) => templates::circuit(palette, cx, cy, style),
        Some(ObjectKind::City) => templates::city(palette, dims, style),
        Some(ObjectKind::Geometric) => templates::geometric(palette, cx, cy, style, interp.flags),
        Some(ObjectKind::Gear) => templates::gear(palette, dims, cx, cy, interp.gear_teeth),
        Some(ObjectKind::Arrow) => templates::arrow(palette, dims, cx, cy),
        Some(ObjectKind::Cloud) => templates::cloud(palette, dims, cx, cy, style),
        Some(ObjectKind::Heart) => templates::heart(palette, dims, cx, cy, style),
        Some(ObjectKind::Star) => templates::star(
            palette,
            dims,
            cx,
            cy,
            interp.star_points,
            style,
            interp.flags.sparkle,
        ),
        None => templates::abstract_fallback(palette, dims, cx, cy, style),
    });

    if interp.flags.glitch {
        parts.push(templates::glitch_overlay(dims));
    }
    if interp.flags.glow {
        parts.push(templates::glow_border(palette, dims));
    }

    parts.push(templates::caption_bar(palette, dims, &interp.caption, style));

    format!(
        r#"<svg viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">
    <title>Generated from: {title}</title>
    {body}
</svg>"#,
        w = dims.width,
        h = dims.height,
        title = templates::escape_xml(&interp.title),
        body = parts.join(" "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer;

    fn render(prompt: &str) -> String {
        synthesize(&analyzer::analyze(prompt))
    }

    #[test]
    fn document_declares_namespace_viewbox_and_title() {
        let svg = render("a simple heart");
        assert!(svg.starts_with(r#"<svg viewBox="0 0 300 300" xmlns="http://www.w3.org/2000/svg">"#));
        assert!(svg.contains("<title>Generated from: a simple heart</title>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn prompt_dimensions_flow_into_the_viewbox() {
        let svg = render("a heart, 400 x 200");
        assert!(svg.contains(r#"viewBox="0 0 400 200""#));
    }

    #[test]
    fn pattern_overlay_appears_only_for_textured_styles() {
        let retro = render("a retro vintage heart");
        assert!(retro.contains("url(#bgPattern)"));
        let plain = render("a corporate business chart for the company");
        assert!(!plain.contains(r#"fill="url(#bgPattern)""#));
    }

    #[test]
    fn gear_prompt_renders_requested_tooth_count() {
        let svg = render("generate a gear with 12 teeth");
        assert!(svg.contains("fill-rule=\"evenodd\""));
        assert_eq!(svg.matches("L ").count(), 12 * 4 - 1);
    }

    #[test]
    fn eight_pointed_star_has_sixteen_vertices() {
        let svg = render("8 pointed star");
        let polygon = svg
            .split("points=\"")
            .nth(1)
            .and_then(|rest| rest.split('"').next())
            .expect("polygon vertex list");
        assert_eq!(polygon.split_whitespace().count(), 16);
    }

    #[test]
    fn glitch_and_glow_overlays_follow_prompt_cues() {
        let svg = render("a glitch distorted neon heart");
        assert!(svg.contains("url(#glitchEffect)"));
        assert!(svg.matches("url(#glow)").count() >= 1);

        let calm = render("a calm heart");
        assert!(!calm.contains(r#"filter="url(#glitchEffect)""#));
    }

    #[test]
    fn markup_characters_in_prompt_never_leak_unescaped() {
        let svg = render(r#"a heart with <script> and "quotes""#);
        assert!(!svg.contains("<script>"));
        assert!(svg.contains("&lt;script&gt;"));
        assert!(svg.contains("&quot;quotes&quot;"));
    }

    #[test]
    fn no_object_falls_back_to_styled_abstract_design() {
        let svg = render("something dystopian and neon");
        assert!(svg.contains("Cyberpunk Abstract Design"));

        let generic = render("");
        assert!(generic.contains("Generic Abstract Design"));
    }

    #[test]
    fn caption_includes_bracketed_style_name() {
        let svg = render("a fluid organic abstract pattern");
        assert!(svg.contains("[abstract]") || svg.contains("[nature]"));
        assert!(svg.contains("font-family=\"monospace\""));
    }
}
