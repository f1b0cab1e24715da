//! Prompt analyzer: maps a free-form prompt string to an
//! [`Interpretation`]. Pure function of the input and the static
//! catalogs; never fails, malformed numeric fragments silently keep
//! their defaults.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::catalog::{
    self, BoostRule, BOOST_RULES, COLOR_OVERRIDES, OBJECT_RULES, STYLE_KEYWORDS, TIE_BREAK_RULES,
};
use crate::types::{
    Dimensions, Interpretation, ObjectKind, Palette, PaletteRole, PromptFlags, Style, StyleScores,
};

static DIMENSION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*(?:x|by)\s*(\d+)").expect("valid dimension pattern"));
static TEETH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*teeth").expect("valid teeth pattern"));
static POINTS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*(?:points|pointed star)").expect("valid points pattern"));

/// Characters of context scanned after a color name when pairing it
/// with a palette role keyword. A known approximation: long phrasing
/// between the color and the role word falls back to the primary slot.
const ROLE_WINDOW: usize = 20;

const DEFAULT_GEAR_TEETH: u32 = 8;
const DEFAULT_STAR_POINTS: u32 = 5;

/// Analyze one prompt. Total: every string, including the empty one,
/// yields a usable interpretation.
pub fn analyze(prompt: &str) -> Interpretation {
    let lower = prompt.to_lowercase();

    let dimensions = extract_dimensions(&lower);
    let scores = score_styles(&lower);
    let style = select_style(&scores, &lower);
    let palette = resolve_palette(style, &lower);
    let object = detect_object(&lower);

    debug!(
        style = %style,
        object = object.map(|o| o.as_str()).unwrap_or("none"),
        width = dimensions.width,
        height = dimensions.height,
        "prompt analyzed"
    );

    Interpretation {
        dimensions,
        style,
        palette,
        object,
        caption: build_caption(prompt, dimensions.width),
        title: prompt.to_string(),
        flags: extract_flags(&lower),
        gear_teeth: extract_gear_teeth(&lower),
        star_points: extract_star_points(&lower),
    }
}

/// First `W x H` / `W by H` pattern with both sides in bounds wins;
/// anything else keeps the 300x300 default.
pub fn extract_dimensions(lower: &str) -> Dimensions {
    if let Some(caps) = DIMENSION_RE.captures(lower) {
        let width = caps[1].parse::<u32>().ok();
        let height = caps[2].parse::<u32>().ok();
        if let (Some(w), Some(h)) = (width, height) {
            if Dimensions::in_bounds(w) && Dimensions::in_bounds(h) {
                return Dimensions::new(w, h);
            }
        }
    }
    Dimensions::default()
}

/// Base keyword pass plus contextual boosts, per style.
pub fn score_styles(lower: &str) -> StyleScores {
    let mut scores = StyleScores::new();

    for (style, keywords) in STYLE_KEYWORDS {
        let hits = keywords.iter().filter(|kw| lower.contains(*kw)).count() as u32;
        scores.add(*style, hits);
    }

    for (style, rules) in BOOST_RULES {
        for rule in *rules {
            scores.add(*style, rule.evaluate(lower));
        }
    }

    scores
}

impl BoostRule {
    fn evaluate(&self, lower: &str) -> u32 {
        let any = |terms: &[&str]| terms.iter().any(|t| lower.contains(t));
        let matched = match self {
            BoostRule::AnyOf { terms, .. } => any(terms),
            BoostRule::AllOf { terms, .. } => terms.iter().all(|t| lower.contains(t)),
            BoostRule::Pair { first, second, .. } => any(first) && any(second),
            BoostRule::Unless { terms, veto, .. } => any(terms) && !any(veto),
        };
        if matched {
            match self {
                BoostRule::AnyOf { points, .. }
                | BoostRule::AllOf { points, .. }
                | BoostRule::Pair { points, .. }
                | BoostRule::Unless { points, .. } => *points,
            }
        } else {
            0
        }
    }
}

/// Pick the dominant style: highest score wins, `General` when every
/// score is zero. Ties are resolved by the ordered tie-break rules;
/// when none match, the first tied style in catalog order stands.
pub fn select_style(scores: &StyleScores, lower: &str) -> Style {
    if scores.max() == 0 {
        return Style::General;
    }

    let leaders = scores.leaders();
    if leaders.len() > 1 {
        for (style, keywords) in TIE_BREAK_RULES {
            if leaders.contains(style) && keywords.iter().any(|kw| lower.contains(kw)) {
                return *style;
            }
        }
    }
    leaders[0]
}

/// Start from the dominant style's palette and fold in explicit color
/// mentions. A color that names a role keyword within [`ROLE_WINDOW`]
/// characters after it lands in that slot (first role in priority order
/// wins); an unqualified color becomes the primary.
pub fn resolve_palette(style: Style, lower: &str) -> Palette {
    let mut palette = catalog::palette(style);

    for (name, hex) in COLOR_OVERRIDES {
        if !lower.contains(name) {
            continue;
        }
        let role = PaletteRole::PRIORITY
            .iter()
            .copied()
            .find(|role| color_governs_role(lower, name, role.keyword()));
        let slot = match role {
            Some(PaletteRole::Background) => &mut palette.background,
            Some(PaletteRole::Primary) | None => &mut palette.primary,
            Some(PaletteRole::Secondary) => &mut palette.secondary,
            Some(PaletteRole::Accent) => &mut palette.accent,
        };
        *slot = (*hex).to_string();
    }

    palette
}

/// True when `role` appears in the fixed-size window following an
/// occurrence of `color` (covers the usual "blue background" phrasing).
fn color_governs_role(lower: &str, color: &str, role: &str) -> bool {
    let mut search = lower;
    while let Some(pos) = search.find(color) {
        let after = &search[pos + color.len()..];
        let window: String = after.chars().take(ROLE_WINDOW).collect();
        if window.contains(role) {
            return true;
        }
        search = after;
    }
    false
}

/// First matching entry in the fixed object priority chain.
pub fn detect_object(lower: &str) -> Option<ObjectKind> {
    OBJECT_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(kind, _)| *kind)
}

fn extract_flags(lower: &str) -> PromptFlags {
    let any = |terms: &[&str]| terms.iter().any(|t| lower.contains(t));
    PromptFlags {
        scan: any(&["scan", "tracking", "target"]),
        glitch: any(&["glitch", "distorted"]),
        glow: any(&["glow", "neon"]),
        sparkle: lower.contains("sparkle"),
        hexagon: lower.contains("hexagon"),
        triangle: lower.contains("triangle"),
        circle: lower.contains("circle"),
    }
}

/// `<int> teeth` override; out-of-range or malformed counts keep the
/// default of 8.
fn extract_gear_teeth(lower: &str) -> u32 {
    if lower.contains("teeth") {
        if let Some(caps) = TEETH_RE.captures(lower) {
            if let Ok(teeth) = caps[1].parse::<u32>() {
                if (4..=20).contains(&teeth) {
                    return teeth;
                }
            }
        }
    }
    DEFAULT_GEAR_TEETH
}

/// `<int> points` / `<int> pointed star` override, clamped into [3,12].
fn extract_star_points(lower: &str) -> u32 {
    if lower.contains("points") || lower.contains("pointed star") {
        if let Some(caps) = POINTS_RE.captures(lower) {
            if let Ok(points) = caps[1].parse::<u32>() {
                return points.clamp(3, 12);
            }
        }
    }
    DEFAULT_STAR_POINTS
}

/// The caption shows the original prompt, cut down to the character
/// budget the caption bar can hold at the current width.
fn build_caption(prompt: &str, width: u32) -> String {
    let budget = ((i64::from(width) - 60) / 7).max(3) as usize;
    let length = prompt.chars().count();
    if length > budget {
        let head: String = prompt.chars().take(budget - 3).collect();
        format!("{head}...")
    } else {
        prompt.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_default_without_pattern() {
        assert_eq!(extract_dimensions("a simple logo"), Dimensions::default());
    }

    #[test]
    fn dimensions_parse_x_and_by_separators() {
        assert_eq!(extract_dimensions("an icon 120 x 80"), Dimensions::new(120, 80));
        assert_eq!(extract_dimensions("banner 600 by 200"), Dimensions::new(600, 200));
        assert_eq!(extract_dimensions("tiny 64x64 sprite"), Dimensions::new(64, 64));
    }

    #[test]
    fn dimensions_out_of_bounds_keep_default() {
        assert_eq!(extract_dimensions("a 10 x 10 dot"), Dimensions::default());
        assert_eq!(extract_dimensions("a 3000 x 300 banner"), Dimensions::default());
    }

    #[test]
    fn dimensions_honor_only_the_first_match() {
        assert_eq!(
            extract_dimensions("make it 400 x 200, not 500 x 500"),
            Dimensions::new(400, 200)
        );
    }

    #[test]
    fn dimensions_survive_overflowing_numbers() {
        assert_eq!(
            extract_dimensions("a 99999999999999999999 x 100 thing"),
            Dimensions::default()
        );
    }

    #[test]
    fn empty_prompt_scores_zero_and_falls_back_to_general() {
        let scores = score_styles("");
        assert_eq!(scores.max(), 0);
        assert_eq!(select_style(&scores, ""), Style::General);
    }

    #[test]
    fn keyword_pass_counts_each_keyword_once() {
        let scores = score_styles("a vintage retro pixel poster");
        // retro, vintage, pixel from the base set.
        assert!(scores.get(Style::Retro) >= 3);
    }

    #[test]
    fn contextual_boost_rewards_city_with_tech_terms() {
        let lower = "a city full of tech";
        let scores = score_styles(lower);
        // "tech" base hit + any-of(+1) + city pair (+2).
        assert_eq!(scores.get(Style::Cyberpunk), 4);
    }

    #[test]
    fn geometric_boost_is_vetoed_by_ornate() {
        let plain = score_styles("a geometric figure");
        let ornate = score_styles("an ornate geometric figure");
        assert!(plain.get(Style::Minimalist) > ornate.get(Style::Minimalist));
    }

    #[test]
    fn tie_break_pins_cyberpunk_for_futuristic_city() {
        let lower = "a minimalist yet futuristic tech city at night";
        let scores = score_styles(lower);
        assert!(scores.get(Style::Cyberpunk) > 0);
        assert!(scores.get(Style::Minimalist) > 0);
        assert_eq!(select_style(&scores, lower), Style::Cyberpunk);
    }

    #[test]
    fn tie_break_falls_back_to_catalog_order() {
        // Corporate and retro can tie with no tie-break keyword present;
        // retro precedes corporate in the catalog.
        let mut scores = StyleScores::new();
        scores.add(Style::Retro, 2);
        scores.add(Style::Corporate, 2);
        assert_eq!(select_style(&scores, "nothing relevant"), Style::Retro);
    }

    #[test]
    fn color_overrides_land_in_named_roles() {
        let palette = resolve_palette(Style::Minimalist, "a blue background with a red accent");
        assert_eq!(palette.background, "#0000ff");
        assert_eq!(palette.accent, "#ff0000");
        let default = catalog::palette(Style::Minimalist);
        assert_eq!(palette.primary, default.primary);
        assert_eq!(palette.secondary, default.secondary);
    }

    #[test]
    fn unqualified_color_becomes_primary() {
        let palette = resolve_palette(Style::General, "a green dragon");
        assert_eq!(palette.primary, "#00ff00");
    }

    #[test]
    fn later_color_can_overwrite_an_earlier_override() {
        // Both colors qualify the same slot; gold iterates after red.
        let palette = resolve_palette(Style::General, "a red background or a gold background");
        assert_eq!(palette.background, "#ffd700");
    }

    #[test]
    fn object_detection_is_first_match_in_priority_order() {
        assert_eq!(detect_object("an eye and a star"), Some(ObjectKind::Eye));
        assert_eq!(detect_object("a starry gear"), Some(ObjectKind::Gear));
        assert_eq!(detect_object("a heart"), Some(ObjectKind::Heart));
        assert_eq!(detect_object("nothing at all"), None);
    }

    #[test]
    fn tech_prompts_detect_circuit_before_star() {
        assert_eq!(detect_object("high tech star"), Some(ObjectKind::Circuit));
    }

    #[test]
    fn gear_teeth_extraction_rejects_out_of_range_counts() {
        assert_eq!(extract_gear_teeth("a gear with 12 teeth"), 12);
        assert_eq!(extract_gear_teeth("a gear with 40 teeth"), 8);
        assert_eq!(extract_gear_teeth("a gear with teeth"), 8);
        assert_eq!(extract_gear_teeth("a plain gear"), 8);
    }

    #[test]
    fn star_points_extraction_clamps_into_range() {
        assert_eq!(extract_star_points("8 pointed star"), 8);
        assert_eq!(extract_star_points("a star with 20 points"), 12);
        assert_eq!(extract_star_points("2 points"), 3);
        assert_eq!(extract_star_points("a star"), 5);
    }

    #[test]
    fn caption_truncates_to_width_budget_with_ellipsis() {
        let long = "x".repeat(120);
        let caption = build_caption(&long, 300);
        let budget = (300 - 60) / 7; // 34
        assert_eq!(caption.chars().count(), budget);
        assert!(caption.ends_with("..."));

        let short = build_caption("tiny", 300);
        assert_eq!(short, "tiny");
    }

    #[test]
    fn caption_never_panics_at_minimum_width() {
        let caption = build_caption("some long prompt text", 50);
        assert_eq!(caption, "...");
    }

    #[test]
    fn analyze_is_total_over_degenerate_input() {
        let interp = analyze("");
        assert_eq!(interp.style, Style::General);
        assert_eq!(interp.object, None);
        assert_eq!(interp.dimensions, Dimensions::default());

        let interp = analyze("日本語のプロンプト 星");
        assert_eq!(interp.style, Style::General);
    }
}
