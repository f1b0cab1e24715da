//! Immutable lookup tables backing the analyzer: style keywords,
//! contextual boost rules, tie-break keyword sets, palettes, the color
//! override table, and the object detection rules. Defined once at
//! compile time; requests only ever read them.

use crate::types::{ObjectKind, Palette, Style};

/// Base keyword sets. One point per keyword that occurs as a substring
/// of the case-folded prompt.
pub const STYLE_KEYWORDS: &[(Style, &[&str])] = &[
    (
        Style::Cyberpunk,
        &["cyberpunk", "neon", "futuristic", "glitch", "dystopian", "cyber", "tech"],
    ),
    (
        Style::Minimalist,
        &["minimalist", "minimal", "clean", "simple", "geometric", "flat"],
    ),
    (
        Style::Abstract,
        &["abstract", "fluid", "organic", "conceptual", "non-representational"],
    ),
    (
        Style::Retro,
        &["retro", "vintage", "80s", "90s", "old-school", "pixel", "8-bit"],
    ),
    (
        Style::Nature,
        &["nature", "organic", "floral", "plant", "tree", "leaf", "flower", "water"],
    ),
    (
        Style::Corporate,
        &["corporate", "professional", "business", "formal", "clean", "modern"],
    ),
    (
        Style::Fantasy,
        &["fantasy", "magical", "mythical", "medieval", "dragon", "fairy", "wizard"],
    ),
    (
        Style::ArtDeco,
        &[
            "art deco",
            "artdeco",
            "gatsby",
            "roaring twenties",
            "geometric patterns",
            "symmetry",
            "streamlined",
        ],
    ),
    (
        Style::Steampunk,
        &[
            "steampunk",
            "victorian",
            "cogs",
            "gears",
            "industrial",
            "brass",
            "copper",
            "steam-powered",
        ],
    ),
    (
        Style::FlatDesign,
        &["flat design", "flat", "2d", "simple color", "no gradient", "long shadow"],
    ),
    (
        Style::GlitchArt,
        &[
            "glitch",
            "glitchy",
            "datamosh",
            "data mosh",
            "corrupted",
            "digital noise",
            "distortion",
            "static",
        ],
    ),
];

/// One contextual scoring rule. Rules are independent and cumulative on
/// top of the base keyword pass.
#[derive(Debug, Clone, Copy)]
pub enum BoostRule {
    /// Add `points` when any listed term occurs.
    AnyOf {
        terms: &'static [&'static str],
        points: u32,
    },
    /// Add `points` when every listed term occurs.
    AllOf {
        terms: &'static [&'static str],
        points: u32,
    },
    /// Add `points` when a term from each group occurs.
    Pair {
        first: &'static [&'static str],
        second: &'static [&'static str],
        points: u32,
    },
    /// Add `points` when a trigger term occurs and no veto term does.
    Unless {
        terms: &'static [&'static str],
        veto: &'static [&'static str],
        points: u32,
    },
}

/// Contextual boosts, grouped per style, evaluated in listed order.
pub const BOOST_RULES: &[(Style, &[BoostRule])] = &[
    (
        Style::Cyberpunk,
        &[
            BoostRule::AnyOf {
                terms: &["dystopian", "future", "tech", "neon", "digital"],
                points: 1,
            },
            BoostRule::Pair {
                first: &["city"],
                second: &["dark", "future", "tech", "neon"],
                points: 2,
            },
            BoostRule::AnyOf {
                terms: &[
                    "high tech",
                    "low life",
                    "neural interface",
                    "cyber enhancement",
                    "virtual reality",
                    "digital reality",
                ],
                points: 2,
            },
        ],
    ),
    (
        Style::Minimalist,
        &[
            BoostRule::AnyOf {
                terms: &["clean lines", "simple shapes", "uncluttered", "minimalism"],
                points: 2,
            },
            BoostRule::AllOf {
                terms: &["simple", "elegant"],
                points: 1,
            },
            BoostRule::Unless {
                terms: &["geometric"],
                veto: &["complex", "ornate", "detailed"],
                points: 1,
            },
        ],
    ),
    (
        Style::Abstract,
        &[
            BoostRule::AnyOf {
                terms: &["non-representational", "conceptual", "non-figurative"],
                points: 2,
            },
            BoostRule::Unless {
                terms: &["expression"],
                veto: &["realistic", "literal"],
                points: 1,
            },
        ],
    ),
    (
        Style::Retro,
        &[
            BoostRule::AnyOf {
                terms: &["vintage style", "old school", "retro gaming", "pixel art"],
                points: 2,
            },
            BoostRule::AnyOf {
                terms: &["70s", "80s", "90s", "1970s", "1980s", "1990s"],
                points: 1,
            },
        ],
    ),
    (
        Style::Nature,
        &[
            BoostRule::AnyOf {
                terms: &["organic shape", "natural form", "floral pattern", "landscape"],
                points: 2,
            },
            BoostRule::AnyOf {
                terms: &["environment", "eco"],
                points: 1,
            },
        ],
    ),
    (
        Style::Corporate,
        &[
            BoostRule::AnyOf {
                terms: &[
                    "professional logo",
                    "business card",
                    "corporate identity",
                    "brand",
                ],
                points: 2,
            },
            BoostRule::AnyOf {
                terms: &["company", "professional"],
                points: 1,
            },
        ],
    ),
    (
        Style::Fantasy,
        &[
            BoostRule::AnyOf {
                terms: &["magical realm", "mythical creature", "enchanted", "fairy tale"],
                points: 2,
            },
            BoostRule::AnyOf {
                terms: &["spell", "quest", "dragon"],
                points: 1,
            },
        ],
    ),
    (
        Style::ArtDeco,
        &[
            BoostRule::AnyOf {
                terms: &[
                    "art deco style",
                    "gatsby",
                    "roaring twenties",
                    "1920s style",
                    "deco pattern",
                ],
                points: 2,
            },
            BoostRule::Pair {
                first: &["geometric"],
                second: &["gold", "symmetry", "streamlined"],
                points: 1,
            },
            BoostRule::AnyOf {
                terms: &["symmetric", "ornate geometric"],
                points: 1,
            },
        ],
    ),
    (
        Style::Steampunk,
        &[
            BoostRule::AnyOf {
                terms: &[
                    "steampunk",
                    "victorian",
                    "cogs",
                    "gears",
                    "industrial era",
                    "steam powered",
                ],
                points: 2,
            },
            BoostRule::Pair {
                first: &["brass", "copper", "bronze"],
                second: &["mechanism"],
                points: 1,
            },
        ],
    ),
    (
        Style::FlatDesign,
        &[
            BoostRule::AnyOf {
                terms: &[
                    "flat design",
                    "flat style",
                    "2d simple",
                    "no shadows",
                    "material design basic",
                ],
                points: 2,
            },
            BoostRule::AnyOf {
                terms: &["long shadow"],
                points: 1,
            },
            BoostRule::AllOf {
                terms: &["minimal", "solid color"],
                points: 1,
            },
        ],
    ),
    (
        Style::GlitchArt,
        &[
            BoostRule::AnyOf {
                terms: &[
                    "glitch effect",
                    "datamosh",
                    "data corruption",
                    "digital noise",
                    "pixel sorting",
                    "screen tear",
                ],
                points: 2,
            },
            BoostRule::Pair {
                first: &["distorted", "corrupted"],
                second: &["digital", "signal"],
                points: 1,
            },
        ],
    ),
];

/// Secondary keyword sets used only to resolve score ties. Listed in
/// priority order; the first entry whose style is tied and whose keyword
/// matches wins.
pub const TIE_BREAK_RULES: &[(Style, &[&str])] = &[
    (
        Style::Cyberpunk,
        &["digital", "tech", "future", "cyber", "ai", "virtual"],
    ),
    (
        Style::Nature,
        &["tree", "flower", "plant", "river", "mountain", "forest"],
    ),
    (Style::Minimalist, &["minimal", "simple", "clean", "basic"]),
    (
        Style::Fantasy,
        &["magic", "mystic", "dragon", "sword", "wizard"],
    ),
    (
        Style::ArtDeco,
        &["geometric", "gold", "symmetry", "1920s", "gatsby", "streamline"],
    ),
    (
        Style::Steampunk,
        &["gear", "cog", "victorian", "industrial", "brass"],
    ),
    (
        Style::FlatDesign,
        &["flat", "2d", "simple icon", "no gradient"],
    ),
    (
        Style::GlitchArt,
        &["glitchy", "corrupt", "noise", "distort"],
    ),
];

/// The five named colors attached to a style. The returned value is the
/// request's working copy; the table itself never mutates.
pub fn palette(style: Style) -> Palette {
    match style {
        Style::Cyberpunk => Palette::new("#00ffff", "#ff00ff", "#00ff88", "#111122", "#ffffff"),
        Style::Minimalist => Palette::new("#000000", "#ffffff", "#ff3333", "#f7f7f7", "#333333"),
        Style::Abstract => Palette::new("#ff6b35", "#2ec4b6", "#fdfffc", "#293241", "#ffffff"),
        Style::Retro => Palette::new("#f8333c", "#44af69", "#fcab10", "#2b9eb3", "#dbd5b5"),
        Style::Nature => Palette::new("#2d6a4f", "#40916c", "#95d5b2", "#d8f3dc", "#1b4332"),
        Style::Corporate => Palette::new("#003366", "#336699", "#ff9900", "#ffffff", "#333333"),
        Style::Fantasy => Palette::new("#7b2cbf", "#c77dff", "#ffff3f", "#240046", "#e0aaff"),
        Style::ArtDeco => Palette::new("#DAA520", "#000000", "#C0C0C0", "#F5F5DC", "#2E2E2E"),
        Style::Steampunk => Palette::new("#B87333", "#5E2605", "#CD7F32", "#F5DEB3", "#3B2F2F"),
        Style::FlatDesign => Palette::new("#3498db", "#2ecc71", "#e74c3c", "#ecf0f1", "#2c3e50"),
        Style::GlitchArt => Palette::new("#FF00FF", "#00FFFF", "#FFFF00", "#1A1A1A", "#FFFFFF"),
        Style::General => Palette::new("#0077b6", "#48cae4", "#fb8500", "#caf0f8", "#03045e"),
    }
}

/// Common color names a prompt can use to override palette slots.
/// Iterated in this fixed order, so a later entry can overwrite an
/// earlier override of the same slot.
pub const COLOR_OVERRIDES: &[(&str, &str)] = &[
    ("red", "#ff0000"),
    ("blue", "#0000ff"),
    ("green", "#00ff00"),
    ("yellow", "#ffff00"),
    ("purple", "#800080"),
    ("pink", "#ff69b4"),
    ("orange", "#ffa500"),
    ("black", "#000000"),
    ("white", "#ffffff"),
    ("gray", "#808080"),
    ("gold", "#ffd700"),
    ("silver", "#c0c0c0"),
];

/// Object detection rules in priority order; the first matching entry
/// selects the primary content template.
pub const OBJECT_RULES: &[(ObjectKind, &[&str])] = &[
    (ObjectKind::Eye, &["eye", "vision", "optic", "sight"]),
    (
        ObjectKind::Circuit,
        &["circuit", "chip", "electronic", "board", "tech"],
    ),
    (ObjectKind::City, &["city", "skyline", "building", "urban"]),
    (
        ObjectKind::Geometric,
        &["circle", "square", "triangle", "hexagon", "geometric"],
    ),
    (ObjectKind::Gear, &["gear", "cog", "cogwheel", "mechanism"]),
    (
        ObjectKind::Arrow,
        &["arrow", "pointer", "direction", "indicator", "cursor"],
    ),
    (
        ObjectKind::Cloud,
        &["cloud", "sky", "weather", "cumulus", "fluffy cloud"],
    ),
    (
        ObjectKind::Heart,
        &["heart", "love", "valentine", "romance"],
    ),
    (
        ObjectKind::Star,
        &["star", "celestial", "rating", "sparkle", "five-pointed star"],
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scored_style_has_keywords_and_a_palette() {
        for style in Style::SCORED {
            assert!(
                STYLE_KEYWORDS.iter().any(|(s, kws)| *s == style && !kws.is_empty()),
                "missing keywords for {style}"
            );
            assert!(!palette(style).primary.is_empty());
        }
    }

    #[test]
    fn color_override_table_has_twelve_entries() {
        assert_eq!(COLOR_OVERRIDES.len(), 12);
        for (_, hex) in COLOR_OVERRIDES {
            assert!(hex.starts_with('#') && hex.len() == 7);
        }
    }

    #[test]
    fn object_rules_start_with_eye_and_end_with_star() {
        assert_eq!(OBJECT_RULES.first().map(|(k, _)| *k), Some(ObjectKind::Eye));
        assert_eq!(OBJECT_RULES.last().map(|(k, _)| *k), Some(ObjectKind::Star));
    }

    #[test]
    fn tie_break_priority_begins_with_cyberpunk() {
        assert_eq!(TIE_BREAK_RULES[0].0, Style::Cyberpunk);
        assert_eq!(TIE_BREAK_RULES[1].0, Style::Nature);
    }
}
