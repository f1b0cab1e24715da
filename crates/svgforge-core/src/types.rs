use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canvas size of the generated document, in SVG user units.
///
/// Always positive and within [`Dimensions::MIN_SIDE`]..=[`Dimensions::MAX_SIDE`],
/// or the 300x300 default when the prompt carries no usable size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const MIN_SIDE: u32 = 50;
    pub const MAX_SIDE: u32 = 2000;

    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn min_side(&self) -> f64 {
        f64::from(self.width.min(self.height))
    }

    /// Center point used to anchor most content templates.
    pub fn center(&self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }

    pub fn in_bounds(side: u32) -> bool {
        (Self::MIN_SIDE..=Self::MAX_SIDE).contains(&side)
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::new(300, 300)
    }
}

/// The visual styles the analyzer can classify a prompt into.
///
/// The variant order is the fixed catalog order: it drives score iteration,
/// deterministic tie resolution, and the order styles appear in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Cyberpunk,
    Minimalist,
    Abstract,
    Retro,
    Nature,
    Corporate,
    Fantasy,
    ArtDeco,
    Steampunk,
    FlatDesign,
    GlitchArt,
    General,
}

impl Style {
    /// Every style, in catalog order, `General` last.
    pub const CATALOG: [Style; 12] = [
        Style::Cyberpunk,
        Style::Minimalist,
        Style::Abstract,
        Style::Retro,
        Style::Nature,
        Style::Corporate,
        Style::Fantasy,
        Style::ArtDeco,
        Style::Steampunk,
        Style::FlatDesign,
        Style::GlitchArt,
        Style::General,
    ];

    /// The styles that participate in keyword scoring. `General` is the
    /// zero-score fallback and never accumulates points itself.
    pub const SCORED: [Style; 11] = [
        Style::Cyberpunk,
        Style::Minimalist,
        Style::Abstract,
        Style::Retro,
        Style::Nature,
        Style::Corporate,
        Style::Fantasy,
        Style::ArtDeco,
        Style::Steampunk,
        Style::FlatDesign,
        Style::GlitchArt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Cyberpunk => "cyberpunk",
            Style::Minimalist => "minimalist",
            Style::Abstract => "abstract",
            Style::Retro => "retro",
            Style::Nature => "nature",
            Style::Corporate => "corporate",
            Style::Fantasy => "fantasy",
            Style::ArtDeco => "artdeco",
            Style::Steampunk => "steampunk",
            Style::FlatDesign => "flatdesign",
            Style::GlitchArt => "glitchart",
            Style::General => "general",
        }
    }

    fn index(&self) -> usize {
        Style::CATALOG
            .iter()
            .position(|s| s == self)
            .expect("style present in catalog")
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::CATALOG
            .iter()
            .copied()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| format!("unknown style: {s}"))
    }
}

/// Primary content subject detected in the prompt, first match in the
/// fixed priority chain. `None` falls through to a style-specific
/// abstract design.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Eye,
    Circuit,
    City,
    Geometric,
    Gear,
    Arrow,
    Cloud,
    Heart,
    Star,
}

impl ObjectKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Eye => "eye",
            ObjectKind::Circuit => "circuit",
            ObjectKind::City => "city",
            ObjectKind::Geometric => "geometric",
            ObjectKind::Gear => "gear",
            ObjectKind::Arrow => "arrow",
            ObjectKind::Cloud => "cloud",
            ObjectKind::Heart => "heart",
            ObjectKind::Star => "star",
        }
    }
}

/// Working copy of a style's five named colors. The catalog entry is
/// immutable; this copy absorbs per-request color overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Palette {
    pub fn new(
        primary: &str,
        secondary: &str,
        accent: &str,
        background: &str,
        text: &str,
    ) -> Self {
        Self {
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            accent: accent.to_string(),
            background: background.to_string(),
            text: text.to_string(),
        }
    }
}

/// Slot of a [`Palette`] a color override can land in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteRole {
    Background,
    Primary,
    Secondary,
    Accent,
}

impl PaletteRole {
    /// Override resolution order: first role whose keyword sits inside the
    /// lookahead window wins.
    pub const PRIORITY: [PaletteRole; 4] = [
        PaletteRole::Background,
        PaletteRole::Primary,
        PaletteRole::Secondary,
        PaletteRole::Accent,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            PaletteRole::Background => "background",
            PaletteRole::Primary => "primary",
            PaletteRole::Secondary => "secondary",
            PaletteRole::Accent => "accent",
        }
    }
}

/// Per-request score vector, rebuilt for every prompt. Every style is
/// present even at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleScores {
    scores: [u32; Style::CATALOG.len()],
}

impl StyleScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, style: Style, points: u32) {
        self.scores[style.index()] += points;
    }

    pub fn get(&self, style: Style) -> u32 {
        self.scores[style.index()]
    }

    pub fn max(&self) -> u32 {
        self.scores.iter().copied().max().unwrap_or(0)
    }

    /// Styles holding the maximum score, in catalog order.
    pub fn leaders(&self) -> Vec<Style> {
        let max = self.max();
        Style::SCORED
            .iter()
            .copied()
            .filter(|style| self.get(*style) == max)
            .collect()
    }
}

/// Boolean cues lifted from the prompt that steer individual templates
/// and the supplementary overlays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PromptFlags {
    /// Eye template: scanning lines ("scan", "tracking", "target").
    pub scan: bool,
    /// Glitch displacement overlay ("glitch", "distorted").
    pub glitch: bool,
    /// Glow-bordered rect overlay ("glow", "neon").
    pub glow: bool,
    /// Star template: glow-filtered outline copy ("sparkle").
    pub sparkle: bool,
    /// Geometric template branch selectors.
    pub hexagon: bool,
    pub triangle: bool,
    pub circle: bool,
}

/// Structured reading of a prompt: everything the synthesizer needs to
/// render one document. Built once per request and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub dimensions: Dimensions,
    pub style: Style,
    pub palette: Palette,
    pub object: Option<ObjectKind>,
    /// Caption text already truncated to the width-dependent budget,
    /// still unescaped.
    pub caption: String,
    /// The original prompt, unmodified, for the document `<title>`.
    pub title: String,
    pub flags: PromptFlags,
    pub gear_teeth: u32,
    pub star_points: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_round_trips_through_str() {
        for style in Style::CATALOG {
            assert_eq!(style.as_str().parse::<Style>().unwrap(), style);
        }
    }

    #[test]
    fn scores_start_at_zero_for_every_style() {
        let scores = StyleScores::new();
        for style in Style::CATALOG {
            assert_eq!(scores.get(style), 0);
        }
        assert_eq!(scores.max(), 0);
    }

    #[test]
    fn leaders_preserve_catalog_order() {
        let mut scores = StyleScores::new();
        scores.add(Style::Nature, 2);
        scores.add(Style::Cyberpunk, 2);
        assert_eq!(scores.leaders(), vec![Style::Cyberpunk, Style::Nature]);
    }

    #[test]
    fn default_dimensions_are_square_300() {
        let d = Dimensions::default();
        assert_eq!((d.width, d.height), (300, 300));
        assert_eq!(d.center(), (150.0, 150.0));
    }
}
