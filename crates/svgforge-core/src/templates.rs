//! Parametrized markup fragments. Each function is pure: (palette,
//! dimensions, a few prompt-derived flags) in, one fragment out. The
//! synthesizer composes them by ordered concatenation.

use crate::geometry;
use crate::types::{Dimensions, Palette, PromptFlags, Style};

/// Escape a value for an XML text or attribute context.
pub fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Shared `<defs>` block: glow filter, primary-to-secondary gradient,
/// faint grid pattern, glitch displacement filter, pixelation filter.
/// Emitted unconditionally so overlays can reference the ids.
pub fn defs(palette: &Palette) -> String {
    format!(
        r##"<defs>
        <!-- Filter: Glow Effect -->
        <filter id="glow" x="-20%" y="-20%" width="140%" height="140%">
            <feGaussianBlur stdDeviation="5" result="blur"/>
            <feComposite in="SourceGraphic" in2="blur" operator="over"/>
        </filter>
        <!-- Gradient: Primary to Secondary -->
        <linearGradient id="primaryGradient" x1="0%" y1="0%" x2="100%" y2="100%">
            <stop offset="0%" style="stop-color:{primary};stop-opacity:1" />
            <stop offset="100%" style="stop-color:{secondary};stop-opacity:1" />
        </linearGradient>
        <!-- Pattern: Background texture -->
        <pattern id="bgPattern" patternUnits="userSpaceOnUse" width="100" height="100">
            <rect width="100" height="100" fill="{background}"/>
            <path d="M0 10 H100 M0 30 H100 M0 50 H100 M0 70 H100 M0 90 H100" stroke="{primary}" stroke-width="0.5" opacity="0.1"/>
            <path d="M10 0 V100 M30 0 V100 M50 0 V100 M70 0 V100 M90 0 V100" stroke="{primary}" stroke-width="0.5" opacity="0.1"/>
        </pattern>
        <!-- Filter: Glitch displacement -->
        <filter id="glitchEffect">
            <feTurbulence type="fractalNoise" baseFrequency="0.05" numOctaves="2" result="noise"/>
            <feDisplacementMap in="SourceGraphic" in2="noise" scale="5" xChannelSelector="R" yChannelSelector="G"/>
        </filter>
        <!-- Filter: Retro pixelation -->
        <filter id="pixelate" x="0%" y="0%" width="100%" height="100%">
            <feFlood x="4" y="4" height="2" width="2"/>
            <feComposite width="8" height="8"/>
            <feTile result="a"/>
            <feComposite in="SourceGraphic" in2="a" operator="in"/>
            <feMorphology operator="dilate" radius="2"/>
        </filter>
    </defs>"##,
        primary = palette.primary,
        secondary = palette.secondary,
        background = palette.background,
    )
}

pub fn background(dims: Dimensions, palette: &Palette) -> String {
    format!(
        r#"<rect width="{w}" height="{h}" fill="{fill}"/>"#,
        w = dims.width,
        h = dims.height,
        fill = palette.background,
    )
}

/// Faint grid overlay used behind the abstract, cyberpunk and retro styles.
pub fn pattern_overlay(dims: Dimensions) -> String {
    format!(
        r#"<rect width="{w}" height="{h}" fill="url(#bgPattern)" opacity="0.3"/>"#,
        w = dims.width,
        h = dims.height,
    )
}

pub fn eye(palette: &Palette, cx: f64, cy: f64, scan: bool) -> String {
    let scan_lines = if scan {
        format!(
            r#"<line x1="-40" y1="-10" x2="40" y2="-10" stroke="{accent}" stroke-width="1" opacity="0.7"/>
            <line x1="-40" y1="10" x2="40" y2="10" stroke="{accent}" stroke-width="1" opacity="0.7"/>
            <path d="M-40 0 Q0 -5 40 0" stroke="{secondary}" stroke-width="1" fill="none" opacity="0.8"/>
            <path d="M-40 0 Q0 5 40 0" stroke="{secondary}" stroke-width="1" fill="none" opacity="0.8"/>"#,
            accent = palette.accent,
            secondary = palette.secondary,
        )
    } else {
        String::new()
    };

    format!(
        r##"<!-- Eye element -->
        <g transform="translate({cx}, {cy})">
            <ellipse cx="0" cy="0" rx="60" ry="35" fill="#000000" stroke="{primary}" stroke-width="2"/>
            <circle cx="0" cy="0" r="25" fill="url(#primaryGradient)" filter="url(#glow)"/>
            <circle cx="0" cy="0" r="12" fill="#000000"/>
            <circle cx="0" cy="0" r="18" fill="none" stroke="{accent}" stroke-width="0.8" stroke-dasharray="2,1"/>
            {scan_lines}
        </g>"##,
        primary = palette.primary,
        accent = palette.accent,
    )
}

pub fn circuit(palette: &Palette, cx: f64, cy: f64, style: Style) -> String {
    if style == Style::Cyberpunk {
        format!(
            r#"<!-- Circuit design -->
            <g transform="translate({cx}, {cy})">
                <rect x="-70" y="-70" width="140" height="140" fill="none" stroke="{primary}" stroke-width="2"/>
                <path d="M-70 -30 H70 M-70 0 H70 M-70 30 H70" stroke="{accent}" stroke-width="1.5" stroke-dasharray="5,3"/>
                <path d="M-30 -70 V70 M0 -70 V70 M30 -70 V70" stroke="{accent}" stroke-width="1.5" stroke-dasharray="5,3"/>
                <circle cx="0" cy="0" r="20" fill="none" stroke="{secondary}" stroke-width="2"/>
                <circle cx="-30" cy="-30" r="5" fill="{primary}"/>
                <circle cx="30" cy="-30" r="5" fill="{primary}"/>
                <circle cx="-30" cy="30" r="5" fill="{primary}"/>
                <circle cx="30" cy="30" r="5" fill="{primary}"/>
                <path d="M-60 -60 L-40 -40 M60 -60 L40 -40 M-60 60 L-40 40 M60 60 L40 40" stroke="{accent}" stroke-width="2"/>
            </g>"#,
            primary = palette.primary,
            secondary = palette.secondary,
            accent = palette.accent,
        )
    } else {
        format!(
            r#"<!-- Circuit design - clean -->
            <g transform="translate({cx}, {cy})">
                <rect x="-60" y="-60" width="120" height="120" fill="none" stroke="{primary}" stroke-width="2" rx="5"/>
                <circle cx="0" cy="0" r="20" fill="{primary}" opacity="0.2"/>
                <path d="M-60 -20 H-20 V-60 M-60 20 H-20 V60 M60 -20 H20 V-60 M60 20 H20 V60"
                      fill="none" stroke="{primary}" stroke-width="1.5"/>
                <rect x="-10" y="-10" width="20" height="20" fill="{accent}"/>
                <circle cx="-40" cy="-40" r="4" fill="{secondary}"/>
                <circle cx="40" cy="-40" r="4" fill="{secondary}"/>
                <circle cx="-40" cy="40" r="4" fill="{secondary}"/>
                <circle cx="40" cy="40" r="4" fill="{secondary}"/>
            </g>"#,
            primary = palette.primary,
            secondary = palette.secondary,
            accent = palette.accent,
        )
    }
}

pub fn city(palette: &Palette, dims: Dimensions, style: Style) -> String {
    let w = dims.width;
    let h = dims.height;
    if style == Style::Cyberpunk {
        format!(
            r#"<!-- Cyberpunk City Skyline -->
            <g>
                <rect width="{w}" height="{h}" fill="url(#primaryGradient)" opacity="0.3"/>
                <rect x="20" y="100" width="30" height="200" fill="{background}" stroke="{primary}" stroke-width="1"/>
                <rect x="60" y="150" width="40" height="150" fill="{background}" stroke="{secondary}" stroke-width="1"/>
                <rect x="110" y="80" width="20" height="220" fill="{background}" stroke="{primary}" stroke-width="1"/>
                <rect x="140" y="130" width="50" height="170" fill="{background}" stroke="{accent}" stroke-width="1"/>
                <rect x="200" y="100" width="35" height="200" fill="{background}" stroke="{secondary}" stroke-width="1"/>
                <rect x="245" y="120" width="25" height="180" fill="{background}" stroke="{primary}" stroke-width="1"/>
                <g>
                    <rect x="25" y="120" width="5" height="8" fill="{accent}" opacity="0.8"/>
                    <rect x="35" y="120" width="5" height="8" fill="{accent}" opacity="0.8"/>
                    <rect x="25" y="140" width="5" height="8" fill="{accent}" opacity="0.8"/>
                    <rect x="35" y="140" width="5" height="8" fill="{accent}" opacity="0.5"/>
                    <rect x="25" y="160" width="5" height="8" fill="{accent}" opacity="0.8"/>
                    <rect x="35" y="160" width="5" height="8" fill="{accent}" opacity="0.5"/>
                    <rect x="70" y="170" width="6" height="10" fill="{primary}" opacity="0.7"/>
                    <rect x="84" y="170" width="6" height="10" fill="{primary}" opacity="0.7"/>
                    <rect x="70" y="190" width="6" height="10" fill="{primary}" opacity="0.4"/>
                    <rect x="84" y="190" width="6" height="10" fill="{primary}" opacity="0.7"/>
                    <rect x="115" y="100" width="4" height="7" fill="{secondary}" opacity="0.6"/>
                    <rect x="115" y="120" width="4" height="7" fill="{secondary}" opacity="0.6"/>
                    <rect x="115" y="140" width="4" height="7" fill="{secondary}" opacity="0.6"/>
                </g>
                <g>
                    <ellipse cx="70" cy="80" rx="10" ry="3" fill="{secondary}" filter="url(#glow)" opacity="0.8"/>
                    <ellipse cx="180" cy="50" rx="12" ry="4" fill="{primary}" filter="url(#glow)" opacity="0.8"/>
                    <ellipse cx="240" cy="90" rx="8" ry="3" fill="{accent}" filter="url(#glow)" opacity="0.8"/>
                </g>
            </g>"#,
            primary = palette.primary,
            secondary = palette.secondary,
            accent = palette.accent,
            background = palette.background,
        )
    } else {
        format!(
            r#"<!-- City Skyline -->
            <g>
                <rect width="{w}" height="{h}" fill="{background}" opacity="0.4"/>
                <rect width="{w}" height="{half}" fill="{secondary}" opacity="0.2"/>
                <rect x="30" y="100" width="40" height="200" fill="{primary}" opacity="0.8"/>
                <rect x="80" y="140" width="30" height="160" fill="{primary}" opacity="0.7"/>
                <rect x="120" y="120" width="50" height="180" fill="{primary}" opacity="0.9"/>
                <rect x="180" y="150" width="45" height="150" fill="{primary}" opacity="0.8"/>
                <rect x="235" y="130" width="35" height="170" fill="{primary}" opacity="0.7"/>
                <rect x="110" y="90" width="10" height="30" fill="{primary}" opacity="0.9"/>
                <path d="M160 120 L150 100 L170 100 Z" fill="{primary}" opacity="0.9"/>
            </g>"#,
            half = f64::from(h) / 2.0,
            primary = palette.primary,
            secondary = palette.secondary,
            background = palette.background,
        )
    }
}

pub fn geometric(palette: &Palette, cx: f64, cy: f64, style: Style, flags: PromptFlags) -> String {
    if flags.hexagon || style == Style::Cyberpunk {
        format!(
            r#"<!-- Hexagonal Grid Pattern -->
            <g transform="translate({cx}, {cy})">
                <path d="M-50 -87 L0 -100 L50 -87 L50 -50 L0 -37 L-50 -50 Z" fill="none" stroke="{primary}" stroke-width="2" opacity="0.8"/>
                <path d="M-50 -13 L0 -26 L50 -13 L50 24 L0 37 L-50 24 Z" fill="none" stroke="{primary}" stroke-width="2" opacity="0.8"/>
                <path d="M-50 61 L0 48 L50 61 L50 98 L0 111 L-50 98 Z" fill="none" stroke="{primary}" stroke-width="2" opacity="0.8"/>
                <circle cx="0" cy="0" r="30" fill="none" stroke="{secondary}" stroke-width="2"/>
                <circle cx="0" cy="0" r="20" fill="url(#primaryGradient)" opacity="0.7"/>
            </g>"#,
            primary = palette.primary,
            secondary = palette.secondary,
        )
    } else if flags.triangle {
        format!(
            r#"<!-- Triangle Pattern -->
            <g transform="translate({cx}, {cy})">
                <path d="M0 -70 L60 40 L-60 40 Z" fill="none" stroke="{primary}" stroke-width="2"/>
                <path d="M0 -40 L35 22 L-35 22 Z" fill="{primary}" opacity="0.3"/>
                <path d="M0 70 L-60 -40 L60 -40 Z" fill="none" stroke="{secondary}" stroke-width="2"/>
                <path d="M0 40 L-35 -22 L35 -22 Z" fill="{secondary}" opacity="0.3"/>
            </g>"#,
            primary = palette.primary,
            secondary = palette.secondary,
        )
    } else if flags.circle {
        format!(
            r#"<!-- Circular Pattern -->
            <g transform="translate({cx}, {cy})">
                <circle cx="0" cy="0" r="60" fill="none" stroke="{primary}" stroke-width="2"/>
                <circle cx="0" cy="0" r="45" fill="none" stroke="{accent}" stroke-width="1" stroke-dasharray="4,2"/>
                <circle cx="0" cy="0" r="30" fill="{secondary}" opacity="0.2"/>
                <circle cx="0" cy="0" r="15" fill="{primary}" opacity="0.5"/>
            </g>"#,
            primary = palette.primary,
            secondary = palette.secondary,
            accent = palette.accent,
        )
    } else {
        format!(
            r#"<!-- Mixed Geometric Pattern -->
            <g transform="translate({cx}, {cy})">
                <rect x="-50" y="-50" width="100" height="100" fill="none" stroke="{primary}" stroke-width="2" rx="5"/>
                <circle cx="0" cy="0" r="30" fill="none" stroke="{secondary}" stroke-width="2"/>
                <path d="M-20 -20 L20 -20 L0 20 Z" fill="{accent}" opacity="0.5"/>
            </g>"#,
            primary = palette.primary,
            secondary = palette.secondary,
            accent = palette.accent,
        )
    }
}

pub fn gear(palette: &Palette, dims: Dimensions, cx: f64, cy: f64, teeth: u32) -> String {
    let outer_radius = dims.min_side() * 0.30;
    let d = geometry::gear_path(cx, cy, outer_radius, teeth);
    format!(
        r#"<!-- Gear -->
        <g>
             <path d="{d}" fill="{primary}" stroke="{secondary}" stroke-width="1.5" fill-rule="evenodd"/>
        </g>"#,
        primary = palette.primary,
        secondary = palette.secondary,
    )
}

pub fn arrow(palette: &Palette, dims: Dimensions, cx: f64, cy: f64) -> String {
    let length = dims.min_side() * 0.6;
    let head = length * 0.25;
    let stroke_width = (length * 0.05).max(2.0);
    format!(
        r#"<!-- Arrow -->
        <g transform="translate({x}, {cy})" fill="{primary}" stroke="{secondary}" stroke-width="{stroke_width}">
            <line x1="0" y1="0" x2="{shaft}" y2="0" />
            <polygon points="{shaft},-{half_head} {length},0 {shaft},{half_head}" />
        </g>"#,
        x = cx - length / 2.0,
        shaft = length - head,
        half_head = head * 0.7,
        primary = palette.primary,
        secondary = palette.secondary,
    )
}

pub fn cloud(palette: &Palette, dims: Dimensions, cx: f64, cy: f64, style: Style) -> String {
    let w = dims.min_side() * 0.5;
    let h = w * 0.6;
    let opacity = if style == Style::FlatDesign { 1.0 } else { 0.8 };

    let mut fragment = format!(
        r#"<!-- Cloud -->
        <g transform="translate({x}, {y})" fill="{primary}" opacity="{opacity}">
            <circle cx="{c1x}" cy="{c1y}" r="{r1}" />
            <circle cx="{c2x}" cy="{c2y}" r="{r2}" />
            <circle cx="{c3x}" cy="{c3y}" r="{r3}" />
            <rect x="{rx}" y="{ry}" width="{rw}" height="{rh}" rx="5"/>
        </g>"#,
        x = cx - w / 2.0,
        y = cy - h / 2.0,
        c1x = w * 0.3,
        c1y = h * 0.6,
        r1 = w * 0.25,
        c2x = w * 0.5,
        c2y = h * 0.4,
        r2 = w * 0.3,
        c3x = w * 0.7,
        c3y = h * 0.7,
        r3 = w * 0.28,
        rx = w * 0.2,
        ry = h * 0.5,
        rw = w * 0.6,
        rh = h * 0.4,
        primary = palette.primary,
    );

    if style == Style::Nature {
        fragment.push_str(&format!(
            r#"<path d="M {x1} {y1} Q {cx} {qy} {x2} {y1}" stroke="{secondary}" stroke-width="2" fill="none" opacity="0.5"/>"#,
            x1 = cx - w * 0.2,
            y1 = cy + h * 0.3,
            qy = cy + h * 0.4,
            x2 = cx + w * 0.2,
            secondary = palette.secondary,
        ));
    }

    fragment
}

fn heart_path(size: f64) -> String {
    format!(
        "M0,{n4} A{r},{r} 0 0,1 {p2},{n6} A{r},{r} 0 0,1 {p4},{n4} L0,{p4b} L{n4b},{n4} A{r},{r} 0 0,1 {n2},{n6} A{r},{r} 0 0,1 0,{n4} Z",
        r = size * 0.2,
        p2 = size * 0.2,
        p4 = size * 0.4,
        p4b = size * 0.4,
        n2 = -size * 0.2,
        n4 = -size * 0.4,
        n4b = -size * 0.4,
        n6 = -size * 0.6,
    )
}

pub fn heart(palette: &Palette, dims: Dimensions, cx: f64, cy: f64, style: Style) -> String {
    let size = dims.min_side() * 0.4;
    let d = heart_path(size);

    let mut fragment = format!(
        r#"<!-- Heart -->
        <g transform="translate({cx}, {y})">
             <path d="{d}" fill="{primary}" stroke="{secondary}" stroke-width="1.5"/>
        </g>"#,
        y = cy - size * 0.1,
        primary = palette.primary,
        secondary = palette.secondary,
    );

    if style == Style::Retro {
        fragment.push_str(&format!(
            r#"<path transform="translate({x}, {y})" d="{d}" fill="{accent}" opacity="0.3"/>"#,
            x = cx + size * 0.05,
            y = cy - size * 0.05,
            accent = palette.accent,
        ));
    }

    fragment
}

pub fn star(
    palette: &Palette,
    dims: Dimensions,
    cx: f64,
    cy: f64,
    points: u32,
    style: Style,
    sparkle: bool,
) -> String {
    let outer_radius = dims.min_side() * 0.3;
    let vertices = geometry::star_points(cx, cy, outer_radius, points);

    let mut fragment = format!(
        r#"<!-- Star -->
        <polygon points="{vertices}" fill="{primary}" stroke="{secondary}" stroke-width="1.5"/>"#,
        primary = palette.primary,
        secondary = palette.secondary,
    );

    if style == Style::Fantasy || sparkle {
        fragment.push_str(&format!(
            r#"<polygon points="{vertices}" fill="none" stroke="{accent}" stroke-width="3" filter="url(#glow)" opacity="0.5" transform="scale(0.95)" transform-origin="{cx} {cy}"/>"#,
            accent = palette.accent,
        ));
    }

    fragment
}

/// Fallback content when no object matched: one distinct rendering per
/// style for cyberpunk, minimalist, retro and art deco, plus a generic
/// default for everything else.
pub fn abstract_fallback(palette: &Palette, dims: Dimensions, cx: f64, cy: f64, style: Style) -> String {
    match style {
        Style::Cyberpunk => format!(
            r#"<!-- Cyberpunk Abstract Design -->
            <g transform="translate({cx}, {cy})">
                <path d="M-50 -87 L0 -100 L50 -87 L50 -50 L0 -37 L-50 -50 Z" fill="none" stroke="{primary}" stroke-width="2" opacity="0.8"/>
                <path d="M-50 -13 L0 -26 L50 -13 L50 24 L0 37 L-50 24 Z" fill="none" stroke="{primary}" stroke-width="2" opacity="0.8"/>
                <path d="M-50 61 L0 48 L50 61 L50 98 L0 111 L-50 98 Z" fill="none" stroke="{primary}" stroke-width="2" opacity="0.8"/>
                <circle cx="0" cy="0" r="40" fill="none" stroke="{secondary}" stroke-width="3" stroke-dasharray="1,1"/>
                <circle cx="0" cy="0" r="30" fill="none" stroke="{accent}" stroke-width="2"/>
                <circle cx="0" cy="0" r="20" fill="url(#primaryGradient)" filter="url(#glow)"/>
                <path d="M-100 0 L-50 0 M50 0 L100 0 M0 -100 L0 -50 M0 50 L0 100" stroke="{accent}" stroke-width="2" opacity="0.8"/>
            </g>"#,
            primary = palette.primary,
            secondary = palette.secondary,
            accent = palette.accent,
        ),
        Style::Minimalist => format!(
            r#"<!-- Minimalist Abstract Design -->
            <g transform="translate({cx}, {cy})">
                <rect x="-40" y="-40" width="80" height="80" fill="none" stroke="{primary}" stroke-width="2"/>
                <circle cx="0" cy="0" r="25" fill="{accent}" opacity="0.8"/>
                <line x1="-60" y1="-60" x2="60" y2="60" stroke="{primary}" stroke-width="1.5"/>
                <line x1="-60" y1="60" x2="60" y2="-60" stroke="{primary}" stroke-width="1.5"/>
            </g>"#,
            primary = palette.primary,
            accent = palette.accent,
        ),
        Style::Retro => format!(
            r#"<!-- Retro Abstract Design -->
            <g transform="translate({cx}, {cy})" filter="url(#pixelate)">
                <rect x="-50" y="-50" width="100" height="100" fill="{secondary}" stroke="{primary}" stroke-width="4"/>
                <circle cx="0" cy="0" r="30" fill="{primary}"/>
                <path d="M-30 -30 L30 30 M-30 30 L30 -30" stroke="{accent}" stroke-width="5"/>
            </g>"#,
            primary = palette.primary,
            secondary = palette.secondary,
            accent = palette.accent,
        ),
        Style::ArtDeco => art_deco_abstract(palette, dims, cx, cy),
        _ => format!(
            r#"<!-- Generic Abstract Design -->
            <g transform="translate({cx}, {cy})">
                <path d="M-50 -50 C-30 -70, 30 -70, 50 -50 C70 -30, 70 30, 50 50 C30 70, -30 70, -50 50 C-70 30, -70 -30, -50 -50 Z"
                      fill="none" stroke="{primary}" stroke-width="2"/>
                <circle cx="0" cy="0" r="30" fill="{secondary}" opacity="0.3"/>
                <path d="M-25 0 A25 25 0 0 0 25 0" fill="none" stroke="{accent}" stroke-width="2"/>
                <path d="M-25 0 A25 25 0 0 1 25 0" fill="none" stroke="{accent}" stroke-width="2"/>
            </g>"#,
            primary = palette.primary,
            secondary = palette.secondary,
            accent = palette.accent,
        ),
    }
}

fn art_deco_abstract(palette: &Palette, dims: Dimensions, cx: f64, cy: f64) -> String {
    let w = f64::from(dims.width);
    let h = f64::from(dims.height);
    let min = dims.min_side();

    // Twelve radiating sunburst lines from the center.
    let sunburst: String = (0..12)
        .map(|i| {
            let angle = f64::from(i) * std::f64::consts::TAU / 12.0;
            format!(
                r#"<line x1="0" y1="0" x2="{x2:.2}" y2="{y2:.2}" stroke="{accent}" stroke-width="1.5" opacity="0.7"/>"#,
                x2 = angle.cos() * w * 0.35,
                y2 = angle.sin() * h * 0.35,
                accent = palette.accent,
            )
        })
        .collect();

    let frame_x = w * 0.3;
    let frame_y = h * 0.3;
    format!(
        r#"<!-- Art Deco Abstract Design -->
            <g transform="translate({cx}, {cy})">
                <path d="M {ax} 0 L {bx} 0 M 0 {ay} L 0 {by}" stroke="{secondary}" stroke-width="1" opacity="0.5"/>
                <rect x="-{frame_x}" y="-{frame_y}" width="{fw}" height="{fh}" fill="none" stroke="{primary}" stroke-width="3" rx="5"/>
                {sunburst}
                <circle cx="0" cy="0" r="{r1}" fill="{primary}" stroke="{accent}" stroke-width="2"/>
                <circle cx="0" cy="0" r="{r2}" fill="{background}"/>
                <rect x="-{c1}" y="-{c2}" width="15" height="15" fill="{accent}" opacity="0.6"/>
                <rect x="{c3}" y="-{c2}" width="15" height="15" fill="{accent}" opacity="0.6"/>
                <rect x="-{c1}" y="{c4}" width="15" height="15" fill="{accent}" opacity="0.6"/>
                <rect x="{c3}" y="{c4}" width="15" height="15" fill="{accent}" opacity="0.6"/>
            </g>"#,
        ax = -w * 0.4,
        bx = w * 0.4,
        ay = -h * 0.4,
        by = h * 0.4,
        fw = w * 0.6,
        fh = h * 0.6,
        r1 = min * 0.1,
        r2 = min * 0.05,
        c1 = frame_x - 5.0,
        c2 = frame_y - 5.0,
        c3 = frame_x - 20.0,
        c4 = frame_y - 20.0,
        primary = palette.primary,
        secondary = palette.secondary,
        accent = palette.accent,
        background = palette.background,
    )
}

/// Full-canvas rect pushed through the glitch displacement filter.
pub fn glitch_overlay(dims: Dimensions) -> String {
    format!(
        r#"<rect width="{w}" height="{h}" fill="none" stroke="none" filter="url(#glitchEffect)" opacity="0.7"/>"#,
        w = dims.width,
        h = dims.height,
    )
}

/// Glow-bordered inset rect for "glow"/"neon" prompts.
pub fn glow_border(palette: &Palette, dims: Dimensions) -> String {
    format!(
        r#"<rect x="30" y="30" width="{w}" height="{h}" fill="none" stroke="{accent}" stroke-width="2" filter="url(#glow)" opacity="0.7"/>"#,
        w = dims.width.saturating_sub(60),
        h = dims.height.saturating_sub(60),
        accent = palette.accent,
    )
}

/// Semi-transparent caption bar: truncated prompt text plus the
/// bracketed dominant style name, centered in monospace.
pub fn caption_bar(palette: &Palette, dims: Dimensions, caption: &str, style: Style) -> String {
    format!(
        r##"<rect x="10" y="{bar_y}" width="{bar_w}" height="25" fill="#000000" opacity="0.6" rx="3"/>
    <text x="50%" y="{text_y}" dominant-baseline="middle" text-anchor="middle" font-family="monospace" font-size="11px" fill="{text_fill}">{caption} [{style}]</text>"##,
        bar_y = i64::from(dims.height) - 35,
        bar_w = i64::from(dims.width) - 20,
        text_y = f64::from(dims.height) - 22.5,
        text_fill = palette.text,
        caption = escape_xml(caption),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn palette() -> Palette {
        catalog::palette(Style::General)
    }

    #[test]
    fn escape_covers_all_markup_characters() {
        assert_eq!(
            escape_xml(r#"<a & "b">"#),
            "&lt;a &amp; &quot;b&quot;&gt;"
        );
    }

    #[test]
    fn escape_handles_ampersand_first() {
        // Escaping must not double-escape entities it just produced.
        assert_eq!(escape_xml("&lt;"), "&amp;lt;");
    }

    #[test]
    fn defs_reference_all_filter_ids() {
        let defs = defs(&palette());
        for id in ["glow", "primaryGradient", "bgPattern", "glitchEffect", "pixelate"] {
            assert!(defs.contains(&format!("id=\"{id}\"")), "missing {id}");
        }
    }

    #[test]
    fn eye_scan_lines_are_conditional() {
        let p = palette();
        let calm = eye(&p, 150.0, 150.0, false);
        let scanning = eye(&p, 150.0, 150.0, true);
        assert!(!calm.contains("Q0 -5 40 0"));
        assert!(scanning.contains("Q0 -5 40 0"));
    }

    #[test]
    fn circuit_branches_on_cyberpunk() {
        let p = palette();
        let cyber = circuit(&p, 150.0, 150.0, Style::Cyberpunk);
        let clean = circuit(&p, 150.0, 150.0, Style::Nature);
        assert!(cyber.contains("stroke-dasharray=\"5,3\""));
        assert!(clean.contains("Circuit design - clean"));
    }

    #[test]
    fn star_gains_glow_outline_for_fantasy() {
        let p = palette();
        let d = Dimensions::default();
        let plain = star(&p, d, 150.0, 150.0, 5, Style::General, false);
        let fancy = star(&p, d, 150.0, 150.0, 5, Style::Fantasy, false);
        assert_eq!(plain.matches("<polygon").count(), 1);
        assert_eq!(fancy.matches("<polygon").count(), 2);
        assert!(fancy.contains("url(#glow)"));
    }

    #[test]
    fn cloud_is_opaque_only_in_flat_design() {
        let p = palette();
        let d = Dimensions::default();
        assert!(cloud(&p, d, 150.0, 150.0, Style::FlatDesign).contains("opacity=\"1\""));
        assert!(cloud(&p, d, 150.0, 150.0, Style::General).contains("opacity=\"0.8\""));
        assert!(cloud(&p, d, 150.0, 150.0, Style::Nature).contains("<path"));
    }

    #[test]
    fn abstract_fallback_has_distinct_styled_variants() {
        let p = palette();
        let d = Dimensions::default();
        let (cx, cy) = d.center();
        assert!(abstract_fallback(&p, d, cx, cy, Style::Retro).contains("pixelate"));
        assert!(abstract_fallback(&p, d, cx, cy, Style::ArtDeco)
            .matches("<line")
            .count()
            >= 12);
        assert!(abstract_fallback(&p, d, cx, cy, Style::General).contains("Generic Abstract"));
    }

    #[test]
    fn caption_bar_escapes_markup_in_caption() {
        let fragment = caption_bar(&palette(), Dimensions::default(), "a <b> \"c\"", Style::General);
        assert!(!fragment.contains("<b>"));
        assert!(fragment.contains("&lt;b&gt;"));
        assert!(fragment.contains("[general]"));
    }
}
