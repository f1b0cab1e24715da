//! Closed-form path geometry for the gear and star templates. Vertices
//! are ephemeral: computed, formatted to two decimals, and dropped.

use std::f64::consts::{PI, TAU};

/// Tooth height as a fraction of the outer radius; valleys are cut this
/// far inward.
const TOOTH_HEIGHT_RATIO: f64 = 0.20;
/// Central hole radius as a fraction of the outer radius.
const HOLE_RADIUS_RATIO: f64 = 0.25;
/// Angular subdivision of one tooth: valley start, tooth top start,
/// tooth top end, valley end.
const TOOTH_PHASES: [f64; 4] = [0.0, 0.25, 0.75, 1.0];

/// Inner vertex radius of a five-pointed star (golden-ratio proportion).
const FIVE_POINT_INNER_RATIO: f64 = 0.382;
/// Inner vertex radius for every other point count.
const DEFAULT_INNER_RATIO: f64 = 0.5;

fn vertex(cx: f64, cy: f64, radius: f64, angle: f64) -> (f64, f64) {
    (cx + radius * angle.cos(), cy + radius * angle.sin())
}

/// Path data for a gear with `teeth` teeth: the closed outer contour
/// (four vertices per tooth) followed by a circular hole sub-path drawn
/// as two opposing arcs. Rendered with `fill-rule="evenodd"` so the
/// hole cuts out.
pub fn gear_path(cx: f64, cy: f64, outer_radius: f64, teeth: u32) -> String {
    let tooth_height = outer_radius * TOOTH_HEIGHT_RATIO;
    let valley_radius = outer_radius - tooth_height;
    let hole_radius = outer_radius * HOLE_RADIUS_RATIO;
    let n = f64::from(teeth);

    let mut d = Vec::with_capacity(teeth as usize * 4 + 5);
    for i in 0..teeth {
        let base = f64::from(i);
        let angles = TOOTH_PHASES.map(|phase| (base + phase) / n * TAU);

        let (vx1, vy1) = vertex(cx, cy, valley_radius, angles[0]);
        let (tx1, ty1) = vertex(cx, cy, outer_radius, angles[1]);
        let (tx2, ty2) = vertex(cx, cy, outer_radius, angles[2]);
        let (vx2, vy2) = vertex(cx, cy, valley_radius, angles[3]);

        if i == 0 {
            d.push(format!("M {vx1:.2},{vy1:.2}"));
        } else {
            d.push(format!("L {vx1:.2},{vy1:.2}"));
        }
        d.push(format!("L {tx1:.2},{ty1:.2}"));
        d.push(format!("L {tx2:.2},{ty2:.2}"));
        d.push(format!("L {vx2:.2},{vy2:.2}"));
    }
    d.push("Z".to_string());

    // Hole sub-path: two half-circle arcs, closed.
    d.push(format!("M {:.2},{:.2}", cx + hole_radius, cy));
    d.push(format!(
        "A {hole_radius:.2},{hole_radius:.2} 0 1 0 {:.2},{cy:.2}",
        cx - hole_radius
    ));
    d.push(format!(
        "A {hole_radius:.2},{hole_radius:.2} 0 1 0 {:.2},{cy:.2}",
        cx + hole_radius
    ));
    d.push("Z".to_string());

    d.join(" ")
}

/// Inner radius for a star of `points` points.
pub fn star_inner_radius(outer_radius: f64, points: u32) -> f64 {
    if points == 5 {
        outer_radius * FIVE_POINT_INNER_RATIO
    } else {
        outer_radius * DEFAULT_INNER_RATIO
    }
}

/// `points` attribute for a star polygon: `2 * points` alternating
/// outer/inner vertices, rotated so one point faces straight up.
pub fn star_points(cx: f64, cy: f64, outer_radius: f64, points: u32) -> String {
    let inner_radius = star_inner_radius(outer_radius, points);
    let n = points * 2;

    (0..n)
        .map(|i| {
            let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
            let angle = f64::from(i) / f64::from(n) * TAU - PI / 2.0;
            let (x, y) = vertex(cx, cy, radius, angle);
            format!("{x:.2},{y:.2}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}
