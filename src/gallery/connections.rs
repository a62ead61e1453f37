use eframe::egui::{Pos2, Vec2};

use super::nodes::GalleryNode;

const BASE_ALPHA: f32 = 0.1;
const STRENGTH_ALPHA: f32 = 0.3;
const RESTING_ALPHA_SCALE: f32 = 0.6;
const HOVER_ALPHA_SCALE: f32 = 2.8;
const HOVER_ALPHA_CAP: f32 = 0.9;
const HOVER_WIDTH_SCALE: f32 = 2.5;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConnectionSegment {
    pub start: Pos2,
    pub end: Pos2,
    pub alpha: f32,
    pub width: f32,
}

/// Fills `out` with one segment per unordered node pair, edge to edge.
/// Closer pairs and pairs touching the hovered node draw stronger.
pub fn collect_connections(
    nodes: &[GalleryNode],
    hovered: Option<usize>,
    canvas: Vec2,
    out: &mut Vec<ConnectionSegment>,
) {
    out.clear();
    let pair_count = nodes.len() * nodes.len().saturating_sub(1) / 2;
    out.reserve(pair_count.saturating_sub(out.capacity()));

    let diagonal = canvas.length().max(1.0);

    for (i, from) in nodes.iter().enumerate() {
        for (j, to) in nodes.iter().enumerate().skip(i + 1) {
            let offset = to.pos - from.pos;
            let strength = 1.0 - (offset.length() / diagonal);
            let alpha = BASE_ALPHA + strength * STRENGTH_ALPHA;
            let width = 0.5 + strength * 0.5;

            let touches_hover = hovered.is_some_and(|index| index == i || index == j);
            let (alpha, width) = if touches_hover {
                (
                    (alpha * HOVER_ALPHA_SCALE).min(HOVER_ALPHA_CAP),
                    width * HOVER_WIDTH_SCALE,
                )
            } else {
                (alpha * RESTING_ALPHA_SCALE, width)
            };

            let direction = Vec2::angled(offset.angle());
            let start = from.pos + direction * from.display_radius(hovered == Some(i));
            let end = to.pos - direction * to.display_radius(hovered == Some(j));

            out.push(ConnectionSegment {
                start,
                end,
                alpha,
                width,
            });
        }
    }
}
