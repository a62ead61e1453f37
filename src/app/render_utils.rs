use eframe::egui::epaint::Mesh;
use eframe::egui::{Color32, Painter, Pos2, Rect, Shape, Stroke};

use crate::gallery::{ConnectionSegment, GalleryNode, OUTLINE_SEGMENTS, StarPoint, organic_outline};
use crate::theme::Palette;

pub(super) fn with_alpha(color: Color32, alpha: f32) -> Color32 {
    let alpha = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

pub(super) fn to_screen(rect: Rect, local: Pos2) -> Pos2 {
    rect.min + local.to_vec2()
}

/// Triangle fan around `center`. The organic outline wraps its centre exactly
/// once, so the fan fills it correctly even where it is concave.
pub(super) fn fan_mesh(center: Pos2, outline: &[Pos2], color: Color32) -> Mesh {
    let mut mesh = Mesh::default();
    mesh.reserve_vertices(outline.len() + 1);
    mesh.reserve_triangles(outline.len());

    mesh.colored_vertex(center, color);
    for &point in outline {
        mesh.colored_vertex(point, color);
    }

    let count = outline.len() as u32;
    for index in 0..count {
        mesh.add_triangle(0, index + 1, (index + 1) % count + 1);
    }
    mesh
}

pub(super) fn draw_background(painter: &Painter, rect: Rect, palette: Palette) {
    painter.rect_filled(rect, 0.0, palette.background);
}

pub(super) fn draw_stars(
    painter: &Painter,
    rect: Rect,
    stars: &[StarPoint],
    now_ms: f64,
    palette: Palette,
) {
    for star in stars {
        let opacity = star.opacity_at(now_ms) * palette.star_opacity;
        let color = with_alpha(palette.star, opacity);
        painter.circle_filled(to_screen(rect, star.pos), star.size, color);
    }
}

pub(super) fn draw_connection(
    painter: &Painter,
    rect: Rect,
    segment: &ConnectionSegment,
    palette: Palette,
) {
    painter.line_segment(
        [to_screen(rect, segment.start), to_screen(rect, segment.end)],
        Stroke::new(segment.width, with_alpha(palette.connection, segment.alpha)),
    );
}

/// Visited nodes are filled, unvisited ones drawn hollow.
pub(super) fn draw_node(
    painter: &Painter,
    rect: Rect,
    node: &GalleryNode,
    hovered: bool,
    now_ms: f64,
    palette: Palette,
) {
    let outline = organic_outline(node, node.display_radius(hovered), now_ms, OUTLINE_SEGMENTS)
        .into_iter()
        .map(|point| to_screen(rect, point))
        .collect::<Vec<_>>();

    let color = with_alpha(palette.node, if hovered { 1.0 } else { 0.9 });
    if node.visited {
        painter.add(Shape::mesh(fan_mesh(to_screen(rect, node.pos), &outline, color)));
    } else {
        let width = if hovered { 1.8 } else { 1.2 };
        painter.add(Shape::closed_line(outline, Stroke::new(width, color)));
    }
}
