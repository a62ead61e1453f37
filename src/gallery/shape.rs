use std::f32::consts::TAU;

use eframe::egui::{Pos2, Vec2};

use super::nodes::GalleryNode;
use super::physics::IMPACT_THRESHOLD;

pub const OUTLINE_SEGMENTS: usize = 32;

const DEFORM_GAIN: f32 = 0.025;
const DEFORM_CAP: f32 = 0.15;
const NOISE_SPREAD: f32 = 30.0;
const SECONDARY_WEIGHT: f32 = 0.4;
const SECONDARY_TIME_SCALE: f32 = 1.8;
const ALIGNMENT_DEADZONE: f32 = 0.2;
const BULGE_WEIGHT: f32 = 0.4;

/// Smooth pseudo-noise in `[0, 1]`.
fn noise(x: f32, y: f32, time: f32) -> f32 {
    let n = (x * 0.2 + time).sin() * (y * 0.2 + time * 0.7).cos();
    n * 0.5 + 0.5
}

fn wobble_offset(node: &GalleryNode, display_radius: f32, angle: f32, time: f32) -> f32 {
    let amount = display_radius * (node.impact_intensity * DEFORM_GAIN).min(DEFORM_CAP);
    let sample = node.noise_offset + Vec2::angled(angle) * NOISE_SPREAD;

    let primary = (noise(sample.x, sample.y, time) - 0.5) * amount;
    let secondary = (noise(sample.x * 0.5, sample.y * 0.5, time * SECONDARY_TIME_SCALE) - 0.5)
        * amount
        * SECONDARY_WEIGHT;
    primary + secondary
}

/// Flattens the side facing the last wall hit and bulges the opposite side.
fn impact_offset(node: &GalleryNode, display_radius: f32, angle: f32) -> f32 {
    let alignment = (angle - node.impact_direction.angle()).cos();
    let amount =
        (node.impact_intensity * display_radius * DEFORM_GAIN).min(display_radius * DEFORM_CAP);

    if alignment > ALIGNMENT_DEADZONE {
        -amount * alignment.powi(2)
    } else if alignment < -ALIGNMENT_DEADZONE {
        amount * BULGE_WEIGHT * (-alignment).powf(1.5)
    } else {
        0.0
    }
}

/// Vertices of a closed polygon around the node. A perfect circle unless the
/// node is still carrying impact energy.
pub fn organic_outline(
    node: &GalleryNode,
    display_radius: f32,
    timestamp_ms: f64,
    segments: usize,
) -> Vec<Pos2> {
    let segments = segments.max(3);
    let time = (timestamp_ms * f64::from(node.wobble_speed)) as f32;
    let deforming = node.impact_intensity > IMPACT_THRESHOLD;

    (0..segments)
        .map(|index| {
            let angle = (index as f32 / segments as f32) * TAU;
            let mut radius = display_radius;
            if deforming {
                radius += wobble_offset(node, display_radius, angle, time);
                radius += impact_offset(node, display_radius, angle);
            }
            node.pos + Vec2::angled(angle) * radius
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI};

    use eframe::egui::{pos2, vec2};

    use super::*;
    use crate::gallery::ARTWORKS;

    fn impacted_node(intensity: f32, direction: Vec2) -> GalleryNode {
        let mut node = GalleryNode::new(&ARTWORKS[0], pos2(200.0, 200.0), 12.0);
        node.impact_intensity = intensity;
        node.impact_direction = direction;
        node.noise_offset = vec2(431.0, 77.0);
        node
    }

    #[test]
    fn resting_node_outline_is_a_circle() {
        let node = impacted_node(0.05, vec2(1.0, 0.0));
        let outline = organic_outline(&node, 14.4, 12_345.0, OUTLINE_SEGMENTS);

        assert_eq!(outline.len(), OUTLINE_SEGMENTS);
        for vertex in outline {
            assert!((vertex.distance(node.pos) - 14.4).abs() < 1e-3);
        }
    }

    #[test]
    fn impact_flattens_facing_side_and_bulges_opposite() {
        let node = impacted_node(6.0, vec2(1.0, 0.0));

        assert!((impact_offset(&node, 12.0, 0.0) + 1.8).abs() < 1e-5);
        assert!((impact_offset(&node, 12.0, PI) - 0.72).abs() < 1e-5);
        assert_eq!(impact_offset(&node, 12.0, FRAC_PI_2), 0.0);
    }

    #[test]
    fn deformation_is_capped_relative_to_radius() {
        let node = impacted_node(500.0, vec2(0.0, -1.0));
        let cap = 12.0 * DEFORM_CAP;

        for step in 0..64 {
            let angle = step as f32 / 64.0 * TAU;
            assert!(impact_offset(&node, 12.0, angle).abs() <= cap + 1e-5);
            let wobble = wobble_offset(&node, 12.0, angle, step as f32 * 0.37);
            assert!(wobble.abs() <= cap * (0.5 + 0.5 * SECONDARY_WEIGHT) + 1e-5);
        }
    }

    #[test]
    fn impacted_outline_stays_near_display_radius() {
        let node = impacted_node(6.0, vec2(-1.0, 1.0).normalized());
        let outline = organic_outline(&node, 12.0, 48_000.0, OUTLINE_SEGMENTS);
        let limit = 12.0 * DEFORM_CAP * (1.0 + 0.5 + 0.5 * SECONDARY_WEIGHT);

        for vertex in outline {
            assert!((vertex.distance(node.pos) - 12.0).abs() <= limit + 1e-4);
        }
    }
}
