use eframe::egui::{Pos2, Vec2, pos2};

use super::nodes::{CollisionPhase, GalleryNode};

const RESTITUTION: f32 = 0.75;
const IMPACT_JOLT: f32 = 6.0;
pub(super) const IMPACT_THRESHOLD: f32 = 0.1;
const IMPACT_DECAY_PER_SEC: f32 = 0.1;
const VERTICAL_PADDING: f32 = 100.0;
const DRAG_FOLLOW: f32 = 0.02;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub pos: Pos2,
    pub last_pos: Pos2,
    pub down: bool,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            pos: pos2(-9999.0, -9999.0),
            last_pos: Pos2::ZERO,
            down: false,
        }
    }
}

impl PointerState {
    pub fn press(&mut self, pos: Pos2) {
        self.pos = pos;
        self.last_pos = pos;
        self.down = true;
    }

    pub fn release(&mut self) {
        self.down = false;
    }
}

/// One physics tick for every node. Positions integrate per frame, only the
/// impact decay is scaled to wall-clock time.
pub fn advance(nodes: &mut [GalleryNode], pointer: &mut PointerState, bounds: Vec2, delta_ms: f32) {
    let drag = if pointer.down {
        (pointer.pos - pointer.last_pos) * DRAG_FOLLOW
    } else {
        Vec2::ZERO
    };

    for node in nodes.iter_mut() {
        node.pos += node.velocity * delta_ms;
        bounce_off_walls(node, bounds);
        decay_impact(node, delta_ms);

        if pointer.down {
            node.pos += drag;
            clamp_into_bounds(node, bounds);
        }
    }

    pointer.last_pos = pointer.pos;
}

fn bounce_off_walls(node: &mut GalleryNode, bounds: Vec2) {
    let radius = node.radius;
    let mut wall = Vec2::ZERO;
    let mut hit = false;

    if node.pos.x <= radius {
        node.pos.x = radius;
        node.velocity.x = node.velocity.x.abs() * RESTITUTION;
        node.impact_intensity = IMPACT_JOLT;
        wall.x = -1.0;
        hit = true;
    } else if node.pos.x >= bounds.x - radius {
        node.pos.x = bounds.x - radius;
        node.velocity.x = -node.velocity.x.abs() * RESTITUTION;
        node.impact_intensity = IMPACT_JOLT;
        wall.x = 1.0;
        hit = true;
    }

    let top = VERTICAL_PADDING + radius;
    let bottom = bounds.y - VERTICAL_PADDING - radius;
    if node.pos.y <= top {
        node.pos.y = top;
        node.velocity.y = node.velocity.y.abs() * RESTITUTION;
        node.impact_intensity = node.impact_intensity.max(IMPACT_JOLT);
        wall.y = -1.0;
        hit = true;
    } else if node.pos.y >= bottom {
        node.pos.y = bottom;
        node.velocity.y = -node.velocity.y.abs() * RESTITUTION;
        node.impact_intensity = node.impact_intensity.max(IMPACT_JOLT);
        wall.y = 1.0;
        hit = true;
    }

    if hit {
        if node.phase == CollisionPhase::Free {
            log::debug!("{} left rest on wall hit {wall:?}", node.id());
        }
        node.impact_direction = wall;
        node.phase = CollisionPhase::Compressing;
    }
}

fn decay_impact(node: &mut GalleryNode, delta_ms: f32) {
    if node.impact_intensity > IMPACT_THRESHOLD {
        node.impact_intensity =
            (node.impact_intensity - IMPACT_DECAY_PER_SEC * (delta_ms / 1000.0)).max(0.0);
        node.phase = CollisionPhase::Recovering;
    } else {
        node.impact_intensity = 0.0;
        node.impact_direction = Vec2::ZERO;
        node.phase = CollisionPhase::Free;
    }
}

// min/max instead of clamp: a viewport narrower than the node must not panic.
fn clamp_into_bounds(node: &mut GalleryNode, bounds: Vec2) {
    let radius = node.radius;
    node.pos.x = node.pos.x.min(bounds.x - radius).max(radius);
    node.pos.y = node
        .pos
        .y
        .min(bounds.y - VERTICAL_PADDING - radius)
        .max(VERTICAL_PADDING + radius);
}

#[cfg(test)]
mod tests {
    use eframe::egui::vec2;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::gallery::{ARTWORKS, NodeSet};
    use crate::store::VisitedSet;

    const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

    fn node(x: f32, y: f32, radius: f32, velocity: Vec2) -> GalleryNode {
        let mut node = GalleryNode::new(&ARTWORKS[0], pos2(x, y), radius);
        node.velocity = velocity;
        node
    }

    fn in_bounds(node: &GalleryNode, bounds: Vec2) -> bool {
        let r = node.radius;
        node.pos.x >= r - 1e-3
            && node.pos.x <= bounds.x - r + 1e-3
            && node.pos.y >= VERTICAL_PADDING + r - 1e-3
            && node.pos.y <= bounds.y - VERTICAL_PADDING - r + 1e-3
    }

    #[test]
    fn left_wall_clamps_and_reflects_with_restitution() {
        let mut nodes = [node(5.0, 300.0, 12.0, vec2(-0.04, 0.0))];
        let mut pointer = PointerState::default();

        advance(&mut nodes, &mut pointer, BOUNDS, 16.0);

        assert_eq!(nodes[0].pos.x, 12.0);
        assert!((nodes[0].velocity.x - 0.04 * 0.75).abs() < 1e-6);
        assert_eq!(nodes[0].impact_direction, vec2(-1.0, 0.0));
        assert_eq!(nodes[0].phase, CollisionPhase::Recovering);
        assert!(nodes[0].impact_intensity > 5.99 && nodes[0].impact_intensity < IMPACT_JOLT);
    }

    #[test]
    fn right_and_bottom_walls_reflect_negative() {
        let mut nodes = [node(795.0, 495.0, 10.0, vec2(0.05, 0.02))];
        let mut pointer = PointerState::default();

        advance(&mut nodes, &mut pointer, BOUNDS, 16.0);

        let node = &nodes[0];
        assert_eq!(node.pos.x, 790.0);
        assert_eq!(node.pos.y, 490.0);
        assert!((node.velocity.x + 0.05 * 0.75).abs() < 1e-6);
        assert!((node.velocity.y + 0.02 * 0.75).abs() < 1e-6);
        assert_eq!(node.impact_direction, vec2(1.0, 1.0));
    }

    #[test]
    fn top_wall_respects_padding() {
        let mut nodes = [node(400.0, 90.0, 12.0, vec2(0.0, -0.03))];
        let mut pointer = PointerState::default();

        advance(&mut nodes, &mut pointer, BOUNDS, 16.0);

        assert_eq!(nodes[0].pos.y, 112.0);
        assert!((nodes[0].velocity.y - 0.03 * 0.75).abs() < 1e-6);
        assert_eq!(nodes[0].impact_direction, vec2(0.0, -1.0));
    }

    #[test]
    fn impact_decays_per_second_and_snaps_to_zero() {
        let mut nodes = [node(400.0, 300.0, 12.0, Vec2::ZERO)];
        nodes[0].impact_intensity = 0.15;
        nodes[0].impact_direction = vec2(1.0, 0.0);
        let mut pointer = PointerState::default();

        advance(&mut nodes, &mut pointer, BOUNDS, 1000.0);
        assert!((nodes[0].impact_intensity - 0.05).abs() < 1e-6);
        assert_eq!(nodes[0].phase, CollisionPhase::Recovering);

        advance(&mut nodes, &mut pointer, BOUNDS, 16.0);
        assert_eq!(nodes[0].impact_intensity, 0.0);
        assert_eq!(nodes[0].impact_direction, Vec2::ZERO);
        assert_eq!(nodes[0].phase, CollisionPhase::Free);
    }

    #[test]
    fn impact_never_goes_negative_on_long_frames() {
        let mut nodes = [node(400.0, 300.0, 12.0, Vec2::ZERO)];
        nodes[0].impact_intensity = 0.12;
        let mut pointer = PointerState::default();

        advance(&mut nodes, &mut pointer, BOUNDS, 5000.0);
        assert_eq!(nodes[0].impact_intensity, 0.0);
    }

    #[test]
    fn decay_is_frame_rate_independent() {
        let mut fast = [node(400.0, 300.0, 12.0, Vec2::ZERO)];
        let mut slow = [node(400.0, 300.0, 12.0, Vec2::ZERO)];
        fast[0].impact_intensity = 4.0;
        slow[0].impact_intensity = 4.0;
        let mut pointer = PointerState::default();

        for _ in 0..60 {
            advance(&mut fast, &mut pointer, BOUNDS, 1000.0 / 60.0);
        }
        for _ in 0..30 {
            advance(&mut slow, &mut pointer, BOUNDS, 1000.0 / 30.0);
        }

        assert!((fast[0].impact_intensity - 3.9).abs() < 1e-4);
        assert!((fast[0].impact_intensity - slow[0].impact_intensity).abs() < 1e-4);
    }

    #[test]
    fn drag_nudges_every_node_and_resets_last_position() {
        let mut nodes = [
            node(300.0, 300.0, 12.0, Vec2::ZERO),
            node(500.0, 250.0, 12.0, Vec2::ZERO),
        ];
        let mut pointer = PointerState::default();
        pointer.press(pos2(100.0, 100.0));
        pointer.pos = pos2(150.0, 80.0);

        advance(&mut nodes, &mut pointer, BOUNDS, 16.0);

        assert!((nodes[0].pos.x - 301.0).abs() < 1e-4);
        assert!((nodes[0].pos.y - 299.6).abs() < 1e-4);
        assert!((nodes[1].pos.x - 501.0).abs() < 1e-4);
        assert_eq!(pointer.last_pos, pointer.pos);

        pointer.release();
        advance(&mut nodes, &mut pointer, BOUNDS, 16.0);
        assert!((nodes[0].pos.x - 301.0).abs() < 1e-4);
    }

    #[test]
    fn positions_stay_in_bounds_under_random_motion() {
        let mut rng = StdRng::seed_from_u64(99);
        let bounds = vec2(640.0, 480.0);
        let mut set = NodeSet::initialize(ARTWORKS, &VisitedSet::default(), bounds, &mut rng);
        for node in set.as_mut_slice() {
            node.velocity = vec2(rng.gen_range(-2.0..2.0), rng.gen_range(-2.0..2.0));
        }
        let mut pointer = PointerState::default();
        pointer.press(pos2(320.0, 240.0));

        for _ in 0..500 {
            pointer.pos = pos2(rng.gen_range(-2000.0..2000.0), rng.gen_range(-2000.0..2000.0));
            let delta = rng.gen_range(1.0..64.0);
            advance(set.as_mut_slice(), &mut pointer, bounds, delta);

            for node in set.as_slice() {
                assert!(in_bounds(node, bounds), "node escaped: {:?}", node.pos);
                assert!(node.impact_intensity >= 0.0);
            }
        }
    }
}
