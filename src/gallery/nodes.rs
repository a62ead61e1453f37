use std::f32::consts::TAU;

use eframe::egui::{Pos2, Vec2, vec2};
use rand::Rng;

use super::artwork::Artwork;
use super::unit;
use crate::store::VisitedSet;

const BASE_RADIUS: f32 = 12.0;
const RADIUS_SPREAD: f32 = 10.0;
const MAX_SPEED: f32 = 0.08;
const RING_FRACTION: f32 = 0.3;
const RING_JITTER: f32 = 60.0;
const HOVER_MARGIN: f32 = 8.0;
pub const HOVER_SCALE: f32 = 1.2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollisionPhase {
    #[default]
    Free,
    Compressing,
    Recovering,
}

#[derive(Clone, Debug)]
pub struct GalleryNode {
    pub pos: Pos2,
    pub velocity: Vec2,
    pub radius: f32,
    pub visited: bool,
    pub artwork: &'static Artwork,
    pub impact_intensity: f32,
    pub impact_direction: Vec2,
    pub phase: CollisionPhase,
    pub noise_offset: Vec2,
    pub wobble_speed: f32,
}

impl GalleryNode {
    pub fn new(artwork: &'static Artwork, pos: Pos2, radius: f32) -> Self {
        Self {
            pos,
            velocity: Vec2::ZERO,
            radius,
            visited: false,
            artwork,
            impact_intensity: 0.0,
            impact_direction: Vec2::ZERO,
            phase: CollisionPhase::Free,
            noise_offset: Vec2::ZERO,
            wobble_speed: 0.004,
        }
    }

    pub fn id(&self) -> &'static str {
        self.artwork.src
    }

    pub fn display_radius(&self, hovered: bool) -> f32 {
        if hovered {
            self.radius * HOVER_SCALE
        } else {
            self.radius
        }
    }
}

/// The fixed set of gallery nodes, one per artwork, in catalog order.
#[derive(Debug, Default)]
pub struct NodeSet {
    nodes: Vec<GalleryNode>,
}

impl NodeSet {
    pub fn initialize<R: Rng + ?Sized>(
        artworks: &'static [Artwork],
        visited: &VisitedSet,
        size: Vec2,
        rng: &mut R,
    ) -> Self {
        let count = artworks.len();
        let center = (size * 0.5).to_pos2();
        let ring = size.x.min(size.y) * RING_FRACTION;

        let nodes = artworks
            .iter()
            .enumerate()
            .map(|(index, artwork)| {
                let angle = (index as f32 / count as f32) * TAU;
                let distance = ring + (unit(rng) - 0.5) * RING_JITTER;
                let pos = center + Vec2::angled(angle) * distance;
                let radius = BASE_RADIUS + (unit(rng) * RADIUS_SPREAD - RADIUS_SPREAD * 0.5);

                let mut node = GalleryNode::new(artwork, pos, radius);
                node.velocity = vec2(
                    (unit(rng) - 0.5) * MAX_SPEED,
                    (unit(rng) - 0.5) * MAX_SPEED,
                );
                node.visited = visited.contains(artwork.src);
                node.noise_offset = vec2(unit(rng) * 1000.0, unit(rng) * 1000.0);
                node.wobble_speed = 0.003 + unit(rng) * 0.002;
                node
            })
            .collect();

        Self { nodes }
    }

    #[cfg(test)]
    pub fn from_nodes(nodes: Vec<GalleryNode>) -> Self {
        Self { nodes }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn as_slice(&self) -> &[GalleryNode] {
        &self.nodes
    }

    pub fn as_mut_slice(&mut self) -> &mut [GalleryNode] {
        &mut self.nodes
    }

    pub fn get(&self, index: usize) -> Option<&GalleryNode> {
        self.nodes.get(index)
    }

    /// First node, in catalog order, whose centre lies within `radius + 8` of the pointer.
    pub fn find_hovered(&self, pointer: Pos2) -> Option<usize> {
        self.nodes
            .iter()
            .position(|node| node.pos.distance(pointer) < node.radius + HOVER_MARGIN)
    }

    /// Flags the node as visited and hands back the artwork id to persist.
    pub fn mark_visited(&mut self, index: usize) -> Option<&'static str> {
        let node = self.nodes.get_mut(index)?;
        node.visited = true;
        Some(node.id())
    }
}
