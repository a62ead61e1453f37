use std::f64::consts::TAU;

use eframe::egui::{Pos2, Vec2, pos2};
use rand::Rng;

use super::unit;

const STAR_COUNT: usize = 50;

#[derive(Clone, Debug)]
pub struct StarPoint {
    pub pos: Pos2,
    pub size: f32,
    opacity: f32,
    twinkle_speed: f64,
    twinkle_offset: f64,
}

impl StarPoint {
    /// Base opacity modulated by a slow sine twinkle between 0.4 and 1.0 of itself.
    pub fn opacity_at(&self, timestamp_ms: f64) -> f32 {
        let twinkle = (timestamp_ms * self.twinkle_speed + self.twinkle_offset).sin() * 0.3 + 0.7;
        self.opacity * twinkle as f32
    }
}

#[derive(Debug, Default)]
pub struct StarField {
    stars: Vec<StarPoint>,
}

impl StarField {
    pub fn regenerate<R: Rng + ?Sized>(&mut self, size: Vec2, rng: &mut R) {
        self.stars.clear();
        self.stars.reserve(STAR_COUNT);
        for _ in 0..STAR_COUNT {
            self.stars.push(StarPoint {
                pos: pos2(unit(rng) * size.x, unit(rng) * size.y),
                size: unit(rng) * 0.8 + 0.3,
                opacity: unit(rng) * 0.7 + 0.2,
                twinkle_speed: f64::from(unit(rng)) * 0.001 + 0.0005,
                twinkle_offset: f64::from(unit(rng)) * TAU,
            });
        }
    }

    pub fn stars(&self) -> &[StarPoint] {
        &self.stars
    }
}
