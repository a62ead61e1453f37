use eframe::egui::{self, Context, Vec2};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::GalleryConfig;
use crate::gallery::{ARTWORKS, ConnectionSegment, NodeSet, PointerState, StarField};
use crate::store::{KeyValueStore, VisitedSet};
use crate::theme::Theme;

mod canvas;
mod images;
mod render_utils;
mod ui;

use images::ArtworkImages;

const FIRST_FRAME_DELTA_MS: f32 = 16.0;

pub struct GalleryApp {
    store: Box<dyn KeyValueStore>,
    visited: VisitedSet,
    theme: Theme,
    scene: Scene,
    images: ArtworkImages,
    lightbox: Option<usize>,
}

/// Everything the frame loop mutates, owned in one place.
struct Scene {
    nodes: Option<NodeSet>,
    stars: StarField,
    pointer: PointerState,
    hovered: Option<usize>,
    canvas_size: Vec2,
    last_frame_ms: Option<f64>,
    connections: Vec<ConnectionSegment>,
    rng: StdRng,
}

impl Scene {
    fn new(rng: StdRng) -> Self {
        Self {
            nodes: None,
            stars: StarField::default(),
            pointer: PointerState::default(),
            hovered: None,
            canvas_size: Vec2::ZERO,
            last_frame_ms: None,
            connections: Vec::new(),
            rng,
        }
    }

    fn frame_delta(&mut self, now_ms: f64) -> f32 {
        let delta = self
            .last_frame_ms
            .map_or(FIRST_FRAME_DELTA_MS, |last| (now_ms - last) as f32);
        self.last_frame_ms = Some(now_ms);
        delta
    }

    /// Nodes are seeded once from the first canvas size; later resizes only
    /// regenerate the star field.
    fn sync_canvas(&mut self, size: Vec2, visited: &VisitedSet) {
        if size != self.canvas_size {
            self.canvas_size = size;
            self.stars.regenerate(size, &mut self.rng);
        }

        if self.nodes.is_none() {
            self.nodes = Some(NodeSet::initialize(ARTWORKS, visited, size, &mut self.rng));
        }
    }
}

impl GalleryApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: GalleryConfig) -> Self {
        let store = config.open_store();
        let visited = VisitedSet::load(store.as_ref());
        let theme = config
            .theme_override
            .unwrap_or_else(|| Theme::load(store.as_ref()));
        cc.egui_ctx.set_visuals(theme.visuals());
        log::info!(
            "starting in {} theme with {}/{} artworks visited",
            theme.as_str(),
            visited.len(),
            ARTWORKS.len()
        );

        Self {
            store,
            visited,
            theme,
            scene: Scene::new(StdRng::from_entropy()),
            images: ArtworkImages::preload(&config, ARTWORKS),
            lightbox: None,
        }
    }
}

impl eframe::App for GalleryApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.images.poll(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.draw_canvas(ui));

        self.show_theme_toggle(ctx);
        self.show_lightbox(ctx);

        ctx.request_repaint();
    }
}
