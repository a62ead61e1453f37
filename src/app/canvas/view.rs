use eframe::egui::{self, Sense, Ui};

use crate::gallery::{advance, collect_connections};

use super::super::GalleryApp;
use super::super::render_utils::{draw_background, draw_connection, draw_node, draw_stars};

impl GalleryApp {
    /// One animation tick: clear, stars, physics, hover, connections, nodes.
    pub(in crate::app) fn draw_canvas(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());
        let painter = ui.painter_at(rect);

        let now_ms = ui.input(|input| input.time) * 1000.0;
        let delta_ms = self.scene.frame_delta(now_ms);
        self.scene.sync_canvas(rect.size(), &self.visited);
        if self.lightbox.is_none() {
            self.track_pointer(ui, rect);
        }

        let palette = self.theme.palette();
        draw_background(&painter, rect, palette);
        draw_stars(&painter, rect, self.scene.stars.stars(), now_ms, palette);

        let scene = &mut self.scene;
        let Some(nodes) = scene.nodes.as_mut() else {
            return;
        };

        advance(
            nodes.as_mut_slice(),
            &mut scene.pointer,
            scene.canvas_size,
            delta_ms,
        );
        scene.hovered = nodes.find_hovered(scene.pointer.pos);

        collect_connections(
            nodes.as_slice(),
            scene.hovered,
            scene.canvas_size,
            &mut scene.connections,
        );
        for segment in &scene.connections {
            draw_connection(&painter, rect, segment, palette);
        }

        for (index, node) in nodes.as_slice().iter().enumerate() {
            draw_node(&painter, rect, node, scene.hovered == Some(index), now_ms, palette);
        }

        if scene.hovered.is_some() && self.lightbox.is_none() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }

        if response.clicked_by(egui::PointerButton::Primary) {
            self.select_hovered();
        }
    }
}
