use eframe::egui::{self, Context, Image, RichText, Vec2};

use super::super::GalleryApp;
use super::super::images::ArtworkImage;

const LIGHTBOX_FILL: f32 = 0.8;

fn fit_within(size: Vec2, max: Vec2) -> Vec2 {
    if size.x <= 0.0 || size.y <= 0.0 {
        return size;
    }
    let scale = (max.x / size.x).min(max.y / size.y).min(1.0);
    size * scale
}

impl GalleryApp {
    /// Modal artwork viewer. Backdrop click, Escape or the close button dismiss it.
    pub(in crate::app) fn show_lightbox(&mut self, ctx: &Context) {
        let Some(index) = self.lightbox else {
            return;
        };
        let Some(artwork) = self
            .scene
            .nodes
            .as_ref()
            .and_then(|nodes| nodes.get(index))
            .map(|node| node.artwork)
        else {
            self.lightbox = None;
            return;
        };

        let max_size = self.scene.canvas_size * LIGHTBOX_FILL;
        let mut close_clicked = false;
        let modal = egui::Modal::new(egui::Id::new("artwork_lightbox")).show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                match self.images.get(artwork.src) {
                    ArtworkImage::Ready(texture) => {
                        let size = fit_within(texture.size_vec2(), max_size);
                        ui.add(Image::new((texture.id(), size)));
                    }
                    ArtworkImage::Pending => {
                        ui.add_space(48.0);
                        ui.spinner();
                        ui.add_space(48.0);
                    }
                    ArtworkImage::Missing => {
                        ui.label("This artwork could not be loaded.");
                    }
                }

                ui.add_space(8.0);
                ui.label(RichText::new(artwork.title).size(18.0).color(artwork.accent));
                ui.add_space(6.0);
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });
        });

        if close_clicked || modal.should_close() {
            self.lightbox = None;
        }
    }
}
