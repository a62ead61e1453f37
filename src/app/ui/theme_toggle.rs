use eframe::egui::{self, Align2, Context, RichText, vec2};

use super::super::GalleryApp;

impl GalleryApp {
    pub(in crate::app) fn show_theme_toggle(&mut self, ctx: &Context) {
        egui::Area::new(egui::Id::new("theme_toggle"))
            .anchor(Align2::RIGHT_TOP, vec2(-16.0, 16.0))
            .show(ctx, |ui| {
                let button =
                    egui::Button::new(RichText::new(self.theme.toggle_icon()).size(22.0)).frame(false);
                if ui.add(button).on_hover_text("Toggle theme").clicked() {
                    self.toggle_theme(ctx);
                }
            });
    }

    fn toggle_theme(&mut self, ctx: &Context) {
        self.theme = self.theme.toggled();
        ctx.set_visuals(self.theme.visuals());
        if let Err(error) = self.theme.save(self.store.as_mut()) {
            log::error!("could not persist {} theme: {error}", self.theme.as_str());
        }
    }
}
