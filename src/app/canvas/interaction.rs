use eframe::egui::{Rect, Ui};

use crate::store::{KeyValueStore, VisitedSet};

use super::super::{GalleryApp, Scene};

impl GalleryApp {
    pub(in crate::app) fn track_pointer(&mut self, ui: &Ui, rect: Rect) {
        let (hover, pressed, released) = ui.input(|input| {
            (
                input.pointer.hover_pos(),
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
            )
        });

        let pointer = &mut self.scene.pointer;
        if let Some(screen) = hover {
            let local = (screen - rect.min).to_pos2();
            pointer.pos = local;
            if pressed && rect.contains(screen) {
                pointer.press(local);
            }
        }

        if released {
            pointer.release();
        }
    }

    pub(in crate::app) fn select_hovered(&mut self) {
        if let Some(index) = select_node(&mut self.scene, &mut self.visited, self.store.as_mut()) {
            self.lightbox = Some(index);
        }
    }
}

/// Marks the hovered node visited and persists it best-effort. Returns the
/// node to show in the lightbox; a failed write never undoes the selection.
fn select_node(
    scene: &mut Scene,
    visited: &mut VisitedSet,
    store: &mut dyn KeyValueStore,
) -> Option<usize> {
    let index = scene.hovered?;
    let id = scene.nodes.as_mut()?.mark_visited(index)?;

    visited.insert(id);
    match VisitedSet::record(store, id) {
        Ok(true) => log::info!("first visit to {id}"),
        Ok(false) => {}
        Err(error) => log::error!("could not persist visit to {id}: {error}"),
    }

    Some(index)
}
