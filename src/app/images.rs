use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use anyhow::{Context as _, Result};
use eframe::egui::{ColorImage, Context, TextureHandle, TextureOptions};

use crate::config::GalleryConfig;
use crate::gallery::Artwork;

const MAX_TEXTURE_SIDE: u32 = 2048;

struct DecodedArtwork {
    src: &'static str,
    result: Result<ColorImage, String>,
}

pub(in crate::app) enum ArtworkImage<'a> {
    Pending,
    Ready(&'a TextureHandle),
    Missing,
}

/// Artwork textures decoded on a background thread and uploaded as they arrive.
pub(in crate::app) struct ArtworkImages {
    rx: Option<Receiver<DecodedArtwork>>,
    textures: HashMap<&'static str, TextureHandle>,
    missing: HashSet<&'static str>,
}

impl ArtworkImages {
    pub(in crate::app) fn preload(config: &GalleryConfig, artworks: &'static [Artwork]) -> Self {
        let jobs = artworks
            .iter()
            .map(|artwork| (artwork.src, config.resolve_asset(artwork.src)))
            .collect::<Vec<_>>();
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            for (src, path) in jobs {
                let result = decode_artwork(&path).map_err(|error| format!("{error:#}"));
                if tx.send(DecodedArtwork { src, result }).is_err() {
                    return;
                }
            }
        });

        Self {
            rx: Some(rx),
            textures: HashMap::new(),
            missing: HashSet::new(),
        }
    }

    pub(in crate::app) fn poll(&mut self, ctx: &Context) {
        let Some(rx) = &self.rx else {
            return;
        };

        let textures = &mut self.textures;
        let missing = &mut self.missing;
        let mut finished = false;
        loop {
            match rx.try_recv() {
                Ok(DecodedArtwork {
                    src,
                    result: Ok(image),
                }) => {
                    let texture = ctx.load_texture(src, image, TextureOptions::LINEAR);
                    textures.insert(src, texture);
                }
                Ok(DecodedArtwork {
                    src,
                    result: Err(error),
                }) => {
                    log::warn!("artwork {src} unavailable: {error}");
                    missing.insert(src);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    finished = true;
                    break;
                }
            }
        }

        if finished {
            log::debug!(
                "artwork preload done: {} ready, {} missing",
                self.textures.len(),
                self.missing.len()
            );
            self.rx = None;
        }
    }

    pub(in crate::app) fn get(&self, src: &str) -> ArtworkImage<'_> {
        if let Some(texture) = self.textures.get(src) {
            ArtworkImage::Ready(texture)
        } else if self.missing.contains(src) || self.rx.is_none() {
            ArtworkImage::Missing
        } else {
            ArtworkImage::Pending
        }
    }
}

fn decode_artwork(path: &Path) -> Result<ColorImage> {
    let image =
        image::open(path).with_context(|| format!("failed to decode {}", path.display()))?;
    let image = if image.width() > MAX_TEXTURE_SIDE || image.height() > MAX_TEXTURE_SIDE {
        image.thumbnail(MAX_TEXTURE_SIDE, MAX_TEXTURE_SIDE)
    } else {
        image
    };

    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_png_into_color_image() {
        let dir = tempfile::tempdir().expect("tmpdir");
        let path = dir.path().join("tiny.png");
        image::RgbaImage::from_pixel(4, 3, image::Rgba([255, 0, 0, 255]))
            .save(&path)
            .expect("write png");

        let decoded = decode_artwork(&path).expect("decode");
        assert_eq!(decoded.size, [4, 3]);
    }

    #[test]
    fn oversized_images_are_scaled_down() {
        let dir = tempfile::tempdir().expect("tmpdir");
        let path = dir.path().join("wide.png");
        image::RgbaImage::new(MAX_TEXTURE_SIDE * 2, 8)
            .save(&path)
            .expect("write png");

        let decoded = decode_artwork(&path).expect("decode");
        assert_eq!(decoded.size[0], MAX_TEXTURE_SIDE as usize);
        assert!(decoded.size[1] <= 8);
    }

    #[test]
    fn missing_file_reports_path() {
        let error = decode_artwork(Path::new("/definitely/not/here.jpg")).expect_err("missing");
        assert!(format!("{error:#}").contains("/definitely/not/here.jpg"));
    }
}
