//! Variant texture swatches.
//!
//! Decodes each variant's texture file on a background thread into an
//! RGBA buffer ready for egui. Missing or undecodable files are recorded
//! as failed; the caller falls back to the variant's primary color.

use std::collections::{HashMap, HashSet};
use std::sync::mpsc;

use eframe::egui;

/// Swatches are downscaled to at most this many pixels across.
const MAX_SWATCH: u32 = 256;

/// Decoded image data (RGBA).
pub struct SwatchData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Background texture loader keyed by file path.
pub struct SwatchLoader {
    pending: HashMap<String, mpsc::Receiver<Option<SwatchData>>>,
    textures: HashMap<String, egui::TextureHandle>,
    failed: HashSet<String>,
}

impl SwatchLoader {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
            textures: HashMap::new(),
            failed: HashSet::new(),
        }
    }

    /// Start decoding `path` unless it is already loaded, pending or failed.
    pub fn request(&mut self, path: &str) {
        if self.textures.contains_key(path) || self.pending.contains_key(path) || self.failed.contains(path) {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let path_owned = path.to_string();
        std::thread::spawn(move || {
            let _ = tx.send(decode(&path_owned));
        });
        self.pending.insert(path.to_string(), rx);
    }

    /// Upload finished decodes. Call every frame.
    pub fn poll(&mut self, ctx: &egui::Context) {
        let mut completed = Vec::new();
        for (path, rx) in &self.pending {
            let Ok(result) = rx.try_recv() else {
                continue;
            };
            match result {
                Some(data) => {
                    let image = egui::ColorImage::from_rgba_unmultiplied(
                        [data.width as usize, data.height as usize],
                        &data.rgba,
                    );
                    let tex = ctx.load_texture(path.clone(), image, egui::TextureOptions::LINEAR);
                    self.textures.insert(path.clone(), tex);
                }
                None => {
                    log::warn!("Texture unavailable, using color swatch: {}", path);
                    self.failed.insert(path.clone());
                }
            }
            completed.push(path.clone());
        }
        for path in completed {
            self.pending.remove(&path);
        }
    }

    pub fn get(&self, path: &str) -> Option<&egui::TextureHandle> {
        self.textures.get(path)
    }
}

fn decode(path: &str) -> Option<SwatchData> {
    let img = image::open(path).ok()?;
    let img = if img.width() > MAX_SWATCH || img.height() > MAX_SWATCH {
        img.thumbnail(MAX_SWATCH, MAX_SWATCH)
    } else {
        img
    };
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Some(SwatchData { width, height, rgba: rgba.into_raw() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loader_deduplicates() {
        let mut loader = SwatchLoader::new();
        loader.request("assets/textures/none.jpg");
        loader.request("assets/textures/none.jpg");
        assert_eq!(loader.pending.len(), 1);
    }

    #[test]
    fn missing_file_fails_decode() {
        assert!(decode("/nonexistent/folia/swatch.jpg").is_none());
    }

    #[test]
    fn decodes_and_downscales_png() {
        let path = std::env::temp_dir().join(format!("folia-swatch-{}.png", std::process::id()));
        let img = image::RgbaImage::from_pixel(512, 128, image::Rgba([200, 40, 90, 255]));
        img.save(&path).unwrap();
        let data = decode(path.to_str().unwrap());
        let _ = std::fs::remove_file(&path);
        let Some(data) = data else {
            panic!("Expected decoded swatch");
        };
        assert_eq!((data.width, data.height), (256, 64));
        assert_eq!(&data.rgba[..4], &[200, 40, 90, 255]);
    }
}
