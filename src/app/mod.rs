//! `ShowcaseApp`: the top-level egui application state.
//!
//! This module declares the `ShowcaseApp` struct, input collection and
//! the `eframe::App` impl. Drawing is split across the sibling modules:
//!
//! - `scene_view`: projected cans, 3-D text, logo and sparkles
//! - `panels`:     per-section 2-D overlay panels
//! - `nav`:        navigation dots
//! - `textures`:   background swatch decoding

pub mod nav;
pub mod panels;
pub mod scene_view;
pub mod textures;

use std::time::Instant;

use eframe::egui;

use folia_showcase::color::Rgba;
use folia_showcase::input::{key_intent, SwipeRecognizer, WheelAdapter};
use folia_showcase::{Frame, Navigation, NavigationIntent, Showcase};

use textures::SwatchLoader;

/// Keys polled every frame for navigation.
const NAV_KEYS: [egui::Key; 7] = [
    egui::Key::ArrowDown,
    egui::Key::PageDown,
    egui::Key::Space,
    egui::Key::ArrowUp,
    egui::Key::PageUp,
    egui::Key::Home,
    egui::Key::End,
];

// ─── Application state ───────────────────────────────────────────────────────

pub struct ShowcaseApp {
    pub showcase: Showcase,
    pub wheel: WheelAdapter,
    pub swipe: SwipeRecognizer,
    pub swatches: SwatchLoader,
    /// Backdrop picked in the lifestyle panel
    pub lifestyle_scene: &'static str,
    /// Intents raised by widgets this frame, applied after drawing
    pub pending: Vec<NavigationIntent>,
    pub last_frame: Instant,
}

impl ShowcaseApp {
    pub fn new(showcase: Showcase) -> Self {
        let mut swatches = SwatchLoader::new();
        for variant in showcase.catalog().variants() {
            swatches.request(variant.texture_path);
        }
        swatches.request(showcase.catalog().limited_edition().texture_path);

        Self {
            showcase,
            wheel: WheelAdapter,
            swipe: SwipeRecognizer::default(),
            swatches,
            lifestyle_scene: "garden",
            pending: Vec::new(),
            last_frame: Instant::now(),
        }
    }

    /// Wheel, keyboard and touch input for this frame.
    fn collect_input(&mut self, ctx: &egui::Context, now: Instant) {
        let total = self.showcase.layout().total_sections;
        let animating = self.showcase.is_animating();

        let (scroll_y, keys, events) = ctx.input(|i| {
            let keys: Vec<egui::Key> = NAV_KEYS.into_iter().filter(|k| i.key_pressed(*k)).collect();
            (i.raw_scroll_delta.y, keys, i.events.clone())
        });

        if let Some(intent) = self.wheel.on_egui_scroll(scroll_y, animating) {
            self.pending.push(intent);
        }
        for key in keys {
            if let Some(intent) = key_intent(key, total) {
                self.pending.push(intent);
            }
        }

        for event in events {
            let egui::Event::Touch { id, phase, pos, .. } = event else {
                continue;
            };
            match phase {
                egui::TouchPhase::Start => self.swipe.touch_start(pos.x, pos.y, id.0, now),
                egui::TouchPhase::End => {
                    if let Some(intent) = self.swipe.touch_end(pos.x, pos.y, id.0, now).and_then(|s| s.intent()) {
                        self.pending.push(intent);
                    }
                }
                egui::TouchPhase::Cancel => self.swipe.cancel(),
                egui::TouchPhase::Move => {}
            }
        }
    }

    fn apply_pending(&mut self, now: Instant) {
        for intent in self.pending.drain(..) {
            if let Navigation::Rejected(reason) = self.showcase.navigate(intent, now) {
                log::debug!("{:?} ignored: {:?}", intent, reason);
            }
        }
    }
}

pub fn color32(c: Rgba) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, c.a)
}

/// `c` with its alpha scaled by `opacity`.
pub fn faded(c: Rgba, opacity: f32) -> egui::Color32 {
    let a = (c.a as f32 * opacity.clamp(0.0, 1.0)).round() as u8;
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, a)
}

impl eframe::App for ShowcaseApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(0.1);
        self.last_frame = now;

        self.swatches.poll(ctx);

        let screen = ctx.screen_rect();
        self.showcase.set_viewport_width(screen.width());
        self.collect_input(ctx, now);
        self.apply_pending(now);

        let pointer = ctx
            .input(|i| i.pointer.hover_pos())
            .map(|p| {
                let half = screen.size() * 0.5;
                let rel = p - screen.center();
                [(rel.x / half.x).clamp(-1.0, 1.0), (-rel.y / half.y).clamp(-1.0, 1.0)]
            })
            .unwrap_or([0.0, 0.0]);

        let frame: Frame = self.showcase.frame(now, dt, pointer);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(color32(frame.background)))
            .show(ctx, |ui| {
                self.draw_scene(ui, &frame);
                self.draw_panel(ctx);
                self.draw_nav_dots(ui, &frame);
            });

        self.apply_pending(now);

        // Continuous loops (camera follow, background) never stop.
        ctx.request_repaint();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use folia_showcase::ShowcaseConfig;

    #[test]
    fn draws_every_section_headless() {
        let showcase = match Showcase::new(&ShowcaseConfig::default()) {
            Ok(s) => s,
            Err(e) => panic!("Expected a valid showcase: {e}"),
        };
        let mut app = ShowcaseApp::new(showcase);
        let ctx = egui::Context::default();
        let input = || egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(1280.0, 800.0))),
            ..Default::default()
        };

        let t0 = Instant::now();
        let total = app.showcase.layout().total_sections;
        for section in 0..total {
            let now = t0 + Duration::from_millis(2000 * section as u64);
            if section > 0 {
                assert!(app.showcase.navigate(NavigationIntent::JumpTo(section), now).is_accepted());
            }
            let frame = app.showcase.frame(now + Duration::from_millis(1600), 0.016, [0.0, 0.0]);
            let output = ctx.run(input(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    app.draw_scene(ui, &frame);
                    app.draw_panel(ctx);
                    app.draw_nav_dots(ui, &frame);
                });
            });
            assert_eq!(frame.section, section);
            assert!(!output.shapes.is_empty(), "section {section} drew nothing");
        }
    }
}
