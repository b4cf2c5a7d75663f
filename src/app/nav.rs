//! Navigation dot strip for `ShowcaseApp`.

use eframe::egui;

use folia_showcase::Frame;

use super::ShowcaseApp;

const DOT_RADIUS: f32 = 5.0;
const DOT_SPACING: f32 = 22.0;
const EDGE_MARGIN: f32 = 28.0;

impl ShowcaseApp {
    /// Vertical dots along the right edge; clicking one queues a jump.
    pub fn draw_nav_dots(&mut self, ui: &mut egui::Ui, frame: &Frame) {
        let rect = ui.max_rect();
        let count = frame.dots.len();
        let top = rect.center().y - DOT_SPACING * (count.saturating_sub(1)) as f32 * 0.5;
        let x = rect.right() - EDGE_MARGIN;

        for (i, dot) in frame.dots.iter().enumerate() {
            let center = egui::pos2(x, top + DOT_SPACING * i as f32);
            let hit = egui::Rect::from_center_size(center, egui::vec2(DOT_SPACING, DOT_SPACING));
            let response = ui.interact(hit, ui.id().with(("nav-dot", i)), egui::Sense::click());

            let color = egui::Color32::WHITE.gamma_multiply(dot.opacity);
            ui.painter().circle_filled(center, DOT_RADIUS * dot.scale, color);

            let title = self
                .showcase
                .layout()
                .content(i)
                .map(|c| c.title.clone())
                .unwrap_or_else(|| format!("Section {}", i + 1));
            if response.on_hover_text(title).clicked() {
                self.pending.extend(self.showcase.dot_intent(i));
            }
        }
    }
}
