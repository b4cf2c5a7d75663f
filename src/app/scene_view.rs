//! Scene rendering for `ShowcaseApp`.
//!
//! Entities are projected through the session camera and drawn as flat
//! shapes: cans as rounded bodies with a label band whose texture scrolls
//! with the Y rotation, text as wrapped galleys.

use std::f32::consts::TAU;

use eframe::egui;

use folia_showcase::catalog::Variant;
use folia_showcase::scene::EntityId;
use folia_showcase::tween::EntityPose;
use folia_showcase::Frame;

use super::{color32, faded, ShowcaseApp};

/// Can body size in world units.
const CAN_WIDTH: f32 = 0.66;
const CAN_HEIGHT: f32 = 1.24;
const SPARKLE_COUNT: usize = 24;

/// Where an entity lands on screen.
struct Placement {
    center: egui::Pos2,
    /// Screen points per world unit at the entity's depth
    px_per_unit: f32,
}

impl ShowcaseApp {
    fn place(&self, rect: egui::Rect, pose: &EntityPose) -> Option<Placement> {
        let aspect = rect.width() / rect.height().max(1.0);
        let (ndc, scale) = self.showcase.project(pose.position, aspect)?;
        let half = rect.size() * 0.5;
        Some(Placement {
            center: rect.center() + egui::vec2(ndc[0] * half.x, -ndc[1] * half.y),
            px_per_unit: scale * half.y,
        })
    }

    /// Draw every visible entity, back to front.
    pub fn draw_scene(&mut self, ui: &mut egui::Ui, frame: &Frame) {
        let rect = ui.max_rect();
        let variant = self.showcase.active_variant();
        let limited = self.showcase.catalog().limited_edition();

        let mut order: Vec<&(EntityId, EntityPose)> = frame.poses.iter().collect();
        order.sort_by(|a, b| a.1.position[2].total_cmp(&b.1.position[2]));

        for (id, pose) in order {
            let Some(at) = self.place(rect, pose) else {
                continue;
            };
            match id {
                EntityId::CanGroup => {
                    self.draw_can(ui, &at, pose, variant);
                }
                EntityId::LimitedCanGroup if frame.limited_mounted => {
                    let body = self.draw_can(ui, &at, pose, limited);
                    if frame.sparkles {
                        draw_sparkles(ui, body, limited, ui.input(|i| i.time) as f32);
                    }
                    if self.showcase.spin_enabled() {
                        self.spin_handle(ui, body);
                    }
                }
                EntityId::LimitedCanGroup => {}
                EntityId::TitleText | EntityId::DescriptionText => draw_text(ui, &at, pose, variant),
                EntityId::Logo => draw_logo(ui, &at, pose),
            }
        }
    }

    fn draw_can(&self, ui: &egui::Ui, at: &Placement, pose: &EntityPose, variant: &Variant) -> egui::Rect {
        let size = egui::vec2(
            CAN_WIDTH * pose.scale[0] * at.px_per_unit,
            CAN_HEIGHT * pose.scale[1] * at.px_per_unit,
        );
        let body = egui::Rect::from_center_size(at.center, size);
        if size.x < 1.0 || size.y < 1.0 || pose.opacity <= 0.0 {
            return body;
        }
        let painter = ui.painter();
        let rounding = size.x * 0.18;
        painter.rect_filled(body, rounding, faded(variant.primary(), pose.opacity));

        let band = egui::Rect::from_min_max(
            egui::pos2(body.left(), body.top() + size.y * 0.22),
            egui::pos2(body.right(), body.bottom() - size.y * 0.22),
        );
        let tint = egui::Color32::WHITE.gamma_multiply(pose.opacity.clamp(0.0, 1.0));
        match self.swatches.get(variant.texture_path) {
            Some(tex) => {
                let u = (pose.rotation[1] / TAU).rem_euclid(1.0);
                let uv = egui::Rect::from_min_max(egui::pos2(u, 0.0), egui::pos2(u + 0.5, 1.0));
                painter.image(tex.id(), band, uv, tint);
            }
            None => {
                painter.rect_filled(band, 0.0, faded(variant.background(), pose.opacity));
            }
        }

        // Tilt around Z reads as a slanted highlight.
        let tilt = pose.rotation[2].sin() * size.x * 0.5;
        painter.line_segment(
            [
                egui::pos2(band.left() + size.x * 0.2 - tilt, body.top() + 4.0),
                egui::pos2(band.left() + size.x * 0.2 + tilt, body.bottom() - 4.0),
            ],
            egui::Stroke::new(2.0, egui::Color32::from_white_alpha(60)),
        );
        body
    }

    fn spin_handle(&mut self, ui: &mut egui::Ui, body: egui::Rect) {
        let response = ui.interact(body, ui.id().with("limited-spin"), egui::Sense::drag());
        if response.dragged() {
            self.showcase.drag_spin(response.drag_delta().x);
        }
        if response.drag_stopped() {
            self.showcase.release_spin();
        }
        if self.showcase.spin_grabbed() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }
    }
}

fn draw_text(ui: &egui::Ui, at: &Placement, pose: &EntityPose, variant: &Variant) {
    if pose.opacity <= 0.01 || pose.content.is_empty() {
        return;
    }
    let font_px = (pose.font_size * at.px_per_unit).max(1.0);
    let wrap = pose.max_width.map(|w| w * at.px_per_unit).unwrap_or(f32::INFINITY);
    let color = faded(variant.text_color(), pose.opacity);
    let painter = ui.painter();
    let galley = painter.layout(
        pose.content.clone(),
        egui::FontId::proportional(font_px),
        color,
        wrap,
    );
    let pos = at.center - galley.size() * 0.5;
    painter.galley(pos, galley, color);
}

fn draw_logo(ui: &egui::Ui, at: &Placement, pose: &EntityPose) {
    if pose.opacity <= 0.01 {
        return;
    }
    let radius = 0.35 * pose.scale[0] * at.px_per_unit;
    let painter = ui.painter();
    painter.circle_stroke(
        at.center,
        radius,
        egui::Stroke::new(2.0, egui::Color32::WHITE.gamma_multiply(pose.opacity)),
    );
    painter.text(
        at.center,
        egui::Align2::CENTER_CENTER,
        "F",
        egui::FontId::proportional(radius),
        egui::Color32::WHITE.gamma_multiply(pose.opacity),
    );
}

/// Twinkling points orbiting the limited-edition can.
fn draw_sparkles(ui: &egui::Ui, body: egui::Rect, variant: &Variant, time: f32) {
    let painter = ui.painter();
    let color = color32(variant.primary()).gamma_multiply(0.9);
    let radius = body.width().max(body.height()) * 0.7;
    for i in 0..SPARKLE_COUNT {
        let seed = i as f32 * 2.399;
        let angle = seed + time * 0.4;
        let r = radius * (0.6 + 0.4 * (seed * 3.1).sin().abs());
        let pos = body.center() + egui::vec2(angle.cos() * r, angle.sin() * r * 0.8);
        let twinkle = 0.5 + 0.5 * (time * 3.0 + seed).sin();
        painter.circle_filled(pos, 1.5 + 1.5 * twinkle, color.gamma_multiply(twinkle));
    }
}
