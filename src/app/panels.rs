//! Per-section overlay panels for `ShowcaseApp`.
//!
//! The panel is chosen by a direct lookup on the committed section, so it
//! switches as soon as a transition is accepted.

use eframe::egui;

use folia_showcase::catalog::Variant;
use folia_showcase::input::continue_intent;
use folia_showcase::scene::Panel;

use super::{color32, ShowcaseApp};

const LIFESTYLE_SCENES: [(&str, &str); 2] = [("garden", "Symmetrical Garden"), ("rooftop", "Rooftop Party")];
const STOCKISTS: [&str; 4] = ["Indomaret", "Alfamart", "Circle K", "Family Mart"];
const SWATCH_SIZE: f32 = 44.0;

impl ShowcaseApp {
    /// Draw the current section's panel, if it has one.
    pub fn draw_panel(&mut self, ctx: &egui::Context) {
        let Some(panel) = self.showcase.panel().cloned() else {
            return;
        };
        let variant = self.showcase.active_variant();
        let text = color32(variant.text_color());

        match &panel {
            Panel::Continue { label, .. } => {
                egui::Area::new(egui::Id::new("continue"))
                    .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -64.0))
                    .show(ctx, |ui| {
                        let button = egui::Button::new(egui::RichText::new(label).size(18.0))
                            .min_size(egui::vec2(220.0, 44.0))
                            .rounding(22.0);
                        if ui.add(button).clicked() {
                            self.pending.extend(continue_intent(&panel));
                        }
                    });
            }
            Panel::About => {
                overlay(ctx, "about", egui::Align2::LEFT_CENTER, |ui| {
                    ui.heading(egui::RichText::new("Our Process").color(text));
                    ui.label(egui::RichText::new("Small batches. Real fruit. Nothing you can't pronounce.").color(text));
                });
            }
            Panel::Configurator => self.draw_configurator(ctx, variant),
            Panel::Lifestyle => {
                overlay(ctx, "lifestyle", egui::Align2::RIGHT_BOTTOM, |ui| {
                    ui.label(egui::RichText::new("Choose your moment").color(text));
                    ui.horizontal(|ui| {
                        for (id, name) in LIFESTYLE_SCENES {
                            if ui.selectable_label(self.lifestyle_scene == id, name).clicked() {
                                self.lifestyle_scene = id;
                            }
                        }
                    });
                    if let Some((_, name)) = LIFESTYLE_SCENES.iter().find(|(id, _)| *id == self.lifestyle_scene) {
                        ui.heading(egui::RichText::new(*name).color(text));
                    }
                });
            }
            Panel::LimitedEdition => {
                let limited = self.showcase.catalog().limited_edition();
                overlay(ctx, "limited", egui::Align2::CENTER_TOP, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new("COMING SOON").color(egui::Color32::WHITE));
                        ui.heading(egui::RichText::new("LIMITED EDITION").size(32.0).color(egui::Color32::WHITE));
                        ui.label(egui::RichText::new(limited.display_name).color(color32(limited.text_color())));
                    });
                });
                if self.showcase.spin_enabled() {
                    overlay(ctx, "limited-hint", egui::Align2::CENTER_BOTTOM, |ui| {
                        ui.label(egui::RichText::new("GRAB CAN TO ROTATE").color(egui::Color32::WHITE));
                    });
                }
            }
            Panel::CallToAction => {
                overlay(ctx, "cta", egui::Align2::CENTER_BOTTOM, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading(egui::RichText::new("Find Folia at").color(egui::Color32::WHITE));
                        ui.horizontal(|ui| {
                            for name in STOCKISTS {
                                ui.label(egui::RichText::new(name).strong().color(egui::Color32::WHITE));
                            }
                        });
                        ui.add_space(8.0);
                        ui.small("Folia is a fictional brand created for portfolio purposes.");
                    });
                });
            }
        }
    }

    fn draw_configurator(&mut self, ctx: &egui::Context, active: &'static Variant) {
        let text = color32(active.text_color());

        overlay(ctx, "flavors", egui::Align2::CENTER_BOTTOM, |ui| {
            ui.horizontal(|ui| {
                for variant in self.showcase.catalog().variants() {
                    let (rect, response) =
                        ui.allocate_exact_size(egui::vec2(SWATCH_SIZE, SWATCH_SIZE), egui::Sense::click());
                    let painter = ui.painter();
                    match self.swatches.get(variant.texture_path) {
                        Some(tex) => {
                            let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                            painter.image(tex.id(), rect, uv, egui::Color32::WHITE);
                        }
                        None => {
                            painter.circle_filled(rect.center(), SWATCH_SIZE * 0.5, color32(variant.primary()));
                        }
                    }
                    if variant.id == active.id {
                        painter.circle_stroke(rect.center(), SWATCH_SIZE * 0.55, egui::Stroke::new(2.0, text));
                    }
                    let response = response.on_hover_text(variant.display_name);
                    if response.clicked() {
                        self.showcase.select_variant(variant.id);
                    }
                }
            });
        });

        overlay(ctx, "ingredients", egui::Align2::LEFT_CENTER, |ui| {
            ui.heading(egui::RichText::new("Ingredients").color(text));
            for ingredient in active.ingredients {
                ui.label(
                    egui::RichText::new(format!("{}: {}", ingredient.name, ingredient.description)).color(text),
                );
            }
        });

        overlay(ctx, "nutrition", egui::Align2::RIGHT_CENTER, |ui| {
            ui.heading(egui::RichText::new("Nutrition Facts").color(text));
            egui::Grid::new("nutrition-grid").num_columns(2).show(ui, |ui| {
                for (label, value) in [
                    ("Calories", active.nutrition.calories),
                    ("Total Sugars", active.nutrition.sugar),
                    ("Carbohydrates", active.nutrition.carbohydrates),
                ] {
                    ui.label(egui::RichText::new(label).color(text));
                    ui.label(egui::RichText::new(value).strong().color(text));
                    ui.end_row();
                }
            });
        });
    }
}

/// Borderless anchored overlay.
fn overlay(ctx: &egui::Context, id: &str, anchor: egui::Align2, add: impl FnOnce(&mut egui::Ui)) {
    let offset = egui::vec2(
        -anchor.x().to_sign() * 40.0,
        -anchor.y().to_sign() * 40.0,
    );
    egui::Area::new(egui::Id::new(id))
        .anchor(anchor, offset)
        .show(ctx, add);
}
