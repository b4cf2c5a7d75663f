//! Showcase session: the one explicitly-owned state container.
//!
//! Owns the orchestrator (discrete section state) next to the continuous
//! per-frame loops (camera follow, background fade, dot highlights,
//! drag-spin). The loops read the current section; only
//! [`Showcase::navigate`] can change it.

use std::time::Instant;

use crate::catalog::{Catalog, CatalogError, Variant, VariantSelection};
use crate::color::{try_parse_hex, Rgba};
use crate::config::{ConfigError, ShowcaseConfig};
use crate::input::{DotState, NavDots};
use crate::orchestrator::{Navigation, NavigationIntent, Orchestrator};
use crate::scene::background::BackgroundFade;
use crate::scene::camera::CameraRig;
use crate::scene::spin::DragSpin;
use crate::scene::{EntityId, Layout, Panel, TableError, ViewportClass};
use crate::tween::{EntityPose, SceneTweens, Vec3};

#[derive(Debug, thiserror::Error)]
pub enum ShowcaseError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Target table error: {0}")]
    Table(#[from] TableError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub section: usize,
    pub animating: bool,
    pub poses: Vec<(EntityId, EntityPose)>,
    pub camera: Vec3,
    pub background: Rgba,
    pub dots: Vec<DotState>,
    /// Drag-spin angle, already folded into the limited-edition pose
    pub spin_angle: f32,
    /// Decorative particles around the limited-edition model
    pub sparkles: bool,
    pub limited_mounted: bool,
}

impl Frame {
    pub fn pose(&self, entity: EntityId) -> Option<&EntityPose> {
        self.poses.iter().find(|(id, _)| *id == entity).map(|(_, p)| p)
    }
}

pub struct Showcase {
    layout: Layout,
    orchestrator: Orchestrator<SceneTweens>,
    catalog: Catalog,
    selection: VariantSelection,
    viewport: ViewportClass,
    breakpoint: f32,
    /// Viewport class changed since the last frame
    viewport_dirty: bool,
    /// Entities still sit at the mount pose; the first frame tweens them in
    intro_pending: bool,
    camera: CameraRig,
    background: BackgroundFade,
    spin: DragSpin,
    dots: NavDots,
}

impl Showcase {
    pub fn new(config: &ShowcaseConfig) -> Result<Self, ShowcaseError> {
        config.validate()?;
        let catalog = Catalog::default();
        catalog.validate()?;

        let layout = config.build_layout()?;
        layout.validate()?;

        let viewport = ViewportClass::Desktop;
        let tweens = SceneTweens::new(&layout.mount_pose(viewport));
        let orchestrator =
            Orchestrator::new(layout.table.clone(), layout.total_sections, config.transition, tweens);

        let selection = VariantSelection::new(&catalog);
        let initial = try_parse_hex(&layout.initial_background).unwrap_or(Rgba::BLACK);
        let mut background = BackgroundFade::new(initial, config.background.rate);
        background.set_target(layout.backdrop(0).resolve(selection.active(&catalog)));

        let dots = NavDots::new(layout.total_sections, 0);

        Ok(Self {
            orchestrator,
            catalog,
            selection,
            viewport,
            breakpoint: config.mobile_breakpoint,
            viewport_dirty: false,
            intro_pending: true,
            camera: CameraRig::new(config.camera),
            background,
            spin: DragSpin::default(),
            dots,
            layout,
        })
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current_section(&self) -> usize {
        self.orchestrator.current_section()
    }

    pub fn is_animating(&self) -> bool {
        self.orchestrator.is_animating()
    }

    pub fn viewport(&self) -> ViewportClass {
        self.viewport
    }

    pub fn active_variant(&self) -> &'static Variant {
        self.selection.active(&self.catalog)
    }

    /// Panel for the current section, if it has one.
    pub fn panel(&self) -> Option<&Panel> {
        self.layout.panel(self.current_section())
    }

    pub fn orchestrator(&self) -> &Orchestrator<SceneTweens> {
        &self.orchestrator
    }

    /// Single entry point for every input adapter.
    pub fn navigate(&mut self, intent: NavigationIntent, now: Instant) -> Navigation {
        let outcome = self.orchestrator.handle(intent, self.viewport, now);
        if let Navigation::Accepted { to, .. } = outcome {
            self.intro_pending = false;
            self.dots.set_active(to, now);
        }
        outcome
    }

    /// Intent for a click on navigation dot `index`.
    pub fn dot_intent(&self, index: usize) -> Option<NavigationIntent> {
        self.dots.click(index)
    }

    /// Switch the active flavor. Section state is left alone.
    pub fn select_variant(&mut self, id: &str) -> bool {
        self.selection.select(&self.catalog, id)
    }

    /// Reclassify the viewport. A class change re-poses the current section
    /// on the next frame; in-flight transitions keep their gate.
    pub fn set_viewport_width(&mut self, width: f32) -> ViewportClass {
        let class = ViewportClass::from_width(width, self.breakpoint);
        if class != self.viewport {
            log::info!("Viewport class {:?} -> {:?} ({}px)", self.viewport, class, width);
            self.viewport = class;
            self.viewport_dirty = true;
        }
        class
    }

    /// Horizontal drag over the limited-edition model, in pixels.
    pub fn drag_spin(&mut self, dx: f32) {
        self.spin.drag(dx);
    }

    pub fn release_spin(&mut self) {
        self.spin.release();
    }

    pub fn spin_enabled(&self) -> bool {
        self.spin.is_enabled()
    }

    pub fn spin_grabbed(&self) -> bool {
        self.spin.is_grabbed()
    }

    /// Advance the continuous loops by one frame. `pointer` is normalized
    /// to `[-1, 1]` with Y up.
    pub fn frame(&mut self, now: Instant, dt: f32, pointer: [f32; 2]) -> Frame {
        let intro = std::mem::take(&mut self.intro_pending);
        let resized = std::mem::take(&mut self.viewport_dirty);
        if intro || resized {
            self.orchestrator.refresh(self.viewport, now);
        }
        self.orchestrator.tick(now);

        let section = self.orchestrator.current_section();
        let animating = self.orchestrator.is_animating();

        let backdrop = self.layout.backdrop(section).resolve(self.active_variant());
        self.background.set_target(backdrop);
        let background = self.background.step(dt);

        let camera = self.camera.step(pointer, section, self.layout.pinned_camera_section);

        let limited_mounted = self.layout.shows_limited_edition(section);
        if !limited_mounted {
            self.spin.reset();
        }
        self.spin.set_enabled(self.layout.spins_in(section));
        let spin_angle = self.spin.step(dt);

        let mut poses = self.orchestrator.driver().poses(now);
        let mut limited_visible = false;
        for (id, pose) in poses.iter_mut() {
            if *id == EntityId::LimitedCanGroup {
                pose.rotation[1] += spin_angle;
                limited_visible = pose.scale[0] > 0.0;
            }
        }

        Frame {
            section,
            animating,
            poses,
            camera,
            background,
            dots: self.dots.sample(now),
            spin_angle,
            sparkles: limited_mounted && limited_visible && !animating,
            limited_mounted,
        }
    }

    /// Project a world point for a viewport of the given aspect ratio.
    pub fn project(&self, point: Vec3, aspect: f32) -> Option<([f32; 2], f32)> {
        self.camera.project(point, aspect)
    }

    /// Teardown: cancels the pending settle timer. Safe to call twice.
    pub fn shutdown(&mut self) {
        self.orchestrator.dispose();
    }
}

impl Drop for Showcase {
    fn drop(&mut self) {
        self.shutdown();
    }
}
