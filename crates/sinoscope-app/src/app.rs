use anyhow::Result;

use sinoscope_core::view::{ViewController, ViewModel};

use crate::convert::{frame_to_color_image, sinogram_to_color_image};
use crate::panels;

pub struct SinoscopeApp {
    pub controller: ViewController,
    /// Slider-driven selection; the only mutable piece of UI state.
    pub selected_angle: i32,
    pub view: ViewModel,
    pub sinogram_texture: egui::TextureHandle,
    pub preview_texture: Option<egui::TextureHandle>,
}

impl SinoscopeApp {
    pub fn new(ctx: &egui::Context, controller: ViewController) -> Result<Self> {
        let sinogram_texture = ctx.load_texture(
            "sinogram",
            sinogram_to_color_image(controller.sinogram()),
            egui::TextureOptions::NEAREST,
        );

        let selected_angle = controller.options().initial_angle as i32;
        let view = controller.on_angle_changed(selected_angle)?;

        let mut app = Self {
            controller,
            selected_angle,
            view,
            sinogram_texture,
            preview_texture: None,
        };
        app.update_preview_texture(ctx);
        Ok(app)
    }

    /// Re-derive the ViewModel for a newly selected angle and swap in the
    /// rotated-preview texture.
    ///
    /// The slider keeps the angle in range, so a rejection here is a
    /// programming error; it is logged loudly and the previous view stays.
    pub fn apply_angle(&mut self, ctx: &egui::Context, angle: i32) {
        match self.controller.on_angle_changed(angle) {
            Ok(view) => {
                self.view = view;
                self.update_preview_texture(ctx);
            }
            Err(e) => tracing::error!("angle change rejected: {e}"),
        }
    }

    fn update_preview_texture(&mut self, ctx: &egui::Context) {
        self.preview_texture = self.view.rotated_preview.as_ref().map(|preview| {
            ctx.load_texture(
                "rotated_preview",
                frame_to_color_image(&preview.frame),
                egui::TextureOptions::NEAREST,
            )
        });
    }
}

impl eframe::App for SinoscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::show(ctx, self);
    }
}
