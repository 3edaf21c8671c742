use egui_plot::{Line, Plot, PlotImage, PlotPoint, PlotPoints};

use crate::app::SinoscopeApp;

const MARKER_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 160, 40);
const PROFILE_COLOR: egui::Color32 = egui::Color32::from_rgb(80, 180, 80);

pub fn show(ctx: &egui::Context, app: &mut SinoscopeApp) {
    egui::TopBottomPanel::top("angle_bar").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("Angle");
            let max_angle = app.controller.angle_count() as i32 - 1;
            let mut angle = app.selected_angle;
            if ui
                .add(egui::Slider::new(&mut angle, 0..=max_angle).suffix("\u{b0}"))
                .changed()
            {
                app.selected_angle = angle;
                app.apply_angle(ctx, angle);
            }
        });
        ui.add_space(4.0);
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        let half = ui.available_height() / 2.0;
        sinogram_plot(ui, app, half);
        profile_plot(ui, app);
    });
}

/// Sinogram overview: the full transform as an image with the selected
/// angle's marker line over it.
fn sinogram_plot(ui: &mut egui::Ui, app: &SinoscopeApp, height: f32) {
    let rect = app.view.sinogram_rect;
    let axes = app.view.sinogram_axes;
    let (cx, cy) = rect.center();

    let image = PlotImage::new(
        "sinogram",
        app.sinogram_texture.id(),
        PlotPoint::new(cx, cy),
        [rect.width() as f32, rect.height() as f32],
    );

    let marker = Line::new(
        "selected angle",
        PlotPoints::from(vec![
            [app.view.marker.x0, app.view.marker.y0],
            [app.view.marker.x1, app.view.marker.y1],
        ]),
    )
    .color(MARKER_COLOR)
    .width(1.5);

    Plot::new("sinogram_plot")
        .height(height)
        .include_x(axes.x_min)
        .include_x(axes.x_max)
        .include_y(axes.y_min)
        .include_y(axes.y_max)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_grid(false)
        .x_axis_label("Position (pixel)")
        .y_axis_label("Angle")
        .show(ui, |plot_ui| {
            plot_ui.image(image);
            plot_ui.line(marker);
        });
}

/// Per-angle projection profile, with the rotated source image under the
/// curve when the preview overlay is enabled.
fn profile_plot(ui: &mut egui::Ui, app: &SinoscopeApp) {
    let axes = app.view.profile_axes;

    let points: PlotPoints = app
        .view
        .profile
        .iter()
        .enumerate()
        .map(|(i, v)| [i as f64, *v as f64])
        .collect();
    let line = Line::new("profile", points).color(PROFILE_COLOR).width(1.5);

    Plot::new("profile_plot")
        .include_x(axes.x_min)
        .include_x(axes.x_max)
        .include_y(axes.y_min)
        .include_y(axes.y_max)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .x_axis_label("Position (pixel)")
        .y_axis_label("Line integral")
        .show(ui, |plot_ui| {
            if let (Some(texture), Some(preview)) =
                (&app.preview_texture, &app.view.rotated_preview)
            {
                let (cx, cy) = preview.rect.center();
                plot_ui.image(PlotImage::new(
                    "rotated preview",
                    texture.id(),
                    PlotPoint::new(cx, cy),
                    [preview.rect.width() as f32, preview.rect.height() as f32],
                ));
            }
            plot_ui.line(line);
        });
}
