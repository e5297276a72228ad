use eframe::App as EApp;
use egui::{Context, TextureHandle};

use crate::error::{CommitplotError, Result};
use crate::plotting::CHART_TITLE;

/// Window state for displaying an already rendered chart.
struct ViewerApp {
    png: Vec<u8>,
    texture: Option<TextureHandle>,
    error_message: Option<String>,
}

impl ViewerApp {
    fn new(png: Vec<u8>) -> Self {
        Self {
            png,
            texture: None,
            error_message: None,
        }
    }

    /// Decode the PNG and upload it as a texture on first use
    fn ensure_texture(&mut self, ctx: &Context) {
        if self.texture.is_some() || self.error_message.is_some() {
            return;
        }
        match image::load_from_memory(&self.png) {
            Ok(image) => {
                let size = [image.width() as usize, image.height() as usize];
                let pixels = image.to_rgba8();
                let pixels = pixels.as_flat_samples();
                let texture = ctx.load_texture(
                    "chart_texture",
                    egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice()),
                    egui::TextureOptions::LINEAR,
                );
                self.texture = Some(texture);
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to decode chart image: {}", e));
            }
        }
    }
}

impl EApp for ViewerApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.ensure_texture(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(texture) = &self.texture {
                ui.image(texture);
            } else if let Some(message) = &self.error_message {
                ui.label(message);
            }
        });
    }
}

/// Open a window showing the rendered chart and block until it is closed.
pub fn show_chart(png: Vec<u8>) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1240.0, 680.0])
            .with_title(CHART_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        CHART_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(ViewerApp::new(png)) as Box<dyn eframe::App>)),
    )
    .map_err(|e| CommitplotError::Render(e.to_string()))
}
