use anyhow::Result;
use eframe::egui;
use image::RgbaImage;
use log::debug;

/// Hook for inspecting the decoded icon before it is embedded.
pub trait Preview {
    fn show(&self, image: &RgbaImage) -> Result<()>;
}

/// Skips the preview. Used for headless runs.
pub struct NoPreview;

impl Preview for NoPreview {
    fn show(&self, _image: &RgbaImage) -> Result<()> {
        Ok(())
    }
}

/// Opens a native window showing the icon at 1:1 scale and blocks until it
/// is closed. Needs a display.
pub struct WindowPreview;

impl Preview for WindowPreview {
    fn show(&self, image: &RgbaImage) -> Result<()> {
        let (width, height) = image.dimensions();
        let color_image = egui::ColorImage::from_rgba_unmultiplied(
            [width as usize, height as usize],
            image.as_raw(),
        );

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([(width as f32).max(160.0) + 16.0, height as f32 + 48.0]),
            ..Default::default()
        };

        debug!("Opening preview window for {width}x{height} icon");
        eframe::run_native(
            "Icon preview",
            native_options,
            Box::new(move |cc| -> Result<Box<dyn eframe::App>, Box<dyn std::error::Error + Send + Sync>> {
                let texture =
                    cc.egui_ctx.load_texture("icon", color_image, egui::TextureOptions::NEAREST);
                Ok(Box::new(PreviewApp { texture, width, height }))
            }),
        )
        .map_err(|e| anyhow::anyhow!("Failed to run preview: {}", e))?;

        Ok(())
    }
}

struct PreviewApp {
    texture: egui::TextureHandle,
    width: u32,
    height: u32,
}

impl eframe::App for PreviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.label(format!("{} x {}", self.width, self.height));
            ui.separator();
            ui.image((self.texture.id(), self.texture.size_vec2()));
        });
    }
}
