//! PNG rendering and logging helpers shared by the example binaries.
use std::path::Path;

use glam::IVec2;
use image::{Rgb, RgbImage};
use point_scatter::sampling::Dimensions;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber honoring `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Image layout: one domain cell becomes a `scale x scale` pixel block.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub dimensions: Dimensions,
    pub scale: u32,
    pub background: [u8; 3],
}

impl RenderConfig {
    pub fn new(dimensions: Dimensions, scale: u32) -> Self {
        Self {
            dimensions,
            scale: scale.max(1),
            background: [24, 24, 32],
        }
    }

    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    fn image_size(&self) -> (u32, u32) {
        (
            self.dimensions.width.max(0) as u32 * self.scale,
            self.dimensions.height.max(0) as u32 * self.scale,
        )
    }
}

/// A set of points drawn in one color.
#[derive(Debug, Clone)]
pub struct PointLayer<'a> {
    pub points: &'a [IVec2],
    pub color: [u8; 3],
}

/// Paints each layer's points as filled cells, later layers on top.
pub fn render_layers_to_png(
    layers: &[PointLayer<'_>],
    config: &RenderConfig,
    path: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let (width, height) = config.image_size();
    anyhow::ensure!(width > 0 && height > 0, "cannot render an empty domain");

    let mut image = RgbImage::from_pixel(width, height, Rgb(config.background));

    for layer in layers {
        for point in layer.points {
            if !config.dimensions.contains(*point) {
                continue;
            }
            let x0 = point.x as u32 * config.scale;
            let y0 = point.y as u32 * config.scale;
            for dy in 0..config.scale {
                for dx in 0..config.scale {
                    image.put_pixel(x0 + dx, y0 + dy, Rgb(layer.color));
                }
            }
        }
    }

    image.save(path.as_ref())?;
    info!("Wrote {}.", path.as_ref().display());
    Ok(())
}
