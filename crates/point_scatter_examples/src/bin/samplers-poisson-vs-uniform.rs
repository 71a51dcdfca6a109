use point_scatter::prelude::*;
use point_scatter_examples::{init_tracing, render_layers_to_png, PointLayer, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let dimensions = Dimensions::new(160, 90);
    let poisson = PoissonDiskSampling::try_new(PoissonDiskConfig::new(dimensions, 6.15))?;
    let uniform = UniformRandomSampling::try_new(dimensions, 0.05)?;

    let mut rng = StdRng::seed_from_u64(42);
    let blue = poisson.sample(&mut rng);
    let white = uniform.sample(&mut rng);
    info!(
        "Poisson disk: {} points, uniform: {} points.",
        blue.len(),
        white.len()
    );

    let config = RenderConfig::new(dimensions, 6);
    render_layers_to_png(
        &[PointLayer {
            points: &blue,
            color: [80, 220, 120],
        }],
        &config,
        "samplers-poisson.png",
    )?;
    render_layers_to_png(
        &[PointLayer {
            points: &white,
            color: [230, 80, 80],
        }],
        &config,
        "samplers-uniform.png",
    )?;

    Ok(())
}
