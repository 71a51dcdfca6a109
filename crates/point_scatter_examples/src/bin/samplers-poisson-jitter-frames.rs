use point_scatter::prelude::*;
use point_scatter_examples::{init_tracing, render_layers_to_png, PointLayer, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

const FRAMES: usize = 4;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let dimensions = Dimensions::new(200, 120);
    let jitter = JitterDistribution::try_new(1.0, 2.0)?
        .with_mean(1.0)
        .with_clamp(-2.0, 3.5);
    jitter.validate()?;

    let strategy = PoissonDiskSampling::try_new(
        PoissonDiskConfig::new(dimensions, 18.5).with_jitter(jitter),
    )?;

    let mut rng = StdRng::seed_from_u64(7);
    let frames = sample_frames(&strategy, FRAMES, &mut rng);

    let config = RenderConfig::new(dimensions, 4).with_background([10, 14, 30]);
    for (i, frame) in frames.iter().enumerate() {
        render_layers_to_png(
            &[PointLayer {
                points: frame,
                color: [120, 160, 255],
            }],
            &config,
            format!("samplers-poisson-jitter-frame-{i}.png"),
        )?;
    }

    Ok(())
}
