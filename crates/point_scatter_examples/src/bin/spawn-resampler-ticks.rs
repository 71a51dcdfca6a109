use glam::IVec2;
use point_scatter::prelude::*;
use point_scatter_examples::{init_tracing, render_layers_to_png, PointLayer, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let dimensions = Dimensions::new(120, 80);
    let mut rng = StdRng::seed_from_u64(1234);

    // Static decoration: trees via Poisson rule, grass via density rule.
    let trees = ObjectSpawner::try_new(dimensions, &SpawnRule::poisson(9.0), &mut rng)?;
    let grass = ObjectSpawner::try_new(dimensions, &SpawnRule::density(0.03), &mut rng)?;

    let mut tree_points = Vec::new();
    let mut grass_points = Vec::new();
    for x in 0..dimensions.width {
        for y in 0..dimensions.height {
            let pos = IVec2::new(x, y);
            if trees.should_place(pos, &mut rng) {
                tree_points.push(pos);
            } else if grass.should_place(pos, &mut rng) {
                grass_points.push(pos);
            }
        }
    }

    // Animated layer: blossoms refreshed every 15 ticks.
    let blossoms = PoissonDiskSampling::try_new(PoissonDiskConfig::new(dimensions, 6.15))?;
    let mut resampler = Resampler::try_new(blossoms, StdRng::seed_from_u64(99), 15)?;
    for _ in 0..40 {
        resampler.update(1);
    }
    info!(
        "{} trees, {} grass tufts, {} blossoms after {} refreshes.",
        tree_points.len(),
        grass_points.len(),
        resampler.points().len(),
        resampler.generation()
    );

    let config = RenderConfig::new(dimensions, 6).with_background([40, 30, 20]);
    render_layers_to_png(
        &[
            PointLayer {
                points: &grass_points,
                color: [90, 170, 60],
            },
            PointLayer {
                points: resampler.points(),
                color: [240, 150, 200],
            },
            PointLayer {
                points: &tree_points,
                color: [20, 110, 40],
            },
        ],
        &config,
        "spawn-resampler-ticks.png",
    )?;

    Ok(())
}
