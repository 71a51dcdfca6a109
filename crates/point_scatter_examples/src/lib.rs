#![forbid(unsafe_code)]

mod rendering;

pub use rendering::{init_tracing, render_layers_to_png, PointLayer, RenderConfig};
