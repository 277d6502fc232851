//! Viewport demo — composes a model-view-projection chain and logs it.
//!
//! Builds a 2D projection for a 1280×720 surface, a model transform
//! (scale, then a quarter-turn about Z, then a translate), applies the
//! composed chain to a few points, and dumps each matrix at debug level.
//! Run with `RUST_LOG=viewport_demo=info,linmath=debug` to see the matrix
//! dumps.

use std::f32::consts::FRAC_PI_4;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use linmath::{Mat4, Vec3, checked};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("viewport_demo=info".parse()?)
                .add_directive("linmath=debug".parse()?),
        )
        .init();

    info!("viewport demo starting");

    let projection = Mat4::viewport_2d(1280.0, 720.0);
    info!("projection for a 1280x720 surface:");
    projection.print();

    // Model transform: scale first, then rotate, then translate. With
    // column vectors the rightmost factor applies first.
    let mut model = Mat4::from_translation(Vec3::new(0.25, -0.1, 0.0));
    model *= Mat4::from_rotation_z(FRAC_PI_4);
    model *= Mat4::from_scale(0.5);
    info!("model transform:");
    model.print();

    let mvp = projection * model;
    info!("composed model-view-projection:");
    mvp.print();

    let corner = mvp.transform_point(Vec3::new(1.0, 1.0, 0.0));
    info!(x = corner.x, y = corner.y, "transformed unit corner");

    let facing = checked::normalize(Vec3::new(3.0, 4.0, 0.0))?;
    info!(x = facing.x, y = facing.y, "normalized facing direction");

    info!("viewport demo done");
    Ok(())
}
