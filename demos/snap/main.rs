//! Arcsnap demo: sweeps a unit direction around the circle and logs how it
//! quantizes, biases and relates back to the input.
//!
//! Usage:
//! ```text
//! cargo run --example snap                  # 8 arcs, no rotation
//! cargo run --example snap -- 6 15          # 6 arcs rotated by 15°
//! RUST_LOG=arcsnap=trace cargo run --example snap
//! ```

use arcsnap::direction::{bias_to_cardinals, signed_angle_ccw, ArcPartition};
use arcsnap::math::Vector2;
use arcsnap::ArcsnapError;

const STEP_DEGREES: f64 = 15.0;
const BIAS_DEGREES: f64 = 30.0;

fn main() -> Result<(), ArcsnapError> {
    // Default: WARN for everything, INFO for arcsnap and this demo.
    // Override with RUST_LOG (e.g. RUST_LOG=arcsnap=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("snap=info".parse().unwrap_or_default())
        .add_directive("arcsnap=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let num_arcs = args.next().and_then(|a| a.parse().ok()).unwrap_or(8);
    let rotation = args.next().and_then(|a| a.parse().ok()).unwrap_or(0.0);
    let partition = ArcPartition::new(num_arcs, rotation)?;
    tracing::info!(
        num_arcs = partition.num_arcs(),
        rotation_degrees = partition.rotation_degrees(),
        arc_width_degrees = partition.arc_width_degrees(),
        "partition"
    );

    let mut degrees = -180.0;
    while degrees < 180.0 {
        let r = f64::to_radians(degrees);
        let v = Vector2::new(r.cos(), r.sin());
        let snapped = partition.round(&v);
        let biased = bias_to_cardinals(&v, BIAS_DEGREES);
        let error = signed_angle_ccw(&v, &snapped)?;
        tracing::info!(
            input = degrees,
            arc = ?partition.nearest_index(&v),
            snapped = %format_args!("({:.3}, {:.3})", snapped.x, snapped.y),
            biased = %format_args!("({:.3}, {:.3})", biased.x, biased.y),
            correction_degrees = error,
            "direction"
        );
        degrees += STEP_DEGREES;
    }
    Ok(())
}
