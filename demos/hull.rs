use anyhow::Context;
use glam::dvec3;
use ranged::Interval;
use tracing_subscriber::EnvFilter;

pub fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let samples = [3.5, -1.25, f64::NAN, 7.0, 2.0];
    let hull: Interval = samples.into_iter().collect();
    tracing::info!(%hull, width = hull.width(), midpoint = hull.midpoint(), "sample hull");

    let arg = std::env::args().nth(1).unwrap_or_else(|| "[0, 4]".to_owned());
    let query: Interval = arg
        .parse()
        .with_context(|| format!("Failed to parse interval {arg:?}"))?;

    tracing::info!(
        union = %(hull | query),
        intersection = %(hull & query),
        precedes = hull.precedes(query),
        follows = hull.follows(query),
        "compared with {query}"
    );

    for factor in [-1.0, 0.0, 2.5] {
        tracing::info!(factor, scaled = %(query * factor));
    }

    let points = [dvec3(1.0, 0.0, 2.0), dvec3(-2.0, 3.0, 0.5)];
    for axis in [glam::DVec3::X, glam::DVec3::Y, glam::DVec3::Z] {
        tracing::info!(?axis, shadow = %Interval::project(points, axis));
    }

    Ok(())
}
