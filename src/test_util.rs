use crate::math::Point3;

/// Installs a test subscriber once; honours `RUST_LOG`.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub(crate) fn pts(coords: &[(f64, f64)]) -> Vec<Point3> {
    coords.iter().map(|&(x, y)| Point3::new(x, y, 0.0)).collect()
}
