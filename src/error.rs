use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the simulation core and scenario loading.
///
/// Numerical singularities are not represented here: coincident particles
/// produce non-finite values in the trajectory instead of an error.
#[derive(Debug, Error)]
pub enum Error {
    /// Particle counts of positions, velocities and masses disagree.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Invalid scenario or API parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// Scenario file could not be parsed.
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_display_names_counts() {
        let e = Error::ShapeMismatch("positions have 3 particles, masses have 2".to_string());
        let msg = format!("{e}");
        assert!(msg.contains("shape mismatch"));
        assert!(msg.contains("3 particles"));
    }
}
