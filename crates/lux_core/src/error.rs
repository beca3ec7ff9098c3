use thiserror::Error;

/// Errors raised while building surfaces, lights and cameras.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("{0} must be perpendicular")]
    NotPerpendicular(&'static str),

    #[error("disc width and height must have the same magnitude")]
    UnequalDiscAxes,

    #[error("{name} must be positive (got {value})")]
    NotPositive { name: &'static str, value: f64 },

    #[error("{name} must be non-negative (got {value})")]
    Negative { name: &'static str, value: f64 },

    #[error("{name} must be in [0, 1] (got {value})")]
    OutOfUnitRange { name: &'static str, value: f64 },

    #[error("refractive index must be at least 1 (got {0})")]
    RefractiveIndexBelowOne(f64),

    #[error("{0} must be at least 1")]
    TooFewSamples(&'static str),

    #[error("radius must be non-zero if number of samples is greater than 1")]
    ZeroRadiusWithSamples,

    #[error("depth must be non-zero")]
    ZeroDepth,
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Fail with `NotPositive` unless `value > 0`.
pub(crate) fn ensure_positive(name: &'static str, value: f64) -> SceneResult<()> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(SceneError::NotPositive { name, value })
    }
}

/// Fail with `Negative` unless `value >= 0`.
pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> SceneResult<()> {
    if value >= 0.0 {
        Ok(())
    } else {
        Err(SceneError::Negative { name, value })
    }
}

/// Fail with `OutOfUnitRange` unless `value` lies in [0, 1].
pub(crate) fn ensure_unit_range(name: &'static str, value: f64) -> SceneResult<()> {
    if lux_math::Interval::UNIT.contains(value) {
        Ok(())
    } else {
        Err(SceneError::OutOfUnitRange { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SceneError::NotPerpendicular("plane width and height").to_string(),
            "plane width and height must be perpendicular"
        );
        assert_eq!(
            SceneError::OutOfUnitRange { name: "opacity", value: 1.5 }.to_string(),
            "opacity must be in [0, 1] (got 1.5)"
        );
    }

    #[test]
    fn test_range_helpers() {
        assert!(ensure_positive("radius", 1.0).is_ok());
        assert!(ensure_positive("radius", 0.0).is_err());
        assert!(ensure_non_negative("radius", 0.0).is_ok());
        assert!(ensure_non_negative("radius", -0.1).is_err());
        assert!(ensure_unit_range("opacity", 1.0).is_ok());
        assert!(ensure_unit_range("opacity", -0.01).is_err());
        // NaN is never in range
        assert!(ensure_unit_range("opacity", f64::NAN).is_err());
    }
}
