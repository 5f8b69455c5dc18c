//! Semantic validation of material specs.

use thiserror::Error;

use crate::schema::{LATEST_VERSION, MaterialSpec};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Unsupported spec version {found} (latest is {})", LATEST_VERSION)]
    UnsupportedVersion { found: u32 },

    #[error("Spec must define at least one circle")]
    NoCircles,

    #[error("Circle {circle}: {field} must be finite and positive (got {value})")]
    NonPositive {
        circle: usize,
        field: &'static str,
        value: f64,
    },

    #[error("Circle {circle}: opacity must lie in [0, 1] (got {value})")]
    OpacityRange { circle: usize, value: f64 },

    #[error("Circle {circle}: segment count must be at least 2 (got {count})")]
    SegmentCount { circle: usize, count: u32 },

    #[error("Circle {circle}: center offset components must be finite")]
    CenterOffset { circle: usize },

    #[error("Circle {circle}: rotation requires segmentation")]
    RotationWithoutSegments { circle: usize },
}

pub fn validate_spec(spec: &MaterialSpec) -> Result<(), ValidationError> {
    if spec.version != LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            found: spec.version,
        });
    }
    if spec.circles.is_empty() {
        return Err(ValidationError::NoCircles);
    }

    for (i, circle) in spec.circles.iter().enumerate() {
        check_positive(i, "radius", circle.radius)?;
        check_positive(i, "thickness", circle.thickness)?;
        check_positive(i, "density", circle.density)?;

        if let Some(opacity) = circle.opacity {
            if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
                return Err(ValidationError::OpacityRange {
                    circle: i,
                    value: opacity,
                });
            }
        }

        if let Some(segments) = &circle.segments {
            if segments.count < 2 {
                return Err(ValidationError::SegmentCount {
                    circle: i,
                    count: segments.count,
                });
            }
            check_positive(i, "segment spacing", Some(segments.spacing))?;
            if segments.center_offset.iter().any(|c| !c.is_finite()) {
                return Err(ValidationError::CenterOffset { circle: i });
            }
        }

        if let Some(rotation) = &circle.rotation {
            // Rotation only exists as the phase drive of the segmentation
            // function; see the combination rule in DESIGN.md.
            if circle.segments.is_none() {
                return Err(ValidationError::RotationWithoutSegments { circle: i });
            }
            check_positive(i, "inverse rotation speed", Some(rotation.inverse_speed))?;
        }
    }

    Ok(())
}

fn check_positive(
    circle: usize,
    field: &'static str,
    value: Option<f64>,
) -> Result<(), ValidationError> {
    let Some(value) = value else { return Ok(()) };
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::NonPositive {
            circle,
            field,
            value,
        });
    }
    Ok(())
}
