//! Argument checks run once at the top of each fallible operation.
use crate::error::{ArgumentError, Result};
use crate::math::{angle, Vector2};

pub(crate) fn arc_count(num_arcs: u32) -> Result<()> {
    if num_arcs < 1 {
        tracing::debug!(num_arcs, "rejected arc count");
        return Err(ArgumentError::ArcCount { num_arcs }.into());
    }
    Ok(())
}

pub(crate) fn finite_scalar(parameter: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        tracing::debug!(parameter, value, "rejected non-finite scalar");
        return Err(ArgumentError::NonFinite { parameter, value }.into());
    }
    Ok(())
}

pub(crate) fn finite_vector(parameter: &'static str, v: &Vector2) -> Result<()> {
    if let Some(&value) = v.iter().find(|c| !c.is_finite()) {
        tracing::debug!(parameter, value, "rejected non-finite vector component");
        return Err(ArgumentError::NonFinite { parameter, value }.into());
    }
    Ok(())
}

pub(crate) fn direction(parameter: &'static str, v: &Vector2) -> Result<()> {
    finite_vector(parameter, v)?;
    if angle::is_zero(v) {
        tracing::debug!(parameter, "rejected zero-length direction");
        return Err(ArgumentError::ZeroVector { parameter }.into());
    }
    Ok(())
}
