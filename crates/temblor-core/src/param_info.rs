//! Index-based parameter introspection.
//!
//! Hosts, GUIs and the CLI discover an effect's controls at runtime
//! through [`ParameterInfo`] instead of hard-coding each knob. The effect
//! remains the owner of clamping and unit conversion; descriptors only
//! carry display metadata.

/// Display unit of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamUnit {
    /// Dimensionless value.
    None,
    /// Frequency in Hertz.
    Hertz,
    /// Percentage, 0-100.
    Percent,
    /// On/off toggle, 0 or 1.
    Toggle,
}

/// Static metadata describing one parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full display name.
    pub name: &'static str,
    /// Short name for cramped UIs (8 chars or less).
    pub short_name: &'static str,
    /// Display unit.
    pub unit: ParamUnit,
    /// Minimum plain value.
    pub min: f32,
    /// Maximum plain value.
    pub max: f32,
    /// Default plain value.
    pub default: f32,
    /// Suggested UI step size.
    pub step: f32,
}

/// Runtime parameter discovery and access by index.
///
/// Indices are stable for the lifetime of the effect. `set_param` clamps
/// out-of-range values rather than rejecting them; `get_param` returns
/// 0.0 for unknown indices.
pub trait ParameterInfo {
    /// Number of parameters this effect exposes.
    fn param_count(&self) -> usize;

    /// Metadata for the parameter at `index`, or `None` past the end.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Current plain value of the parameter at `index`.
    fn get_param(&self, index: usize) -> f32;

    /// Set the plain value of the parameter at `index`.
    fn set_param(&mut self, index: usize, value: f32);
}
