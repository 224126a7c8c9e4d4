//! Control-parameter snapshot for the modulation engine.
//!
//! The engine never holds a live reference to shared parameter storage.
//! Whoever owns the parameters (host adapter, CLI, automation) takes a
//! [`TremoloParams`] value once per processing block and passes it in, so
//! the audio thread sees a consistent snapshot with no torn reads.

/// Upper bound of the three continuous control ranges.
pub const PARAM_MAX: f32 = 10.0;

/// Immutable per-block snapshot of the tremolo controls.
///
/// All continuous fields use the raw control range `[0.0, 10.0]`; the
/// engine normalizes `depth` internally. `active == false` forces unity
/// gain (bypass).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TremoloParams {
    /// Oscillator frequency in Hz, `[0.0, 10.0]`.
    pub rate: f32,
    /// Modulation depth, `[0.0, 10.0]` (divided by 10 internally).
    pub depth: f32,
    /// Waveshape saturation amount, `[0.0, 10.0]`.
    pub shape: f32,
    /// Effect gate. When false the engine is a pass-through.
    pub active: bool,
}

impl Default for TremoloParams {
    fn default() -> Self {
        Self {
            rate: 0.0,
            depth: 0.0,
            shape: 0.0,
            active: true,
        }
    }
}

impl TremoloParams {
    /// Create a snapshot with all fields clamped to their declared ranges.
    pub fn new(rate: f32, depth: f32, shape: f32, active: bool) -> Self {
        Self {
            rate,
            depth,
            shape,
            active,
        }
        .clamped()
    }

    /// Return a copy with every continuous field clamped to `[0.0, 10.0]`.
    ///
    /// Range validation belongs to the parameter system at the boundary;
    /// this exists for callers that bypass it (tests, raw CLI values).
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            rate: self.rate.clamp(0.0, PARAM_MAX),
            depth: self.depth.clamp(0.0, PARAM_MAX),
            shape: self.shape.clamp(0.0, PARAM_MAX),
            active: self.active,
        }
    }
}
