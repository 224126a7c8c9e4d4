//! The modulation engine: per-sample tremolo gain computation.
//!
//! A phase-accumulator sine oscillator is reshaped through the normalized
//! tanh saturator and mixed against unity gain by the depth control. The
//! engine owns nothing but its oscillator phase and the configured sample
//! rate; control values arrive as a [`TremoloParams`] snapshot each block.

use core::f32::consts::TAU;
use libm::sinf;

use crate::math::tanh_shape;
use crate::params::TremoloParams;

/// Stateful per-sample gain generator for the tremolo.
///
/// Computes one scalar gain per sample and applies it identically to every
/// channel of a frame. The whole transform is a total function of
/// `(phase, params)`; there are no error paths and no allocation.
///
/// # Phase policy
///
/// While `params.active` is false the engine returns unity gain and the
/// oscillator phase is frozen, so reactivating resumes the envelope exactly
/// where it left off with no discontinuity.
///
/// # Example
///
/// ```rust
/// use temblor_core::{ModulationEngine, TremoloParams};
///
/// let mut engine = ModulationEngine::new(48000.0);
/// let params = TremoloParams::new(1.0, 10.0, 5.0, true);
///
/// // First sample: sin(0) = 0, full depth -> gain is exactly 0.5.
/// let mut frame = [1.0_f32, 1.0];
/// engine.process_frame(&mut frame, &params);
/// assert_eq!(frame, [0.5, 0.5]);
/// ```
#[derive(Debug, Clone)]
pub struct ModulationEngine {
    /// Oscillator phase in radians, kept in `[0, 2*pi)`.
    phase: f32,
    /// Sample rate in Hz, set by [`configure`](Self::configure).
    sample_rate: f64,
}

impl Default for ModulationEngine {
    fn default() -> Self {
        Self::new(48000.0)
    }
}

impl ModulationEngine {
    /// Create an engine at phase 0 for the given sample rate.
    pub fn new(sample_rate: f64) -> Self {
        let mut engine = Self {
            phase: 0.0,
            sample_rate: 48000.0,
        };
        engine.configure(sample_rate);
        engine
    }

    /// Set the sample rate used for the Hz-to-radians conversion.
    ///
    /// Called once per playback session before processing. Keeps the
    /// current phase so stop/resume does not restart the envelope.
    /// Non-positive rates are ignored.
    pub fn configure(&mut self, sample_rate: f64) {
        if sample_rate > 0.0 {
            self.sample_rate = sample_rate;
        }
    }

    /// Configured sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Current oscillator phase in radians, `[0, 2*pi)`.
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Rewind the oscillator to phase 0.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Compute the gain for the current sample and advance the oscillator.
    ///
    /// When `params.active` is false this returns exactly 1.0 and leaves
    /// the phase untouched.
    #[inline]
    pub fn next_gain(&mut self, params: &TremoloParams) -> f32 {
        if !params.active {
            return 1.0;
        }

        let x = sinf(self.phase);

        // Single conditional wrap, not a full modulo: the increment for
        // rate <= 10 Hz at any realistic sample rate is far below 2*pi.
        let increment = (f64::from(params.rate) * f64::from(TAU) / self.sample_rate) as f32;
        self.phase += increment;
        if self.phase > TAU {
            self.phase -= TAU;
        }

        // One unit less saturation on the negative half-cycle gives the
        // envelope its intentional asymmetry. tanh_shape clamps the amount,
        // which also keeps the denominator away from tanh(0).
        let shape_amount = params.shape - if x < 0.0 { 1.0 } else { 0.0 };
        let shaped = tanh_shape(x, shape_amount);

        // Rescale bipolar [-1, 1] to unipolar [0, 1], then crossfade with
        // unity gain: depth 0 is bypass, depth 10 tracks the wave exactly.
        let depth = params.depth / 10.0;
        ((shaped + 1.0) * 0.5 * depth) + (1.0 - depth)
    }

    /// Apply one gain value to every channel of the current frame.
    ///
    /// `frame` holds one sample per channel (1 for mono, 2 for stereo);
    /// every channel is multiplied by the same scalar, so there is no
    /// per-channel divergence.
    #[inline]
    pub fn process_frame(&mut self, frame: &mut [f32], params: &TremoloParams) {
        let gain = self.next_gain(params);
        for sample in frame {
            *sample *= gain;
        }
    }
}
