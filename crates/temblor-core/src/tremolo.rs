//! Tremolo effect: parameter-owning wrapper around the modulation engine.

use crate::effect::FrameEffect;
use crate::engine::ModulationEngine;
use crate::param_info::{ParamDescriptor, ParamUnit, ParameterInfo};
use crate::params::{PARAM_MAX, TremoloParams};

/// Tanh-waveshaped stereo tremolo.
///
/// Owns the current control values and an oscillator-backed
/// [`ModulationEngine`]; each processed frame is scaled by one gain value
/// applied to all channels. Setters clamp to the declared `[0, 10]`
/// ranges, so the struct can absorb raw host/CLI values directly.
///
/// # Example
///
/// ```rust
/// use temblor_core::{FrameEffect, Tremolo};
///
/// let mut tremolo = Tremolo::new(48000.0);
/// tremolo.set_rate(4.0);   // 4 Hz
/// tremolo.set_depth(8.0);  // 80% depth
/// tremolo.set_shape(2.5);
///
/// let mut frame = [0.5_f32, 0.5];
/// tremolo.process_frame(&mut frame);
/// ```
#[derive(Debug, Clone)]
pub struct Tremolo {
    engine: ModulationEngine,
    params: TremoloParams,
}

impl Tremolo {
    /// Create a tremolo with default parameters (all controls at 0, active).
    pub fn new(sample_rate: f64) -> Self {
        Self {
            engine: ModulationEngine::new(sample_rate),
            params: TremoloParams::default(),
        }
    }

    /// Set oscillator rate in Hz (0-10).
    pub fn set_rate(&mut self, rate_hz: f32) {
        self.params.rate = rate_hz.clamp(0.0, PARAM_MAX);
    }

    /// Current rate in Hz.
    pub fn rate(&self) -> f32 {
        self.params.rate
    }

    /// Set modulation depth (0-10; 10 is full modulation).
    pub fn set_depth(&mut self, depth: f32) {
        self.params.depth = depth.clamp(0.0, PARAM_MAX);
    }

    /// Current depth.
    pub fn depth(&self) -> f32 {
        self.params.depth
    }

    /// Set waveshape saturation amount (0-10; higher is squarer).
    pub fn set_shape(&mut self, shape: f32) {
        self.params.shape = shape.clamp(0.0, PARAM_MAX);
    }

    /// Current shape amount.
    pub fn shape(&self) -> f32 {
        self.params.shape
    }

    /// Gate the effect on or off. Off means exact pass-through.
    pub fn set_active(&mut self, active: bool) {
        self.params.active = active;
    }

    /// Whether the effect is currently modulating.
    pub fn active(&self) -> bool {
        self.params.active
    }

    /// Snapshot of the current control values.
    pub fn params(&self) -> TremoloParams {
        self.params
    }

    /// Process planar stereo buffers against one parameter snapshot.
    ///
    /// The snapshot is taken once here, so a concurrent setter call can
    /// never tear the parameter set mid-block.
    pub fn process_block(&mut self, left: &mut [f32], right: &mut [f32]) {
        let params = self.params;
        for (l, r) in left.iter_mut().zip(right.iter_mut()) {
            let gain = self.engine.next_gain(&params);
            *l *= gain;
            *r *= gain;
        }
    }
}

impl FrameEffect for Tremolo {
    #[inline]
    fn process_frame(&mut self, frame: &mut [f32]) {
        let params = self.params;
        self.engine.process_frame(frame, &params);
    }

    fn process_stereo_block(&mut self, left: &mut [f32], right: &mut [f32]) {
        self.process_block(left, right);
    }

    fn set_sample_rate(&mut self, sample_rate: f64) {
        self.engine.configure(sample_rate);
    }

    fn reset(&mut self) {
        self.engine.reset();
    }
}

impl ParameterInfo for Tremolo {
    fn param_count(&self) -> usize {
        4
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        match index {
            0 => Some(ParamDescriptor {
                name: "Rate",
                short_name: "Rate",
                unit: ParamUnit::Hertz,
                min: 0.0,
                max: 10.0,
                default: 0.0,
                step: 0.1,
            }),
            1 => Some(ParamDescriptor {
                name: "Depth",
                short_name: "Depth",
                unit: ParamUnit::None,
                min: 0.0,
                max: 10.0,
                default: 0.0,
                step: 0.1,
            }),
            2 => Some(ParamDescriptor {
                name: "Shape",
                short_name: "Shape",
                unit: ParamUnit::None,
                min: 0.0,
                max: 10.0,
                default: 0.0,
                step: 0.1,
            }),
            3 => Some(ParamDescriptor {
                name: "Active",
                short_name: "Active",
                unit: ParamUnit::Toggle,
                min: 0.0,
                max: 1.0,
                default: 1.0,
                step: 1.0,
            }),
            _ => None,
        }
    }

    fn get_param(&self, index: usize) -> f32 {
        match index {
            0 => self.params.rate,
            1 => self.params.depth,
            2 => self.params.shape,
            3 => {
                if self.params.active {
                    1.0
                } else {
                    0.0
                }
            }
            _ => 0.0,
        }
    }

    fn set_param(&mut self, index: usize, value: f32) {
        match index {
            0 => self.set_rate(value),
            1 => self.set_depth(value),
            2 => self.set_shape(value),
            3 => self.set_active(value > 0.5),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setters_clamp_to_declared_ranges() {
        let mut tremolo = Tremolo::new(44100.0);
        tremolo.set_rate(25.0);
        tremolo.set_depth(-1.0);
        tremolo.set_shape(10.5);
        assert_eq!(tremolo.rate(), 10.0);
        assert_eq!(tremolo.depth(), 0.0);
        assert_eq!(tremolo.shape(), 10.0);
    }

    #[test]
    fn parameter_info_round_trip() {
        let mut tremolo = Tremolo::new(48000.0);
        assert_eq!(tremolo.param_count(), 4);

        tremolo.set_param(0, 3.0);
        assert_eq!(tremolo.get_param(0), 3.0);

        tremolo.set_param(1, 7.5);
        assert_eq!(tremolo.get_param(1), 7.5);

        tremolo.set_param(2, 9.0);
        assert_eq!(tremolo.get_param(2), 9.0);

        tremolo.set_param(3, 0.0);
        assert_eq!(tremolo.get_param(3), 0.0);
        assert!(!tremolo.active());
    }

    #[test]
    fn descriptors_cover_every_index() {
        let tremolo = Tremolo::new(48000.0);
        for index in 0..tremolo.param_count() {
            let desc = tremolo.param_info(index).expect("descriptor");
            assert!(desc.min < desc.max);
        }
        assert!(tremolo.param_info(4).is_none());
    }

    #[test]
    fn full_modulation_covers_the_gain_range() {
        let mut tremolo = Tremolo::new(44100.0);
        tremolo.set_rate(10.0);
        tremolo.set_depth(10.0);
        tremolo.set_shape(5.0);

        let mut min_gain = f32::MAX;
        let mut max_gain = f32::MIN;
        for _ in 0..44100 {
            let mut frame = [1.0_f32];
            tremolo.process_frame(&mut frame);
            min_gain = min_gain.min(frame[0]);
            max_gain = max_gain.max(frame[0]);
        }

        assert!(min_gain < 0.05, "full depth should dip near zero, got {min_gain}");
        assert!(max_gain > 0.95, "full depth should reach near one, got {max_gain}");
    }

    #[test]
    fn block_and_frame_paths_agree() {
        let mut by_frame = Tremolo::new(48000.0);
        let mut by_block = by_frame.clone();
        for t in [&mut by_frame, &mut by_block] {
            t.set_rate(5.0);
            t.set_depth(9.0);
            t.set_shape(3.0);
        }

        let input: Vec<f32> = (0..256).map(|i| (i as f32 * 0.01).sin()).collect();

        let mut left_a = input.clone();
        let mut right_a = input.clone();
        for (l, r) in left_a.iter_mut().zip(right_a.iter_mut()) {
            let mut frame = [*l, *r];
            by_frame.process_frame(&mut frame);
            *l = frame[0];
            *r = frame[1];
        }

        let mut left_b = input.clone();
        let mut right_b = input;
        by_block.process_block(&mut left_b, &mut right_b);

        assert_eq!(left_a, left_b);
        assert_eq!(right_a, right_b);
    }

    #[test]
    fn reset_restarts_the_envelope() {
        let mut tremolo = Tremolo::new(48000.0);
        tremolo.set_rate(6.0);
        tremolo.set_depth(10.0);
        tremolo.set_shape(1.0);

        let mut first = vec![1.0_f32; 512];
        let mut also_first = first.clone();
        tremolo.process_block(&mut first, &mut also_first);

        tremolo.reset();

        let mut again = vec![1.0_f32; 512];
        let mut also_again = again.clone();
        tremolo.process_block(&mut again, &mut also_again);

        assert_eq!(first, again);
    }
}
