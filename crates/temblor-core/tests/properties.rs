//! Property-based tests for the tremolo core.
//!
//! Uses proptest to verify the invariants the audio thread relies on:
//! bounded waveshaper output, finite gain within the unit range for any
//! valid parameter combination, exact identity when bypassed, and
//! deterministic replay after reset.

use proptest::prelude::*;
use temblor_core::{
    FrameEffect, ModulationEngine, SHAPE_MAX, SHAPE_MIN, Tremolo, TremoloParams, tanh_shape,
};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// |tanh(x * a) / tanh(a)| <= 1 + eps over the full clamp range.
    #[test]
    fn shaper_output_stays_normalized(
        x in -1.0f32..=1.0,
        amount in SHAPE_MIN..=SHAPE_MAX,
    ) {
        let y = tanh_shape(x, amount);
        prop_assert!(y.is_finite());
        prop_assert!(y.abs() <= 1.0 + 1e-5, "|{}| > 1 for x={} amount={}", y, x, amount);
    }

    /// Gain is finite and within [0, 1] for every valid parameter set.
    #[test]
    fn gain_is_finite_and_unit_bounded(
        rate in 0.0f32..=10.0,
        depth in 0.0f32..=10.0,
        shape in 0.0f32..=10.0,
        sample_rate in 8000.0f64..=192000.0,
    ) {
        let mut engine = ModulationEngine::new(sample_rate);
        let params = TremoloParams::new(rate, depth, shape, true);
        for _ in 0..512 {
            let gain = engine.next_gain(&params);
            prop_assert!(gain.is_finite());
            prop_assert!(
                (-1e-5..=1.0 + 1e-5).contains(&gain),
                "gain {} outside [0, 1] for rate={} depth={} shape={}",
                gain, rate, depth, shape
            );
        }
    }

    /// Bypass (active = false) never alters a sample, whatever the knobs say.
    #[test]
    fn bypass_is_exact_identity(
        rate in 0.0f32..=10.0,
        depth in 0.0f32..=10.0,
        shape in 0.0f32..=10.0,
        input in prop::collection::vec(-1.0f32..=1.0, 1..256),
    ) {
        let mut engine = ModulationEngine::new(48000.0);
        let params = TremoloParams::new(rate, depth, shape, false);
        for &sample in &input {
            let mut frame = [sample, sample];
            engine.process_frame(&mut frame, &params);
            prop_assert_eq!(frame, [sample, sample]);
        }
        prop_assert_eq!(engine.phase(), 0.0);
    }

    /// Zero depth is bypass in all but name: the gain collapses to 1.0.
    #[test]
    fn zero_depth_is_exact_identity(
        rate in 0.0f32..=10.0,
        shape in 0.0f32..=10.0,
        input in prop::collection::vec(-1.0f32..=1.0, 1..256),
    ) {
        let mut engine = ModulationEngine::new(44100.0);
        let params = TremoloParams::new(rate, 0.0, shape, true);
        for &sample in &input {
            let mut frame = [sample];
            engine.process_frame(&mut frame, &params);
            prop_assert_eq!(frame[0], sample);
        }
    }

    /// Oscillator phase stays within [0, 2*pi] for all valid rates.
    #[test]
    fn phase_stays_wrapped(
        rate in 0.0f32..=10.0,
        sample_rate in 8000.0f64..=192000.0,
    ) {
        let mut engine = ModulationEngine::new(sample_rate);
        let params = TremoloParams::new(rate, 5.0, 5.0, true);
        for _ in 0..4096 {
            engine.next_gain(&params);
            let phase = engine.phase();
            prop_assert!(
                (0.0..=core::f32::consts::TAU).contains(&phase),
                "phase {} escaped the wrap", phase
            );
        }
    }

    /// Same parameters after reset() reproduce the identical output.
    #[test]
    fn replay_after_reset_is_deterministic(
        rate in 0.0f32..=10.0,
        depth in 0.0f32..=10.0,
        shape in 0.0f32..=10.0,
    ) {
        let mut tremolo = Tremolo::new(48000.0);
        tremolo.set_rate(rate);
        tremolo.set_depth(depth);
        tremolo.set_shape(shape);

        let mut left_a = vec![0.5_f32; 333];
        let mut right_a = vec![-0.5_f32; 333];
        tremolo.process_block(&mut left_a, &mut right_a);

        tremolo.reset();

        let mut left_b = vec![0.5_f32; 333];
        let mut right_b = vec![-0.5_f32; 333];
        tremolo.process_block(&mut left_b, &mut right_b);

        prop_assert_eq!(left_a, left_b);
        prop_assert_eq!(right_a, right_b);
    }
}
