//! The frame-effect seam between the DSP core and host adapters.
//!
//! A frame effect consumes one multi-channel sample frame at a time and
//! mutates it in place. The trait is object-safe so adapters can hold a
//! `Box<dyn FrameEffect>`, and every method is allocation-free so the
//! whole surface is usable from an audio callback.

/// An in-place processor of multi-channel sample frames.
///
/// `frame` holds one `f32` per channel for the current sample instant
/// (1 for mono, 2 for stereo). Implementations read their control values
/// from a snapshot taken at block start, never from live shared state.
pub trait FrameEffect {
    /// Process the current frame in place, advancing internal state.
    fn process_frame(&mut self, frame: &mut [f32]);

    /// Process planar stereo buffers sample by sample.
    ///
    /// Default implementation walks both channels in lockstep through
    /// [`process_frame`](Self::process_frame). Buffers must be the same
    /// length; the shorter length wins if they are not.
    fn process_stereo_block(&mut self, left: &mut [f32], right: &mut [f32]) {
        debug_assert_eq!(
            left.len(),
            right.len(),
            "stereo buffers must have the same length"
        );
        for (l, r) in left.iter_mut().zip(right.iter_mut()) {
            let mut frame = [*l, *r];
            self.process_frame(&mut frame);
            *l = frame[0];
            *r = frame[1];
        }
    }

    /// Set the sample rate. Called once per session before processing.
    fn set_sample_rate(&mut self, sample_rate: f64);

    /// Return internal state (oscillator phase etc.) to its initial value.
    fn reset(&mut self);
}
