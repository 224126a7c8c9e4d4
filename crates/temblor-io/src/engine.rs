//! Offline block-processing engine.

use crate::StereoSamples;
use temblor_core::FrameEffect;

/// Default processing block size in frames.
pub const DEFAULT_BLOCK_SIZE: usize = 512;

/// Drives a [`FrameEffect`] over planar stereo buffers in fixed blocks.
///
/// This is the host side of the core's configure/process contract: the
/// effect's sample rate is set once at construction, then audio flows
/// through in blocks. The effect instance (and therefore its oscillator
/// phase) persists across calls, so pausing between buffers and resuming
/// keeps the modulation envelope continuous; only
/// [`reset`](Self::reset) rewinds it.
pub struct ProcessingEngine {
    effect: Box<dyn FrameEffect + Send>,
    sample_rate: f64,
    block_size: usize,
}

impl ProcessingEngine {
    /// Create an engine around an effect, configuring its sample rate.
    pub fn new(mut effect: Box<dyn FrameEffect + Send>, sample_rate: f64) -> Self {
        effect.set_sample_rate(sample_rate);
        Self {
            effect,
            sample_rate,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }

    /// Set the block size used by [`process`](Self::process).
    ///
    /// Block size has no bearing on the per-sample algorithm; it only
    /// shapes progress reporting granularity. Zero is coerced to 1.
    pub fn set_block_size(&mut self, block_size: usize) {
        self.block_size = block_size.max(1);
    }

    /// Configured block size in frames.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Configured sample rate in Hz.
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Reconfigure the sample rate for a new session.
    pub fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
        self.effect.set_sample_rate(sample_rate);
    }

    /// Reset the effect's internal state (oscillator back to phase 0).
    pub fn reset(&mut self) {
        self.effect.reset();
    }

    /// Process the whole buffer in place, block by block.
    pub fn process(&mut self, samples: &mut StereoSamples) {
        self.process_with_progress(samples, |_| {});
    }

    /// Process in place, reporting frames done after each block.
    pub fn process_with_progress<F>(&mut self, samples: &mut StereoSamples, mut on_block: F)
    where
        F: FnMut(usize),
    {
        let total = samples.left.len().min(samples.right.len());
        let mut done = 0;
        while done < total {
            let end = (done + self.block_size).min(total);
            self.effect
                .process_stereo_block(&mut samples.left[done..end], &mut samples.right[done..end]);
            done = end;
            on_block(done);
        }
        tracing::debug!(frames = total, block_size = self.block_size, "processed buffer");
    }
}
