//! Audio file I/O and offline processing for the Temblor tremolo.
//!
//! This crate is the host-adapter side of the core's boundary: it loads
//! WAV files into planar stereo buffers, drives a [`FrameEffect`] over
//! them block by block, and writes the result back out.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use temblor_core::Tremolo;
//! use temblor_io::{ProcessingEngine, read_wav_stereo, write_wav_stereo};
//!
//! let (mut samples, spec) = read_wav_stereo("input.wav")?;
//!
//! let mut tremolo = Tremolo::new(f64::from(spec.sample_rate));
//! tremolo.set_rate(5.0);
//! tremolo.set_depth(8.0);
//!
//! let mut engine = ProcessingEngine::new(Box::new(tremolo), f64::from(spec.sample_rate));
//! engine.process(&mut samples);
//!
//! write_wav_stereo("output.wav", &samples, spec)?;
//! ```
//!
//! [`FrameEffect`]: temblor_core::FrameEffect

mod engine;
mod wav;

pub use engine::ProcessingEngine;
pub use wav::{
    StereoSamples, WavFormat, WavInfo, WavSpec, read_wav_info, read_wav_stereo, write_wav_stereo,
};

/// Error types for audio I/O operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// The file has more channels than the tremolo supports.
    #[error("unsupported channel count: {0} (only mono and stereo are supported)")]
    UnsupportedChannels(u16),

    /// Planar buffers of different lengths were passed for one signal.
    #[error("channel length mismatch: left {left} samples, right {right}")]
    ChannelMismatch {
        /// Left channel length in samples.
        left: usize,
        /// Right channel length in samples.
        right: usize,
    },
}

/// Convenience result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
