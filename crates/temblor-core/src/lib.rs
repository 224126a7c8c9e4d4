//! Temblor Core - tanh-waveshaped tremolo DSP.
//!
//! The heart of this crate is the [`ModulationEngine`]: a phase-accumulator
//! sine oscillator whose waveform is continuously reshaped through a
//! normalized hyperbolic-tangent saturator, then mixed against unity gain
//! by a depth control. One scalar gain is computed per sample and applied
//! identically to every channel of a frame.
//!
//! # Layout
//!
//! - [`ModulationEngine`] - the stateful per-sample gain generator
//! - [`TremoloParams`] - immutable per-block control snapshot
//! - [`Tremolo`] - parameter-owning effect wrapper with introspection
//! - [`FrameEffect`] - object-safe seam consumed by host adapters
//! - [`tanh_shape`] - the normalized saturator used by the engine
//!
//! # Real-time contract
//!
//! Every processing path is allocation-free, lock-free and total: given
//! pre-clamped parameters (plus the internal shape clamp) no input can
//! produce NaN, trap or block on the audio thread. Control values cross
//! the thread boundary as [`TremoloParams`] values, never as references
//! into shared mutable state.
//!
//! # Example
//!
//! ```rust
//! use temblor_core::{FrameEffect, Tremolo};
//!
//! let mut tremolo = Tremolo::new(48000.0);
//! tremolo.set_rate(5.0);
//! tremolo.set_depth(10.0);
//!
//! let mut left = vec![0.8_f32; 480];
//! let mut right = vec![0.8_f32; 480];
//! tremolo.process_stereo_block(&mut left, &mut right);
//! ```
//!
//! # no_std Support
//!
//! The crate is `no_std` compatible for embedded targets; disable the
//! default `std` feature:
//!
//! ```toml
//! [dependencies]
//! temblor-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod effect;
pub mod engine;
pub mod math;
pub mod param_info;
pub mod params;
pub mod tremolo;

pub use effect::FrameEffect;
pub use engine::ModulationEngine;
pub use math::{SHAPE_MAX, SHAPE_MIN, db_to_linear, linear_to_db, tanh_shape};
pub use param_info::{ParamDescriptor, ParamUnit, ParameterInfo};
pub use params::{PARAM_MAX, TremoloParams};
pub use tremolo::Tremolo;
