//! Test signal generation command.
//!
//! A tremolo is easiest to audition on steady material, so this generates
//! sustained tones and noise beds to run through `process`.

use clap::{Args, Subcommand};
use std::path::PathBuf;
use temblor_io::{StereoSamples, WavSpec, write_wav_stereo};

#[derive(Args)]
pub struct GenerateArgs {
    #[command(subcommand)]
    command: GenerateCommand,
}

#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate a sustained sine tone
    Tone {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Frequency in Hz
        #[arg(long, default_value = "440.0")]
        freq: f32,

        /// Duration in seconds
        #[arg(long, default_value = "2.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.8")]
        amplitude: f32,
    },

    /// Generate white noise
    Noise {
        /// Output WAV file
        #[arg(value_name = "OUTPUT")]
        output: PathBuf,

        /// Duration in seconds
        #[arg(long, default_value = "2.0")]
        duration: f32,

        /// Sample rate
        #[arg(long, default_value = "48000")]
        sample_rate: u32,

        /// Amplitude (0-1)
        #[arg(long, default_value = "0.5")]
        amplitude: f32,
    },
}

pub fn run(args: GenerateArgs) -> anyhow::Result<()> {
    match args.command {
        GenerateCommand::Tone {
            output,
            freq,
            duration,
            sample_rate,
            amplitude,
        } => {
            let samples = sine_tone(freq, duration, sample_rate, amplitude);
            write(&output, samples, sample_rate)
        }
        GenerateCommand::Noise {
            output,
            duration,
            sample_rate,
            amplitude,
        } => {
            let samples = white_noise(duration, sample_rate, amplitude);
            write(&output, samples, sample_rate)
        }
    }
}

fn write(output: &PathBuf, samples: StereoSamples, sample_rate: u32) -> anyhow::Result<()> {
    let spec = WavSpec {
        sample_rate,
        ..WavSpec::default()
    };
    write_wav_stereo(output, &samples, spec)?;
    println!("Wrote {} ({} frames)", output.display(), samples.len());
    Ok(())
}

fn sine_tone(freq: f32, duration: f32, sample_rate: u32, amplitude: f32) -> StereoSamples {
    let frames = (duration * sample_rate as f32) as usize;
    let omega = std::f32::consts::TAU * freq / sample_rate as f32;
    let mono: Vec<f32> = (0..frames)
        .map(|i| (omega * i as f32).sin() * amplitude)
        .collect();
    StereoSamples::from_mono(mono)
}

fn white_noise(duration: f32, sample_rate: u32, amplitude: f32) -> StereoSamples {
    let frames = (duration * sample_rate as f32) as usize;
    // Small xorshift PRNG; no need to pull in a random crate for a test bed.
    let mut state: u32 = 0x9E3779B9;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        (state as f32 / u32::MAX as f32) * 2.0 - 1.0
    };
    let left: Vec<f32> = (0..frames).map(|_| next() * amplitude).collect();
    let right: Vec<f32> = (0..frames).map(|_| next() * amplitude).collect();
    StereoSamples { left, right }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_has_requested_length_and_amplitude() {
        let samples = sine_tone(440.0, 1.0, 48000, 0.8);
        assert_eq!(samples.len(), 48000);
        let peak = samples.left.iter().fold(0.0_f32, |p, s| p.max(s.abs()));
        assert!(peak <= 0.8 + 1e-6);
        assert!(peak > 0.75);
    }

    #[test]
    fn noise_stays_within_amplitude() {
        let samples = white_noise(0.1, 48000, 0.5);
        assert_eq!(samples.len(), 4800);
        assert!(
            samples
                .left
                .iter()
                .chain(samples.right.iter())
                .all(|s| s.abs() <= 0.5)
        );
    }
}
