//! File-based tremolo processing command.

use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use temblor_core::{Tremolo, linear_to_db};
use temblor_io::{ProcessingEngine, StereoSamples, read_wav_stereo, write_wav_stereo};

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Oscillator rate in Hz (0-10)
    #[arg(short, long, default_value = "5.0")]
    rate: f32,

    /// Modulation depth (0-10)
    #[arg(short, long, default_value = "5.0")]
    depth: f32,

    /// Waveshape saturation amount (0-10, higher is squarer)
    #[arg(short, long, default_value = "0.0")]
    shape: f32,

    /// Bypass the effect (gain stays at 1.0)
    #[arg(long)]
    bypass: bool,

    /// Processing block size in frames
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if !matches!(args.bit_depth, 16 | 24 | 32) {
        anyhow::bail!("bit depth must be 16, 24 or 32 (got {})", args.bit_depth);
    }

    println!("Reading {}...", args.input.display());
    let (mut samples, spec) = read_wav_stereo(&args.input)?;
    let sample_rate = f64::from(spec.sample_rate);

    println!(
        "  {} frames, {} Hz, {:.2}s",
        samples.len(),
        spec.sample_rate,
        samples.len() as f64 / sample_rate
    );

    let mut tremolo = Tremolo::new(sample_rate);
    tremolo.set_rate(args.rate);
    tremolo.set_depth(args.depth);
    tremolo.set_shape(args.shape);
    tremolo.set_active(!args.bypass);

    println!(
        "Applying tremolo: rate {:.1} Hz, depth {:.1}, shape {:.1}{}",
        tremolo.rate(),
        tremolo.depth(),
        tremolo.shape(),
        if args.bypass { " (bypassed)" } else { "" }
    );

    let input_rms = stereo_rms(&samples);
    let input_peak = stereo_peak(&samples);

    let mut engine = ProcessingEngine::new(Box::new(tremolo), sample_rate);
    engine.set_block_size(args.block_size);

    let pb = ProgressBar::new(samples.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );
    engine.process_with_progress(&mut samples, |done| pb.set_position(done as u64));
    pb.finish_with_message("done");

    let output_rms = stereo_rms(&samples);
    let output_peak = stereo_peak(&samples);

    println!("\nStats:");
    println!(
        "  Input:  RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(input_rms),
        linear_to_db(input_peak)
    );
    println!(
        "  Output: RMS {:.1} dB, Peak {:.1} dB",
        linear_to_db(output_rms),
        linear_to_db(output_peak)
    );

    let mut out_spec = spec;
    out_spec.bits_per_sample = args.bit_depth;

    println!("\nWriting {}...", args.output.display());
    write_wav_stereo(&args.output, &samples, out_spec)?;
    println!("Done!");

    Ok(())
}

fn stereo_rms(samples: &StereoSamples) -> f32 {
    let n = samples.left.len() + samples.right.len();
    if n == 0 {
        return 0.0;
    }
    let sum: f32 = samples
        .left
        .iter()
        .chain(samples.right.iter())
        .map(|s| s * s)
        .sum();
    (sum / n as f32).sqrt()
}

fn stereo_peak(samples: &StereoSamples) -> f32 {
    samples
        .left
        .iter()
        .chain(samples.right.iter())
        .fold(0.0_f32, |peak, s| peak.max(s.abs()))
}
