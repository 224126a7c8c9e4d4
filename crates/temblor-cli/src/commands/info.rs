//! WAV metadata inspection command.

use clap::Args;
use std::path::PathBuf;
use temblor_io::{WavFormat, read_wav_info};

#[derive(Args)]
pub struct InfoArgs {
    /// WAV file to inspect
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let info = read_wav_info(&args.file)?;

    let format = match info.format {
        WavFormat::Pcm => "PCM",
        WavFormat::IeeeFloat => "IEEE float",
    };

    println!("{}:", args.file.display());
    println!("  Channels:    {}", info.channels);
    println!("  Sample rate: {} Hz", info.sample_rate);
    println!("  Bit depth:   {} bit {}", info.bits_per_sample, format);
    println!("  Frames:      {}", info.num_frames);
    println!("  Duration:    {:.3}s", info.duration_secs);

    Ok(())
}
