//! tailoff - probe or play a single waveform voice
//!
//! Run with: cargo run -- probe --note 60 --waveform triangle

mod args;
mod playback;
mod probe;

use args::Command;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    env_logger::init();

    let args = args::parse(std::env::args().skip(1))?;

    match args.command {
        Command::Probe => {
            let report = probe::run(&args)?;
            println!("note:        {} ({})", args.note, args.waveform.name());
            println!("frequency:   {:.2} Hz", report.frequency_hz);
            println!("detected:    {:.2} Hz", report.detected_hz);
            println!("peak:        {:.4}", report.peak);
            println!(
                "tail:        {} samples ({} expected, {:.2} ms)",
                report.tail_samples,
                report.expected_tail_samples,
                report.tail_samples as f64 * 1000.0 / args.sample_rate
            );
        }
        Command::Play => playback::run(&args)?,
    }

    Ok(())
}
