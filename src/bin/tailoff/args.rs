//! Command line parsing.

use color_eyre::eyre::{bail, eyre, Result as EyreResult, WrapErr};
use tailoff::Waveform;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Render offline and report pitch, peak and tail length
    Probe,
    /// Play through the default output device
    Play,
}

#[derive(Debug, Clone)]
pub struct Args {
    pub command: Command,
    pub note: u8,
    pub velocity: f32,
    pub waveform: Waveform,
    pub sample_rate: f64,
    /// Samples rendered before the note is released (probe)
    pub hold: usize,
    /// Milliseconds held before release (play)
    pub millis: u64,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            command: Command::Probe,
            note: 69,
            velocity: 1.0,
            waveform: Waveform::Square,
            sample_rate: 48_000.0,
            hold: 8192,
            millis: 1000,
        }
    }
}

pub const USAGE: &str = "\
usage: tailoff <probe|play> [options]

options:
  --note N            MIDI note number (default 69)
  --velocity V        velocity in [0, 1] (default 1.0)
  --waveform W        square | signofsine | saw | triangle | sine | blend
  --sample-rate SR    sample rate for probe (default 48000)
  --hold SAMPLES      samples before release for probe (default 8192)
  --millis MS         hold time for play (default 1000)";

pub fn parse(mut argv: impl Iterator<Item = String>) -> EyreResult<Args> {
    let command = match argv.next().as_deref() {
        Some("probe") => Command::Probe,
        Some("play") => Command::Play,
        Some(other) => bail!("unknown command '{other}'\n\n{USAGE}"),
        None => bail!("missing command\n\n{USAGE}"),
    };
    let mut args = Args {
        command,
        ..Args::default()
    };

    while let Some(flag) = argv.next() {
        let value = argv
            .next()
            .ok_or_else(|| eyre!("flag '{flag}' needs a value"))?;

        match flag.as_str() {
            "--note" => {
                args.note = value.parse().wrap_err("--note expects 0..=127")?;
                if args.note > 127 {
                    bail!("--note expects 0..=127, got {}", args.note);
                }
            }
            "--velocity" => args.velocity = value.parse().wrap_err("--velocity expects a number")?,
            "--waveform" => {
                args.waveform = Waveform::from_name(&value)
                    .ok_or_else(|| eyre!("unknown waveform '{value}'"))?;
            }
            "--sample-rate" => {
                args.sample_rate = value.parse().wrap_err("--sample-rate expects a number")?;
            }
            "--hold" => args.hold = value.parse().wrap_err("--hold expects a sample count")?,
            "--millis" => args.millis = value.parse().wrap_err("--millis expects milliseconds")?,
            other => bail!("unknown flag '{other}'\n\n{USAGE}"),
        }
    }

    Ok(args)
}
