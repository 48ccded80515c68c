//! Offline probe: render a note, measure it, release it, measure the tail.

use color_eyre::eyre::{Result as EyreResult, WrapErr};
use rustfft::{num_complex::Complex, FftPlanner};
use tailoff::{dsp::tail_off::tail_length, AudioOutput, Voice, VoiceConfig};

use super::args::Args;

#[derive(Debug)]
pub struct ProbeReport {
    pub frequency_hz: f64,
    /// Strongest FFT bin in Hz
    pub detected_hz: f64,
    pub peak: f32,
    /// Samples rendered after release until the voice went idle
    pub tail_samples: usize,
    pub expected_tail_samples: usize,
}

pub fn run(args: &Args) -> EyreResult<ProbeReport> {
    let config = VoiceConfig::default().with_waveform(args.waveform);
    let mut voice =
        Voice::with_config(config, args.sample_rate).wrap_err("invalid probe settings")?;

    voice.start_note(args.note, args.velocity);
    let frequency_hz = voice.frequency();

    let mut held = AudioOutput::new(1, args.hold);
    voice.render_next_block(&mut held, 0, args.hold);
    let held = held.channel(0);

    let peak = held.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
    let detected_hz = strongest_frequency(held, args.sample_rate);

    voice.stop_note(0.0, true);
    let mut tail_samples = 0;
    let mut scratch = AudioOutput::new(1, 1);
    while !voice.is_idle() {
        voice.render_next_block(&mut scratch, 0, 1);
        tail_samples += 1;
    }

    log::debug!("probe rendered {} held + {tail_samples} tail samples", args.hold);

    Ok(ProbeReport {
        frequency_hz,
        detected_hz,
        peak,
        tail_samples,
        expected_tail_samples: tail_length(config.tail_decay, config.tail_threshold),
    })
}

/// Frequency of the loudest bin below Nyquist, Hann windowed.
fn strongest_frequency(samples: &[f32], sample_rate: f64) -> f64 {
    let len = samples.len();
    if len < 2 {
        return 0.0;
    }

    let mut planner = FftPlanner::<f32>::new();
    let fft = planner.plan_fft_forward(len);

    let denom = (len - 1) as f32;
    let mut bins: Vec<Complex<f32>> = samples
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            let w = 0.5 * (1.0 - (2.0 * std::f32::consts::PI * i as f32 / denom).cos());
            Complex::new(s * w, 0.0)
        })
        .collect();

    fft.process(&mut bins);

    let (index, _) = bins[1..len / 2]
        .iter()
        .enumerate()
        .map(|(i, bin)| (i + 1, bin.norm_sqr()))
        .fold((0, 0.0f32), |best, candidate| {
            if candidate.1 > best.1 {
                candidate
            } else {
                best
            }
        });

    index as f64 * sample_rate / len as f64
}
