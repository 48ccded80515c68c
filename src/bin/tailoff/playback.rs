//! Live playback through the default cpal output device.

use std::{thread, time::Duration};

use color_eyre::eyre::{bail, eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::RingBuffer;
use tailoff::{
    synth::{message::SynthMessage, mono::MonoSynth},
    VoiceConfig, MAX_BLOCK_SIZE,
};

use super::args::Args;

/// Time left for the tail to ring out after the note-off is sent.
const TAIL_GRACE: Duration = Duration::from_millis(250);

pub fn run(args: &Args) -> EyreResult<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;
    if config.sample_format() != cpal::SampleFormat::F32 {
        bail!("output device must accept f32 samples, got {:?}", config.sample_format());
    }

    let sample_rate = config.sample_rate().0 as f64;
    let channels = config.channels() as usize;
    log::info!("output: {sample_rate} Hz, {channels} channels");

    let (mut tx, rx) = RingBuffer::<SynthMessage>::new(64);
    let voice_config = VoiceConfig::default().with_waveform(args.waveform);
    let mut synth = MonoSynth::new(voice_config, sample_rate, rx)?;

    // Buffer reused by audio callback
    let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

    let stream = device
        .build_output_stream(
            &config.into(),
            move |data: &mut [f32], _| {
                let total_frames = data.len() / channels;
                let mut frames_written = 0;
                while frames_written < total_frames {
                    let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);

                    let block = &mut render_buf[..frames_to_render];
                    block.fill(0.0);
                    {
                        let mut planar: [&mut [f32]; 1] = [&mut *block];
                        synth.render_block(&mut planar[..], 0, frames_to_render);
                    }

                    // Duplicate mono to all channels and write to device
                    let out_off = frames_written * channels;
                    for (i, &s) in block.iter().enumerate() {
                        for ch in 0..channels {
                            data[out_off + i * channels + ch] = s;
                        }
                    }

                    frames_written += frames_to_render;
                }
            },
            move |err| eprintln!("Stream error: {err}"),
            None,
        )
        .wrap_err("failed to build output stream")?;

    stream.play().wrap_err("failed to start output stream")?;

    let velocity = (args.velocity.clamp(0.0, 1.0) * 127.0).round() as u8;
    tx.push(SynthMessage::NoteOn {
        note: args.note,
        velocity,
    })
    .map_err(|_| eyre!("message queue full"))?;
    println!("note {} on ({})", args.note, args.waveform.name());

    thread::sleep(Duration::from_millis(args.millis));

    tx.push(SynthMessage::NoteOff {
        note: args.note,
        velocity: 0,
    })
    .map_err(|_| eyre!("message queue full"))?;
    println!("note {} off, tailing off", args.note);

    thread::sleep(TAIL_GRACE);
    Ok(())
}
