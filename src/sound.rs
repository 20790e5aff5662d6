//! Synthesized audio cues. No sample files: every cue is a short
//! fundsp graph rendered through a detached rodio sink.

use fundsp::prelude::*;
use rodio::{self, OutputStream, OutputStreamBuilder, Sink, mixer::Mixer};
use std::time::Duration;

/// Handle to the three game cues. Constructed once and handed to the
/// game; a missing output device degrades every cue to a no-op.
pub struct Sounds {
    stream: Option<OutputStream>,
}

impl Sounds {
    pub fn open() -> Self {
        Self {
            stream: OutputStreamBuilder::open_default_stream().ok(),
        }
    }

    /// No audio output at all.
    #[cfg(test)]
    pub fn silent() -> Self {
        Self { stream: None }
    }

    pub fn flap(&self) {
        if let Some(stream) = &self.stream {
            play_flap(stream.mixer());
        }
    }

    pub fn score(&self) {
        if let Some(stream) = &self.stream {
            play_score(stream.mixer());
        }
    }

    pub fn death(&self) {
        if let Some(stream) = &self.stream {
            play_death(stream.mixer());
        }
    }
}

fn play_flap(mixer: &Mixer) {
    let sink = Sink::connect_new(mixer);

    // Rising chirp (320Hz to 740Hz over 0.09s), fading out over 0.12s
    let freq = lfo(|t: f64| lerp11(320.0, 740.0, (t / 0.09).min(1.0)));
    let gain = lfo(|t: f64| lerp11(0.12, 0.0, (t / 0.12).min(1.0)));
    let sound = freq >> triangle() >> mul(gain);

    let source = rodio::source::from_iter(sound.take(44100 * 0.12))
        .convert_samples::<f32>()
        .periodic_samples(Duration::from_secs_f32(1.0 / 44100.0), 1);

    sink.append(source);
    sink.detach();
}

fn play_score(mixer: &Mixer) {
    let sink = Sink::connect_new(mixer);

    // Two-tone ding: A5 then D6, fading out over 0.18s
    let freq = lfo(|t: f64| if t < 0.08 { 880.0 } else { 1174.7 });
    let gain = lfo(|t: f64| lerp11(0.14, 0.0, (t / 0.18).min(1.0)));
    let sound = freq >> sine() >> mul(gain);

    let source = rodio::source::from_iter(sound.take(44100 * 0.18))
        .convert_samples::<f32>()
        .periodic_samples(Duration::from_secs_f32(1.0 / 44100.0), 1);

    sink.append(source);
    sink.detach();
}

fn play_death(mixer: &Mixer) {
    let sink = Sink::connect_new(mixer);

    // Falling sweep (400Hz to 80Hz over 0.4s), fading out over 0.5s
    let freq = lfo(|t: f64| lerp11(400.0, 80.0, (t / 0.4).min(1.0)));
    let gain = lfo(|t: f64| lerp11(0.15, 0.0, (t / 0.5).min(1.0)));
    let sound = freq >> saw() >> mul(gain);

    let source = rodio::source::from_iter(sound.take(44100 * 0.5))
        .convert_samples::<f32>()
        .periodic_samples(Duration::from_secs_f32(1.0 / 44100.0), 1);

    sink.append(source);
    sink.detach();
}
