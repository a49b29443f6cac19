//! Two-tone transition chime synthesised with rodio

use std::{f32::consts::TAU, thread, time::Duration};

use rodio::{OutputStream, Sink, Source};
use tracing::{debug, warn};

use super::audio::{AudioCue, AudioCueError};

/// Pitch of the first beep
pub const FIRST_TONE_HZ: f32 = 800.0;
/// Pitch of the second beep
pub const SECOND_TONE_HZ: f32 = 1000.0;
/// Delay between the start of the first and the second beep
pub const SECOND_TONE_DELAY: Duration = Duration::from_millis(200);
/// Length of each beep
pub const TONE_DURATION: Duration = Duration::from_millis(500);
/// Gain at the start of a beep
pub const START_GAIN: f32 = 0.3;
/// Gain a beep decays to by the time it stops
pub const END_GAIN: f32 = 0.01;

const SAMPLE_RATE: u32 = 44_100;

/// A single sine beep with an exponential gain decay
#[derive(Debug, Clone)]
pub struct Beep {
    frequency: f32,
    sample_rate: u32,
    index: usize,
    len: usize,
}

impl Beep {
    pub fn new(frequency: f32) -> Self {
        Self::with_sample_rate(frequency, SAMPLE_RATE)
    }

    pub fn with_sample_rate(frequency: f32, sample_rate: u32) -> Self {
        let len = (TONE_DURATION.as_secs_f32() * sample_rate as f32).round() as usize;
        Self {
            frequency,
            sample_rate,
            index: 0,
            len,
        }
    }

    /// Gain envelope at `t` seconds into the beep
    pub fn gain_at(t: f32) -> f32 {
        let ratio = (t / TONE_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        START_GAIN * (END_GAIN / START_GAIN).powf(ratio)
    }
}

impl Iterator for Beep {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        if self.index >= self.len {
            return None;
        }
        let t = self.index as f32 / self.sample_rate as f32;
        self.index += 1;
        Some(Self::gain_at(t) * (TAU * self.frequency * t).sin())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.len - self.index;
        (left, Some(left))
    }
}

impl Source for Beep {
    fn current_frame_len(&self) -> Option<usize> {
        Some(self.len - self.index)
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        Some(TONE_DURATION)
    }
}

/// Transition cue played on the default output device.
///
/// Every call opens its own output stream on a short-lived thread and
/// drops it once both beeps have finished.
#[derive(Debug, Default, Clone, Copy)]
pub struct ToneCue;

impl ToneCue {
    fn play_blocking() -> Result<(), AudioCueError> {
        let (_stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;

        let second = Beep::new(SECOND_TONE_HZ).delay(SECOND_TONE_DELAY);
        let chime = Beep::new(FIRST_TONE_HZ).mix(second);
        sink.append(chime);
        sink.sleep_until_end();

        debug!("Transition cue finished");
        Ok(())
    }
}

impl AudioCue for ToneCue {
    fn play_transition_cue(&self) -> Result<(), AudioCueError> {
        thread::Builder::new()
            .name("transition-cue".to_string())
            .spawn(|| {
                if let Err(e) = Self::play_blocking() {
                    warn!("Audio not supported: {}", e);
                }
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beep_lasts_half_a_second() {
        let beep = Beep::with_sample_rate(FIRST_TONE_HZ, 8_000);
        assert_eq!(beep.current_frame_len(), Some(4_000));
        assert_eq!(beep.count(), 4_000);
    }

    #[test]
    fn envelope_decays_from_start_to_end_gain() {
        assert!((Beep::gain_at(0.0) - START_GAIN).abs() < 1e-6);
        assert!((Beep::gain_at(TONE_DURATION.as_secs_f32()) - END_GAIN).abs() < 1e-6);
        assert!(Beep::gain_at(0.1) > Beep::gain_at(0.2));
        assert!(Beep::gain_at(0.4) > END_GAIN);
    }

    #[test]
    fn samples_stay_under_envelope() {
        let rate = 8_000;
        for (i, sample) in Beep::with_sample_rate(SECOND_TONE_HZ, rate).enumerate() {
            let t = i as f32 / rate as f32;
            assert!(sample.abs() <= Beep::gain_at(t) + 1e-6);
        }
    }
}
