//! Audio system using Web Audio API
//!
//! Procedurally generated beeps - no external files needed. The tone table
//! and event mapping are plain data so they can be tested natively; only
//! `AudioManager` touches the browser.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits paddle
    PaddleHit,
    /// Ball hits top/bottom wall
    WallBounce,
    /// A player scored
    Score,
    /// Countdown step
    CountdownTick,
}

impl SoundEffect {
    /// Sound to play for a simulation event, if any
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PaddleHit { .. } => Some(SoundEffect::PaddleHit),
            GameEvent::WallBounce => Some(SoundEffect::WallBounce),
            GameEvent::Scored { .. } => Some(SoundEffect::Score),
            GameEvent::CountdownTick { .. } => Some(SoundEffect::CountdownTick),
            GameEvent::CountdownDone => None,
        }
    }

    /// Oscillator settings for this effect
    pub fn tone(&self) -> Tone {
        match self {
            SoundEffect::PaddleHit => Tone::new(520.0, 0.05, 0.06, Waveform::Square),
            SoundEffect::WallBounce => Tone::new(380.0, 0.04, 0.05, Waveform::Triangle),
            SoundEffect::Score => Tone::new(240.0, 0.12, 0.07, Waveform::Sawtooth),
            // Countdown reuses the wall blip
            SoundEffect::CountdownTick => SoundEffect::WallBounce.tone(),
        }
    }
}

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Square,
    Triangle,
    Sawtooth,
}

/// A single enveloped beep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq: f32,
    /// Seconds until the envelope has decayed
    pub duration: f64,
    /// Peak gain before volume scaling
    pub gain: f32,
    pub waveform: Waveform,
}

/// Attack time of every beep (seconds)
pub const ATTACK: f64 = 0.005;
/// Level the exponential decay ends on (can't ramp to zero)
pub const DECAY_FLOOR: f32 = 0.0001;
/// Extra time the oscillator runs after the decay
pub const RELEASE_TAIL: f64 = 0.02;

impl Tone {
    pub const fn new(freq: f32, duration: f64, gain: f32, waveform: Waveform) -> Self {
        Self {
            freq,
            duration,
            gain,
            waveform,
        }
    }

    /// Peak gain at the given output volume
    pub fn peak(&self, volume: f32) -> f32 {
        self.gain * volume
    }

    /// When the oscillator stops, relative to its start
    pub fn stop_after(&self) -> f64 {
        self.duration + RELEASE_TAIL
    }
}

/// Combined output volume; zero when muted
pub fn effective_volume(master: f32, sfx: f32, muted: bool) -> f32 {
    if muted {
        0.0
    } else {
        (master * sfx).clamp(0.0, 1.0)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{ATTACK, DECAY_FLOOR, SoundEffect, Tone, Waveform, effective_volume};
    use crate::settings::Settings;

    impl From<Waveform> for OscillatorType {
        fn from(w: Waveform) -> Self {
            match w {
                Waveform::Square => OscillatorType::Square,
                Waveform::Triangle => OscillatorType::Triangle,
                Waveform::Sawtooth => OscillatorType::Sawtooth,
            }
        }
    }

    /// Audio manager for the game
    ///
    /// The context is created on the first user gesture (`unlock`);
    /// browsers refuse to start audio before that.
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        master_volume: f32,
        sfx_volume: f32,
        muted: bool,
    }

    impl AudioManager {
        pub fn new(settings: &Settings) -> Self {
            Self {
                ctx: None,
                master_volume: settings.master_volume,
                sfx_volume: settings.sfx_volume,
                muted: settings.muted,
            }
        }

        /// Create (or resume) the audio context; call from a user gesture
        pub fn unlock(&mut self) {
            if self.ctx.is_none() {
                match AudioContext::new() {
                    Ok(ctx) => self.ctx = Some(ctx),
                    Err(_) => {
                        log::warn!("Failed to create AudioContext - audio disabled");
                        return;
                    }
                }
            }
            self.resume();
        }

        /// Resume audio context if the browser suspended it
        fn resume(&self) {
            if let Some(ctx) = &self.ctx {
                if ctx.state() == web_sys::AudioContextState::Suspended {
                    let _ = ctx.resume();
                }
            }
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            let vol = effective_volume(self.master_volume, self.sfx_volume, self.muted);
            if vol <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };
            self.resume();

            if self.beep(ctx, effect.tone(), vol).is_none() {
                log::warn!("Could not play {:?}", effect);
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(&self, ctx: &AudioContext, tone: Tone) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(tone.waveform.into());
            osc.frequency().set_value(tone.freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Quick attack, exponential decay
        fn beep(&self, ctx: &AudioContext, tone: Tone, vol: f32) -> Option<()> {
            let (osc, gain) = self.create_osc(ctx, tone)?;
            let t = ctx.current_time();

            gain.gain().set_value_at_time(0.0, t).ok()?;
            gain.gain()
                .linear_ramp_to_value_at_time(tone.peak(vol), t + ATTACK)
                .ok()?;
            gain.gain()
                .exponential_ramp_to_value_at_time(DECAY_FLOOR, t + tone.duration)
                .ok()?;

            osc.start_with_when(t).ok()?;
            osc.stop_with_when(t + tone.stop_after()).ok()?;
            Some(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Side;

    #[test]
    fn test_event_mapping() {
        assert_eq!(
            SoundEffect::for_event(&GameEvent::PaddleHit { side: Side::Left }),
            Some(SoundEffect::PaddleHit)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::Scored {
                scorer: Side::Left,
                conceded: Side::Right
            }),
            Some(SoundEffect::Score)
        );
        assert_eq!(
            SoundEffect::for_event(&GameEvent::CountdownTick { value: 2 }),
            Some(SoundEffect::CountdownTick)
        );
        assert_eq!(SoundEffect::for_event(&GameEvent::CountdownDone), None);
    }

    #[test]
    fn test_tones() {
        let paddle = SoundEffect::PaddleHit.tone();
        assert_eq!(paddle.freq, 520.0);
        assert_eq!(paddle.waveform, Waveform::Square);
        assert!((paddle.stop_after() - 0.07).abs() < 1e-12);

        assert_eq!(SoundEffect::Score.tone().waveform, Waveform::Sawtooth);
        assert_eq!(SoundEffect::CountdownTick.tone(), SoundEffect::WallBounce.tone());
    }

    #[test]
    fn test_effective_volume() {
        assert_eq!(effective_volume(0.5, 0.5, false), 0.25);
        assert_eq!(effective_volume(1.0, 1.0, true), 0.0);
        assert!((SoundEffect::WallBounce.tone().peak(0.5) - 0.025).abs() < 1e-6);
    }
}
