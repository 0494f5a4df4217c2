//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed!

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Session begins
    GameStart,
    /// Correct snippet caught
    Correct,
    /// Bug caught
    Bug,
    /// Correct snippet fell through
    Miss,
    LevelUp,
    GameOver,
    ButtonHover,
    ButtonClick,
}

impl From<GameEvent> for SoundEffect {
    fn from(event: GameEvent) -> Self {
        match event {
            GameEvent::GameStarted => SoundEffect::GameStart,
            GameEvent::CaughtCorrect => SoundEffect::Correct,
            GameEvent::CaughtBug => SoundEffect::Bug,
            GameEvent::MissedCorrect => SoundEffect::Miss,
            GameEvent::LevelUp { .. } => SoundEffect::LevelUp,
            GameEvent::GameOver { .. } => SoundEffect::GameOver,
            GameEvent::ButtonHover => SoundEffect::ButtonHover,
            GameEvent::ButtonClick => SoundEffect::ButtonClick,
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            master_volume: settings.master_volume.clamp(0.0, 1.0),
            sfx_volume: settings.sfx_volume.clamp(0.0, 1.0),
            muted: settings.muted,
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play the cue for a simulation event
    pub fn play_event(&self, event: GameEvent) {
        self.play(event.into());
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }

        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::GameStart => self.play_game_start(ctx, vol),
            SoundEffect::Correct => self.play_correct(ctx, vol),
            SoundEffect::Bug => self.play_bug(ctx, vol),
            SoundEffect::Miss => self.play_miss(ctx, vol),
            SoundEffect::LevelUp => self.play_level_up(ctx, vol),
            SoundEffect::GameOver => self.play_game_over(ctx, vol),
            SoundEffect::ButtonHover => self.play_hover(ctx, vol),
            SoundEffect::ButtonClick => self.play_click(ctx, vol),
        }
    }

    // === Sound generators ===

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Notes played one after another, each decaying over `decay` seconds
    fn play_notes(
        &self,
        ctx: &AudioContext,
        notes: &[f32],
        spacing: f64,
        decay: f64,
        osc_type: OscillatorType,
        level: f32,
    ) {
        for (i, freq) in notes.iter().enumerate() {
            let delay = i as f64 * spacing;
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, osc_type) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(level, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + decay)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + decay + 0.05).ok();
            }
        }
    }

    /// Game start - rising arpeggio
    fn play_game_start(&self, ctx: &AudioContext, vol: f32) {
        self.play_notes(
            ctx,
            &[400.0, 500.0, 600.0, 800.0],
            0.08,
            0.2,
            OscillatorType::Triangle,
            vol * 0.3,
        );
    }

    /// Correct catch - bright two-note ding
    fn play_correct(&self, ctx: &AudioContext, vol: f32) {
        self.play_notes(
            ctx,
            &[880.0, 1320.0],
            0.06,
            0.15,
            OscillatorType::Sine,
            vol * 0.3,
        );
    }

    /// Bug caught - harsh descending buzz
    fn play_bug(&self, ctx: &AudioContext, vol: f32) {
        let t = ctx.current_time();

        if let Some((osc, gain)) = self.create_osc(ctx, 220.0, OscillatorType::Sawtooth) {
            gain.gain().set_value_at_time(vol * 0.35, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                .ok();
            osc.frequency().set_value_at_time(220.0, t).ok();
            osc.frequency()
                .exponential_ramp_to_value_at_time(70.0, t + 0.3)
                .ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.35).ok();
        }

        // Crackle on top
        if let Some((osc, gain)) = self.create_osc(ctx, 120.0, OscillatorType::Square) {
            gain.gain().set_value_at_time(vol * 0.15, t).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, t + 0.15)
                .ok();
            osc.frequency().set_value_at_time(120.0, t).ok();
            osc.frequency().set_value_at_time(400.0, t + 0.02).ok();
            osc.frequency().set_value_at_time(150.0, t + 0.04).ok();
            osc.frequency().set_value_at_time(350.0, t + 0.06).ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.2).ok();
        }
    }

    /// Missed snippet - soft low thud
    fn play_miss(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 200.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.35, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.25)
            .ok();
        osc.frequency().set_value_at_time(200.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(80.0, t + 0.25)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.3).ok();
    }

    /// Level up - triumphant fanfare
    fn play_level_up(&self, ctx: &AudioContext, vol: f32) {
        self.play_notes(
            ctx,
            &[500.0, 600.0, 700.0, 800.0, 1000.0],
            0.08,
            0.25,
            OscillatorType::Triangle,
            vol * 0.25,
        );
    }

    /// Game over - sad descending
    fn play_game_over(&self, ctx: &AudioContext, vol: f32) {
        self.play_notes(
            ctx,
            &[400.0, 350.0, 300.0, 200.0],
            0.2,
            0.3,
            OscillatorType::Sine,
            vol * 0.3,
        );
    }

    /// Button hover - faint tick
    fn play_hover(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 1200.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.1, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.04)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.05).ok();
    }

    /// Button click - short square blip
    fn play_click(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 600.0, OscillatorType::Square) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.2, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.08)
            .ok();
        osc.frequency().set_value_at_time(600.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(900.0, t + 0.05)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.1).ok();
    }
}
