//! Host integration layer
//!
//! The simulation never touches a window, a speaker or an input device.
//! A `Game` owns one `SimulationState` and forwards each frame's results to
//! whatever renderer and audio backend the platform provides.

use std::time::Duration;

use crate::settings::{ConfigError, FieldConfig};
use crate::sim::{GameEvent, Rect, SeededSpawner, SimulationState, SpawnSource, TickInput, step};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Drop landed in the bucket
    Drop,
}

/// Looping background tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Music {
    Rain,
}

/// Draws a frame
pub trait Renderer {
    fn draw_catcher(&mut self, rect: Rect);
    fn draw_drop(&mut self, rect: Rect);
    fn draw_score(&mut self, text: &str);
}

/// Plays sounds
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
    fn start_music(&mut self, music: Music);
    fn stop_music(&mut self);
}

/// HUD line shown in the top-left corner
pub fn hud_text(score: u64) -> String {
    format!("Drops Collected: {}", score)
}

/// Demo input: chase the lowest live drop with the pointer
pub fn autopilot<S>(state: &SimulationState<S>) -> TickInput {
    let target = state
        .drops()
        .iter()
        .min_by(|a, b| {
            a.rect
                .y()
                .partial_cmp(&b.rect.y())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|d| d.rect.center_x());

    TickInput {
        pointer_x: target,
        ..Default::default()
    }
}

/// Owns the simulation and its collaborators for the lifetime of a run.
///
/// Rain music starts on construction and stops when the game is dropped.
pub struct Game<R: Renderer, A: AudioSink, S: SpawnSource = SeededSpawner> {
    state: SimulationState<S>,
    renderer: R,
    audio: A,
    frames: u64,
}

impl<R: Renderer, A: AudioSink, S: SpawnSource> Game<R, A, S> {
    pub fn new(
        config: FieldConfig,
        source: S,
        renderer: R,
        mut audio: A,
        now: Duration,
    ) -> Result<Self, ConfigError> {
        let state = SimulationState::new(config, source, now)?;
        audio.start_music(Music::Rain);
        Ok(Self {
            state,
            renderer,
            audio,
            frames: 0,
        })
    }

    /// Run one frame: simulate, play sounds, draw
    pub fn frame(&mut self, input: &TickInput, dt: f32, now: Duration) -> Vec<GameEvent> {
        let events = step(&mut self.state, input.intent(), dt, now);
        self.frames += 1;

        for event in &events {
            if let GameEvent::Caught { .. } = event {
                self.audio.play(SoundEffect::Drop);
            }
        }

        self.renderer.draw_score(&hud_text(self.state.score()));
        self.renderer.draw_catcher(self.state.catcher());
        for drop in self.state.drops() {
            self.renderer.draw_drop(drop.rect);
        }

        events
    }

    pub fn state(&self) -> &SimulationState<S> {
        &self.state
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl<R: Renderer, A: AudioSink, S: SpawnSource> Drop for Game<R, A, S> {
    fn drop(&mut self) {
        self.audio.stop_music();
        log::info!(
            "Game finished after {} frames, score {}",
            self.frames,
            self.state.score()
        );
    }
}

/// Renderer that only logs at trace level
#[derive(Debug, Default)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn draw_catcher(&mut self, rect: Rect) {
        log::trace!("bucket at ({:.1}, {:.1})", rect.x(), rect.y());
    }

    fn draw_drop(&mut self, rect: Rect) {
        log::trace!("drop at ({:.1}, {:.1})", rect.x(), rect.y());
    }

    fn draw_score(&mut self, text: &str) {
        log::trace!("{}", text);
    }
}

/// Audio backend that logs instead of playing
#[derive(Debug, Default)]
pub struct LogAudio {
    music: Option<Music>,
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("play {:?}", effect);
    }

    fn start_music(&mut self, music: Music) {
        log::info!("music {:?} started", music);
        self.music = Some(music);
    }

    fn stop_music(&mut self) {
        if let Some(music) = self.music.take() {
            log::info!("music {:?} stopped", music);
        }
    }
}
