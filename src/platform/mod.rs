//! Platform abstraction layer
//!
//! The simulation never reads keys or draws pixels. A host feeds it input
//! snapshots and receives scene descriptions back:
//! - `Host`: input source + presenter
//! - `FrameClock`: fixed-step accumulator turning frame time into ticks
//! - `run_session`: the tick driver

pub mod autopilot;

pub use autopilot::AutopilotHost;

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::{GameEvent, GameState, SceneDescription, TickInput, tick};

/// The outside world as seen by the simulation
pub trait Host {
    /// Input for the next frame, or `None` to end the session
    fn poll_input(&mut self, scene: &SceneDescription) -> Option<TickInput>;

    /// Show a frame along with the events its ticks produced
    fn present(&mut self, scene: &SceneDescription, events: &[GameEvent]);
}

/// Fixed timestep accumulator
#[derive(Debug, Clone)]
pub struct FrameClock {
    step: f64,
    max_substeps: u32,
    accumulator: f64,
    /// Logical time of the last tick handed out
    now: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FrameClock {
    pub fn new(step: f64, max_substeps: u32) -> Self {
        Self {
            step,
            max_substeps,
            accumulator: 0.0,
            now: 0.0,
        }
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    /// Timestamps of the ticks owed for a frame that took `frame_dt` seconds.
    ///
    /// At most `max_substeps` ticks are returned; time beyond that is dropped.
    pub fn ticks(&mut self, frame_dt: f64) -> Vec<f64> {
        self.accumulator += frame_dt.max(0.0);

        let mut stamps = Vec::new();
        while self.accumulator >= self.step && (stamps.len() as u32) < self.max_substeps {
            self.accumulator -= self.step;
            self.now += self.step;
            stamps.push(self.now);
        }

        if self.accumulator >= self.step {
            log::warn!("Dropping {:.3}s of simulation time", self.accumulator);
            self.accumulator = 0.0;
        }
        stamps
    }
}

/// Drive `state` until the host ends the session. Returns the number of frames run.
///
/// One-shot inputs (weapon switch, reset) reach exactly one tick: the first
/// tick after the press. A press during a frame that runs no ticks stays
/// pending until one does.
pub fn run_session<H: Host>(
    state: &mut GameState,
    host: &mut H,
    clock: &mut FrameClock,
    frame_dt: f64,
) -> u64 {
    let mut frames = 0;
    let mut events = Vec::new();
    let mut pending_switch = false;
    let mut pending_reset = false;

    while let Some(mut input) = host.poll_input(&state.snapshot()) {
        events.clear();
        pending_switch |= input.switch_weapon;
        pending_reset |= input.reset;

        for now in clock.ticks(frame_dt) {
            input.switch_weapon = std::mem::take(&mut pending_switch);
            input.reset = std::mem::take(&mut pending_reset);
            tick(state, &input, now);
            events.extend_from_slice(&state.events);
        }

        host.present(&state.snapshot(), &events);
        frames += 1;
    }

    log::info!("Session ended after {frames} frames");
    frames
}
