//! Stickman Shooter entry point
//!
//! Runs a headless autopilot session and prints the final scene as JSON.
//!
//! Usage: `stickman-shooter [tuning.json] [seed]`

#[cfg(not(target_arch = "wasm32"))]
fn main() -> stickman_shooter::Result<()> {
    use stickman_shooter::Tuning;
    use stickman_shooter::consts::SIM_DT;
    use stickman_shooter::platform::{AutopilotHost, FrameClock, run_session};
    use stickman_shooter::sim::GameState;

    /// Two simulated minutes at 60 Hz
    const MAX_FRAMES: u64 = 2 * 60 * 60;
    const MAX_RESETS: u32 = 2;

    env_logger::init();
    log::info!("Stickman Shooter (headless) starting...");

    let mut tuning = Tuning::default();
    let mut seed = None;
    for arg in std::env::args().skip(1) {
        match arg.parse::<u64>() {
            Ok(n) => seed = Some(n),
            Err(_) => tuning = Tuning::load(&arg)?,
        }
    }
    let seed = seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
    });

    let mut state = GameState::with_tuning(seed, tuning);
    let mut host = AutopilotHost::new(MAX_FRAMES, MAX_RESETS);
    let mut clock = FrameClock::default();
    run_session(&mut state, &mut host, &mut clock, SIM_DT);

    for (i, round) in host.rounds().iter().enumerate() {
        log::info!(
            "Round {}: score {} ({} kills, {} shots, {} hits taken)",
            i + 1,
            round.score,
            round.kills,
            round.shots,
            round.hits_taken
        );
    }
    if state.phase == stickman_shooter::sim::GamePhase::Playing {
        log::info!("Unfinished round: score {}", host.current().score);
    }

    let scene = serde_json::to_string_pretty(&state.snapshot())?;
    println!("{scene}");
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser host yet; the library is the wasm surface
}
