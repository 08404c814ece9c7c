//! Driftwood entry point
//!
//! Headless driver: runs the simulation at the fixed timestep with a simple
//! autopilot and logs the run. Useful for balance work and soak-testing the
//! sim without a renderer. Usage: `driftwood [seed] [seconds]`, with an
//! optional tuning file via `DRIFTWOOD_TUNING` (falls back to
//! `./driftwood.json`, then to defaults).

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use glam::Vec2;

use driftwood::Tuning;
use driftwood::consts::SIM_DT;
use driftwood::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
    let seconds: f32 = std::env::args()
        .nth(2)
        .and_then(|s| s.parse().ok())
        .unwrap_or(60.0);

    let tuning = match std::env::var_os("DRIFTWOOD_TUNING") {
        Some(path) => match Tuning::load(Path::new(&path)) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Tuning::load_or_default(Path::new("driftwood.json")),
    };

    log::info!("driftwood starting (seed {seed}, {seconds}s)");
    let mut state = GameState::with_tuning(seed, tuning);

    let mut runs = 1u32;
    let mut best = 0u32;
    let mut last_target: Option<f32> = None;

    for _ in 0..(seconds / SIM_DT) as u64 {
        let input = autopilot(&state, &mut last_target);
        tick(&mut state, &input, SIM_DT);

        for event in state.drain_events() {
            match event {
                GameEvent::PairSpawned { gap_center_x } => {
                    log::debug!("pair spawned, gap at {gap_center_x:.1}");
                }
                GameEvent::Scored { score } => log::info!("score {score}"),
                GameEvent::GameOver { score } => {
                    best = best.max(score);
                    log::info!("run {runs} over at score {score}");
                }
                GameEvent::Reset => {
                    runs += 1;
                    last_target = None;
                }
            }
        }
    }

    best = best.max(state.score);
    log::info!("finished: {runs} run(s), best score {best}");
}

/// Steer toward the gap of the lowest pair still above the boat; tap to
/// restart once a run ends.
fn autopilot(state: &GameState, last_target: &mut Option<f32>) -> TickInput {
    if state.phase == GamePhase::GameOver {
        return TickInput {
            pointer: Some(Vec2::ZERO),
            pointer_up: false,
        };
    }

    let target = state
        .obstacles
        .iter()
        .filter(|p| p.y() > state.boat.pos.y)
        .min_by(|a, b| {
            a.y()
                .partial_cmp(&b.y())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|p| p.gap_center_x);

    match target {
        Some(x) if last_target.is_none_or(|t| (t - x).abs() > 1.0) => {
            *last_target = Some(x);
            TickInput {
                pointer: Some(Vec2::new(x, state.boat.pos.y)),
                pointer_up: false,
            }
        }
        _ => TickInput::default(),
    }
}
