//! Fixed timestep simulation tick
//!
//! One call advances the whole game by a single step: input routing, spawn
//! scheduling, scheduled motion, then contact resolution. All motion runs
//! against the global time scale, so freezing it to 0 pauses the spawn
//! cadence, the obstacles, and the boat in one place.

use glam::Vec2;

use super::collision::{gather_contacts, resolve_contact, Category, ContactOutcome};
use super::spawn::run_spawner;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Pointer-down position this tick. Routed to the player controller
    /// while playing, to the reset path while game over.
    pub pointer: Option<Vec2>,
    /// Pointer released this tick; cancels any in-flight boat move
    pub pointer_up: bool,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    state.time_ticks += 1;

    // Input routing
    if let Some(pointer) = input.pointer {
        match state.phase {
            GamePhase::Playing => {
                let tuning = state.tuning;
                state.boat.command_move(pointer.x, &tuning);
            }
            GamePhase::GameOver => state.reset(),
        }
    }
    if input.pointer_up && state.phase == GamePhase::Playing {
        state.boat.cancel_move();
    }

    // Everything scheduled runs against the same time scale
    let scaled_dt = dt * state.time_scale;

    // Spawn scheduling
    run_spawner(state, scaled_dt);

    // Scheduled motion
    state.boat.advance(scaled_dt);
    for pair in &mut state.obstacles {
        pair.motion.advance(scaled_dt);
    }
    // Entities leave the simulation the moment their motion completes
    state.obstacles.retain(|pair| !pair.finished());

    // Contact gathering: overlaps this step, edge-filtered against last step
    let overlaps = gather_contacts(state);
    let begins: Vec<_> = overlaps
        .iter()
        .copied()
        .filter(|c| !state.was_touching(c.entity_id))
        .collect();
    state.set_touching(overlaps.iter().map(|c| c.entity_id).collect());

    // Resolution: all contacts from this step, before any further motion.
    // Nothing is processed once the run has ended.
    for contact in begins {
        if state.phase != GamePhase::Playing {
            break;
        }
        match resolve_contact(Category::Boat, contact.category) {
            Some(ContactOutcome::Score) => {
                state.score += 1;
                let score = state.score;
                log::debug!("gap cleared, score {score}");
                state.push_event(GameEvent::Scored { score });
            }
            Some(ContactOutcome::Fatal) => {
                state.time_scale = 0.0;
                state.phase = GamePhase::GameOver;
                let score = state.score;
                log::info!("fatal contact, run over at score {score}");
                state.push_event(GameEvent::GameOver { score });
            }
            None => {}
        }
    }
}
