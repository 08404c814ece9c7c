//! Game state and core simulation types
//!
//! All state that must be persisted for determinism lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::Aabb;
use crate::tuning::Tuning;
use crate::{clamp_to_channel, distance};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended on a fatal contact; waiting for reset input
    GameOver,
}

/// A scheduled translation from `start` to `end` over `duration` sim-seconds.
///
/// Advanced explicitly each tick by `dt * time_scale`, so a time scale of 0
/// freezes every task in place without cancelling it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoveTask {
    pub start: Vec2,
    pub end: Vec2,
    pub duration: f32,
    pub elapsed: f32,
}

impl MoveTask {
    pub fn new(start: Vec2, end: Vec2, duration: f32) -> Self {
        Self {
            start,
            end,
            duration,
            elapsed: 0.0,
        }
    }

    /// Advance by an already-time-scaled dt
    pub fn advance(&mut self, scaled_dt: f32) {
        self.elapsed += scaled_dt;
    }

    /// Current interpolated position
    pub fn pos(&self) -> Vec2 {
        if self.duration <= 0.0 {
            return self.end;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.start.lerp(self.end, t)
    }

    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// The player's boat
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boat {
    /// Current position (center of the sprite)
    pub pos: Vec2,
    /// Half-extents of the hull collider
    pub half: Vec2,
    /// In-flight move, if any. A new command replaces it; pointer release
    /// cancels it. This is the single "move to tap" slot.
    move_task: Option<MoveTask>,
}

impl Boat {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Self::spawn_pos(tuning),
            half: Vec2::new(tuning.boat_width / 2.0, tuning.boat_height / 2.0),
            move_task: None,
        }
    }

    /// Default spawn point: mid-channel, baseline above the bottom edge
    pub fn spawn_pos(tuning: &Tuning) -> Vec2 {
        Vec2::new(
            tuning.screen_width / 2.0,
            tuning.boat_baseline + tuning.boat_height / 2.0,
        )
    }

    /// Schedule a lateral move toward the requested X.
    ///
    /// The target is clamped into the channel, Y is held fixed, and the
    /// duration is distance over the fixed boat speed. Replaces any move
    /// already in flight.
    pub fn command_move(&mut self, requested_x: f32, tuning: &Tuning) {
        let target = Vec2::new(
            clamp_to_channel(requested_x, self.half.x, tuning.screen_width),
            self.pos.y,
        );
        let duration = distance(self.pos, target) / tuning.boat_speed;
        self.move_task = Some(MoveTask::new(self.pos, target, duration));
    }

    /// Cancel the in-flight move, leaving the boat where it is
    pub fn cancel_move(&mut self) {
        self.move_task = None;
    }

    pub fn moving(&self) -> bool {
        self.move_task.is_some()
    }

    /// Advance the in-flight move by an already-time-scaled dt
    pub fn advance(&mut self, scaled_dt: f32) {
        if let Some(task) = &mut self.move_task {
            task.advance(scaled_dt);
            self.pos = task.pos();
            if task.finished() {
                self.move_task = None;
            }
        }
    }

    /// Reposition to the default spawn point and drop any in-flight move
    pub fn respawn(&mut self, tuning: &Tuning) {
        self.pos = Self::spawn_pos(tuning);
        self.move_task = None;
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, self.half)
    }
}

/// One spawn cycle's worth of obstacles: left log, right log, gap sensor.
///
/// The three collidables are created atomically, share one downward motion,
/// and are removed together when it completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstaclePair {
    pub left_id: u32,
    pub right_id: u32,
    pub sensor_id: u32,
    /// Center X of the scoring gap
    pub gap_center_x: f32,
    /// Width of the scoring gap
    pub gap_width: f32,
    /// Tick the pair was created on
    pub spawn_tick: u64,
    /// Shared top-to-bottom translation
    pub motion: MoveTask,
}

impl ObstaclePair {
    /// Current vertical position shared by all three entities
    pub fn y(&self) -> f32 {
        self.motion.pos().y
    }

    /// Left log collider; its right edge sits at `gap_center_x - gap_width/2`
    pub fn left_aabb(&self, tuning: &Tuning) -> Aabb {
        let center_x = self.gap_center_x - self.gap_width / 2.0 - tuning.log_width / 2.0;
        Aabb::from_size(
            Vec2::new(center_x, self.y()),
            tuning.log_width,
            tuning.log_height,
        )
    }

    /// Right log collider; its left edge sits at `gap_center_x + gap_width/2`
    pub fn right_aabb(&self, tuning: &Tuning) -> Aabb {
        let center_x = self.gap_center_x + self.gap_width / 2.0 + tuning.log_width / 2.0;
        Aabb::from_size(
            Vec2::new(center_x, self.y()),
            tuning.log_width,
            tuning.log_height,
        )
    }

    /// Invisible scoring region between the logs
    pub fn sensor_aabb(&self, tuning: &Tuning) -> Aabb {
        Aabb::from_size(
            Vec2::new(self.gap_center_x, self.y()),
            self.gap_width,
            tuning.gap_sensor_height,
        )
    }

    pub fn finished(&self) -> bool {
        self.motion.finished()
    }
}

/// Events emitted by the simulation for the presentation layer.
///
/// Score text, the game-over prompt, and the wake particle effect all key
/// off these rather than reaching into the state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A new obstacle pair entered the playfield
    PairSpawned { gap_center_x: f32 },
    /// The boat cleared a gap
    Scored { score: u32 },
    /// Fatal contact; the simulation is frozen
    GameOver { score: u32 },
    /// The game was reset to a fresh run
    Reset,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; consumed only by the gap generator
    pub rng: Pcg32,
    /// Gaps cleared this run
    pub score: u32,
    /// Current phase
    pub phase: GamePhase,
    /// Global multiplier on all scheduled motion; 0 = fully paused
    pub time_scale: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Accumulator toward the next spawn cycle
    pub spawn_timer: f32,
    /// The player's boat
    pub boat: Boat,
    /// Live obstacle pairs in spawn order
    pub obstacles: Vec<ObstaclePair>,
    /// Balance values for this run
    pub tuning: Tuning,
    /// Entity ids overlapping the boat last step, for begin-contact edges
    #[serde(default)]
    touching: Vec<u32>,
    /// Pending events for the presentation layer
    #[serde(skip)]
    events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            phase: GamePhase::Playing,
            time_scale: 1.0,
            time_ticks: 0,
            // Primed so the first cycle fires on the first tick
            spawn_timer: tuning.spawn_period,
            boat: Boat::new(&tuning),
            obstacles: Vec::new(),
            tuning,
            touching: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain pending events (presentation layer calls this once per frame)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Whether the entity was already overlapping the boat last step
    pub(crate) fn was_touching(&self, entity_id: u32) -> bool {
        self.touching.contains(&entity_id)
    }

    pub(crate) fn set_touching(&mut self, ids: Vec<u32>) {
        self.touching = ids;
    }

    /// Start a fresh run: score and phase back to their initial values,
    /// motion unfrozen, boat respawned, in-flight obstacles cleared. The
    /// spawn accumulator carries over so the cadence resumes where it was.
    pub fn reset(&mut self) {
        self.score = 0;
        self.phase = GamePhase::Playing;
        self.time_scale = 1.0;
        let tuning = self.tuning;
        self.boat.respawn(&tuning);
        self.obstacles.clear();
        self.touching.clear();
        self.push_event(GameEvent::Reset);
        log::info!("game reset");
    }
}
