//! Contact classification and gathering
//!
//! Contacts are detection-only: no momentum transfer, no position correction.
//! Each step collects boat-vs-collidable overlaps, and a pure category
//! lookup decides the outcome of each new contact.

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// Collider category. The boat contact-tests against obstacles and gap
/// sensors; obstacles and sensors never test against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// The player's craft
    Boat,
    /// A solid log; contact ends the run
    Obstacle,
    /// The invisible scoring region between a log pair
    GapSensor,
}

/// Outcome of a classified contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Gap cleared: score one point
    Score,
    /// Run over: freeze the simulation
    Fatal,
}

/// A contact between the boat and one other collidable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    /// The non-boat entity
    pub entity_id: u32,
    pub category: Category,
}

/// Classify a contact pair by category alone.
///
/// A gap sensor on either side always means a scoring contact; a boat/log
/// pair is fatal. The two outcomes are mutually exclusive by construction.
/// Pairs that never contact-test against each other resolve to `None`.
pub fn resolve_contact(a: Category, b: Category) -> Option<ContactOutcome> {
    use Category::*;
    match (a, b) {
        (GapSensor, Boat) | (Boat, GapSensor) => Some(ContactOutcome::Score),
        (Obstacle, Boat) | (Boat, Obstacle) => Some(ContactOutcome::Fatal),
        _ => None,
    }
}

/// Collect every collidable currently overlapping the boat, in spawn order.
///
/// Edge detection (begin-contact vs. still-in-contact) is the caller's job,
/// using the state's previous-step touching set.
pub fn gather_contacts(state: &GameState) -> Vec<Contact> {
    let boat = state.boat.aabb();
    let tuning = &state.tuning;
    let mut contacts = Vec::new();

    for pair in &state.obstacles {
        let colliders = [
            (pair.left_id, Category::Obstacle, pair.left_aabb(tuning)),
            (pair.right_id, Category::Obstacle, pair.right_aabb(tuning)),
            (pair.sensor_id, Category::GapSensor, pair.sensor_aabb(tuning)),
        ];
        for (entity_id, category, aabb) in colliders {
            if boat.intersects(&aabb) {
                contacts.push(Contact {
                    entity_id,
                    category,
                });
            }
        }
    }

    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{MoveTask, ObstaclePair};
    use glam::Vec2;

    #[test]
    fn test_gap_contact_scores() {
        assert_eq!(
            resolve_contact(Category::Boat, Category::GapSensor),
            Some(ContactOutcome::Score)
        );
        assert_eq!(
            resolve_contact(Category::GapSensor, Category::Boat),
            Some(ContactOutcome::Score)
        );
    }

    #[test]
    fn test_obstacle_contact_is_fatal() {
        assert_eq!(
            resolve_contact(Category::Boat, Category::Obstacle),
            Some(ContactOutcome::Fatal)
        );
        assert_eq!(
            resolve_contact(Category::Obstacle, Category::Boat),
            Some(ContactOutcome::Fatal)
        );
    }

    #[test]
    fn test_non_boat_pairs_do_not_resolve() {
        assert_eq!(resolve_contact(Category::Obstacle, Category::GapSensor), None);
        assert_eq!(resolve_contact(Category::Obstacle, Category::Obstacle), None);
        assert_eq!(resolve_contact(Category::Boat, Category::Boat), None);
    }

    /// Drop a pair level with the boat, gap centered on the given X
    fn pair_at_boat_height(state: &mut GameState, gap_center_x: f32) -> ObstaclePair {
        let y = state.boat.pos.y;
        ObstaclePair {
            left_id: state.next_entity_id(),
            right_id: state.next_entity_id(),
            sensor_id: state.next_entity_id(),
            gap_center_x,
            gap_width: state.tuning.gap_width,
            spawn_tick: state.time_ticks,
            motion: MoveTask::new(Vec2::new(0.0, y), Vec2::new(0.0, y), 1.0),
        }
    }

    #[test]
    fn test_gather_boat_in_gap() {
        let mut state = GameState::new(1);
        let boat_x = state.boat.pos.x;
        let pair = pair_at_boat_height(&mut state, boat_x);
        let sensor_id = pair.sensor_id;
        state.obstacles.push(pair);

        let contacts = gather_contacts(&state);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].entity_id, sensor_id);
        assert_eq!(contacts[0].category, Category::GapSensor);
    }

    #[test]
    fn test_gather_boat_against_log() {
        let mut state = GameState::new(1);
        // Gap far to the right; boat sits inside the left log's span
        let pair = pair_at_boat_height(&mut state, 350.0);
        let left_id = pair.left_id;
        state.obstacles.push(pair);
        state.boat.pos.x = 200.0;

        let contacts = gather_contacts(&state);
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].entity_id, left_id);
        assert_eq!(contacts[0].category, Category::Obstacle);
    }

    #[test]
    fn test_gather_no_contacts_when_pair_far_above() {
        let mut state = GameState::new(1);
        let boat_x = state.boat.pos.x;
        let mut pair = pair_at_boat_height(&mut state, boat_x);
        pair.motion = MoveTask::new(Vec2::new(0.0, 620.0), Vec2::new(0.0, -20.0), 5.0);
        state.obstacles.push(pair);

        assert!(gather_contacts(&state).is_empty());
    }
}
