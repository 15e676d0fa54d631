//! Persisting game states.
//!
//! Two encodings of the same `GameState`:
//! - JSON (`serde_json`) for relays, logs and hand inspection;
//! - bincode for compact local storage.
//!
//! Decoding checks that the board, the stone table and the label matrices
//! agree before handing the state back. The next stone id is not part of
//! the encoding; it is re-derived from the stones on load.

use crate::core::{GameState, SnapshotError};

/// Encode a state as JSON.
pub fn to_json(state: &GameState) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string(state)?)
}

/// Encode a state as indented JSON.
pub fn to_json_pretty(state: &GameState) -> Result<String, SnapshotError> {
    Ok(serde_json::to_string_pretty(state)?)
}

/// Decode and validate a JSON state.
pub fn from_json(json: &str) -> Result<GameState, SnapshotError> {
    let state: GameState = serde_json::from_str(json)?;
    validate(state)
}

/// Encode a state with bincode.
pub fn to_bytes(state: &GameState) -> Result<Vec<u8>, SnapshotError> {
    Ok(bincode::serialize(state)?)
}

/// Decode and validate a bincode state.
pub fn from_bytes(bytes: &[u8]) -> Result<GameState, SnapshotError> {
    let state: GameState = bincode::deserialize(bytes)?;
    validate(state)
}

fn validate(state: GameState) -> Result<GameState, SnapshotError> {
    state.config.validate().map_err(|e| SnapshotError::Corrupt(e.to_string()))?;
    state.check_consistency().map_err(SnapshotError::Corrupt)?;
    tracing::debug!(phase = %state.phase, stones = state.stones.len(), "snapshot loaded");
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Square;
    use crate::core::{Action, Player, RulesConfig, StoneId};

    fn placed_state() -> GameState {
        let state = GameState::new(RulesConfig::default(), 17);
        let state = state.apply(&Action::LockBid { player: Player::White, amount: 3 });
        let state = state.apply(&Action::LockBid { player: Player::Black, amount: 1 });
        let state = state.apply(&Action::StartPlacement);
        let white = state.labels.white_half.find(1).unwrap();
        state.apply(&Action::PlacementSquare { row: white.row, col: white.col })
    }

    #[test]
    fn test_json_round_trip() {
        let state = placed_state();
        let json = to_json(&state).unwrap();
        assert_eq!(from_json(&json).unwrap(), state);
    }

    #[test]
    fn test_bytes_round_trip() {
        let state = placed_state();
        let bytes = to_bytes(&state).unwrap();
        assert_eq!(from_bytes(&bytes).unwrap(), state);
    }

    #[test]
    fn test_stone_ids_serialize_as_strings() {
        let json = to_json(&placed_state()).unwrap();
        assert!(json.contains("\"S1\""));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(from_json("{"), Err(SnapshotError::Json(_))));
        assert!(matches!(from_bytes(&[1, 2, 3]), Err(SnapshotError::Binary(_))));
    }

    #[test]
    fn test_inconsistent_state_rejected() {
        let mut state = placed_state();
        state.board.set(Square::new(4, 4), Some(StoneId::new(40)));
        let json = to_json(&state).unwrap();
        assert!(matches!(from_json(&json), Err(SnapshotError::Corrupt(_))));
    }
}
