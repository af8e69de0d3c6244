//! Action and observation space descriptions for agent frameworks.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{Direction, ACTION_COUNT, OBSERVATION_LEN};

/// Discrete action space; labels follow [`Direction::from_action`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionSpace {
    pub n: usize,
    pub actions: BTreeMap<usize, &'static str>,
}

impl ActionSpace {
    pub fn label(&self, action: usize) -> Option<&'static str> {
        self.actions.get(&action).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ObservationSpace {
    pub shape: [usize; 1],
    pub features: BTreeMap<&'static str, &'static str>,
}

pub fn action_space() -> ActionSpace {
    let actions = Direction::ALL
        .iter()
        .map(|d| (d.ordinal(), d.as_str()))
        .collect();
    ActionSpace {
        n: ACTION_COUNT,
        actions,
    }
}

pub fn observation_space() -> ObservationSpace {
    let mut features = BTreeMap::new();
    features.insert(
        "danger",
        "Binary values indicating danger in RIGHT, DOWN, LEFT, UP directions",
    );
    features.insert(
        "direction",
        "One-hot encoding of current direction (RIGHT, LEFT, UP, DOWN)",
    );
    features.insert(
        "food_direction",
        "Binary values indicating if food is in RIGHT, DOWN, LEFT, UP directions",
    );
    ObservationSpace {
        shape: [OBSERVATION_LEN],
        features,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_labels_match_direction_mapping() {
        let space = action_space();
        assert_eq!(space.n, 4);
        for action in 0..space.n {
            let dir = Direction::from_action(action as i64).unwrap();
            assert_eq!(space.label(action), Some(dir.as_str()));
        }
        assert_eq!(space.label(1), Some("LEFT"));
        assert_eq!(space.label(4), None);
    }

    #[test]
    fn test_observation_space_shape() {
        let space = observation_space();
        assert_eq!(space.shape, [12]);
        assert_eq!(space.features.len(), 3);
    }

    #[test]
    fn test_action_space_json() {
        let json = serde_json::to_value(action_space()).unwrap();
        assert_eq!(json["n"], 4);
        assert_eq!(json["actions"]["0"], "RIGHT");
        assert_eq!(json["actions"]["3"], "DOWN");
    }
}
