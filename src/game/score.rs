use serde::{Deserialize, Serialize};

/// Score and length bookkeeping the snake reports into
pub trait ScoreTracker {
    fn add_score(&mut self, delta: i32);
    fn add_growth_eaten(&mut self, n: u32);
    fn add_poison_eaten(&mut self, n: u32);
    fn add_gate_eaten(&mut self, n: u32);
    fn add_body_current_length(&mut self, delta: i32);
    fn body_current_length(&self) -> i32;
    fn body_longest_length(&self) -> i32;
    fn set_body_longest_length(&mut self, value: i32);
}

/// Stage targets; a stage is cleared once every counter reaches its target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Missions {
    /// Longest body length to reach
    pub length: i32,
    pub growth: u32,
    pub poison: u32,
    pub gate: u32,
}

impl Default for Missions {
    fn default() -> Self {
        Self {
            length: 10,
            growth: 5,
            poison: 2,
            gate: 1,
        }
    }
}

/// Which mission targets have been met
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MissionProgress {
    pub length: bool,
    pub growth: bool,
    pub poison: bool,
    pub gate: bool,
}

impl MissionProgress {
    pub fn is_complete(&self) -> bool {
        self.length && self.growth && self.poison && self.gate
    }
}

/// The score board shown next to the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    pub score: i32,
    pub growth_eaten: u32,
    pub poison_eaten: u32,
    pub gate_eaten: u32,
    current_length: i32,
    longest_length: i32,
}

impl ScoreBoard {
    /// A fresh board for a snake of `initial_length` segments
    pub fn new(initial_length: i32) -> Self {
        Self {
            score: 0,
            growth_eaten: 0,
            poison_eaten: 0,
            gate_eaten: 0,
            current_length: initial_length,
            longest_length: initial_length,
        }
    }

    pub fn progress(&self, missions: &Missions) -> MissionProgress {
        MissionProgress {
            length: self.longest_length >= missions.length,
            growth: self.growth_eaten >= missions.growth,
            poison: self.poison_eaten >= missions.poison,
            gate: self.gate_eaten >= missions.gate,
        }
    }
}

impl ScoreTracker for ScoreBoard {
    fn add_score(&mut self, delta: i32) {
        self.score += delta;
    }

    fn add_growth_eaten(&mut self, n: u32) {
        self.growth_eaten += n;
    }

    fn add_poison_eaten(&mut self, n: u32) {
        self.poison_eaten += n;
    }

    fn add_gate_eaten(&mut self, n: u32) {
        self.gate_eaten += n;
    }

    fn add_body_current_length(&mut self, delta: i32) {
        self.current_length += delta;
    }

    fn body_current_length(&self) -> i32 {
        self.current_length
    }

    fn body_longest_length(&self) -> i32 {
        self.longest_length
    }

    fn set_body_longest_length(&mut self, value: i32) {
        self.longest_length = value;
    }
}
