use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
pub enum BusinessPriority {
    P0,
    P1,
    P2,
}

impl BusinessPriority {
    /// Vulnerabilities alone force P0 regardless of the bug count.
    pub fn classify(bugs: usize, vulnerabilities: usize) -> Self {
        if bugs > 5 || vulnerabilities > 0 {
            Self::P0
        } else if bugs > 2 {
            Self::P1
        } else {
            Self::P2
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            Self::P0 => 3.0,
            Self::P1 => 2.0,
            Self::P2 => 1.0,
        }
    }
}
