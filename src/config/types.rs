//! Domain enums shared by the detection parameters and the wire format

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Which way the engine is hunting.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    /// Price rising to `start * (1 + pct)`
    #[default]
    #[serde(alias = "U", alias = "Up")]
    #[strum(to_string = "up", serialize = "u")]
    Up,
    /// Price falling to `start * (1 - pct)`
    #[serde(alias = "D", alias = "Down")]
    #[strum(to_string = "down", serialize = "d")]
    Down,
}

/// Where the interval scan resumes after reporting a window `[i, j]`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum ChainMode {
    /// Resume at `j`: the next window may start exactly where this one ended.
    #[default]
    #[strum(to_string = "chained")]
    Chained,
    /// Resume at `j + 1`: windows never share an endpoint.
    #[strum(to_string = "disjoint")]
    Disjoint,
}

impl ChainMode {
    /// Scan position after a window ending at `end_idx`.
    #[inline]
    pub(crate) fn resume_after(self, end_idx: usize) -> usize {
        match self {
            Self::Chained => end_idx,
            Self::Disjoint => end_idx + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn direction_wire_names() {
        assert_eq!(serde_json::to_string(&Direction::Up).unwrap(), "\"up\"");
        assert_eq!(serde_json::to_string(&Direction::Down).unwrap(), "\"down\"");
        let d: Direction = serde_json::from_str("\"D\"").unwrap();
        assert_eq!(d, Direction::Down);
        let u: Direction = serde_json::from_str("\"U\"").unwrap();
        assert_eq!(u, Direction::Up);
    }

    #[test]
    fn display_matches_wire() {
        for d in Direction::iter() {
            let wire = serde_json::to_string(&d).unwrap();
            assert_eq!(wire, format!("\"{}\"", d));
        }
        for m in ChainMode::iter() {
            let wire = serde_json::to_string(&m).unwrap();
            assert_eq!(wire, format!("\"{}\"", m));
        }
    }

    #[test]
    fn parses_cli_spellings() {
        assert_eq!("up".parse::<Direction>().unwrap(), Direction::Up);
        assert_eq!("DOWN".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!("D".parse::<Direction>().unwrap(), Direction::Down);
        assert_eq!("disjoint".parse::<ChainMode>().unwrap(), ChainMode::Disjoint);
        assert!("sideways".parse::<Direction>().is_err());
    }

    #[test]
    fn resume_positions() {
        assert_eq!(ChainMode::Chained.resume_after(5), 5);
        assert_eq!(ChainMode::Disjoint.resume_after(5), 6);
    }
}
