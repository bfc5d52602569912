use crate::model::outcome::Outcome;
use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Win/draw/loss counters for one player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerStatistics {
    #[serde(rename = "Victories")]
    pub victories: u32,
    #[serde(rename = "Draws")]
    pub draws: u32,
    #[serde(rename = "Defeats")]
    pub defeats: u32,
}

impl PlayerStatistics {
    pub const fn new(victories: u32, draws: u32, defeats: u32) -> Self {
        Self {
            victories,
            draws,
            defeats,
        }
    }

    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::PlayerWins => self.victories = self.victories.saturating_add(1),
            Outcome::Draw => self.draws = self.draws.saturating_add(1),
            Outcome::ComputerWins => self.defeats = self.defeats.saturating_add(1),
        }
    }

    /// Adds another set of counters into this one, saturating at `u32::MAX`.
    pub fn absorb(&mut self, other: PlayerStatistics) {
        self.victories = self.victories.saturating_add(other.victories);
        self.draws = self.draws.saturating_add(other.draws);
        self.defeats = self.defeats.saturating_add(other.defeats);
    }

    /// Leaderboard score: two points per victory, one per draw, minus one per defeat.
    pub fn score(&self) -> i64 {
        2 * i64::from(self.victories) + i64::from(self.draws) - i64::from(self.defeats)
    }

    pub fn games_played(&self) -> u64 {
        u64::from(self.victories) + u64::from(self.draws) + u64::from(self.defeats)
    }
}

// Field names are matched case-insensitively; absent counters read as zero and a
// repeated field keeps its last value.
impl<'de> Deserialize<'de> for PlayerStatistics {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct StatsVisitor;

        impl<'de> Visitor<'de> for StatsVisitor {
            type Value = PlayerStatistics;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object with Victories, Draws and Defeats counters")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut stats = PlayerStatistics::default();
                while let Some(key) = map.next_key::<String>()? {
                    let slot = match key.to_ascii_lowercase().as_str() {
                        "victories" => 0,
                        "draws" => 1,
                        "defeats" => 2,
                        _ => {
                            map.next_value::<IgnoredAny>()?;
                            continue;
                        }
                    };
                    let value = map.next_value::<u32>()?;
                    match slot {
                        0 => stats.victories = value,
                        1 => stats.draws = value,
                        _ => stats.defeats = value,
                    }
                }
                Ok(stats)
            }
        }

        deserializer.deserialize_map(StatsVisitor)
    }
}
