use crate::model::outcome::Outcome;
use crate::model::stats::PlayerStatistics;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// Trims, collapses inner whitespace and title-cases each word.
pub fn normalize_player_name(raw: &str) -> String {
    raw.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// All known players and their statistics, keyed by normalized name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    players: BTreeMap<String, PlayerStatistics>,
}

/// One ranked leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub position: usize,
    pub name: String,
    pub stats: PlayerStatistics,
    pub score: i64,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures an entry exists for `raw_name`, returning the normalized key.
    /// Blank names are rejected with `None`.
    pub fn register(&mut self, raw_name: &str) -> Option<String> {
        let name = normalize_player_name(raw_name);
        if name.is_empty() {
            return None;
        }
        self.players.entry(name.clone()).or_default();
        Some(name)
    }

    /// Adds one outcome to the player's entry, creating it first if absent.
    pub fn record(&mut self, raw_name: &str, outcome: Outcome) -> Option<PlayerStatistics> {
        let name = self.register(raw_name)?;
        let stats = self.players.entry(name).or_default();
        stats.record(outcome);
        Some(*stats)
    }

    pub fn get(&self, raw_name: &str) -> Option<&PlayerStatistics> {
        self.players.get(&normalize_player_name(raw_name))
    }

    pub fn contains(&self, raw_name: &str) -> bool {
        self.get(raw_name).is_some()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PlayerStatistics)> {
        self.players.iter().map(|(name, stats)| (name.as_str(), stats))
    }

    /// Players ordered by descending score; equal scores fall back to name order.
    pub fn rank(&self) -> Vec<Standing> {
        let mut rows: Vec<(&String, &PlayerStatistics, i64)> = self
            .players
            .iter()
            .map(|(name, stats)| (name, stats, stats.score()))
            .collect();
        rows.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(b.0)));
        rows.into_iter()
            .enumerate()
            .map(|(index, (name, stats, score))| Standing {
                position: index + 1,
                name: name.clone(),
                stats: *stats,
                score,
            })
            .collect()
    }
}

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.players.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        BTreeMap::<String, PlayerStatistics>::deserialize(deserializer).map(Roster::from)
    }
}

impl From<BTreeMap<String, PlayerStatistics>> for Roster {
    fn from(raw: BTreeMap<String, PlayerStatistics>) -> Self {
        raw.into_iter().collect()
    }
}

// Names are normalized on the way in; entries that collide are summed and blank names dropped.
impl FromIterator<(String, PlayerStatistics)> for Roster {
    fn from_iter<I: IntoIterator<Item = (String, PlayerStatistics)>>(iter: I) -> Self {
        let mut players: BTreeMap<String, PlayerStatistics> = BTreeMap::new();
        for (raw_name, stats) in iter {
            let name = normalize_player_name(&raw_name);
            if name.is_empty() {
                continue;
            }
            players.entry(name).or_default().absorb(stats);
        }
        Self { players }
    }
}

#[cfg(test)]
mod tests {
    use super::{Roster, normalize_player_name};
    use crate::model::outcome::Outcome;
    use crate::model::stats::PlayerStatistics;

    #[test]
    fn normalize_title_cases_and_collapses_spaces() {
        assert_eq!(normalize_player_name("  maria   DA silva "), "Maria Da Silva");
        assert_eq!(normalize_player_name("joão"), "João");
        assert_eq!(normalize_player_name("   "), "");
    }

    #[test]
    fn register_rejects_blank_names() {
        let mut roster = Roster::new();
        assert_eq!(roster.register(" \t "), None);
        assert!(roster.is_empty());
    }

    #[test]
    fn register_creates_zero_entry_once() {
        let mut roster = Roster::new();
        assert_eq!(roster.register("ana").as_deref(), Some("Ana"));
        assert_eq!(roster.register("  ANA ").as_deref(), Some("Ana"));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get("ana"), Some(&PlayerStatistics::default()));
    }

    #[test]
    fn record_creates_missing_entry() {
        let mut roster = Roster::new();
        let stats = roster.record("bob", Outcome::Draw);
        assert_eq!(stats, Some(PlayerStatistics::new(0, 1, 0)));
        assert!(roster.contains("Bob"));
    }

    #[test]
    fn rank_orders_by_score_descending() {
        let roster: Roster = [
            ("B".to_string(), PlayerStatistics::new(1, 0, 3)),
            ("A".to_string(), PlayerStatistics::new(2, 1, 0)),
        ]
        .into_iter()
        .collect();
        let ranked = roster.rank();
        assert_eq!(ranked[0].name, "A");
        assert_eq!(ranked[0].score, 5);
        assert_eq!(ranked[0].position, 1);
        assert_eq!(ranked[1].name, "B");
        assert_eq!(ranked[1].score, -1);
        assert_eq!(ranked[1].position, 2);
    }

    #[test]
    fn rank_breaks_score_ties_by_name() {
        let roster: Roster = [
            ("Zoe".to_string(), PlayerStatistics::new(1, 0, 0)),
            ("Carl".to_string(), PlayerStatistics::new(0, 2, 0)),
            ("Ana".to_string(), PlayerStatistics::new(1, 0, 0)),
        ]
        .into_iter()
        .collect();
        let names: Vec<_> = roster.rank().into_iter().map(|s| s.name).collect();
        assert_eq!(names, ["Ana", "Carl", "Zoe"]);
    }

    #[test]
    fn colliding_names_are_merged_on_collect() {
        let roster: Roster = [
            ("ana".to_string(), PlayerStatistics::new(1, 0, 0)),
            ("ANA ".to_string(), PlayerStatistics::new(0, 1, 2)),
            ("  ".to_string(), PlayerStatistics::new(9, 9, 9)),
        ]
        .into_iter()
        .collect();
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get("Ana"), Some(&PlayerStatistics::new(1, 1, 2)));
    }
}
