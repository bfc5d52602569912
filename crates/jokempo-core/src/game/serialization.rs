use crate::model::roster::Roster;

/// JSON codec for the persisted roster: `{ "<name>": { "Victories": n, "Draws": n, "Defeats": n } }`.
pub struct RosterSnapshot;

impl RosterSnapshot {
    pub fn to_json(roster: &Roster) -> serde_json::Result<String> {
        serde_json::to_string_pretty(roster)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Roster> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::RosterSnapshot;
    use crate::model::outcome::Outcome;
    use crate::model::roster::Roster;
    use crate::model::stats::PlayerStatistics;

    #[test]
    fn snapshot_serializes_to_pretty_json() {
        let mut roster = Roster::new();
        roster.record("ana", Outcome::PlayerWins);
        let json = RosterSnapshot::to_json(&roster).unwrap();
        assert!(json.contains("\"Ana\": {"));
        assert!(json.contains("\"Victories\": 1"));
        assert!(json.contains("\"Draws\": 0"));
    }

    #[test]
    fn non_ascii_names_are_not_escaped() {
        let mut roster = Roster::new();
        roster.register("joão");
        let json = RosterSnapshot::to_json(&roster).unwrap();
        assert!(json.contains("João"));
    }

    #[test]
    fn snapshot_roundtrip_preserves_entries() {
        let roster: Roster = [
            ("Ana".to_string(), PlayerStatistics::new(2, 1, 0)),
            ("Bob".to_string(), PlayerStatistics::new(1, 0, 3)),
        ]
        .into_iter()
        .collect();
        let restored = RosterSnapshot::from_json(&RosterSnapshot::to_json(&roster).unwrap()).unwrap();
        assert_eq!(restored, roster);
    }

    #[test]
    fn from_json_accepts_lowercase_fields() {
        let legacy = r#"{
            "Carla": { "victories": 5, "draws": 0, "defeats": 2 }
        }"#;
        let roster = RosterSnapshot::from_json(legacy).unwrap();
        assert_eq!(roster.get("Carla"), Some(&PlayerStatistics::new(5, 0, 2)));
    }

    #[test]
    fn from_json_rejects_non_object_root() {
        assert!(RosterSnapshot::from_json("[1, 2, 3]").is_err());
        assert!(RosterSnapshot::from_json("{ \"Ana\": ").is_err());
    }
}
