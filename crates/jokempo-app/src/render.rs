use crate::prompt::{MenuOption, Tone};
use jokempo_core::game::store::{LoadStatus, SaveStatus, StoreError};
use jokempo_core::model::candidates::RoundCandidates;
use jokempo_core::model::hand::Hand;
use jokempo_core::model::outcome::Outcome;
use jokempo_core::model::roster::Standing;
use std::path::Path;

const NAME_WIDTH: usize = 15;
const RULE: &str = "___________________________________________________________________________";

pub fn yes_no() -> Vec<MenuOption> {
    vec![
        MenuOption::new('1', "Yes", Tone::Accept),
        MenuOption::new('0', "No", Tone::Decline),
    ]
}

pub fn after_match_menu() -> Vec<MenuOption> {
    vec![
        MenuOption::new('1', "Continue with another player", Tone::Accept),
        MenuOption::new('2', "List players and statistics", Tone::Neutral),
        MenuOption::new('0', "Quit", Tone::Decline),
    ]
}

fn hand_tone(hand: Hand) -> Tone {
    match hand {
        Hand::Rock => Tone::Neutral,
        Hand::Paper => Tone::Accept,
        Hand::Scissors => Tone::Celebrate,
    }
}

pub fn hand_menu() -> Vec<MenuOption> {
    Hand::ALL
        .iter()
        .map(|hand| MenuOption::new(hand.key(), hand.to_string(), hand_tone(*hand)))
        .collect()
}

/// The player's own two candidates; a repeated hand is listed once.
pub fn final_hand_menu(candidates: RoundCandidates) -> Vec<MenuOption> {
    let mut options: Vec<MenuOption> = Vec::with_capacity(2);
    for hand in candidates.iter() {
        if !options.iter().any(|o| o.key == hand.key()) {
            options.push(MenuOption::new(hand.key(), hand.to_string(), hand_tone(hand)));
        }
    }
    options
}

pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerWins => "Congratulations! You won.",
        Outcome::Draw => "Nice! It's a draw!",
        Outcome::ComputerWins => "Haha, I won! Not this time.",
    }
}

pub fn load_message(status: &LoadStatus, path: &Path) -> (String, Tone) {
    match status {
        LoadStatus::Loaded(count) => (
            format!("Statistics loaded successfully ({count} players)."),
            Tone::Plain,
        ),
        LoadStatus::Missing => (
            "Statistics file not found. Starting a new one.".to_string(),
            Tone::Plain,
        ),
        LoadStatus::Empty => ("Statistics file is empty.".to_string(), Tone::Plain),
        LoadStatus::Corrupt(reason) => (
            format!(
                "Statistics at {} could not be read ({reason}). Starting fresh.",
                path.display()
            ),
            Tone::Alert,
        ),
    }
}

pub fn save_message(result: &Result<SaveStatus, StoreError>) -> (String, Tone) {
    match result {
        Ok(SaveStatus::Written(path)) => (
            format!("Statistics saved to: {}", path.display()),
            Tone::Plain,
        ),
        Ok(SaveStatus::Skipped) => ("There are no statistics to save.".to_string(), Tone::Plain),
        Err(err) => (format!("Error saving statistics: {err}"), Tone::Alert),
    }
}

fn truncate_name(name: &str) -> String {
    if name.chars().count() <= NAME_WIDTH {
        name.to_string()
    } else {
        let mut short: String = name.chars().take(NAME_WIDTH - 1).collect();
        short.push('…');
        short
    }
}

pub fn leaderboard_lines(standings: &[Standing]) -> Vec<String> {
    let mut lines = vec![
        RULE.to_string(),
        "|  Pos  |      Player      |  Victories |   Draws   |  Defeats   | Points |".to_string(),
        format!("|{}|", "-".repeat(RULE.len() - 2)),
    ];
    for standing in standings {
        lines.push(format!(
            "|  {:<4} |  {:<15} |  {:<9} |  {:<8} |  {:<9} | {:<6} |",
            standing.position,
            truncate_name(&standing.name),
            standing.stats.victories,
            standing.stats.draws,
            standing.stats.defeats,
            standing.score
        ));
    }
    if standings.is_empty() {
        lines.push(format!("|{:<width$}|", "  No players yet.", width = RULE.len() - 2));
    }
    lines.push(RULE.to_string());
    lines
}
