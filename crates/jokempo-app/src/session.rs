use crate::prompt::{INVALID_OPTION, Prompt, Tone};
use crate::render;
use jokempo_bot::{Policy, PolicyContext};
use jokempo_core::AppInfo;
use jokempo_core::game::round::{Round, RoundError, RoundSummary};
use jokempo_core::game::store::{SaveStatus, StatisticsStore};
use jokempo_core::model::candidates::RoundCandidates;
use jokempo_core::model::hand::Hand;
use jokempo_core::model::roster::Roster;
use std::io;
use thiserror::Error;
use tracing::{debug, info, warn};

const NAME_REQUIRED: &str = "You need to type your name. It can be your nickname...";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("terminal I/O failed: {0}")]
    Prompt(#[from] io::Error),
    #[error("round engine rejected a move: {0}")]
    Round(#[from] RoundError),
}

/// What happened during one run of the menu loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub rounds_played: usize,
    pub players: Vec<String>,
    pub saved: Option<SaveStatus>,
}

/// Owns the roster for the lifetime of the process and drives the menus.
pub struct Session<'p, B, R> {
    prompt: &'p mut dyn Prompt,
    policy: B,
    rng: R,
    store: StatisticsStore,
    roster: Roster,
    rounds_played: usize,
    players: Vec<String>,
}

impl<'p, B, R> Session<'p, B, R>
where
    B: Policy,
    R: rand::Rng,
{
    pub fn new(prompt: &'p mut dyn Prompt, policy: B, rng: R, store: StatisticsStore) -> Self {
        Self {
            prompt,
            policy,
            rng,
            store,
            roster: Roster::new(),
            rounds_played: 0,
            players: Vec::new(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Loads statistics, runs the menu loop until the player quits, then saves.
    /// Closed input counts as quitting; statistics are saved on every exit path.
    pub fn run(mut self) -> Result<SessionReport, SessionError> {
        self.prompt.banner(AppInfo::name())?;
        let report = self.store.load();
        self.roster = report.roster;
        let (message, tone) = render::load_message(&report.status, self.store.path());
        self.prompt.say(&message, tone)?;

        let outcome = match self.menu_loop() {
            Err(SessionError::Prompt(err)) if err.kind() == io::ErrorKind::UnexpectedEof => {
                info!("input closed, ending session");
                Ok(())
            }
            other => other,
        };

        let saved = self.persist();
        outcome?;
        if let Err(err) = self.prompt.say("👋 Bye! See you next time.", Tone::Plain) {
            warn!(error = %err, "could not print farewell");
        }
        Ok(SessionReport {
            rounds_played: self.rounds_played,
            players: self.players,
            saved,
        })
    }

    fn menu_loop(&mut self) -> Result<(), SessionError> {
        let mut choice = self
            .prompt
            .choose("😀 Hi! Shall we play Jokempo -1?", &render::yes_no())?;

        while choice != '0' {
            let name = self.register_player()?;
            self.prompt.banner(AppInfo::name())?;
            self.prompt
                .say(&format!("Welcome, {name}! Let's begin..."), Tone::Plain)?;

            loop {
                self.play_round(&name)?;
                let again = self.prompt.choose("Play again?", &render::yes_no())?;
                if again != '1' {
                    break;
                }
            }

            self.prompt.banner(AppInfo::name())?;
            choice = self
                .prompt
                .choose("What would you like to do now?", &render::after_match_menu())?;

            if choice == '2' {
                self.show_leaderboard()?;
                choice = self
                    .prompt
                    .choose("What now? Start a new match?", &render::yes_no())?;
            }
        }
        Ok(())
    }

    fn register_player(&mut self) -> Result<String, SessionError> {
        self.prompt.banner(AppInfo::name())?;
        let mut raw = self.prompt.ask_line("What's your name?")?;
        loop {
            if let Some(name) = self.roster.register(&raw) {
                info!(player = %name, "player registered");
                if !self.players.contains(&name) {
                    self.players.push(name.clone());
                }
                return Ok(name);
            }
            self.prompt.say(NAME_REQUIRED, Tone::Alert)?;
            raw = self.prompt.ask_line("What's your name?")?;
        }
    }

    fn choose_hand(&mut self, message: &str) -> Result<Hand, SessionError> {
        let key = self.prompt.choose(message, &render::hand_menu())?;
        let hand = Hand::from_key(key)
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, INVALID_OPTION))?;
        Ok(hand)
    }

    /// Plays one full round for `name` and records it in the roster.
    pub fn play_round(&mut self, name: &str) -> Result<RoundSummary, SessionError> {
        let mut round = Round::new();

        let first = self.choose_hand("Pick your first hand!")?;
        let second = self.choose_hand("Pick your second hand!")?;
        round.submit_player_candidates(RoundCandidates::new(first, second))?;
        round.draw_computer_candidates(&mut self.rng)?;

        let (player, computer) = round.reveal()?;
        self.prompt.banner(AppInfo::name())?;
        self.prompt.say(
            &format!("You picked {player} and I picked {computer}."),
            Tone::Plain,
        )?;

        let key = self
            .prompt
            .choose("Pick one hand:", &render::final_hand_menu(player))?;
        let player_final = Hand::from_key(key)
            .filter(|hand| player.contains(*hand))
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, INVALID_OPTION))?;
        round.commit_player_final(player_final)?;

        let computer_final = self.policy.choose_final(&PolicyContext {
            player_name: name,
            player,
            computer,
        });
        round.commit_computer_final(computer_final)?;
        let outcome = round.resolve()?;

        self.prompt.banner(AppInfo::name())?;
        self.prompt.say(
            &format!("So in the end you went with {player_final} and I went with {computer_final}..."),
            Tone::Plain,
        )?;
        self.prompt
            .say(render::outcome_message(outcome), Tone::Celebrate)?;

        let stats = round.record(&mut self.roster, name)?;
        self.rounds_played += 1;
        debug!(
            player = name,
            outcome = %outcome,
            victories = stats.victories,
            draws = stats.draws,
            defeats = stats.defeats,
            "round recorded"
        );

        Ok(RoundSummary {
            player_candidates: player,
            computer_candidates: computer,
            player_final,
            computer_final,
            outcome,
        })
    }

    fn show_leaderboard(&mut self) -> Result<(), SessionError> {
        self.prompt.banner(AppInfo::name())?;
        self.prompt.say("Player Ranking:", Tone::Neutral)?;
        for line in render::leaderboard_lines(&self.roster.rank()) {
            self.prompt.say(&line, Tone::Plain)?;
        }
        Ok(())
    }

    fn persist(&mut self) -> Option<SaveStatus> {
        let result = self.store.save(&self.roster);
        if let Err(err) = &result {
            warn!(error = %err, "statistics were not saved");
        }
        let (message, tone) = render::save_message(&result);
        if let Err(err) = self.prompt.say(&message, tone) {
            warn!(error = %err, "could not report save result");
        }
        result.ok()
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::prompt::LinePrompt;
    use jokempo_bot::HeuristicPolicy;
    use jokempo_core::game::store::{SaveStatus, StatisticsStore};
    use jokempo_core::model::stats::PlayerStatistics;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn run_script(script: &str, store: StatisticsStore) -> (super::SessionReport, String) {
        let mut prompt = LinePrompt::new(Cursor::new(script.to_string()), Vec::new());
        let report = Session::new(
            &mut prompt,
            HeuristicPolicy::new(),
            StdRng::seed_from_u64(5),
            store,
        )
        .run()
        .expect("session completes");
        let output = String::from_utf8(prompt.into_output()).expect("utf8 output");
        (report, output)
    }

    #[test]
    fn declining_to_play_saves_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pontuacoes.json");
        let (report, output) = run_script("0\n", StatisticsStore::new(&path));
        assert_eq!(report.rounds_played, 0);
        assert_eq!(report.saved, Some(SaveStatus::Skipped));
        assert!(output.contains("Statistics file not found"));
        assert!(output.contains("There are no statistics to save."));
        assert!(!path.exists());
    }

    #[test]
    fn two_rounds_accumulate_for_one_player() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pontuacoes.json");
        // play, name, rock/rock/rock, again, paper/scissors/scissors, stop, quit
        let script = "1\n  ana  \n0\n0\n0\n1\n1\n2\n2\n0\n0\n";
        let (report, output) = run_script(script, StatisticsStore::new(&path));

        assert_eq!(report.rounds_played, 2);
        assert_eq!(report.players, ["Ana"]);
        assert!(matches!(report.saved, Some(SaveStatus::Written(_))));
        assert!(output.contains("Welcome, Ana!"));

        let saved = StatisticsStore::new(&path).load().roster;
        let stats = saved.get("Ana").copied().unwrap_or_default();
        assert_eq!(stats.games_played(), 2);
    }

    #[test]
    fn blank_name_is_asked_again() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pontuacoes.json");
        let script = "1\n\n   \nbia\n0\n1\n0\n0\n0\n";
        let (report, output) = run_script(script, StatisticsStore::new(&path));
        assert_eq!(output.matches(super::NAME_REQUIRED).count(), 2);
        assert_eq!(report.players, ["Bia"]);
        assert_eq!(report.rounds_played, 1);
    }

    #[test]
    fn leaderboard_then_quit_persists_existing_players() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pontuacoes.json");
        fs::write(
            &path,
            r#"{ "Carla": { "Victories": 3, "Draws": 0, "Defeats": 1 } }"#,
        )
        .unwrap();
        let script = "1\ndavi\n2\n2\n2\n0\n2\n0\n";
        let (report, output) = run_script(script, StatisticsStore::new(&path));

        assert_eq!(report.rounds_played, 1);
        assert!(output.contains("Player Ranking:"));
        assert!(output.contains("Carla"));
        assert!(output.contains("Davi"));

        let saved = StatisticsStore::new(&path).load().roster;
        assert_eq!(saved.get("Carla"), Some(&PlayerStatistics::new(3, 0, 1)));
        assert_eq!(saved.get("Davi").map(|s| s.games_played()), Some(1));
    }

    #[test]
    fn save_failure_is_reported_and_session_ends_cleanly() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let store = StatisticsStore::new(blocker.join("pontuacoes.json"));

        let (report, output) = run_script("1
ana
0
0
0
0
0
", store);

        assert_eq!(report.rounds_played, 1);
        assert_eq!(report.saved, None);
        assert!(output.contains("Error saving statistics"));
        assert!(output.contains("Bye!"));
    }

    #[test]
    fn closed_input_still_saves() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pontuacoes.json");
        let (report, _) = run_script("1\nelis\n", StatisticsStore::new(&path));
        assert_eq!(report.rounds_played, 0);
        assert!(matches!(report.saved, Some(SaveStatus::Written(_))));
        let saved = StatisticsStore::new(&path).load().roster;
        assert_eq!(saved.get("Elis"), Some(&PlayerStatistics::default()));
    }
}
