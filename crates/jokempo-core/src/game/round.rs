use crate::model::candidates::RoundCandidates;
use crate::model::hand::Hand;
use crate::model::outcome::{Outcome, resolve};
use crate::model::roster::Roster;
use crate::model::stats::PlayerStatistics;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    CollectPlayerCandidates,
    CollectComputerCandidates,
    RevealCandidates,
    CommitPlayerFinal,
    CommitComputerFinal,
    Resolve,
    UpdateStatistics,
    Terminal,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    #[error("round is in {actual:?}, expected {expected:?}")]
    OutOfPhase {
        expected: RoundPhase,
        actual: RoundPhase,
    },
    #[error("{hand} is not one of the candidates {candidates}")]
    NotACandidate {
        hand: Hand,
        candidates: RoundCandidates,
    },
    #[error("computer candidates must differ, got {0}")]
    DuplicateComputerCandidates(RoundCandidates),
    #[error("player name must not be blank")]
    BlankPlayerName,
}

/// Everything that was decided in a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSummary {
    pub player_candidates: RoundCandidates,
    pub computer_candidates: RoundCandidates,
    pub player_final: Hand,
    pub computer_final: Hand,
    pub outcome: Outcome,
}

/// One round, advanced strictly one phase at a time.
#[derive(Debug, Clone)]
pub struct Round {
    phase: RoundPhase,
    player_candidates: Option<RoundCandidates>,
    computer_candidates: Option<RoundCandidates>,
    player_final: Option<Hand>,
    computer_final: Option<Hand>,
    outcome: Option<Outcome>,
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

impl Round {
    pub const fn new() -> Self {
        Self {
            phase: RoundPhase::CollectPlayerCandidates,
            player_candidates: None,
            computer_candidates: None,
            player_final: None,
            computer_final: None,
            outcome: None,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn player_candidates(&self) -> Option<RoundCandidates> {
        self.player_candidates
    }

    pub fn computer_candidates(&self) -> Option<RoundCandidates> {
        self.computer_candidates
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn submit_player_candidates(&mut self, candidates: RoundCandidates) -> Result<(), RoundError> {
        self.expect_phase(RoundPhase::CollectPlayerCandidates)?;
        self.player_candidates = Some(candidates);
        self.phase = RoundPhase::CollectComputerCandidates;
        Ok(())
    }

    pub fn draw_computer_candidates<R: rand::Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<RoundCandidates, RoundError> {
        self.expect_phase(RoundPhase::CollectComputerCandidates)?;
        let candidates = RoundCandidates::from(Hand::draw_two(rng));
        self.computer_candidates = Some(candidates);
        self.phase = RoundPhase::RevealCandidates;
        Ok(candidates)
    }

    /// Injects a fixed computer pair instead of drawing one.
    pub fn set_computer_candidates(&mut self, candidates: RoundCandidates) -> Result<(), RoundError> {
        self.expect_phase(RoundPhase::CollectComputerCandidates)?;
        if !candidates.is_distinct() {
            return Err(RoundError::DuplicateComputerCandidates(candidates));
        }
        self.computer_candidates = Some(candidates);
        self.phase = RoundPhase::RevealCandidates;
        Ok(())
    }

    /// Shows both sides' candidates; returns `(player, computer)`.
    pub fn reveal(&mut self) -> Result<(RoundCandidates, RoundCandidates), RoundError> {
        self.expect_phase(RoundPhase::RevealCandidates)?;
        let pair = self.candidate_pair(RoundPhase::RevealCandidates)?;
        self.phase = RoundPhase::CommitPlayerFinal;
        Ok(pair)
    }

    pub fn commit_player_final(&mut self, hand: Hand) -> Result<(), RoundError> {
        self.expect_phase(RoundPhase::CommitPlayerFinal)?;
        let (player, _) = self.candidate_pair(RoundPhase::CommitPlayerFinal)?;
        if !player.contains(hand) {
            return Err(RoundError::NotACandidate {
                hand,
                candidates: player,
            });
        }
        self.player_final = Some(hand);
        self.phase = RoundPhase::CommitComputerFinal;
        Ok(())
    }

    pub fn commit_computer_final(&mut self, hand: Hand) -> Result<(), RoundError> {
        self.expect_phase(RoundPhase::CommitComputerFinal)?;
        let (_, computer) = self.candidate_pair(RoundPhase::CommitComputerFinal)?;
        if !computer.contains(hand) {
            return Err(RoundError::NotACandidate {
                hand,
                candidates: computer,
            });
        }
        self.computer_final = Some(hand);
        self.phase = RoundPhase::Resolve;
        Ok(())
    }

    pub fn resolve(&mut self) -> Result<Outcome, RoundError> {
        self.expect_phase(RoundPhase::Resolve)?;
        let (Some(player), Some(computer)) = (self.player_final, self.computer_final) else {
            return Err(self.out_of_phase(RoundPhase::Resolve));
        };
        let outcome = resolve(player, computer);
        self.outcome = Some(outcome);
        self.phase = RoundPhase::UpdateStatistics;
        Ok(outcome)
    }

    /// Credits the outcome to `player` and closes the round.
    pub fn record(&mut self, roster: &mut Roster, player: &str) -> Result<PlayerStatistics, RoundError> {
        self.expect_phase(RoundPhase::UpdateStatistics)?;
        let outcome = self
            .outcome
            .ok_or_else(|| self.out_of_phase(RoundPhase::UpdateStatistics))?;
        let stats = roster
            .record(player, outcome)
            .ok_or(RoundError::BlankPlayerName)?;
        self.phase = RoundPhase::Terminal;
        Ok(stats)
    }

    pub fn summary(&self) -> Option<RoundSummary> {
        Some(RoundSummary {
            player_candidates: self.player_candidates?,
            computer_candidates: self.computer_candidates?,
            player_final: self.player_final?,
            computer_final: self.computer_final?,
            outcome: self.outcome?,
        })
    }

    fn candidate_pair(
        &self,
        expected: RoundPhase,
    ) -> Result<(RoundCandidates, RoundCandidates), RoundError> {
        match (self.player_candidates, self.computer_candidates) {
            (Some(player), Some(computer)) => Ok((player, computer)),
            _ => Err(self.out_of_phase(expected)),
        }
    }

    fn expect_phase(&self, expected: RoundPhase) -> Result<(), RoundError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(self.out_of_phase(expected))
        }
    }

    fn out_of_phase(&self, expected: RoundPhase) -> RoundError {
        RoundError::OutOfPhase {
            expected,
            actual: self.phase,
        }
    }
}
