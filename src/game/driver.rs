//! Running a session to the end against a decision policy.
//!
//! A shell that reads input is one `Player`; the seeded `RandomPlayer`
//! drives property tests and benchmarks.

use crate::core::{EngineResult, GameRng, Intent};

use super::session::Session;
use super::snapshot::{Snapshot, Status};

/// Anything that can answer a prompt.
pub trait Player {
    /// Pick one of `legal`, which is never empty.
    fn choose(&mut self, snapshot: &Snapshot, legal: &[Intent]) -> Intent;
}

/// Picks uniformly among the legal intents.
#[derive(Clone, Debug)]
pub struct RandomPlayer {
    rng: GameRng,
}

impl RandomPlayer {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self { rng: GameRng::new(seed) }
    }
}

impl Player for RandomPlayer {
    fn choose(&mut self, _snapshot: &Snapshot, legal: &[Intent]) -> Intent {
        let index = self.rng.gen_range_usize(0..legal.len());
        legal[index].clone()
    }
}

/// Plays the first card that fits, otherwise discards a non-key.
///
/// Never discards a key on purpose, so it rarely sees a prophecy.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPlayer;

impl Player for GreedyPlayer {
    fn choose(&mut self, snapshot: &Snapshot, legal: &[Intent]) -> Intent {
        let non_key_discard = legal.iter().find(|intent| match intent {
            Intent::Discard(position) => snapshot.hand.get(position - 1).map_or(false, |c| !c.is_key()),
            _ => false,
        });
        legal
            .iter()
            .find(|intent| matches!(intent, Intent::Play(_)))
            .or(non_key_discard)
            .unwrap_or(&legal[0])
            .clone()
    }
}

/// How a played-out game went.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    pub status: Status,
    /// Intents submitted.
    pub steps: usize,
    pub turns: u32,
}

/// Submit intents chosen by `player` until the game ends or `max_steps`
/// intents have been submitted.
///
/// Returns an error only if the player picks an intent the session rejects
/// for a non-recoverable reason.
pub fn play_out(session: &mut Session, player: &mut impl Player, max_steps: usize) -> EngineResult<PlayOutcome> {
    let mut steps = 0;
    while !session.is_over() && steps < max_steps {
        let legal = session.legal_intents();
        if legal.is_empty() {
            break;
        }
        let intent = player.choose(&session.snapshot(), &legal);
        match session.submit(intent) {
            Ok(_) => steps += 1,
            Err(err) if err.is_recoverable() => log::debug!("player retried after: {}", err),
            Err(err) => return Err(err),
        }
    }

    Ok(PlayOutcome {
        status: session.status(),
        steps,
        turns: session.turn(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SessionConfig;

    #[test]
    fn test_random_player_finishes_game() {
        let mut session = Session::new(SessionConfig::new().with_seed(3)).unwrap();
        let mut player = RandomPlayer::new(3);

        let outcome = play_out(&mut session, &mut player, 10_000).unwrap();

        assert!(outcome.status.is_terminal());
        assert_eq!(outcome.steps, session.history().len());
        assert_eq!(session.prompt(), None);
    }

    #[test]
    fn test_step_limit() {
        let mut session = Session::new(SessionConfig::new().with_seed(3)).unwrap();
        let mut player = RandomPlayer::new(3);

        let outcome = play_out(&mut session, &mut player, 2).unwrap();

        assert_eq!(outcome.steps, 2);
        assert_eq!(outcome.status, Status::InProgress);
    }

    #[test]
    fn test_greedy_player_prefers_plays() {
        let mut session = Session::new(SessionConfig::new().with_seed(11)).unwrap();
        let legal = session.legal_intents();

        let choice = GreedyPlayer.choose(&session.snapshot(), &legal);

        assert!(legal.contains(&choice));
        assert!(matches!(choice, Intent::Play(_)) || !legal.iter().any(|i| matches!(i, Intent::Play(_))));

        let outcome = play_out(&mut session, &mut GreedyPlayer, 10_000).unwrap();
        assert!(outcome.status.is_terminal());
    }
}
