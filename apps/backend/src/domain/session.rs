//! The session aggregate: player registry, readiness, and per-round resets.
//!
//! All mutation funnels through these methods so the invariants (single
//! living Jack, one guess/mark reset per round, eliminated players excluded
//! from further mutation) live in one place. A `BTreeMap` keeps iteration
//! order stable, so a session driven with a seeded RNG is fully reproducible.

use std::collections::BTreeMap;

use rand::Rng;

use crate::domain::marks::Mark;
use crate::domain::phase::Phase;
use crate::domain::player::{Player, PlayerId, Role};

#[derive(Debug)]
pub struct SessionState {
    players: BTreeMap<PlayerId, Player>,
    /// Current scheduler phase.
    pub phase: Phase,
    /// Monotonic round counter, 1-based.
    pub current_round: u32,
    /// True until the readiness gate releases, exactly once.
    pub waiting_room: bool,
    pub in_progress: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            players: BTreeMap::new(),
            phase: Phase::Waiting,
            current_round: 1,
            waiting_room: true,
            in_progress: false,
        }
    }

    // ---- Registry ----

    /// Create a record with a freshly drawn mark. Simulated players start
    /// ready. Re-adding an existing id is a no-op.
    pub fn add_player<R: Rng + ?Sized>(
        &mut self,
        id: PlayerId,
        is_bot: bool,
        rng: &mut R,
    ) -> &Player {
        self.players
            .entry(id)
            .or_insert_with(|| Player::new(id, is_bot, Mark::draw(rng)))
    }

    /// Delete a record unconditionally. Missing ids return `None`.
    pub fn remove_player(&mut self, id: PlayerId) -> Option<Player> {
        self.players.remove(&id)
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(&id)
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub(crate) fn players_mut(&mut self) -> impl Iterator<Item = &mut Player> {
        self.players.values_mut()
    }

    pub fn living(&self) -> impl Iterator<Item = &Player> {
        self.players.values().filter(|p| p.alive)
    }

    pub fn living_ids(&self) -> Vec<PlayerId> {
        self.living().map(|p| p.id).collect()
    }

    pub fn living_count(&self) -> usize {
        self.living().count()
    }

    // ---- Waiting room ----

    /// Flag a human participant ready. Simulated players (always ready) and
    /// missing ids are ignored; returns whether the flag was applied.
    pub fn mark_ready(&mut self, id: PlayerId) -> bool {
        match self.players.get_mut(&id) {
            Some(player) if !player.is_bot => {
                player.ready = true;
                true
            }
            _ => false,
        }
    }

    /// Readiness of every human participant, for the waiting-room broadcast.
    pub fn ready_states(&self) -> BTreeMap<PlayerId, bool> {
        self.players
            .values()
            .filter(|p| !p.is_bot)
            .map(|p| (p.id, p.ready))
            .collect()
    }

    /// True iff at least one living human exists and every living human is
    /// ready. An all-bot lobby therefore never releases the gate.
    pub fn all_humans_ready(&self) -> bool {
        let mut humans = self.living().filter(|p| !p.is_bot).peekable();
        humans.peek().is_some() && humans.all(|p| p.ready)
    }

    // ---- Round resets ----

    /// Round-start reset for every living player: clear the guess, draw a new
    /// mark, and clear human readiness for any future use of the gate.
    /// Eliminated players are untouched.
    pub fn begin_round<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for player in self.players.values_mut().filter(|p| p.alive) {
            player.guess = None;
            player.mark = Mark::draw(rng);
            if !player.is_bot {
                player.ready = false;
            }
        }
    }

    /// Converge on a single living Jack. If one already exists this is a
    /// no-op returning `None`; with zero living players nothing happens.
    /// Otherwise one living player is chosen uniformly and returned so the
    /// caller can notify observers.
    pub fn ensure_jack<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<PlayerId> {
        if self.living().any(|p| p.is_jack()) {
            return None;
        }
        let living = self.living_ids();
        if living.is_empty() {
            return None;
        }
        let chosen = living[rng.random_range(0..living.len())];
        if let Some(player) = self.players.get_mut(&chosen) {
            player.role = Some(Role::Jack);
        }
        Some(chosen)
    }

    /// The living Jack, if any.
    pub fn living_jack(&self) -> Option<&Player> {
        self.living().find(|p| p.is_jack())
    }

    /// Store a guess for a living player. Missing or eliminated ids are
    /// ignored; returns whether the guess was recorded.
    pub fn record_guess(&mut self, id: PlayerId, mark: Mark) -> bool {
        match self.players.get_mut(&id) {
            Some(player) if player.alive => {
                player.guess = Some(mark);
                true
            }
            _ => false,
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use uuid::Uuid;

    use super::*;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn state_with(humans: usize, bots: usize) -> (SessionState, Vec<PlayerId>, Vec<PlayerId>) {
        let mut state = SessionState::new();
        let mut rng = rng();
        let human_ids: Vec<PlayerId> = (0..humans)
            .map(|_| {
                let id = Uuid::new_v4();
                state.add_player(id, false, &mut rng);
                id
            })
            .collect();
        let bot_ids: Vec<PlayerId> = (0..bots)
            .map(|_| {
                let id = Uuid::new_v4();
                state.add_player(id, true, &mut rng);
                id
            })
            .collect();
        (state, human_ids, bot_ids)
    }

    #[test]
    fn add_player_is_idempotent_per_id() {
        let (mut state, humans, _) = state_with(1, 0);
        let before = state.player(humans[0]).unwrap().clone();
        state.add_player(humans[0], true, &mut rng());
        let after = state.player(humans[0]).unwrap();
        assert_eq!(*after, before, "re-adding must not replace the record");
    }

    #[test]
    fn bots_start_ready_and_humans_do_not() {
        let (state, humans, bots) = state_with(1, 2);
        assert!(!state.player(humans[0]).unwrap().ready);
        assert!(bots.iter().all(|id| state.player(*id).unwrap().ready));
    }

    #[test]
    fn readiness_gate_requires_a_living_human() {
        let (state, _, _) = state_with(0, 3);
        assert!(!state.all_humans_ready(), "all-bot lobby must never release");

        let (mut state, humans, _) = state_with(1, 3);
        assert!(!state.all_humans_ready());
        state.mark_ready(humans[0]);
        assert!(state.all_humans_ready());
    }

    #[test]
    fn readiness_ignores_eliminated_humans() {
        let (mut state, humans, _) = state_with(2, 0);
        state.mark_ready(humans[0]);
        assert!(!state.all_humans_ready());
        state.players_mut().for_each(|p| {
            if p.id == humans[1] {
                p.alive = false;
            }
        });
        assert!(state.all_humans_ready(), "dead humans must not hold the gate");
    }

    #[test]
    fn mark_ready_skips_bots_and_missing_ids() {
        let (mut state, _, bots) = state_with(0, 1);
        assert!(!state.mark_ready(bots[0]));
        assert!(!state.mark_ready(Uuid::new_v4()));
    }

    #[test]
    fn begin_round_resets_only_living_players() {
        let (mut state, humans, bots) = state_with(2, 1);
        let mut rng = rng();
        for id in [humans[0], humans[1], bots[0]] {
            let mark = state.player(id).unwrap().mark;
            state.record_guess(id, mark);
        }
        state.mark_ready(humans[0]);
        state.mark_ready(humans[1]);
        state.players_mut().for_each(|p| {
            if p.id == humans[1] {
                p.alive = false;
            }
        });
        let dead_guess = state.player(humans[1]).unwrap().guess;

        state.begin_round(&mut rng);

        let human = state.player(humans[0]).unwrap();
        assert_eq!(human.guess, None);
        assert!(!human.ready);
        let bot = state.player(bots[0]).unwrap();
        assert_eq!(bot.guess, None);
        assert!(bot.ready, "bot readiness is permanent");
        assert_eq!(
            state.player(humans[1]).unwrap().guess,
            dead_guess,
            "eliminated players are excluded from the reset"
        );
    }

    #[test]
    fn ensure_jack_assigns_exactly_once() {
        let (mut state, _, _) = state_with(2, 2);
        let mut rng = rng();
        let first = state.ensure_jack(&mut rng);
        assert!(first.is_some());
        assert_eq!(state.ensure_jack(&mut rng), None, "idempotent");
        let jacks = state.living().filter(|p| p.is_jack()).count();
        assert_eq!(jacks, 1);
    }

    #[test]
    fn ensure_jack_reassigns_after_the_jack_dies() {
        let (mut state, _, _) = state_with(2, 0);
        let mut rng = rng();
        let jack = state.ensure_jack(&mut rng).unwrap();
        state.players_mut().for_each(|p| {
            if p.id == jack {
                p.alive = false;
            }
        });
        let next = state.ensure_jack(&mut rng);
        assert!(next.is_some());
        assert_ne!(next, Some(jack));
    }

    #[test]
    fn ensure_jack_with_no_living_players_is_a_noop() {
        let (mut state, _, _) = state_with(1, 0);
        state.players_mut().for_each(|p| p.alive = false);
        assert_eq!(state.ensure_jack(&mut rng()), None);
    }

    #[test]
    fn record_guess_guards_missing_and_dead() {
        let (mut state, humans, _) = state_with(1, 0);
        assert!(!state.record_guess(Uuid::new_v4(), Mark::Hearts));
        state.players_mut().for_each(|p| p.alive = false);
        assert!(!state.record_guess(humans[0], Mark::Hearts));
        assert_eq!(state.player(humans[0]).unwrap().guess, None);
    }
}
