//! The session: one game of Onirim, driven one intent at a time.
//!
//! ## Flow
//!
//! ```text
//! submit(intent)
//!   ├─ validate against the pending prompt (rejected intents change nothing)
//!   ├─ apply it, possibly pushing tasks
//!   └─ run tasks until one needs input, the turn ends, or the game ends
//! ```
//!
//! Interruptions (nightmares, prophecies) are tasks on a `PendingStack`.
//! A refill that draws a nightmare stays underneath it and resumes once the
//! nightmare is resolved, so nested nightmares never recurse.

use im::Vector;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::snapshot::{Prompt, Snapshot, Status};
use crate::cards::{Card, Color};
use crate::core::{EngineError, EngineResult, GameEvent, GameRng, Intent, IntentRecord, SessionConfig};
use crate::rules::{ProphecyOrder, Remedy, RemedySet};
use crate::stack::{PendingStack, Task};
use crate::zones::{DoorCounts, DoorRegistry, DoorUnlock, Hand, Labyrinth, RefillMode, RefillProgress, Supply};

/// A hand-built table, for scenarios and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Layout {
    /// Draw pile, bottom first.
    pub draw_pile: Vec<Card>,
    /// Hand, position 1 first.
    pub hand: Vec<Card>,
    /// Cards already played, oldest first. The streak is rebuilt from them.
    pub labyrinth: Vec<Card>,
    pub doors: DoorCounts,
}

/// One game in progress (or finished).
///
/// ## Usage
///
/// ```
/// use onirim::core::{Intent, SessionConfig};
/// use onirim::game::{Prompt, Session, Status};
///
/// let mut session = Session::new(SessionConfig::new().with_seed(7)).unwrap();
/// assert_eq!(session.prompt(), Some(Prompt::PlayOrDiscard));
/// assert_eq!(session.hand().len(), 5);
///
/// let intent = session.legal_intents()[0].clone();
/// let events = session.submit(intent).unwrap();
/// assert!(!events.is_empty());
/// assert_eq!(session.history().len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    config: SessionConfig,
    rng: GameRng,
    supply: Supply,
    hand: Hand,
    labyrinth: Labyrinth,
    doors: DoorRegistry,
    stack: PendingStack,
    status: Status,
    turn: u32,
    sequence: u32,
    history: Vector<IntentRecord>,
}

impl Session {
    /// Shuffle a fresh deck and deal the opening hand.
    ///
    /// Doors drawn for the opening hand are shuffled back before the
    /// nightmares are added.
    pub fn new(config: SessionConfig) -> EngineResult<Self> {
        config.validate()?;
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let supply = Supply::new(config.composition.colored_cards());
        let hand = Hand::new(config.hand_size);
        let mut session = Self::assemble(config, rng, supply, hand, Labyrinth::new(), DoorCounts::default());

        session.supply.shuffle(&mut session.rng);
        session.hand.refill(&mut session.supply, RefillMode::Setup)?;
        session.supply.drain_limbo_into_supply();
        session.supply.extend(session.config.composition.nightmare_cards());
        session.supply.shuffle(&mut session.rng);

        log::info!("session started with seed {}", session.rng.seed());
        session.begin_turn(&mut Vec::new());
        Ok(session)
    }

    /// Start from a hand-built table instead of a shuffled deck.
    ///
    /// The draw pile is used in the given order and the hand is not
    /// refilled, so scenarios can stage exact draws.
    pub fn with_layout(config: SessionConfig, layout: Layout) -> EngineResult<Self> {
        config.validate()?;
        if layout.hand.len() > config.hand_size {
            return Err(EngineError::InvalidConfig(format!(
                "layout hand holds {} cards but the hand size is {}",
                layout.hand.len(),
                config.hand_size
            )));
        }
        if let Some(card) = layout.hand.iter().find(|card| !card.is_location()) {
            return Err(EngineError::InvalidConfig(format!("layout hand holds a {}", card)));
        }
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let hand = Hand::with_cards(config.hand_size, &layout.hand);
        let labyrinth = Labyrinth::from_cards(&layout.labyrinth);
        let mut session = Self::assemble(config, rng, Supply::new(layout.draw_pile), hand, labyrinth, layout.doors);

        session.begin_turn(&mut Vec::new());
        Ok(session)
    }

    /// Rebuild a session by submitting `intents` in order.
    ///
    /// `config` must carry the recorded session's seed.
    pub fn replay(config: SessionConfig, intents: impl IntoIterator<Item = Intent>) -> EngineResult<Self> {
        let mut session = Self::new(config)?;
        for intent in intents {
            session.submit(intent)?;
        }
        Ok(session)
    }

    fn assemble(
        config: SessionConfig,
        rng: GameRng,
        supply: Supply,
        hand: Hand,
        labyrinth: Labyrinth,
        doors: DoorCounts,
    ) -> Self {
        let doors = DoorRegistry::with_counts(config.doors_per_color(), doors);
        Self {
            config,
            rng,
            supply,
            hand,
            labyrinth,
            doors,
            stack: PendingStack::new(),
            status: Status::InProgress,
            turn: 0,
            sequence: 0,
            history: Vector::new(),
        }
    }

    // === Driving ===

    /// Apply one intent and return the events it caused.
    ///
    /// A rejected intent leaves the session untouched; recoverable errors
    /// (see [`EngineError::is_recoverable`]) just mean "ask again".
    pub fn submit(&mut self, intent: Intent) -> EngineResult<Vec<GameEvent>> {
        if self.status.is_terminal() {
            return Err(EngineError::GameOver);
        }

        let mut events = Vec::new();
        match (self.stack.top().cloned(), &intent) {
            (None, Intent::Play(position)) => self.play(*position, &mut events)?,
            (None, Intent::Discard(position)) => self.discard(*position, &mut events)?,
            (Some(Task::AwaitRemedy), Intent::NightmareChoice(remedy)) => self.choose_remedy(*remedy, &mut events)?,
            (Some(Task::AwaitKey), Intent::SelectKey(position)) => self.banish_key(*position, &mut events)?,
            (Some(Task::AwaitDoor), Intent::SelectDoor(color)) => self.give_back_door(*color, &mut events)?,
            (Some(Task::AwaitProphecy { revealed, key_position }), Intent::OrderProphecy(text)) => {
                self.order_prophecy(text, &revealed, key_position, &mut events)?
            }
            (top, _) => {
                return Err(EngineError::UnexpectedIntent {
                    expected: top.as_ref().map_or("play or discard", expected_for),
                    got: intent.name(),
                })
            }
        }

        self.history.push_back(IntentRecord::new(self.turn, self.sequence, intent));
        self.sequence += 1;
        self.run(&mut events);
        Ok(events)
    }

    /// Run tasks that need no input.
    fn run(&mut self, events: &mut Vec<GameEvent>) {
        while !self.status.is_terminal() {
            match self.stack.top() {
                None => {
                    self.begin_turn(events);
                    return;
                }
                Some(Task::Refill) => self.step_refill(events),
                Some(&Task::Purge { remaining }) => self.step_purge(remaining, events),
                Some(_) => return,
            }
        }
    }

    /// Check the end conditions, then open the next turn.
    fn begin_turn(&mut self, events: &mut Vec<GameEvent>) {
        if self.doors.is_victory() {
            self.finish(Status::Victory, events);
        } else if self.supply.is_exhausted() {
            events.push(GameEvent::SupplyExhausted);
            self.finish(Status::Defeat, events);
        } else {
            self.turn += 1;
            self.sequence = 0;
            log::debug!("turn {} ({} cards left)", self.turn, self.supply.draw_pile_len());
        }
    }

    fn finish(&mut self, status: Status, events: &mut Vec<GameEvent>) {
        self.status = status;
        self.stack.clear();
        events.push(GameEvent::GameOver(status));
        log::info!("game over on turn {}: {:?}", self.turn, status);
    }

    fn exhausted(&mut self, err: EngineError, events: &mut Vec<GameEvent>) {
        log::debug!("{}", err);
        events.push(GameEvent::SupplyExhausted);
        self.finish(Status::Defeat, events);
    }

    // === Turn intents ===

    fn play(&mut self, position: usize, events: &mut Vec<GameEvent>) -> EngineResult<()> {
        let card = self.hand.play(position, &self.labyrinth)?;
        log::debug!("played {}", card);
        events.push(GameEvent::CardPlayed(card));

        if let Some(color) = self.labyrinth.push(card) {
            events.push(match self.doors.try_unlock(color, &mut self.supply) {
                DoorUnlock::Unlocked { color, door_removed } => GameEvent::DoorUnlocked { color, door_removed },
                DoorUnlock::AlreadyComplete(color) => GameEvent::StreakWasted(color),
            });
        }

        if self.doors.is_victory() {
            self.finish(Status::Victory, events);
        } else {
            self.stack.push(Task::Refill);
        }
        Ok(())
    }

    fn discard(&mut self, position: usize, events: &mut Vec<GameEvent>) -> EngineResult<()> {
        let card = self.hand.get(position)?;
        if !card.is_key() {
            self.hand.discard(position, &mut self.supply)?;
            events.push(GameEvent::CardDiscarded(card));
            self.stack.push(Task::Refill);
            return Ok(());
        }

        // The key stays in hand until the prophecy is ordered.
        match self.supply.draw_many(self.config.prophecy_size) {
            Ok(revealed) => {
                log::debug!("prophecy reveals {} cards", revealed.len());
                events.push(GameEvent::ProphecyRevealed(revealed.clone()));
                self.stack.push(Task::AwaitProphecy {
                    revealed,
                    key_position: position,
                });
            }
            Err(err) => self.exhausted(err, events),
        }
        Ok(())
    }

    fn order_prophecy(
        &mut self,
        text: &str,
        revealed: &[Card],
        key_position: usize,
        events: &mut Vec<GameEvent>,
    ) -> EngineResult<()> {
        let order = ProphecyOrder::parse(text, revealed.len())?;
        let discarded = order.apply(revealed, &mut self.supply)?;
        log::debug!("prophecy {} discards {}", order, discarded);
        events.push(GameEvent::ProphecyResolved { discarded });

        let key = self.hand.discard(key_position, &mut self.supply)?;
        events.push(GameEvent::CardDiscarded(key));
        self.stack.replace_top(Task::Refill);
        Ok(())
    }

    // === Nightmares ===

    fn choose_remedy(&mut self, remedy: Remedy, events: &mut Vec<GameEvent>) -> EngineResult<()> {
        if !RemedySet::offered(&self.hand, &self.doors).contains(remedy) {
            return Err(EngineError::InvalidChoice(format!("cannot {} now", remedy)));
        }
        log::debug!("nightmare remedy: {}", remedy);
        events.push(GameEvent::RemedyChosen(remedy));

        match remedy {
            Remedy::KeyDiscard => self.stack.replace_top(Task::AwaitKey),
            Remedy::DoorDiscard => self.stack.replace_top(Task::AwaitDoor),
            Remedy::FiveCardDiscard => self.stack.replace_top(Task::Purge {
                remaining: self.config.purge_size,
            }),
            Remedy::HandDiscard => {
                let thrown = self.hand.discard_hand(&mut self.supply);
                events.push(GameEvent::HandDiscarded(thrown));
                self.stack.replace_top(Task::Refill);
            }
        }
        Ok(())
    }

    fn banish_key(&mut self, position: usize, events: &mut Vec<GameEvent>) -> EngineResult<()> {
        let card = match self.hand.get(position) {
            Ok(card) if card.is_key() => card,
            Ok(card) => return Err(EngineError::InvalidChoice(format!("{} is not a key", card))),
            Err(_) => return Err(EngineError::InvalidChoice(format!("no card at position {}", position))),
        };
        self.hand.take(position)?;
        self.supply.banish(card);
        events.push(GameEvent::KeyBanished(card));
        self.stack.pop();
        Ok(())
    }

    fn give_back_door(&mut self, color: Color, events: &mut Vec<GameEvent>) -> EngineResult<()> {
        self.doors.discard(color)?;
        events.push(GameEvent::DoorDiscarded(color));
        self.stack.pop();
        Ok(())
    }

    // === Automatic tasks ===

    fn step_refill(&mut self, events: &mut Vec<GameEvent>) {
        match self.hand.refill(&mut self.supply, RefillMode::Turn) {
            Ok(RefillProgress::Full) => {
                self.stack.pop();
                let drained = self.supply.drain_limbo_into_supply();
                if drained > 0 {
                    events.push(GameEvent::LimboDrained(drained));
                    self.supply.shuffle(&mut self.rng);
                }
            }
            Ok(RefillProgress::Interrupted(nightmare)) => self.nightmare(nightmare, events),
            Err(err) => self.exhausted(err, events),
        }
    }

    fn step_purge(&mut self, remaining: usize, events: &mut Vec<GameEvent>) {
        if remaining == 0 {
            self.stack.pop();
            return;
        }
        match self.supply.draw() {
            Ok(card) if card.is_door() => self.supply.divert(card),
            Ok(card) if card.is_nightmare() => self.nightmare(card, events),
            Ok(card) => {
                self.supply.discard(card);
                events.push(GameEvent::CardPurged(card));
                if let Some(Task::Purge { remaining }) = self.stack.top_mut() {
                    *remaining -= 1;
                }
            }
            Err(err) => self.exhausted(err, events),
        }
    }

    /// A drawn nightmare leaves the game and waits for a remedy.
    fn nightmare(&mut self, card: Card, events: &mut Vec<GameEvent>) {
        log::debug!("nightmare drawn at depth {}", self.stack.depth());
        self.supply.banish(card);
        events.push(GameEvent::NightmareDrawn);
        self.stack.push(Task::AwaitRemedy);
    }

    // === Queries ===

    /// The decision the session is waiting for, `None` once the game is over.
    #[must_use]
    pub fn prompt(&self) -> Option<Prompt> {
        if self.status.is_terminal() {
            return None;
        }
        match self.stack.top() {
            None => Some(Prompt::PlayOrDiscard),
            Some(Task::AwaitRemedy) => Some(Prompt::Nightmare {
                remedies: SmallVec::from_slice(RemedySet::offered(&self.hand, &self.doors).as_slice()),
            }),
            Some(Task::AwaitKey) => Some(Prompt::SelectKey {
                positions: self.hand.key_positions(),
            }),
            Some(Task::AwaitDoor) => Some(Prompt::SelectDoor {
                colors: self.doors.unlocked_colors(),
            }),
            Some(Task::AwaitProphecy { revealed, .. }) => Some(Prompt::OrderProphecy {
                revealed: revealed.clone(),
            }),
            // Only on the stack mid-submit.
            Some(Task::Refill | Task::Purge { .. }) => None,
        }
    }

    /// Every intent the current prompt accepts.
    #[must_use]
    pub fn legal_intents(&self) -> Vec<Intent> {
        let Some(prompt) = self.prompt() else {
            return Vec::new();
        };
        match prompt {
            Prompt::PlayOrDiscard => {
                let cards = self.hand.cards();
                let plays = cards
                    .iter()
                    .enumerate()
                    .filter(|&(_, &card)| self.labyrinth.can_play(card))
                    .map(|(i, _)| Intent::Play(i + 1));
                let discards = (1..=cards.len()).map(Intent::Discard);
                plays.chain(discards).collect()
            }
            Prompt::Nightmare { remedies } => remedies.into_iter().map(Intent::NightmareChoice).collect(),
            Prompt::SelectKey { positions } => positions.into_iter().map(Intent::SelectKey).collect(),
            Prompt::SelectDoor { colors } => colors.into_iter().map(Intent::SelectDoor).collect(),
            Prompt::OrderProphecy { revealed } => ProphecyOrder::all(revealed.len())
                .iter()
                .map(|order| Intent::OrderProphecy(order.to_string()))
                .collect(),
        }
    }

    /// Everything needed to render the table.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            turn: self.turn,
            status: self.status,
            doors: self.doors.counts(),
            labyrinth: self.labyrinth.cards().clone(),
            streak: self.labyrinth.streak(),
            hand: self.hand.cards().to_vec(),
            draw_pile_len: self.supply.draw_pile_len(),
            discard_len: self.supply.discard_pile().len(),
            prompt: self.prompt(),
        }
    }

    /// How many of each card the session holds, across every zone.
    ///
    /// Includes cards revealed by a pending prophecy.
    #[must_use]
    pub fn census(&self) -> FxHashMap<Card, usize> {
        let pending = self.stack.tasks().iter().flat_map(|task| match task {
            Task::AwaitProphecy { revealed, .. } => revealed.as_slice(),
            _ => &[][..],
        });

        let mut census = FxHashMap::default();
        for card in self
            .supply
            .iter()
            .chain(self.hand.cards().iter().copied())
            .chain(self.labyrinth.cards().iter().copied())
            .chain(pending.copied())
        {
            *census.entry(card).or_insert(0) += 1;
        }
        census
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Accepted intents, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<IntentRecord> {
        &self.history
    }

    /// The seed every shuffle derives from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Pending tasks, including the one waiting for input.
    #[must_use]
    pub fn pending_depth(&self) -> usize {
        self.stack.depth()
    }

    #[must_use]
    pub fn pending(&self) -> &PendingStack {
        &self.stack
    }

    #[must_use]
    pub fn supply(&self) -> &Supply {
        &self.supply
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn labyrinth(&self) -> &Labyrinth {
        &self.labyrinth
    }

    #[must_use]
    pub fn doors(&self) -> &DoorRegistry {
        &self.doors
    }
}

fn expected_for(task: &Task) -> &'static str {
    match task {
        Task::AwaitRemedy => "nightmare choice",
        Task::AwaitKey => "key selection",
        Task::AwaitDoor => "door selection",
        Task::AwaitProphecy { .. } => "prophecy ordering",
        Task::Refill | Task::Purge { .. } => "nothing",
    }
}
