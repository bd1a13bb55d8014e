//! Turn-level integration tests.
//!
//! Each test stages an exact table with `Layout` so draws are predictable.

use onirim::cards::{Card, Color};
use onirim::core::{EngineError, GameEvent, Intent, SessionConfig};
use onirim::game::{Layout, Prompt, Session, Status};
use onirim::zones::{DoorCounts, Streak};

fn config() -> SessionConfig {
    SessionConfig::new().with_seed(42)
}

/// Moons cycling through the colors, bottom of the draw pile.
fn filler(count: usize) -> Vec<Card> {
    (0..count).map(|i| Card::moon(Color::REAL[i % 4])).collect()
}

fn hand() -> Vec<Card> {
    vec![
        Card::sun(Color::Red),
        Card::moon(Color::Red),
        Card::sun(Color::Blue),
        Card::key(Color::Green),
        Card::moon(Color::Brown),
    ]
}

fn session_with(layout: Layout) -> Session {
    Session::with_layout(config(), layout).unwrap()
}

// =============================================================================
// Playing Cards
// =============================================================================

#[test]
fn test_first_play_starts_streak() {
    let mut session = session_with(Layout {
        draw_pile: filler(20),
        hand: hand(),
        ..Layout::default()
    });

    let events = session.submit(Intent::Play(1)).unwrap();

    assert_eq!(events, vec![GameEvent::CardPlayed(Card::sun(Color::Red))]);
    let snapshot = session.snapshot();
    assert_eq!(snapshot.labyrinth.iter().copied().collect::<Vec<_>>(), vec![Card::sun(Color::Red)]);
    assert_eq!(
        snapshot.streak,
        Streak {
            count: 1,
            color: Some(Color::Red)
        }
    );
    assert_eq!(snapshot.hand.len(), 5);
    assert_eq!(snapshot.draw_pile_len, 19);
    assert_eq!(snapshot.turn, 2);
}

#[test]
fn test_same_symbol_rejected_without_change() {
    let mut session = session_with(Layout {
        draw_pile: filler(20),
        hand: hand(),
        labyrinth: vec![Card::moon(Color::Red), Card::sun(Color::Red)],
        ..Layout::default()
    });
    let before = session.snapshot();

    let err = session.submit(Intent::Play(3)).unwrap_err();

    assert!(matches!(err, EngineError::InvalidPosition { position: 3, .. }));
    assert!(err.is_recoverable());
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_out_of_range_position() {
    let mut session = session_with(Layout {
        draw_pile: filler(20),
        hand: hand(),
        ..Layout::default()
    });

    assert!(matches!(
        session.submit(Intent::Play(0)),
        Err(EngineError::InvalidPosition { position: 0, .. })
    ));
    assert!(matches!(
        session.submit(Intent::Discard(6)),
        Err(EngineError::InvalidPosition { position: 6, .. })
    ));
    assert!(session.history().is_empty());
}

#[test]
fn test_third_card_unlocks_door() {
    let mut draw_pile = vec![Card::door(Color::Red)];
    draw_pile.extend(filler(20));
    let mut session = session_with(Layout {
        draw_pile,
        hand: hand(),
        labyrinth: vec![Card::moon(Color::Red), Card::sun(Color::Red)],
        ..Layout::default()
    });
    assert_eq!(session.labyrinth().streak().count, 2);

    let events = session.submit(Intent::Play(2)).unwrap();

    assert_eq!(
        events,
        vec![
            GameEvent::CardPlayed(Card::moon(Color::Red)),
            GameEvent::DoorUnlocked {
                color: Color::Red,
                door_removed: true
            },
        ]
    );
    assert_eq!(session.doors().get(Color::Red), 1);
    assert_eq!(session.labyrinth().streak(), Streak::default());
    assert!(!session.supply().draw_pile().contains(&Card::door(Color::Red)));
    assert_eq!(session.supply().removed(), &[Card::door(Color::Red)]);
}

#[test]
fn test_unlock_without_door_card_still_counts() {
    let mut session = session_with(Layout {
        draw_pile: filler(20),
        hand: hand(),
        labyrinth: vec![Card::moon(Color::Red), Card::sun(Color::Red)],
        ..Layout::default()
    });

    let events = session.submit(Intent::Play(2)).unwrap();

    assert!(events.contains(&GameEvent::DoorUnlocked {
        color: Color::Red,
        door_removed: false
    }));
    assert_eq!(session.doors().get(Color::Red), 1);
}

#[test]
fn test_streak_wasted_at_cap() {
    let mut draw_pile = vec![Card::door(Color::Red)];
    draw_pile.extend(filler(20));
    let mut session = session_with(Layout {
        draw_pile,
        hand: hand(),
        labyrinth: vec![Card::moon(Color::Red), Card::sun(Color::Red)],
        doors: DoorCounts([2, 0, 0, 0]),
    });

    let events = session.submit(Intent::Play(2)).unwrap();

    assert_eq!(
        events,
        vec![
            GameEvent::CardPlayed(Card::moon(Color::Red)),
            GameEvent::StreakWasted(Color::Red),
        ]
    );
    assert_eq!(session.doors().counts(), DoorCounts([2, 0, 0, 0]));
    assert!(session.supply().draw_pile().contains(&Card::door(Color::Red)));
    assert_eq!(session.labyrinth().streak().count, 0);
}

#[test]
fn test_streak_restarts_after_unlock() {
    let mut session = session_with(Layout {
        draw_pile: filler(20),
        hand: vec![
            Card::moon(Color::Red),
            Card::sun(Color::Red),
            Card::key(Color::Blue),
            Card::sun(Color::Blue),
            Card::moon(Color::Blue),
        ],
        labyrinth: vec![Card::sun(Color::Red), Card::key(Color::Red)],
        ..Layout::default()
    });

    session.submit(Intent::Play(1)).unwrap();
    assert_eq!(session.doors().get(Color::Red), 1);

    // The top card is still red, but the streak restarted
    session.submit(Intent::Play(1)).unwrap();
    assert_eq!(
        session.labyrinth().streak(),
        Streak {
            count: 1,
            color: Some(Color::Red)
        }
    );
}

// =============================================================================
// Discarding
// =============================================================================

#[test]
fn test_discard_non_key() {
    let mut session = session_with(Layout {
        draw_pile: filler(20),
        hand: hand(),
        ..Layout::default()
    });

    let events = session.submit(Intent::Discard(3)).unwrap();

    assert_eq!(events, vec![GameEvent::CardDiscarded(Card::sun(Color::Blue))]);
    assert_eq!(session.supply().discard_pile(), &[Card::sun(Color::Blue)]);
    assert_eq!(session.hand().len(), 5);
    assert!(session.labyrinth().is_empty());
}

#[test]
fn test_refill_diverts_doors_through_limbo() {
    let mut draw_pile = filler(20);
    draw_pile.push(Card::sun(Color::Green));
    draw_pile.push(Card::door(Color::Blue));
    let mut session = session_with(Layout {
        draw_pile,
        hand: hand(),
        ..Layout::default()
    });

    let events = session.submit(Intent::Discard(1)).unwrap();

    assert_eq!(
        events,
        vec![GameEvent::CardDiscarded(Card::sun(Color::Red)), GameEvent::LimboDrained(1)]
    );
    assert_eq!(session.hand().cards()[4], Card::sun(Color::Green));
    assert!(session.supply().limbo().is_empty());
    assert!(session.supply().draw_pile().contains(&Card::door(Color::Blue)));
    assert_eq!(session.supply().draw_pile_len(), 21);
}

// =============================================================================
// End Of Game
// =============================================================================

#[test]
fn test_last_door_wins_immediately() {
    let mut draw_pile = filler(20);
    draw_pile.insert(0, Card::door(Color::Brown));
    let mut session = session_with(Layout {
        draw_pile,
        hand: hand(),
        labyrinth: vec![Card::sun(Color::Brown), Card::key(Color::Brown)],
        doors: DoorCounts([2, 2, 2, 1]),
    });

    let events = session.submit(Intent::Play(5)).unwrap();

    assert_eq!(events.last(), Some(&GameEvent::GameOver(Status::Victory)));
    assert_eq!(session.status(), Status::Victory);
    assert!(session.doors().is_victory());
    // No refill after the winning play
    assert_eq!(session.hand().len(), 4);
    assert_eq!(session.prompt(), None);
    assert!(session.legal_intents().is_empty());
    assert_eq!(session.submit(Intent::Play(1)), Err(EngineError::GameOver));
}

#[test]
fn test_refill_from_empty_supply_is_defeat() {
    let mut session = session_with(Layout {
        draw_pile: vec![Card::door(Color::Red)],
        hand: hand(),
        ..Layout::default()
    });

    let events = session.submit(Intent::Play(1)).unwrap();

    assert_eq!(
        events,
        vec![
            GameEvent::CardPlayed(Card::sun(Color::Red)),
            GameEvent::SupplyExhausted,
            GameEvent::GameOver(Status::Defeat),
        ]
    );
    assert_eq!(session.status(), Status::Defeat);
    assert_eq!(session.pending_depth(), 0);
    assert_eq!(session.submit(Intent::Play(1)), Err(EngineError::GameOver));
}

#[test]
fn test_turn_start_with_empty_pile_is_defeat() {
    let mut session = session_with(Layout {
        draw_pile: vec![Card::moon(Color::Blue)],
        hand: hand(),
        ..Layout::default()
    });

    let events = session.submit(Intent::Play(1)).unwrap();

    assert_eq!(session.hand().len(), 5);
    assert_eq!(events.last(), Some(&GameEvent::GameOver(Status::Defeat)));
    assert_eq!(session.status(), Status::Defeat);
}

#[test]
fn test_layout_already_won_or_lost() {
    let won = session_with(Layout {
        draw_pile: filler(5),
        hand: hand(),
        doors: DoorCounts([2, 2, 2, 2]),
        ..Layout::default()
    });
    assert_eq!(won.status(), Status::Victory);

    let lost = session_with(Layout {
        hand: hand(),
        ..Layout::default()
    });
    assert_eq!(lost.status(), Status::Defeat);
    assert_eq!(lost.snapshot().prompt, None);
}

// =============================================================================
// Snapshots, History And Replay
// =============================================================================

#[test]
fn test_snapshot_reflects_table() {
    let session = session_with(Layout {
        draw_pile: filler(12),
        hand: hand(),
        labyrinth: vec![Card::sun(Color::Green)],
        doors: DoorCounts([1, 0, 0, 2]),
    });

    let snapshot = session.snapshot();

    assert_eq!(snapshot.status, Status::InProgress);
    assert_eq!(snapshot.turn, 1);
    assert_eq!(snapshot.doors, DoorCounts([1, 0, 0, 2]));
    assert_eq!(snapshot.hand, hand());
    assert_eq!(snapshot.draw_pile_len, 12);
    assert_eq!(snapshot.discard_len, 0);
    assert_eq!(snapshot.prompt, Some(Prompt::PlayOrDiscard));

    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("PlayOrDiscard"));
}

#[test]
fn test_replay_reproduces_session() {
    let mut session = Session::new(config()).unwrap();
    for _ in 0..15 {
        if session.is_over() {
            break;
        }
        let intent = session.legal_intents()[0].clone();
        session.submit(intent).unwrap();
    }

    let intents = session.history().iter().map(|r| r.intent.clone());
    let replayed = Session::replay(SessionConfig::new().with_seed(session.seed()), intents).unwrap();

    assert_eq!(replayed.snapshot(), session.snapshot());
    assert_eq!(replayed.supply().draw_pile(), session.supply().draw_pile());
    assert_eq!(replayed.history(), session.history());
}

#[test]
fn test_unseeded_session_reports_seed() {
    let session = Session::new(SessionConfig::new()).unwrap();
    let again = Session::new(SessionConfig::new().with_seed(session.seed())).unwrap();

    assert_eq!(session.snapshot(), again.snapshot());
}
