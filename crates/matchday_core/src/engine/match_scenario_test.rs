//! Scenario tests for the match state machine and its observers.

use super::*;
use crate::error::{MatchError, ObserverError};
use crate::models::{EventPayload, MatchEventKind, Score, TeamSide, Winner};
use crate::observers::{
    shared, Commentator, MatchObserver, MediaReporter, RecordingObserver, StatisticsTracker,
};
use crate::player::{Footballer, Injured, PlayerFactory, Recoverable};
use proptest::prelude::*;

fn started(home: &str, away: &str) -> FootballMatch {
    let mut game = FootballMatch::new(home, away, Some("Central Park"));
    game.start_match().unwrap();
    game
}

#[test]
fn test_derby_scenario() {
    let mut derby = FootballMatch::new("Team A", "Team B", None);
    let stats = shared(StatisticsTracker::new());
    let media = shared(MediaReporter::new("Daily Sport"));
    derby.attach(shared(Commentator::new("Anchor")));
    derby.attach(stats.clone());
    derby.attach(media.clone());

    derby.start_match().unwrap();
    derby.goal(TeamSide::Home, "P1", 18, None).unwrap();
    derby.yellow_card("P2", 34, None).unwrap();
    derby.substitution("P3", "P4", 65).unwrap();
    derby.goal(TeamSide::Away, "P5", 78, None).unwrap();
    derby.goal(TeamSide::Home, "P1", 89, None).unwrap();
    derby.finish_match().unwrap();

    let info = derby.match_info();
    assert_eq!(info.winner, Some(Winner::Team("Team A".to_string())));
    assert!(derby.winner() == "Team A");

    let stats = stats.borrow().match_statistics();
    assert_eq!(stats.total_goals, 3);
    assert_eq!(stats.home_goals, 2);
    assert_eq!(stats.away_goals, 1);
    assert_eq!(stats.yellow_cards, 1);
    assert_eq!(stats.card_recipients, vec!["P2"]);
    assert_eq!(stats.substitutions, 1);
    assert_eq!(stats.goals_by("P1").count(), 2);
    assert_eq!(stats.total_events, 7);

    // Two goals from the home side, one away, plus the final whistle.
    assert_eq!(media.borrow().breaking_news().len(), 4);
    assert_eq!(derby.event_log().len(), 7);
    assert_eq!(info.total_events, 7);
}

#[test]
fn test_start_sets_up_match() {
    let mut game = FootballMatch::new("Team A", "Team B", None);
    assert_eq!(game.stadium(), "Team A Stadium");
    assert_eq!(game.status(), MatchStatus::NotStarted);

    let recorder = shared(RecordingObserver::new());
    game.attach(recorder.clone());
    let report = game.start_match().unwrap();

    assert!(report.is_clean());
    assert_eq!(report.delivered, 1);
    assert_eq!(game.status(), MatchStatus::InProgress);
    assert_eq!(game.minute(), 0);

    let recorder = recorder.borrow();
    let (kind, payload) = &recorder.received()[0];
    assert_eq!(*kind, MatchEventKind::MatchStart);
    match payload {
        EventPayload::MatchStart(start) => {
            assert_eq!(start.home_team, "Team A");
            assert_eq!(start.away_team, "Team B");
            assert_eq!(start.stadium, "Team A Stadium");
        }
        other => panic!("unexpected payload {other:?}"),
    }
}

#[test]
fn test_goal_payload_carries_score_snapshot() {
    let mut game = started("Team A", "Team B");
    game.goal(TeamSide::Away, "P5", 12, Some("P6")).unwrap();
    game.goal(TeamSide::Home, "P1", 40, None).unwrap();

    let goals: Vec<_> = game
        .event_log()
        .iter()
        .filter_map(|event| match &event.payload {
            EventPayload::Goal(goal) => Some(goal.clone()),
            _ => None,
        })
        .collect();

    assert_eq!(goals[0].score, Score { home: 0, away: 1 });
    assert_eq!(goals[0].assist.as_deref(), Some("P6"));
    assert_eq!(goals[0].team_name, "Team B");
    assert_eq!(goals[1].score, Score { home: 1, away: 1 });
    assert_eq!(game.minute(), 40);
    assert!(game.winner().is_draw());
}

#[test]
fn test_yellow_card_reason() {
    let mut game = started("Team A", "Team B");
    game.yellow_card("P2", 34, None).unwrap();
    game.yellow_card("P8", 50, Some("time wasting")).unwrap();

    let reasons: Vec<_> = game
        .event_log()
        .iter()
        .filter_map(|event| match &event.payload {
            EventPayload::YellowCard(card) => Some(card.reason.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(reasons, vec!["rule violation", "time wasting"]);
    assert_eq!(game.minute(), 50);
}

#[test]
fn test_finish_sets_full_time() {
    let mut game = started("Team A", "Team B");
    game.goal(TeamSide::Away, "P5", 30, None).unwrap();
    game.finish_match().unwrap();

    assert_eq!(game.status(), MatchStatus::Finished);
    assert_eq!(game.minute(), 90);
    let last = game.event_log().last().unwrap();
    assert_eq!(last.kind, MatchEventKind::MatchEnd);
    match &last.payload {
        EventPayload::MatchEnd(end) => {
            assert_eq!(end.winner, Winner::Team("Team B".to_string()));
            assert_eq!(end.final_score, Score { home: 0, away: 1 });
        }
        other => panic!("unexpected payload {other:?}"),
    }
}

#[test]
fn test_winner_available_before_finish() {
    let mut game = started("Team A", "Team B");
    game.goal(TeamSide::Home, "P1", 5, None).unwrap();

    assert_eq!(game.winner(), Winner::Team("Team A".to_string()));
    assert_eq!(game.match_info().winner, None);
    assert!(!game.match_info().is_finished);
}

#[test]
fn test_match_info_is_idempotent() {
    let mut game = started("Team A", "Team B");
    game.goal(TeamSide::Home, "P1", 5, None).unwrap();
    assert_eq!(game.match_info(), game.match_info());

    game.finish_match().unwrap();
    let first = game.match_info();
    let second = game.match_info();
    assert_eq!(first, second);
    assert_eq!(first.winner, Some(Winner::Team("Team A".to_string())));
}

#[test]
fn test_strict_policy_rejects_out_of_state_calls() {
    let mut game = FootballMatch::new("Team A", "Team B", None);

    let err = game.goal(TeamSide::Home, "P1", 10, None).unwrap_err();
    assert_eq!(
        err,
        MatchError::InvalidTransition { operation: "record a goal", status: MatchStatus::NotStarted }
    );
    assert!(game.finish_match().is_err());
    assert_eq!(game.score(), Score::default());
    assert!(game.event_log().is_empty());

    game.start_match().unwrap();
    assert!(game.start_match().is_err());
    game.finish_match().unwrap();

    assert!(game.yellow_card("P2", 91, None).is_err());
    assert!(game.substitution("P3", "P4", 91).is_err());
    assert!(game.start_match().is_err());
    assert_eq!(game.event_log().len(), 2);
    assert_eq!(game.status(), MatchStatus::Finished);
}

#[test]
fn test_rejected_call_notifies_nobody() {
    let mut game = FootballMatch::new("Team A", "Team B", None);
    let recorder = shared(RecordingObserver::new());
    game.attach(recorder.clone());

    assert!(game.substitution("P3", "P4", 10).is_err());
    assert!(recorder.borrow().is_empty());
}

#[test]
fn test_permissive_policy_applies_out_of_state_calls() {
    let mut game = FootballMatch::with_config("Team A", "Team B", None, MatchConfig::permissive());

    game.goal(TeamSide::Home, "P1", 23, None).unwrap();
    assert_eq!(game.status(), MatchStatus::NotStarted);
    assert_eq!(game.score().home, 1);

    game.finish_match().unwrap();
    assert_eq!(game.status(), MatchStatus::Finished);

    // Status never moves backwards, even when the log keeps growing.
    game.start_match().unwrap();
    assert_eq!(game.status(), MatchStatus::Finished);
    assert_eq!(game.minute(), 0);
    assert_eq!(game.event_log().len(), 3);
}

#[test]
fn test_observers_see_identical_events_in_order() {
    let mut game = FootballMatch::new("Team A", "Team B", None);
    let observers: Vec<_> =
        ["first", "second", "third"].map(|label| shared(RecordingObserver::named(label))).into();
    for observer in &observers {
        game.attach(observer.clone());
    }

    game.start_match().unwrap();
    game.goal(TeamSide::Home, "P1", 10, None).unwrap();
    game.yellow_card("P2", 20, None).unwrap();
    game.substitution("P3", "P4", 60).unwrap();
    game.finish_match().unwrap();

    let reference = observers[0].borrow().received().to_vec();
    assert_eq!(reference.len(), 5);
    for observer in &observers[1..] {
        assert_eq!(observer.borrow().received(), reference.as_slice());
    }

    let logged: Vec<_> =
        game.event_log().iter().map(|event| (event.kind, event.payload.clone())).collect();
    assert_eq!(logged, reference);
}

#[test]
fn test_detached_observer_gets_nothing() {
    let mut game = started("Team A", "Team B");
    let stats = shared(StatisticsTracker::new());

    assert!(game.attach(stats.clone()));
    assert!(game.detach(&stats));
    game.goal(TeamSide::Home, "P1", 23, None).unwrap();

    assert_eq!(stats.borrow().match_statistics().total_goals, 0);
    assert!(stats.borrow().events().is_empty());
    assert_eq!(game.observer_count(), 0);
}

#[test]
fn test_duplicate_attach_delivers_once() {
    let mut game = FootballMatch::new("Team A", "Team B", None);
    let recorder = shared(RecordingObserver::new());
    assert!(game.attach(recorder.clone()));
    assert!(!game.attach(recorder.clone()));

    game.start_match().unwrap();
    assert_eq!(recorder.borrow().len(), 1);
}

struct Exploding;

impl MatchObserver for Exploding {
    fn update(&mut self, kind: MatchEventKind, _: &EventPayload) -> Result<(), ObserverError> {
        Err(ObserverError::Rejected(format!("cannot handle {kind}")))
    }
}

#[test]
fn test_failing_observer_is_isolated() {
    let mut game = FootballMatch::new("Team A", "Team B", None);
    let before = shared(RecordingObserver::new());
    let after = shared(StatisticsTracker::new());
    game.attach(before.clone());
    game.attach(shared(Exploding));
    game.attach(after.clone());

    game.start_match().unwrap();
    let report = game.goal(TeamSide::Home, "P1", 10, None).unwrap();

    assert_eq!(report.delivered, 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].observer, "observer");
    assert_eq!(game.score(), Score { home: 1, away: 0 });
    assert_eq!(game.event_log().len(), 2);
    assert_eq!(before.borrow().len(), 2);
    assert_eq!(after.borrow().match_statistics().total_goals, 1);
}

#[test]
fn test_red_card_is_never_emitted() {
    let mut game = started("Team A", "Team B");
    game.yellow_card("P2", 20, None).unwrap();
    game.yellow_card("P2", 70, None).unwrap();
    game.finish_match().unwrap();

    assert!(game.event_log().iter().all(|event| event.kind != MatchEventKind::RedCard));
}

#[test]
fn test_cup_final_with_injured_players() {
    let zenit = PlayerFactory::create_team_squad("Zenit");
    let striker = zenit.into_iter().find(|p| p.name() == "Malcom").unwrap();
    let mut injured = Injured::new(striker, "muscle strain", 10).unwrap();
    assert!(injured.play().contains("cannot play"));

    let mut final_match = FootballMatch::new("Zenit", "Lokomotiv", Some("Gazprom Arena"));
    let stats = shared(StatisticsTracker::new());
    final_match.attach(shared(Commentator::new("Anchor")));
    final_match.attach(stats.clone());

    final_match.start_match().unwrap();
    final_match.yellow_card("Wilmar Barrios", 28, Some("unsporting behaviour")).unwrap();
    final_match.yellow_card("Stanislav Magkeev", 41, Some("late tackle")).unwrap();
    final_match.substitution(injured.name(), "Claudinho", 72).unwrap();
    final_match.goal(TeamSide::Home, "Claudinho", 88, None).unwrap();
    final_match.finish_match().unwrap();

    let stats = stats.borrow().match_statistics();
    assert!(final_match.winner() == "Zenit");
    assert_eq!(stats.total_goals, 1);
    assert_eq!(stats.yellow_cards, 2);
    assert_eq!(stats.goal_scorers[0], "Claudinho");

    for _ in 0..10 {
        injured.recover();
    }
    assert!(injured.can_play());
}

#[derive(Debug, Clone)]
enum Op {
    Start,
    Goal(bool, u8),
    Card(u8),
    Sub(u8),
    Finish,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        Just(Op::Start),
        (any::<bool>(), 0u8..=120).prop_map(|(home, minute)| Op::Goal(home, minute)),
        (0u8..=120).prop_map(Op::Card),
        (0u8..=120).prop_map(Op::Sub),
        Just(Op::Finish),
    ]
}

fn apply(game: &mut FootballMatch, op: &Op) {
    // Rejections are expected under the strict policy; only state matters here.
    let _ = match op {
        Op::Start => game.start_match(),
        Op::Goal(home, minute) => {
            let side = if *home { TeamSide::Home } else { TeamSide::Away };
            game.goal(side, "Scorer", *minute, None)
        }
        Op::Card(minute) => game.yellow_card("Booked", *minute, None),
        Op::Sub(minute) => game.substitution("Out", "In", *minute),
        Op::Finish => game.finish_match(),
    };
}

proptest! {
    /// Property: score components, log length and status never decrease.
    #[test]
    fn prop_match_state_is_monotonic(
        permissive in any::<bool>(),
        ops in prop::collection::vec(op_strategy(), 0..60)
    ) {
        let config = if permissive { MatchConfig::permissive() } else { MatchConfig::strict() };
        let mut game = FootballMatch::with_config("Home", "Away", None, config);
        let recorder = shared(RecordingObserver::new());
        game.attach(recorder.clone());

        for op in &ops {
            let before = (game.score(), game.event_log().len(), game.status());
            apply(&mut game, op);
            prop_assert!(game.score().home >= before.0.home);
            prop_assert!(game.score().away >= before.0.away);
            prop_assert!(game.event_log().len() >= before.1);
            prop_assert!(game.status() >= before.2);
            prop_assert_eq!(recorder.borrow().len(), game.event_log().len());
        }

        let goals = game
            .event_log()
            .iter()
            .filter(|event| event.kind == MatchEventKind::Goal)
            .count();
        prop_assert_eq!((game.score().home + game.score().away) as usize, goals);
    }
}
