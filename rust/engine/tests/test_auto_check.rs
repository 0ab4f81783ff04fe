use loto90_engine::cards::{Card, Series};
use loto90_engine::claims::ClaimValidator;
use loto90_engine::config::EngineConfig;
use loto90_engine::game::{Game, GameStatus};
use loto90_engine::generator::CardGenerator;

const GAME: u64 = 7;
const OWNER: u64 = 3;

fn setup() -> (Game, Series, ClaimValidator) {
    let mut generator = CardGenerator::new(Some(11));
    let series = generator.generate_series(100, GAME, OWNER);
    let mut game = Game::new(GAME);
    game.set_status(GameStatus::Active);
    let validator = ClaimValidator::new(EngineConfig::default());
    (game, series, validator)
}

fn call_all(game: &mut Game, numbers: &[u8]) {
    for &n in numbers {
        game.call_number(n).expect("test numbers are valid and unique");
    }
}

#[test]
fn completed_card_reports_bingo_and_suppresses_its_quine() {
    let (mut game, series, validator) = setup();
    let cards = series.cards();
    call_all(&mut game, &cards[0].numbers());

    let report = validator.auto_check_all_cards(&mut game, cards);
    assert_eq!(report.bingos.len(), 1, "exactly one card is complete");
    assert_eq!(report.bingos[0].card_id, cards[0].id());
    assert!(report.bingos[0].jackpot_won, "bingo on draw 15");
    assert!(
        report.quines.is_empty(),
        "a card reporting bingo is not also reported as a quine"
    );
}

#[test]
fn rerun_without_new_draws_reports_nothing() {
    let (mut game, series, validator) = setup();
    let cards = series.cards();
    call_all(&mut game, &cards[0].numbers());
    call_all(&mut game, &cards[1].row_numbers(0));

    let first = validator.auto_check_all_cards(&mut game, cards);
    assert_eq!(first.bingos.len(), 1);
    assert_eq!(first.quines.len(), 1);
    assert_eq!(first.quines[0].card_id, cards[1].id());
    assert_eq!(first.quines[0].row, 0);

    let second = validator.auto_check_all_cards(&mut game, cards);
    assert!(
        second.is_empty(),
        "unchanged draws and winner records must yield an empty report"
    );
}

#[test]
fn quine_winner_still_reports_its_later_bingo() {
    let (mut game, series, validator) = setup();
    let cards = series.cards();
    call_all(&mut game, &cards[1].row_numbers(0));
    let first = validator.auto_check_all_cards(&mut game, cards);
    assert_eq!(first.quines.len(), 1);

    call_all(&mut game, &cards[1].row_numbers(1));
    call_all(&mut game, &cards[1].row_numbers(2));
    let second = validator.auto_check_all_cards(&mut game, cards);
    assert_eq!(second.bingos.len(), 1);
    assert_eq!(second.bingos[0].card_id, cards[1].id());
    assert!(
        second.quines.is_empty(),
        "the quine was already credited on the earlier pass"
    );
}

#[test]
fn winners_found_by_auto_check_are_recorded_on_the_game() {
    let (mut game, series, validator) = setup();
    let cards = series.cards();
    call_all(&mut game, &cards[0].numbers());

    validator.auto_check_all_cards(&mut game, cards);
    assert!(game.has_bingo_winner(OWNER, cards[0].id()));

    let err = validator
        .validate_bingo(&mut game, &cards[0], OWNER)
        .unwrap_err();
    assert!(
        matches!(err, loto90_engine::errors::ClaimError::AlreadyClaimed { .. }),
        "an explicit claim after auto-detection must not double-credit"
    );
}

#[test]
fn cards_from_other_games_and_tampered_cards_are_skipped() {
    let (mut game, series, validator) = setup();
    let mut cards: Vec<Card> = series.cards().to_vec();
    call_all(&mut game, &cards[0].numbers());

    let mut stray_gen = CardGenerator::new(Some(2));
    let stray = stray_gen.generate_card(900, GAME + 1, OWNER);
    let tampered = Card::new(901, GAME, OWNER, [[0; 9]; 3]);
    cards.push(stray);
    cards.push(tampered);

    let report = validator.auto_check_all_cards(&mut game, &cards);
    assert_eq!(report.bingos.len(), 1);
    assert_eq!(report.bingos[0].card_id, 100);
}

#[test]
fn inactive_game_yields_an_empty_report() {
    let (mut game, series, validator) = setup();
    call_all(&mut game, &series.cards()[0].numbers());
    game.set_status(GameStatus::Completed);

    let report = validator.auto_check_all_cards(&mut game, series.cards());
    assert!(report.is_empty());
}
