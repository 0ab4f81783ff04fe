use loto90_engine::cards::Card;
use loto90_engine::evaluator::{verify_bingo, verify_jackpot, verify_quine};
use loto90_engine::game::CalledNumbers;

// A structurally valid card used across the evaluation tests.
fn sample_card() -> Card {
    Card::new(
        1,
        7,
        3,
        [
            [5, 0, 23, 0, 41, 0, 62, 0, 81],
            [0, 11, 0, 35, 0, 55, 0, 77, 90],
            [7, 0, 30, 0, 50, 0, 70, 79, 0],
        ],
    )
}

fn called_from(numbers: &[u8]) -> CalledNumbers {
    let mut called = CalledNumbers::new();
    for &n in numbers {
        called.call(n).expect("test numbers are valid and unique");
    }
    called
}

// Numbers 1-90 that do not appear on sample_card, in a fixed order.
fn fillers(count: usize) -> Vec<u8> {
    let on_card: Vec<u8> = sample_card().numbers();
    (1..=90u8)
        .filter(|n| !on_card.contains(n))
        .take(count)
        .collect()
}

#[test]
fn quine_reports_first_fully_marked_row() {
    let card = Card::new(
        1,
        7,
        3,
        [
            [5, 0, 0, 23, 0, 41, 0, 0, 77],
            [0, 11, 0, 35, 0, 55, 0, 0, 90],
            [7, 0, 30, 0, 50, 0, 70, 79, 0],
        ],
    );
    let called = called_from(&[5, 23, 41, 77]);

    let found = verify_quine(&card, &called).expect("row 0 is fully marked");
    assert_eq!(found.row, 0);
    assert_eq!(found.numbers, vec![5, 23, 41, 77]);
    assert_eq!(found.draw_count, 4);
}

#[test]
fn quine_prefers_lowest_row_when_several_complete() {
    let card = sample_card();
    let mut numbers = card.row_numbers(1);
    numbers.extend(card.row_numbers(0));
    let called = called_from(&numbers);

    let found = verify_quine(&card, &called).expect("two rows are complete");
    assert_eq!(found.row, 0, "rows are checked in index order");
}

#[test]
fn no_quine_while_a_number_is_missing() {
    let card = sample_card();
    let mut row0 = card.row_numbers(0);
    row0.pop();
    let called = called_from(&row0);
    assert!(verify_quine(&card, &called).is_none());
    assert!(verify_quine(&card, &CalledNumbers::new()).is_none());
}

#[test]
fn bingo_requires_every_number_on_the_card() {
    let card = sample_card();
    let all = card.numbers();
    let called = called_from(&all);

    let found = verify_bingo(&card, &called).expect("all 15 numbers called");
    assert_eq!(found.numbers.len(), 15);
    assert_eq!(found.draw_count, 15);

    let mut short = all.clone();
    short.pop();
    assert!(verify_bingo(&card, &called_from(&short)).is_none());
}

#[test]
fn evaluation_is_pure_and_repeatable() {
    let card = sample_card();
    let called = called_from(&card.row_numbers(0));
    let first = verify_quine(&card, &called);
    let second = verify_quine(&card, &called);
    assert_eq!(first, second, "identical inputs must yield identical output");
    assert_eq!(verify_bingo(&card, &called), verify_bingo(&card, &called));
}

#[test]
fn jackpot_holds_at_thirty_eight_draws_with_threshold_forty() {
    let card = sample_card();
    let mut numbers = fillers(23);
    numbers.extend(card.numbers());
    let called = called_from(&numbers);
    assert_eq!(called.draw_count(), 38);
    assert!(verify_jackpot(&card, &called, 40));
}

#[test]
fn jackpot_boundary_is_inclusive_at_the_threshold() {
    let card = sample_card();

    let mut at = fillers(25);
    at.extend(card.numbers());
    let called = called_from(&at);
    assert_eq!(called.draw_count(), 40);
    assert!(verify_jackpot(&card, &called, 40), "draw count == threshold");

    let mut over = fillers(26);
    over.extend(card.numbers());
    let called = called_from(&over);
    assert_eq!(called.draw_count(), 41);
    assert!(!verify_jackpot(&card, &called, 40), "draw count == threshold + 1");
}

#[test]
fn jackpot_requires_a_bingo_first() {
    let card = sample_card();
    let called = called_from(&card.row_numbers(0));
    assert!(!verify_jackpot(&card, &called, 40));
}
