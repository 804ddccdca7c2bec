use poker_eval::cards::{Card, Rank::*, Suit::*};
use poker_eval::evaluator::{compare_holdem, evaluate_holdem, Category};
use poker_eval::hand::{Board, HoleCards};

fn hole(a: Card, b: Card) -> HoleCards {
    HoleCards::try_new(a, b).expect("valid hole cards")
}

#[test]
fn pair_beats_lower_pair() {
    let board: Board = "Ac 9d 4s 2h 6c".parse().unwrap();
    let a = hole(Card::new(King, Spades), Card::new(King, Hearts));
    let b = hole(Card::new(Queen, Clubs), Card::new(Queen, Hearts));
    let ord = compare_holdem(&a, &b, &board).unwrap();
    assert!(ord.is_gt(), "higher pair should beat lower pair");
}

#[test]
fn pair_kicker_breaks_ties() {
    let board: Board = "Kc 9d 4s 2h 6c".parse().unwrap();
    let a = hole(Card::new(King, Spades), Card::new(Ace, Diamonds));
    let b = hole(Card::new(King, Hearts), Card::new(Queen, Diamonds));
    let ord = compare_holdem(&a, &b, &board).unwrap();
    assert!(ord.is_gt(), "pair with higher kicker should win");
}

#[test]
fn two_pair_ordering_high_then_low_then_kicker() {
    let board: Board = "Kc 9d 4s 2h Ac".parse().unwrap();
    let a = hole(Card::new(King, Spades), Card::new(Nine, Clubs));
    let b = hole(Card::new(King, Hearts), Card::new(Two, Diamonds));
    let ord = compare_holdem(&a, &b, &board).unwrap();
    assert!(ord.is_gt(), "K9 two pair should beat K2 two pair");
}

#[test]
fn straight_top_card_and_wheel() {
    let board: Board = "5c 4d 3s 2h Kc".parse().unwrap();
    let a = hole(Card::new(Ace, Diamonds), Card::new(Nine, Clubs));
    let b = hole(Card::new(Six, Diamonds), Card::new(Nine, Hearts));
    let ord = compare_holdem(&a, &b, &board).unwrap();
    assert!(ord.is_lt(), "6-high straight should beat the wheel");
}

#[test]
fn flush_order_by_kickers() {
    let board: Board = "Ac 9c 4c 2c 6d".parse().unwrap();
    let a = hole(Card::new(King, Clubs), Card::new(Queen, Diamonds));
    let b = hole(Card::new(Queen, Clubs), Card::new(Jack, Diamonds));
    let ord = compare_holdem(&a, &b, &board).unwrap();
    assert!(ord.is_gt(), "flush with higher second card should win");
}

#[test]
fn full_house_ordering_trips_then_pair() {
    let board: Board = "Kc Kd 4s 4h 2c".parse().unwrap();
    let a = hole(Card::new(King, Spades), Card::new(Ace, Diamonds));
    let b = hole(Card::new(Four, Diamonds), Card::new(Ace, Hearts));
    let ea = evaluate_holdem(&a, &board).unwrap();
    let eb = evaluate_holdem(&b, &board).unwrap();
    assert_eq!(ea.category, Category::FullHouse);
    assert_eq!(eb.category, Category::FullHouse);
    assert_eq!(ea.key().as_slice(), &[6, 13, 4]);
    assert_eq!(eb.key().as_slice(), &[6, 4, 13]);
    assert!(ea > eb, "full house with higher trips should win");
}

#[test]
fn quads_on_board_kicker_decides() {
    let board: Board = "9c 9d 9h 9s Kc".parse().unwrap();
    let a = hole(Card::new(Ace, Diamonds), Card::new(Two, Diamonds));
    let b = hole(Card::new(Queen, Diamonds), Card::new(Three, Diamonds));
    let ord = compare_holdem(&a, &b, &board).unwrap();
    assert!(ord.is_gt(), "with quads on board the higher kicker wins");
}

#[test]
fn board_plays_for_both_players() {
    let board: Board = "As Ks Qd Jc Th".parse().unwrap();
    let a = hole(Card::new(Two, Clubs), Card::new(Three, Diamonds));
    let b = hole(Card::new(Four, Clubs), Card::new(Five, Diamonds));
    let ord = compare_holdem(&a, &b, &board).unwrap();
    assert!(ord.is_eq(), "a straight on board splits the pot");
}

#[test]
fn straight_flush_ordering() {
    let board: Board = "9c 8c 7c 6c 2d".parse().unwrap();
    let a = hole(Card::new(Five, Clubs), Card::new(Ace, Diamonds));
    let b = hole(Card::new(Ten, Clubs), Card::new(Ace, Hearts));
    let ord = compare_holdem(&a, &b, &board).unwrap();
    assert!(ord.is_lt(), "higher straight flush should win");
}

#[test]
fn royal_flush_beats_king_high_straight_flush() {
    let board: Board = "Kh Qh Jh Th 2d".parse().unwrap();
    let a = hole(Card::new(Ace, Hearts), Card::new(Three, Clubs));
    let b = hole(Card::new(Nine, Hearts), Card::new(Ace, Spades));
    let ea = evaluate_holdem(&a, &board).unwrap();
    let eb = evaluate_holdem(&b, &board).unwrap();
    assert_eq!(ea.category, Category::RoyalFlush);
    assert_eq!(eb.category, Category::StraightFlush);
    assert!(compare_holdem(&a, &b, &board).unwrap().is_gt());
}
