use showdown_engine::cards::{Card, Rank as R, Suit as S};
use showdown_engine::errors::EngineError;
use showdown_engine::hand::{evaluate_seven, Category};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

#[test]
fn detects_royal_flush() {
    let cards = [
        c(S::Hearts, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Three),
    ];
    let hs = evaluate_seven(&cards).unwrap();
    assert_eq!(hs.category, Category::StraightFlush);
    assert_eq!(hs.tiebreakers[0], R::Ace.value());
}

#[test]
fn category_ordering_is_correct() {
    // Four of a kind vs full house
    let quads = [
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Ace),
        c(S::Clubs, R::King),
        c(S::Diamonds, R::Queen),
        c(S::Hearts, R::Two),
    ];
    let full_house = [
        c(S::Clubs, R::King),
        c(S::Diamonds, R::King),
        c(S::Hearts, R::King),
        c(S::Clubs, R::Queen),
        c(S::Diamonds, R::Queen),
        c(S::Hearts, R::Two),
        c(S::Spades, R::Three),
    ];
    let a = evaluate_seven(&quads).unwrap();
    let b = evaluate_seven(&full_house).unwrap();
    assert!(a > b);
}

#[test]
fn straight_beats_three_of_a_kind() {
    let straight = [
        c(S::Clubs, R::Five),
        c(S::Hearts, R::Six),
        c(S::Clubs, R::Seven),
        c(S::Hearts, R::Eight),
        c(S::Diamonds, R::Nine),
        c(S::Spades, R::Two),
        c(S::Clubs, R::Three),
    ];
    let trips = [
        c(S::Clubs, R::Queen),
        c(S::Hearts, R::Queen),
        c(S::Diamonds, R::Queen),
        c(S::Spades, R::Two),
        c(S::Clubs, R::Three),
        c(S::Hearts, R::Four),
        c(S::Diamonds, R::Five),
    ];
    let a = evaluate_seven(&straight).unwrap();
    let b = evaluate_seven(&trips).unwrap();
    assert!(a > b);
}

#[test]
fn flush_beats_straight_and_is_detected() {
    let flush = [
        c(S::Hearts, R::Two),
        c(S::Hearts, R::Seven),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::Nine),
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::King),
    ];
    let straight = [
        c(S::Clubs, R::Five),
        c(S::Hearts, R::Six),
        c(S::Clubs, R::Seven),
        c(S::Hearts, R::Eight),
        c(S::Diamonds, R::Nine),
        c(S::Spades, R::Two),
        c(S::Clubs, R::Three),
    ];
    let a = evaluate_seven(&flush).unwrap();
    assert_eq!(a.category, Category::Flush);
    assert_eq!(a.tiebreakers, [12, 11, 9, 7, 2]);
    let b = evaluate_seven(&straight).unwrap();
    assert!(a > b);
}

#[test]
fn ace_low_straight_ranks_below_six_high() {
    let wheel = [
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::Two),
        c(S::Diamonds, R::Three),
        c(S::Spades, R::Four),
        c(S::Clubs, R::Five),
        c(S::Hearts, R::Nine),
        c(S::Diamonds, R::Jack),
    ];
    let six_high = [
        c(S::Clubs, R::Two),
        c(S::Hearts, R::Three),
        c(S::Diamonds, R::Four),
        c(S::Spades, R::Five),
        c(S::Clubs, R::Six),
        c(S::Hearts, R::Nine),
        c(S::Diamonds, R::Jack),
    ];
    let a = evaluate_seven(&wheel).unwrap();
    let b = evaluate_seven(&six_high).unwrap();
    assert_eq!(a.category, Category::Straight);
    assert_eq!(a.tiebreakers[0], 5, "wheel is five-high");
    assert_eq!(b.tiebreakers[0], 6);
    assert!(b > a);
}

// Worked example: board 2h 7d 9c Qs Qh with hole As Ad is two pair,
// aces over queens, nine kicker.
#[test]
fn two_pair_aces_and_queens_with_nine_kicker() {
    let cards = [
        c(S::Hearts, R::Two),
        c(S::Diamonds, R::Seven),
        c(S::Clubs, R::Nine),
        c(S::Spades, R::Queen),
        c(S::Hearts, R::Queen),
        c(S::Spades, R::Ace),
        c(S::Diamonds, R::Ace),
    ];
    let hs = evaluate_seven(&cards).unwrap();
    assert_eq!(hs.category, Category::TwoPair);
    assert_eq!(hs.tiebreakers, [14, 12, 9, 0, 0]);

    // ranks above one pair of aces with worse kickers
    let pair_of_aces = [
        c(S::Hearts, R::Two),
        c(S::Diamonds, R::Seven),
        c(S::Clubs, R::Nine),
        c(S::Spades, R::Jack),
        c(S::Hearts, R::Four),
        c(S::Spades, R::Ace),
        c(S::Diamonds, R::Ace),
    ];
    let below = evaluate_seven(&pair_of_aces).unwrap();
    assert!(hs > below);

    // and below any three of a kind
    let trips = [
        c(S::Hearts, R::Two),
        c(S::Diamonds, R::Seven),
        c(S::Clubs, R::Nine),
        c(S::Spades, R::Two),
        c(S::Hearts, R::Four),
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Ace),
    ];
    let above = evaluate_seven(&trips).unwrap();
    assert!(above > hs);
}

// Three pairs among 7 cards: the spare pair's rank must win the kicker
// slot when it beats every singleton.
#[test]
fn third_pair_competes_for_the_two_pair_kicker() {
    let cards = [
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Clubs, R::King),
        c(S::Diamonds, R::King),
        c(S::Clubs, R::Queen),
        c(S::Diamonds, R::Queen),
        c(S::Hearts, R::Jack),
    ];
    let hs = evaluate_seven(&cards).unwrap();
    assert_eq!(hs.category, Category::TwoPair);
    assert_eq!(hs.tiebreakers, [14, 13, 12, 0, 0], "queen outkicks the jack");
}

#[test]
fn evaluation_is_permutation_invariant() {
    let cards = [
        c(S::Hearts, R::Two),
        c(S::Diamonds, R::Seven),
        c(S::Clubs, R::Nine),
        c(S::Spades, R::Queen),
        c(S::Hearts, R::Queen),
        c(S::Spades, R::Ace),
        c(S::Diamonds, R::Ace),
    ];
    let baseline = evaluate_seven(&cards).unwrap();

    let mut rotated = cards;
    for _ in 0..cards.len() {
        rotated.rotate_left(1);
        assert_eq!(evaluate_seven(&rotated).unwrap(), baseline);
    }
    let mut reversed = cards;
    reversed.reverse();
    assert_eq!(evaluate_seven(&reversed).unwrap(), baseline);
}

#[test]
fn ordering_is_transitive_across_categories() {
    let high_card = evaluate_seven(&[
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::King),
        c(S::Spades, R::Nine),
        c(S::Diamonds, R::Eight),
        c(S::Clubs, R::Seven),
        c(S::Diamonds, R::Three),
        c(S::Hearts, R::Two),
    ])
    .unwrap();
    let pair = evaluate_seven(&[
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Two),
        c(S::Diamonds, R::Three),
        c(S::Clubs, R::Four),
        c(S::Diamonds, R::Six),
        c(S::Hearts, R::Seven),
    ])
    .unwrap();
    let trips = evaluate_seven(&[
        c(S::Clubs, R::Queen),
        c(S::Hearts, R::Queen),
        c(S::Diamonds, R::Queen),
        c(S::Spades, R::Two),
        c(S::Clubs, R::Three),
        c(S::Hearts, R::Four),
        c(S::Diamonds, R::Five),
    ])
    .unwrap();

    assert!(trips > pair);
    assert!(pair > high_card);
    assert!(trips > high_card);
}

#[test]
fn rejects_wrong_hand_size() {
    let six = [
        c(S::Hearts, R::Two),
        c(S::Diamonds, R::Seven),
        c(S::Clubs, R::Nine),
        c(S::Spades, R::Queen),
        c(S::Hearts, R::Queen),
        c(S::Spades, R::Ace),
    ];
    let err = evaluate_seven(&six).unwrap_err();
    assert_eq!(err, EngineError::InvalidHandSize { count: 6 });
}

#[test]
fn rejects_duplicate_cards() {
    let cards = [
        c(S::Hearts, R::Two),
        c(S::Diamonds, R::Seven),
        c(S::Clubs, R::Nine),
        c(S::Spades, R::Queen),
        c(S::Hearts, R::Queen),
        c(S::Spades, R::Ace),
        c(S::Spades, R::Ace),
    ];
    let err = evaluate_seven(&cards).unwrap_err();
    assert_eq!(
        err,
        EngineError::DuplicateCard {
            card: c(S::Spades, R::Ace)
        }
    );
}
