use serde::{Deserialize, Serialize};

use crate::cards::{Card, Rank, Suit};
use crate::errors::EngineError;

/// Number of cards a showdown evaluation takes (2 hole + 5 board).
pub const HAND_SIZE: usize = 7;

/// Hand categories ordered weakest to strongest.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

/// The rank of a player's best 5-card hand.
///
/// Tiebreakers are rank values ordered high to low, zero-padded; the derived
/// `Ord` (category first, then tiebreakers lexicographically) is the total
/// order all winner comparisons use.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandRank {
    pub category: Category,
    pub tiebreakers: [u8; 5],
}

/// Rank the best 5-card hand among the 21 sub-selections of 7 cards.
///
/// The result depends only on the multiset of cards, never their order.
///
/// # Errors
///
/// [`EngineError::InvalidHandSize`] unless exactly 7 cards are given;
/// [`EngineError::DuplicateCard`] if any card appears twice (impossible
/// under correct dealing, checked anyway).
pub fn evaluate_seven(cards: &[Card]) -> Result<HandRank, EngineError> {
    if cards.len() != HAND_SIZE {
        return Err(EngineError::InvalidHandSize { count: cards.len() });
    }
    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            if cards[i] == cards[j] {
                return Err(EngineError::DuplicateCard { card: cards[i] });
            }
        }
    }

    // Count ranks and suits
    let mut rank_counts = [0u8; 15]; // 2..14 used
    let mut suit_counts = [0u8; 4];
    let mut by_suit: [Vec<u8>; 4] = [vec![], vec![], vec![], vec![]];
    for &c in cards.iter() {
        let r = c.rank.value();
        rank_counts[r as usize] += 1;
        let s = suit_index(c.suit);
        suit_counts[s] += 1;
        by_suit[s].push(r);
    }

    let mut flush_suit: Option<usize> = None;
    for (s, &count) in suit_counts.iter().enumerate() {
        if count >= 5 {
            flush_suit = Some(s);
            break;
        }
    }

    // Straight flush
    if let Some(s) = flush_suit {
        by_suit[s].sort_unstable();
        by_suit[s].dedup();
        if let Some(high) = detect_straight_high(&by_suit[s]) {
            return Ok(ranked(Category::StraightFlush, &[high]));
        }
    }

    // Four of a kind
    if let Some((quad, kicker)) = detect_quads(&rank_counts) {
        return Ok(ranked(Category::FourOfAKind, &[quad, kicker]));
    }

    // Full house
    if let Some((trip, pair)) = detect_full_house(&rank_counts) {
        return Ok(ranked(Category::FullHouse, &[trip, pair]));
    }

    // Flush: five highest of the suited ranks
    if let Some(s) = flush_suit {
        let mut ranks = by_suit[s].clone();
        ranks.sort_unstable_by(|a, b| b.cmp(a));
        return Ok(ranked(Category::Flush, &ranks[..5]));
    }

    // Straight
    let uniq: Vec<u8> = (2..=14u8)
        .filter(|&r| rank_counts[r as usize] > 0)
        .collect();
    if let Some(high) = detect_straight_high(&uniq) {
        return Ok(ranked(Category::Straight, &[high]));
    }

    // Three of a kind / Two pair / One pair / High card
    let (trip_ranks, pair_ranks, singles) = classify_multiples(&rank_counts);
    if let Some(t) = trip_ranks.first().copied() {
        // trips plus the two highest of everything else
        let mut remain: Vec<u8> = pair_ranks.iter().chain(singles.iter()).copied().collect();
        remain.sort_unstable_by(|a, b| b.cmp(a));
        let k1 = remain.first().copied().unwrap_or(0);
        let k2 = remain.get(1).copied().unwrap_or(0);
        return Ok(ranked(Category::ThreeOfAKind, &[t, k1, k2]));
    }
    if pair_ranks.len() >= 2 {
        let mut prs = pair_ranks.clone();
        prs.sort_unstable_by(|a, b| b.cmp(a));
        let high = prs[0];
        let low = prs[1];
        // with three pairs the spare pair's rank competes for the kicker
        let mut rest: Vec<u8> = prs[2..].iter().chain(singles.iter()).copied().collect();
        rest.sort_unstable_by(|a, b| b.cmp(a));
        let kicker = rest.first().copied().unwrap_or(0);
        return Ok(ranked(Category::TwoPair, &[high, low, kicker]));
    }
    if let Some(p) = pair_ranks.first().copied() {
        let mut rest = singles.clone();
        rest.sort_unstable_by(|a, b| b.cmp(a));
        return Ok(ranked(
            Category::OnePair,
            &[
                p,
                rest.first().copied().unwrap_or(0),
                rest.get(1).copied().unwrap_or(0),
                rest.get(2).copied().unwrap_or(0),
            ],
        ));
    }

    // High card: top 5 ranks
    let mut highs = singles;
    highs.sort_unstable_by(|a, b| b.cmp(a));
    Ok(ranked(Category::HighCard, &highs[..5]))
}

fn ranked(category: Category, tiebreakers: &[u8]) -> HandRank {
    let mut k = [0u8; 5];
    k[..tiebreakers.len()].copy_from_slice(tiebreakers);
    HandRank {
        category,
        tiebreakers: k,
    }
}

fn suit_index(s: Suit) -> usize {
    s.index() as usize
}

/// Highest rank closing a 5-long run in an ascending, deduplicated rank
/// list. Ace counts low as well, so A-2-3-4-5 yields 5.
fn detect_straight_high(sorted_unique_ranks: &[u8]) -> Option<u8> {
    if sorted_unique_ranks.is_empty() {
        return None;
    }
    let mut w = sorted_unique_ranks.to_vec();
    if w.binary_search(&Rank::Ace.value()).is_ok() {
        w.insert(0, 1);
    }

    let mut run = 1;
    let mut best_high = 0u8;
    for i in 1..w.len() {
        if w[i] == w[i - 1] + 1 {
            run += 1;
            if run >= 5 {
                best_high = w[i];
            }
        } else {
            run = 1;
        }
    }
    if best_high == 0 {
        None
    } else {
        Some(best_high)
    }
}

fn detect_quads(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let quad = (2..=14u8).rev().find(|&r| rank_counts[r as usize] == 4)?;
    let kicker = (2..=14u8)
        .rev()
        .find(|&r| r != quad && rank_counts[r as usize] > 0)
        .unwrap_or(0);
    Some((quad, kicker))
}

fn detect_full_house(rank_counts: &[u8; 15]) -> Option<(u8, u8)> {
    let mut trips: Vec<u8> = vec![];
    let mut pairs: Vec<u8> = vec![];
    for r in (2..=14u8).rev() {
        match rank_counts[r as usize] {
            3 => trips.push(r),
            2 => pairs.push(r),
            _ => {}
        }
    }
    // two sets of trips: the lower one fills in as the pair
    match (trips.first(), trips.get(1), pairs.first()) {
        (Some(&t), Some(&second), _) => Some((t, second)),
        (Some(&t), None, Some(&p)) => Some((t, p)),
        _ => None,
    }
}

fn classify_multiples(rank_counts: &[u8; 15]) -> (Vec<u8>, Vec<u8>, Vec<u8>) {
    let mut trips = vec![];
    let mut pairs = vec![];
    let mut singles = vec![];
    for r in 2..=14u8 {
        match rank_counts[r as usize] {
            3 => trips.push(r),
            2 => pairs.push(r),
            1 => singles.push(r),
            _ => {}
        }
    }
    (trips, pairs, singles)
}
