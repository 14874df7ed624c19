//! Deck model integration tests.

use core::cmp::Ordering;
use std::collections::HashSet;

use deckgrid::{
    Card, DECK_SIZE, Face, GridCoords, Hand, LayoutError, ParseCardError, ROW_WIDTH, Suit,
};

const fn card(suit: Suit, face: Face) -> Card {
    Card::new(suit, face)
}

#[test]
fn indices_match_the_fixed_domain_order() {
    for (i, suit) in Suit::ALL.iter().enumerate() {
        assert_eq!(suit.index(), i);
    }
    for (i, face) in Face::ALL.iter().enumerate() {
        assert_eq!(face.index(), i);
    }
    assert_eq!(card(Suit::Spades, Face::Two).suit.index(), 0);
    assert_eq!(card(Suit::Hearts, Face::King).face.index(), 11);
    assert_eq!(card(Suit::Clubs, Face::Ace).suit.index(), 3);
}

#[test]
fn ordering_is_suit_major_then_face() {
    assert!(card(Suit::Spades, Face::Ace) < card(Suit::Diamonds, Face::Two));
    assert!(card(Suit::Hearts, Face::Three) > card(Suit::Hearts, Face::Two));
    assert!(card(Suit::Diamonds, Face::King) < card(Suit::Hearts, Face::Two));
}

#[test]
fn ordering_is_total_and_transitive() {
    let deck = Hand::standard();
    for &a in deck.cards() {
        assert_eq!(a.cmp(&a), Ordering::Equal);
        for &b in deck.cards() {
            assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
            for &c in deck.cards() {
                if a < b && b < c {
                    assert!(a < c);
                }
            }
        }
    }
}

#[test]
fn standard_deck_is_52_unique_cards_in_sorted_order() {
    let deck = Hand::standard();
    assert_eq!(deck.len(), DECK_SIZE);
    assert!(!deck.contains_duplicate());
    assert_eq!(deck.sorted(), deck);

    let pairs: HashSet<(usize, usize)> = deck
        .iter()
        .map(|c| (c.suit.index(), c.face.index()))
        .collect();
    assert_eq!(pairs.len(), DECK_SIZE);
}

#[test]
fn shuffle_is_a_permutation_of_the_same_cards() {
    let deck = Hand::standard();
    let shuffled = deck.shuffled_with_seed(42);

    assert_eq!(shuffled.len(), deck.len());
    assert_eq!(deck, Hand::standard());
    assert_eq!(shuffled.sorted(), deck.sorted());
    assert!(!shuffled.contains_duplicate());
}

#[test]
fn seeded_shuffles_are_reproducible() {
    let deck = Hand::standard();
    assert_eq!(deck.shuffled_with_seed(7), deck.shuffled_with_seed(7));
    assert_ne!(deck.shuffled_with_seed(1), deck.shuffled_with_seed(2));
}

#[test]
fn sort_after_any_permutation_round_trips() {
    let deck = Hand::standard();
    for seed in 0..8 {
        assert_eq!(deck.shuffled_with_seed(seed).sorted(), deck);
    }
}

#[test]
fn sort_in_place_matches_sorted() {
    let deck = Hand::standard();
    let mut shuffled = deck.shuffled_with_seed(3);
    shuffled.sort();
    assert_eq!(shuffled, deck);
}

#[test]
fn coords_follow_the_linear_index() {
    let deck = Hand::standard();
    for (i, &card) in deck.iter().enumerate() {
        let coords = deck.coords_of(card).unwrap();
        assert_eq!(coords, GridCoords::new(i % ROW_WIDTH, i / ROW_WIDTH));
        assert_eq!(coords.to_index(ROW_WIDTH), i);
    }
}

#[test]
fn coords_of_missing_card_fails() {
    let hand = Hand::from_cards(vec![card(Suit::Spades, Face::Two)]);
    assert_eq!(
        hand.coords_of(card(Suit::Hearts, Face::Ace)).unwrap_err(),
        LayoutError::CardNotFound
    );
}

#[test]
fn coords_of_duplicate_uses_first_occurrence() {
    let dup = card(Suit::Clubs, Face::Nine);
    let hand = Hand::from_cards(vec![card(Suit::Spades, Face::Two), dup, dup]);
    assert!(hand.contains_duplicate());
    assert_eq!(hand.coords_of(dup).unwrap(), GridCoords::new(1, 0));
}

#[test]
fn rows_partition_exactly() {
    let deck = Hand::standard();

    let grid = deck.rows(ROW_WIDTH).unwrap();
    assert_eq!(grid.len(), 4);
    assert!(grid.iter().all(|row| row.len() == ROW_WIDTH));
    assert!(grid[0].iter().all(|c| c.suit == Suit::Spades));
    assert!(grid[0].windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(grid[0].last(), Some(&card(Suit::Spades, Face::Ace)));
}

#[test]
fn rows_with_non_dividing_width_keep_every_card() {
    let deck = Hand::standard();
    let rows = deck.rows(5).unwrap();

    assert_eq!(rows.len(), 11);
    assert_eq!(rows.last().unwrap().len(), 2);
    let flat: Vec<Card> = rows.concat();
    assert_eq!(flat, deck.cards());
}

#[test]
fn rows_with_zero_width_fails() {
    assert_eq!(
        Hand::standard().rows(0).unwrap_err(),
        LayoutError::ZeroWidth
    );
}

#[test]
fn degenerate_hands() {
    let empty = Hand::new();
    assert!(empty.shuffled_with_seed(9).is_empty());

    let single = Hand::from_cards(vec![card(Suit::Diamonds, Face::Queen)]);
    assert_eq!(single.sorted(), single);
}

#[test]
fn display_forms() {
    assert_eq!(card(Suit::Spades, Face::Two).to_string(), "2S");
    assert_eq!(card(Suit::Diamonds, Face::Ten).to_string(), "10D");
    assert_eq!(card(Suit::Clubs, Face::Ace).to_string(), "AC");
    assert_eq!(card(Suit::Hearts, Face::King).long_name(), "K of Hearts");
}

#[test]
fn parse_round_trips_and_rejects_bad_tokens() {
    for &c in Hand::standard().cards() {
        assert_eq!(c.to_string().parse::<Card>().unwrap(), c);
    }
    assert_eq!("kh".parse::<Card>().unwrap(), card(Suit::Hearts, Face::King));

    assert_eq!("".parse::<Card>().unwrap_err(), ParseCardError::Empty);
    assert_eq!("2X".parse::<Card>().unwrap_err(), ParseCardError::UnknownSuit);
    assert_eq!("1S".parse::<Card>().unwrap_err(), ParseCardError::UnknownFace);
    assert_eq!("S".parse::<Card>().unwrap_err(), ParseCardError::UnknownFace);
}
