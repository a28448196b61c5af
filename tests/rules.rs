//! Deck, hand evaluation, dealer policy, and outcome tests.

use std::collections::HashSet;

use bjrules::{
    Card, DECK_SIZE, DealError, Deck, DeckError, GameResult, Hand, HandAssessment, Rank, Suit,
    assess, best_value, possible_values, resolve, should_draw, should_draw_with,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

fn totals(cards: &[Card]) -> Vec<u16> {
    possible_values(cards).iter().collect()
}

#[test]
fn built_deck_holds_every_card_once() {
    let deck = Deck::build();
    assert_eq!(deck.len(), DECK_SIZE);

    let unique: HashSet<Card> = deck.cards().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            assert!(deck.contains(&card(rank, suit)));
        }
    }
}

#[test]
fn built_deck_is_suit_major() {
    let cards: Vec<Card> = Deck::build().cards().copied().collect();
    assert_eq!(cards[0], card(Rank::Ace, Suit::Hearts));
    assert_eq!(cards[12], card(Rank::King, Suit::Hearts));
    assert_eq!(cards[13], card(Rank::Ace, Suit::Diamonds));
    assert_eq!(cards[51], card(Rank::King, Suit::Spades));
}

#[test]
fn shuffle_is_a_permutation() {
    let mut deck = Deck::build();
    deck.shuffle_with_seed(42);

    assert_eq!(deck.len(), DECK_SIZE);
    let shuffled: HashSet<Card> = deck.cards().copied().collect();
    let unshuffled: HashSet<Card> = Deck::build().cards().copied().collect();
    assert_eq!(shuffled, unshuffled);
    assert_ne!(deck, Deck::build());
}

#[test]
fn same_seed_same_order() {
    let mut first = Deck::build();
    let mut second = Deck::build();
    first.shuffle_with_seed(7);
    second.shuffle_with_seed(7);
    assert_eq!(first, second);

    let mut third = Deck::build();
    third.shuffle_with_seed(8);
    assert_ne!(first, third);
}

#[test]
fn dealing_removes_from_the_front() {
    let mut deck = Deck::build();
    let dealt = deck.deal_one_card().unwrap();
    assert_eq!(dealt, card(Rank::Ace, Suit::Hearts));
    assert!(!deck.contains(&dealt));
    assert_eq!(deck.len(), DECK_SIZE - 1);
}

#[test]
fn dealt_cards_are_distinct() {
    let mut deck = Deck::build();
    deck.shuffle_with_seed(3);

    let mut dealt = HashSet::new();
    for n in 1..=20 {
        let card = deck.deal_one_card().unwrap();
        assert!(!deck.contains(&card));
        assert!(dealt.insert(card));
        assert_eq!(deck.len(), DECK_SIZE - n);
    }
}

#[test]
fn dealing_from_empty_deck_fails() {
    let mut deck = Deck::build();
    for _ in 0..DECK_SIZE {
        deck.deal_one_card().unwrap();
    }
    assert!(deck.is_empty());
    assert_eq!(deck.deal_one_card().unwrap_err(), DealError::EmptyDeck);
    assert_eq!(deck.deal_one_card().unwrap_err(), DealError::EmptyDeck);
}

#[test]
fn deck_from_cards_keeps_order_and_rejects_duplicates() {
    let mut deck = Deck::from_cards([
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Two, Suit::Hearts),
    ])
    .unwrap();
    assert_eq!(deck.deal_one_card().unwrap(), card(Rank::Nine, Suit::Clubs));
    assert_eq!(deck.deal_one_card().unwrap(), card(Rank::Two, Suit::Hearts));

    let duplicate = card(Rank::Five, Suit::Spades);
    assert_eq!(
        Deck::from_cards([duplicate, card(Rank::Six, Suit::Spades), duplicate]).unwrap_err(),
        DeckError::DuplicateCard(duplicate)
    );
}

#[test]
fn rank_values() {
    assert_eq!(Rank::Ace.value(), 1);
    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Ten.value(), 10);
    assert_eq!(Rank::Jack.value(), 10);
    assert_eq!(Rank::King.value(), 10);
    assert!(Rank::Ace.is_ace());
    assert!(!Rank::King.is_ace());
    assert_eq!(card(Rank::Queen, Suit::Hearts).to_string(), "Q♥");
}

#[test]
fn ace_king_is_natural() {
    let hand = [card(Rank::Ace, Suit::Spades), card(Rank::King, Suit::Hearts)];
    let values = possible_values(&hand);
    assert_eq!(values.score(), 11);
    assert_eq!(values.high_ace_score(), Some(21));
    assert_eq!(totals(&hand), vec![11, 21]);
    assert_eq!(assess(&hand), HandAssessment::NaturalBlackjack);

    let reversed = [card(Rank::Ten, Suit::Clubs), card(Rank::Ace, Suit::Diamonds)];
    assert_eq!(assess(&reversed), HandAssessment::NaturalBlackjack);
}

#[test]
fn twenty_five_is_bust() {
    let hand = [
        card(Rank::Ten, Suit::Spades),
        card(Rank::Ten, Suit::Hearts),
        card(Rank::Five, Suit::Clubs),
    ];
    assert_eq!(totals(&hand), vec![25]);
    assert_eq!(possible_values(&hand).best(), None);
    assert_eq!(best_value(&hand), 0);
    assert_eq!(assess(&hand), HandAssessment::Bust);
}

#[test]
fn every_ace_counts_eleven_in_high_total() {
    let hand = [
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Nine, Suit::Clubs),
    ];
    let values = possible_values(&hand);
    assert_eq!(values.score(), 11);
    assert_eq!(values.high_ace_score(), None);
    assert_eq!(values.count(), 1);
    assert_eq!(totals(&hand), vec![11]);
    assert_eq!(assess(&hand), HandAssessment::Normal);

    let pair = [card(Rank::Ace, Suit::Spades), card(Rank::Ace, Suit::Hearts)];
    assert_eq!(totals(&pair), vec![2]);
    assert_eq!(assess(&pair), HandAssessment::Normal);
}

#[test]
fn three_card_twenty_one_is_not_natural() {
    let hand = [
        card(Rank::Ace, Suit::Spades),
        card(Rank::Five, Suit::Hearts),
        card(Rank::Five, Suit::Clubs),
    ];
    assert_eq!(totals(&hand), vec![11, 21]);
    assert_eq!(assess(&hand), HandAssessment::Normal);
}

#[test]
fn short_hands_are_insufficient() {
    assert_eq!(totals(&[]), vec![0]);
    assert_eq!(assess(&[]), HandAssessment::InsufficientCards);

    let single = [card(Rank::Ace, Suit::Clubs)];
    assert_eq!(totals(&single), vec![1, 11]);
    assert_eq!(assess(&single), HandAssessment::InsufficientCards);
}

#[test]
fn two_tens_are_normal() {
    let hand = [card(Rank::Ten, Suit::Spades), card(Rank::Queen, Suit::Hearts)];
    assert_eq!(assess(&hand), HandAssessment::Normal);
    assert_eq!(best_value(&hand), 20);
}

#[test]
fn hand_methods_match_free_functions() {
    let mut hand = Hand::new();
    assert!(hand.is_empty());
    hand.add_card(card(Rank::Ace, Suit::Spades));
    hand.add_card(card(Rank::Six, Suit::Hearts));

    assert_eq!(hand.len(), 2);
    assert!(hand.has_ace());
    assert_eq!(hand.possible_values(), possible_values(hand.cards()));
    assert_eq!(hand.assess(), HandAssessment::Normal);
    assert_eq!(hand.best_value(), 17);
    assert_eq!(hand.possible_values().to_string(), "7/17");

    hand.clear();
    assert!(hand.is_empty());
}

#[test]
fn dealer_stops_at_seventeen() {
    let seventeen = [card(Rank::Ten, Suit::Spades), card(Rank::Seven, Suit::Hearts)];
    let sixteen = [card(Rank::Ten, Suit::Spades), card(Rank::Six, Suit::Hearts)];
    assert!(!should_draw(&seventeen));
    assert!(should_draw(&sixteen));
}

#[test]
fn dealer_never_draws_when_bust() {
    let bust = [
        card(Rank::Ten, Suit::Spades),
        card(Rank::Six, Suit::Hearts),
        card(Rank::King, Suit::Clubs),
    ];
    assert!(!should_draw(&bust));
    assert!(!should_draw_with(&bust, 30));
}

#[test]
fn dealer_uses_best_total_with_aces() {
    let soft_seventeen = [card(Rank::Ace, Suit::Spades), card(Rank::Six, Suit::Hearts)];
    assert!(!should_draw(&soft_seventeen));

    let soft_sixteen = [card(Rank::Ace, Suit::Spades), card(Rank::Five, Suit::Hearts)];
    assert!(should_draw(&soft_sixteen));

    let two_aces = [
        card(Rank::Ace, Suit::Spades),
        card(Rank::Ace, Suit::Hearts),
        card(Rank::Five, Suit::Clubs),
    ];
    assert!(should_draw(&two_aces));
}

#[test]
fn dealer_draws_on_empty_hand() {
    assert!(should_draw(&[]));
}

#[test]
fn dealer_threshold_is_configurable() {
    let seventeen = [card(Rank::Ten, Suit::Spades), card(Rank::Seven, Suit::Hearts)];
    assert!(should_draw_with(&seventeen, 18));
    assert!(!should_draw_with(&seventeen, 17));
}

#[test]
fn natural_beats_non_natural() {
    let player = [card(Rank::Ace, Suit::Spades), card(Rank::King, Suit::Hearts)];
    let dealer = [card(Rank::Nine, Suit::Clubs), card(Rank::Nine, Suit::Diamonds)];
    assert_eq!(resolve(&player, &dealer), GameResult::NaturalBlackjack);
    assert!(resolve(&player, &dealer).is_player_win());
}

#[test]
fn two_naturals_push() {
    let player = [card(Rank::Ace, Suit::Spades), card(Rank::King, Suit::Hearts)];
    let dealer = [card(Rank::Ace, Suit::Clubs), card(Rank::Queen, Suit::Diamonds)];
    assert_eq!(resolve(&player, &dealer), GameResult::Push);
}

#[test]
fn dealer_natural_against_three_card_twenty_one_pushes() {
    let player = [
        card(Rank::Seven, Suit::Spades),
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Seven, Suit::Clubs),
    ];
    let dealer = [card(Rank::Ace, Suit::Clubs), card(Rank::Queen, Suit::Diamonds)];
    assert_eq!(resolve(&player, &dealer), GameResult::Push);
}

#[test]
fn higher_total_wins() {
    let twenty = [card(Rank::Ten, Suit::Spades), card(Rank::Queen, Suit::Hearts)];
    let nineteen = [card(Rank::Ten, Suit::Clubs), card(Rank::Nine, Suit::Diamonds)];
    assert_eq!(resolve(&twenty, &nineteen), GameResult::PlayerWon);
    assert_eq!(resolve(&nineteen, &twenty), GameResult::PlayerLost);

    let other_twenty = [card(Rank::King, Suit::Clubs), card(Rank::Jack, Suit::Diamonds)];
    assert_eq!(resolve(&twenty, &other_twenty), GameResult::Push);
}

#[test]
fn player_bust_loses_even_if_dealer_busts() {
    let player = [
        card(Rank::Ten, Suit::Spades),
        card(Rank::Queen, Suit::Hearts),
        card(Rank::Five, Suit::Hearts),
    ];
    let dealer = [
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Nine, Suit::Diamonds),
    ];
    assert_eq!(resolve(&player, &dealer), GameResult::PlayerLost);
}

#[test]
fn dealer_bust_loses_to_standing_player() {
    let player = [card(Rank::Ten, Suit::Spades), card(Rank::Two, Suit::Hearts)];
    let dealer = [
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Nine, Suit::Diamonds),
    ];
    assert_eq!(resolve(&player, &dealer), GameResult::PlayerWon);
}

#[test]
fn evaluation_is_idempotent() {
    let player = [
        card(Rank::Ace, Suit::Spades),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Three, Suit::Hearts),
    ];
    let dealer = [card(Rank::Ten, Suit::Clubs), card(Rank::Seven, Suit::Diamonds)];

    let values = possible_values(&player);
    let assessment = assess(&player);
    let result = resolve(&player, &dealer);
    for _ in 0..3 {
        assert_eq!(possible_values(&player), values);
        assert_eq!(assess(&player), assessment);
        assert_eq!(resolve(&player, &dealer), result);
    }
    assert_eq!(result, GameResult::PlayerWon);
}
