//! Table integration tests.

#![allow(clippy::float_cmp)]

use twentyone::{
    ActionError, BetError, Card, DECK_SIZE, DealError, Hand, HandStatus, Ledger, Outcome,
    ParseCardError, RoundError, RoundState, Shoe, Suit, Table, TableEvent, TableOptions,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// A table whose shoe never rebuilds, so stacked draws stay put.
fn pinned_table() -> Table {
    let options = TableOptions::default().with_decks(1).with_reshuffle_at(0);
    Table::new(options, 1)
}

fn set_shoe_from_draws(table: &mut Table, draws: &[Card]) {
    table.shoe.cards = draws.iter().rev().copied().collect();
}

#[test]
fn hand_value_is_deal_order_invariant() {
    let orders = [
        [card(Suit::Spades, 1), card(Suit::Hearts, 9), card(Suit::Diamonds, 5)],
        [card(Suit::Hearts, 9), card(Suit::Diamonds, 5), card(Suit::Spades, 1)],
        [card(Suit::Diamonds, 5), card(Suit::Spades, 1), card(Suit::Hearts, 9)],
    ];

    for order in orders {
        let mut hand = Hand::new();
        for c in order {
            hand.add_card(c);
        }
        assert_eq!(hand.value(), 15);
    }
}

#[test]
fn aces_degrade_one_by_one() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Spades, 1));
    hand.add_card(card(Suit::Hearts, 1));
    assert_eq!(hand.value(), 12);

    let mut hand = Hand::new();
    hand.add_card(card(Suit::Spades, 1));
    hand.add_card(card(Suit::Hearts, 1));
    hand.add_card(card(Suit::Clubs, 9));
    assert_eq!(hand.value(), 21);

    let mut hand = Hand::new();
    hand.add_card(card(Suit::Spades, 1));
    hand.add_card(card(Suit::Hearts, 1));
    hand.add_card(card(Suit::Diamonds, 1));
    hand.add_card(card(Suit::Clubs, 8));
    assert_eq!(hand.value(), 21);
}

#[test]
fn twenty_one_is_blackjack_only_on_two_cards() {
    let mut natural = Hand::new();
    natural.add_card(card(Suit::Spades, 1));
    natural.add_card(card(Suit::Hearts, 13));
    assert_eq!(natural.value(), 21);
    assert_eq!(natural.status(), HandStatus::Blackjack);

    let mut drawn_out = Hand::new();
    drawn_out.add_card(card(Suit::Spades, 5));
    drawn_out.add_card(card(Suit::Hearts, 6));
    drawn_out.add_card(card(Suit::Clubs, 13));
    assert_eq!(drawn_out.value(), 21);
    assert_eq!(drawn_out.status(), HandStatus::Stand);
}

#[test]
fn resolver_order_is_load_bearing() {
    // Player bust loses even when the dealer busts higher.
    assert_eq!(Outcome::resolve(22, 20, 3, false), Outcome::Bust);
    assert_eq!(Outcome::resolve(25, 26, 3, true), Outcome::Bust);

    // A tie of naturals is a push, not a blackjack.
    assert_eq!(Outcome::resolve(21, 21, 2, false), Outcome::Push);

    // A natural beats any non-21 dealer hand at blackjack odds.
    assert_eq!(Outcome::resolve(21, 18, 2, false), Outcome::Blackjack);

    // The doubled win is checked before the generic win.
    assert_eq!(Outcome::resolve(20, 18, 2, true), Outcome::WinDouble);
    assert_eq!(Outcome::resolve(20, 18, 3, false), Outcome::Win);

    // A dealer bust is a plain win, doubled or not, when the player's value
    // is lower.
    assert_eq!(Outcome::resolve(18, 22, 2, true), Outcome::Win);

    assert_eq!(Outcome::resolve(17, 19, 2, false), Outcome::Lose);
}

#[test]
fn resolver_payouts() {
    assert_eq!(Outcome::Push.payout(50.0), 50.0);
    assert_eq!(Outcome::Blackjack.payout(50.0), 100.0);
    assert_eq!(Outcome::Win.payout(50.0), 100.0);
    assert_eq!(Outcome::WinDouble.payout(40.0), 80.0);
    assert_eq!(Outcome::Bust.payout(50.0), 0.0);
    assert_eq!(Outcome::Lose.payout(50.0), 0.0);
}

#[test]
fn shoe_holds_every_card_of_every_deck() {
    let shoe = Shoe::new(8, 60, 7);
    assert_eq!(shoe.remaining(), 8 * DECK_SIZE);

    let mut counts = std::collections::HashMap::new();
    for c in &shoe.cards {
        *counts.entry((c.suit, c.rank)).or_insert(0u32) += 1;
    }
    assert_eq!(counts.len(), DECK_SIZE);
    assert!(counts.values().all(|&count| count == 8));
}

#[test]
fn shoe_rebuilds_below_threshold() {
    let mut shoe = Shoe::new(8, 60, 3);
    shoe.cards.truncate(10);

    assert!(shoe.replenish_if_needed());
    assert_eq!(shoe.remaining(), 8 * DECK_SIZE);
    assert!(shoe.draw().is_some());
}

#[test]
fn shoe_rebuild_disabled_at_zero_threshold() {
    let mut shoe = Shoe::new(1, 0, 3);
    shoe.cards.truncate(1);

    assert!(!shoe.replenish_if_needed());
    assert_eq!(shoe.remaining(), 1);
}

#[test]
fn depleted_shoe_rebuilds_mid_deal_and_resets_count() {
    let mut table = Table::new(TableOptions::default(), 11);
    let seat = table.seat("Ada", 100.0);
    table.place_bet(seat, 10.0).unwrap();

    table.shoe.cards.truncate(3);
    table.deal().unwrap();

    let events = table.take_events();
    assert!(matches!(
        events[0],
        TableEvent::ShoeReshuffled { remaining } if remaining == 8 * DECK_SIZE
    ));

    // The count restarted at zero on the rebuild, so it must equal the sum
    // over exactly the cards dealt afterwards.
    let expected: i32 = table.players()[seat]
        .hand
        .cards()
        .iter()
        .chain(table.dealer().cards())
        .map(|c| c.count_value())
        .sum();
    assert_eq!(table.running_count(), expected);
}

#[test]
fn deal_reports_every_card_dealt() {
    let mut table = pinned_table();
    let seat = table.seat("Ada", 100.0);
    table.place_bet(seat, 10.0).unwrap();

    set_shoe_from_draws(
        &mut table,
        &[
            card(Suit::Spades, 9),
            card(Suit::Hearts, 5),
            card(Suit::Diamonds, 10),
            card(Suit::Clubs, 7),
        ],
    );
    table.deal().unwrap();

    let dealt: Vec<_> = table
        .take_events()
        .into_iter()
        .filter(|event| matches!(event, TableEvent::CardDealt { .. }))
        .collect();
    assert_eq!(dealt.len(), 4);
}

#[test]
fn blackjack_pays_double_the_bet() {
    let mut table = pinned_table();
    let seat = table.seat("Ada", 100.0);
    table.place_bet(seat, 50.0).unwrap();

    set_shoe_from_draws(
        &mut table,
        &[
            card(Suit::Spades, 10),  // player
            card(Suit::Hearts, 1),   // player
            card(Suit::Diamonds, 10), // dealer up
            card(Suit::Clubs, 7),    // dealer hole
        ],
    );
    table.deal().unwrap();

    assert_eq!(table.players()[seat].hand.status(), HandStatus::Blackjack);
    assert_eq!(table.state(), RoundState::DealerTurn);

    let drawn = table.dealer_play().unwrap();
    assert!(drawn.is_empty());

    let result = table.settle().unwrap();
    assert_eq!(result.outcomes[0].outcome, Outcome::Blackjack);
    assert_eq!(result.outcomes[0].payout, 100.0);
    assert_eq!(table.players()[seat].chips, 150.0);
}

#[test]
fn push_refunds_exactly_the_bet() {
    let mut table = pinned_table();
    let seat = table.seat("Ada", 100.0);
    table.place_bet(seat, 20.0).unwrap();

    set_shoe_from_draws(
        &mut table,
        &[
            card(Suit::Spades, 10), // player
            card(Suit::Hearts, 9),  // player
            card(Suit::Diamonds, 10), // dealer up
            card(Suit::Clubs, 9),   // dealer hole
        ],
    );
    table.deal().unwrap();
    table.stand(seat).unwrap();
    table.dealer_play().unwrap();

    let result = table.settle().unwrap();
    assert_eq!(result.outcomes[0].outcome, Outcome::Push);
    assert_eq!(result.outcomes[0].payout, 20.0);
    assert_eq!(table.players()[seat].chips, 100.0);
}

#[test]
fn double_down_takes_one_card_and_pays_on_the_doubled_bet() {
    let mut table = pinned_table();
    let seat = table.seat("Ada", 120.0);
    table.place_bet(seat, 20.0).unwrap();
    assert_eq!(table.players()[seat].chips, 100.0);

    set_shoe_from_draws(
        &mut table,
        &[
            card(Suit::Spades, 5),  // player
            card(Suit::Hearts, 6),  // player
            card(Suit::Diamonds, 10), // dealer up
            card(Suit::Clubs, 8),   // dealer hole
            card(Suit::Hearts, 10), // double draw
        ],
    );
    table.deal().unwrap();

    let drawn = table.double_down(seat).unwrap();
    assert_eq!(drawn.rank, 10);

    let player = &table.players()[seat];
    assert_eq!(player.chips, 80.0);
    assert_eq!(player.bet, 40.0);
    assert!(player.doubled);
    assert_eq!(player.hand.len(), 3);
    assert_eq!(player.hand.status(), HandStatus::Double);
    assert_eq!(table.state(), RoundState::DealerTurn);

    table.dealer_play().unwrap();
    let result = table.settle().unwrap();
    assert_eq!(result.outcomes[0].outcome, Outcome::WinDouble);
    assert_eq!(result.outcomes[0].payout, 80.0);
    assert_eq!(table.players()[seat].chips, 160.0);
}

#[test]
fn double_without_cover_is_rejected_without_consuming_the_turn() {
    let mut table = pinned_table();
    let seat = table.seat("Ada", 30.0);
    table.place_bet(seat, 20.0).unwrap();

    set_shoe_from_draws(
        &mut table,
        &[
            card(Suit::Spades, 5), // player
            card(Suit::Hearts, 6), // player
            card(Suit::Diamonds, 10), // dealer up
            card(Suit::Clubs, 8),  // dealer hole
            card(Suit::Clubs, 2),  // later hit
        ],
    );
    table.deal().unwrap();

    assert_eq!(
        table.double_down(seat).unwrap_err(),
        ActionError::InsufficientChips
    );

    let player = &table.players()[seat];
    assert_eq!(player.chips, 10.0);
    assert_eq!(player.bet, 20.0);
    assert!(!player.doubled);
    assert_eq!(player.hand.len(), 2);
    assert_eq!(player.hand.status(), HandStatus::Active);

    // The hand is untouched, so another action still goes through.
    let hit = table.hit(seat).unwrap();
    assert_eq!(hit.rank, 2);
}

#[test]
fn dealer_draws_through_sixteen_and_stands_on_seventeen() {
    let mut table = pinned_table();
    let seat = table.seat("Ada", 100.0);
    table.place_bet(seat, 10.0).unwrap();

    set_shoe_from_draws(
        &mut table,
        &[
            card(Suit::Spades, 10), // player
            card(Suit::Hearts, 9),  // player
            card(Suit::Diamonds, 10), // dealer up
            card(Suit::Clubs, 2),   // dealer hole (12)
            card(Suit::Hearts, 4),  // dealer draw (16)
            card(Suit::Spades, 3),  // dealer draw (19)
        ],
    );
    table.deal().unwrap();
    table.stand(seat).unwrap();

    let drawn = table.dealer_play().unwrap();
    assert_eq!(drawn.len(), 2);
    assert_eq!(table.dealer().value(), 19);
    assert!(table.dealer().is_hole_revealed());
}

#[test]
fn dealer_stands_pat_on_seventeen() {
    let mut table = pinned_table();
    let seat = table.seat("Ada", 100.0);
    table.place_bet(seat, 10.0).unwrap();

    set_shoe_from_draws(
        &mut table,
        &[
            card(Suit::Spades, 10), // player
            card(Suit::Hearts, 9),  // player
            card(Suit::Diamonds, 10), // dealer up
            card(Suit::Clubs, 7),   // dealer hole (17)
        ],
    );
    table.deal().unwrap();
    table.stand(seat).unwrap();

    let drawn = table.dealer_play().unwrap();
    assert!(drawn.is_empty());
    assert_eq!(table.dealer().value(), 17);
}

#[test]
fn hit_to_exact_twenty_one_ends_the_turn_as_a_stand() {
    let mut table = pinned_table();
    let seat = table.seat("Ada", 100.0);
    table.place_bet(seat, 10.0).unwrap();

    set_shoe_from_draws(
        &mut table,
        &[
            card(Suit::Spades, 1),  // player (soft 16)
            card(Suit::Hearts, 5),  // player
            card(Suit::Diamonds, 10), // dealer up
            card(Suit::Clubs, 8),   // dealer hole
            card(Suit::Diamonds, 5), // hit: ace degrades, 21 on three cards
        ],
    );
    table.deal().unwrap();

    table.hit(seat).unwrap();
    let player = &table.players()[seat];
    assert_eq!(player.hand.value(), 21);
    assert_eq!(player.hand.status(), HandStatus::Stand);
    assert_eq!(table.state(), RoundState::DealerTurn);
}

#[test]
fn busted_player_forfeits_the_bet() {
    let mut table = pinned_table();
    let seat = table.seat("Ada", 100.0);
    table.place_bet(seat, 25.0).unwrap();

    set_shoe_from_draws(
        &mut table,
        &[
            card(Suit::Spades, 10), // player
            card(Suit::Hearts, 9),  // player
            card(Suit::Diamonds, 10), // dealer up
            card(Suit::Clubs, 8),   // dealer hole
            card(Suit::Diamonds, 5), // hit busts (24)
        ],
    );
    table.deal().unwrap();

    table.hit(seat).unwrap();
    assert_eq!(table.players()[seat].hand.status(), HandStatus::Bust);
    assert_eq!(table.state(), RoundState::DealerTurn);

    table.dealer_play().unwrap();
    let result = table.settle().unwrap();
    assert_eq!(result.outcomes[0].outcome, Outcome::Bust);
    assert_eq!(result.outcomes[0].payout, 0.0);
    assert_eq!(table.players()[seat].chips, 75.0);
}

#[test]
fn turn_order_is_enforced_across_seats() {
    let mut table = pinned_table();
    let first = table.seat("Ada", 100.0);
    let second = table.seat("Grace", 100.0);
    table.place_bet(first, 10.0).unwrap();
    table.place_bet(second, 10.0).unwrap();

    set_shoe_from_draws(
        &mut table,
        &[
            card(Suit::Spades, 1),  // first player
            card(Suit::Hearts, 5),  // first player
            card(Suit::Diamonds, 10), // second player
            card(Suit::Clubs, 9),   // second player
            card(Suit::Spades, 8),  // dealer up
            card(Suit::Hearts, 8),  // dealer hole
            card(Suit::Diamonds, 5), // dealer draw
        ],
    );
    table.deal().unwrap();

    assert_eq!(table.current_seat(), Some(first));
    assert_eq!(table.hit(second).unwrap_err(), ActionError::NotYourTurn);

    table.stand(first).unwrap();
    assert_eq!(table.current_seat(), Some(second));
    table.stand(second).unwrap();
    assert_eq!(table.state(), RoundState::DealerTurn);
}

#[test]
fn bet_errors() {
    let mut table = pinned_table();
    let seat = table.seat("Ada", 100.0);

    assert_eq!(table.place_bet(seat, 0.0).unwrap_err(), BetError::NonPositive);
    assert_eq!(table.place_bet(seat, -5.0).unwrap_err(), BetError::NonPositive);
    assert_eq!(
        table.place_bet(seat, 200.0).unwrap_err(),
        BetError::InsufficientChips
    );
    assert_eq!(table.place_bet(9, 10.0).unwrap_err(), BetError::UnknownSeat);

    table.place_bet(seat, 10.0).unwrap();
    set_shoe_from_draws(
        &mut table,
        &[
            card(Suit::Spades, 9),
            card(Suit::Hearts, 5),
            card(Suit::Diamonds, 10),
            card(Suit::Clubs, 7),
        ],
    );
    table.deal().unwrap();
    assert_eq!(table.place_bet(seat, 10.0).unwrap_err(), BetError::InvalidState);
}

#[test]
fn deal_requires_bets() {
    let mut table = pinned_table();
    table.seat("Ada", 100.0);
    assert_eq!(table.deal().unwrap_err(), DealError::NoBets);
}

#[test]
fn round_operations_reject_the_wrong_phase() {
    let mut table = pinned_table();
    let seat = table.seat("Ada", 100.0);

    assert_eq!(table.hit(seat).unwrap_err(), ActionError::InvalidState);
    assert_eq!(table.dealer_play().unwrap_err(), RoundError::InvalidState);
    assert_eq!(table.settle().unwrap_err(), RoundError::InvalidState);
}

#[test]
fn top_up_restores_a_broke_player() {
    let mut table = pinned_table();
    let seat = table.seat("Ada", 0.0);

    let balance = table.accept_top_up(seat).unwrap();
    assert_eq!(balance, 10_000.0);
    assert_eq!(table.players()[seat].chips, 10_000.0);
    assert_eq!(table.accept_top_up(9).unwrap_err(), BetError::UnknownSeat);
}

#[test]
fn clear_round_keeps_bankrolls_and_resets_hands() {
    let mut table = pinned_table();
    let seat = table.seat("Ada", 100.0);
    table.place_bet(seat, 20.0).unwrap();

    set_shoe_from_draws(
        &mut table,
        &[
            card(Suit::Spades, 10),
            card(Suit::Hearts, 9),
            card(Suit::Diamonds, 10),
            card(Suit::Clubs, 7),
        ],
    );
    table.deal().unwrap();
    table.stand(seat).unwrap();
    table.dealer_play().unwrap();
    table.settle().unwrap();

    let chips = table.players()[seat].chips;
    table.clear_round();

    let player = &table.players()[seat];
    assert_eq!(table.state(), RoundState::Betting);
    assert_eq!(player.chips, chips);
    assert_eq!(player.bet, 0.0);
    assert!(player.hand.is_empty());
    assert_eq!(player.hand.status(), HandStatus::Active);
    assert!(table.dealer().is_empty());
    assert_eq!(table.current_seat(), None);
}

#[test]
fn ledger_round_trips_and_shrugs_off_bad_data() {
    let path = std::env::temp_dir().join(format!(
        "twentyone-ledger-{}.json",
        std::process::id()
    ));

    let mut ledger = Ledger::open(&path);
    assert_eq!(ledger.balance("Ada"), None);

    ledger.record("Ada", 1_250.5);
    ledger.record("Grace", 10_000.0);
    ledger.save().unwrap();

    let reloaded = Ledger::open(&path);
    assert_eq!(reloaded.balance("Ada"), Some(1_250.5));
    assert_eq!(reloaded.balance("Grace"), Some(10_000.0));

    std::fs::write(&path, "not json").unwrap();
    let broken = Ledger::open(&path);
    assert_eq!(broken.balance("Ada"), None);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn card_tokens_parse_and_display() {
    assert_eq!("A♠".parse::<Card>().unwrap(), card(Suit::Spades, 1));
    assert_eq!("10d".parse::<Card>().unwrap(), card(Suit::Diamonds, 10));
    assert_eq!("kh".parse::<Card>().unwrap(), card(Suit::Hearts, 13));
    assert_eq!("2♣".parse::<Card>().unwrap(), card(Suit::Clubs, 2));

    assert_eq!("".parse::<Card>().unwrap_err(), ParseCardError::Empty);
    assert_eq!(
        "X♠".parse::<Card>().unwrap_err(),
        ParseCardError::Rank("X".to_owned())
    );
    assert_eq!("10x".parse::<Card>().unwrap_err(), ParseCardError::Suit('x'));

    assert_eq!(card(Suit::Hearts, 13).to_string(), "K♥");
    assert_eq!(card(Suit::Diamonds, 10).to_string(), "10♦");
}

#[test]
fn count_values_follow_the_rank_bands() {
    assert_eq!(card(Suit::Spades, 2).count_value(), -1);
    assert_eq!(card(Suit::Spades, 6).count_value(), -1);
    assert_eq!(card(Suit::Spades, 7).count_value(), 0);
    assert_eq!(card(Suit::Spades, 9).count_value(), 0);
    assert_eq!(card(Suit::Spades, 10).count_value(), 1);
    assert_eq!(card(Suit::Spades, 13).count_value(), 1);
    assert_eq!(card(Suit::Spades, 1).count_value(), 1);
}
