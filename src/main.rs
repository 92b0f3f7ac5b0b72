//! Terminal blackjack: sequences betting, dealing, turns, and settlement
//! over the table engine, and persists chip balances between sessions.

use std::io::{self, Write};
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use crossterm::style::Stylize;

use twentyone::{
    ActionError, HandStatus, Ledger, Outcome, RoundResult, Table, TableEvent, TableOptions, ui,
};

/// File the chip balances persist to, in the working directory.
const LEDGER_FILE: &str = "player_data.json";

fn main() {
    let mut ledger = Ledger::open(LEDGER_FILE);

    ui::banner();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = Table::new(TableOptions::default(), seed);

    seat_players(&mut table, &ledger);

    loop {
        if !offer_top_ups(&mut table) {
            break;
        }
        if !collect_bets(&mut table) {
            break;
        }
        if let Err(err) = table.deal() {
            println!("Deal error: {err}");
            break;
        }

        announce_deal(&mut table);
        run_player_turns(&mut table);
        run_dealer_turn(&mut table);

        let result = match table.settle() {
            Ok(result) => result,
            Err(err) => {
                println!("Settlement error: {err}");
                break;
            }
        };
        show_results(&table, &result);

        if !prompt_yes_no("\nDo you want to play again? (y/n): ") {
            break;
        }
        table.clear_round();
    }

    for player in table.players() {
        ledger.record(&player.name, player.chips);
    }
    if let Err(err) = ledger.save() {
        eprintln!("Could not save chip balances: {err}");
    }

    farewell(&table);
}

/// Prompts for the player count and names, restoring saved balances.
fn seat_players(table: &mut Table, ledger: &Ledger) {
    let count = prompt_player_count();
    println!();

    for index in 0..count {
        let name = prompt_line(&format!("Enter player {}'s name: ", index + 1));
        let chips = ledger
            .balance(&name)
            .unwrap_or(table.options.starting_chips);
        table.seat(name, chips);
    }
}

/// Shows chip balances and offers broke players the donor top-up.
///
/// Returns whether anyone is left with chips to bet.
fn offer_top_ups(table: &mut Table) -> bool {
    println!("\n{}\n", "_".repeat(50));
    println!("\nCurrent Chip Balances:");

    let mut any_chips = false;
    for seat in 0..table.players().len() {
        let name = table.players()[seat].name.clone();
        let chips = table.players()[seat].chips;

        if chips > 0.0 {
            println!("{name} - Chips: {chips}");
            any_chips = true;
            continue;
        }

        let offer = format!(
            "{name} is out of chips, an anonymous donor is offering you ${}, would you like to accept? (y/n): ",
            table.options.top_up
        );
        if prompt_yes_no(&offer) {
            if let Ok(balance) = table.accept_top_up(seat) {
                println!("{name} - Chips: {balance}");
                any_chips = true;
            }
        }
    }

    any_chips
}

/// Collects a valid bet from every player who still has chips.
///
/// Returns whether anyone has a bet riding; a player with no chips sits the
/// round out.
fn collect_bets(table: &mut Table) -> bool {
    println!("\n");

    let mut any_bets = false;
    for seat in 0..table.players().len() {
        let name = table.players()[seat].name.clone();
        if table.players()[seat].chips <= 0.0 {
            continue;
        }

        loop {
            let input = prompt_line(&format!("{name}, enter your bet amount: "));
            match input.parse::<f64>() {
                Ok(bet) => match table.place_bet(seat, bet) {
                    Ok(()) => {
                        any_bets = true;
                        break;
                    }
                    Err(_) => println!("Invalid bet amount. Please enter a valid bet."),
                },
                Err(_) => println!("Invalid input. Please enter a valid bet amount."),
            }
        }
    }

    println!("\n{}", "_".repeat(50));
    any_bets
}

/// Replays the deal card by card, then announces the opening hands.
fn announce_deal(table: &mut Table) {
    for event in table.take_events() {
        match event {
            TableEvent::ShoeReshuffled { remaining } => {
                ui::flash(&format!("Shoe reshuffled - {remaining} cards."));
            }
            TableEvent::CardDealt { .. } => {
                ui::render_table(table, None, None);
                ui::interactive_sleep(ui::DELAY_DEAL);
            }
            TableEvent::HoleRevealed { .. } => {}
        }
    }

    println!();
    for player in table.players().iter().filter(|player| player.in_round()) {
        let cards = player.hand.cards();
        ui::typewriter(&format!(
            "{} has {} and {} ({})",
            player.name,
            cards[0],
            cards[1],
            player.hand.value()
        ));
    }
    if let Some(up_card) = table.dealer().up_card() {
        ui::typewriter(&format!("\nDealer has {up_card} and an unknown card"));
    }
}

/// Runs each betting player's turn until every hand is terminal.
fn run_player_turns(table: &mut Table) {
    for player in table.players().iter().filter(|player| player.in_round()) {
        if player.hand.status() == HandStatus::Blackjack {
            ui::typewriter(&format!(
                "\n{}'s turn ({})",
                player.name,
                player.hand.value()
            ));
            println!("Blackjack!");
        }
    }

    let mut announced = None;
    while let Some(seat) = table.current_seat() {
        let name = table.players()[seat].name.clone();
        if announced != Some(seat) {
            ui::typewriter(&format!(
                "\n{name}'s turn ({})",
                table.players()[seat].hand.value()
            ));
            announced = Some(seat);
        }

        ui::render_table(table, Some(seat), None);
        let action =
            prompt_line(&format!("{name}, choose an action: (H)it, (S)tand, or (D)ouble: "))
                .to_lowercase();

        match action.as_str() {
            "h" | "hit" => match table.hit(seat) {
                Ok(card) => {
                    let player = &table.players()[seat];
                    ui::typewriter(&format!(
                        "{name} hits and receives {card} ({})",
                        player.hand.value()
                    ));
                    if player.hand.status() == HandStatus::Bust {
                        println!("Bust!");
                    }
                }
                Err(err) => println!("{err}"),
            },
            "s" | "stand" => {
                if let Err(err) = table.stand(seat) {
                    println!("{err}");
                }
            }
            "d" | "double" => match table.double_down(seat) {
                Ok(card) => {
                    let player = &table.players()[seat];
                    ui::typewriter(&format!(
                        "{name} doubles and receives {card}. Bet is now {} ({})",
                        player.bet,
                        player.hand.value()
                    ));
                    if player.hand.value() > 21 {
                        println!("Bust!");
                    }
                }
                Err(ActionError::InsufficientChips) => {
                    println!("Not enough chips to double. Please choose another action.");
                }
                Err(err) => println!("{err}"),
            },
            _ => println!("Invalid action. Please try again."),
        }

        drain_notices(table);
    }
}

/// Plays out the dealer's hand with narration.
fn run_dealer_turn(table: &mut Table) {
    println!("\nDealer's turn");

    match table.dealer_play() {
        Ok(drawn) => {
            if let Some(&hole) = table.dealer().cards().get(1) {
                ui::typewriter(&format!("Dealer reveals his second card: {hole}"));
                ui::interactive_sleep(ui::DELAY_REVEAL);
            }
            for card in drawn {
                ui::typewriter(&format!("Dealer hits and receives {card}"));
                ui::interactive_sleep(ui::DELAY_HIT_DEALER);
            }

            let value = table.dealer().value();
            if value > 21 {
                println!("Dealer busts ({value})");
            } else {
                println!("Dealer stands ({value})");
            }
        }
        Err(err) => println!("Dealer error: {err}"),
    }

    drain_notices(table);
}

/// Renders the settled table and a result line per player.
fn show_results(table: &Table, result: &RoundResult) {
    ui::render_table(table, None, None);
    println!("{}\n", "═".repeat(50));
    println!("Results:\n");

    for outcome in &result.outcomes {
        let player = &table.players()[outcome.seat];
        let text = outcome_text(outcome.outcome);
        let styled = match outcome.outcome {
            Outcome::Blackjack | Outcome::WinDouble | Outcome::Win => text.green().bold(),
            Outcome::Push => text.yellow().bold(),
            Outcome::Bust | Outcome::Lose => text.red().bold(),
        };
        println!(
            "{} - {} ({} vs {}). Payout: {}. Chips: {}",
            player.name, styled, outcome.hand_value, result.dealer_value, outcome.payout,
            player.chips
        );
    }
}

/// Result line text, matching the table's traditional calls.
const fn outcome_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Bust => "Bust!",
        Outcome::Push => "Push!",
        Outcome::Blackjack => "Blackjack!",
        Outcome::WinDouble => "Won with a Double!",
        Outcome::Win => "Win!",
        Outcome::Lose => "Lose!",
    }
}

/// Final balances and goodbye.
fn farewell(table: &Table) {
    println!("\n{}", "_".repeat(50));
    println!("\nFinal Chip Balances:");
    for player in table.players() {
        println!("{} - Chips: {}", player.name, player.chips);
    }
    println!("\n{}", "_".repeat(50));
    ui::typewriter("\nThank you for playing!");
    println!("\n{}", "_".repeat(50));
}

/// Drains queued table events; reshuffles become a flashed notice.
fn drain_notices(table: &mut Table) {
    for event in table.take_events() {
        if let TableEvent::ShoeReshuffled { remaining } = event {
            ui::flash(&format!("Shoe reshuffled - {remaining} cards."));
        }
    }
}

/// Prompts until a positive player count is entered.
fn prompt_player_count() -> usize {
    loop {
        println!("{}\n", "_".repeat(50));
        match prompt_line("Enter the number of players: ").parse::<usize>() {
            Ok(count) if count >= 1 => return count,
            Ok(_) => println!("\nInvalid number of players. Please try again."),
            Err(_) => println!("\nInvalid input. Please enter a valid number of players."),
        }
    }
}

/// Prompts until the user answers yes or no.
fn prompt_yes_no(prompt: &str) -> bool {
    loop {
        match prompt_line(prompt).to_lowercase().as_str() {
            "y" | "yes" => return true,
            "n" | "no" => return false,
            _ => println!("Invalid input. Please enter 'y' or 'n'."),
        }
    }
}

/// Reads one trimmed line, exiting cleanly when stdin closes.
fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => {
            println!();
            process::exit(0);
        }
        Ok(_) => input.trim().to_owned(),
    }
}
