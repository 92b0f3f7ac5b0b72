//! Terminal rendering: ASCII cards, the table view, banner, and text
//! effects.
//!
//! Pure presentation; nothing in here mutates game state. Animation delays
//! collapse to no-ops when stdin is not a TTY so piped input runs
//! instantly.

use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::Duration;

use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{self, Clear, ClearType};

use crate::card::Card;
use crate::hand::HandStatus;
use crate::table::Table;

/// Rendered card width in columns.
pub const CARD_WIDTH: usize = 11;
/// Rendered card height in rows.
pub const CARD_HEIGHT: usize = 7;

/// Delay after each card of the initial deal.
pub const DELAY_DEAL: Duration = Duration::from_millis(280);
/// Delay after the dealer's hole card flips.
pub const DELAY_REVEAL: Duration = Duration::from_millis(550);
/// Delay after each dealer hit, a touch slower so players can follow.
pub const DELAY_HIT_DEALER: Duration = Duration::from_millis(650);
/// Delay after a flashed message.
pub const DELAY_FLASH: Duration = Duration::from_millis(900);

/// Per-character delay of the typewriter effect.
const DELAY_TYPE: Duration = Duration::from_millis(18);

/// Sleeps only when running in an interactive terminal.
pub fn interactive_sleep(delay: Duration) {
    if io::stdin().is_terminal() {
        thread::sleep(delay);
    }
}

/// Clears the screen and homes the cursor.
pub fn clear_screen() {
    let _ = execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0));
}

/// Current terminal width in columns, with a sane fallback.
fn columns() -> usize {
    terminal::size().map_or(100, |(cols, _)| cols as usize)
}

/// Prints `text` one character at a time.
pub fn typewriter(text: &str) {
    if !io::stdin().is_terminal() {
        println!("{text}");
        return;
    }

    for ch in text.chars() {
        print!("{ch}");
        let _ = io::stdout().flush();
        thread::sleep(DELAY_TYPE);
    }
    println!();
}

/// Quick centered message flash.
pub fn flash(text: &str) {
    let pad = columns().saturating_sub(text.chars().count()) / 2;
    println!("\n{}{}", " ".repeat(pad), text.yellow().bold());
    interactive_sleep(DELAY_FLASH);
}

/// Animated title banner.
pub fn banner() {
    let art = [
        "██████╗ ██╗      █████╗  ██████╗██╗  ██╗     ██╗ █████╗  ██████╗██╗  ██╗",
        "██╔══██╗██║     ██╔══██╗██╔════╝██║ ██╔╝     ██║██╔══██╗██╔════╝██║ ██╔╝",
        "██████╔╝██║     ███████║██║     █████╔╝      ██║███████║██║     █████╔╝ ",
        "██╔══██╗██║     ██╔══██║██║     ██╔═██╗ ██   ██║██╔══██║██║     ██╔═██╗ ",
        "███████║███████╗██║  ██║╚██████╗██║  ██╗╚█████╔╝██║  ██║╚██████╗██║  ██╗",
        "╚══════╝╚══════╝╚═╝  ╚═╝ ╚═════╝╚═╝  ╚═╝ ╚════╝ ╚═╝  ╚═╝ ╚═════╝╚═╝  ╚═╝",
    ];

    let cols = columns();
    clear_screen();
    for line in art {
        let pad = cols.saturating_sub(line.chars().count()) / 2;
        println!("{}{}", " ".repeat(pad), line.green().bold());
        interactive_sleep(Duration::from_millis(30));
    }

    let subtitle = "Interactive ASCII Blackjack";
    let pad = cols.saturating_sub(subtitle.chars().count()) / 2;
    println!("\n{}{}", " ".repeat(pad), subtitle.cyan());
    interactive_sleep(Duration::from_millis(400));
}

/// Renders a single card (or a concealed back) to fixed-size lines.
///
/// `None` renders an empty slot.
#[must_use]
pub fn render_card(card: Option<Card>, hidden: bool) -> Vec<String> {
    let inner = CARD_WIDTH - 2;
    let top = format!("┌{}┐", "─".repeat(inner));
    let bottom = format!("└{}┘", "─".repeat(inner));

    let Some(card) = card else {
        let mut lines = vec![top];
        for _ in 0..CARD_HEIGHT - 2 {
            lines.push(format!("│{}│", " ".repeat(inner)));
        }
        lines.push(bottom);
        return lines;
    };

    if hidden {
        let mut lines = vec![top];
        for row in 0..CARD_HEIGHT - 2 {
            let pattern = if row % 2 == 0 { "░░▒▒" } else { "▒▒░░" };
            let fill: String = pattern.chars().cycle().take(inner).collect();
            lines.push(format!("│{}│", fill.blue()));
        }
        lines.push(bottom);
        return lines;
    }

    let rank = card.rank_label();
    let suit = card.suit.symbol();
    let styled_suit = if card.suit.is_red() {
        suit.red()
    } else {
        suit.white()
    };

    // Pad around the suit before styling so the ANSI codes stay out of the
    // width math.
    let left = (inner - 1) / 2;
    let right = inner - 1 - left;
    let suit_line = format!("│{}{}{}│", " ".repeat(left), styled_suit, " ".repeat(right));

    vec![
        top,
        format!("│{rank:<inner$}│"),
        format!("│{:<inner$}│", ""),
        suit_line,
        format!("│{:<inner$}│", ""),
        format!("│{rank:>inner$}│"),
        bottom,
    ]
}

/// Renders a set of cards side-by-side.
///
/// If `hide_second` is set, only the second card is concealed (the dealer's
/// hole card convention).
#[must_use]
pub fn render_hand(cards: &[Card], hide_second: bool) -> Vec<String> {
    if cards.is_empty() {
        return Vec::new();
    }

    let rendered: Vec<Vec<String>> = cards
        .iter()
        .enumerate()
        .map(|(index, &card)| render_card(Some(card), hide_second && index == 1))
        .collect();

    (0..CARD_HEIGHT)
        .map(|row| {
            rendered
                .iter()
                .map(|lines| lines[row].as_str())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Truncates `text` to `width` columns with an ellipsis.
fn fit_text(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let cut: String = text.chars().take(width.saturating_sub(1)).collect();
    format!("{cut}…")
}

/// Status tag shown next to a hand's value, if the hand is finished.
const fn status_label(status: HandStatus) -> Option<&'static str> {
    match status {
        HandStatus::Active => None,
        HandStatus::Stand => Some("STAND"),
        HandStatus::Bust => Some("BUST"),
        HandStatus::Blackjack => Some("BLACKJACK"),
        HandStatus::Double => Some("DOUBLE"),
    }
}

/// Draws the full table: dealer area, then every seated player.
///
/// The hole card stays concealed until the table says it is revealed. The
/// focused seat's header is highlighted and an action hint is shown while
/// any seat has the focus.
pub fn render_table(table: &Table, focus: Option<usize>, message: Option<&str>) {
    let cols = columns();
    clear_screen();

    let shoe_line = format!(
        "Shoe: {} cards   Count: {:+}",
        table.cards_remaining(),
        table.running_count()
    );
    println!("{}", shoe_line.dark_grey());

    let dealer = table.dealer();
    let hide_hole = !dealer.is_hole_revealed();
    println!("{}", "Dealer".red().bold());
    if dealer.is_empty() {
        println!("(no cards)\n");
    } else {
        for line in render_hand(dealer.cards(), hide_hole) {
            println!("{line}");
        }
        if !hide_hole {
            println!("{}", format!("Value: {}", dealer.value()).cyan());
        }
    }

    println!("\n{}", "═".repeat(cols.min(120)));

    for (seat, player) in table.players().iter().enumerate() {
        let header = format!(
            "{}  |  Chips: {}  Bet: {}",
            player.name, player.chips, player.bet
        );
        let header = fit_text(&header, cols);
        if focus == Some(seat) {
            println!("{}", header.green().bold());
        } else {
            println!("{}", header.bold());
        }

        if !player.hand.is_empty() {
            for line in render_hand(player.hand.cards(), false) {
                println!("{line}");
            }
            print!("{}", format!("Value: {}", player.hand.value()).cyan());
            if let Some(label) = status_label(player.hand.status()) {
                println!("  {}", label.yellow().bold());
            } else {
                println!();
            }
        }
        println!();
    }

    if let Some(message) = message {
        println!("{}", fit_text(message, cols).magenta());
    }

    if focus.is_some() {
        println!("{}", "(H)it  (S)tand  (D)ouble".white());
    }
}
