//! CLI blackjack example.
//!
//! Set `RUST_LOG=bjround=debug` to watch the engine's events.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{ActionAvailability, Card, Game, GameOptions, GameState, Snapshot, Suit};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = match Game::new(GameOptions::default(), seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Configuration error: {err}");
            return;
        }
    };

    loop {
        if game.is_broke() {
            println!("You are out of money. Game over.");
            break;
        }

        let snapshot = game.snapshot();
        println!(
            "\n{}  Bank: {}  Bet: {}",
            snapshot.message, snapshot.bankroll, snapshot.bet
        );
        println!("{}", format_actions(game.available_actions()));

        let command = prompt_line("> ");
        let dealt = matches!(command.as_str(), "" | "d" | "deal");
        let result = match command.as_str() {
            "" | "d" | "deal" => game.deal(),
            "[" | "-" => game.lower_bet().map(|_| ()),
            "]" | "+" => game.raise_bet().map(|_| ()),
            "r" | "reshuffle" => game.reshuffle(),
            "q" | "quit" => break,
            other => match other.parse::<usize>() {
                Ok(amount) => game.set_bet(amount).map(|_| ()),
                Err(_) => {
                    println!("Unknown command.");
                    continue;
                }
            },
        };

        if let Err(err) = result {
            println!("{err}");
            continue;
        }

        while game.state() == GameState::PlayerTurn {
            print_table(&game.snapshot());
            println!("{}", format_actions(game.available_actions()));

            let result = match prompt_line("Action: ").as_str() {
                "h" | "hit" => game.hit().map(|_| ()),
                "s" | "stand" => game.stand().map(|_| ()),
                "d" | "double" => game.double_down().map(|_| ()),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("{err}");
            }
        }

        if dealt {
            let snapshot = game.snapshot();
            print_table(&snapshot);
            if let Some(result) = snapshot.last_result {
                println!("Payout: {} (net {})", result.payout, result.net);
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return String::from("q"),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn print_table(snapshot: &Snapshot) {
    println!("\nShoe: {} cards remaining", snapshot.cards_remaining);

    let dealer_value = if snapshot.hole_hidden {
        "??".to_string()
    } else {
        snapshot.dealer_total.to_string()
    };
    println!(
        "Dealer: {} (value {dealer_value})",
        format_dealer(snapshot)
    );
    println!(
        "You:    {} (value {})",
        format_cards(&snapshot.player_cards),
        snapshot.player_total
    );
    println!();
}

fn format_actions(availability: ActionAvailability) -> String {
    let parts = [
        format_action("deal", "d/enter", availability.deal),
        format_action("bet-", "[", availability.lower_bet),
        format_action("bet+", "]", availability.raise_bet),
        format_action("hit", "h", availability.hit),
        format_action("stand", "s", availability.stand),
        format_action("double", "d", availability.double),
    ];
    format!("Actions: {}", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_dealer(snapshot: &Snapshot) -> String {
    if snapshot.dealer_cards.is_empty() {
        return "(no cards)".to_string();
    }

    if snapshot.hole_hidden {
        let mut parts = Vec::new();
        if let Some(card) = snapshot.dealer_cards.first() {
            parts.push(format_card(card));
        }
        parts.push("??".to_string());
        parts.join(" ")
    } else {
        format_cards(&snapshot.dealer_cards)
    }
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
