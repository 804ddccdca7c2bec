use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, LevelFilter};
use poker_eval::cards::{parse_cards, Card};
use poker_eval::deck::Deck;
use poker_eval::evaluator::{evaluate, evaluate_holdem, EvaluatedHand};
use poker_eval::hand::{Board, HoleCards};
use rand::rng;

#[derive(Debug, Parser)]
#[command(version, about = "Classify and compare poker hands.")]
struct Cli {
    /// Log more details (repeat for trace output).
    #[clap(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate one set of 5 to 7 cards, e.g. `As Kd 10c 9h 2s`.
    Eval {
        /// Cards separated by spaces or commas.
        #[clap(required = true, num_args = 1..)]
        cards: Vec<String>,
    },
    /// Deal a Hold'em table and rank every player's hand.
    Deal {
        /// Number of players.
        #[clap(long, short, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..=10))]
        players: u8,
        /// Shuffle seed for a reproducible deal.
        #[clap(long, short)]
        seed: Option<u64>,
    },
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .format_target(false)
        .format_timestamp_millis()
        .init();
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(|c| c.to_string()).collect::<Vec<_>>().join(" ")
}

fn print_hand(hand: &EvaluatedHand) {
    println!("category: {}", hand.category);
    println!("best five: {}", format_cards(&hand.cards));
    println!("key: {:?}", hand.key().as_slice());
}

fn run_eval(cards: &[String]) -> Result<()> {
    let cards = parse_cards(&cards.join(" ")).context("parsing cards")?;
    info!("evaluating {} cards", cards.len());
    let hand = evaluate(&cards)?;
    print_hand(&hand);
    Ok(())
}

/// One seat at a dealt table.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Seat {
    seat: usize,
    hole: HoleCards,
    hand: EvaluatedHand,
    best: bool,
}

/// A dealt Hold'em table, seats ordered strongest first.
#[derive(Debug, Clone, PartialEq)]
struct Table {
    board: Board,
    seats: Vec<Seat>,
}

/// Deal two hole cards per player and a five-card board from `deck`, then
/// rank every hand. Ties keep seat order.
fn deal_table(mut deck: Deck, players: u8) -> Result<Table> {
    let mut holes = Vec::with_capacity(players as usize);
    for _ in 0..players {
        let dealt = deck.deal_n(2);
        holes.push(HoleCards::from_slice(&dealt).context("deck ran out of hole cards")?);
    }
    let board = Board::try_new(deck.deal_n(5))?;
    if board.len() != 5 {
        bail!("deck ran out of cards");
    }
    info!("dealt {players} players, {} cards left in deck", deck.len());

    let mut seats = holes
        .iter()
        .enumerate()
        .map(|(i, hole)| {
            let hand = evaluate_holdem(hole, &board)?;
            Ok(Seat { seat: i + 1, hole: *hole, hand, best: false })
        })
        .collect::<Result<Vec<_>>>()?;
    seats.sort_by(|a, b| b.hand.cmp(&a.hand).then(a.seat.cmp(&b.seat)));

    let Some(top) = seats.first().map(|s| s.hand) else {
        bail!("no players dealt");
    };
    for s in &mut seats {
        s.best = s.hand == top;
    }
    Ok(Table { board, seats })
}

fn run_deal(players: u8, seed: Option<u64>) -> Result<()> {
    let mut deck = Deck::standard();
    match seed {
        Some(seed) => deck.shuffle_seeded(seed),
        None => deck.shuffle_with(&mut rng()),
    }
    let table = deal_table(deck, players)?;

    println!("board: {}", format_cards(table.board.as_slice()));
    for s in &table.seats {
        let mark = if s.best { "*" } else { " " };
        println!(
            "{mark} seat {:>2}: {}  {}",
            s.seat,
            format_cards(&s.hole.as_array()),
            s.hand
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Command::Eval { cards } => run_eval(&cards),
        Command::Deal { players, seed } => run_deal(players, seed),
    }
}
