//! Terminal frontend for the engine.
//!
//! Owns everything the engine deliberately does not: reading input,
//! rendering the board, and the perceptual pause before the engine's reply
//! is revealed. The engine computes instantly; the pause is pure pacing.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use perfect_tictactoe::{Match, Phase, Position};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Play tic-tac-toe against a perfect minimax opponent
#[derive(Parser, Debug)]
#[command(name = "play")]
#[command(about = "Play tic-tac-toe against a perfect minimax opponent", long_about = None)]
#[command(version)]
struct Cli {
    /// Pause before the AI's reply is revealed, in milliseconds
    #[arg(long, default_value = "300")]
    delay_ms: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut game = Match::new();
    let stdin = io::stdin();

    println!("You are X. Enter a square (0-8 or a label like 'center').");
    println!("'r' restarts, 'z' resets the scores, 'q' quits.");

    loop {
        let snap = game.snapshot();
        println!("\n{}", game.board());
        println!(
            "Player {}  AI {}  Ties {}",
            snap.player_score, snap.ai_score, snap.ties
        );

        if game.phase() == Phase::Finished {
            println!("{}", snap.message);
            print!("Enter for a rematch ('q' quits): ");
        } else {
            print!("Your move: ");
        }
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let input = line.trim();

        match input {
            "q" | "quit" => break,
            "r" | "restart" => {
                game.restart();
                continue;
            }
            "z" | "reset" => {
                game.reset_scores();
                continue;
            }
            "" => {
                if game.phase() == Phase::Finished {
                    game.restart();
                }
                continue;
            }
            _ => {}
        }

        let Some(pos) = Position::from_label_or_number(input) else {
            println!("Unrecognized square: {input}");
            continue;
        };

        if let Err(err) = game.submit_player_move(pos.to_index()) {
            println!("{err}");
            continue;
        }

        if game.phase() == Phase::AwaitingAi {
            debug!(delay_ms = cli.delay_ms, "pausing before the AI's reply");
            thread::sleep(Duration::from_millis(cli.delay_ms));
            game.play_ai_move()?;
        }
    }

    Ok(())
}
