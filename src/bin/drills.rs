use anyhow::{ensure, Result};
use clap::{Parser, Subcommand};

use connect_four::drills::{capitalize, knights_attack, swap_pair};
use connect_four::logging;

/// Coursework drills that ship with the game.
#[derive(Parser)]
#[command(name = "drills", about = "Small standalone exercises")]
struct Cli {
    #[command(subcommand)]
    drill: Drill,
}

#[derive(Subcommand)]
enum Drill {
    /// Print two integers in swapped order, one per line
    Swap {
        #[arg(allow_negative_numbers = true)]
        first: i64,
        #[arg(allow_negative_numbers = true)]
        second: i64,
    },

    /// Capitalize text, logging the value before and after
    Capitalize { text: String },

    /// Print YES if a knight on one square attacks the other
    Knights {
        #[arg(allow_negative_numbers = true)]
        x1: i64,
        #[arg(allow_negative_numbers = true)]
        y1: i64,
        #[arg(allow_negative_numbers = true)]
        x2: i64,
        #[arg(allow_negative_numbers = true)]
        y2: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init("info", 0);

    match cli.drill {
        Drill::Swap { first, second } => {
            let swapped = swap_pair([first, second]);
            ensure!(swapped[1] == first, "the number with index 0 is not swapped");
            ensure!(swapped[0] == second, "the number with index 1 is not swapped");
            println!("{}", swapped[0]);
            println!("{}", swapped[1]);
        }
        Drill::Capitalize { text } => println!("{}", capitalize(&text)),
        Drill::Knights { x1, y1, x2, y2 } => {
            let attacks = knights_attack((x1, y1), (x2, y2));
            println!("{}", if attacks { "YES" } else { "NO" });
        }
    }
    Ok(())
}
