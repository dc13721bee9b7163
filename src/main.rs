#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use seabattle::{
    init_logging, AttackOutcome, GameService, GameSnapshot, GameStatus, MemoryStore, GRID_SIZE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Play an interactive game against a random hidden fleet.
    Play {
        #[arg(long, help = "Fix RNG seed for a reproducible fleet (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play { seed } => play(seed).await,
    }
}

#[cfg(feature = "std")]
async fn play(seed: Option<u64>) -> anyhow::Result<()> {
    let store = MemoryStore::new();
    let snapshot = match seed {
        Some(s) => {
            println!("Using fixed seed: {} (fleet will be reproducible)", s);
            let mut rng = SmallRng::seed_from_u64(s);
            store.create_with_rng(&mut rng).await?
        }
        None => store.create_game().await?,
    };
    let id = snapshot.id;
    println!("Game {} started. Enter attacks as: row col (0-{})", id, GRID_SIZE - 1);
    render(&snapshot);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!("Giving up.");
            return Ok(());
        }
        let coords: Vec<usize> = line
            .split_whitespace()
            .filter_map(|tok| tok.parse().ok())
            .collect();
        let &[row, col] = coords.as_slice() else {
            println!("Expected two numbers, e.g.: 4 7");
            continue;
        };

        let response = store.attack(id, row, col).await?;
        println!("{:?}", response.attack_status);
        render(&response.game);
        if response.game.status == GameStatus::Finished {
            println!("All ships sunk. You win!");
            return Ok(());
        }
        if response.attack_status == AttackOutcome::Invalid {
            println!("That cell cannot be attacked; try another.");
        }
    }
}

#[cfg(feature = "std")]
fn render(snapshot: &GameSnapshot) {
    print!("   ");
    for col in 0..GRID_SIZE {
        print!(" {}", col);
    }
    println!();
    for (r, row) in snapshot.opponent_grid.iter().enumerate() {
        print!("{:>2} |", r);
        for cell in row {
            print!("{}|", cell);
        }
        println!();
    }
}
