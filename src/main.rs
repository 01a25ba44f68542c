#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_placement::{
    cli::{format_coord, parse_placement, parse_roster},
    init_logging, Board, Fleet, FleetGenerator, Orientation, ShipColor, BOARD_COLS, BOARD_ROWS,
    DEFAULT_RETRY_BUDGET,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Generate a random legal fleet.
    Auto {
        #[arg(long, default_value_t = BOARD_ROWS)]
        rows: usize,
        #[arg(long, default_value_t = BOARD_COLS)]
        cols: usize,
        #[arg(long, default_value = "4,3,3,2,2,2,1,1,1,1", help = "Comma-separated ship lengths")]
        roster: String,
        #[arg(long, help = "Fix RNG seed for reproducible fleets (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_RETRY_BUDGET)]
        retry_budget: usize,
        #[arg(long, default_value_t = 0)]
        restarts: usize,
        #[arg(long, help = "Print the fleet as JSON")]
        json: bool,
    },
    /// Check whether a placement (e.g. A1:4:h) is legal next to the given ships.
    Check {
        candidate: String,
        #[arg(long = "ship", help = "Already placed ship, COORD:LENGTH:DIR (repeatable)")]
        ships: Vec<String>,
        #[arg(long, default_value_t = BOARD_ROWS)]
        rows: usize,
        #[arg(long, default_value_t = BOARD_COLS)]
        cols: usize,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Auto {
            rows,
            cols,
            roster,
            seed,
            retry_budget,
            restarts,
            json,
        } => {
            let roster = parse_roster(&roster).map_err(|e| anyhow::anyhow!(e))?;
            let generator = FleetGenerator::new(Board::new(rows, cols)?, &roster)?
                .with_retry_budget(retry_budget)
                .with_restarts(restarts);
            let mut rng = if let Some(s) = seed {
                log::info!("Using fixed seed: {} (fleet will be reproducible)", s);
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let fleet = generator.generate(&mut rng)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&fleet)?);
            } else {
                print_fleet(&fleet);
            }
        }
        Commands::Check {
            candidate,
            ships,
            rows,
            cols,
        } => {
            let mut fleet = Fleet::new(Board::new(rows, cols)?);
            for (index, arg) in ships.iter().enumerate() {
                let placement = parse_placement(arg).map_err(|e| anyhow::anyhow!(e))?;
                let color = ShipColor::for_length(placement.length());
                fleet
                    .place(placement, color)
                    .map_err(|e| anyhow::anyhow!("--ship #{} ({}): {}", index, arg, e))?;
            }
            let candidate = parse_placement(&candidate).map_err(|e| anyhow::anyhow!(e))?;
            match fleet.check(&candidate) {
                Ok(()) => println!("legal"),
                Err(reason) => {
                    println!("illegal: {}", reason);
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn print_fleet(fleet: &Fleet) {
    println!("{}", fleet);
    println!();
    for (i, ship) in fleet.iter().enumerate() {
        let (row, col) = ship.origin();
        let dir = match ship.orientation() {
            Orientation::Horizontal => "h",
            Orientation::Vertical => "v",
        };
        println!(
            "{:2}. {}:{}:{} ({:?})",
            i + 1,
            format_coord(row, col),
            ship.length(),
            dir,
            ship.color()
        );
    }
}
