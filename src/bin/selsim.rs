//! selsim - selection experiment runner.
//!
//! Runs one experiment and writes its report to a timestamped text file.

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use u_selection::population::{Population, PopulationShape};
use u_selection::report::Report;
use u_selection::roulette::{RouletteConfig, RouletteEngine};
use u_selection::tournament::{TournamentConfig, TournamentEngine};
use u_selection::truncation::{TruncationConfig, TruncationEngine};

#[derive(Parser)]
#[command(name = "selsim")]
#[command(version)]
#[command(about = "Monte Carlo experiments on roulette, truncation and tournament selection")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Random seed for reproducibility
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Run all cycles on the current thread
    #[arg(long, global = true)]
    serial: bool,

    /// Directory the report is written to
    #[arg(short, long, global = true, default_value = ".")]
    output: PathBuf,

    /// Print the report to stdout instead of writing a file
    #[arg(long, global = true)]
    print: bool,

    /// Engine configuration (JSON); replaces the count and parameter flags
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Genetic drift under roulette-wheel selection (alternating A/B population)
    Roulette {
        /// Number of selection cycles
        #[arg(long, default_value = "1000")]
        cycles: usize,

        /// Generations per cycle
        #[arg(long, default_value = "20")]
        generations: usize,

        /// Population size
        #[arg(long, default_value = "100")]
        size: usize,

        /// Fitness shared by every member
        #[arg(long, default_value = "1.5")]
        fitness: f64,
    },

    /// Material loss under truncation selection
    Truncation {
        /// Number of selection cycles
        #[arg(long, default_value = "1000")]
        cycles: usize,

        /// Generations per cycle
        #[arg(long, default_value = "20")]
        generations: usize,

        /// Fraction of the population kept as parents, in (0, 1]
        #[arg(short, long, default_value = "0.5")]
        threshold: f64,

        /// Cap every survivor at ceil(1/threshold) offspring
        #[arg(long)]
        without_replacement: bool,

        #[command(flatten)]
        population: PopulationArgs,
    },

    /// Take-over time under q-tournament selection
    Tournament {
        /// Competitors per tournament, in [2, 5]
        #[arg(short, default_value = "2")]
        q: usize,

        /// Number of selection cycles
        #[arg(long, default_value = "1000")]
        cycles: usize,

        /// Generations per cycle
        #[arg(long, default_value = "30")]
        generations: usize,

        #[command(flatten)]
        population: PopulationArgs,
    },
}

#[derive(Args)]
struct PopulationArgs {
    /// Fitness profile of the initial population
    #[arg(long, value_enum, default_value_t = ShapeKind::Constant)]
    shape: ShapeKind,

    /// Population size
    #[arg(long, default_value = "100")]
    size: usize,

    /// Fitness of the ordinary members (constant shape)
    #[arg(long, default_value = "1.0")]
    base: f64,

    /// Fitness of the single best member (constant and linear shapes)
    #[arg(long, default_value = "2.0")]
    top: f64,

    /// Lowest fitness of the linear ramp
    #[arg(long, default_value = "1.0")]
    lower: f64,

    /// Highest fitness of the linear ramp
    #[arg(long, default_value = "1.5")]
    upper: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum ShapeKind {
    Constant,
    Linear,
    Nonlinear,
}

impl PopulationArgs {
    fn shape(&self) -> PopulationShape {
        match self.shape {
            ShapeKind::Constant => PopulationShape::Constant {
                base: self.base,
                top: self.top,
            },
            ShapeKind::Linear => PopulationShape::Linear {
                lower: self.lower,
                upper: self.upper,
                top: self.top,
            },
            ShapeKind::Nonlinear => PopulationShape::NonLinear,
        }
    }

    fn build(&self) -> (PopulationShape, Population) {
        let shape = self.shape();
        let population = shape.build(self.size);
        (shape, population)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let report = match &cli.command {
        Commands::Roulette {
            cycles,
            generations,
            size,
            fitness,
        } => {
            let mut config = match &cli.config {
                Some(path) => load_config::<RouletteConfig>(path)?,
                None => RouletteConfig::new(*cycles, *generations),
            };
            if let Some(seed) = cli.seed {
                config = config.with_seed(seed);
            }
            if cli.serial {
                config = config.with_parallel(false);
            }
            let population = PopulationShape::two_class(*fitness).build(*size);
            RouletteEngine::new(population)?
                .experiment(&config)?
                .render()
        }

        Commands::Truncation {
            cycles,
            generations,
            threshold,
            without_replacement,
            population,
        } => {
            let mut config = match &cli.config {
                Some(path) => load_config::<TruncationConfig>(path)?,
                None => TruncationConfig::new(*cycles, *generations, *threshold)
                    .with_replacement(!*without_replacement),
            };
            if let Some(seed) = cli.seed {
                config = config.with_seed(seed);
            }
            if cli.serial {
                config = config.with_parallel(false);
            }
            let (shape, population) = population.build();
            log::info!("initial population: {}", shape.describe(population.len()));
            TruncationEngine::new(population)?
                .experiment(&config)?
                .render()
        }

        Commands::Tournament {
            q,
            cycles,
            generations,
            population,
        } => {
            let mut config = match &cli.config {
                Some(path) => load_config::<TournamentConfig>(path)?,
                None => TournamentConfig::new(*q, *cycles, *generations),
            };
            if let Some(seed) = cli.seed {
                config = config.with_seed(seed);
            }
            if cli.serial {
                config = config.with_parallel(false);
            }
            let (shape, population) = population.build();
            TournamentEngine::new(population, Some(shape))?
                .experiment(&config)?
                .render()
        }
    };

    if cli.print {
        print!("{report}");
        return Ok(());
    }

    std::fs::create_dir_all(&cli.output)?;
    let file_name = chrono::Local::now()
        .format("%Y_%m_%d_%H_%M_%S.txt")
        .to_string();
    let path = cli.output.join(file_name);
    std::fs::write(&path, report)?;
    log::info!("report written to {}", path.display());
    Ok(())
}

fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&text)?;
    log::info!("loaded configuration from {}", path.display());
    Ok(config)
}
