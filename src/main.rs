use careerpaths::{
    config::{Config, ConfigStore, FileConfigStore},
    session::{
        parse_script, run_session, RandomResponder, Responder, ScriptedResponder, SessionReport,
    },
    AdaptiveEngine, CareerPath, PathSession,
};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use rand::{rngs::StdRng, RngCore, SeedableRng};
use std::{error::Error, path::PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// headless player for the career path learning games
#[derive(Parser, Debug)]
#[clap(
    version,
    about,
    long_about = "Plays the Doctor, Vet, Potions and Astronaut mini-game paths without a UI, printing how the adaptive difficulty level moves as answers come in."
)]
pub struct Cli {
    /// config file to read defaults from (and write with --save-config)
    #[clap(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// list the career paths and the games in each
    Paths,

    /// replay a script of right/wrong answers through a path
    Simulate {
        /// career path to play
        #[clap(short = 'p', long, value_enum)]
        path: Option<CareerPath>,

        /// answers in order: 1/y/+/c for right, 0/n/-/x for wrong
        #[clap(short = 'a', long)]
        answers: String,

        /// seed for question content
        #[clap(long)]
        seed: Option<u64>,

        /// print the report as JSON
        #[clap(long)]
        json: bool,
    },

    /// let a simulated child answer with a given accuracy
    Autoplay {
        /// career path to play
        #[clap(short = 'p', long, value_enum)]
        path: Option<CareerPath>,

        /// number of questions
        #[clap(short = 'r', long)]
        rounds: Option<usize>,

        /// chance of answering correctly, 0 to 1
        #[clap(short = 'a', long)]
        accuracy: Option<f64>,

        /// seed for question content and answers
        #[clap(long)]
        seed: Option<u64>,

        /// print the report as JSON
        #[clap(long)]
        json: bool,

        /// store the effective settings as the new defaults
        #[clap(long)]
        save_config: bool,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let store = match &cli.config {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new(),
    };
    let config = store.load();
    debug!(path = %store.path().display(), ?config, "loaded config");

    match cli.command {
        Command::Paths => print_paths(),
        Command::Simulate {
            path,
            answers,
            seed,
            json,
        } => {
            let script = parse_script(&answers)?;
            let rounds = script.len();
            let mut responder = ScriptedResponder::new(script);
            let path = path.unwrap_or(config.career_path);
            let report = play(
                &config,
                path,
                rounds,
                &mut responder,
                seed.or(config.seed),
            );
            print_report(&report, json)?;
        }
        Command::Autoplay {
            path,
            rounds,
            accuracy,
            seed,
            json,
            save_config,
        } => {
            let effective = Config {
                career_path: path.unwrap_or(config.career_path),
                rounds: rounds.unwrap_or(config.rounds),
                accuracy: accuracy.unwrap_or(config.accuracy),
                seed: seed.or(config.seed),
                policy: config.policy,
            };
            let mut responder = RandomResponder::new(effective.accuracy)?;
            let report = play(
                &effective,
                effective.career_path,
                effective.rounds,
                &mut responder,
                effective.seed,
            );
            print_report(&report, json)?;

            if save_config {
                store.save(&effective)?;
            }
        }
    }

    Ok(())
}

fn play(
    config: &Config,
    path: CareerPath,
    rounds: usize,
    responder: &mut dyn Responder,
    seed: Option<u64>,
) -> SessionReport {
    let mut rng: Box<dyn RngCore> = match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    };

    let mut engine = AdaptiveEngine::with_policy(config.policy);
    engine.on_level_change(|change| {
        debug!(
            previous = change.previous,
            current = change.current,
            "level change observed"
        )
    });
    let mut session = PathSession::with_engine(path, engine);
    run_session(&mut session, rounds, responder, rng.as_mut())
}

fn print_paths() {
    for path in CareerPath::ALL {
        let games = path.games().iter().map(|g| g.name()).join(", ");
        println!("{:<10} {}", path.to_string().to_lowercase(), games);
    }
}

fn print_report(report: &SessionReport, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("{} path", report.path);
    for r in &report.rounds {
        let mark = if r.correct { "✓" } else { "✗" };
        let change = if r.adjustment.changed_level() {
            format!("  [{}]", r.adjustment)
        } else {
            String::new()
        };
        println!(
            "{:>3} {} {:<14} level {} {}: {} ({}){}",
            r.round, mark, r.game, r.point.level, r.prompt, r.chosen, r.message, change
        );
    }
    println!(
        "{} right, {} wrong, final level {}, peak level {}",
        report.correct, report.incorrect, report.final_level, report.peak_level
    );
    Ok(())
}
