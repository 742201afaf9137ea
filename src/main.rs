//! Headless Flappy Board simulator (default binary).
//!
//! Plays a number of games back to back on one session, feeding the board
//! fixed-size frames through the tick clock. The autopilot flaps unless it is
//! turned off, in which case the bird is launched once and left to fall.
//! Prints a text or JSON summary and can keep a hall of fame on disk.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::{debug, info, LevelFilter, Log, Metadata, Record};
use serde::Serialize;

use flappy_board::core::BoardListener;
use flappy_board::engine::{Autopilot, Session};
use flappy_board::scores::{Highscore, HighscoreList, ScoreStore};
use flappy_board::types::{BoardEvent, PowerUp};

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless Flappy Board simulator", long_about = None)]
struct Args {
    /// Seed of the first game; game N uses seed + N
    #[arg(long, env = "FLAPPY_SEED", default_value_t = 1)]
    seed: u64,
    /// Games to play
    #[arg(long, default_value_t = 1)]
    sessions: u32,
    /// Tick limit per game
    #[arg(long, default_value_t = 10_000)]
    ticks: u64,
    /// Simulated frame length fed to the tick clock
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,
    /// Launch the bird once and never flap again
    #[arg(long)]
    no_autopilot: bool,
    /// Name recorded in the hall of fame
    #[arg(long, default_value = "autopilot")]
    username: String,
    /// Hall of fame JSON file, loaded before and saved after the run
    #[arg(long)]
    hall_of_fame: Option<PathBuf>,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
    /// off, error, warn, info, debug or trace
    #[arg(long, default_value = "warn")]
    log_level: String,
}

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

fn init_logging(level: &str) -> Result<()> {
    let filter: LevelFilter = level
        .parse()
        .map_err(|_| anyhow!("invalid log level: {level}"))?;
    log::set_logger(&LOGGER).map_err(|e| anyhow!("logger already set: {e}"))?;
    log::set_max_level(filter);
    Ok(())
}

/// Counts boost activations drained from the board
#[derive(Debug, Default)]
struct BoostCounter {
    last: PowerUp,
    boosts: u32,
    gravity_boosts: u32,
}

impl BoardListener for BoostCounter {
    fn on_event(&mut self, event: BoardEvent) {
        let BoardEvent::BirdChanged(regime) = event else {
            return;
        };
        // Shields follow a boost and never start from Normal
        if self.last == PowerUp::Normal && regime.is_boosted() {
            self.boosts += 1;
            if regime == PowerUp::GravityBoost {
                self.gravity_boosts += 1;
            }
        }
        self.last = regime;
    }
}

#[derive(Debug, Serialize)]
struct GameReport {
    game: u32,
    seed: u64,
    score: u32,
    ticks: u64,
    finished: bool,
    recorded: bool,
    boosts: u32,
    gravity_boosts: u32,
}

#[derive(Debug, Serialize)]
struct Summary {
    games: Vec<GameReport>,
    best: Option<Highscore>,
    hall_of_fame: String,
}

fn load_hall_of_fame(path: &Path) -> Result<HighscoreList> {
    if !path.exists() {
        return Ok(HighscoreList::new());
    }
    let file = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let records: Vec<Highscore> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parse {}", path.display()))?;
    Ok(HighscoreList::from_records(records))
}

fn save_hall_of_fame(path: &Path, hof: &HighscoreList) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), hof)
        .with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn play(session: &mut Session<HighscoreList>, args: &Args, game: u32, seed: u64) -> GameReport {
    let pilot = Autopilot::new();
    let frame = Duration::from_millis(args.frame_ms);
    let mut counter = BoostCounter::default();

    // The first flap starts the board either way.
    session.flap();
    while !session.is_over() && session.board().tick_count() < args.ticks {
        if !args.no_autopilot {
            if let Some(direction) = pilot.decide(session.board()) {
                session.input(direction);
            }
        }
        session.update(frame, &mut counter);
    }

    let board = session.board();
    let result = session.result();
    debug!("game {} final snapshot: {:?}", game, board.snapshot());
    GameReport {
        game,
        seed,
        score: board.score(),
        ticks: board.tick_count(),
        finished: result.is_some(),
        recorded: result.map(|r| r.recorded).unwrap_or(false),
        boosts: counter.boosts,
        gravity_boosts: counter.gravity_boosts,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level)?;

    if args.frame_ms == 0 {
        return Err(anyhow!("--frame-ms must be positive"));
    }

    let hof = match &args.hall_of_fame {
        Some(path) => load_hall_of_fame(path)?,
        None => HighscoreList::new(),
    };

    let mut session = Session::new(args.seed, hof).with_username(args.username.clone());
    let mut games = Vec::with_capacity(args.sessions as usize);
    for game in 0..args.sessions {
        let seed = args.seed.wrapping_add(game as u64);
        if game > 0 {
            session.restart(seed);
        }
        games.push(play(&mut session, &args, game, seed));
    }

    let hof = session.into_store();
    info!("{} games played, {}", games.len(), hof.summary());
    if let Some(path) = &args.hall_of_fame {
        save_hall_of_fame(path, &hof)?;
    }

    let summary = Summary {
        games,
        best: hof.best().cloned(),
        hall_of_fame: hof.summary(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for g in &summary.games {
            println!(
                "game {:>3}  seed {:>6}  score {:>4}  ticks {:>6}  boosts {:>2}{}",
                g.game,
                g.seed,
                g.score,
                g.ticks,
                g.boosts,
                if g.finished { "" } else { "  (tick limit)" }
            );
        }
        println!("{}", summary.hall_of_fame);
    }
    Ok(())
}
