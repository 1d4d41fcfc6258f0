//! clicker-runner: headless runner for the Life Clicker economy.
//!
//! Usage:
//!   clicker-runner --seed 12345 --seconds 600 --db save.db
//!   clicker-runner --db save.db --ipc-mode
//!   clicker-runner --config runner.json --seconds 60

use anyhow::Result;
use life_clicker_core::{
    autoplay::{AutoplaySettings, Autoplayer},
    command::{CommandOutcome, PlayerCommand},
    config::GameConfig,
    display::format_number,
    engine::EconomyEngine,
    event::GameEvent,
    state::EconomyState,
    store::SqliteStore,
    upgrade::ShopEntry,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Serialize)]
struct UiState<'a> {
    state:   &'a EconomyState,
    shop:    Vec<ShopEntry>,
    outcome: Option<CommandOutcome>,
    events:  Vec<GameEvent>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let seconds = parse_arg(&args, "--seconds", 600u64);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let db = string_arg(&args, "--db").unwrap_or(":memory:");

    let config = match string_arg(&args, "--config") {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if !ipc_mode {
        println!("Life Clicker — clicker-runner");
        println!("  seed:      {seed}");
        println!("  seconds:   {seconds}");
        println!("  db:        {db}");
        println!("  save key:  {}", config.save_key);
        println!();
    }

    let store = SqliteStore::open(db)?;
    store.migrate()?;
    let mut engine = EconomyEngine::new(config, store);

    if ipc_mode {
        run_ipc_loop(&mut engine)?;
    } else {
        let mut player = Autoplayer::new(seed, AutoplaySettings::default());
        let report = player.play(&mut engine, seconds);
        engine.save();
        print_summary(&engine, report.clicks, report.purchases, report.credited);
    }

    Ok(())
}

fn run_ipc_loop(engine: &mut EconomyEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        let line = buffer.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            break;
        }

        let outcome = match serde_json::from_str::<PlayerCommand>(line) {
            Ok(cmd) => match engine.apply(cmd) {
                Ok(outcome) => Some(outcome),
                Err(e) => {
                    write_error(&mut stdout, &e.to_string())?;
                    continue;
                }
            },
            Err(e) => {
                write_error(&mut stdout, &e.to_string())?;
                continue;
            }
        };

        let events = engine.drain_events();
        for event in &events {
            if let GameEvent::SaveFailed { reason } = event {
                log::warn!("save failed: {reason}");
            }
        }
        let ui = UiState {
            state: engine.state(),
            shop: engine.shop(),
            outcome,
            events,
        };
        writeln!(stdout, "{}", serde_json::to_string(&ui)?)?;
        stdout.flush()?;
    }
    engine.save();
    Ok(())
}

fn write_error(stdout: &mut io::Stdout, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(stdout, "{}", err_json)?;
    stdout.flush()?;
    Ok(())
}

fn print_summary(engine: &EconomyEngine, clicks: u64, purchases: u64, credited: u64) {
    let state = engine.state();

    println!("=== SESSION SUMMARY ===");
    println!("  session:        {}", engine.session_id);
    println!("  ticks run:      {}", engine.clock.ticks_fired);
    println!("  clicks:         {clicks}");
    println!("  purchases:      {purchases}");
    println!("  credited:       {}", format_number(credited));
    println!();
    println!("=== LEDGER ===");
    println!("  life:           {}", format_number(state.life));
    println!("  lakes:          {}", format_number(state.lakes));
    println!("  seas:           {}", format_number(state.seas));
    println!("  oceans:         {}", format_number(state.oceans));
    println!("  per click:      {}", format_number(state.per_click));
    println!("  per second:     {}", format_number(state.per_second));
    println!();
    println!("=== SHOP ===");
    for entry in engine.shop() {
        println!(
            "  {:<12} {:<11} {:>3} {:<6} {}",
            entry.kind.name(),
            entry.label,
            entry.cost,
            format!("{:?}", entry.currency).to_lowercase(),
            if entry.affordable { "affordable" } else { "-" }
        );
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}

fn string_arg<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == flag)
        .map(|w| w[1].as_str())
}
