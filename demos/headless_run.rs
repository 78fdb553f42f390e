//! # Headless automaton run
//!
//! Drives the engine through the simulation manager with a fixed frame
//! delta and prints the board as ASCII.
//!
//! ```text
//! cargo run --example headless_run -- conway preset:gosper
//! cargo run --example headless_run -- brain random
//! cargo run --example headless_run -- life symmetric:rotational:small
//! RUST_LOG=debug cargo run --example headless_run -- ant
//! ```

use anyhow::{bail, Context};
use pocketlife::prelude::*;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);
const MAX_UPDATES: usize = 20_000;
const PRINT_EVERY: u64 = 25;

fn parse_generator(arg: &str, rule: RuleKind) -> anyhow::Result<Generator> {
    let parts: Vec<&str> = arg.split(':').collect();
    let generator = match parts.as_slice() {
        ["empty"] => Generator::Empty,
        ["random"] => Generator::random_for(rule),
        ["random", draws] => Generator::Random {
            draws: draws.parse().context("draws must be a number")?,
        },
        ["preset", name] => Generator::Preset(name.parse()?),
        ["symmetric", symmetry, size] => Generator::Symmetric {
            symmetry: symmetry.parse()?,
            size: size.parse()?,
        },
        _ => bail!("unrecognised generator `{arg}`"),
    };
    Ok(generator)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rule: RuleKind = args.next().as_deref().unwrap_or("conway").parse()?;
    let generator = match args.next() {
        Some(arg) => parse_generator(&arg, rule)?,
        None if rule == RuleKind::LangtonsAnt => Generator::Empty,
        None => Generator::random_for(rule),
    };
    let speed = SpeedLevel::new(11)?;

    println!("{} seeded from {}", rule, generator);
    println!("============================================");

    let mut engine = Engine::new(EngineConfig::new());
    engine.seed(rule, generator);
    print!("{}", engine.board());

    let mut manager = SimulationManager::new(speed);
    manager.attach_simulation(Box::new(engine));

    for _ in 0..MAX_UPDATES {
        match manager.update(FRAME) {
            Some(ManagerEvent::Finished(status)) => {
                println!(
                    "Run ended {:?} at generation {}: {} cells (max {})",
                    status.run_state, status.generation, status.cell_count, status.max_cell_count
                );
                return Ok(());
            }
            Some(ManagerEvent::Stepped(report)) => {
                let generation = manager.status().map_or(0, |s| s.generation);
                if generation % PRINT_EVERY == 0 {
                    println!("Generation {} - {} cells", generation, report.cell_count);
                    if let Some(board) = manager.board() {
                        print!("{board}");
                    }
                }
            }
            None => {}
        }
    }

    if let Some(status) = manager.status() {
        println!(
            "Stopped after {} generations: {} cells (max {})",
            status.generation, status.cell_count, status.max_cell_count
        );
    }
    Ok(())
}
