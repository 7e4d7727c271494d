//! Elementary automaton demo: prints rule 30 from a single live cell.
//!
//! Demonstrates:
//!   1. Building a 1D automaton from a ruleset string
//!   2. Seeding an initial state
//!   3. Evolving, stepping back, and replaying from history
//!   4. Detecting when the run settles
//!
//! Run with:
//!   cargo run --example elementary

use cellum_engine::{BoundaryCondition, Ca1D, Settlement};
use log::Level;

// ─── Parameters ─────────────────────────────────────────────────

const CELLS: u32 = 31;
const RULE: &str = "00011110";
const GENERATIONS: usize = 15;

fn render(row: &str) -> String {
    row.chars().map(|c| if c == '1' { '#' } else { '.' }).collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    simple_logger::init_with_level(Level::Debug)?;

    let mut ca = Ca1D::new(CELLS, RULE, BoundaryCondition::Dirichlet0)?;
    let mut seed = vec![0; CELLS as usize];
    seed[CELLS as usize / 2] = 1;
    ca.configure_initial_state(&seed)?;

    println!("rule {} ({} boundary)", ca.ruleset().rule_number().unwrap_or(0), ca.boundary());
    println!("{}", render(&ca.get_state_string(None)?));
    for _ in 0..GENERATIONS {
        ca.evolve()?;
        println!("{}", render(&ca.get_state_string(None)?));
    }

    // Step back and replay: no recomputation, history is unchanged.
    ca.goto_state(5)?;
    ca.evolve()?;
    println!(
        "replayed generation 6 in {}us (history: {} generations)",
        ca.last_metrics().total_us,
        ca.history_len()
    );

    // Re-seed and run until the pattern repeats.
    ca.configure_initial_state(&seed)?;
    match ca.run_until_settled(1_000)? {
        Settlement::Fixed { generation } => println!("fixed at generation {generation}"),
        Settlement::Cycle { start, period } => {
            println!("cycle of period {period} from generation {start}")
        }
        Settlement::Unsettled { generations } => {
            println!("still changing after {generations} generations")
        }
    }
    Ok(())
}
