//! Round-by-round driver for the three electoral systems.
//!
//! Runs FPTP, MMM and PR as independent simulations over the same party
//! lineup and prints each system's history. `--seed N` fixes the RNG for
//! a reproducible run; `--json` dumps the raw histories as one JSON
//! object instead of tables.

use electoral_sim::{ElectoralSystem, Party, SimConfig, SimulationOutcome, run_simulation};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    let seed = args
        .iter()
        .position(|a| a == "--seed")
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse::<u64>().ok());

    let parties = vec![
        Party::new("Party A", 0.35),
        Party::new("Party B", 0.25),
        Party::new("Party C", 0.20),
        Party::new("Party D", 0.15),
        Party::new("Party E", 0.05),
    ];

    let config = SimConfig {
        seed,
        ..SimConfig::default()
    };

    let systems = [
        ElectoralSystem::FirstPastThePost { districts: 20 },
        ElectoralSystem::MixedMemberMajoritarian {
            constituency_seats: 10,
            list_seats: 10,
        },
        ElectoralSystem::Proportional { seats: 20 },
    ];

    let mut outcomes = Vec::new();
    for system in systems {
        match run_simulation(&parties, system, &config) {
            Ok(outcome) => outcomes.push((system, outcome)),
            Err(err) => {
                eprintln!("{} simulation failed: {err}", system.label());
                std::process::exit(1);
            }
        }
    }

    if json {
        let mut map = serde_json::Map::new();
        for (system, outcome) in &outcomes {
            let value = serde_json::to_value(outcome).expect("history serializes");
            map.insert(system.label().to_string(), value);
        }
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::Value::Object(map))
                .expect("history serializes")
        );
    } else {
        for (system, outcome) in &outcomes {
            print_outcome(system.label(), &parties, outcome);
        }
    }
}

fn print_outcome(label: &str, parties: &[Party], outcome: &SimulationOutcome) {
    println!("=== {label} ===");
    for record in &outcome.history {
        println!("round {}", record.round);
        for (party, info) in parties.iter().enumerate() {
            println!(
                "  {:<8} share {:>5.3}  seats {:>2}  strength {:>5.3}",
                info.name,
                record.vote_shares[party],
                record.seats[party],
                record.strength[party]
            );
        }
    }
    let finals: Vec<String> = parties
        .iter()
        .zip(&outcome.final_strength)
        .map(|(p, s)| format!("{} {s:.3}", p.name))
        .collect();
    println!("final strengths: {}", finals.join(", "));
    println!();
}
