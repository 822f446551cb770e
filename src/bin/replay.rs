// Standalone replay tool for analyzing recorded Outwit games
//
// Usage:
//   cargo run --bin replay -- <log_file> [options]
//
// Options:
//   --all                  Replay all turns
//   --validate <T:X,Y,...> Validate expected destinations (format: turn:x,y)
//   --verbose              Show detailed output for each turn

use std::env;
use std::process;

use outwit::replay::ReplayEngine;
use outwit::types::Coord;

fn print_usage() {
    eprintln!("Outwit Replay Tool");
    eprintln!();
    eprintln!("USAGE:");
    eprintln!("  replay <log_file> [OPTIONS]");
    eprintln!();
    eprintln!("OPTIONS:");
    eprintln!("  --all                   Replay all turns in the log");
    eprintln!("  --validate <T:X,Y;...>  Validate expected destinations (format: turn:x,y)");
    eprintln!("  --verbose               Show detailed output for each turn");
    eprintln!("  --help                  Show this help message");
    eprintln!();
    eprintln!("EXAMPLES:");
    eprintln!("  # Replay a recorded game");
    eprintln!("  replay outwit_games.jsonl --all");
    eprintln!();
    eprintln!("  # Check where specific turns ended up");
    eprintln!("  replay outwit_games.jsonl --validate 5:8,1;10:0,9");
    eprintln!();
    eprintln!("  # Verbose replay of all turns");
    eprintln!("  replay outwit_games.jsonl --all --verbose");
}

fn parse_expected_moves(s: &str) -> Result<Vec<(i32, Coord)>, String> {
    s.split(';')
        .map(|pair| {
            let parts: Vec<&str> = pair.trim().split(':').collect();
            if parts.len() != 2 {
                return Err(format!("Invalid format '{}'. Expected 'turn:x,y'", pair));
            }

            let turn = parts[0]
                .parse::<i32>()
                .map_err(|e| format!("Invalid turn number '{}': {}", parts[0], e))?;

            let coords: Vec<&str> = parts[1].split(',').collect();
            if coords.len() != 2 {
                return Err(format!("Invalid destination '{}'. Expected 'x,y'", parts[1]));
            }
            let x = coords[0]
                .trim()
                .parse::<i32>()
                .map_err(|e| format!("Invalid x coordinate '{}': {}", coords[0], e))?;
            let y = coords[1]
                .trim()
                .parse::<i32>()
                .map_err(|e| format!("Invalid y coordinate '{}': {}", coords[1], e))?;

            Ok((turn, Coord::new(x, y)))
        })
        .collect()
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 || args.contains(&"--help".to_string()) {
        print_usage();
        process::exit(if args.contains(&"--help".to_string()) {
            0
        } else {
            1
        });
    }

    let log_file = &args[1];
    let mut verbose = false;
    let mut mode = None;

    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--all" => {
                mode = Some("all");
            }
            "--validate" => {
                if i + 1 >= args.len() {
                    eprintln!("Error: --validate requires an argument");
                    process::exit(1);
                }
                mode = Some("validate");
                i += 1;
            }
            "--verbose" => {
                verbose = true;
            }
            _ => {
                eprintln!("Error: Unknown option '{}'", args[i]);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    if mode.is_none() {
        eprintln!("Error: Must specify --all or --validate");
        print_usage();
        process::exit(1);
    }

    println!("Replay log file: {}", log_file);
    println!();

    let engine = ReplayEngine::new(verbose);

    let entries = match engine.load_log_file(log_file) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error loading log file: {}", e);
            process::exit(1);
        }
    };

    if entries.is_empty() {
        eprintln!("Error: Log file is empty");
        process::exit(1);
    }

    println!("Loaded {} log entries\n", entries.len());

    let (turns, chips) = match engine.replay_all(&entries) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error during replay: {}", e);
            process::exit(1);
        }
    };

    match mode.as_deref() {
        Some("all") => {
            let stats = engine.generate_stats(&turns, &chips);
            engine.print_report(&stats);
            if stats.illegal > 0 {
                process::exit(1);
            }
        }
        Some("validate") => {
            let validate_arg = &args[args.iter().position(|a| a == "--validate").unwrap() + 1];
            let expected_moves = match parse_expected_moves(validate_arg) {
                Ok(m) => m,
                Err(e) => {
                    eprintln!("Error parsing expected moves: {}", e);
                    process::exit(1);
                }
            };

            println!("Validating {} expected move(s)...\n", expected_moves.len());
            let mismatches = engine.validate_expected_moves(&turns, &expected_moves);
            if mismatches.is_empty() {
                println!("✓ All expected moves validated successfully!");
            } else {
                for m in &mismatches {
                    eprintln!("✗ {}", m);
                }
                process::exit(1);
            }
        }
        _ => unreachable!(),
    }
}
