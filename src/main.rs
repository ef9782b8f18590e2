//! Langton's Ant CLI - Run simulations from JSON settings.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use langtons_ant::{AppSettings, Simulation};

/// Parsed command line.
struct Args {
    settings_path: PathBuf,
    steps: u64,
    pattern: Option<PathBuf>,
    load: Option<PathBuf>,
    save: Option<PathBuf>,
    animate: bool,
}

fn print_usage(program: &str) {
    eprintln!(
        "Usage: {} <settings.json> [steps] [--pattern FILE] [--load FILE] [--save FILE] [--animate]",
        program
    );
    eprintln!();
    eprintln!("Run a Langton's Ant simulation from JSON settings.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  settings.json    Path to settings file");
    eprintln!("  steps            Number of simulation steps (default: 100)");
    eprintln!("  --pattern FILE   Import a text pattern, centered on the grid");
    eprintln!("  --load FILE      Start from a saved universe");
    eprintln!("  --save FILE      Save the final universe");
    eprintln!("  --animate        Print every step, paced by step_interval_ms");
    eprintln!();
    eprintln!("Default settings are printed with the --example flag.");
}

fn print_example_settings() {
    let settings = AppSettings::default();
    match serde_json::to_string_pretty(&settings) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing settings: {}", e),
    }
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut positional = Vec::new();
    let mut pattern = None;
    let mut load = None;
    let mut save = None;
    let mut animate = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        let mut value = |flag: &str| {
            iter.next()
                .map(PathBuf::from)
                .ok_or_else(|| format!("{} requires a file argument", flag))
        };
        match arg.as_str() {
            "--pattern" => pattern = Some(value("--pattern")?),
            "--load" => load = Some(value("--load")?),
            "--save" => save = Some(value("--save")?),
            "--animate" => animate = true,
            flag if flag.starts_with("--") => return Err(format!("Unknown option {}", flag)),
            _ => positional.push(arg.clone()),
        }
    }

    if pattern.is_some() && load.is_some() {
        return Err("--pattern and --load cannot be combined".to_string());
    }

    let settings_path = positional
        .first()
        .map(PathBuf::from)
        .ok_or_else(|| "Missing settings file".to_string())?;
    let steps = match positional.get(1) {
        Some(s) => s
            .parse()
            .map_err(|_| format!("Invalid step count: {}", s))?,
        None => 100,
    };

    Ok(Args {
        settings_path,
        steps,
        pattern,
        load,
        save,
        animate,
    })
}

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let raw_args: Vec<String> = std::env::args().collect();

    if raw_args.get(1).map(String::as_str) == Some("--example") {
        print_example_settings();
        return;
    }

    let args = parse_args(&raw_args).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        eprintln!();
        print_usage(&raw_args[0]);
        std::process::exit(1);
    });

    // Load settings
    let settings_str = fs::read_to_string(&args.settings_path).unwrap_or_else(|e| {
        eprintln!("Error reading settings file: {}", e);
        std::process::exit(1);
    });

    let settings: AppSettings = serde_json::from_str(&settings_str).unwrap_or_else(|e| {
        eprintln!("Error parsing settings: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = settings.validate() {
        eprintln!("Invalid settings: {}", e);
        std::process::exit(1);
    }

    let mut sim = Simulation::from_config(&settings.simulation).unwrap_or_else(|e| {
        eprintln!("Error creating simulation: {}", e);
        std::process::exit(1);
    });

    // Seed the grid
    if let Some(path) = &args.pattern {
        if let Err(e) = sim.import_pattern_file(path) {
            eprintln!("Error importing pattern {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
    if let Some(path) = &args.load {
        if let Err(e) = sim.load_universe_file(path) {
            eprintln!("Error loading universe {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }

    let size = sim.grid().size();
    println!("Langton's Ant");
    println!("=============");
    println!("Grid: {}x{}", size, size);
    println!("Steps: {}", args.steps);
    println!("Living cells: {}", sim.grid().living_cells());
    println!();

    let interval = Duration::from_millis(settings.simulation.step_interval_ms);
    let start = Instant::now();

    for _ in 0..args.steps {
        sim.step();

        if args.animate {
            print!("{}", sim.grid());
            if settings.render.show_hud {
                println!("{}", sim.stats());
            }
            println!();
            thread::sleep(interval);
        }
    }

    let elapsed = start.elapsed();

    if !args.animate {
        print!("{}", sim.grid());
        println!();
    }
    if settings.render.show_hud || !args.animate {
        println!("{}", sim.stats());
    }
    println!(
        "Time: {:.2}s ({:.1} steps/s)",
        elapsed.as_secs_f32(),
        args.steps as f32 / elapsed.as_secs_f32().max(f32::EPSILON)
    );

    if let Some(path) = &args.save {
        if let Err(e) = sim.save_universe_file(path) {
            eprintln!("Error saving universe {}: {}", path.display(), e);
            std::process::exit(1);
        }
        println!("Saved universe to {}", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("langtons-ant")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_parse_defaults() {
        let parsed = parse_args(&args(&["settings.json"])).unwrap();
        assert_eq!(parsed.settings_path, PathBuf::from("settings.json"));
        assert_eq!(parsed.steps, 100);
        assert!(parsed.pattern.is_none());
        assert!(!parsed.animate);
    }

    #[test]
    fn test_parse_flags() {
        let parsed = parse_args(&args(&[
            "s.json", "500", "--pattern", "glider.txt", "--save", "out.lant", "--animate",
        ]))
        .unwrap();
        assert_eq!(parsed.steps, 500);
        assert_eq!(parsed.pattern, Some(PathBuf::from("glider.txt")));
        assert_eq!(parsed.save, Some(PathBuf::from("out.lant")));
        assert!(parsed.animate);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&[])).is_err());
        assert!(parse_args(&args(&["s.json", "many"])).is_err());
        assert!(parse_args(&args(&["s.json", "--save"])).is_err());
        assert!(parse_args(&args(&["s.json", "--bogus"])).is_err());
        assert!(parse_args(&args(&["s.json", "--pattern", "a", "--load", "b"])).is_err());
    }
}
