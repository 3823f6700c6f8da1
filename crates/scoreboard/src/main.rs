//! Scoreboard CLI
//!
//! Replay or simulate a single-set tennis match and print the score.

use anyhow::{anyhow, bail, Context, Result};
use scoreboard::{MatchRunner, RandomSource, RunConfig, ScriptedSource};
use std::env;
use std::process::ExitCode;
use tennis_core::{MatchScorer, ScoringRules, Side};
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Tennis Scoreboard");
    println!();
    println!("Usage:");
    println!("  scoreboard demo");
    println!("  scoreboard play <player1> <player2> <point>... [--rules FILE]");
    println!("  scoreboard simulate [--p1 NAME] [--p2 NAME] [--bias P] [--seed N]");
    println!("                      [--rules FILE] [--max-points N] [--json] [--quiet]");
    println!();
    println!("Points:");
    println!("  1 | 2         - point to player 1 or player 2");
    println!("  <name>        - point to the player with that name");
    println!("                  (names are matched before 1 | 2)");
    println!();
    println!("Examples:");
    println!("  scoreboard play \"player 1\" \"player 2\" 1 2 1 1 2 2 1 1");
    println!("  scoreboard simulate --bias 0.55 --seed 7 --json");
    println!();
    println!("Set RUST_LOG=debug to trace games, tie-breaks and the result.");
}

fn load_rules(path: Option<&str>) -> Result<ScoringRules> {
    let Some(path) = path else {
        return Ok(ScoringRules::default());
    };
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read rules file {}", path))?;
    ScoringRules::from_toml_str(&contents).with_context(|| format!("Bad rules file {}", path))
}

/// Value following a flag, e.g. the `7` in `--seed 7`
fn flag_value<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i + 1)
        .map(String::as_str)
        .ok_or_else(|| anyhow!("{} needs a value", flag))
}

fn run_demo() -> Result<()> {
    let mut scorer = MatchScorer::new("player 1", "player 2")?;
    let steps: [(&[Side], &str); 5] = [
        (&[Side::One, Side::Two][..], "0-0, 15-15"),
        (&[Side::One, Side::One][..], "0-0, 40-15"),
        (&[Side::Two, Side::Two][..], "0-0, Deuce"),
        (&[Side::One][..], "0-0, Advantage player 1"),
        (&[Side::One][..], "1-0"),
    ];

    for (points, expected) in steps {
        for &side in points {
            scorer.record_point_for(side)?;
        }
        println!("{} // {}", scorer.current_score(), expected);
    }
    Ok(())
}

fn run_play(args: &[String]) -> Result<()> {
    if args.len() < 2 {
        print_usage();
        bail!("play requires two player names");
    }

    let player1 = &args[0];
    let player2 = &args[1];

    let mut tokens = Vec::new();
    let mut rules_path = None;
    let mut i = 2;
    while i < args.len() {
        match args[i].as_str() {
            "--rules" | "-r" => {
                rules_path = Some(flag_value(args, i, "--rules")?);
                i += 1;
            }
            _ => tokens.push(args[i].clone()),
        }
        i += 1;
    }

    let rules = load_rules(rules_path)?;
    let mut scorer = MatchScorer::with_rules(player1, player2, rules)?;
    let mut source = ScriptedSource::parse(&tokens, scorer.players())
        .map_err(|player| anyhow!("Player name {} does not exist", player))?;

    let config = RunConfig {
        strict: true,
        verbose: true,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    let report = runner.run(&mut scorer, &mut source)?;

    println!();
    println!("Final: {}", report.summary.score);
    println!("Raw:   {}", report.raw_score);
    Ok(())
}

fn run_simulate(args: &[String]) -> Result<()> {
    let mut player1 = "player 1".to_string();
    let mut player2 = "player 2".to_string();
    let mut bias: f64 = 0.5;
    let mut seed: Option<u64> = None;
    let mut rules_path = None;
    let mut config = RunConfig::default();
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--p1" => {
                player1 = flag_value(args, i, "--p1")?.to_string();
                i += 1;
            }
            "--p2" => {
                player2 = flag_value(args, i, "--p2")?.to_string();
                i += 1;
            }
            "--bias" | "-b" => {
                bias = flag_value(args, i, "--bias")?
                    .parse()
                    .context("--bias must be a number between 0 and 1")?;
                i += 1;
            }
            "--seed" | "-s" => {
                seed = Some(
                    flag_value(args, i, "--seed")?
                        .parse()
                        .context("--seed must be a non-negative integer")?,
                );
                i += 1;
            }
            "--rules" | "-r" => {
                rules_path = Some(flag_value(args, i, "--rules")?);
                i += 1;
            }
            "--max-points" | "-m" => {
                config.max_points = flag_value(args, i, "--max-points")?
                    .parse()
                    .context("--max-points must be a positive integer")?;
                i += 1;
            }
            "--json" => json = true,
            "--quiet" | "-q" => config.verbose = false,
            other => bail!("Unknown option: {}", other),
        }
        i += 1;
    }

    // JSON output owns stdout
    if json {
        config.verbose = false;
    }

    let rules = load_rules(rules_path)?;
    let mut scorer = MatchScorer::with_rules(&player1, &player2, rules)?;
    let mut source = RandomSource::new(bias, seed);

    if config.verbose {
        println!("=== Simulation: {} vs {} ===", player1, player2);
        println!("{} wins each point with p = {:.2}", player1, source.bias());
        println!();
    }

    let runner = MatchRunner::new(config);
    let report = runner.run(&mut scorer, &mut source)?;

    if json {
        println!("{}", report.to_json().map_err(|e| anyhow!(e))?);
    } else {
        println!();
        report.print_report();
    }
    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::SUCCESS;
    }

    let result = match args[1].as_str() {
        "demo" => run_demo(),
        "play" => run_play(&args[2..]),
        "simulate" | "sim" => run_simulate(&args[2..]),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            print_usage();
            Err(anyhow!("Unknown command: {}", other))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
