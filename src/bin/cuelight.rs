use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use cuelight::{CueEngine, SyntheticClock, hero_scene, load_hero_config};

#[derive(Parser, Debug)]
#[command(name = "cuelight", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve the spec documents and print the hero configuration as JSON.
    Resolve(ResolveArgs),
    /// Print the static scene derived from the resolved configuration.
    Scene(ResolveArgs),
    /// Drive the cue engine with a synthetic clock and print cue events.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Directory holding tokens.json, copy.json, ui_spec.json and the
    /// optional copy_timeline.json.
    #[arg(long, default_value = "specs")]
    specs: PathBuf,

    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    #[arg(long, default_value = "specs")]
    specs: PathBuf,

    /// Seconds of timeline to simulate.
    #[arg(long, default_value_t = 10.0)]
    until: f64,

    /// Tick step in milliseconds.
    #[arg(long, default_value_t = 100)]
    step_ms: u64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Resolve(args) => cmd_resolve(args),
        Command::Scene(args) => cmd_scene(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let cfg = load_hero_config(&args.specs)
        .with_context(|| format!("resolve specs in '{}'", args.specs.display()))?;
    print_json(&cfg, args.pretty)
}

fn cmd_scene(args: ResolveArgs) -> anyhow::Result<()> {
    let cfg = load_hero_config(&args.specs)
        .with_context(|| format!("resolve specs in '{}'", args.specs.display()))?;
    print_json(&hero_scene(&cfg), args.pretty)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let cfg = load_hero_config(&args.specs)
        .with_context(|| format!("resolve specs in '{}'", args.specs.display()))?;

    let timeline = cfg.timeline.clone();
    if timeline.cues.is_empty() {
        println!("timeline has no cues; nothing to simulate");
        return Ok(());
    }

    let clock = SyntheticClock::new(timeline.loop_duration());
    let mut engine = CueEngine::new(timeline);

    // Replay the clock's mapping over a fixed schedule instead of sleeping;
    // the simulation is about cue order, not real-time pacing.
    let mut last_index = usize::MAX;
    let mut now_ms: u64 = 0;
    while (now_ms as f64) / 1000.0 <= args.until {
        let t = clock.position_at(now_ms as f64 / 1000.0);
        let frame = engine.tick(t, now_ms);
        if frame.cue_index != last_index {
            println!(
                "{:>7.2}s  cue {}  heading={:?}  subheading={:?}",
                t, frame.cue_index, frame.heading, frame.subheading
            );
            last_index = frame.cue_index;
        }
        now_ms += args.step_ms.max(1);
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .context("serialize output")?;
    println!("{out}");
    Ok(())
}
