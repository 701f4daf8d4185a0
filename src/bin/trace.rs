//! Headless simulation trace.
//!
//! Runs the world without a terminal and prints one JSON object per frame on
//! stdout, followed by a summary object. Input is either a seeded random walk
//! or a script of `frame:action` entries, e.g.
//! `--script 0:right,10:jump,10:right,40:left`.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;

use tui_platformer::core::{Level, PlayerSnapshot, RandomInput, World};
use tui_platformer::logging;
use tui_platformer::types::{InputState, PlayerAction};

#[derive(Parser)]
#[command(name = "platformer-trace")]
#[command(version, about = "Run the platformer headless and print per-frame JSON", long_about = None)]
struct Cli {
    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 180)]
    frames: u64,

    /// Seed for random-walk input (ignored when --script is given)
    #[arg(short, long, default_value_t = 1)]
    seed: u32,

    /// Percent chance per frame to press jump in random-walk mode
    #[arg(long, default_value_t = 10)]
    jump_percent: u32,

    /// Scripted input: comma-separated `frame:action` holds
    #[arg(long)]
    script: Option<String>,

    /// ASCII level file (built-in demo level otherwise)
    #[arg(long)]
    level: Option<PathBuf>,

    /// Only print the summary line
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Serialize)]
struct FrameRecord {
    frame: u64,
    input: InputRecord,
    player: PlayerSnapshot,
    jumped: bool,
    landed: bool,
}

#[derive(Serialize)]
struct InputRecord {
    left: bool,
    right: bool,
    jump: bool,
}

impl From<InputState> for InputRecord {
    fn from(value: InputState) -> Self {
        Self {
            left: value.left,
            right: value.right,
            jump: value.jump,
        }
    }
}

#[derive(Serialize, Default)]
struct Summary {
    frames: u64,
    jumps: u32,
    landings: u32,
    fell_out: bool,
    final_x: i32,
    final_y: i32,
}

/// One scripted hold: from `frame` on, the action is held for every frame
/// until a later entry replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScriptEntry {
    frame: u64,
    action: Option<PlayerAction>,
}

fn parse_script(src: &str) -> Result<Vec<ScriptEntry>> {
    let mut entries = Vec::new();
    for item in src.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (frame, action) = item
            .split_once(':')
            .with_context(|| format!("script entry {item:?} is not frame:action"))?;
        let frame: u64 = frame
            .trim()
            .parse()
            .with_context(|| format!("bad frame number in {item:?}"))?;
        let action = match action.trim() {
            "none" | "idle" => None,
            name => match PlayerAction::from_str(name) {
                Some(a) if a.is_held() => Some(a),
                Some(a) => bail!("{} is not a held action", a.as_str()),
                None => bail!("unknown action {name:?}"),
            },
        };
        entries.push(ScriptEntry { frame, action });
    }
    entries.sort_by_key(|e| e.frame);
    Ok(entries)
}

/// Held keys at `frame`: every entry sharing the latest start frame is combined.
fn scripted_input(script: &[ScriptEntry], frame: u64) -> InputState {
    let Some(start) = script.iter().rev().find(|e| e.frame <= frame).map(|e| e.frame) else {
        return InputState::NONE;
    };
    let actions: Vec<PlayerAction> = script
        .iter()
        .filter(|e| e.frame == start)
        .filter_map(|e| e.action)
        .collect();
    InputState::from_actions(&actions)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_stderr()?;

    let level = match &cli.level {
        Some(path) => Level::load(path)
            .with_context(|| format!("failed to load level {}", path.display()))?,
        None => Level::default(),
    };
    let script = cli.script.as_deref().map(parse_script).transpose()?;
    let mut random = RandomInput::new(cli.seed).with_jump_percent(cli.jump_percent);

    log::info!(
        "tracing {} frames ({})",
        cli.frames,
        if script.is_some() { "scripted" } else { "random walk" }
    );

    let mut world = World::new(level);
    let mut summary = Summary::default();

    for frame in 0..cli.frames {
        let input = match &script {
            Some(script) => scripted_input(script, frame),
            None => random.next_input(),
        };
        let events = world.update(input);
        summary.jumps += events.jumped as u32;
        summary.landings += events.landed as u32;

        if !cli.quiet {
            let record = FrameRecord {
                frame: world.frame(),
                input: input.into(),
                player: PlayerSnapshot::from(world.player()),
                jumped: events.jumped,
                landed: events.landed,
            };
            println!("{}", serde_json::to_string(&record)?);
        }

        if world.player_fell_out() {
            log::info!("player fell out at frame {}", world.frame());
            summary.fell_out = true;
            break;
        }
    }

    summary.frames = world.frame();
    summary.final_x = world.player().rect().x;
    summary.final_y = world.player().rect().y;
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
