//! wow-fstack CLI
//!
//! Usage:
//!   wow-fstack inspect scene.lua --at 150,120 --at 900,700
//!   wow-fstack dump-tree scene_dir --visible-only
//!   wow-fstack exec scene.xml -e "print(MyFrame:GetName())"

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use wow_fstack::config::InspectorConfig;
use wow_fstack::dump::{build_frame_tree_dump, DumpOptions};
use wow_fstack::inspector::{strip_color_codes, DepthPolicy};
use wow_fstack::loader::load_scene;
use wow_fstack::lua_api::{WowLuaEnv, FRAMESTACK_SLASH};

#[derive(Parser)]
#[command(name = "wow-fstack")]
#[command(about = "Frame stack inspector for a simulated WoW UI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a scene and report the frame stack at each cursor position
    Inspect {
        /// Scene file (.lua, .xml) or directory
        scene: PathBuf,

        /// Cursor position in screen space (origin top-left), repeatable
        #[arg(long = "at", value_parser = parse_point, required = true)]
        at: Vec<(f32, f32)>,

        /// Print the full inspector report as JSON
        #[arg(long)]
        json: bool,

        /// Keep |c...|r color escapes in the panel text
        #[arg(long)]
        raw: bool,

        /// Maximum chain depth (overrides the config file)
        #[arg(long)]
        max_depth: Option<usize>,

        /// What spends the depth budget
        #[arg(long, value_enum)]
        policy: Option<PolicyArg>,

        /// Include hidden frames
        #[arg(long)]
        show_hidden: bool,

        /// Include textures and font strings
        #[arg(long)]
        show_regions: bool,

        /// Config file (defaults to the per-user config)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Load a scene and dump the frame tree with absolute coordinates
    DumpTree {
        scene: PathBuf,

        /// Filter by frame name (substring match)
        #[arg(short, long)]
        filter: Option<String>,

        /// Show only visible frames
        #[arg(long)]
        visible_only: bool,
    },

    /// Load a scene, run Lua code and print its output
    Exec {
        scene: PathBuf,

        /// Lua code to execute
        #[arg(short = 'e', long)]
        exec: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Traversal,
    Accepted,
}

impl From<PolicyArg> for DepthPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Traversal => DepthPolicy::Traversal,
            PolicyArg::Accepted => DepthPolicy::Accepted,
        }
    }
}

/// Parse "X,Y" into a cursor position.
fn parse_point(s: &str) -> Result<(f32, f32), String> {
    let (x, y) = s.split_once(',').ok_or_else(|| format!("expected X,Y, got {s:?}"))?;
    let parse = |v: &str| v.trim().parse::<f32>().map_err(|e| format!("{v:?}: {e}"));
    Ok((parse(x)?, parse(y)?))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Inspect { scene, at, json, raw, max_depth, policy, show_hidden, show_regions, config } => {
            let mut config = match config {
                Some(path) => InspectorConfig::load_from(&path)?,
                None => InspectorConfig::load(),
            };
            if let Some(depth) = max_depth {
                config.max_depth = depth;
            }
            if let Some(policy) = policy {
                config.depth_policy = policy.into();
            }
            config.show_hidden |= show_hidden;
            config.show_regions |= show_regions;
            inspect(&scene, &at, &config.normalized(), json, raw)?;
        }
        Commands::DumpTree { scene, filter, visible_only } => {
            let env = load_env(&scene, &InspectorConfig::default())?;
            let state = env.state().borrow();
            let options = DumpOptions { filter: filter.as_deref(), visible_only, include_overlays: false };
            println!("{}", build_frame_tree_dump(&state.widgets, state.screen_width, state.screen_height, &options));
        }
        Commands::Exec { scene, exec } => {
            let env = load_env(&scene, &InspectorConfig::default())?;
            env.exec_named(&exec, "=(command line)")?;
            for line in env.take_console_output() {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn load_env(scene: &Path, config: &InspectorConfig) -> wow_fstack::Result<WowLuaEnv> {
    let env = WowLuaEnv::with_config(config)?;
    load_scene(&env, scene)?;
    for line in env.take_console_output() {
        eprintln!("{line}");
    }
    Ok(env)
}

fn inspect(scene: &Path, points: &[(f32, f32)], config: &InspectorConfig, json: bool, raw: bool) -> wow_fstack::Result<()> {
    let env = load_env(scene, config)?;
    if !env.inspector().borrow().is_active() {
        env.dispatch_slash_command(FRAMESTACK_SLASH)?;
    }

    for &(x, y) in points {
        env.set_cursor(x, y);
        env.tick(0.0)?;
        let report = env.inspector_report();

        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            continue;
        }

        println!("== {x},{y}");
        match report.panel {
            Some(panel) => {
                for line in &panel.lines {
                    let line = if raw { line.clone() } else { strip_color_codes(line) };
                    println!("{line}");
                }
            }
            None => println!("(no frame under cursor)"),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_parse_with_optional_spaces() {
        assert_eq!(parse_point("150,120"), Ok((150.0, 120.0)));
        assert_eq!(parse_point(" 1.5 , 2 "), Ok((1.5, 2.0)));
        assert!(parse_point("150").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn cli_accepts_repeated_points() {
        let cli = Cli::try_parse_from(["wow-fstack", "inspect", "scene.lua", "--at", "1,2", "--at", "3,4", "--policy", "accepted"])
            .unwrap();
        let Commands::Inspect { at, policy, .. } = cli.command else {
            panic!("expected inspect");
        };
        assert_eq!(at, vec![(1.0, 2.0), (3.0, 4.0)]);
        assert!(matches!(policy, Some(PolicyArg::Accepted)));
    }
}
