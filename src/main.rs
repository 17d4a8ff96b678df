// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Bearing and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Bearing CLI entrypoint.
//!
//! Inspects and drives the lifecycle of a life structure kept in a state folder. Log output goes
//! to stderr and is filtered by `BEARING_LOG` (default `warn`).

use std::error::Error;

use bearing::app::{demo_state, AppState};
use bearing::model::MarkerKind;
use bearing::store::{StateFolder, WriteDurability};
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "BEARING_LOG";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<state-dir>] [--durable-writes] [<command>]\n  {program} [--state <dir>] [--durable-writes] [<command>]\n  {program} --demo [<command>]\n\nCommands:\n  status                  show the current structure and history counts (default)\n  snapshot                snapshot the current structure\n  new <name>              retire the current structure and start a new one\n  seal <title>            seal the current structure as a chapter\n  timeline                list timeline markers, newest first\n  export-timeline         print the timeline export payload\n  import-timeline <path>  replace the timeline with an exported payload\n\nIf state-dir/--state is omitted, the current working directory is used.\n--demo uses a built-in demo state, is never saved, and cannot be combined with state-dir/--state.\n\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported).\n\nSet {LOG_ENV} (e.g. `{LOG_ENV}=debug`) to control log output on stderr."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
enum Command {
    #[default]
    Status,
    Snapshot,
    New(String),
    Seal(String),
    Timeline,
    ExportTimeline,
    ImportTimeline(String),
}

impl Command {
    fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Snapshot | Self::New(_) | Self::Seal(_) | Self::ImportTimeline(_)
        )
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    state_dir: Option<String>,
    durable_writes: bool,
    command: Option<Command>,
}

fn parse_command(
    name: &str,
    args: &mut impl Iterator<Item = String>,
) -> Result<Option<Command>, ()> {
    let command = match name {
        "status" => Command::Status,
        "snapshot" => Command::Snapshot,
        "new" => Command::New(args.next().ok_or(())?),
        "seal" => Command::Seal(args.next().ok_or(())?),
        "timeline" => Command::Timeline,
        "export-timeline" => Command::ExportTimeline,
        "import-timeline" => Command::ImportTimeline(args.next().ok_or(())?),
        _ => return Ok(None),
    };
    Ok(Some(command))
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--state" => {
                if options.state_dir.is_some() {
                    return Err(());
                }
                let dir = args.next().ok_or(())?;
                options.state_dir = Some(dir);
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.command.is_some() {
                    return Err(());
                }
                if let Some(command) = parse_command(&arg, &mut args)? {
                    options.command = Some(command);
                    continue;
                }
                if options.state_dir.is_some() {
                    return Err(());
                }
                options.state_dir = Some(arg);
            }
        }
    }

    if options.demo && (options.state_dir.is_some() || options.durable_writes) {
        return Err(());
    }

    Ok(options)
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_status(state: &AppState) {
    let structures = state.structures();
    match structures.current_structure() {
        Some(current) => {
            let metrics = current.metrics();
            println!("current: {} ({})", current.name(), current.id());
            println!(
                "  nodes: {} (layer1 {}, layer2 {}, layer3 {})",
                metrics.node_count,
                metrics.layer_distribution.layer1,
                metrics.layer_distribution.layer2,
                metrics.layer_distribution.layer3
            );
            println!("  edges: {}", metrics.edge_count);
            println!("  total weight: {}", metrics.total_weight);
        }
        None => println!("current: none"),
    }
    println!("structures: {}", structures.structures().len());
    println!("snapshots: {}", structures.snapshots().len());
    println!("past journeys: {}", structures.past_journeys().len());
    println!("sealed chapters: {}", structures.sealed_chapters().len());
    println!("timeline entries: {}", state.timeline().entries().len());
}

fn print_timeline(state: &AppState) {
    let timeline = state.timeline();
    let markers = timeline.markers();
    if markers.is_empty() {
        println!("no timeline entries");
        return;
    }
    for marker in markers {
        let title = timeline
            .entry(&marker.entry_id)
            .map(|entry| entry.title())
            .unwrap_or_default();
        let cursor = if timeline.current_entry_id() == Some(&marker.entry_id) {
            "*"
        } else {
            " "
        };
        let kind = match marker.kind {
            MarkerKind::Current => "current",
            MarkerKind::Past => "past",
        };
        println!(
            "{cursor} {} {:>5.1}% {:<8} {:<7} {title}",
            marker.date,
            marker.position,
            marker.action.as_str(),
            kind
        );
    }
}

fn run(state: &mut AppState, command: &Command) -> Result<(), Box<dyn Error>> {
    match command {
        Command::Status => print_status(state),
        Command::Snapshot => match state.take_snapshot() {
            Some(recorded) => println!("snapshot {}", recorded.record_id),
            None => return Err("no current structure to snapshot".into()),
        },
        Command::New(name) => {
            let id = state.start_new_structure(name);
            println!("started structure {id}");
        }
        Command::Seal(title) => match state.seal_chapter(title) {
            Some(recorded) => println!("sealed chapter {}", recorded.record_id),
            None => return Err("no current structure to seal".into()),
        },
        Command::Timeline => print_timeline(state),
        Command::ExportTimeline => println!("{}", state.timeline().export_entries()?),
        Command::ImportTimeline(path) => {
            let contents = std::fs::read_to_string(path)?;
            state.timeline_mut().try_import_entries(&contents)?;
            println!("imported {} entries", state.timeline().entries().len());
        }
    }
    Ok(())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "bearing".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        init_logging();
        let command = options.command.unwrap_or_default();

        if options.demo {
            let mut state = demo_state();
            return run(&mut state, &command);
        }

        let dir = options.state_dir.unwrap_or_else(|| ".".to_owned());
        let folder = if options.durable_writes {
            StateFolder::new(dir).with_durability(WriteDurability::Durable)
        } else {
            StateFolder::new(dir)
        };
        let mut state = folder.load_state()?;
        if state.structures().structures().is_empty() {
            state.bootstrap();
        }
        run(&mut state, &command)?;

        if command.mutates() {
            folder.save_state(&mut state)?;
        }
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("bearing: {err}");
        std::process::exit(1);
    }
}
