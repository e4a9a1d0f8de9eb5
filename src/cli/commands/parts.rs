//! `mechworks parts` command - part queries over the robot's collection

use clap::Subcommand;
use indexmap::IndexMap;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::utils::Session;
use crate::cli::helpers::count_summary;
use crate::cli::table::{emit_block, write_groups, write_parts};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::capability::{Capabilities, Capability};
use crate::core::sink::{ConsoleSink, Sink};
use crate::entities::machine::PartAggregate;
use crate::entities::part::{PartEntry, PartNo};
use crate::entities::robot::Robot;

#[derive(Subcommand, Debug)]
pub enum PartsCommands {
    /// List every part in collection order
    List(ListArgs),

    /// Parts priced at or above a threshold
    Expensive(ExpensiveArgs),

    /// Parts that can move
    Movable,

    /// Movable parts grouped by type
    ByType,

    /// Part numbers that occur more than once, with their counts
    Duplicates,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Only parts with this capability (displayable, movable, flyable)
    #[arg(long, short = 'c')]
    pub capability: Option<Capability>,

    /// Show only count
    #[arg(long)]
    pub count: bool,
}

#[derive(clap::Args, Debug)]
pub struct ExpensiveArgs {
    /// Minimum price (inclusive)
    #[arg(allow_negative_numbers = true)]
    pub threshold: f64,
}

pub fn run(cmd: PartsCommands, global: &GlobalOpts) -> Result<()> {
    let session = Session::open(global)?;
    let mut sink = ConsoleSink;
    run_query(&cmd, &session.robot, session.format, global.quiet, &mut sink)
}

/// Run one query against `robot`
pub fn run_query(
    cmd: &PartsCommands,
    robot: &Robot,
    format: OutputFormat,
    quiet: bool,
    sink: &mut dyn Sink,
) -> Result<()> {
    match cmd {
        PartsCommands::List(args) => {
            let parts: Vec<&PartEntry> = robot
                .iter()
                .filter(|part| args.capability.map_or(true, |cap| part.supports(cap)))
                .collect();
            if args.count {
                sink.emit(&parts.len().to_string());
                return Ok(());
            }
            write_listing(&parts, format, quiet, sink)
        }
        PartsCommands::Expensive(args) => {
            write_listing(&robot.get_expensive_parts(args.threshold), format, quiet, sink)
        }
        PartsCommands::Movable => write_listing(&robot.get_movable_parts(), format, quiet, sink),
        PartsCommands::ByType => write_groups(&robot.get_movable_parts_by_type(), format, sink),
        PartsCommands::Duplicates => write_duplicates(&robot.find_duplicated_parts(), format, sink),
    }
}

fn write_listing(
    parts: &[&PartEntry],
    format: OutputFormat,
    quiet: bool,
    sink: &mut dyn Sink,
) -> Result<()> {
    write_parts(parts, format, sink)?;
    if !quiet && matches!(format, OutputFormat::Text | OutputFormat::Auto) {
        sink.emit(&count_summary(parts.len()));
    }
    Ok(())
}

fn write_duplicates(
    duplicates: &IndexMap<PartNo, usize>,
    format: OutputFormat,
    sink: &mut dyn Sink,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let text = serde_json::to_string_pretty(duplicates).into_diagnostic()?;
            text.lines().for_each(|line| sink.emit(line));
        }
        OutputFormat::Yaml => {
            let text = serde_yml::to_string(duplicates).into_diagnostic()?;
            text.lines().for_each(|line| sink.emit(line));
        }
        OutputFormat::Tsv | OutputFormat::Csv => {
            let delimiter = if format == OutputFormat::Tsv { b'\t' } else { b',' };
            let mut buf = Vec::new();
            {
                let mut writer = csv::WriterBuilder::new()
                    .delimiter(delimiter)
                    .from_writer(&mut buf);
                writer.write_record(["partno", "count"]).into_diagnostic()?;
                for (partno, count) in duplicates {
                    writer
                        .write_record([partno.to_string(), count.to_string()])
                        .into_diagnostic()?;
                }
                writer.flush().into_diagnostic()?;
            }
            emit_block(sink, &String::from_utf8_lossy(&buf));
        }
        OutputFormat::Id => {
            for partno in duplicates.keys() {
                sink.emit(&partno.to_string());
            }
        }
        _ => {
            for (partno, count) in duplicates {
                sink.emit(&format!("{} => {} times", partno, count));
            }
        }
    }
    Ok(())
}
