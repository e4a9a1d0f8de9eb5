//! `mechworks remove` command - remove parts by number

use console::style;
use miette::Result;

use crate::cli::commands::utils::Session;
use crate::cli::table::write_parts;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::sink::{ConsoleSink, Sink};
use crate::entities::machine::PartAggregate;
use crate::entities::part::{PartEntry, PartNo};
use crate::entities::robot::Robot;

#[derive(clap::Args, Debug)]
pub struct RemoveArgs {
    /// Part number to remove (every matching entry goes)
    #[arg(allow_negative_numbers = true)]
    pub partno: PartNo,
}

pub fn run(args: RemoveArgs, global: &GlobalOpts) -> Result<()> {
    let mut session = Session::open(global)?;
    remove(
        &mut session.robot,
        args.partno,
        session.format,
        global.quiet,
        &mut ConsoleSink,
    )
}

/// Remove `partno`, report how many entries went, then list the survivors
pub fn remove(
    robot: &mut Robot,
    partno: PartNo,
    format: OutputFormat,
    quiet: bool,
    sink: &mut dyn Sink,
) -> Result<()> {
    let removed = robot.remove_part(partno);
    if !quiet {
        let mark = if removed > 0 {
            style("✓").green()
        } else {
            style("·").dim()
        };
        eprintln!("{} Removed {} part(s) numbered {}", mark, removed, partno);
    }

    if matches!(format, OutputFormat::Text | OutputFormat::Auto) {
        robot.display_parts(sink);
        return Ok(());
    }
    let survivors: Vec<&PartEntry> = robot.iter().collect();
    write_parts(&survivors, format, sink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::demo::demo_robot;
    use crate::core::sink::BufferSink;

    #[test]
    fn test_remove_lists_survivors() {
        let mut robot = demo_robot();
        let mut sink = BufferSink::new();
        remove(&mut robot, 111, OutputFormat::Id, true, &mut sink).unwrap();

        assert_eq!(
            sink.lines(),
            ["222", "333", "222", "555", "777", "655", "755", "977"]
        );
    }

    #[test]
    fn test_remove_unknown_keeps_everything() {
        let mut robot = demo_robot();
        let mut sink = BufferSink::new();
        remove(&mut robot, 4242, OutputFormat::Text, true, &mut sink).unwrap();

        assert_eq!(robot.parts().len(), 11);
        assert_eq!(sink.lines()[0], "The machine has these parts:");
    }
}
