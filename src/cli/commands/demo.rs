//! `mechworks demo` command - the sample robot session
//!
//! Builds (or loads) a robot and exercises every public operation in turn:
//! display, flight, work, duplicate detection, the price filter, grouping
//! by type, moving the movable parts, and removal.

use miette::Result;

use crate::cli::commands::utils::Session;
use crate::cli::helpers::section;
use crate::cli::table::{write_groups, write_parts};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::capability::{Displayable, Flyable};
use crate::core::sink::{ConsoleSink, Sink};
use crate::entities::machine::PartAggregate;
use crate::entities::part::{MovablePart, Part, PartNo};
use crate::entities::robot::Robot;

#[derive(clap::Args, Debug)]
pub struct DemoArgs {
    /// Price threshold for the expensive-part query
    #[arg(long, default_value_t = 200.0, allow_negative_numbers = true)]
    pub threshold: f64,

    /// Part number removed at the end of the session
    #[arg(long, default_value_t = 333, allow_negative_numbers = true)]
    pub remove: PartNo,
}

/// The sample robot: MTX / M1X / F-16 at 10000 with eleven parts
pub fn demo_robot() -> Robot {
    let mut robo = Robot::new("MTX", "M1X", "F-16", 10000);
    robo.add_part(Part::new(111, 100.0));
    robo.add_part(Part::new(222, 200.0));
    robo.add_part(Part::new(333, 300.0));
    robo.add_part(Part::new(222, 300.0));
    robo.add_part(MovablePart::new(555, 300.0, "TypeA"));
    robo.add_part(Part::new(111, 100.0));
    robo.add_part(Part::new(111, 100.0));
    robo.add_part(MovablePart::new(777, 300.0, "TypeB"));
    robo.add_part(MovablePart::new(655, 300.0, "TypeA"));
    robo.add_part(MovablePart::new(755, 300.0, "TypeA"));
    robo.add_part(MovablePart::new(977, 300.0, "TypeB"));
    robo
}

pub fn run(args: DemoArgs, global: &GlobalOpts) -> Result<()> {
    let mut session = Session::open(global)?;
    run_session(&mut session.robot, &args, global.quiet, &mut ConsoleSink)
}

/// Run the session against `robo`, writing everything to `sink`
pub fn run_session(
    robo: &mut Robot,
    args: &DemoArgs,
    quiet: bool,
    sink: &mut dyn Sink,
) -> Result<()> {
    robo.display(sink);
    sink.emit("");

    section(sink, "Robot test flight----", quiet);
    robo.fly(sink);

    section(sink, "Robot dowork() test ----", quiet);
    robo.do_work(sink);

    section(sink, "Duplicated part list----", quiet);
    for (partno, count) in robo.find_duplicated_parts() {
        sink.emit(&format!("{} => {} times", partno, count));
    }

    section(sink, "Expensive part list----", quiet);
    write_parts(&robo.get_expensive_parts(args.threshold), OutputFormat::Text, sink)?;

    section(sink, "Movable part list----", quiet);
    write_groups(&robo.get_movable_parts_by_type(), OutputFormat::Text, sink)?;

    section(sink, "Ask movable to move----", quiet);
    for movable in robo.get_movable_parts().into_iter().filter_map(|p| p.as_movable()) {
        movable.move_part(sink);
    }

    section(sink, "Test remove_part() ----", quiet);
    robo.remove_part(args.remove);
    if robo.iter().any(|part| part.partno() == args.remove) {
        sink.emit(&format!("Found {}", args.remove));
    }

    section(sink, "Parts list after remove:", quiet);
    robo.display_parts(sink);
    Ok(())
}
