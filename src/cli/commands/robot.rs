//! `mechworks show`, `fly` and `work` commands - whole-robot operations

use miette::{IntoDiagnostic, Result};

use crate::cli::commands::utils::Session;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::capability::{Displayable, Flyable};
use crate::core::manifest::RobotManifest;
use crate::core::sink::{ConsoleSink, Sink};
use crate::entities::machine::PartAggregate;
use crate::entities::robot::Robot;

pub fn run_show(global: &GlobalOpts) -> Result<()> {
    let session = Session::open(global)?;
    show(&session.robot, session.format, &mut ConsoleSink)
}

pub fn run_fly(global: &GlobalOpts) -> Result<()> {
    let session = Session::open(global)?;
    session.robot.fly(&mut ConsoleSink);
    Ok(())
}

pub fn run_work(global: &GlobalOpts) -> Result<()> {
    let session = Session::open(global)?;
    session.robot.do_work(&mut ConsoleSink);
    Ok(())
}

/// Display the robot; JSON and YAML emit its manifest form instead
pub fn show(robot: &Robot, format: OutputFormat, sink: &mut dyn Sink) -> Result<()> {
    let text = match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&RobotManifest::from_robot(robot)).into_diagnostic()?
        }
        OutputFormat::Yaml => serde_yml::to_string(&RobotManifest::from_robot(robot)).into_diagnostic()?,
        _ => {
            robot.display(sink);
            return Ok(());
        }
    };
    for line in text.lines() {
        sink.emit(line);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sink::BufferSink;
    use crate::entities::part::Part;

    #[test]
    fn test_show_text() {
        let mut robot = Robot::new("MTX", "M1X", "F-16", 10000);
        robot.add_part(Part::new(1, 2.0));

        let mut sink = BufferSink::new();
        show(&robot, OutputFormat::Text, &mut sink).unwrap();
        assert_eq!(sink.lines().first().map(String::as_str), Some("cpu= M1X"));
        assert_eq!(sink.lines().last().map(String::as_str), Some("speed = 10000"));
    }

    #[test]
    fn test_show_yaml_is_a_manifest() {
        let mut robot = Robot::new("MTX", "M1X", "F-16", 10000);
        robot.add_part(Part::new(1, 2.0));

        let mut sink = BufferSink::new();
        show(&robot, OutputFormat::Yaml, &mut sink).unwrap();
        let parsed = RobotManifest::parse(&sink.text(), "show.yaml").unwrap();
        assert_eq!(parsed, RobotManifest::from_robot(&robot));
    }
}
