//! Part list formatting for CLI commands
//!
//! Every part query funnels through [`write_parts`], so all of them honour
//! the global `--format` flag the same way. `Text` reproduces each part's
//! own `display` output; the other formats are tabular.

use indexmap::IndexMap;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::format_price;
use crate::cli::OutputFormat;
use crate::core::capability::Displayable;
use crate::core::sink::Sink;
use crate::entities::part::{MovablePart, PartEntry, PartNo};

/// Flat record used by the tabular formats
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartRow {
    pub partno: PartNo,
    pub price: f64,
    pub kind: &'static str,
    #[serde(rename = "type")]
    pub part_type: String,
}

impl From<&MovablePart> for PartRow {
    fn from(part: &MovablePart) -> Self {
        Self {
            partno: part.partno(),
            price: part.price(),
            kind: "movable",
            part_type: part.part_type().to_string(),
        }
    }
}

impl From<&PartEntry> for PartRow {
    fn from(entry: &PartEntry) -> Self {
        Self {
            partno: entry.partno(),
            price: entry.price(),
            kind: entry.kind(),
            part_type: entry.part_type().unwrap_or_default().to_string(),
        }
    }
}

const HEADERS: [&str; 4] = ["PARTNO", "PRICE", "KIND", "TYPE"];

/// Render `parts` in `format`, sending each output line to `sink`
pub fn write_parts(parts: &[&PartEntry], format: OutputFormat, sink: &mut dyn Sink) -> Result<()> {
    match format {
        OutputFormat::Auto | OutputFormat::Text => {
            for part in parts {
                part.display(sink);
            }
            Ok(())
        }
        _ => {
            let rows: Vec<PartRow> = parts.iter().map(|part| PartRow::from(*part)).collect();
            write_rows(&rows, format, sink)
        }
    }
}

/// Render movable parts grouped by type tag
pub fn write_groups(
    groups: &IndexMap<&str, Vec<&MovablePart>>,
    format: OutputFormat,
    sink: &mut dyn Sink,
) -> Result<()> {
    match format {
        OutputFormat::Auto | OutputFormat::Text => {
            for (part_type, parts) in groups {
                sink.emit(&format!("type = {}", part_type));
                for part in parts {
                    part.display(sink);
                }
                sink.emit("");
            }
            Ok(())
        }
        OutputFormat::Json | OutputFormat::Yaml => {
            let grouped: IndexMap<&str, Vec<PartRow>> = groups
                .iter()
                .map(|(part_type, parts)| {
                    (*part_type, parts.iter().map(|part| PartRow::from(*part)).collect())
                })
                .collect();
            let text = if format == OutputFormat::Json {
                serde_json::to_string_pretty(&grouped).into_diagnostic()?
            } else {
                serde_yml::to_string(&grouped).into_diagnostic()?
            };
            emit_block(sink, &text);
            Ok(())
        }
        // Tabular formats already carry the type column
        _ => {
            let rows: Vec<PartRow> = groups
                .values()
                .flatten()
                .map(|part| PartRow::from(*part))
                .collect();
            write_rows(&rows, format, sink)
        }
    }
}

fn write_rows(rows: &[PartRow], format: OutputFormat, sink: &mut dyn Sink) -> Result<()> {
    match format {
        OutputFormat::Id => {
            for row in rows {
                sink.emit(&row.partno.to_string());
            }
        }
        OutputFormat::Tsv => {
            sink.emit(&HEADERS.join("\t"));
            for row in rows {
                sink.emit(&format!(
                    "{}\t{}\t{}\t{}",
                    row.partno,
                    format_price(row.price),
                    row.kind,
                    row.part_type
                ));
            }
        }
        OutputFormat::Csv => {
            let mut buf = Vec::new();
            {
                let mut writer = csv::Writer::from_writer(&mut buf);
                for row in rows {
                    writer.serialize(row).into_diagnostic()?;
                }
                writer.flush().into_diagnostic()?;
            }
            emit_block(sink, &String::from_utf8_lossy(&buf));
        }
        OutputFormat::Json => {
            emit_block(sink, &serde_json::to_string_pretty(rows).into_diagnostic()?);
        }
        OutputFormat::Yaml => {
            emit_block(sink, &serde_yml::to_string(rows).into_diagnostic()?);
        }
        OutputFormat::Md => {
            let mut builder = Builder::default();
            builder.push_record(HEADERS);
            for row in rows {
                builder.push_record([
                    row.partno.to_string(),
                    format_price(row.price),
                    row.kind.to_string(),
                    row.part_type.clone(),
                ]);
            }
            emit_block(sink, &builder.build().with(Style::markdown()).to_string());
        }
        OutputFormat::Auto | OutputFormat::Text => {
            for row in rows {
                sink.emit(&format!("partno = {}", row.partno));
                sink.emit(&format!("price = {}", row.price));
            }
        }
    }
    Ok(())
}

/// Emit a multi-line block line by line, dropping one trailing newline
pub fn emit_block(sink: &mut dyn Sink, text: &str) {
    for line in text.strip_suffix('\n').unwrap_or(text).split('\n') {
        sink.emit(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sink::BufferSink;
    use crate::entities::part::Part;

    fn sample() -> Vec<PartEntry> {
        vec![
            Part::new(111, 100.0).into(),
            MovablePart::new(555, 300.5, "TypeA").into(),
        ]
    }

    fn render(format: OutputFormat) -> Vec<String> {
        let parts = sample();
        let refs: Vec<&PartEntry> = parts.iter().collect();
        let mut sink = BufferSink::new();
        write_parts(&refs, format, &mut sink).unwrap();
        sink.into_lines()
    }

    #[test]
    fn test_text_uses_part_display() {
        assert_eq!(
            render(OutputFormat::Text),
            vec!["partno = 111", "price = 100", "partno = 555", "price = 300.5", "type = TypeA", ""]
        );
    }

    #[test]
    fn test_id_format() {
        assert_eq!(render(OutputFormat::Id), vec!["111", "555"]);
    }

    #[test]
    fn test_tsv_format() {
        assert_eq!(
            render(OutputFormat::Tsv),
            vec![
                "PARTNO\tPRICE\tKIND\tTYPE",
                "111\t100.00\tplain\t",
                "555\t300.50\tmovable\tTypeA",
            ]
        );
    }

    #[test]
    fn test_csv_format() {
        assert_eq!(
            render(OutputFormat::Csv),
            vec!["partno,price,kind,type", "111,100.0,plain,", "555,300.5,movable,TypeA"]
        );
    }

    #[test]
    fn test_json_format() {
        let text = render(OutputFormat::Json).join("\n");
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[1]["partno"], 555);
        assert_eq!(value[1]["type"], "TypeA");
        assert_eq!(value[0]["kind"], "plain");
    }

    #[test]
    fn test_markdown_format() {
        let lines = render(OutputFormat::Md);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("PARTNO"));
        assert!(lines[3].contains("TypeA"));
    }

    #[test]
    fn test_groups_text() {
        let parts = sample();
        let mut groups: IndexMap<&str, Vec<&MovablePart>> = IndexMap::new();
        groups.insert("TypeA", vec![parts[1].as_movable_part().unwrap()]);

        let mut sink = BufferSink::new();
        write_groups(&groups, OutputFormat::Text, &mut sink).unwrap();
        assert_eq!(
            sink.lines(),
            ["type = TypeA", "partno = 555", "price = 300.5", "type = TypeA", "", ""]
        );
    }
}
