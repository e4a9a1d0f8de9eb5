//! Output sink - the line-oriented boundary every `display`, `move_part`,
//! `fly` and `do_work` writes through

/// Receives human-readable lines
pub trait Sink {
    fn emit(&mut self, line: &str);
}

/// Writes each line to stdout
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn emit(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Collects lines in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BufferSink {
    lines: Vec<String>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines emitted so far, in order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// All lines joined with `\n`
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

impl Sink for BufferSink {
    fn emit(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }
}

impl Sink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_sink_keeps_order() {
        let mut sink = BufferSink::new();
        sink.emit("first");
        sink.emit("");
        sink.emit("third");

        assert_eq!(sink.lines(), ["first", "", "third"]);
        assert_eq!(sink.text(), "first\n\nthird");
    }

    #[test]
    fn test_buffer_sink_clear() {
        let mut sink = BufferSink::new();
        sink.emit("line");
        sink.clear();
        assert!(sink.lines().is_empty());
    }

    #[test]
    fn test_vec_sink() {
        let mut lines: Vec<String> = Vec::new();
        lines.emit("hello");
        assert_eq!(lines, vec!["hello".to_string()]);
    }
}
