//! Rendering: the output sink an [`Expr`](super::Expr) writes into, and
//! the options controlling it.

use serde::{Deserialize, Serialize};

/// Line separator placed between clauses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Options for a single render pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub line_ending: LineEnding,
}

impl RenderConfig {
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }
}

/// Text buffer written by one render pass.
#[derive(Debug)]
pub struct Sink {
    buf: String,
    line_ending: LineEnding,
    lines: usize,
}

impl Sink {
    pub(crate) fn new(config: &RenderConfig) -> Self {
        Self {
            buf: String::new(),
            line_ending: config.line_ending,
            lines: 0,
        }
    }

    /// Start a new clause: separate it from earlier content, if any.
    pub fn begin_clause(&mut self) {
        if !self.is_empty() {
            self.buf.push_str(self.line_ending.as_str());
        }
        self.lines += 1;
    }

    /// Append text to the current line.
    pub fn push_str(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// True until something has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Clauses started so far.
    pub fn clauses(&self) -> usize {
        self.lines
    }

    pub(crate) fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_clause_has_no_separator() {
        let mut sink = Sink::new(&RenderConfig::default());
        sink.begin_clause();
        sink.push_str("A");
        sink.begin_clause();
        sink.push_str("B");
        assert_eq!(sink.clauses(), 2);
        assert_eq!(sink.finish(), "A\nB");
    }

    #[test]
    fn test_empty_clause_adds_no_separator() {
        let mut sink = Sink::new(&RenderConfig::default());
        sink.begin_clause();
        assert!(sink.is_empty());
        sink.begin_clause();
        sink.push_str("A");
        assert!(!sink.is_empty());
        assert_eq!(sink.clauses(), 2);
        assert_eq!(sink.finish(), "A");
    }

    #[test]
    fn test_crlf() {
        let config = RenderConfig::default().with_line_ending(LineEnding::CrLf);
        let mut sink = Sink::new(&config);
        for clause in ["A", "B"] {
            sink.begin_clause();
            sink.push_str(clause);
        }
        assert_eq!(sink.finish(), "A\r\nB");
    }

    #[test]
    fn test_config_deserializes() {
        let config: RenderConfig = serde_json::from_str(r#"{"line_ending":"crlf"}"#).unwrap();
        assert_eq!(config.line_ending, LineEnding::CrLf);
        let config: RenderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RenderConfig::default());
    }
}
