//! Display sinks - text-bearing outputs for animated values

/// A text-bearing display element
///
/// The counter animator publishes its displayed value here once per frame
/// while running. Implementations decide where the text ends up (a DOM-like
/// element, a terminal cell, a test buffer).
pub trait DisplaySink {
    fn set_text(&mut self, text: &str);
}

/// An in-memory display sink
///
/// Keeps the latest text and counts how many times it was written, which is
/// exactly what the animation tests need.
#[derive(Debug, Default, Clone)]
pub struct TextBuffer {
    text: String,
    writes: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of times `set_text` has been called
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DisplaySink for TextBuffer {
    fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.writes += 1;
    }
}
