//! Incremental parser for `text/event-stream` bodies.
//!
//! Bytes arrive in arbitrary chunks; a frame ends at a blank line. Only
//! `data:` fields are kept, multi-line data is joined with `\n`.

#[derive(Debug, Default)]
pub struct SseParser {
    buffer: Vec<u8>,
    data: Vec<String>,
}

impl SseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk, returning the data of every frame it completes
    pub fn push(&mut self, chunk: &[u8]) -> Vec<String> {
        self.buffer.extend_from_slice(chunk);

        let mut frames = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|b| *b == b'\n') {
            let raw: Vec<u8> = self.buffer.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&raw);
            self.consume_line(line.trim_end_matches(['\n', '\r']), &mut frames);
        }
        frames
    }

    /// Flush a trailing frame not terminated by a blank line
    pub fn finish(&mut self) -> Option<String> {
        let mut frames = Vec::new();
        if !self.buffer.is_empty() {
            let raw = std::mem::take(&mut self.buffer);
            let line = String::from_utf8_lossy(&raw);
            self.consume_line(line.trim_end_matches('\r'), &mut frames);
        }
        self.consume_line("", &mut frames);
        frames.pop()
    }

    fn consume_line(&mut self, line: &str, frames: &mut Vec<String>) {
        if line.is_empty() {
            if !self.data.is_empty() {
                frames.push(self.data.join("\n"));
                self.data.clear();
            }
            return;
        }
        // Comments and fields other than `data` are ignored
        if let Some(value) = line.strip_prefix("data:") {
            self.data
                .push(value.strip_prefix(' ').unwrap_or(value).to_string());
        }
    }
}
