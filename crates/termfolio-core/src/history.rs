use crate::actions::Direction;

/// Submitted lines, oldest first, with a recall cursor.
///
/// `cursor == len()` is the live edit line. Recall clamps at both ends.
#[derive(Debug, Clone, Default)]
pub struct HistoryBuffer {
    entries: Vec<String>,
    cursor: usize,
}

impl HistoryBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = self.entries.len();
    }

    /// Moves the cursor one step and returns the line under it, or `""` at
    /// the live edit line. At either bound the cursor stays put.
    pub fn navigate(&mut self, direction: Direction) -> &str {
        match direction {
            Direction::Backward => self.cursor = self.cursor.saturating_sub(1),
            Direction::Forward => {
                if self.cursor < self.entries.len() {
                    self.cursor += 1;
                }
            }
        }
        self.current()
    }

    pub fn current(&self) -> &str {
        self.entries.get(self.cursor).map_or("", String::as_str)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_at_live_line(&self) -> bool {
        self.cursor == self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}
