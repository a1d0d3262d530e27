/// Text blocks shown for the current search, newest last.
///
/// There is no cap on how many blocks accumulate; the board is cleared when
/// the next search begins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultBoard {
    blocks: Vec<String>,
}

impl ResultBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
    }

    pub fn append(
        &mut self,
        block: impl Into<String>,
    ) {
        self.blocks.push(block.into());
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Blocks separated by a blank line, with a trailing newline when non-empty.
    pub fn render(&self) -> String {
        if self.blocks.is_empty() {
            return String::new();
        }
        let mut out = self.blocks.join("\n\n");
        out.push('\n');
        out
    }
}
