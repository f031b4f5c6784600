use crate::areas::workbench::Workbench;
use crate::artifacts::alignment::{Segment, Side};
use crate::artifacts::diff::Operation;
use colored::Colorize;
use std::path::Path;

impl Workbench {
    /// Prints the left document with deletions and insertions marked inline.
    pub async fn diff(&self, left: &Path, right: &Path) -> anyhow::Result<()> {
        let result = self.compare_files(left, right).await?;

        let mut ends_with_newline = true;
        for segment in result.segments() {
            let text = match segment.operation() {
                Operation::Equal | Operation::Delete => segment.text_on(Side::Left),
                Operation::Insert => segment.text_on(Side::Right),
            };
            if text.is_empty() {
                continue;
            }

            match (segment.operation(), self.color()) {
                (Operation::Equal, _) => write!(self.writer(), "{text}")?,
                (Operation::Delete, true) => write!(self.writer(), "{}", text.red().strikethrough())?,
                (Operation::Insert, true) => write!(self.writer(), "{}", text.green().underline())?,
                (Operation::Delete, false) => write!(self.writer(), "[-{text}-]")?,
                (Operation::Insert, false) => write!(self.writer(), "{{+{text}+}}")?,
            }
            ends_with_newline = text.ends_with('\n');
        }

        if !ends_with_newline {
            writeln!(self.writer())?;
        }

        Ok(())
    }
}
