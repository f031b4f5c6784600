use crate::areas::workbench::Workbench;
use crate::artifacts::alignment::Side;
use crate::artifacts::render::DiffLineKind;
use colored::Colorize;
use std::path::Path;

impl Workbench {
    /// Prints one side as numbered lines: own line number, aligned line in
    /// the other document, then the marker and content.
    pub async fn lines(&self, left: &Path, right: &Path, side: Side) -> anyhow::Result<()> {
        let result = self.compare_files(left, right).await?;

        for line in result.diff_lines(side) {
            let rendered = line.to_string();
            match line.kind {
                DiffLineKind::Context => writeln!(self.writer(), "{rendered}")?,
                DiffLineKind::Deletion => writeln!(self.writer(), "{}", rendered.red())?,
                DiffLineKind::Addition => writeln!(self.writer(), "{}", rendered.green())?,
            }
        }

        Ok(())
    }
}
