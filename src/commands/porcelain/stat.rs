use crate::areas::workbench::Workbench;
use std::path::Path;

fn plural(count: usize, noun: &str) -> String {
    match count {
        1 => format!("{count} {noun}"),
        _ => format!("{count} {noun}s"),
    }
}

impl Workbench {
    pub async fn stat(&self, left: &Path, right: &Path) -> anyhow::Result<()> {
        let result = self.compare_files(left, right).await?;
        let stats = result.stats();

        writeln!(self.writer(), "{} -> {}", left.display(), right.display())?;
        if result.is_identical() {
            writeln!(self.writer(), "no differences")?;
            return Ok(());
        }

        writeln!(
            self.writer(),
            "{} removed, {} added",
            plural(stats.removed_lines, "line"),
            plural(stats.added_lines, "line")
        )?;
        writeln!(
            self.writer(),
            "{} deleted, {} inserted in {}",
            plural(stats.deleted_chars, "char"),
            plural(stats.inserted_chars, "char"),
            plural(stats.edits, "edit")
        )?;

        Ok(())
    }
}
