use crate::areas::workbench::Workbench;
use std::path::Path;

impl Workbench {
    /// Dumps the whole comparison result as JSON for other tools.
    pub async fn json(&self, left: &Path, right: &Path) -> anyhow::Result<()> {
        let result = self.compare_files(left, right).await?;

        serde_json::to_writer_pretty(&mut *self.writer(), &result)?;
        writeln!(self.writer())?;

        Ok(())
    }
}
