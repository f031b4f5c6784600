use crate::areas::workbench::Workbench;
use crate::artifacts::render::standalone_page;
use anyhow::Context;
use std::path::Path;

impl Workbench {
    /// Renders both documents side by side as an HTML page, to `output` or
    /// to the writer.
    pub async fn html(&self, left: &Path, right: &Path, output: Option<&Path>) -> anyhow::Result<()> {
        let result = self.compare_files(left, right).await?;
        let page = standalone_page(
            result.formatted(),
            &left.display().to_string(),
            &right.display().to_string(),
        );

        match output {
            Some(path) => {
                tokio::fs::write(path, page)
                    .await
                    .with_context(|| format!("failed to write {}", path.display()))?;
                tracing::info!(path = %path.display(), "wrote HTML diff");
            }
            None => write!(self.writer(), "{page}")?,
        }

        Ok(())
    }
}
