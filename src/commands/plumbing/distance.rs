use crate::areas::comparator::Comparator;
use crate::artifacts::diff::engine::edit_distance;
use std::io::Write;
use std::path::Path;

impl Comparator {
    pub async fn distance(&self, old_file: &Path, new_file: &Path) -> anyhow::Result<()> {
        let old_text = self.workspace().read_text(old_file).await?;
        let new_text = self.workspace().read_text(new_file).await?;

        writeln!(self.writer(), "{}", edit_distance(&old_text, &new_text))?;

        Ok(())
    }
}
