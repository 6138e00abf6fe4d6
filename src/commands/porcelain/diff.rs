use crate::DiffEngineKind;
use crate::areas::comparator::Comparator;
use crate::artifacts::diff::change::Change;
use crate::artifacts::diff::engine::engine_for;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct DiffOptions {
    pub engine: DiffEngineKind,
    pub json: bool,
}

impl Comparator {
    pub async fn diff(
        &self,
        old_file: &Path,
        new_file: &Path,
        opts: &DiffOptions,
    ) -> anyhow::Result<()> {
        let old_text = self.workspace().read_text(old_file).await?;
        let new_text = self.workspace().read_text(new_file).await?;

        let changes = engine_for(opts.engine).changes(&old_text, &new_text);

        if opts.json {
            writeln!(self.writer(), "{}", serde_json::to_string_pretty(&changes)?)?;
            return Ok(());
        }

        writeln!(
            self.writer(),
            "{}",
            format!("--- {}", old_file.display()).bold()
        )?;
        writeln!(
            self.writer(),
            "{}",
            format!("+++ {}", new_file.display()).bold()
        )?;

        for change in &changes {
            self.print_change(change)?;
        }

        Ok(())
    }

    fn print_change(&self, change: &Change<String>) -> anyhow::Result<()> {
        let line = match change {
            Change::Equal { .. } => change.as_string().normal(),
            Change::Delete { .. } => change.as_string().red(),
            Change::Insert { .. } => change.as_string().green(),
            Change::Modify { .. } => change.as_string().yellow(),
        };

        writeln!(self.writer(), "{line}")?;

        Ok(())
    }
}
