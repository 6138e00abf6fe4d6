use crate::areas::workspace::Workspace;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// High-level façade over the diff pipeline.
///
/// Owns the workspace used to acquire file contents and the writer all
/// command output goes through. The commands themselves live in
/// `crate::commands` as `impl Comparator` blocks.
pub struct Comparator {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    workspace: Workspace,
}

impl Comparator {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let path = Path::new(path).canonicalize()?;
        let workspace = Workspace::new(path.clone().into_boxed_path());

        Ok(Comparator {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            workspace,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
