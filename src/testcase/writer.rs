//! Per-index output files

use crate::Result;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Opens `<out_dir>/<index>.<extension>` for each test case
#[derive(Clone, Debug)]
pub struct CaseWriter {
    out_dir: PathBuf,
    extension: String,
}

impl CaseWriter {
    /// Create a writer rooted at `out_dir`
    pub fn new(out_dir: impl Into<PathBuf>, extension: impl Into<String>) -> Self {
        CaseWriter {
            out_dir: out_dir.into(),
            extension: extension.into(),
        }
    }

    /// Output directory
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// File a test index is written to
    pub fn path_for(&self, index: u32) -> PathBuf {
        self.out_dir.join(format!("{index}.{}", self.extension))
    }

    /// Start test `index`: create (or truncate) its file and hand back a
    /// buffered writer for the case body
    pub fn begin_test_case(&self, index: u32) -> Result<BufWriter<File>> {
        fs::create_dir_all(&self.out_dir)?;
        let file = File::create(self.path_for(index))?;
        Ok(BufWriter::new(file))
    }
}
