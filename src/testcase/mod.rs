//! Test-case lifecycle: index ranges, per-index files and rendering

mod range;
mod writer;
mod render;

pub use range::TestRange;
pub use writer::CaseWriter;
pub use render::write_case;

use crate::config::GeneratorConfig;
use crate::random::{case_seed, seeded};
use crate::Result;
use std::io::Write;
use std::path::PathBuf;

/// Write one case file per index in `range`
///
/// Every index gets its own generator seeded from `base_seed` and the index,
/// so any single case can be regenerated without the others.
pub fn generate_range(
    config: &GeneratorConfig,
    range: TestRange,
    writer: &CaseWriter,
    base_seed: u64,
) -> Result<Vec<PathBuf>> {
    config.validate()?;

    let mut written = Vec::with_capacity(range.len());
    for index in range {
        let _span = tracing::debug_span!("test_case", index).entered();

        let mut rng = seeded(case_seed(base_seed, index));
        let mut out = writer.begin_test_case(index)?;
        write_case(config, &mut rng, &mut out)?;
        out.flush()?;

        tracing::debug!(path = %writer.path_for(index).display(), "wrote test case");
        written.push(writer.path_for(index));
    }
    Ok(written)
}
