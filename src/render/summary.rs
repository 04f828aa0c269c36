use crate::error::Result;
use crate::types::RunSummary;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub fn write_summary<P: AsRef<Path>>(path: P, summary: &RunSummary) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, summary)?;
    writer.flush()?;
    Ok(())
}
