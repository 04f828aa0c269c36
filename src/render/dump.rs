use crate::engines::generation::Chromosome;
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// One `c0*x**0+c1*x**1+...` line per chromosome
pub fn write_chromosome_dump<P: AsRef<Path>>(path: P, chromosomes: &[Chromosome]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for chromosome in chromosomes {
        writeln!(writer, "{}", chromosome)?;
    }
    writer.flush()?;
    Ok(())
}
