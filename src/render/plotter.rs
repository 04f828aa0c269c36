use crate::error::{PolyevoError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Everything the plotting tool needs to render one generation
#[derive(Debug, Clone, PartialEq)]
pub struct PlotRequest {
    pub dump_path: PathBuf,
    pub population_id: u64,
    pub generation: usize,
    pub bound_x: f64,
    pub bound_y: f64,
}

impl PlotRequest {
    /// `{population_id}_{generation}.png`
    pub fn frame_name(&self) -> String {
        format!("{}_{}.png", self.population_id, self.generation)
    }
}

pub trait FramePlotter {
    fn plot(&mut self, request: &PlotRequest) -> Result<()>;
}

/// Runs `<program> <script> <dump> <id> <generation> <bound_x> <bound_y>` in `output_dir`
#[derive(Debug, Clone)]
pub struct CommandPlotter {
    program: String,
    script: PathBuf,
    output_dir: PathBuf,
}

impl CommandPlotter {
    pub fn new(program: impl Into<String>, script: impl AsRef<Path>, output_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            program: program.into(),
            script: std::path::absolute(script)?,
            output_dir: output_dir.into(),
        })
    }
}

impl FramePlotter for CommandPlotter {
    fn plot(&mut self, request: &PlotRequest) -> Result<()> {
        log::debug!(
            "{} {} {} {} {} {} {}",
            self.program,
            self.script.display(),
            request.dump_path.display(),
            request.population_id,
            request.generation,
            request.bound_x,
            request.bound_y
        );

        let output = Command::new(&self.program)
            .arg(&self.script)
            .arg(&request.dump_path)
            .arg(request.population_id.to_string())
            .arg(request.generation.to_string())
            .arg(request.bound_x.to_string())
            .arg(request.bound_y.to_string())
            .current_dir(&self.output_dir)
            .output()?;

        if !output.status.success() {
            return Err(PolyevoError::Collaborator(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        Ok(())
    }
}
