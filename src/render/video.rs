use crate::error::{PolyevoError, Result};
use std::path::PathBuf;
use std::process::Command;

/// Stitches a population's frames into a single movie
pub trait VideoAssembler {
    fn assemble(&mut self, population_id: u64) -> Result<PathBuf>;
}

#[derive(Debug, Clone)]
pub struct FfmpegAssembler {
    pub program: String,
    pub output_dir: PathBuf,
    pub frames_per_sec: u32,
    pub fidelity: u32,
    pub remove_frames: bool,
}

impl FfmpegAssembler {
    /// Delete every `{population_id}_*.png` frame in the output directory
    pub fn delete_frames(&self, population_id: u64) -> Result<usize> {
        let prefix = format!("{}_", population_id);
        let mut removed = 0;
        for entry in std::fs::read_dir(&self.output_dir)? {
            let path = entry?.path();
            let is_frame = path
                .file_name()
                .and_then(|name| name.to_str())
                .map(|name| name.starts_with(&prefix) && name.ends_with(".png"))
                .unwrap_or(false);
            if is_frame {
                std::fs::remove_file(&path)?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}

impl VideoAssembler for FfmpegAssembler {
    fn assemble(&mut self, population_id: u64) -> Result<PathBuf> {
        let movie = format!("{}.mp4", population_id);
        let output = Command::new(&self.program)
            .arg("-r")
            .arg(self.frames_per_sec.to_string())
            .arg("-i")
            .arg(format!("{}_%d.png", population_id))
            .args(["-pix_fmt", "yuv420p"])
            .arg("-r")
            .arg(self.fidelity.to_string())
            .arg(&movie)
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

        if self.remove_frames {
            let removed = self.delete_frames(population_id)?;
            log::debug!("Removed {} frames", removed);
        }

        Ok(self.output_dir.join(movie))
    }
}
