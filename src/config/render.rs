use super::traits::ConfigSection;
use crate::error::PolyevoError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for the external plotting and video tools
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub enabled: bool,
    pub dump_file: PathBuf,
    pub output_dir: PathBuf,
    pub plot_program: String,
    pub plot_script: String,
    pub video_program: String,
    pub frames_per_sec: u32,
    pub fidelity: u32,
    pub remove_frames: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary_file: Option<PathBuf>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            dump_file: PathBuf::from("exprs.txt"),
            output_dir: PathBuf::from("."),
            plot_program: "python".to_string(),
            plot_script: "graph_script.py".to_string(),
            video_program: "ffmpeg".to_string(),
            frames_per_sec: 4,
            fidelity: 12,
            remove_frames: true,
            summary_file: None,
        }
    }
}

impl ConfigSection for RenderConfig {
    fn section_name() -> &'static str {
        "render"
    }

    fn validate(&self) -> Result<(), PolyevoError> {
        if self.frames_per_sec == 0 {
            return Err(PolyevoError::Configuration(
                "Frames per second must be positive".to_string(),
            ));
        }
        if self.fidelity == 0 {
            return Err(PolyevoError::Configuration(
                "Fidelity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
