use super::{
    dump::write_chromosome_dump,
    plotter::{CommandPlotter, FramePlotter, PlotRequest},
    video::{FfmpegAssembler, VideoAssembler},
};
use crate::config::RenderConfig;
use crate::engines::generation::Population;
use crate::error::Result;
use rand::Rng;
use std::path::PathBuf;

/// Plots each generation at most once, then assembles the frames.
pub struct Recorder {
    dump_path: PathBuf,
    plotter: Box<dyn FramePlotter>,
    assembler: Box<dyn VideoAssembler>,
    last_graphed: Option<(u64, usize)>,
    frames: usize,
}

impl Recorder {
    pub fn new(
        dump_path: impl Into<PathBuf>,
        plotter: Box<dyn FramePlotter>,
        assembler: Box<dyn VideoAssembler>,
    ) -> Self {
        Self {
            dump_path: dump_path.into(),
            plotter,
            assembler,
            last_graphed: None,
            frames: 0,
        }
    }

    /// Command-line plotter and ffmpeg, both working inside `output_dir`
    pub fn from_config(config: &RenderConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.output_dir)?;
        let output_dir = std::fs::canonicalize(&config.output_dir)?;

        let plotter = CommandPlotter::new(&config.plot_program, &config.plot_script, &output_dir)?;
        let assembler = FfmpegAssembler {
            program: config.video_program.clone(),
            output_dir: output_dir.clone(),
            frames_per_sec: config.frames_per_sec,
            fidelity: config.fidelity,
            remove_frames: config.remove_frames,
        };

        Ok(Self::new(
            output_dir.join(&config.dump_file),
            Box::new(plotter),
            Box::new(assembler),
        ))
    }

    /// Number of frames plotted so far
    pub fn frames(&self) -> usize {
        self.frames
    }

    /// Dump and plot the current generation. Returns `false` when this
    /// generation was already plotted or the plotter failed.
    pub fn record<R: Rng>(&mut self, population: &Population<R>) -> Result<bool> {
        let key = (population.id(), population.generation_index());
        if self.last_graphed == Some(key) {
            log::warn!("Generation {} has already been graphed", key.1);
            return Ok(false);
        }

        write_chromosome_dump(&self.dump_path, population.chromosomes())?;

        let request = PlotRequest {
            dump_path: self.dump_path.clone(),
            population_id: population.id(),
            generation: population.generation_index(),
            bound_x: population.bound_x(),
            bound_y: population.bound_y(),
        };
        if let Err(e) = self.plotter.plot(&request) {
            log::warn!("Failed to plot {}: {}", request.frame_name(), e);
            return Ok(false);
        }

        self.last_graphed = Some(key);
        self.frames += 1;
        Ok(true)
    }

    /// Assemble the movie; `None` when nothing was plotted or assembly failed
    pub fn finish(&mut self, population_id: u64) -> Option<PathBuf> {
        if self.frames == 0 {
            log::warn!("No frames plotted, skipping video");
            return None;
        }
        match self.assembler.assemble(population_id) {
            Ok(movie) => {
                log::info!("Your video is saved as {}", movie.display());
                Some(movie)
            }
            Err(e) => {
                log::warn!("Failed to assemble video: {}", e);
                None
            }
        }
    }
}
