pub mod dump;
pub mod plotter;
pub mod video;
pub mod recorder;
pub mod summary;

pub use dump::write_chromosome_dump;
pub use plotter::{CommandPlotter, FramePlotter, PlotRequest};
pub use video::{FfmpegAssembler, VideoAssembler};
pub use recorder::Recorder;
pub use summary::write_summary;
