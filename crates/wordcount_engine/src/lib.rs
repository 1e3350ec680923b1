//! Wordcount engine: input decoding, report rendering and file output.
mod decode;
mod job;
mod persist;
mod render;

pub use decode::{decode_text, DecodedText, InputLines};
pub use job::{run_job, JobError, JobSettings, JobSummary, WordCountJob};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use render::{render_report, RenderOptions, ReportError};
