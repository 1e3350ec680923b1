use std::fs;
use std::path::{Path, PathBuf};

use wc_logging::{wc_info, wc_warn};
use wordcount_core::{count_words, ordered_words, SeparatorSet};

use crate::decode::decode_text;
use crate::persist::{AtomicFileWriter, PersistError};
use crate::render::{render_report, RenderOptions, ReportError};

/// One invocation: which file to read, where to write the report, and the
/// name shown in the report heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCountJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub title: String,
}

impl WordCountJob {
    /// Job whose report title is the input path exactly as given.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        let input = input.into();
        let title = input.display().to_string();
        Self {
            input,
            output: output.into(),
            title,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct JobSettings {
    pub separators: SeparatorSet,
    pub render: RenderOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobSummary {
    pub output_path: PathBuf,
    pub encoding_label: String,
    pub line_count: usize,
    pub distinct_words: usize,
    pub total_words: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("failed to read input {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("report error: {0}")]
    Report(#[from] ReportError),
    #[error("persist error: {0}")]
    Persist(#[from] PersistError),
}

/// Runs the whole pipeline once: read, count, order, render, write.
///
/// The report is the only file written, and only after every earlier stage
/// succeeded.
pub fn run_job(job: &WordCountJob, settings: &JobSettings) -> Result<JobSummary, JobError> {
    let bytes = read_input(&job.input)?;
    let decoded = decode_text(&bytes);
    if decoded.detected {
        wc_warn!(
            "Input {:?} is not UTF-8; decoded as {}",
            job.input,
            decoded.encoding_label
        );
    }
    wc_info!(
        "Read {} bytes from {:?} ({})",
        bytes.len(),
        job.input,
        decoded.encoding_label
    );

    let counts = count_words(decoded.lines(), &settings.separators);
    let ordered = ordered_words(&counts);
    wc_info!(
        "Counted {} words, {} distinct",
        counts.total(),
        counts.len()
    );

    let mut report = Vec::new();
    render_report(&mut report, &job.title, &counts, ordered, &settings.render)?;
    let output_path = AtomicFileWriter::new(&job.output).write(&report)?;
    wc_info!("Wrote report to {:?}", output_path);

    Ok(JobSummary {
        output_path,
        encoding_label: decoded.encoding_label.clone(),
        line_count: decoded.lines().count(),
        distinct_words: counts.len(),
        total_words: counts.total(),
    })
}

fn read_input(path: &Path) -> Result<Vec<u8>, JobError> {
    fs::read(path).map_err(|source| JobError::Io {
        path: path.to_path_buf(),
        source,
    })
}
