use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Context;
use wc_logging::{wc_error, wc_info};
use wordcount_engine::{run_job, JobSettings, JobSummary, WordCountJob};

use super::config::load_config;
use super::prompt::prompt_paths;

pub(crate) fn run_app(config_path: &Path) -> anyhow::Result<()> {
    let config = load_config(config_path);
    wc_logging::initialize(config.log, config.level());
    wc_info!("Starting wordcount with config {:?}", config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut input = stdin.lock();
    let mut out = stdout.lock();
    run_interactive(&mut input, &mut out, &config.job_settings())?;
    Ok(())
}

/// Prompts for both paths, runs the job, and reports `Done.`.
pub(crate) fn run_interactive<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    settings: &JobSettings,
) -> anyhow::Result<JobSummary> {
    let (input_path, output_path) = prompt_paths(input, out)?;
    let job = WordCountJob::new(&input_path, &output_path);

    let summary = run_job(&job, settings)
        .inspect_err(|err| wc_error!("Run failed for {:?}: {}", input_path, err))
        .with_context(|| format!("counting words from {input_path:?} into {output_path:?}"))?;

    writeln!(out, "Done.")?;
    out.flush()?;
    Ok(summary)
}
