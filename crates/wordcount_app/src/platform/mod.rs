pub(crate) mod app;
pub(crate) mod config;
pub(crate) mod prompt;

pub(crate) use app::run_app;
