//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use spotlight_model::Corpus;

use super::config::Config;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (defaults if no config file exists).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = match env::current_dir() {
            Ok(cwd) => cwd,
            Err(e) => {
                eprintln!("error: cannot determine current directory: {e}");
                return Err(ExitCode::FAILURE);
            }
        };
        let config = match Config::load(&cwd) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: {e}");
                return Err(ExitCode::FAILURE);
            }
        };
        Ok(Self { cwd, config })
    }

    /// Loads the corpus, preferring the command-line path over the config.
    ///
    /// Errors are printed and mapped to a failure exit code so commands can
    /// use `?`-free early returns in the dispatch style.
    pub fn corpus(&self, flag: Option<&Path>) -> Result<Corpus, ExitCode> {
        let Some(path) = flag.or(self.config.corpus.as_deref()) else {
            eprintln!("error: no corpus file specified");
            eprintln!("Pass --corpus <FILE> or set 'corpus' in {}", super::config::CONFIG_FILENAME);
            return Err(ExitCode::FAILURE);
        };
        let path = self.cwd.join(path);
        match Corpus::load(&path) {
            Ok(corpus) => Ok(corpus),
            Err(e) => {
                eprintln!("error: {e}");
                Err(ExitCode::FAILURE)
            }
        }
    }
}
