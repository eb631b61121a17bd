//! Command-line options shared by every command.

use fsc_diagnostic::emitter::ColorMode;

/// Errors in command-line options.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown option `{0}`")]
    UnknownOption(String),
    #[error("invalid color mode `{0}` (expected auto, always or never)")]
    InvalidColor(String),
}

/// Options that apply to every command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Emit diagnostics as JSON on stdout instead of text on stderr.
    pub json: bool,
    pub color: ColorMode,
    /// Check batch entries on a thread pool.
    pub parallel: bool,
    /// Also report call sites that pass.
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            json: false,
            color: ColorMode::Auto,
            parallel: true,
            verbose: false,
        }
    }
}

impl CliConfig {
    /// Split `args` into options and positional arguments.
    ///
    /// Options may appear anywhere. Everything after `--` is positional, so
    /// a format string starting with `-` can be passed as `-- -%d`.
    pub fn from_args(args: &[String]) -> Result<(CliConfig, Vec<String>), ConfigError> {
        let mut config = CliConfig::default();
        let mut positional = Vec::new();
        let mut args = args.iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--" => {
                    positional.extend(args.by_ref().cloned());
                    break;
                }
                "--json" => config.json = true,
                "--no-parallel" => config.parallel = false,
                "-v" | "--verbose" => config.verbose = true,
                _ => {
                    if let Some(mode) = arg.strip_prefix("--color=") {
                        config.color = ColorMode::from_arg(mode)
                            .ok_or_else(|| ConfigError::InvalidColor(mode.to_string()))?;
                    } else if arg.starts_with('-') && arg.len() > 1 {
                        return Err(ConfigError::UnknownOption(arg.clone()));
                    } else {
                        positional.push(arg.clone());
                    }
                }
            }
        }

        Ok((config, positional))
    }
}

#[cfg(test)]
mod tests;
