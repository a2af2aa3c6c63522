use std::path::PathBuf;

use crate::{CliError, Result};

/// Command-line arguments of the `rootline` binary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
    /// Solve the equations together as one system.
    pub system: bool,
    /// Optional TOML settings file.
    pub settings: Option<PathBuf>,
    /// Print usage and exit.
    pub help: bool,
}

impl Args {
    pub const USAGE: &'static str = "usage: rootline [--system] [settings.toml]";

    /// Parses arguments, excluding the program name.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::InvalidArgument`] for unknown flags or more than
    /// one settings path.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Self::default();
        for arg in args {
            let arg = arg.into();
            match arg.as_str() {
                "--system" => parsed.system = true,
                "-h" | "--help" => parsed.help = true,
                flag if flag.starts_with('-') => {
                    return Err(CliError::InvalidArgument(format!("unknown flag `{flag}`")));
                }
                _ if parsed.settings.is_some() => {
                    return Err(CliError::InvalidArgument(format!(
                        "unexpected argument `{arg}`"
                    )));
                }
                _ => parsed.settings = Some(PathBuf::from(&arg)),
            }
        }
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_independent_mode() {
        assert_eq!(Args::parse(Vec::<String>::new()).unwrap(), Args::default());
    }

    #[test]
    fn reads_flags_and_settings_path() {
        let args = Args::parse(["settings.toml", "--system"]).unwrap();
        assert!(args.system);
        assert_eq!(args.settings, Some(PathBuf::from("settings.toml")));
        assert!(!args.help);
    }

    #[test]
    fn rejects_unknown_flags_and_extra_paths() {
        assert!(matches!(
            Args::parse(["--fast"]),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            Args::parse(["a.toml", "b.toml"]),
            Err(CliError::InvalidArgument(_))
        ));
    }
}
