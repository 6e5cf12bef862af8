//! Command line and run configuration

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use clap::error::{ContextKind, ContextValue, ErrorKind};

use crate::dataset::{dataset_file_name, dataset_path};
use crate::generate::DEFAULT_COUNT;

/// Generate a CIEDE2000 verification dataset, or check the datasets
/// produced by other implementations against this one.
#[derive(Parser, Debug, Clone)]
#[command(name = "ciede2000-parity", version, about, allow_negative_numbers = true)]
pub struct Cli {
    /// A record count to generate (default 10000), or one or more
    /// lowercase implementation tags whose datasets to compare
    pub targets: Vec<String>,

    /// Directory holding `<tag>/values-<tag>.txt` datasets to compare
    #[arg(long, default_value = "..")]
    pub data_dir: PathBuf,

    /// Directory the generated dataset is written to
    #[arg(long = "out-dir", default_value = ".")]
    pub output_dir: PathBuf,

    /// Tag of this implementation, used in the generated file name
    #[arg(long, default_value = "rs")]
    pub tag: String,

    /// Seed for reproducible generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write a JSON summary of the comparison to this file
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse `args`, reading unknown dash-prefixed arguments as targets
    ///
    /// `-x` or `--count=7` then reaches [`Mode::from_targets`] and falls back
    /// to the default count instead of aborting with a usage error. Help,
    /// version and malformed values of known options still fail.
    pub fn parse_lenient<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let mut stray: Vec<OsString> = Vec::new();

        loop {
            let mut argv = args.clone();
            if !stray.is_empty() {
                argv.push("--".into());
                argv.extend(stray.iter().cloned());
            }

            let err = match Self::try_parse_from(argv) {
                Err(err) if err.kind() == ErrorKind::UnknownArgument => err,
                other => return other,
            };
            let Some(ContextValue::String(unknown)) = err.get(ContextKind::InvalidArg) else {
                return Err(err);
            };
            // Skip the program name; match `-xv` or `--flag=value` by prefix
            let position = args
                .iter()
                .skip(1)
                .position(|a| a.to_str() == Some(unknown.as_str()))
                .or_else(|| {
                    args.iter()
                        .skip(1)
                        .position(|a| a.to_str().is_some_and(|a| a.starts_with(unknown.as_str())))
                });
            match position {
                Some(i) => stray.push(args.remove(i + 1)),
                None => return Err(err),
            }
        }
    }
}

/// What a run does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Write a fresh dataset; `fallback` is set when the requested count
    /// was invalid and the default is used instead
    Generate { count: usize, fallback: bool },
    /// Check the datasets of the given implementations
    Compare { tags: Vec<String> },
}

/// A non-empty run of lowercase ASCII letters
pub fn is_tag(arg: &str) -> bool {
    !arg.is_empty() && arg.chars().all(|c| c.is_ascii_lowercase())
}

/// A non-negative record count
pub fn parse_count(arg: &str) -> Option<usize> {
    arg.trim().parse().ok()
}

impl Mode {
    /// Decide the mode from the positional arguments
    ///
    /// Tags select comparison. Anything else is read as a record count,
    /// falling back to [`DEFAULT_COUNT`] when it does not parse.
    pub fn from_targets(targets: &[String]) -> Self {
        match targets {
            [] => Mode::Generate {
                count: DEFAULT_COUNT,
                fallback: false,
            },
            _ if targets.iter().all(|t| is_tag(t)) => Mode::Compare {
                tags: targets.to_vec(),
            },
            [single] => match parse_count(single) {
                Some(count) => Mode::Generate {
                    count,
                    fallback: false,
                },
                None => Mode::Generate {
                    count: DEFAULT_COUNT,
                    fallback: true,
                },
            },
            _ => Mode::Generate {
                count: DEFAULT_COUNT,
                fallback: true,
            },
        }
    }
}

/// Resolved settings of a run
#[derive(Debug, Clone)]
pub struct HarnessConfig {
    pub mode: Mode,
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub local_tag: String,
    pub seed: Option<u64>,
    pub report: Option<PathBuf>,
    pub verbose: bool,
}

impl HarnessConfig {
    /// Dataset location of implementation `tag`
    pub fn dataset_path(&self, tag: &str) -> PathBuf {
        dataset_path(&self.data_dir, tag)
    }

    /// Where generation writes this implementation's dataset
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(dataset_file_name(&self.local_tag))
    }
}

impl From<Cli> for HarnessConfig {
    fn from(cli: Cli) -> Self {
        Self {
            mode: Mode::from_targets(&cli.targets),
            data_dir: cli.data_dir,
            output_dir: cli.output_dir,
            local_tag: cli.tag,
            seed: cli.seed,
            report: cli.report,
            verbose: cli.verbose,
        }
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Generate {
                count: DEFAULT_COUNT,
                fallback: false,
            },
            data_dir: PathBuf::from(".."),
            output_dir: PathBuf::from("."),
            local_tag: "rs".to_string(),
            seed: None,
            report: None,
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn mode(args: &[&str]) -> Mode {
        let targets: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        Mode::from_targets(&targets)
    }

    fn parse(args: &[&str]) -> HarnessConfig {
        let argv = std::iter::once("ciede2000-parity").chain(args.iter().copied());
        Cli::parse_lenient(argv).unwrap().into()
    }

    #[test]
    fn test_tag_selects_comparison() {
        assert_eq!(
            mode(&["php"]),
            Mode::Compare {
                tags: vec!["php".into()]
            }
        );
        assert_eq!(
            mode(&["js", "py"]),
            Mode::Compare {
                tags: vec!["js".into(), "py".into()]
            }
        );
    }

    #[test]
    fn test_count_selects_generation() {
        assert_eq!(
            mode(&["2500"]),
            Mode::Generate {
                count: 2500,
                fallback: false
            }
        );
        assert_eq!(
            mode(&["0"]),
            Mode::Generate {
                count: 0,
                fallback: false
            }
        );
        assert_eq!(
            mode(&[]),
            Mode::Generate {
                count: DEFAULT_COUNT,
                fallback: false
            }
        );
    }

    #[test]
    fn test_invalid_count_falls_back() {
        for bad in ["-5", "PHP", "12x", "", "c99", "1.5"] {
            assert_eq!(
                mode(&[bad]),
                Mode::Generate {
                    count: DEFAULT_COUNT,
                    fallback: true
                },
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_is_tag() {
        assert!(is_tag("rs"));
        assert!(!is_tag(""));
        assert!(!is_tag("Rs"));
        assert!(!is_tag("c99"));
        assert!(!is_tag("é"));
    }

    #[test]
    fn test_cli_defaults() {
        let config = parse(&["php"]);
        assert_eq!(config.dataset_path("php"), Path::new("..").join("php").join("values-php.txt"));
        assert_eq!(config.output_path(), Path::new(".").join("values-rs.txt"));
        assert!(config.seed.is_none());
        assert!(!config.verbose);
    }

    #[test]
    fn test_cli_negative_count_reaches_parser() {
        let config = parse(&["-5"]);
        assert_eq!(
            config.mode,
            Mode::Generate {
                count: DEFAULT_COUNT,
                fallback: true
            }
        );
    }

    #[test]
    fn test_cli_unknown_flag_falls_back() {
        for bad in ["-x", "--count=7", "-xyz"] {
            let config = parse(&[bad]);
            assert_eq!(
                config.mode,
                Mode::Generate {
                    count: DEFAULT_COUNT,
                    fallback: true
                },
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_cli_unknown_flag_keeps_known_options() {
        let config = parse(&["-x", "--seed", "3", "-v"]);
        assert_eq!(
            config.mode,
            Mode::Generate {
                count: DEFAULT_COUNT,
                fallback: true
            }
        );
        assert_eq!(config.seed, Some(3));
        assert!(config.verbose);
    }

    #[test]
    fn test_cli_help_is_not_swallowed() {
        let err = Cli::parse_lenient(["ciede2000-parity", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);

        let err = Cli::parse_lenient(["ciede2000-parity", "--seed", "abc"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_options() {
        let config = parse(&[
            "100", "--seed", "9", "--tag", "rust", "--out-dir", "/tmp/out", "-v",
        ]);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.output_path(), Path::new("/tmp/out/values-rust.txt"));
        assert!(config.verbose);
    }
}
