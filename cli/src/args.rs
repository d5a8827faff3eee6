//! Parsing command-line arguments.

use clap::{command, error::Result as ClapResult, value_parser, Arg, ArgAction};
use std::{io, path::PathBuf};
use tracing_subscriber::EnvFilter;

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) template: PathBuf,
    pub(crate) candidates: PathBuf,
    pub(crate) binary_template: bool,
    pub(crate) config: Option<PathBuf>,
    pub(crate) ticks: Option<usize>,
    pub(crate) margin: Option<usize>,
    pub(crate) no_absorb: bool,
    pub(crate) json: bool,
    pub(crate) quiet: bool,
    pub(crate) verbose: u8,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> ClapResult<Self> {
        let matches = command!()
            .long_about(
                "Finds known objects in evolving Game of Life patterns\n\
                 \n\
                 Every candidate pattern is put on a torus with a dead margin and \
                 simulated for a number of generations. In each generation, every \
                 orientation of the template is looked for.\n\
                 \n\
                 Templates are written in multi-state RLE:\n\
                 * `.` is a cell that must be dead;\n\
                 * `A` and `E` are cells that must be alive;\n\
                 * other letters are cells that can be anything.\n",
            )
            .arg(
                Arg::new("TEMPLATE")
                    .help("RLE file of the template")
                    .required(true)
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("CANDIDATES")
                    .help("An RLE file, or a directory of `.rle` files")
                    .required(true)
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("BINARY")
                    .help("Reads the template as a two-state pattern")
                    .long_help(
                        "Reads the template as a two-state pattern\n\
                         Living cells must be alive and dead cells must be dead.\n",
                    )
                    .long("binary-template")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("CONFIG")
                    .help("Loads the search configuration from a JSON, YAML or TOML file")
                    .long_help(
                        "Loads the search configuration from a JSON, YAML or TOML file\n\
                         The format is chosen by the file extension. \
                         Options given on the command line override it.\n",
                    )
                    .short('c')
                    .long("config")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("TICKS")
                    .help("Number of generations to look at [default: 64]")
                    .short('t')
                    .long("ticks")
                    .value_parser(value_parser!(usize)),
            )
            .arg(
                Arg::new("MARGIN")
                    .help("Width of the dead border around each candidate [default: 3]")
                    .short('m')
                    .long("margin")
                    .value_parser(value_parser!(usize)),
            )
            .arg(
                Arg::new("NOABSORB")
                    .help("Keeps gliders that reach the border")
                    .long_help(
                        "Keeps gliders that reach the border\n\
                         By default they are deleted, so that they never come back \
                         from the other side of the torus.\n",
                    )
                    .long("no-absorb")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("JSON")
                    .help("Prints one JSON object per candidate")
                    .long("json")
                    .action(ArgAction::SetTrue),
            )
            .arg(
                Arg::new("QUIET")
                    .help("Only logs errors")
                    .short('q')
                    .long("quiet")
                    .action(ArgAction::SetTrue)
                    .conflicts_with("VERBOSE"),
            )
            .arg(
                Arg::new("VERBOSE")
                    .help("Logs more, can be repeated")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::Count),
            )
            .try_get_matches()?;

        Ok(Args {
            template: matches.get_one::<PathBuf>("TEMPLATE").unwrap().clone(),
            candidates: matches.get_one::<PathBuf>("CANDIDATES").unwrap().clone(),
            binary_template: matches.get_flag("BINARY"),
            config: matches.get_one::<PathBuf>("CONFIG").cloned(),
            ticks: matches.get_one::<usize>("TICKS").copied(),
            margin: matches.get_one::<usize>("MARGIN").copied(),
            no_absorb: matches.get_flag("NOABSORB"),
            json: matches.get_flag("JSON"),
            quiet: matches.get_flag("QUIET"),
            verbose: matches.get_count("VERBOSE"),
        })
    }

    /// Sets up logging to stderr.
    ///
    /// `RUST_LOG` takes precedence over `--quiet` and `--verbose`.
    pub(crate) fn init_logging(&self) {
        let level = match (self.quiet, self.verbose) {
            (true, _) => "error",
            (false, 0) => "info",
            (false, 1) => "debug",
            (false, _) => "trace",
        };
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .init();
    }
}
