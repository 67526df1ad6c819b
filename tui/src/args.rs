//! Parsing command-line arguments.

use clap::{
    crate_authors, crate_description, crate_name, crate_version, error::ErrorKind, value_parser,
    Arg, ArgAction, Command, Error,
};
use lifecanvas_lib::{Config, Seed};
use std::{ffi::OsString, fs, path::PathBuf};

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) generations: u64,
    pub(crate) all: bool,
    #[cfg(feature = "tui")]
    pub(crate) blit: bool,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

/// Reads a configuration written in JSON, YAML or TOML,
/// according to the file extension.
pub(crate) fn parse_config(text: &str, extension: Option<&str>) -> Result<Config, String> {
    match extension {
        Some("json") => serde_json::from_str(text).map_err(|e| e.to_string()),
        Some("yaml") | Some("yml") => serde_yaml::from_str(text).map_err(|e| e.to_string()),
        Some("toml") => toml::from_str(text).map_err(|e| e.to_string()),
        _ => Err(String::from(
            "the configuration file must end with .json, .yaml, .yml or .toml",
        )),
    }
}

impl Args {
    fn command() -> Command {
        let mut command = Command::new(crate_name!())
            .version(crate_version!())
            .author(crate_authors!())
            .about(crate_description!())
            .long_about(
                "Conway's Game of Life in the terminal\n\
                 \n\
                 In the TUI the world fills the whole terminal:\n\
                 * Drag with the left mouse button to draw;\n\
                 * [space] starts or pauses the evolution;\n\
                 * [n] or [→] computes one generation;\n\
                 * [c] clears the world, [r] fills it randomly;\n\
                 * [q] quits and prints the world.\n\
                 \n\
                 The world is printed in Plaintext format:\n\
                 * Dead cells are represented by `.`;\n\
                 * Living cells are represented by `o`.\n",
            )
            .arg(
                Arg::new("X")
                    .help("Width of the world")
                    .index(1)
                    .value_parser(value_parser!(u32)),
            )
            .arg(
                Arg::new("Y")
                    .help("Height of the world")
                    .index(2)
                    .value_parser(value_parser!(u32)),
            )
            .arg(
                Arg::new("CONFIG")
                    .help("Reads the configuration from a file")
                    .long_help(
                        "Reads the configuration from a file\n\
                         The format is chosen by the extension: .json, .yaml, .yml or .toml.\n\
                         Values given on the command line override those in the file.\n",
                    )
                    .long("config")
                    .value_parser(value_parser!(PathBuf)),
            )
            .arg(
                Arg::new("SEED")
                    .help("How to fill the world at the start")
                    .short('s')
                    .long("seed")
                    .value_parser(["empty", "stripes", "random", "e", "s", "r"]),
            )
            .arg(
                Arg::new("TICKS")
                    .help("Number of generations per animation frame")
                    .short('t')
                    .long("ticks-per-frame")
                    .value_parser(value_parser!(u32)),
            )
            .arg(
                Arg::new("GENERATIONS")
                    .help("Number of generations to compute without the TUI")
                    .short('g')
                    .long("generations")
                    .default_value("0")
                    .value_parser(value_parser!(u64)),
            );

        #[cfg(feature = "tui")]
        {
            command = command
                .arg(
                    Arg::new("ALL")
                        .help("Prints every generation instead of only the last one")
                        .long_help(
                            "Prints every generation instead of only the last one\n\
                             Only useful when --no-tui is set.\n",
                        )
                        .short('a')
                        .long("all")
                        .action(ArgAction::SetTrue)
                        .requires("NOTUI"),
                )
                .arg(
                    Arg::new("BLIT")
                        .help("Draws the world as one image instead of cell by cell")
                        .long("blit")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("NOTUI"),
                )
                .arg(
                    Arg::new("NOTUI")
                        .help("Computes the generations and prints them, without entering the TUI")
                        .short('n')
                        .long("no-tui")
                        .action(ArgAction::SetTrue),
                );
        }

        #[cfg(not(feature = "tui"))]
        {
            command = command.arg(
                Arg::new("ALL")
                    .help("Prints every generation instead of only the last one")
                    .short('a')
                    .long("all")
                    .action(ArgAction::SetTrue),
            );
        }

        command
    }

    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        Args::parse_from(std::env::args_os())
    }

    pub(crate) fn parse_from<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = Args::command();
        let matches = command.try_get_matches_from_mut(args)?;

        let mut config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => {
                let text = fs::read_to_string(path).map_err(|e| {
                    command.error(
                        ErrorKind::Io,
                        format!("cannot read '{}': {}", path.display(), e),
                    )
                })?;
                let extension = path.extension().and_then(|ext| ext.to_str());
                parse_config(&text, extension).map_err(|e| {
                    command.error(
                        ErrorKind::InvalidValue,
                        format!("invalid configuration in '{}': {}", path.display(), e),
                    )
                })?
            }
            None => Config::default(),
        };

        if let Some(&width) = matches.get_one::<u32>("X") {
            config.width = width;
        }
        if let Some(&height) = matches.get_one::<u32>("Y") {
            config.height = height;
        }
        if let Some(seed) = matches.get_one::<String>("SEED") {
            config.seed = seed
                .parse::<Seed>()
                .map_err(|e| command.error(ErrorKind::InvalidValue, e))?;
        }
        if let Some(&ticks) = matches.get_one::<u32>("TICKS") {
            config.ticks_per_frame = ticks;
        }

        let generations = matches.get_one::<u64>("GENERATIONS").copied().unwrap_or(0);
        let all = matches.get_flag("ALL");

        Ok(Args {
            config,
            generations,
            all,
            #[cfg(feature = "tui")]
            blit: matches.get_flag("BLIT"),
            #[cfg(feature = "tui")]
            no_tui: matches.get_flag("NOTUI"),
        })
    }
}
