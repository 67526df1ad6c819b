use crate::args::Args;
use lifecanvas_lib::Config;
use std::io::{self, Write};
use tracing::info;

#[cfg(feature = "tui")]
use crate::tui::run_with_tui;

/// Computes `generations` generations of the configured world and prints
/// the last one, or every one if `all` is set, in Plaintext format.
pub(crate) fn run_headless<W: Write>(
    config: &Config,
    generations: u64,
    all: bool,
    out: &mut W,
) -> io::Result<()> {
    let mut universe = config.world();
    if all {
        writeln!(out, "!Generation: {}", universe.generation())?;
        write!(out, "{}", universe)?;
    }
    for _ in 0..generations {
        universe.tick();
        if all {
            writeln!(out, "!Generation: {}", universe.generation())?;
            write!(out, "{}", universe)?;
        }
    }
    if !all {
        write!(out, "{}", universe)?;
    }
    info!(
        generation = universe.generation(),
        population = universe.population(),
        "Finished"
    );
    out.flush()
}

pub(crate) fn run(args: Args) -> io::Result<()> {
    #[cfg(feature = "tui")]
    if !args.no_tui {
        return run_with_tui(&args.config, args.blit);
    }
    let stdout = io::stdout();
    run_headless(&args.config, args.generations, args.all, &mut stdout.lock())
}
