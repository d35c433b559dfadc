use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use miette::Result;

use tulle::term::RawModeGuard;
use tulle::{Image, RunState};

/// Tulle is a light & convenient virtual machine for running LC3 binaries.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// `.lc3` or `.obj` images to load, in order
    #[arg(required = true)]
    images: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut state = RunState::new();
    for path in &args.images {
        let image = Image::read_from(path)?;
        println!(
            "{:>12} image {} at x{:04X}",
            "Loaded".green().bold(),
            path.display(),
            image.origin(),
        );
        state.load(&image);
    }

    println!("{:>12} machine", "Running".green().bold());

    // Key events need the terminal raw; the guard hands it back on every
    // path out of here, unwinding included.
    let _raw = RawModeGuard::acquire();
    state.run()?;

    Ok(())
}
