use std::process;

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use bigblob::{cli, logging, progress::ConsoleProgress, reader, writer};

fn main() -> Result<()> {
    logging::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cmd = match cli::parse_args(&args) {
        Ok(cmd) => cmd,
        Err(err) => {
            debug!("invalid invocation: {err}");
            print!("{}", cli::USAGE);
            process::exit(1);
        }
    };

    let mut progress = ConsoleProgress::stdout();
    match cmd {
        cli::Command::Write { path, count } => {
            // one generator per invocation, handed to the writer explicitly
            let mut rng = StdRng::from_os_rng();
            writer::write_blocks(&path, count, &mut rng, &mut progress)
                .with_context(|| format!("writing {}", path.display()))?;
        }
        cli::Command::Read { path, passes } => {
            reader::read_checksum(&path, passes, &mut progress)
                .with_context(|| format!("reading {}", path.display()))?;
        }
    }

    Ok(())
}
