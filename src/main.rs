use anyhow::Context;
use argh::FromArgs;
use parking_commands::{Interpreter, Settings, logger};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(FromArgs)]
/// Parking lot simulator. Reads protocol commands until `exit`.
struct Args {
    #[argh(option)]
    /// path to a TOML settings file.
    config: Option<PathBuf>,

    #[argh(option)]
    /// read commands from this file instead of the interactive prompt.
    input: Option<PathBuf>,

    #[argh(switch)]
    /// reject lot sizes that are not non-negative integers instead of using 0.
    strict_sizes: bool,

    #[argh(switch, short = 'v')]
    /// log every command at debug level.
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args: Args = argh::from_env();

    let mut settings = match &args.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("can't load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    if args.strict_sizes {
        settings.strict_sizes = true;
    }
    logger::init_cli_logger(settings.log_filter.as_deref(), args.verbose);
    tracing::debug!(?settings, "starting");

    let mut interpreter = Interpreter::with_settings(settings);
    match &args.input {
        Some(path) => {
            let file =
                File::open(path).with_context(|| format!("can't open {}", path.display()))?;
            interpreter.run_script(BufReader::new(file), &mut std::io::stdout().lock())?;
        }
        None => interpreter.repl()?,
    }
    Ok(())
}
