use crate::command::{CommandFactory, ExecutableCommand, ExitCode};
use crate::config::Settings;
use crate::env::Environment;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::io::{BufRead, Write};
use tracing::{debug, error};

/// Factory allows creating instances of ExecutableCommand.
///
/// Only supports the protocol commands defined in this crate.
pub(crate) struct Factory<T> {
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Default for Factory<T> {
    fn default() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

/// Line-oriented command interpreter owning a single parking lot.
///
/// The interpreter maintains an [`Environment`] holding the live lot and a list
/// of [`CommandFactory`] objects that are queried to create commands by verb.
///
/// Example
/// ```
/// use parking_commands::Interpreter;
/// let mut lot = Interpreter::default();
/// let mut out = Vec::new();
/// lot.execute_line("create_parking_lot PR1234 2 6", &mut out).unwrap();
/// lot.execute_line("park_vehicle CAR KA-01-DB-1234 black", &mut out).unwrap();
/// assert!(String::from_utf8(out).unwrap().ends_with("Ticket ID: PR1234_0_4\n"));
/// ```
pub struct Interpreter {
    env: Environment,
    commands: Vec<Box<dyn CommandFactory>>,
}

impl Interpreter {
    /// Create a new interpreter with a custom set of command factories.
    pub fn new(settings: Settings, commands: Vec<Box<dyn CommandFactory>>) -> Self {
        Self {
            env: Environment::new(settings),
            commands,
        }
    }

    /// Create an interpreter with the protocol commands and the given settings.
    pub fn with_settings(settings: Settings) -> Self {
        use crate::builtin::*;
        Self::new(
            settings,
            vec![
                Box::new(Factory::<CreateParkingLot>::default()),
                Box::new(Factory::<ParkVehicle>::default()),
                Box::new(Factory::<UnparkVehicle>::default()),
                Box::new(Factory::<DisplayReport>::default()),
                Box::new(Factory::<Exit>::default()),
            ],
        )
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn should_exit(&self) -> bool {
        self.env.should_exit
    }

    fn create(&self, name: &str, args: &[&str]) -> Option<Box<dyn ExecutableCommand>> {
        self.commands
            .iter()
            .find_map(|factory| factory.try_create(name, args))
    }

    /// Run a single command invocation by verb with arguments.
    ///
    /// Returns the command's exit code, or an error if no factory knows the verb.
    pub fn run(
        &mut self,
        name: &str,
        args: &[&str],
        stdout: &mut dyn Write,
    ) -> anyhow::Result<ExitCode> {
        let cmd = self
            .create(name, args)
            .ok_or_else(|| anyhow::anyhow!("command not found: {}", name))?;
        cmd.execute(stdout, &mut self.env)
    }

    /// Split a protocol line on whitespace and execute it.
    ///
    /// Blank lines and unknown verbs are ignored. Only failures writing to
    /// `stdout` are returned as errors.
    pub fn execute_line(&mut self, line: &str, stdout: &mut dyn Write) -> anyhow::Result<ExitCode> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(0);
        };
        let args: Vec<&str> = words.collect();

        match self.create(name, &args) {
            Some(cmd) => {
                debug!(command = name, ?args, "executing");
                cmd.execute(stdout, &mut self.env)
            }
            None => {
                debug!(command = name, "ignoring unknown command");
                Ok(0)
            }
        }
    }

    /// Execute every line of `input` until it ends or `exit` is read.
    pub fn run_script<R: BufRead>(&mut self, input: R, stdout: &mut dyn Write) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line?;
            self.execute_line(&line, stdout)?;
            if self.env.should_exit {
                break;
            }
        }
        stdout.flush()?;
        Ok(())
    }

    /// Interactive read loop on the terminal. Stops on `exit`, Ctrl-C or end of input.
    pub fn repl(&mut self) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;
        let mut stdout = std::io::stdout();

        while !self.env.should_exit {
            match rl.readline(&self.env.settings.prompt) {
                Ok(line) => {
                    if self.env.settings.history && !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str())?;
                    }
                    if let Err(err) = self.execute_line(&line, &mut stdout) {
                        error!("command failed: {:#}", err);
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err),
            }
        }

        Ok(())
    }
}

impl Default for Interpreter {
    /// Create an interpreter with default settings and the protocol commands:
    /// `create_parking_lot`, `park_vehicle`, `unpark_vehicle`, `display`, `exit`.
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}
