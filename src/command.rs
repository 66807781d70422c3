use crate::env::Environment;
use anyhow::Result;
use std::io::Write;

/// Conventional exit code of a command.
///
/// A value of 0 indicates success; any non-zero value indicates the command
/// reported a failure on its output.
pub type ExitCode = i32;

/// Object-safe trait for any command the interpreter can execute.
///
/// Built-in commands get this through a blanket impl.
pub trait ExecutableCommand {
    /// Executes the command, writing its protocol output to `stdout`.
    fn execute(
        self: Box<Self>,
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode>;
}

/// Factory that tries to create a command from a name and its arguments.
///
/// Returns `None` when the factory doesn't recognize the `name`.
pub trait CommandFactory {
    /// Attempt to create a command instance for the provided name and arguments.
    fn try_create(&self, name: &str, args: &[&str]) -> Option<Box<dyn ExecutableCommand>>;
}
