//! CLI module.
//!
//! Argument parsing plus the informational commands that run instead of the
//! TUI. Call [`run_cli_command`] early in `main()`:
//!
//! ```ignore
//! use littleyears::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args())?;
//! if run_cli_command(&command) {
//!     return Ok(());
//! }
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, ArgsError, CliCommand, CliOverrides};
pub use version::{usage, version_line, VERSION};

/// Print output for informational commands.
///
/// Returns true when the command was handled and the TUI should not start.
pub fn run_cli_command(command: &CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            true
        }
        CliCommand::Help => {
            println!("{}", usage());
            true
        }
        CliCommand::RunTui(_) => false,
    }
}
