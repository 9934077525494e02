//! Command handler modules for the showdown CLI.
//!
//! Each subcommand lives in its own file and exposes one
//! `handle_COMMAND_command(...) -> Result<(), CliError>` function. Output
//! streams are passed in as `&mut dyn Write` so handlers can be driven from tests.

pub mod cfg;
pub mod deal;
pub mod eval;
pub mod showdown;
pub mod sim;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use eval::handle_eval_command;
pub use showdown::handle_showdown_command;
pub use sim::{handle_sim_command, SimOptions};
