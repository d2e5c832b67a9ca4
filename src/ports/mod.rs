mod cloud_cli;
mod prompter;

pub use cloud_cli::{CliFailure, CloudCliPort, DEFAULT_TIMEOUT, LONG_TIMEOUT, output_lines};
pub use prompter::{PromptPort, is_affirmative};
