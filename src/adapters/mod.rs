pub mod gcloud_command;
pub mod terminal_prompter;

pub use gcloud_command::GcloudCommandAdapter;
pub use terminal_prompter::{LinePrompter, TerminalPrompter};
