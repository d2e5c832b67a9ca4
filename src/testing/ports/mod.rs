mod cloud_cli_stub;
mod prompt_stub;

pub use self::cloud_cli_stub::FakeCloudCli;
pub use self::prompt_stub::ScriptedPrompter;
