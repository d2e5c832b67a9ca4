pub mod ports;

pub use ports::FakeCloudCli;
pub use ports::ScriptedPrompter;
