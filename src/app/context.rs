use crate::ports::{CloudCliPort, PromptPort};

/// Application context holding dependencies for command execution.
pub struct AppContext<C: CloudCliPort, P: PromptPort> {
    cloud: C,
    prompter: P,
}

impl<C: CloudCliPort, P: PromptPort> AppContext<C, P> {
    /// Create a new application context.
    pub fn new(cloud: C, prompter: P) -> Self {
        Self { cloud, prompter }
    }

    /// Get a reference to the cloud CLI executor.
    pub fn cloud(&self) -> &C {
        &self.cloud
    }

    /// Get a reference to the prompter.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }
}
