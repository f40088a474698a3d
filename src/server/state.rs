use crate::translation::Orchestrator;

pub struct ServerState {
    orchestrator: Orchestrator,
}

impl ServerState {
    pub const fn new(orchestrator: Orchestrator) -> Self {
        Self { orchestrator }
    }

    pub const fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }
}
