use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    /// Opening sinks and spawning workers.
    Starting,
    /// Feeding the input queue from the domain source.
    Streaming,
    /// Input queue closed; waiting for every resolution worker to exit.
    DrainingResolution,
    /// Output queue closed; waiting for every persistence worker to exit.
    DrainingPersistence,
    Stopped,
}

impl PipelineState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineState::Starting => "starting",
            PipelineState::Streaming => "streaming",
            PipelineState::DrainingResolution => "draining-resolution",
            PipelineState::DrainingPersistence => "draining-persistence",
            PipelineState::Stopped => "stopped",
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
