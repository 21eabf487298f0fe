use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Concurrent resolution workers pulling from the domain queue.
    #[serde(default = "default_resolution_workers")]
    pub resolution_workers: usize,

    /// Concurrent persistence workers, each with its own sink connection.
    #[serde(default = "default_persistence_workers")]
    pub persistence_workers: usize,

    #[serde(default = "default_queue_capacity")]
    pub input_queue_capacity: usize,

    #[serde(default = "default_queue_capacity")]
    pub output_queue_capacity: usize,

    /// Text file with one domain per line.
    #[serde(default = "default_domains_file")]
    pub domains_file: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            resolution_workers: default_resolution_workers(),
            persistence_workers: default_persistence_workers(),
            input_queue_capacity: default_queue_capacity(),
            output_queue_capacity: default_queue_capacity(),
            domains_file: default_domains_file(),
        }
    }
}

fn default_resolution_workers() -> usize {
    10
}

fn default_persistence_workers() -> usize {
    10
}

fn default_queue_capacity() -> usize {
    100
}

fn default_domains_file() -> String {
    "./domains.txt".to_string()
}
