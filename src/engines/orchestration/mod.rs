pub mod metrics;
pub mod orchestrator;

pub use metrics::{
    ChannelMetricsSink, ConsoleMetricsSink, MetricsSink, NullMetricsSink, RoundSummary,
};
pub use orchestrator::RoundOrchestrator;
