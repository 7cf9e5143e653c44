// Domain layer: records, summaries, chart descriptions and ports.
// No I/O here; adapters live under config/ and core/.

pub mod chart;
pub mod model;
pub mod ports;
