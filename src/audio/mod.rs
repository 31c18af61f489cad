pub mod analyzer;
pub mod player;

pub use analyzer::{FrequencyAnalyzer, SampleBuffer, BUCKET_COUNT};
pub use player::{AudioBackend, DemoPlayer, DemoTrack, NullBackend, PlayerError};
