pub mod channel;
pub mod clock;
pub mod generator;
pub mod sink;

pub use channel::SimulatedChannel;
pub use clock::SystemClock;
pub use generator::SyntheticExtractor;
pub use sink::ConsoleSink;
