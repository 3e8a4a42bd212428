mod candle;
mod granularity;
mod indicator;
mod snapshot;

pub use candle::Candle;
pub use granularity::Granularity;
pub use indicator::{IndicatorPoint, IndicatorSeries};
pub use snapshot::Snapshot;
