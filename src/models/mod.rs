mod matching_window;
mod ticker_result;
mod timeseries;

pub use matching_window::MatchingWindow;
pub use ticker_result::{BatchResult, TickerResult};
pub use timeseries::{NormalizedSeries, TimeSeries};
