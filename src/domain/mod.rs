// Domain types and value objects
mod detection_params;
mod series_point;

pub use detection_params::DetectionParameters;
pub use series_point::TimeSeriesPoint;
