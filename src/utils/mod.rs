mod maths_utils;
mod perf;
mod time_utils;

pub use time_utils::{AppInstant, TimeUtils, format_date, format_duration};

pub(crate) use maths_utils::{index_of_max, index_of_min, percent_change, relative_move};
