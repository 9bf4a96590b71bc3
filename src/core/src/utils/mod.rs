mod text;
mod time;

pub use text::{loose_text, text_or_number};
pub use time::TimeEstimation;
