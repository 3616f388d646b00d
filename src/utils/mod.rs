mod math;
mod months;

pub use math::{clamp, safe_div};
pub use months::{is_valid_month, month_label, month_label_full, year_earlier};
