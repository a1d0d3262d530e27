mod schedule_set;
mod tax_bracket;
mod tax_category;
mod tax_report;

pub use schedule_set::{ScheduleKind, ScheduleSet};
pub use tax_bracket::{Bracket, BracketSchedule, ScheduleError};
pub use tax_category::TaxCategory;
pub use tax_report::TaxReport;
