pub mod entering_mode;
pub mod favorite;
pub mod import_info;
pub mod log_entry;
pub mod month_summary;
pub mod selection;

pub use entering_mode::EnteringMode;
pub use favorite::FavoriteTask;
pub use import_info::{ImportInfo, TypeOfWork};
pub use log_entry::LogEntry;
pub use month_summary::MonthSummary;
pub use selection::{LoadingMarker, Selection, SelectionStatus};
