pub mod holiday;
pub mod snapshot;
pub mod view_mode;
pub mod walk;

pub use holiday::{HolidayRequest, HolidayStatus};
pub use snapshot::Snapshot;
pub use view_mode::{CalendarCursor, ViewMode};
pub use walk::{TimeSlot, WalkRecord, WalkStatus};
