pub mod grid;
pub mod grouping;
pub mod logic;
pub mod navigation;
pub mod sequence;

pub use grid::{
    CalendarCell, DayGrid, DayHours, HourSlot, Week, build_day_grid, build_day_grid_with_hours,
    build_month_grid, build_week_grid,
};
pub use grouping::{
    HolidayLookup, TieBreak, WalksByDate, find_holiday_for_date, group_walks_by_date,
    is_group_walk, upcoming_walks, walks_for_walker,
};
pub use logic::{BuildOptions, Core, ScheduleView, ViewGrid};
pub use navigation::{go_to_next, go_to_prev, go_to_today, view_title, week_range};
pub use sequence::move_item;
