pub mod aggregate;

pub use aggregate::{LessonSlot, ScheduleRow, WeeklySchedule};
