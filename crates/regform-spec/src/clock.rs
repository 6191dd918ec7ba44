use time::OffsetDateTime;

/// Source of "now" for the rules that look at the calendar.
///
/// The engine never reads the system clock directly; injecting it keeps
/// validation deterministic under test.
pub trait Clock {
    /// Current year in UTC.
    fn current_year(&self) -> i32;
}

/// Wall-clock implementation used outside tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        OffsetDateTime::now_utc().year()
    }
}

/// Clock pinned to one year.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}
