//! Calendar year source for the footer.

pub trait Clock {
    fn current_year(&self) -> i32;
}

/// Clock pinned to a given year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

/// Local time from the JS `Date` object.
#[cfg(feature = "hydrate")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserClock;

#[cfg(feature = "hydrate")]
impl Clock for BrowserClock {
    fn current_year(&self) -> i32 {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(i32::MAX)
    }
}
