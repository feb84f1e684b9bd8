//! Global library settings.
//!
//! [`Settings`] holds the **evaluation date**: the date instruments compare
//! against when deciding whether they have expired.  It is a process-wide
//! singleton accessed via a `std::sync::OnceLock`, stored as a date serial
//! number so that this crate stays independent of the date type.
//!
//! Code that changes the evaluation date temporarily should use
//! [`ScopedEvaluationDate`], which restores the previous value on drop.

use std::sync::{Mutex, OnceLock};

/// Process-wide settings.
pub struct Settings {
    /// The current evaluation date serial, `None` meaning "today".
    evaluation_date: Mutex<Option<i32>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    /// Return the current evaluation date serial number.
    ///
    /// Returns `None` if no evaluation date has been set.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned")
    }

    /// Set the evaluation date as a serial number.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = Some(serial);
    }

    /// Clear the evaluation date, resetting it to "use today".
    pub fn reset_evaluation_date(&self) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = None;
    }

    fn replace_evaluation_date_serial(&self, serial: Option<i32>) -> Option<i32> {
        std::mem::replace(
            &mut *self
                .evaluation_date
                .lock()
                .expect("Settings mutex poisoned"),
            serial,
        )
    }
}

/// Sets the global evaluation date for the lifetime of the guard.
///
/// ```
/// use ql_core::{ScopedEvaluationDate, Settings};
///
/// {
///     let _guard = ScopedEvaluationDate::new(45_292);
///     assert_eq!(Settings::instance().evaluation_date_serial(), Some(45_292));
/// }
/// assert_eq!(Settings::instance().evaluation_date_serial(), None);
/// ```
#[must_use = "the evaluation date is restored as soon as the guard is dropped"]
pub struct ScopedEvaluationDate {
    previous: Option<i32>,
}

impl ScopedEvaluationDate {
    /// Install `serial` as the evaluation date until the guard is dropped.
    pub fn new(serial: i32) -> Self {
        let previous = Settings::instance().replace_evaluation_date_serial(Some(serial));
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        Settings::instance().replace_evaluation_date_serial(self.previous);
    }
}
