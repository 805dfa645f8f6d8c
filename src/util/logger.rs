use std::fmt::{Display, Formatter};

use super::Log;

impl<T: Display> Display for Log<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Log::None => Ok(()),
            Log::Default(s) | Log::Success(s) | Log::Result(s) | Log::Verbose(s) => {
                write!(f, "{}", s)
            }
        }
    }
}

impl<T> Log<T> {
    /// Order of the log level, used to decide whether a given trace point
    /// should print under the configured verbosity.
    pub fn order(&self) -> u8 {
        match self {
            Log::None => 0,
            Log::Default(_) => 1,
            Log::Success(_) => 2,
            Log::Result(_) => 3,
            Log::Verbose(_) => 4,
        }
    }
}

impl<TL: Display> Log<TL> {
    /// Trace a section/nested-section dispatch decision made by the
    /// processor driver. A no-op unless compiled with debug assertions.
    pub fn log_dispatch(&self, _label: &str, _section: &dyn Display) {
        #[cfg(debug_assertions)]
        {
            if self.order() >= Log::Default(()).order() {
                println!("[{}; dispatch]: {} -> {}", self, _label, _section);
            }
        }
    }

    /// Trace a warning emitted into the [`crate::report::Report`].
    pub fn log_warning(&self, _message: &str) {
        #[cfg(debug_assertions)]
        {
            if self.order() >= Log::Result(()).order() {
                println!("[{}; warning]: {}", self, _message);
            }
        }
    }
}
