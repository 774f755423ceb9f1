//! Application Context
//!
//! Shared state provided via Leptos Context API.

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::config::UiConfig;
use crate::dates;

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Loaded UI configuration
    config: StoredValue<UiConfig>,
    /// Local date used for due-date checks - read
    pub today: ReadSignal<NaiveDate>,
    /// Local date used for due-date checks - write
    set_today: WriteSignal<NaiveDate>,
}

impl AppContext {
    pub fn new(config: UiConfig) -> Self {
        let (today, set_today) = signal(dates::today());
        Self {
            config: StoredValue::new(config),
            today,
            set_today,
        }
    }

    /// Read a config value
    pub fn config<T>(&self, f: impl FnOnce(&UiConfig) -> T) -> T {
        self.config.with_value(f)
    }

    /// Re-read the local date (the page may stay open past midnight)
    pub fn refresh_today(&self) {
        let now = dates::today();
        if self.today.get_untracked() != now {
            self.set_today.set(now);
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
