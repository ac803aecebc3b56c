use crate::config::LOG_LEVEL;

pub fn set_panic_hook() {
    // When the `console_error_panic_hook` feature is enabled, we can call the
    // `set_panic_hook` function at least once during initialization, and then
    // we will get better error messages if our code ever panics.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

pub fn init_logging() {
    // Only fails if a logger is already installed
    let _ = console_log::init_with_level(LOG_LEVEL);
}

// Wraps a scope in console.time/console.timeEnd, only built with the
// `profile` feature
#[cfg(feature = "profile")]
pub struct Timer<'a> {
    name: &'a str,
}

#[cfg(feature = "profile")]
impl<'a> Timer<'a> {
    pub fn new(name: &'a str) -> Timer<'a> {
        web_sys::console::time_with_label(name);
        Timer { name }
    }
}

#[cfg(feature = "profile")]
impl<'a> Drop for Timer<'a> {
    fn drop(&mut self) {
        web_sys::console::time_end_with_label(self.name);
    }
}
