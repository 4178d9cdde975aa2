//! Logging utilities for the nursery crates.

use slog::{Logger, o};

/// Extension trait for `slog::Logger`
pub trait LoggerExtensions {
    /// Create a new child logger with a `src` key containing the component name.
    fn new_with_component_name<T>(&self) -> Self;

    /// Create a new child logger with a `src` key containing the provided name.
    fn new_with_name(&self, name: &str) -> Self;
}

impl LoggerExtensions for Logger {
    fn new_with_component_name<T>(&self) -> Self {
        self.new_with_name(component_name::<T>())
    }

    fn new_with_name(&self, name: &str) -> Self {
        self.new(o!("src" => name.to_owned()))
    }
}

/// Root logger dropping every record, used when no logger is provided.
pub fn discard_logger() -> Logger {
    Logger::root(slog::Discard, o!())
}

fn component_name<T>() -> &'static str {
    let complete_name = std::any::type_name::<T>();
    let without_generic = complete_name.split('<').next().unwrap_or(complete_name);

    without_generic.rsplit("::").next().unwrap_or(without_generic)
}
