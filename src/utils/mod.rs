//! Project-specific utilities live here.

use chrono::Utc;

/// Formats a shared log prefix for project logs.
pub fn log_prefix(module: &str) -> String {
    format!("saga::{module}")
}

/// Milliseconds since the Unix epoch, used for slug derivation.
pub fn epoch_millis() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_prefix_includes_module_name() {
        assert_eq!(log_prefix("story"), "saga::story");
    }

    #[test]
    fn epoch_millis_is_non_decreasing() {
        let a = epoch_millis();
        let b = epoch_millis();
        assert!(b >= a);
    }
}
