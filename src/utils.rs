//! Utility functions

use crate::constants::DATA_DIR_NAME;
use std::path::PathBuf;

/// Per-user data directory holding settings and logs
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DATA_DIR_NAME)
}

/// Headcount line under the list heading
pub fn format_headcount(count: usize) -> String {
    match count {
        0 => "No employees".to_string(),
        1 => "1 employee".to_string(),
        n => format!("{} employees", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_dir_is_app_specific() {
        assert!(get_data_dir().ends_with(DATA_DIR_NAME));
    }

    #[test]
    fn headcount_pluralizes() {
        assert_eq!(format_headcount(0), "No employees");
        assert_eq!(format_headcount(1), "1 employee");
        assert_eq!(format_headcount(12), "12 employees");
    }
}
