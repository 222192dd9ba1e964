//! Application constants and configuration

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8086";
pub const API_URL_ENV: &str = "EMPLOYEE_API_URL";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_TITLE: &str = "Employee Management";
pub const DATA_DIR_NAME: &str = "Employee Manager";

/// User-visible error when the list refresh fails
pub const FETCH_ERROR: &str = "Could not fetch employees. Please try again later.";
/// User-visible error when a create or update request fails
pub const SAVE_ERROR: &str = "Could not add/update employee. Please check the input and try again.";
