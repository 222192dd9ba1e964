//! UI module - widgets shared by the form and list panels

pub mod components;
