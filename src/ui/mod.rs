//! UI module - widgets shared by the app panels

pub mod components;
