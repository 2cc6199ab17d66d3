pub mod button;
pub mod navigation_guard;
