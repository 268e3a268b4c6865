pub mod editor_surface;
pub mod main_window;
pub mod sidebar;
pub mod theme;
