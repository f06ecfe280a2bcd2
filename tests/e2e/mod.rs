pub mod pane_rendering;
pub mod welcome_lifecycle;
