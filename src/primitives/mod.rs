//! Low-level text primitives shared by host and plugin rendering

pub mod display_width;
