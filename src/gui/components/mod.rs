// src/gui/components/mod.rs
pub mod sidebar;
pub mod tabs;
