pub mod debug_overlay;
