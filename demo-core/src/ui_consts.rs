// Shared margins
pub const UI_MARGIN: f32 = 10.0;

// Page panel
pub const PANEL_MAX_WIDTH: f32 = 768.0;
pub const PANEL_PADDING: f32 = 32.0;
pub const PANEL_PADDING_WIDE: f32 = 48.0;
pub const PANEL_RADIUS: f32 = 24.0;

// Layout switches to two columns at this width
pub const WIDE_BREAKPOINT: f32 = 768.0;
pub const GRID_GAP: f32 = 24.0;

// Text sizes
pub const HEADING_SIZE: f32 = 30.0;
pub const HEADING_SIZE_WIDE: f32 = 48.0;
pub const HEADING_MARGIN_BOTTOM: f32 = 32.0;
pub const DEBUG_MONO_FONT_SIZE: f32 = 14.0; // debug overlay monospace
pub const HELP_TITLE_SIZE: f32 = 20.0;
