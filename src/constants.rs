/// Scroll, glow and layout tuning constants.
///
/// These constants express intended behavior (thresholds, delays, element
/// ids) and keep magic numbers out of the event handlers.
// Distance above a section's top at which it already counts as "in view"
pub const SECTION_LOOKAHEAD_PX: f64 = 200.0;

// Navbar switches to its solid background once scrolled past this offset
pub const NAVBAR_SOLID_THRESHOLD_PX: f64 = 50.0;

// Pointer glow
pub const GLOW_HIDE_DELAY_MS: u32 = 3000; // inactivity before auto-hide
pub const GLOW_SIZE_PX: u32 = 100;

// Element ids shared by the markup and the DOM glue
pub const ROOT_ID: &str = "portfolio-root";
pub const NAVBAR_ID: &str = "navbar";
pub const MENU_TOGGLE_ID: &str = "menu-toggle";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const GLOW_ID: &str = "cursor-glow";

// Attribute carrying a navigation target on clickable elements
pub const NAV_ATTR: &str = "data-nav";

// Classes toggled by the view
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_SOLID: &str = "solid";
