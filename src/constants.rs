/// DOM wiring for the browser host.
///
/// Element ids match the page markup; the core never sees them.
// Overlay elements
pub const TOOLTIP_ID: &str = "interaction-hint";
pub const INFO_PANEL_ID: &str = "artwork-info";
pub const INFO_TITLE_ID: &str = "art-title";
pub const INFO_ARTIST_ID: &str = "art-artist";
pub const INFO_DESCRIPTION_ID: &str = "art-description";
pub const RETICLE_ID: &str = "crosshair";
pub const ROOM_LABEL_ID: &str = "current-room";

// Class toggled on the tooltip and info panel to show them
pub const VISIBLE_CLASS: &str = "visible";

// Presses whose target sits inside any of these never reach the scene
pub const UI_REGION_SELECTOR: &str = "#artwork-info, #info-panel, #controls";

