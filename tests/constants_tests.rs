// Host-side tests for the DOM wiring constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
fn element_ids_are_distinct() {
    let mut ids = vec![
        TOOLTIP_ID,
        INFO_PANEL_ID,
        INFO_TITLE_ID,
        INFO_ARTIST_ID,
        INFO_DESCRIPTION_ID,
        RETICLE_ID,
        ROOM_LABEL_ID,
    ];
    let n = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), n);
    assert!(ids.iter().all(|id| !id.is_empty() && !id.starts_with('#')));
}

#[test]
fn info_panel_counts_as_ui() {
    let selectors: Vec<&str> = UI_REGION_SELECTOR.split(',').map(str::trim).collect();
    assert!(selectors.contains(&format!("#{}", INFO_PANEL_ID).as_str()));
    assert!(selectors.iter().all(|s| s.starts_with('#')));
}
