//! Icon path data
//!
//! Each icon is a `&'static str` containing the SVG inner elements of a
//! 24x24 stroked glyph. Use `kiln_icons::to_svg()` to wrap in a complete
//! SVG tag.

/// angle down
pub const ANGLE_DOWN: &str = r#"<path d="m6 9 6 6 6-6"/>"#;
/// angle left
pub const ANGLE_LEFT: &str = r#"<path d="m15 18-6-6 6-6"/>"#;
/// angle right
pub const ANGLE_RIGHT: &str = r#"<path d="m9 18 6-6-6-6"/>"#;
/// angle up
pub const ANGLE_UP: &str = r#"<path d="m18 15-6-6-6 6"/>"#;
/// apps
pub const APPS: &str = r#"<rect x="3" y="3" width="7" height="7"/><rect x="14" y="3" width="7" height="7"/><rect x="14" y="14" width="7" height="7"/><rect x="3" y="14" width="7" height="7"/>"#;
/// clock nine
pub const CLOCK_NINE: &str = r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 7 12"/>"#;
/// cog
pub const COG: &str = r#"<circle cx="12" cy="12" r="3"/><path d="M12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42"/>"#;
/// info circle
pub const INFO_CIRCLE: &str = r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#;
/// plus
pub const PLUS: &str = r#"<path d="M5 12h14"/><path d="M12 5v14"/>"#;
/// save
pub const SAVE: &str = r#"<path d="M19 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11l5 5v11a2 2 0 0 1-2 2z"/><polyline points="17 21 17 13 7 13 7 21"/><polyline points="7 3 7 8 15 8"/>"#;
/// search
pub const SEARCH: &str = r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#;
/// share alt
pub const SHARE_ALT: &str = r#"<circle cx="18" cy="5" r="3"/><circle cx="6" cy="12" r="3"/><circle cx="18" cy="19" r="3"/><path d="m8.59 13.51 6.83 3.98"/><path d="m15.41 6.51-6.82 3.98"/>"#;
/// star
pub const STAR: &str = r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#;
/// sync
pub const SYNC: &str = r#"<path d="M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8"/><path d="M21 3v5h-5"/><path d="M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16"/><path d="M8 16H3v5"/>"#;
/// times
pub const TIMES: &str = r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#;
/// trash alt
pub const TRASH_ALT: &str = r#"<path d="M3 6h18"/><path d="M19 6v14c0 1-1 2-2 2H7c-1 0-2-1-2-2V6"/><path d="M8 6V4c0-1 1-2 2-2h4c1 0 2 1 2 2v2"/>"#;

/// Registry of every icon by kebab-case name, sorted by name
pub(crate) const REGISTRY: &[(&str, &str)] = &[
    ("angle-down", ANGLE_DOWN),
    ("angle-left", ANGLE_LEFT),
    ("angle-right", ANGLE_RIGHT),
    ("angle-up", ANGLE_UP),
    ("apps", APPS),
    ("clock-nine", CLOCK_NINE),
    ("cog", COG),
    ("info-circle", INFO_CIRCLE),
    ("plus", PLUS),
    ("save", SAVE),
    ("search", SEARCH),
    ("share-alt", SHARE_ALT),
    ("star", STAR),
    ("sync", SYNC),
    ("times", TIMES),
    ("trash-alt", TRASH_ALT),
];
