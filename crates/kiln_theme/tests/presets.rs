use kiln_theme::{ColorScheme, ColorToken, RadiusToken, Theme, ThemePreset};

#[test]
fn preset_catalog_contains_expected_presets() {
    let mut ids: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["kiln", "slate"]);
}

#[test]
fn preset_ids_round_trip() {
    for preset in ThemePreset::all() {
        assert_eq!(ThemePreset::from_id(preset.id()), Some(*preset));
    }
    assert_eq!(ThemePreset::from_id("zinc"), None);
}

#[test]
fn bundles_have_distinct_light_and_dark_surfaces() {
    for preset in ThemePreset::all() {
        let bundle = preset.bundle();
        let light = bundle.for_scheme(ColorScheme::Light);
        let dark = bundle.for_scheme(ColorScheme::Dark);

        assert_ne!(
            light.colors().get(ColorToken::Surface),
            dark.colors().get(ColorToken::Surface),
            "Preset {:?} should have distinct light/dark surfaces",
            preset
        );
        assert_eq!(light.color_scheme(), ColorScheme::Light);
        assert_eq!(dark.color_scheme(), ColorScheme::Dark);
    }
}

#[test]
fn slate_preset_uses_rounder_radii() {
    let slate = ThemePreset::Slate.theme(ColorScheme::Light);
    let kiln = ThemePreset::Kiln.theme(ColorScheme::Light);

    assert_eq!(slate.radii().get(RadiusToken::Sm), 4.0);
    assert_eq!(slate.radii().get(RadiusToken::Md), 6.0);
    assert_eq!(slate.radii().get(RadiusToken::Lg), 8.0);
    assert!(kiln.radii().get(RadiusToken::Sm) < slate.radii().get(RadiusToken::Sm));
}

#[test]
fn fills_keep_readable_text() {
    for preset in ThemePreset::all() {
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            let theme = preset.theme(scheme);
            assert_ne!(
                theme.colors().get(ColorToken::Primary),
                theme.colors().get(ColorToken::TextOnFill),
                "preset={preset:?} scheme={scheme:?}"
            );
        }
    }
}
