// File: crates/dash-core/tests/theme.rs
// Purpose: Theme registry lookups, presets and TOML overrides.

use dash_core::theme::{find, presets, Role, ThemeOverrides};
use dash_core::{Color, DashError, Theme};

#[test]
fn every_role_resolves_by_name() {
    let theme = Theme::midnight();
    for role in Role::ALL {
        assert_eq!(theme.lookup(role.name()).unwrap(), theme.get(role));
        assert_eq!(Role::from_name(role.name()).unwrap(), role);
    }
}

#[test]
fn unknown_role_is_an_error_not_a_default() {
    let err = Theme::midnight().lookup("accent_sixth").unwrap_err();
    assert!(matches!(err, DashError::UndefinedRole(name) if name == "accent_sixth"));
}

#[test]
fn presets_are_distinct_and_findable() {
    let all = presets();
    assert_eq!(all.len(), 4);
    for theme in &all {
        assert_eq!(&find(&theme.name).unwrap(), theme);
    }
    assert_eq!(find("Solarized-Dark").unwrap().name, "solarized-dark");
    assert!(matches!(find("sepia"), Err(DashError::UnknownPreset(_))));
    assert_ne!(all[0].background, all[1].background);
}

#[test]
fn accents_cycle_through_the_palette() {
    let theme = Theme::daylight();
    let palette = theme.palette();
    assert_eq!(theme.accent(0), palette[0]);
    assert_eq!(theme.accent(5), palette[0]);
    assert_eq!(theme.accent(7), palette[2]);
    assert_eq!(Theme::accent_role(3), Role::AccentQuaternary);
}

#[test]
fn hex_colors_parse_and_print() {
    let c = Color::from_hex("#1A2b3C").unwrap();
    assert_eq!((c.r, c.g, c.b, c.a), (0x1a, 0x2b, 0x3c, 255));
    assert_eq!(c.to_string(), "#1a2b3c");
    assert_eq!(Color::from_hex("#1a2b3c80").unwrap().to_string(), "#1a2b3c80");
    assert!(matches!(Color::from_hex("#12345"), Err(DashError::InvalidColor(_))));
    assert!(Color::from_hex("#zzzzzz").is_err());
}

#[test]
fn overrides_replace_roles_and_fonts() {
    let overrides = ThemeOverrides::from_toml_str(
        r##"
preset = "daylight"

[colors]
accent_primary = "#ff0000"

[fonts]
family = "Inter, sans-serif"
title_size = 18.0
"##,
    )
    .unwrap();
    let theme = overrides.resolve(Theme::midnight()).unwrap();
    assert_eq!(theme.name, "daylight");
    assert_eq!(theme.accent_primary.to_hex(), "#ff0000");
    assert_eq!(theme.background, Theme::daylight().background);
    assert_eq!(theme.font_family, "Inter, sans-serif");
    assert_eq!(theme.title_font_size, 18.0);
}

#[test]
fn overrides_fail_loudly() {
    let bad_role = ThemeOverrides::from_toml_str("[colors]\nshadow = \"#000000\"\n").unwrap();
    assert!(matches!(bad_role.resolve(Theme::midnight()), Err(DashError::UndefinedRole(_))));

    let bad_color = ThemeOverrides::from_toml_str("[colors]\ngrid = \"grey\"\n").unwrap();
    assert!(matches!(bad_color.resolve(Theme::midnight()), Err(DashError::InvalidColor(_))));

    assert!(matches!(ThemeOverrides::from_toml_str("colour = 1"), Err(DashError::Toml(_))));
}
