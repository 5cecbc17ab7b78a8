//! Toolbar button render tests

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use kiln_cn::prelude::*;
use kiln_core::Color;
use kiln_theme::{variant_properties, ColorToken, ThemeConfig};
use pretty_assertions::assert_eq;

fn button_of(node: &RenderNode) -> &Element {
    node.find_element("button").expect("button element")
}

fn labels(classes: &ClassList) -> Vec<&'static str> {
    classes.labels()
}

#[test]
fn test_variant_fragment_matches_variant_lookup() {
    for theme in [KilnTheme::dark(), KilnTheme::light()] {
        for variant in ButtonVariant::all() {
            let node = cn::toolbar_button()
                .label("Run")
                .variant(*variant)
                .render_with(&theme);
            let button = button_of(&node);
            let computed = button.classes.computed_style();

            match variant {
                ButtonVariant::Default => {
                    assert_eq!(labels(&button.classes), vec!["toolbar-button"]);
                    assert_eq!(
                        computed.get("background"),
                        Some(&StyleValue::Color(theme.colors().surface))
                    );
                }
                _ => {
                    let props = variant_properties(&theme, *variant);
                    assert_eq!(button.classes.len(), 2);
                    assert_eq!(
                        computed.get("border-color"),
                        Some(&StyleValue::Color(props.border_color))
                    );
                    assert_eq!(
                        computed.get("color"),
                        Some(&StyleValue::Color(props.fill.text))
                    );
                }
            }
        }
    }
}

#[test]
fn test_full_width_and_narrow_combinations() {
    let theme = KilnTheme::dark();
    let cases = [
        (false, false, vec!["toolbar-button"]),
        (true, false, vec!["toolbar-button", "toolbar-button-full-width"]),
        (false, true, vec!["toolbar-button", "toolbar-button-narrow"]),
        (
            true,
            true,
            vec![
                "toolbar-button",
                "toolbar-button-full-width",
                "toolbar-button-narrow",
            ],
        ),
    ];

    for (full_width, narrow, expected) in cases {
        let node = cn::toolbar_button()
            .full_width(full_width)
            .narrow(narrow)
            .render_with(&theme);
        assert_eq!(
            labels(&button_of(&node).classes),
            expected,
            "full_width={full_width} narrow={narrow}"
        );
    }
}

#[test]
fn test_open_indicator_is_tri_state() {
    let theme = KilnTheme::dark();

    let unset = cn::toolbar_button().label("Menu").render_with(&theme);
    assert!(unset.icon_names().is_empty());
    let content = unset.find_element("span").unwrap();
    assert!(!content
        .classes
        .contains_label("toolbar-button-content-right-icon"));

    let closed = cn::toolbar_button()
        .label("Menu")
        .is_open(false)
        .render_with(&theme);
    assert_eq!(closed.icon_names(), vec![COLLAPSED_INDICATOR]);

    let open = cn::toolbar_button()
        .label("Menu")
        .is_open(true)
        .render_with(&theme);
    assert_eq!(open.icon_names(), vec![EXPANDED_INDICATOR]);
    let content = open.find_element("span").unwrap();
    assert!(content
        .classes
        .contains_label("toolbar-button-content-right-icon"));
}

#[test]
fn test_icon_renders_before_everything_else() {
    let node = cn::toolbar_button()
        .icon("cog")
        .label("Settings")
        .is_open(false)
        .render_with(&KilnTheme::dark());

    let button = button_of(&node);
    let first = button.children[0].as_icon().unwrap();
    assert_eq!(first.name.as_str(), "cog");
    assert_eq!(first.size, IconSize::Lg);
    assert_eq!(node.icon_names(), vec!["cog", COLLAPSED_INDICATOR]);

    let content = button.children[1].as_element().unwrap();
    assert_eq!(
        labels(&content.classes),
        vec![
            "toolbar-button-content",
            "toolbar-button-content-icon",
            "toolbar-button-content-right-icon",
        ]
    );
}

#[test]
fn test_image_slot_is_sixteen_pixels() {
    let node = cn::toolbar_button()
        .img_src("/public/img/kiln_logo.svg")
        .render_with(&KilnTheme::dark());

    let img = node.find_element("img").unwrap();
    assert_eq!(img.attributes.text("src"), Some("/public/img/kiln_logo.svg"));
    let style = img.classes.computed_style();
    assert_eq!(style.get("width"), Some(&StyleValue::Px(16.0)));
    assert_eq!(style.get("height"), Some(&StyleValue::Px(16.0)));
}

#[test]
fn test_favorite_primary_scenario() {
    let theme = KilnTheme::dark();
    let node = cn::toolbar_button()
        .icon("star")
        .tooltip("Favorite")
        .variant(ButtonVariant::Primary)
        .render_with(&theme);

    let tooltip = node.as_tooltip().expect("tooltip wrapper");
    assert_eq!(tooltip.text, "Favorite");
    assert_eq!(tooltip.side, TooltipSide::Bottom);

    let button = tooltip.child.as_element().unwrap();
    assert_eq!(button.tag, "button");
    assert_eq!(
        labels(&button.classes),
        vec!["toolbar-button", "toolbar-button-primary"]
    );
    // Icon only, no label wrapper
    assert_eq!(button.children.len(), 1);
    assert!(node.find_element("span").is_none());
}

#[test]
fn test_narrow_collapsed_scenario() {
    let theme = KilnTheme::light();
    let node = cn::toolbar_button()
        .is_open(false)
        .narrow(true)
        .render_with(&theme);

    assert!(node.as_tooltip().is_none());
    let button = button_of(&node);
    assert_eq!(
        labels(&button.classes),
        vec!["toolbar-button", "toolbar-button-narrow"]
    );
    assert_eq!(button.children.len(), 1);
    assert_eq!(node.icon_names(), vec![COLLAPSED_INDICATOR]);
    assert_eq!(
        button.classes.computed_style().get("padding"),
        Some(&StyleValue::horizontal(theme.spacing().xs))
    );
}

#[test]
fn test_caller_class_comes_last() {
    let node = cn::toolbar_button()
        .narrow(true)
        .class("dashboard-toolbar")
        .attr("class", "extra")
        .render_with(&KilnTheme::dark());

    let button = button_of(&node);
    let names: Vec<&str> = button.classes.names().collect();
    assert_eq!(&names[names.len() - 2..], &["dashboard-toolbar", "extra"]);
    assert_eq!(button.classes.fragments().count(), 2);
    assert!(!button.attributes.contains("class"));
}

#[test]
fn test_passthrough_attributes() {
    let node = cn::toolbar_button()
        .label("Submit")
        .attr("type", "submit")
        .attr("data-testid", "save-dashboard")
        .aria_label("Save dashboard")
        .disabled(true)
        .render_with(&KilnTheme::dark());

    let button = button_of(&node);
    assert_eq!(button.attributes.text("type"), Some("submit"));
    assert_eq!(button.attributes.text("data-testid"), Some("save-dashboard"));
    assert_eq!(button.attributes.text("aria-label"), Some("Save dashboard"));
    assert_eq!(button.attributes.get("disabled"), Some(&AttrValue::Bool(true)));

    let default = cn::toolbar_button().render_with(&KilnTheme::dark());
    assert_eq!(button_of(&default).attributes.text("type"), Some("button"));
}

#[test]
fn test_attribute_names_cannot_inject_markup() {
    let html = cn::toolbar_button()
        .label("Go")
        .attr("x onmouseover=\"alert(1)\" y", "z")
        .attr("data-action", "go")
        .render_with(&KilnTheme::dark())
        .to_html();

    assert!(!html.contains("onmouseover"));
    assert!(html.contains(" type=\"button\" data-action=\"go\">"));
}

#[test]
fn test_node_ref_reaches_native_button() {
    let node_ref = NodeRef::new();
    let node = cn::toolbar_button()
        .tooltip("Refresh")
        .icon("sync")
        .node_ref(node_ref.clone())
        .render_with(&KilnTheme::dark());

    let button = button_of(&node);
    assert_eq!(button.node_ref.as_ref(), Some(&node_ref));
    assert!(node.find_element("span").is_none());

    // Host attaches the element; the caller sees it through its handle
    let id = NodeId::next();
    if let Some(forwarded) = &button.node_ref {
        forwarded.set(Some(id));
    }
    assert_eq!(node_ref.get(), Some(id));
}

#[test]
fn test_click_dispatch() {
    let clicks = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&clicks);

    let node = cn::toolbar_button()
        .label("Add panel")
        .on_click(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .render_with(&KilnTheme::dark());

    let button = button_of(&node);
    assert!(button.dispatch(&Event::new(EventKind::Click)));
    assert!(button.dispatch(&Event::new(EventKind::Click)));
    assert!(!button.dispatch(&Event::new(EventKind::Focus)));
    assert_eq!(clicks.load(Ordering::SeqCst), 2);
}

#[test]
fn test_render_is_idempotent() {
    let theme = KilnTheme::dark();
    let node_ref = NodeRef::new();
    let builder = cn::toolbar_button()
        .icon("apps")
        .label("Dashboards")
        .tooltip("Browse")
        .is_open(true)
        .full_width(true)
        .variant(ButtonVariant::Destructive)
        .node_ref(node_ref);

    assert_eq!(builder.render_with(&theme), builder.render_with(&theme));
}

#[test]
fn test_theme_change_changes_class_names() {
    let builder = cn::toolbar_button().label("Zoom");
    let dark = builder.render_with(&KilnTheme::dark());
    let light = builder.render_with(&KilnTheme::light());

    let dark_names: Vec<String> = button_of(&dark).classes.names().map(String::from).collect();
    let light_names: Vec<String> = button_of(&light).classes.names().map(String::from).collect();
    assert_ne!(dark_names, light_names);
}

#[test]
fn test_config_overrides_reach_rendered_styles() {
    let config = ThemeConfig::from_toml_str(
        r##"
        preset = "slate"
        scheme = "light"

        [colors]
        primary-shade = "#1f60c4"

        [spacing]
        sm = 10
        "##,
    )
    .unwrap();
    ThemeState::init_from_config(&config).unwrap();
    let state = ThemeState::get();
    state.set_color_override(ColorToken::Surface, Color::from_hex(0x202226));

    let node = cn::toolbar_button()
        .label("Share")
        .variant(ButtonVariant::Primary)
        .render();

    let style = button_of(&node).classes.computed_style();
    assert_eq!(
        style.get("border-color"),
        Some(&StyleValue::Color(Color::from_hex(0x1f60c4)))
    );

    let default_node = cn::toolbar_button().label("Share").render();
    let default_style = button_of(&default_node).classes.computed_style();
    assert_eq!(
        default_style.get("background"),
        Some(&StyleValue::Color(Color::from_hex(0x202226)))
    );
    assert_eq!(
        default_style.get("padding"),
        Some(&StyleValue::horizontal(10.0))
    );
}

#[test]
fn test_html_and_stylesheet_output() {
    let node = cn::toolbar_button()
        .icon("save")
        .label("Save & exit")
        .tooltip("Save dashboard")
        .render_with(&KilnTheme::dark());

    let html = node.to_html();
    assert!(html.starts_with("<div data-tooltip=\"Save dashboard\" data-placement=\"bottom\">"));
    assert!(html.contains("type=\"button\""));
    assert!(html.contains("data-icon=\"save\""));
    assert!(html.contains("Save &amp; exit"));

    let sheet = StyleSheet::from_tree(&node);
    let button = button_of(&node);
    for class in button.classes.names() {
        assert!(sheet.get(class).is_some(), "missing rule for {class}");
    }
    assert!(sheet.to_css().contains(":hover"));
}
