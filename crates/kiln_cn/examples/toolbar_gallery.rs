//! Toolbar Gallery
//!
//! Renders a dashboard-style toolbar in every preset and prints the HTML
//! together with the stylesheet it needs.
//!
//! Run with: cargo run -p kiln_cn --example toolbar_gallery
//! Set `KILN_THEME=path/to/kiln-theme.toml` to start from a config file.

use kiln_cn::prelude::*;
use kiln_theme::ThemeConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    match std::env::var("KILN_THEME") {
        Ok(path) => ThemeState::init_from_config(&ThemeConfig::load(path)?)?,
        Err(_) => ThemeState::init_default(),
    }

    let toolbar = toolbar();
    tracing::info!("rendering {} toolbar buttons", toolbar.len());

    // Global theme first, then every preset explicitly
    print_toolbar("active theme", &toolbar, None);
    for preset in ThemePreset::all() {
        for scheme in [ColorScheme::Dark, ColorScheme::Light] {
            let theme = preset.theme(scheme);
            print_toolbar(&format!("{preset} / {scheme:?}"), &toolbar, Some(&theme));
        }
    }

    Ok(())
}

fn toolbar() -> Vec<ToolbarButtonBuilder> {
    vec![
        cn::toolbar_button()
            .icon("apps")
            .label("General / Home")
            .is_open(false),
        cn::toolbar_button()
            .icon("star")
            .tooltip("Mark as favorite")
            .narrow(true),
        cn::toolbar_button()
            .icon("share-alt")
            .tooltip("Share dashboard or panel"),
        cn::toolbar_button()
            .icon("cog")
            .tooltip("Dashboard settings"),
        cn::toolbar_button()
            .icon("clock-nine")
            .label("Last 6 hours")
            .is_open(false)
            .aria_label("Time range picker"),
        cn::toolbar_button()
            .icon("sync")
            .tooltip("Refresh dashboard")
            .on_click(|_| tracing::info!("refresh clicked")),
        cn::toolbar_button()
            .label("Save")
            .variant(ButtonVariant::Primary),
        cn::toolbar_button()
            .icon("trash-alt")
            .label("Discard")
            .variant(ButtonVariant::Destructive),
    ]
}

fn print_toolbar(title: &str, buttons: &[ToolbarButtonBuilder], theme: Option<&KilnTheme>) {
    let nodes: Vec<RenderNode> = buttons
        .iter()
        .map(|button| match theme {
            Some(theme) => button.render_with(theme),
            None => button.render(),
        })
        .collect();

    let mut sheet = StyleSheet::new();
    for node in &nodes {
        sheet.collect(node);
    }

    // Bubble for the host's tooltip overlay
    let bubble = match theme {
        Some(theme) => tooltip_bubble_style(theme),
        None => tooltip_bubble_style(&ThemeState::get().snapshot()),
    };
    sheet.insert(bubble);

    println!("<!-- {title} -->");
    println!("<style>\n{}</style>", sheet.to_css());
    println!("<nav class=\"toolbar\">");
    for node in &nodes {
        println!("  {}", node.to_html());
    }
    println!("</nav>\n");
}
