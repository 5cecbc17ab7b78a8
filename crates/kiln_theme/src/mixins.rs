//! Small color helpers shared by component styles

use kiln_core::Color;

use crate::theme::Theme;

/// Amount a hovered surface moves away from its resting color
const HOVER_SHIFT: f32 = 0.02;

/// Hover color for a surface: brighter on dark themes, darker on light ones
pub fn hover_color(color: Color, theme: &dyn Theme) -> Color {
    if theme.is_dark() {
        color.lighten(HOVER_SHIFT)
    } else {
        color.darken(HOVER_SHIFT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::KilnTheme;

    #[test]
    fn test_hover_direction_follows_scheme() {
        let base = Color::rgb(0.5, 0.5, 0.5);
        assert!(hover_color(base, &KilnTheme::dark()).r > base.r);
        assert!(hover_color(base, &KilnTheme::light()).r < base.r);
    }
}
