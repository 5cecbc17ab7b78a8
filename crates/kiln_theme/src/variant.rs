//! Variant color lookup for filled controls

use kiln_core::Color;

use crate::theme::Theme;

/// Closed set of button color treatments
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    #[default]
    Default,
    Primary,
    Destructive,
}

impl ButtonVariant {
    pub fn id(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Primary => "primary",
            Self::Destructive => "destructive",
        }
    }

    pub fn all() -> &'static [ButtonVariant] {
        const VARIANTS: [ButtonVariant; 3] = [
            ButtonVariant::Default,
            ButtonVariant::Primary,
            ButtonVariant::Destructive,
        ];
        &VARIANTS
    }
}

/// Fill, text and interaction colors of a variant
///
/// The resting background is a vertical gradient from `background_from`
/// to `background_to`; hover and focus flatten it to `hover_background`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillTreatment {
    pub background_from: Color,
    pub background_to: Color,
    pub text: Color,
    pub hover_background: Color,
}

/// Border color plus fill treatment for one variant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VariantProperties {
    pub border_color: Color,
    pub fill: FillTreatment,
}

/// Resolve the colors a variant uses under `theme`
pub fn variant_properties(theme: &dyn Theme, variant: ButtonVariant) -> VariantProperties {
    let colors = theme.colors();
    match variant {
        ButtonVariant::Default => VariantProperties {
            border_color: colors.border_secondary,
            fill: FillTreatment {
                background_from: colors.surface,
                background_to: colors.surface,
                text: colors.text_secondary,
                hover_background: colors.surface_elevated,
            },
        },
        ButtonVariant::Primary => VariantProperties {
            border_color: colors.primary_shade,
            fill: FillTreatment {
                background_from: colors.primary,
                background_to: colors.primary_shade,
                text: colors.text_on_fill,
                hover_background: colors.primary,
            },
        },
        ButtonVariant::Destructive => VariantProperties {
            border_color: colors.destructive_shade,
            fill: FillTreatment {
                background_from: colors.destructive,
                background_to: colors.destructive_shade,
                text: colors.text_on_fill,
                hover_background: colors.destructive,
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::KilnTheme;

    #[test]
    fn test_primary_uses_brand_fill() {
        let theme = KilnTheme::dark();
        let props = variant_properties(&theme, ButtonVariant::Primary);
        assert_eq!(props.border_color, theme.colors().primary_shade);
        assert_eq!(props.fill.background_from, theme.colors().primary);
        assert_eq!(props.fill.text, theme.colors().text_on_fill);
    }

    #[test]
    fn test_destructive_differs_from_primary() {
        let theme = KilnTheme::light();
        assert_ne!(
            variant_properties(&theme, ButtonVariant::Primary).border_color,
            variant_properties(&theme, ButtonVariant::Destructive).border_color
        );
    }
}
