//! Toolbar button styles
//!
//! [`ToolbarButtonStyles`] builds every fragment the button can use from a
//! theme. Which of them apply to a given button is decided by two rule
//! tables, one for the root element and one for the label wrapper, each a
//! list of (predicate, fragment) pairs folded in order.

use kiln_layout::prelude::*;
use kiln_theme::{hover_color, variant_properties, ButtonVariant, Theme, VariantProperties};

/// Edge length of the image icon slot
const IMG_SIZE: f32 = 16.0;

/// Border width of the button outline
const BORDER_WIDTH: f32 = 1.0;

/// The props that affect styling
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleInputs {
    pub variant: ButtonVariant,
    pub full_width: bool,
    pub narrow: bool,
    pub has_icon: bool,
    /// The open/closed prop was given at all, whatever its value
    pub has_open_indicator: bool,
}

/// Key of one fragment in [`ToolbarButtonStyles`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FragmentKey {
    Button,
    ButtonFullWidth,
    Narrow,
    PrimaryVariant,
    DestructiveVariant,
    Content,
    ContentWithIcon,
    ContentWithRightIcon,
    Img,
}

struct StyleRule {
    applies: fn(&StyleInputs) -> bool,
    fragment: FragmentKey,
}

/// Root element rules, in application order
const BUTTON_RULES: &[StyleRule] = &[
    StyleRule {
        applies: |_| true,
        fragment: FragmentKey::Button,
    },
    StyleRule {
        applies: |inputs| inputs.full_width,
        fragment: FragmentKey::ButtonFullWidth,
    },
    StyleRule {
        applies: |inputs| inputs.narrow,
        fragment: FragmentKey::Narrow,
    },
    StyleRule {
        applies: |inputs| inputs.variant == ButtonVariant::Primary,
        fragment: FragmentKey::PrimaryVariant,
    },
    StyleRule {
        applies: |inputs| inputs.variant == ButtonVariant::Destructive,
        fragment: FragmentKey::DestructiveVariant,
    },
];

/// Label wrapper rules, in application order
const CONTENT_RULES: &[StyleRule] = &[
    StyleRule {
        applies: |_| true,
        fragment: FragmentKey::Content,
    },
    StyleRule {
        applies: |inputs| inputs.has_icon,
        fragment: FragmentKey::ContentWithIcon,
    },
    StyleRule {
        applies: |inputs| inputs.has_open_indicator,
        fragment: FragmentKey::ContentWithRightIcon,
    },
];

/// Every fragment a toolbar button can use, built from one theme
#[derive(Clone, Debug, PartialEq)]
pub struct ToolbarButtonStyles {
    pub button: StyleFragment,
    pub narrow: StyleFragment,
    pub img: StyleFragment,
    pub button_full_width: StyleFragment,
    pub content: StyleFragment,
    pub content_with_icon: StyleFragment,
    pub content_with_right_icon: StyleFragment,
    pub primary_variant: StyleFragment,
    pub destructive_variant: StyleFragment,
}

impl ToolbarButtonStyles {
    pub fn new(theme: &dyn Theme) -> Self {
        let colors = theme.colors();
        let spacing = theme.spacing();
        let height = theme.heights().md;

        let button = StyleFragment::builder("toolbar-button")
            .set("background", StyleValue::Color(colors.surface))
            .set(
                "border",
                StyleValue::solid_border(BORDER_WIDTH, colors.border_secondary),
            )
            .set("height", StyleValue::px(height))
            .set("padding", StyleValue::horizontal(spacing.sm))
            .set("color", StyleValue::Color(colors.text_secondary))
            .set("border-radius", StyleValue::px(theme.radii().radius_sm))
            .set("line-height", StyleValue::px(height - 2.0 * BORDER_WIDTH))
            .set("display", StyleValue::Keyword("flex"))
            .set("align-items", StyleValue::Keyword("center"))
            .on_focus("outline", StyleValue::Keyword("none"))
            .on_hover("color", StyleValue::Color(colors.text_primary))
            .on_hover(
                "background",
                StyleValue::Color(hover_color(colors.surface, theme)),
            )
            .build();

        Self {
            button,
            narrow: StyleFragment::builder("toolbar-button-narrow")
                .set("padding", StyleValue::horizontal(spacing.xs))
                .build(),
            img: StyleFragment::builder("toolbar-button-img")
                .set("width", StyleValue::px(IMG_SIZE))
                .set("height", StyleValue::px(IMG_SIZE))
                .set("margin-right", StyleValue::px(spacing.sm))
                .build(),
            button_full_width: StyleFragment::builder("toolbar-button-full-width")
                .set("flex-grow", StyleValue::Number(1.0))
                .build(),
            content: StyleFragment::builder("toolbar-button-content")
                .set("flex-grow", StyleValue::Number(1.0))
                .build(),
            content_with_icon: StyleFragment::builder("toolbar-button-content-icon")
                .set("padding-left", StyleValue::px(spacing.sm))
                .build(),
            content_with_right_icon: StyleFragment::builder("toolbar-button-content-right-icon")
                .set("padding-right", StyleValue::px(spacing.xs))
                .build(),
            primary_variant: variant_fragment(
                "toolbar-button-primary",
                variant_properties(theme, ButtonVariant::Primary),
            ),
            destructive_variant: variant_fragment(
                "toolbar-button-destructive",
                variant_properties(theme, ButtonVariant::Destructive),
            ),
        }
    }

    pub fn get(&self, key: FragmentKey) -> &StyleFragment {
        match key {
            FragmentKey::Button => &self.button,
            FragmentKey::ButtonFullWidth => &self.button_full_width,
            FragmentKey::Narrow => &self.narrow,
            FragmentKey::PrimaryVariant => &self.primary_variant,
            FragmentKey::DestructiveVariant => &self.destructive_variant,
            FragmentKey::Content => &self.content,
            FragmentKey::ContentWithIcon => &self.content_with_icon,
            FragmentKey::ContentWithRightIcon => &self.content_with_right_icon,
            FragmentKey::Img => &self.img,
        }
    }

    /// Select the fragments that apply to `inputs`
    pub fn resolve(&self, inputs: &StyleInputs) -> ResolvedStyles {
        ResolvedStyles {
            button: self.fold(BUTTON_RULES, inputs),
            content: self.fold(CONTENT_RULES, inputs),
            img: self.img.clone(),
        }
    }

    fn fold(&self, rules: &[StyleRule], inputs: &StyleInputs) -> Vec<StyleFragment> {
        rules
            .iter()
            .filter(|rule| (rule.applies)(inputs))
            .map(|rule| self.get(rule.fragment).clone())
            .collect()
    }
}

fn variant_fragment(label: &'static str, props: VariantProperties) -> StyleFragment {
    let fill = props.fill;
    StyleFragment::builder(label)
        .set("border-color", StyleValue::Color(props.border_color))
        .set(
            "background",
            StyleValue::LinearGradient {
                from: fill.background_from,
                to: fill.background_to,
            },
        )
        .set("color", StyleValue::Color(fill.text))
        .on_hover("background", StyleValue::Color(fill.hover_background))
        .on_hover("color", StyleValue::Color(fill.text))
        .on_focus("background", StyleValue::Color(fill.hover_background))
        .on_focus("outline", StyleValue::Keyword("none"))
        .build()
}

/// Fragments chosen for one button, in application order
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyles {
    /// Root element fragments
    pub button: Vec<StyleFragment>,
    /// Label wrapper fragments
    pub content: Vec<StyleFragment>,
    /// Image slot fragment
    pub img: StyleFragment,
}

impl ResolvedStyles {
    pub fn button_classes(&self) -> ClassList {
        ClassList::from_fragments(&self.button)
    }

    pub fn content_classes(&self) -> ClassList {
        ClassList::from_fragments(&self.content)
    }

    pub fn img_classes(&self) -> ClassList {
        ClassList::from_fragments([&self.img])
    }
}

/// Compute the fragments for one prop combination under `theme`
pub fn resolve(
    theme: &dyn Theme,
    variant: ButtonVariant,
    full_width: bool,
    narrow: bool,
    has_icon: bool,
    has_open_indicator: bool,
) -> ResolvedStyles {
    ToolbarButtonStyles::new(theme).resolve(&StyleInputs {
        variant,
        full_width,
        narrow,
        has_icon,
        has_open_indicator,
    })
}
