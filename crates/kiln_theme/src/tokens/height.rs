//! Control height tokens

/// Semantic height token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum HeightToken {
    Sm,
    Md,
    Lg,
}

impl HeightToken {
    /// Stable id used in theme config files.
    pub fn id(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }

    /// Look a token up by its config id.
    pub fn from_id(id: &str) -> Option<Self> {
        [Self::Sm, Self::Md, Self::Lg]
            .into_iter()
            .find(|token| token.id() == id)
    }
}

/// Fixed control heights in pixels (inputs, buttons, toolbars)
#[derive(Clone, Debug, PartialEq)]
pub struct HeightTokens {
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
}

impl HeightTokens {
    pub fn get(&self, token: HeightToken) -> f32 {
        match token {
            HeightToken::Sm => self.sm,
            HeightToken::Md => self.md,
            HeightToken::Lg => self.lg,
        }
    }

    pub fn set(&mut self, token: HeightToken, value: f32) {
        match token {
            HeightToken::Sm => self.sm = value,
            HeightToken::Md => self.md = value,
            HeightToken::Lg => self.lg = value,
        }
    }
}

impl Default for HeightTokens {
    fn default() -> Self {
        Self {
            sm: 24.0,
            md: 32.0,
            lg: 48.0,
        }
    }
}
