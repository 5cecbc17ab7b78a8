//! Spacing tokens for theming

/// Semantic spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum SpacingToken {
    Xxs,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl SpacingToken {
    /// Stable id used in theme config files.
    pub fn id(self) -> &'static str {
        match self {
            Self::Xxs => "xxs",
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// Look a token up by its config id.
    pub fn from_id(id: &str) -> Option<Self> {
        [
            Self::Xxs,
            Self::Xs,
            Self::Sm,
            Self::Md,
            Self::Lg,
            Self::Xl,
        ]
        .into_iter()
        .find(|token| token.id() == id)
    }
}

/// Spacing scale in pixels
#[derive(Clone, Debug, PartialEq)]
pub struct SpacingTokens {
    pub xxs: f32,
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
}

impl SpacingTokens {
    /// Get spacing value by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Xxs => self.xxs,
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
        }
    }

    /// Replace the value behind a token key
    pub fn set(&mut self, token: SpacingToken, value: f32) {
        match token {
            SpacingToken::Xxs => self.xxs = value,
            SpacingToken::Xs => self.xs = value,
            SpacingToken::Sm => self.sm = value,
            SpacingToken::Md => self.md = value,
            SpacingToken::Lg => self.lg = value,
            SpacingToken::Xl => self.xl = value,
        }
    }
}

impl Default for SpacingTokens {
    fn default() -> Self {
        Self {
            xxs: 2.0,
            xs: 4.0,
            sm: 8.0,
            md: 16.0,
            lg: 24.0,
            xl: 32.0,
        }
    }
}
