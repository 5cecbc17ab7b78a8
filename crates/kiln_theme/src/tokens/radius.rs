//! Border radius tokens

/// Semantic radius token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum RadiusToken {
    Sm,
    Md,
    Lg,
}

impl RadiusToken {
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

/// Border radii in pixels
#[derive(Clone, Debug, PartialEq)]
pub struct RadiusTokens {
    pub radius_sm: f32,
    pub radius_md: f32,
    pub radius_lg: f32,
}

impl RadiusTokens {
    /// Get radius value by token key
    pub fn get(&self, token: RadiusToken) -> f32 {
        match token {
            RadiusToken::Sm => self.radius_sm,
            RadiusToken::Md => self.radius_md,
            RadiusToken::Lg => self.radius_lg,
        }
    }

    pub fn set(&mut self, token: RadiusToken, value: f32) {
        match token {
            RadiusToken::Sm => self.radius_sm = value,
            RadiusToken::Md => self.radius_md = value,
            RadiusToken::Lg => self.radius_lg = value,
        }
    }
}

impl Default for RadiusTokens {
    fn default() -> Self {
        Self {
            radius_sm: 2.0,
            radius_md: 3.0,
            radius_lg: 5.0,
        }
    }
}
