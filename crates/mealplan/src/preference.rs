use alimento_recipe::Recipe;

/// Dietary preference tokens parsed from comma-separated free text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Preferences {
    tokens: Vec<String>,
}

impl Preferences {
    /// Splits on commas, trims and lowercases each token. Blank input means
    /// "no preference"; empty tokens next to other tokens are kept and match
    /// any tagged recipe.
    pub fn parse(text: &str) -> Self {
        let tokens = text
            .split(',')
            .map(|token| token.trim().to_lowercase())
            .collect::<Vec<_>>();

        if matches!(tokens.as_slice(), [only] if only.is_empty()) {
            return Self::default();
        }

        Self { tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// True when any tag of `recipe` contains any token.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.tokens.iter().any(|token| recipe.has_tag(token))
    }

    /// Recipes the generator may draw from.
    pub fn eligible<'a>(&self, recipes: &'a [Recipe]) -> Eligible<'a> {
        if self.is_empty() {
            return Eligible {
                recipes: recipes.iter().collect(),
                fallback: Fallback::NoPreference,
            };
        }

        let matched = recipes
            .iter()
            .filter(|recipe| self.matches(recipe))
            .collect::<Vec<_>>();

        if matched.is_empty() {
            return Eligible {
                recipes: recipes.iter().collect(),
                fallback: Fallback::NoMatch,
            };
        }

        Eligible {
            recipes: matched,
            fallback: Fallback::None,
        }
    }
}

/// Why the eligible subset is the whole catalog, if it is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fallback {
    None,
    NoPreference,
    NoMatch,
}

#[derive(Clone, Debug)]
pub struct Eligible<'a> {
    pub recipes: Vec<&'a Recipe>,
    pub fallback: Fallback,
}

impl Eligible<'_> {
    /// Preferences were given but nothing matched.
    pub fn is_unmatched(&self) -> bool {
        self.fallback == Fallback::NoMatch
    }
}
