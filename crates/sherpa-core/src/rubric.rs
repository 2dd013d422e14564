//! Rigor rubric policy.
//!
//! One table holds the credit-tier wording for each rigor level. The plain and
//! rich renderings both decorate that same wording: plain output prefixes a
//! bracketed label and stays ASCII, rich output prefixes a symbolic marker.
//!
//! Mild items have no partial-credit tier; it renders as `N/A` in both styles.

use serde::Serialize;

use crate::enums::RigorLevel;

/// Text rendered for a tier the policy does not define.
pub const NOT_APPLICABLE: &str = "N/A";

/// Rendering style for tier text and rigor indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TierStyle {
    /// ASCII only, for targets with a restricted character set.
    Plain,
    /// Symbolic markers, for targets that render arbitrary glyphs.
    Rich,
}

/// Credit tiers, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CreditTier {
    Full,
    Partial,
    Minimal,
    None,
}

impl CreditTier {
    pub const ALL: [Self; 4] = [Self::Full, Self::Partial, Self::Minimal, Self::None];

    /// Column heading used by the rubric tables.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Full => "Full Credit",
            Self::Partial => "Partial Credit",
            Self::Minimal => "Minimal Credit",
            Self::None => "No Credit",
        }
    }

    #[must_use]
    pub const fn marker(self, style: TierStyle) -> &'static str {
        match (style, self) {
            (TierStyle::Plain, Self::Full) => "[FULL]",
            (TierStyle::Plain, Self::Partial) => "[PARTIAL]",
            (TierStyle::Plain, Self::Minimal) => "[MINIMAL]",
            (TierStyle::Plain, Self::None) => "[NONE]",
            (TierStyle::Rich, Self::Full) => "\u{2705}",
            (TierStyle::Rich, Self::Partial) => "\u{1F7E1}",
            (TierStyle::Rich, Self::Minimal) => "\u{1F7E0}",
            (TierStyle::Rich, Self::None) => "\u{274C}",
        }
    }
}

/// Undecorated tier wording for one rigor level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierPolicy {
    pub full: &'static str,
    pub partial: Option<&'static str>,
    pub minimal: &'static str,
    pub none: &'static str,
}

impl TierPolicy {
    #[must_use]
    pub const fn text(&self, tier: CreditTier) -> Option<&'static str> {
        match tier {
            CreditTier::Full => Some(self.full),
            CreditTier::Partial => self.partial,
            CreditTier::Minimal => Some(self.minimal),
            CreditTier::None => Some(self.none),
        }
    }
}

const MILD: TierPolicy = TierPolicy {
    full: "Accurately recalls the fact, term, or procedure and applies it correctly",
    partial: None,
    minimal: "Attempts the item but with significant errors or omissions",
    none: "No response, or the response is entirely incorrect",
};

const MEDIUM: TierPolicy = TierPolicy {
    full: "Applies concepts and skills accurately with clear, complete reasoning",
    partial: Some("Applies concepts with minor errors or incomplete reasoning"),
    minimal: "Shows limited understanding of the underlying concepts",
    none: "No response, or no evidence of conceptual understanding",
};

const SPICY: TierPolicy = TierPolicy {
    full: "Uses strategic thinking and applies advanced concepts with well-supported reasoning",
    partial: Some("Shows sound strategic thinking with gaps in justification or execution"),
    minimal: "Begins a strategy but does not carry the reasoning through",
    none: "No response, or no evidence of strategic thinking",
};

/// Policy row for a rigor level.
#[must_use]
pub const fn policy(level: RigorLevel) -> &'static TierPolicy {
    match level {
        RigorLevel::Mild => &MILD,
        RigorLevel::Medium => &MEDIUM,
        RigorLevel::Spicy => &SPICY,
    }
}

/// Rendered credit descriptors, ordered `(full, partial, minimal, none)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditTiers {
    pub full: String,
    pub partial: String,
    pub minimal: String,
    pub none: String,
}

impl CreditTiers {
    #[must_use]
    pub fn get(&self, tier: CreditTier) -> &str {
        match tier {
            CreditTier::Full => &self.full,
            CreditTier::Partial => &self.partial,
            CreditTier::Minimal => &self.minimal,
            CreditTier::None => &self.none,
        }
    }

    /// Tier texts in column order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        CreditTier::ALL
            .into_iter()
            .map(|tier| self.get(tier).to_string())
            .collect()
    }
}

/// Render one tier of `level` in `style`.
#[must_use]
pub fn tier_text(level: RigorLevel, tier: CreditTier, style: TierStyle) -> String {
    policy(level).text(tier).map_or_else(
        || NOT_APPLICABLE.to_string(),
        |text| format!("{} {text}", tier.marker(style)),
    )
}

/// Render all four tiers of `level` in `style`.
#[must_use]
pub fn tiers(level: RigorLevel, style: TierStyle) -> CreditTiers {
    CreditTiers {
        full: tier_text(level, CreditTier::Full, style),
        partial: tier_text(level, CreditTier::Partial, style),
        minimal: tier_text(level, CreditTier::Minimal, style),
        none: tier_text(level, CreditTier::None, style),
    }
}

/// Rigor marker glyph repeated once per rank in rich output.
pub const RICH_RIGOR_MARKER: &str = "\u{1F336}\u{FE0F}";

/// Compact rigor indicator.
///
/// Rich: the pepper marker repeated 1, 2, or 3 times. Plain: `MILD (*)`,
/// `MEDIUM (**)`, `SPICY (***)`.
#[must_use]
pub fn rigor_indicator(level: RigorLevel, style: TierStyle) -> String {
    let count = usize::from(level.rank());
    match style {
        TierStyle::Rich => RICH_RIGOR_MARKER.repeat(count),
        TierStyle::Plain => format!("{} ({})", level.label(), "*".repeat(count)),
    }
}
