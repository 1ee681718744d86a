//! Screen configuration.
//!
//! `ScreenConfig::default()` reproduces the original BioGame home screen. The
//! `serde` feature adds (de)serialization and `serde_json` adds
//! `ScreenConfig::from_json` for hosts that pass config from JS.

use std::collections::HashSet;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, MINI_GAME_TILE_COUNT, TileBadge};
use crate::error::ConfigError;
use crate::view::RowKind;

/// Which of the two home-screen layouts to render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Variant {
    /// Two draggable rows, image-backed rank cards.
    #[default]
    Full,
    /// One draggable row, emoji-badge rank cards, tile ribbons.
    Compact,
}

impl Variant {
    pub fn draggable_rows(self) -> &'static [RowKind] {
        match self {
            Variant::Full => &[RowKind::MiniGames, RowKind::Progress],
            Variant::Compact => &[RowKind::MiniGames],
        }
    }

    pub fn is_draggable(self, row: RowKind) -> bool {
        self.draggable_rows().contains(&row)
    }

    pub fn tile_badge(self, number: usize) -> Option<TileBadge> {
        match (self, number) {
            (Variant::Compact, 1 | 6) => Some(TileBadge::New),
            (Variant::Compact, 3) => Some(TileBadge::Top),
            _ => None,
        }
    }

    pub fn logo_mark(self) -> &'static str {
        match self {
            Variant::Full => "\u{1F642}",
            Variant::Compact => "\u{1F9EC}",
        }
    }

    pub fn withdraw_mark(self) -> &'static str {
        match self {
            Variant::Full => "\u{1FA99}",
            Variant::Compact => "\u{1F4B0}",
        }
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "full" => Ok(Variant::Full),
            "compact" => Ok(Variant::Compact),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct ScreenConfig {
    pub variant: Variant,
    pub brand: String,
    /// Currency counter shown in the top bar.
    pub diamonds: u32,
    pub tile_count: usize,
    /// Id of the container the screen is appended to; `None` means `<body>`.
    pub root_id: Option<String>,
    /// Optional stylesheet href injected into `<head>`.
    pub stylesheet: Option<String>,
    pub document_title: String,
    pub description: String,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Full,
            brand: "BioGame".to_string(),
            diamonds: 120,
            tile_count: MINI_GAME_TILE_COUNT,
            root_id: None,
            stylesheet: None,
            document_title: "BioGame".to_string(),
            description: "Gamified biology learning home experience.".to_string(),
        }
    }
}

impl ScreenConfig {
    pub fn with_variant(variant: Variant) -> Self {
        Self {
            variant,
            ..Self::default()
        }
    }

    #[cfg(feature = "serde_json")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))
    }

    /// Check the catalog invariants the view relies on.
    pub fn validate(&self, catalog: &Catalog<'_>) -> Result<(), ConfigError> {
        let first = catalog.ranks.first().ok_or(ConfigError::EmptyRanks)?;
        if !first.unlocked {
            return Err(ConfigError::FirstRankLocked {
                title: first.title.to_string(),
            });
        }
        let mut seen = HashSet::new();
        for rank in catalog.ranks {
            if !seen.insert(rank.title) {
                return Err(ConfigError::DuplicateRankTitle(rank.title.to_string()));
            }
        }
        if catalog.mini_game_names.len() < self.tile_count {
            return Err(ConfigError::MissingTileNames {
                needed: self.tile_count,
                available: catalog.mini_game_names.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MINI_GAMES, RANKS, Rank};

    #[test]
    fn variant_parsing() {
        assert_eq!("full".parse::<Variant>(), Ok(Variant::Full));
        assert_eq!(" Compact ".parse::<Variant>(), Ok(Variant::Compact));
        assert_eq!("".parse::<Variant>(), Ok(Variant::Full));
        assert_eq!(
            "wide".parse::<Variant>(),
            Err(ConfigError::UnknownVariant("wide".to_string()))
        );
    }

    #[test]
    fn default_config_validates_against_builtin_catalog() {
        let config = ScreenConfig::default();
        assert_eq!(config.diamonds, 120);
        assert_eq!(config.tile_count, 8);
        assert_eq!(config.validate(&Catalog::builtin()), Ok(()));
    }

    #[test]
    fn too_many_tiles_for_names() {
        let config = ScreenConfig {
            tile_count: 9,
            ..ScreenConfig::default()
        };
        assert_eq!(
            config.validate(&Catalog::builtin()),
            Err(ConfigError::MissingTileNames {
                needed: 9,
                available: 8
            })
        );
    }

    #[test]
    fn rank_invariants_are_checked() {
        let config = ScreenConfig::default();
        let empty = Catalog {
            ranks: &[],
            mini_game_names: crate::catalog::MINI_GAME_NAMES,
            mini_games: MINI_GAMES,
        };
        assert_eq!(config.validate(&empty), Err(ConfigError::EmptyRanks));

        let locked_first = [RANKS[1], RANKS[0]];
        let catalog = Catalog {
            ranks: &locked_first,
            ..Catalog::builtin()
        };
        assert!(matches!(
            config.validate(&catalog),
            Err(ConfigError::FirstRankLocked { .. })
        ));

        let dup: [Rank; 2] = [RANKS[0], RANKS[0]];
        let catalog = Catalog {
            ranks: &dup,
            ..Catalog::builtin()
        };
        assert_eq!(
            config.validate(&catalog),
            Err(ConfigError::DuplicateRankTitle("Hujayra Biologi".to_string()))
        );
    }

    #[test]
    fn only_full_variant_drags_progress_row() {
        assert!(Variant::Full.is_draggable(RowKind::Progress));
        assert!(!Variant::Compact.is_draggable(RowKind::Progress));
        assert!(Variant::Compact.is_draggable(RowKind::MiniGames));
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn json_config_fills_defaults() {
        let config = ScreenConfig::from_json(r#"{"variant":"compact","diamonds":7}"#).unwrap();
        assert_eq!(config.variant, Variant::Compact);
        assert_eq!(config.diamonds, 7);
        assert_eq!(config.brand, "BioGame");
        assert!(ScreenConfig::from_json("{").is_err());
    }
}
