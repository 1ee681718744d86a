//! Static screen content: rank ladder, mini-game names and tile descriptors.
//!
//! Everything here is `'static` and immutable. `Catalog` bundles borrowed
//! slices so the view and config validation can run against either the
//! built-in data or a custom set (tests, embedding).

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::config::Variant;

// --- Mini games ---------------------------------------------------------------

/// Layout tag for a data-driven mini-game tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum MiniGameLayout {
    Sparkle,
    Caring,
}

/// Descriptor for a data-driven mini-game tile. The built-in collection is
/// empty; tiles are rendered from `MINI_GAME_NAMES` instead.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct MiniGame {
    pub title: &'static str,
    pub icons: &'static [&'static str],
    pub bowl_color: &'static str,
    pub bowl_shadow: &'static str,
    pub label_color: &'static str,
    pub icon_background: Option<&'static str>,
    pub icon_shadow: Option<&'static str>,
    pub layout: Option<MiniGameLayout>,
}

pub const MINI_GAMES: &[MiniGame] = &[];

/// Display names for tiles 1..=8, in tile order.
pub const MINI_GAME_NAMES: &[&str] = &[
    "Rasmdagi nima",
    "Terminlar",
    "Bu kim",
    "Tabiat detektivi",
    "Blitz test",
    "DNK zanjiri",
    "Ekologik muvonazanat",
    "Bio Labirint",
];

/// Number of mini-game tiles on the home screen.
pub const MINI_GAME_TILE_COUNT: usize = 8;

/// Corner ribbon shown on some tiles in the compact screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum TileBadge {
    New,
    Top,
}

impl TileBadge {
    pub fn label(self) -> &'static str {
        match self {
            TileBadge::New => "NEW",
            TileBadge::Top => "TOP",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            TileBadge::New => "badgeNew",
            TileBadge::Top => "badgeTop",
        }
    }
}

/// One rendered mini-game tile (1-based `number`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MiniGameTile<'a> {
    pub number: usize,
    pub image: String,
    pub alt: String,
    /// Empty when the name list is shorter than the tile range.
    pub name: &'a str,
    pub badge: Option<TileBadge>,
}

pub fn mini_game_image_path(number: usize) -> String {
    format!("/mini_games/mini_{number}.jpg")
}

// --- Ranks --------------------------------------------------------------------

/// A progression tier on the "Your Progress" row. Order is display order and
/// the title doubles as the rendering key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Rank {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub badge: &'static str,
    pub leaf: &'static str,
    pub cell: &'static str,
    pub status: &'static str,
    /// Card background, used by the full screen.
    pub image: Option<&'static str>,
    pub unlocked: bool,
}

pub const RANKS: &[Rank] = &[
    Rank {
        title: "Hujayra Biologi",
        subtitle: "Cell Biologist",
        badge: "\u{1F9EC}",
        leaf: "\u{1F331}",
        cell: "\u{1F9A0}",
        status: "Current Rank",
        image: Some("/progress/b1.jpg"),
        unlocked: true,
    },
    Rank {
        title: "To'qima Mutaxassisi",
        subtitle: "Tissue Specialist",
        badge: "\u{1F9EB}",
        leaf: "\u{1F343}",
        cell: "\u{1F9EC}",
        status: "Unlock at 450 XP",
        image: Some("/progress/b2.jpg"),
        unlocked: false,
    },
    Rank {
        title: "Organ Muhandisi",
        subtitle: "Organ Engineer",
        badge: "\u{1FAC0}",
        leaf: "\u{1F33F}",
        cell: "\u{1F9A0}",
        status: "Unlock at 900 XP",
        image: Some("/progress/b3.jpg"),
        unlocked: false,
    },
    Rank {
        title: "Tizim Eksperti",
        subtitle: "System Expert",
        badge: "\u{1F9E0}",
        leaf: "\u{1F340}",
        cell: "\u{1F9EA}",
        status: "Unlock at 1.3k XP",
        image: Some("/progress/b4.jpg"),
        unlocked: false,
    },
    Rank {
        title: "Organizm Masteri",
        subtitle: "Organism Master",
        badge: "\u{1F98B}",
        leaf: "\u{1F331}",
        cell: "\u{1F9A0}",
        status: "Unlock at 1.8k XP",
        image: Some("/progress/b5.jpg"),
        unlocked: false,
    },
    Rank {
        title: "Ekolog",
        subtitle: "Elite Final Rank",
        badge: "\u{1F30E}",
        leaf: "\u{1F343}",
        cell: "\u{1F9EC}",
        status: "Unlock the Bio Crown",
        image: Some("/progress/b6.jpg"),
        unlocked: false,
    },
];

// --- Catalog ------------------------------------------------------------------

#[derive(Clone, Copy, Debug)]
pub struct Catalog<'a> {
    pub ranks: &'a [Rank],
    pub mini_game_names: &'a [&'a str],
    pub mini_games: &'a [MiniGame],
}

impl Catalog<'static> {
    pub fn builtin() -> Self {
        Self {
            ranks: RANKS,
            mini_game_names: MINI_GAME_NAMES,
            mini_games: MINI_GAMES,
        }
    }
}

impl<'a> Catalog<'a> {
    /// Tiles `1..=count`, with the variant's badges applied.
    pub fn tiles(&self, count: usize, variant: Variant) -> Vec<MiniGameTile<'a>> {
        (1..=count)
            .map(|number| MiniGameTile {
                number,
                image: mini_game_image_path(number),
                alt: format!("Mini Game {number}"),
                name: self.mini_game_names.get(number - 1).copied().unwrap_or(""),
                badge: variant.tile_badge(number),
            })
            .collect()
    }

    /// Index of the user's current rank (the first unlocked one).
    pub fn current_rank(&self) -> Option<usize> {
        self.ranks.iter().position(|r| r.unlocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiles_follow_path_pattern_and_name_order() {
        let catalog = Catalog::builtin();
        let tiles = catalog.tiles(MINI_GAME_TILE_COUNT, Variant::Full);
        assert_eq!(tiles.len(), 8);
        for tile in &tiles {
            assert_eq!(tile.image, format!("/mini_games/mini_{}.jpg", tile.number));
            assert_eq!(tile.name, MINI_GAME_NAMES[tile.number - 1]);
            assert_eq!(tile.badge, None);
        }
        assert_eq!(tiles[0].alt, "Mini Game 1");
        assert_eq!(tiles[7].name, "Bio Labirint");
    }

    #[test]
    fn short_name_list_yields_empty_names() {
        let names = ["One", "Two"];
        let catalog = Catalog {
            ranks: RANKS,
            mini_game_names: &names,
            mini_games: MINI_GAMES,
        };
        let tiles = catalog.tiles(4, Variant::Full);
        assert_eq!(tiles[1].name, "Two");
        assert_eq!(tiles[2].name, "");
        assert_eq!(tiles[3].name, "");
    }

    #[test]
    fn compact_tiles_carry_badges() {
        let tiles = Catalog::builtin().tiles(MINI_GAME_TILE_COUNT, Variant::Compact);
        let badged: Vec<(usize, TileBadge)> = tiles
            .iter()
            .filter_map(|t| t.badge.map(|b| (t.number, b)))
            .collect();
        assert_eq!(
            badged,
            vec![(1, TileBadge::New), (3, TileBadge::Top), (6, TileBadge::New)]
        );
    }

    #[test]
    fn current_rank_is_first() {
        assert_eq!(Catalog::builtin().current_rank(), Some(0));
        assert!(Catalog::builtin().mini_games.is_empty());
    }
}
