//! Pure rendering of the home screen into a [`Node`] tree.
//!
//! Nothing here touches the DOM; `dom::build` materializes the tree and
//! `Node::to_html` serializes it. The output depends only on the config, the
//! catalog and the per-row drag flags.

use std::fmt::Write as _;

use crate::catalog::{Catalog, Rank};
use crate::config::{ScreenConfig, Variant};

/// Class names understood by the external stylesheet.
pub mod class {
    pub const SCREEN: &str = "screen";
    pub const STACK: &str = "stack";
    pub const TOP_BAR: &str = "topBar";
    pub const LOGO: &str = "logo";
    pub const LOGO_MARK: &str = "logoMark";
    pub const DIAMOND: &str = "diamond";
    pub const WITHDRAW: &str = "withdraw";
    pub const CONTENT_WRAPPER: &str = "contentWrapper";
    pub const SECTION: &str = "section";
    pub const SECTION_HEADER: &str = "sectionHeader";
    pub const SECTION_TITLE: &str = "sectionTitle";
    pub const SECTION_SUBTITLE: &str = "sectionSubtitle";
    pub const MINI_GAMES_ROW: &str = "miniGamesRow";
    pub const MINI_GAME_ITEM: &str = "miniGameItem";
    pub const MINI_GAME_ICON: &str = "miniGameIcon";
    pub const MINI_GAME_IMAGE: &str = "miniGameImage";
    pub const MINI_GAME_NAME: &str = "miniGameName";
    pub const MINI_GAME_BADGE: &str = "miniGameBadge";
    pub const PROGRESS_ROW: &str = "progressRow";
    pub const PROGRESS_CARD: &str = "progressCard";
    pub const PROGRESS_CARD_UNLOCKED: &str = "progressCardUnlocked";
    pub const PROGRESS_CARD_LOCKED: &str = "progressCardLocked";
    pub const PROGRESS_CARD_CURRENT: &str = "progressCardCurrent";
    pub const PROGRESS_HIGHLIGHT: &str = "progressHighlight";
    pub const PROGRESS_TEXT: &str = "progressText";
    pub const PROGRESS_TITLE: &str = "progressTitle";
    pub const PROGRESS_SUBTITLE: &str = "progressSubtitle";
    pub const RANK_BADGE: &str = "rankBadge";
    pub const STATUS_CHIP: &str = "statusChip";
    pub const LOCKED_CHIP: &str = "lockedChip";
    pub const MICRO_CELL: &str = "microCell";
    pub const MICRO_LEAF: &str = "microLeaf";
    pub const LOCK_BADGE: &str = "lockBadge";
    pub const NOTE: &str = "note";
    pub const DRAGGING: &str = "dragging";
}

pub const ROOT_ID: &str = "biogame-home";
pub const NOTE_TEXT: &str =
    "Soft gradients, playful science icons, and gentle shadows bring your BioGame home to life.";
const LOCK_GLYPH: &str = "\u{1F512}";
const DIAMOND_GLYPH: &str = "\u{1F48E}";
const TILE_IMAGE_SIZE: &str = "110";

/// The horizontally scrollable rows of the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowKind {
    MiniGames,
    Progress,
}

impl RowKind {
    pub const ALL: [RowKind; 2] = [RowKind::MiniGames, RowKind::Progress];

    pub fn element_id(self) -> &'static str {
        match self {
            RowKind::MiniGames => "mini-games-row",
            RowKind::Progress => "progress-row",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            RowKind::MiniGames => class::MINI_GAMES_ROW,
            RowKind::Progress => class::PROGRESS_ROW,
        }
    }
}

// --- Node tree ----------------------------------------------------------------

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Node {
    pub tag: &'static str,
    pub classes: Vec<&'static str>,
    pub attrs: Vec<(&'static str, String)>,
    pub text: Option<String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            ..Self::default()
        }
    }

    pub fn class(mut self, name: &'static str) -> Self {
        self.classes.push(name);
        self
    }

    pub fn class_if(self, cond: bool, name: &'static str) -> Self {
        if cond { self.class(name) } else { self }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn aria_hidden(self) -> Self {
        self.attr("aria-hidden", "true")
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn class_attr(&self) -> String {
        self.classes.join(" ")
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| *c == name)
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first, document order.
    pub fn find_all(&self, pred: &dyn Fn(&Node) -> bool) -> Vec<&Node> {
        let mut out = Vec::new();
        self.collect(pred, &mut out);
        out
    }

    fn collect<'n>(&'n self, pred: &dyn Fn(&Node) -> bool, out: &mut Vec<&'n Node>) {
        if pred(self) {
            out.push(self);
        }
        for child in &self.children {
            child.collect(pred, out);
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Node> {
        self.find_all(&|n| n.get_attr("id") == Some(id))
            .into_iter()
            .next()
    }

    pub fn count_with_class(&self, name: &str) -> usize {
        self.find_all(&|n| n.has_class(name)).len()
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.class_attr()));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        out.push('>');
        if is_void(self.tag) {
            return;
        }
        if let Some(text) = &self.text {
            out.push_str(&escape(text));
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn is_void(tag: &str) -> bool {
    matches!(tag, "img" | "br" | "hr" | "input" | "meta" | "link")
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

// --- Home screen --------------------------------------------------------------

pub struct HomeView<'a> {
    pub config: &'a ScreenConfig,
    pub catalog: Catalog<'a>,
}

impl<'a> HomeView<'a> {
    pub fn new(config: &'a ScreenConfig, catalog: Catalog<'a>) -> Self {
        Self { config, catalog }
    }

    pub fn render(&self, dragging: impl Fn(RowKind) -> bool) -> Node {
        Node::new("main")
            .class(class::SCREEN)
            .attr("id", ROOT_ID)
            .attr("data-variant", variant_name(self.config.variant))
            .child(
                Node::new("div")
                    .class(class::STACK)
                    .child(self.top_bar())
                    .child(
                        Node::new("div")
                            .class(class::CONTENT_WRAPPER)
                            .child(self.mini_games_section(dragging(RowKind::MiniGames)))
                            .child(self.progress_section(dragging(RowKind::Progress)))
                            .child(Node::new("p").class(class::NOTE).text(NOTE_TEXT)),
                    ),
            )
    }

    fn top_bar(&self) -> Node {
        let variant = self.config.variant;
        Node::new("header")
            .class(class::TOP_BAR)
            .child(
                Node::new("div")
                    .class(class::LOGO)
                    .child(
                        Node::new("span")
                            .class(class::LOGO_MARK)
                            .aria_hidden()
                            .text(variant.logo_mark()),
                    )
                    .child(Node::new("span").text(self.config.brand.as_str())),
            )
            .child(
                Node::new("div")
                    .attr("style", "display: flex; align-items: center; gap: 12px")
                    .child(
                        Node::new("div")
                            .class(class::DIAMOND)
                            .child(Node::new("span").aria_hidden().text(DIAMOND_GLYPH))
                            .child(Node::new("span").text(self.config.diamonds.to_string())),
                    )
                    .child(
                        Node::new("span")
                            .class(class::WITHDRAW)
                            .attr("aria-label", "Withdraw diamonds to money")
                            .text(variant.withdraw_mark()),
                    ),
            )
    }

    fn section(title_id: &'static str, title: &str, subtitle: Option<&str>) -> (Node, Node) {
        let mut header = Node::new("div").class(class::SECTION_HEADER).child(
            Node::new("h2")
                .attr("id", title_id)
                .class(class::SECTION_TITLE)
                .text(title),
        );
        if let Some(subtitle) = subtitle {
            header = header.child(Node::new("p").class(class::SECTION_SUBTITLE).text(subtitle));
        }
        let section = Node::new("section")
            .class(class::SECTION)
            .attr("aria-labelledby", title_id);
        (section, header)
    }

    fn row(&self, kind: RowKind, dragging: bool) -> Node {
        Node::new("div")
            .attr("id", kind.element_id())
            .class(kind.class_name())
            .class_if(
                dragging && self.config.variant.is_draggable(kind),
                class::DRAGGING,
            )
    }

    fn mini_games_section(&self, dragging: bool) -> Node {
        let (section, header) = Self::section("mini-games-title", "Mini Games", None);
        let tiles = self
            .catalog
            .tiles(self.config.tile_count, self.config.variant)
            .into_iter()
            .map(|tile| {
                let mut icon = Node::new("div").class(class::MINI_GAME_ICON).child(
                    Node::new("img")
                        .class(class::MINI_GAME_IMAGE)
                        .attr("src", tile.image)
                        .attr("alt", tile.alt)
                        .attr("width", TILE_IMAGE_SIZE)
                        .attr("height", TILE_IMAGE_SIZE)
                        .attr("draggable", "false"),
                );
                if let Some(badge) = tile.badge {
                    icon = icon.child(
                        Node::new("span")
                            .class(class::MINI_GAME_BADGE)
                            .class(badge.class_name())
                            .text(badge.label()),
                    );
                }
                Node::new("div")
                    .class(class::MINI_GAME_ITEM)
                    .attr("data-key", tile.number.to_string())
                    .child(icon)
                    .child(Node::new("p").class(class::MINI_GAME_NAME).text(tile.name))
            });
        section
            .child(header)
            .child(self.row(RowKind::MiniGames, dragging).children(tiles))
    }

    fn progress_section(&self, dragging: bool) -> Node {
        let (section, header) = Self::section(
            "progress-title",
            "Your Progress",
            Some("Climb the bio ladder."),
        );
        let current = self.catalog.current_rank();
        let cards = self
            .catalog
            .ranks
            .iter()
            .enumerate()
            .map(|(index, rank)| match self.config.variant {
                Variant::Full => full_rank_card(index, rank),
                Variant::Compact => compact_rank_card(rank, current == Some(index)),
            });
        section
            .child(header)
            .child(self.row(RowKind::Progress, dragging).children(cards))
    }
}

fn variant_name(variant: Variant) -> &'static str {
    match variant {
        Variant::Full => "full",
        Variant::Compact => "compact",
    }
}

/// Image-backed card. Highlight only for flagged ranks past the first.
fn full_rank_card(index: usize, rank: &Rank) -> Node {
    let highlighted = rank.unlocked && index > 0;
    let mut card = rank_card_shell(rank)
        .class_if(highlighted, class::PROGRESS_CARD_UNLOCKED)
        .class_if(!rank.unlocked, class::PROGRESS_CARD_LOCKED);
    if let Some(image) = rank.image {
        card = card.attr("style", format!("background-image: url({image})"));
    }
    if highlighted {
        card = card.child(highlight());
    }
    card.child(
        Node::new("div")
            .class(class::PROGRESS_TEXT)
            .child(Node::new("h3").class(class::PROGRESS_TITLE).text(rank.title)),
    )
    .children(rank_decorations(rank))
}

/// Emoji-badge card. `current` marks the user's rank (the first unlocked one).
fn compact_rank_card(rank: &Rank, current: bool) -> Node {
    let mut card = rank_card_shell(rank)
        .class_if(current, class::PROGRESS_CARD_CURRENT)
        .class_if(!rank.unlocked, class::PROGRESS_CARD_LOCKED);
    if current {
        card = card.child(highlight());
    }
    card.child(
        Node::new("span")
            .class(class::RANK_BADGE)
            .aria_hidden()
            .text(rank.badge),
    )
    .child(
        Node::new("div")
            .class(class::PROGRESS_TEXT)
            .child(Node::new("h3").class(class::PROGRESS_TITLE).text(rank.title))
            .child(
                Node::new("p")
                    .class(class::PROGRESS_SUBTITLE)
                    .text(rank.subtitle),
            ),
    )
    .children(rank_decorations(rank))
}

fn rank_card_shell(rank: &Rank) -> Node {
    Node::new("article")
        .class(class::PROGRESS_CARD)
        .attr("data-key", rank.title)
        .attr("aria-label", format!("{} - {}", rank.title, rank.subtitle))
}

fn highlight() -> Node {
    Node::new("span")
        .class(class::PROGRESS_HIGHLIGHT)
        .aria_hidden()
}

fn rank_decorations(rank: &Rank) -> Vec<Node> {
    let mut nodes = vec![
        Node::new("span")
            .class(class::STATUS_CHIP)
            .class_if(!rank.unlocked, class::LOCKED_CHIP)
            .text(rank.status),
        Node::new("span")
            .class(class::MICRO_CELL)
            .aria_hidden()
            .text(rank.cell),
        Node::new("span")
            .class(class::MICRO_LEAF)
            .aria_hidden()
            .text(rank.leaf),
    ];
    if !rank.unlocked {
        nodes.push(
            Node::new("span")
                .class(class::LOCK_BADGE)
                .attr("aria-label", "Locked - Level not unlocked yet")
                .text(LOCK_GLYPH),
        );
    }
    nodes
}
