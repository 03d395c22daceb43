//! # Cards
//!
//! A card is one prompt shown to the user. Its kind decides the title; the
//! accent is picked once when the card enters history and stays with it.

use serde::Serialize;
use std::fmt;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum CardKind {
    WouldYouRather,
    TellAStory,
    HotTake,
}

impl CardKind {
    /// Display label shown above the prompt.
    pub fn title(self) -> &'static str {
        match self {
            CardKind::WouldYouRather => "Would you rather",
            CardKind::TellAStory => "Tell a story",
            CardKind::HotTake => "Hot take",
        }
    }

    /// Machine name, matches the serialized form.
    pub fn slug(self) -> &'static str {
        match self {
            CardKind::WouldYouRather => "would-you-rather",
            CardKind::TellAStory => "tell-a-story",
            CardKind::HotTake => "hot-take",
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// An RGB accent color for the card text.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    pub name: &'static str,
    pub rgb: (u8, u8, u8),
}

impl Accent {
    const fn new(name: &'static str, r: u8, g: u8, b: u8) -> Self {
        Self { name, rgb: (r, g, b) }
    }

    /// `#rrggbb` form.
    pub fn hex(&self) -> String {
        let (r, g, b) = self.rgb;
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Text accents a card may be drawn in.
pub const PALETTE: [Accent; 11] = [
    Accent::new("white", 0xff, 0xff, 0xff),
    Accent::new("accent", 0xff, 0x4f, 0xd8),
    Accent::new("muted grey", 0xbd, 0xbd, 0xbd),
    Accent::new("pale cyan", 0x9f, 0xf8, 0xe6),
    Accent::new("soft lavender", 0xea, 0xc2, 0xff),
    Accent::new("icy blue", 0x9a, 0xd1, 0xff),
    Accent::new("mint", 0xb7, 0xff, 0xd9),
    Accent::new("warm sand", 0xff, 0xc8, 0xa2),
    Accent::new("dusty pink", 0xff, 0x9f, 0xb3),
    Accent::new("soft periwinkle", 0xc7, 0xc7, 0xff),
    Accent::new("deep grey", 0x8c, 0x8c, 0x8c),
];

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Card {
    pub kind: CardKind,
    pub title: String,
    pub text: String,
    /// None until the card is appended to history.
    pub color: Option<Accent>,
}

impl Card {
    pub fn new(kind: CardKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            text: text.into(),
            color: None,
        }
    }

    /// Accent for rendering, white if none was assigned.
    pub fn accent(&self) -> Accent {
        self.color.unwrap_or(PALETTE[0])
    }
}

/// Escapes `&`, `<` and `>` and turns newlines into `<br>`.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\n', "<br>")
}
