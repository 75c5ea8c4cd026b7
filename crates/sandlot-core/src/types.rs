//! Core block and game-mode types.

use serde::{Deserialize, Serialize};

/// RGBA color, 0-255 per channel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque color from RGB components
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Player blue
    pub const PLAYER: Self = Self::rgb(0, 0, 255);
    /// Fallback color for items without a matching block
    pub const UNKNOWN: Self = Self::rgb(200, 100, 100);
}

/// Kind of a static block.
///
/// Behaviour differences between kinds are data only (name, color, item id),
/// plus the hazard flag for lava.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockKind {
    Ground,
    Stone,
    Dirt,
    Wood,
    #[default]
    SmallBlock,
    RedBlock,
    BlueBlock,
    GreenBlock,
    Lava,
}

impl BlockKind {
    /// All block kinds, in catalog order
    pub const ALL: [Self; 9] = [
        Self::Ground,
        Self::Stone,
        Self::Dirt,
        Self::Wood,
        Self::SmallBlock,
        Self::RedBlock,
        Self::BlueBlock,
        Self::GreenBlock,
        Self::Lava,
    ];

    /// Display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ground => "Ground",
            Self::Stone => "Stone",
            Self::Dirt => "Dirt",
            Self::Wood => "Wood",
            Self::SmallBlock => "Small Block",
            Self::RedBlock => "Red Block",
            Self::BlueBlock => "Blue Block",
            Self::GreenBlock => "Green Block",
            Self::Lava => "Lava",
        }
    }

    /// Render color
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Self::Ground => Color::rgb(0, 180, 0),
            Self::Stone => Color::rgb(128, 128, 128),
            Self::Dirt => Color::rgb(100, 50, 0),
            Self::Wood => Color::rgb(100, 70, 30),
            Self::SmallBlock => Color::rgb(200, 200, 50),
            Self::RedBlock => Color::rgb(200, 50, 50),
            Self::BlueBlock => Color::rgb(50, 50, 200),
            Self::GreenBlock => Color::rgb(50, 200, 50),
            Self::Lava => Color::rgb(255, 100, 0),
        }
    }

    /// Identifier of the item this block drops and is placed from
    #[must_use]
    pub const fn item_id(self) -> &'static str {
        match self {
            Self::Ground => "ground",
            Self::Stone => "stone",
            Self::Dirt => "dirt",
            Self::Wood => "wood",
            Self::SmallBlock => "small_block",
            Self::RedBlock => "red_block",
            Self::BlueBlock => "blue_block",
            Self::GreenBlock => "green_block",
            Self::Lava => "lava",
        }
    }

    /// Block kind for an item id, or `None` if no block uses it
    #[must_use]
    pub fn from_item_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.item_id() == id)
    }

    /// Single-character glyph for text renders
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Ground => '=',
            Self::Stone => '#',
            Self::Dirt => '%',
            Self::Wood => 'W',
            Self::SmallBlock => 'o',
            Self::RedBlock => 'R',
            Self::BlueBlock => 'B',
            Self::GreenBlock => 'G',
            Self::Lava => '~',
        }
    }

    /// Whether contact with this block deals damage
    #[inline]
    #[must_use]
    pub const fn is_hazard(self) -> bool {
        matches!(self, Self::Lava)
    }
}

/// Game mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMode {
    /// Damage, death and item consumption apply
    #[default]
    Survival,
    /// No damage, no death, placing blocks costs nothing
    Creative,
}

impl GameMode {
    /// The other mode
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Survival => Self::Creative,
            Self::Creative => Self::Survival,
        }
    }

    /// Returns true in creative mode
    #[inline]
    #[must_use]
    pub const fn is_creative(self) -> bool {
        matches!(self, Self::Creative)
    }
}
