//! Border glyph sets.
//!
//! A table is drawn from fifteen glyph roles (corners, tees, crossings and
//! straight runs). Each [`SymbolSet`] maps every role to a single character.
//!
//! ```text
//! ┌───┬───┐   top-left  top  top-mid  top-right
//! │ A │ B │   left           middle   right
//! ├───┼───┤   left-mid  mid  mid-mid  right-mid
//! └───┴───┘   bottom-left bottom bottom-mid bottom-right
//! ```

use serde::{Deserialize, Serialize};

/// The glyph set used to draw borders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolSet {
    /// Light Unicode box-drawing characters: ┌ ┬ ┐ ├ ┼ ┤ └ ┴ ┘ │ ─
    #[default]
    Unicode,
    /// ASCII fallback: + - |
    Ascii,
}

/// A named position in the border where a glyph is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Top,
    TopMid,
    TopLeft,
    TopRight,
    Bottom,
    BottomMid,
    BottomLeft,
    BottomRight,
    Left,
    LeftMid,
    Mid,
    MidMid,
    Right,
    RightMid,
    /// Vertical divider between two cells of a content line.
    Middle,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Role; 15] = [
        Role::Top,
        Role::TopMid,
        Role::TopLeft,
        Role::TopRight,
        Role::Bottom,
        Role::BottomMid,
        Role::BottomLeft,
        Role::BottomRight,
        Role::Left,
        Role::LeftMid,
        Role::Mid,
        Role::MidMid,
        Role::Right,
        Role::RightMid,
        Role::Middle,
    ];

    /// The conventional hyphenated name of the role, e.g. `"top-left"`.
    pub fn name(self) -> &'static str {
        match self {
            Role::Top => "top",
            Role::TopMid => "top-mid",
            Role::TopLeft => "top-left",
            Role::TopRight => "top-right",
            Role::Bottom => "bottom",
            Role::BottomMid => "bottom-mid",
            Role::BottomLeft => "bottom-left",
            Role::BottomRight => "bottom-right",
            Role::Left => "left",
            Role::LeftMid => "left-mid",
            Role::Mid => "mid",
            Role::MidMid => "mid-mid",
            Role::Right => "right",
            Role::RightMid => "right-mid",
            Role::Middle => "middle",
        }
    }
}

/// One character per [`Role`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyphs {
    pub top: char,
    pub top_mid: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom: char,
    pub bottom_mid: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub left: char,
    pub left_mid: char,
    pub mid: char,
    pub mid_mid: char,
    pub right: char,
    pub right_mid: char,
    pub middle: char,
}

impl Glyphs {
    /// Look up the glyph for a role.
    pub const fn get(&self, role: Role) -> char {
        match role {
            Role::Top => self.top,
            Role::TopMid => self.top_mid,
            Role::TopLeft => self.top_left,
            Role::TopRight => self.top_right,
            Role::Bottom => self.bottom,
            Role::BottomMid => self.bottom_mid,
            Role::BottomLeft => self.bottom_left,
            Role::BottomRight => self.bottom_right,
            Role::Left => self.left,
            Role::LeftMid => self.left_mid,
            Role::Mid => self.mid,
            Role::MidMid => self.mid_mid,
            Role::Right => self.right,
            Role::RightMid => self.right_mid,
            Role::Middle => self.middle,
        }
    }
}

const UNICODE: Glyphs = Glyphs {
    top: '─',
    top_mid: '┬',
    top_left: '┌',
    top_right: '┐',
    bottom: '─',
    bottom_mid: '┴',
    bottom_left: '└',
    bottom_right: '┘',
    left: '│',
    left_mid: '├',
    mid: '─',
    mid_mid: '┼',
    right: '│',
    right_mid: '┤',
    middle: '│',
};

const ASCII: Glyphs = Glyphs {
    top: '-',
    top_mid: '+',
    top_left: '+',
    top_right: '+',
    bottom: '-',
    bottom_mid: '+',
    bottom_left: '+',
    bottom_right: '+',
    left: '|',
    left_mid: '+',
    mid: '-',
    mid_mid: '+',
    right: '|',
    right_mid: '+',
    middle: '|',
};

impl SymbolSet {
    /// Pick the set for the `ascii` option.
    pub const fn from_ascii(ascii: bool) -> Self {
        if ascii {
            SymbolSet::Ascii
        } else {
            SymbolSet::Unicode
        }
    }

    /// The full glyph table for this set.
    pub const fn glyphs(self) -> &'static Glyphs {
        match self {
            SymbolSet::Unicode => &UNICODE,
            SymbolSet::Ascii => &ASCII,
        }
    }

    /// The glyph drawn for `role`.
    pub const fn glyph(self, role: Role) -> char {
        self.glyphs().get(role)
    }
}
