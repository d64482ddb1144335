//! Cell styling: colors and attribute flags.
//!
//! A cell carries exactly two display attributes, a foreground and a
//! background. Each is a [`Color`]; the foreground additionally carries
//! [`TextAttributes`] flags, the way terminal cell libraries pack bold or
//! underline into the foreground attribute word.
//!
//! # Examples
//!
//! ```
//! use termwidgets::{Color, Style, TextAttributes};
//!
//! let selected = Style::fg(Color::Indexed(3)).with_bold();
//! assert!(selected.attributes.contains(TextAttributes::BOLD));
//!
//! let highlight = Style::builder()
//!     .fg(Color::Rgb(255, 215, 0))
//!     .bg(Color::Indexed(0))
//!     .inverse()
//!     .build();
//! assert_eq!(highlight.bg, Color::Indexed(0));
//! ```

use bitflags::bitflags;

bitflags! {
    /// Attribute flags packed next to the foreground color.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        const BOLD      = 1 << 0;
        const DIM       = 1 << 1;
        const UNDERLINE = 1 << 2;
        /// Foreground and background swapped; the usual selection marker.
        const INVERSE   = 1 << 3;
    }
}

/// Terminal color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    /// Terminal default (respects the user's theme).
    #[default]
    Default,
    /// 256-color palette index.
    Indexed(u8),
    /// 24-bit true color.
    Rgb(u8, u8, u8),
}

/// Foreground/background pair with attribute flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Terminal default colors, no attributes.
    pub const NONE: Self = Self {
        fg: Color::Default,
        bg: Color::Default,
        attributes: TextAttributes::empty(),
    };

    /// Create a new style builder.
    #[must_use]
    pub fn builder() -> StyleBuilder {
        StyleBuilder::default()
    }

    /// Create a style with only a foreground color.
    #[must_use]
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: color,
            bg: Color::Default,
            attributes: TextAttributes::empty(),
        }
    }

    /// Create a style with only a background color.
    #[must_use]
    pub const fn bg(color: Color) -> Self {
        Self {
            fg: Color::Default,
            bg: color,
            attributes: TextAttributes::empty(),
        }
    }

    /// Create an inverse (swapped fg/bg) style.
    #[must_use]
    pub const fn inverse() -> Self {
        Self {
            fg: Color::Default,
            bg: Color::Default,
            attributes: TextAttributes::INVERSE,
        }
    }

    /// Return a new style with the specified foreground color.
    #[must_use]
    pub const fn with_fg(self, color: Color) -> Self {
        Self { fg: color, ..self }
    }

    /// Return a new style with the specified background color.
    #[must_use]
    pub const fn with_bg(self, color: Color) -> Self {
        Self { bg: color, ..self }
    }

    /// Return a new style with the specified attributes added.
    #[must_use]
    pub const fn with_attributes(self, attrs: TextAttributes) -> Self {
        Self {
            attributes: self.attributes.union(attrs),
            ..self
        }
    }

    /// Return a new style with the bold attribute added.
    #[must_use]
    pub const fn with_bold(self) -> Self {
        self.with_attributes(TextAttributes::BOLD)
    }

    /// Return a new style with the inverse attribute added.
    #[must_use]
    pub const fn with_inverse(self) -> Self {
        self.with_attributes(TextAttributes::INVERSE)
    }

    /// True for [`Style::NONE`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Merge two styles; non-default colors in `other` win, attributes OR.
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        let pick = |base: Color, over: Color| {
            if over == Color::Default { base } else { over }
        };
        Self {
            fg: pick(self.fg, other.fg),
            bg: pick(self.bg, other.bg),
            attributes: self.attributes | other.attributes,
        }
    }
}

/// Fluent [`Style`] construction, starting from [`Style::NONE`].
#[derive(Clone, Debug, Default)]
pub struct StyleBuilder {
    style: Style,
}

impl StyleBuilder {
    #[must_use]
    pub fn fg(mut self, color: Color) -> Self {
        self.style.fg = color;
        self
    }

    #[must_use]
    pub fn bg(mut self, color: Color) -> Self {
        self.style.bg = color;
        self
    }

    #[must_use]
    pub fn bold(mut self) -> Self {
        self.style.attributes |= TextAttributes::BOLD;
        self
    }

    #[must_use]
    pub fn dim(mut self) -> Self {
        self.style.attributes |= TextAttributes::DIM;
        self
    }

    #[must_use]
    pub fn underline(mut self) -> Self {
        self.style.attributes |= TextAttributes::UNDERLINE;
        self
    }

    #[must_use]
    pub fn inverse(mut self) -> Self {
        self.style.attributes |= TextAttributes::INVERSE;
        self
    }

    /// Build the final style.
    #[must_use]
    pub fn build(self) -> Style {
        self.style
    }
}
