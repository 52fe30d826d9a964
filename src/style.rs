//! Display attributes for grid cells.
//!
//! The editor draws with the terminal's default colors, so a [`Style`] is
//! just a set of [`TextAttributes`]: the text area uses [`Style::NONE`], the
//! gutter is dim and cursors are inverse.
//!
//! # Examples
//!
//! ```
//! use ten::{Style, TextAttributes};
//!
//! let cursor = Style::NONE.with_attributes(TextAttributes::INVERSE);
//! assert!(cursor.is_inverse());
//!
//! let gutter_cursor = Style::dim().merge(Style::inverse());
//! assert!(gutter_cursor.attributes.contains(TextAttributes::DIM));
//! ```

use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes.
    ///
    /// Not all terminals support all attributes.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD      = 0x01;
        /// Dim/decreased intensity.
        const DIM       = 0x02;
        /// Underlined text.
        const UNDERLINE = 0x04;
        /// Swapped foreground/background.
        const INVERSE   = 0x08;
    }
}

/// Style applied to a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Text rendering attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Terminal default rendition.
    pub const NONE: Self = Self {
        attributes: TextAttributes::empty(),
    };

    /// Create a bold style.
    #[must_use]
    pub const fn bold() -> Self {
        Self {
            attributes: TextAttributes::BOLD,
        }
    }

    /// Create a dim style.
    #[must_use]
    pub const fn dim() -> Self {
        Self {
            attributes: TextAttributes::DIM,
        }
    }

    /// Create an underline style.
    #[must_use]
    pub const fn underline() -> Self {
        Self {
            attributes: TextAttributes::UNDERLINE,
        }
    }

    /// Create an inverse (swapped fg/bg) style.
    #[must_use]
    pub const fn inverse() -> Self {
        Self {
            attributes: TextAttributes::INVERSE,
        }
    }

    /// Return a new style with the specified attributes added.
    #[must_use]
    pub const fn with_attributes(self, attrs: TextAttributes) -> Self {
        Self {
            attributes: self.attributes.union(attrs),
        }
    }

    /// Return a new style with the inverse attribute added.
    #[must_use]
    pub const fn with_inverse(self) -> Self {
        self.with_attributes(TextAttributes::INVERSE)
    }

    /// Check if the inverse attribute is set.
    #[must_use]
    pub const fn is_inverse(&self) -> bool {
        self.attributes.contains(TextAttributes::INVERSE)
    }

    /// Check if this style has any non-default properties.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Merge two styles; attributes are combined.
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        self.with_attributes(other.attributes)
    }
}
