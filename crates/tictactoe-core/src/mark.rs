//! Player mark representation.

use std::fmt;

/// Represents the two players.
///
/// There is no empty variant: an unoccupied cell is simply absent from the
/// [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Mark {
    /// Player A, always moves first.
    Cross = 0,
    /// Player B.
    Nought = 1,
}

impl Mark {
    /// Returns the opposite mark.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Mark::Cross => Mark::Nought,
            Mark::Nought => Mark::Cross,
        }
    }

    /// Returns the index (0 for Cross, 1 for Nought).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Mark::Cross => 'X',
            Mark::Nought => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
