/// An error reported by a rectangle operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectError {
    /// The two boxes do not overlap with a positive area.
    EmptyIntersection,
    /// A point coordinate was NaN or infinite.
    NonFiniteInput,
}

impl core::fmt::Display for RectError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptyIntersection => write!(f, "rectangles do not intersect"),
            Self::NonFiniteInput => write!(f, "non-finite point coordinate"),
        }
    }
}

impl std::error::Error for RectError {}
