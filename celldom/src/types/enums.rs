/// Sizing rule for one axis of an element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Size {
    Fixed(u16),
    /// Share of the remaining main-axis space, weighted equally with `Flex(1)`.
    #[default]
    Fill,
    Flex(u16),
    /// Sized from content.
    Auto,
    /// Fraction of the parent's inner size, `0.0..=1.0`.
    Percent(f32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Row,
    #[default]
    Column,
}

/// Cross-axis placement of children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
    Stretch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextWrap {
    NoWrap,
    #[default]
    Wrap,
    Truncate,
}
