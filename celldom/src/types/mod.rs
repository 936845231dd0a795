mod edges;
mod enums;

pub use edges::Edges;
pub use enums::{Align, Direction, Size, TextWrap};
