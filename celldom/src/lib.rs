pub mod buffer;
pub mod element;
pub mod event;
pub mod hit;
pub mod layout;
pub mod render;
pub mod text;
pub mod types;

pub use buffer::Buffer;
pub use element::{find_element, Element};
pub use event::{bubble_path, dispatch_click};
pub use hit::{hit_test, hit_test_any};
pub use layout::{LayoutResult, Rect};
pub use types::*;
