//! Height measurement of rendered elements.

use std::collections::HashMap;

use celldom::layout::content_height;
use celldom::{find_element, Element, LayoutResult};

/// Rendered height of an element next to the height its content needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    /// Height needed to show all content.
    pub scroll_height: u16,
    /// Height the element was given.
    pub offset_height: u16,
}

impl Extent {
    pub const fn new(scroll_height: u16, offset_height: u16) -> Self {
        Self {
            scroll_height,
            offset_height,
        }
    }

    /// Whether content exceeds the element, or the recorded `minimal` height.
    pub fn overflows(&self, minimal: Option<u16>) -> bool {
        minimal.is_some_and(|m| self.scroll_height > m) || self.scroll_height > self.offset_height
    }
}

/// Looks up the rendered extent of an element by id.
pub trait Measure {
    fn measure(&self, element_id: &str) -> Option<Extent>;
}

/// Measures elements of a laid-out `celldom` tree.
pub struct LayoutMeasure<'a> {
    root: &'a Element,
    layout: &'a LayoutResult,
}

impl<'a> LayoutMeasure<'a> {
    pub fn new(root: &'a Element, layout: &'a LayoutResult) -> Self {
        Self { root, layout }
    }
}

impl Measure for LayoutMeasure<'_> {
    fn measure(&self, element_id: &str) -> Option<Extent> {
        let element = find_element(self.root, element_id)?;
        let rect = self.layout.get(element_id)?;
        // Text squeezed to no width still has content; measure it at one column.
        let scroll_height = content_height(element, rect.width.max(1));
        Some(Extent::new(scroll_height, rect.height))
    }
}

/// Fixed measurements, for driving the effect phase without a layout.
impl Measure for HashMap<String, Extent> {
    fn measure(&self, element_id: &str) -> Option<Extent> {
        self.get(element_id).copied()
    }
}
