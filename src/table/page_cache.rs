//! Sparse page cache kept by the table coordinator

use serde::Serialize;

/// Metadata of a materialized page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageSnapshot {
    pub index: usize,
    /// Number of rows the page held when it was loaded
    pub rows: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PageSlot {
    /// Page index never loaded, or loaded and since released
    Placeholder,
    Loaded(PageSnapshot),
}

impl PageSlot {
    pub fn is_loaded(&self) -> bool {
        matches!(self, PageSlot::Loaded(_))
    }
}

/// Pages indexed by page index
///
/// Jumping to page `n` pads every missing index below `n` with a
/// placeholder, so slot positions always equal page indices. Only one page
/// holds rows at a time: loading a page turns the previously loaded one back
/// into a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageCache {
    slots: Vec<PageSlot>,
}

impl PageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(&mut self, index: usize, rows: usize) {
        for slot in &mut self.slots {
            *slot = PageSlot::Placeholder;
        }
        if self.slots.len() <= index {
            self.slots.resize(index + 1, PageSlot::Placeholder);
        }
        self.slots[index] = PageSlot::Loaded(PageSnapshot { index, rows });
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn get(&self, index: usize) -> Option<&PageSlot> {
        self.slots.get(index)
    }

    /// The page currently holding rows
    pub fn current(&self) -> Option<&PageSnapshot> {
        self.slots.iter().find_map(|slot| match slot {
            PageSlot::Loaded(snapshot) => Some(snapshot),
            PageSlot::Placeholder => None,
        })
    }

    pub fn slots(&self) -> &[PageSlot] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
