use std::ops::Range;

pub const DEFAULT_VISIBLE_ROWS: usize = 10;
pub const DEFAULT_PAGE_SIZE: usize = 7;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Selected row plus the first visible row of a fixed-height window.
///
/// Every mutator keeps `top <= selected < top + visible_rows` as long as the
/// listing is non-empty.
#[derive(Clone, Debug)]
pub struct Viewport {
    selected: usize,
    top: usize,
    visible_rows: usize,
    page_size: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_VISIBLE_ROWS, DEFAULT_PAGE_SIZE)
    }
}

impl Viewport {
    pub fn new(visible_rows: usize, page_size: usize) -> Self {
        Self {
            selected: 0,
            top: 0,
            visible_rows: visible_rows.max(1),
            page_size: page_size.max(1),
        }
    }

    pub fn set_geometry(&mut self, visible_rows: usize, page_size: usize) {
        self.visible_rows = visible_rows.max(1);
        self.page_size = page_size.max(1);
        self.scroll_into_view();
    }

    pub fn reset(&mut self) {
        self.selected = 0;
        self.top = 0;
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn top(&self) -> usize {
        self.top
    }

    #[cfg(test)]
    fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    pub fn step(&mut self, direction: Direction, count: usize) {
        if count == 0 {
            return;
        }
        self.selected = match direction {
            Direction::Previous if self.selected == 0 => count - 1,
            Direction::Previous => self.selected - 1,
            Direction::Next if self.selected + 1 >= count => 0,
            Direction::Next => self.selected + 1,
        };
        self.scroll_into_view();
    }

    pub fn page(&mut self, direction: Direction, count: usize) {
        if count == 0 {
            return;
        }
        let selected = self.selected.min(count - 1);
        let jump = self.page_size % count;
        self.selected = match direction {
            Direction::Next => (selected + jump) % count,
            // remaining distance to zero, then continue from the bottom
            Direction::Previous if selected >= jump => selected - jump,
            Direction::Previous => count - (jump - selected),
        };
        self.scroll_into_view();
    }

    pub fn select(&mut self, index: usize, count: usize) -> bool {
        if index >= count {
            log::error!("Unable to select entry at index {}", index);
            return false;
        }
        self.selected = index;
        self.scroll_into_view();
        true
    }

    // pulls the selection back into a listing that may have shrunk
    pub fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.reset();
            return;
        }
        if self.selected >= count {
            self.selected = count - 1;
        }
        self.scroll_into_view();
    }

    fn scroll_into_view(&mut self) {
        if self.selected < self.top {
            self.top = self.selected;
        } else if self.selected >= self.top + self.visible_rows {
            self.top = self.selected + 1 - self.visible_rows;
        }
    }

    pub fn window(&self, count: usize) -> Range<usize> {
        let start = self.top.min(count);
        start..(self.top + self.visible_rows).min(count)
    }
}
