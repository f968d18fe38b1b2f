use crate::{entry::Entry, quick_jump::Bucket};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Loading,
    Settings { saving: bool },
    Listing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Legend {
    None,
    Favourite,
    Remove,
}

#[derive(Clone, Debug)]
pub struct Row<'a> {
    pub index: usize,
    pub entry: &'a Entry,
    pub selected: bool,
    pub favorite: bool,
}

#[derive(Clone, Debug)]
pub struct Frame<'a> {
    pub screen: Screen,
    pub title: String,
    pub rows: Vec<Row<'a>>,
    // 1-based selected row, total rows
    pub position: (usize, usize),
    pub legend: Legend,
    pub quick_jump: Option<Bucket>,
}

impl Frame<'_> {
    pub fn selected_row(&self) -> Option<&Row<'_>> {
        self.rows.iter().find(|r| r.selected)
    }
}
