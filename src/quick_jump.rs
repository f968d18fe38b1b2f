use crate::entry::Entry;

pub const COLUMNS: usize = 7;
pub const ROWS: usize = 4;
pub const BUCKET_COUNT: usize = COLUMNS * ROWS;

const DIGIT_BUCKET: usize = 26;
const SYMBOL_BUCKET: usize = 27;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bucket {
    Letter(char),
    Digit,
    Symbol,
}

impl Bucket {
    pub fn from_index(index: usize) -> Self {
        match index {
            0..DIGIT_BUCKET => Bucket::Letter((b'A' + index as u8) as char),
            DIGIT_BUCKET => Bucket::Digit,
            _ => Bucket::Symbol,
        }
    }

    pub fn label(&self) -> String {
        match *self {
            Bucket::Letter(c) => c.to_string(),
            Bucket::Digit => "0-9".to_string(),
            Bucket::Symbol => "#".to_string(),
        }
    }

    pub fn matches(&self, name: &str) -> bool {
        let first = name.chars().next().map(|c| c.to_ascii_uppercase());
        match (*self, first) {
            (Bucket::Letter(letter), Some(c)) => c == letter,
            (Bucket::Digit, Some(c)) => c.is_ascii_digit(),
            (Bucket::Symbol, Some(c)) => !c.is_ascii_alphanumeric(),
            (Bucket::Symbol, None) => true,
            _ => false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridMove {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Debug, Default)]
pub struct QuickJump {
    active: bool,
    cursor: usize,
}

impl QuickJump {
    pub fn open(&mut self) {
        self.active = true;
        self.cursor = 0;
    }

    pub fn close(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn bucket(&self) -> Bucket {
        Bucket::from_index(self.cursor)
    }

    // Edges saturate, the grid never wraps.
    pub fn move_cursor(&mut self, mv: GridMove) {
        match mv {
            GridMove::Up if self.cursor >= COLUMNS => self.cursor -= COLUMNS,
            GridMove::Down if self.cursor + COLUMNS < BUCKET_COUNT => self.cursor += COLUMNS,
            GridMove::Left if self.cursor > 0 => self.cursor -= 1,
            GridMove::Right if self.cursor + 1 < BUCKET_COUNT => self.cursor += 1,
            _ => {}
        }
    }

    /// Closes the overlay and returns the first row in the chosen bucket.
    pub fn confirm(&mut self, entries: &[Entry]) -> Option<usize> {
        self.close();
        let bucket = self.bucket();
        entries.iter().position(|e| bucket.matches(&e.name))
    }

    pub fn cancel(&mut self) {
        self.close();
    }
}
