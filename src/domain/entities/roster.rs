//! Season entry lists.

/// Drivers or constructors entered in `season`.
#[derive(Debug, Clone, PartialEq)]
pub struct Roster<T> {
    pub season: String,
    pub entries: Vec<T>,
}

impl<T> Roster<T> {
    pub fn total(&self) -> usize {
        self.entries.len()
    }
}
