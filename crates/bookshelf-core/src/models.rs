use serde::{Deserialize, Serialize};

/// Lending state of a book.
///
/// The serialized names match the values the catalog file has always
/// used, so files written by older versions keep loading unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// The book is on the shelf.
    #[serde(rename = "В наличии")]
    Available,
    /// The book is lent out.
    #[serde(rename = "Выдана")]
    CheckedOut,
}

impl Status {
    /// Every status, in cycling order.
    pub const ALL: [Status; 2] = [Status::Available, Status::CheckedOut];

    /// Returns the next status in the cycle, wrapping around.
    pub fn next(self) -> Status {
        let index = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Available
    }
}

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Identifier assigned by the catalog, unique within one file.
    pub id: u64,
    /// Title of the book.
    pub title: String,
    /// Author of the book.
    pub author: String,
    /// Publication year.
    pub year: i32,
    /// Current lending state.
    pub status: Status,
}

impl Book {
    /// Creates a book from user-supplied fields with a fresh id.
    ///
    /// New books always start out available.
    pub fn new(id: u64, draft: NewBook) -> Self {
        Self {
            id,
            title: draft.title,
            author: draft.author,
            year: draft.year,
            status: Status::default(),
        }
    }
}

/// The user-supplied fields of a book, before the catalog assigns an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
        }
    }

    /// True when `book` describes the same edition: identical title,
    /// author and year. Comparison is exact, including case.
    pub fn matches(&self, book: &Book) -> bool {
        book.title == self.title && book.author == self.author && book.year == self.year
    }
}

/// Root of the catalog file.
///
/// The file holds a single object with a `books` array. Unknown keys
/// are ignored on load and absent on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryDocument {
    pub books: Vec<Book>,
}

impl LibraryDocument {
    /// Returns the id to assign to the next added book.
    ///
    /// Ids grow from the current maximum, so removing a book never
    /// causes an id to be reissued while a higher one exists.
    pub fn next_id(&self) -> u64 {
        self.books.iter().map(|b| b.id).max().map_or(1, |id| id + 1)
    }

    pub fn get(&self, id: u64) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Book> {
        self.books.iter_mut().find(|b| b.id == id)
    }

    /// True when the catalog already holds the edition described by `draft`.
    pub fn contains_edition(&self, draft: &NewBook) -> bool {
        self.books.iter().any(|b| draft.matches(b))
    }
}
