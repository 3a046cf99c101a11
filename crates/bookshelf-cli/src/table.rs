//! Table rendering for book listings
//!
//! Reproduces the program's classic console table: `+---+` borders,
//! centered headers, left-aligned cells and a separator line after
//! every row. Columns are sized to the widest value they hold.
//!
//! Widths are measured in characters, not bytes, so Cyrillic titles
//! line up the same as ASCII ones.

use bookshelf_core::Book;

use crate::messages::Messages;

/// Column widths for one rendering, headers included
struct Widths {
    id: usize,
    title: usize,
    author: usize,
    year: usize,
    status: usize,
}

impl Widths {
    fn measure(books: &[Book], messages: &Messages) -> Widths {
        let mut widths = Widths {
            id: char_len(messages.header_id),
            title: char_len(messages.header_title),
            author: char_len(messages.header_author),
            year: char_len(messages.header_year),
            status: char_len(messages.header_status),
        };

        for book in books {
            widths.id = widths.id.max(char_len(&book.id.to_string()));
            widths.title = widths.title.max(char_len(&book.title));
            widths.author = widths.author.max(char_len(&book.author));
            widths.year = widths.year.max(char_len(&book.year.to_string()));
            widths.status = widths
                .status
                .max(char_len(messages.status_name(book.status)));
        }

        widths
    }

    fn separator(&self) -> String {
        format!(
            "+{}+{}+{}+{}+{}+",
            "-".repeat(self.id + 2),
            "-".repeat(self.title + 2),
            "-".repeat(self.author + 2),
            "-".repeat(self.year + 2),
            "-".repeat(self.status + 2),
        )
    }
}

/// Width of `text` in characters
fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Render `books` as a bordered table, one line per row plus borders
///
/// The caller decides what to do about an empty list; this renders
/// whatever it is given.
pub fn render_table(books: &[Book], messages: &Messages) -> String {
    let widths = Widths::measure(books, messages);
    let separator = widths.separator();

    let mut out = String::new();
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&format!(
        "| {:^id$} | {:^title$} | {:^author$} | {:^year$} | {:^status$} |",
        messages.header_id,
        messages.header_title,
        messages.header_author,
        messages.header_year,
        messages.header_status,
        id = widths.id,
        title = widths.title,
        author = widths.author,
        year = widths.year,
        status = widths.status,
    ));
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');

    for book in books {
        out.push_str(&format!(
            "| {:<id$} | {:<title$} | {:<author$} | {:<year$} | {:<status$} |",
            book.id,
            book.title,
            book.author,
            book.year,
            messages.status_name(book.status),
            id = widths.id,
            title = widths.title,
            author = widths.author,
            year = widths.year,
            status = widths.status,
        ));
        out.push('\n');
        out.push_str(&separator);
        out.push('\n');
    }

    out
}
