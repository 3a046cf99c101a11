//! Interactive menu
//!
//! The numbered action menu and its prompt loop. The menu drives a
//! `Catalog` through any `BufRead`/`Write` pair, so tests run scripted
//! sessions over byte buffers while `main` wires up stdin and stdout.
//!
//! Domain refusals (duplicate book, unknown id, bad search mode) are
//! printed as notices and the loop keeps going. Storage failures are
//! real errors and abort the program. End of input is a normal quit.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;

use bookshelf_core::{Book, Catalog, CatalogError, NewBook, SearchMode, Storage};

use crate::messages::Messages;
use crate::table;

/// What the loop does after an action
enum Flow {
    Continue,
    Quit,
}

/// Outcome of one prompt
enum Input<T> {
    /// The user typed something usable
    Value(T),
    /// The user typed something unusable and was told so
    Invalid,
    /// Input ended
    Eof,
}

/// The interactive menu over a catalog
pub struct Menu<S: Storage, R: BufRead, W: Write> {
    catalog: Catalog<S>,
    messages: &'static Messages,
    reader: R,
    writer: W,
}

impl<S: Storage, R: BufRead, W: Write> Menu<S, R, W> {
    pub fn new(catalog: Catalog<S>, messages: &'static Messages, reader: R, writer: W) -> Self {
        Self {
            catalog,
            messages,
            reader,
            writer,
        }
    }

    /// The catalog this menu operates on
    pub fn catalog(&self) -> &Catalog<S> {
        &self.catalog
    }

    /// Run the menu until the user quits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let choice = match self.prompt_number::<i64>(self.messages.prompt_action)? {
                Input::Value(choice) => choice,
                Input::Invalid => continue,
                Input::Eof => return Ok(()),
            };

            let flow = match choice {
                1 => self.add_book()?,
                2 => self.remove_book()?,
                3 => self.find_books()?,
                4 => self.list_books()?,
                5 => self.toggle_status()?,
                0 => Flow::Quit,
                _ => {
                    self.notice(self.messages.invalid_choice)?;
                    Flow::Continue
                }
            };

            if matches!(flow, Flow::Quit) {
                return Ok(());
            }
        }
    }

    fn add_book(&mut self) -> Result<Flow> {
        let m = self.messages;

        let title = match self.prompt_required(m.prompt_title)? {
            Input::Value(title) => title,
            Input::Invalid => return Ok(Flow::Continue),
            Input::Eof => return Ok(Flow::Quit),
        };
        let author = match self.prompt_required(m.prompt_author)? {
            Input::Value(author) => author,
            Input::Invalid => return Ok(Flow::Continue),
            Input::Eof => return Ok(Flow::Quit),
        };
        let year = match self.prompt_number::<i32>(m.prompt_year)? {
            Input::Value(year) => year,
            Input::Invalid => return Ok(Flow::Continue),
            Input::Eof => return Ok(Flow::Quit),
        };

        match self.catalog.add(NewBook::new(title, author, year)) {
            Ok(_) => {}
            Err(CatalogError::Duplicate) => self.notice(m.duplicate_book)?,
            Err(e) => return Err(e.into()),
        }
        Ok(Flow::Continue)
    }

    fn remove_book(&mut self) -> Result<Flow> {
        let m = self.messages;

        let id = match self.prompt_number::<u64>(m.prompt_id)? {
            Input::Value(id) => id,
            Input::Invalid => return Ok(Flow::Continue),
            Input::Eof => return Ok(Flow::Quit),
        };

        match self.catalog.remove(id) {
            Ok(_) => {}
            Err(CatalogError::NotFound { id }) => {
                let text = m.not_found(id);
                self.notice(&text)?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(Flow::Continue)
    }

    fn find_books(&mut self) -> Result<Flow> {
        let m = self.messages;

        let mode_choice = match self.prompt_number::<i64>(m.prompt_search_mode)? {
            Input::Value(choice) => choice,
            Input::Invalid => return Ok(Flow::Continue),
            Input::Eof => return Ok(Flow::Quit),
        };
        // The query is read before the mode is checked, matching the
        // order the prompts have always come in.
        let query = match self.prompt_line(m.prompt_search_query)? {
            Some(query) => query,
            None => return Ok(Flow::Quit),
        };

        let Some(mode) = SearchMode::from_choice(mode_choice) else {
            self.notice(m.invalid_search_mode)?;
            return Ok(Flow::Continue);
        };

        let books = self.catalog.find(mode, &query)?;
        self.show_books(&books)
    }

    fn list_books(&mut self) -> Result<Flow> {
        let books = self.catalog.all()?;
        self.show_books(&books)
    }

    fn toggle_status(&mut self) -> Result<Flow> {
        let m = self.messages;

        let id = match self.prompt_number::<u64>(m.prompt_id)? {
            Input::Value(id) => id,
            Input::Invalid => return Ok(Flow::Continue),
            Input::Eof => return Ok(Flow::Quit),
        };

        match self.catalog.toggle_status(id) {
            Ok(_) => {}
            Err(CatalogError::NotFound { id }) => {
                let text = m.not_found(id);
                self.notice(&text)?;
            }
            Err(e) => return Err(e.into()),
        }
        Ok(Flow::Continue)
    }

    fn show_books(&mut self, books: &[Book]) -> Result<Flow> {
        if books.is_empty() {
            self.notice(self.messages.no_books_found)?;
        } else {
            let rendered = table::render_table(books, self.messages);
            write!(self.writer, "{}", rendered)?;
        }
        Ok(Flow::Continue)
    }

    fn print_menu(&mut self) -> Result<()> {
        for line in self.messages.menu {
            writeln!(self.writer, "{}", line)?;
        }
        Ok(())
    }

    fn notice(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{}", text)?;
        Ok(())
    }

    /// Prompt for one line, without its trailing newline
    ///
    /// Returns `None` when input has ended. Everything else comes back
    /// verbatim, surrounding whitespace included.
    fn prompt_line(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.writer, "{}", label)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Prompt for a line that must not be blank
    fn prompt_required(&mut self, label: &str) -> Result<Input<String>> {
        let Some(value) = self.prompt_line(label)? else {
            return Ok(Input::Eof);
        };
        if value.trim().is_empty() {
            self.notice(self.messages.empty_value)?;
            return Ok(Input::Invalid);
        }
        Ok(Input::Value(value))
    }

    /// Prompt for a number, telling the user off for anything else
    fn prompt_number<T: FromStr>(&mut self, label: &str) -> Result<Input<T>> {
        let Some(line) = self.prompt_line(label)? else {
            return Ok(Input::Eof);
        };
        match line.trim().parse::<T>() {
            Ok(value) => Ok(Input::Value(value)),
            Err(_) => {
                self.notice(self.messages.invalid_number)?;
                Ok(Input::Invalid)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::Language;
    use bookshelf_core::{JsonFileStorage, MemoryStorage};
    use tempfile::TempDir;

    const MENU: &str = "\
1. Add a book
2. Remove a book
3. Find a book
4. Show all books
5. Change book status
0. Exit
Choose an action: ";

    fn run_session_with(
        catalog: Catalog<MemoryStorage>,
        language: Language,
        input: &str,
    ) -> (String, Vec<Book>) {
        let mut output = Vec::new();
        let messages = Messages::for_language(language);
        let books = {
            let mut menu = Menu::new(catalog, messages, input.as_bytes(), &mut output);
            menu.run().unwrap();
            menu.catalog().all().unwrap()
        };
        (String::from_utf8(output).unwrap(), books)
    }

    fn run_session(input: &str) -> (String, Vec<Book>) {
        run_session_with(Catalog::new(MemoryStorage::new()), Language::English, input)
    }

    fn preloaded_catalog() -> Catalog<MemoryStorage> {
        let mut catalog = Catalog::new(MemoryStorage::new());
        catalog
            .add(NewBook::new("Dune", "Frank Herbert", 1965))
            .unwrap();
        catalog
            .add(NewBook::new("Hyperion", "Dan Simmons", 1989))
            .unwrap();
        catalog
    }

    #[test]
    fn test_exit_prints_menu_once() {
        let (transcript, books) = run_session("0\n");

        assert_eq!(transcript, MENU);
        assert!(books.is_empty());
    }

    #[test]
    fn test_end_of_input_quits_cleanly() {
        let (transcript, _) = run_session("");

        assert_eq!(transcript, MENU);
    }

    #[test]
    fn test_invalid_choice_prints_notice_and_loops() {
        let (transcript, _) = run_session("9\n0\n");

        assert_eq!(
            transcript,
            format!("{}Error: invalid choice!\n{}", MENU, MENU)
        );
    }

    #[test]
    fn test_non_numeric_choice_prints_number_notice() {
        let (transcript, _) = run_session("abc\n0\n");

        assert_eq!(
            transcript,
            format!("{}Error: expected a number!\n{}", MENU, MENU)
        );
    }

    #[test]
    fn test_add_and_list_round_trip() {
        let (transcript, books) = run_session("1\nDune\nFrank Herbert\n1965\n4\n0\n");

        let table = "\
+----+-------+---------------+------+-----------+
| ID | Title |    Author     | Year |  Status   |
+----+-------+---------------+------+-----------+
| 1  | Dune  | Frank Herbert | 1965 | Available |
+----+-------+---------------+------+-----------+
";
        let prompts = "Enter the book title: Enter the author: Enter the publication year: ";
        assert_eq!(
            transcript,
            format!("{}{}{}{}{}", MENU, prompts, MENU, table, MENU)
        );

        assert_eq!(books.len(), 1);
        assert_eq!(books[0].title, "Dune");
    }

    #[test]
    fn test_add_duplicate_prints_notice_and_keeps_one() {
        let input = "1\nDune\nFrank Herbert\n1965\n1\nDune\nFrank Herbert\n1965\n0\n";
        let (transcript, books) = run_session(input);

        assert!(transcript.contains("Error: the book is already in the library!"));
        assert_eq!(books.len(), 1);
    }

    #[test]
    fn test_blank_title_aborts_add() {
        let (transcript, books) = run_session("1\n   \n0\n");

        assert!(transcript.contains("Error: value must not be empty!"));
        assert!(books.is_empty());
    }

    #[test]
    fn test_non_numeric_year_aborts_add() {
        let (transcript, books) = run_session("1\nDune\nFrank Herbert\nsoon\n0\n");

        assert!(transcript.contains("Error: expected a number!"));
        assert!(books.is_empty());
    }

    #[test]
    fn test_end_of_input_mid_add_discards_partial_book() {
        let (_, books) = run_session("1\nDune\n");

        assert!(books.is_empty());
    }

    #[test]
    fn test_remove_unknown_id_prints_not_found() {
        let (transcript, _) = run_session("2\n42\n0\n");

        assert!(transcript.contains("Error: no book with id = 42!"));
    }

    #[test]
    fn test_remove_then_list_reports_no_books() {
        let mut catalog = Catalog::new(MemoryStorage::new());
        catalog
            .add(NewBook::new("Dune", "Frank Herbert", 1965))
            .unwrap();

        let (transcript, books) =
            run_session_with(catalog, Language::English, "2\n1\n4\n0\n");

        assert!(transcript.contains("No books found!"));
        assert!(books.is_empty());
    }

    #[test]
    fn test_find_by_author_prints_every_match() {
        let (transcript, _) = run_session_with(
            preloaded_catalog(),
            Language::English,
            "3\n2\nFrank Herbert\n0\n",
        );

        assert!(transcript.contains("| 1  | Dune"));
        assert!(!transcript.contains("Hyperion"));
    }

    #[test]
    fn test_find_without_match_reports_no_books() {
        let (transcript, _) = run_session_with(
            preloaded_catalog(),
            Language::English,
            "3\n1\nSolaris\n0\n",
        );

        assert!(transcript.contains("No books found!"));
    }

    #[test]
    fn test_find_checks_mode_after_reading_query() {
        let (transcript, _) = run_session("3\n7\nanything\n0\n");

        // The query prompt still appears, then the mode is rejected
        let query_at = transcript.find("Enter the search query: ").unwrap();
        let notice_at = transcript.find("Error: invalid search mode!").unwrap();
        assert!(query_at < notice_at);
    }

    #[test]
    fn test_toggle_status_is_visible_in_listing() {
        let (transcript, books) =
            run_session_with(preloaded_catalog(), Language::English, "5\n1\n4\n0\n");

        assert!(transcript.contains("Checked out"));
        assert_eq!(books[0].status, bookshelf_core::Status::CheckedOut);
    }

    #[test]
    fn test_toggle_unknown_id_prints_not_found() {
        let (transcript, _) = run_session("5\n8\n0\n");

        assert!(transcript.contains("Error: no book with id = 8!"));
    }

    #[test]
    fn test_russian_session_uses_original_wording() {
        let input = "1\nДюна\nФрэнк Герберт\n1965\n1\nДюна\nФрэнк Герберт\n1965\n9\n0\n";
        let (transcript, books) =
            run_session_with(Catalog::new(MemoryStorage::new()), Language::Russian, input);

        assert!(transcript.contains("1. Добавить книгу"));
        assert!(transcript.contains("Выберите действие: "));
        assert!(transcript.contains("Введите название книги: "));
        assert!(transcript.contains("Ошибка: Книга уже есть в библиотеке!"));
        assert!(transcript.contains("Ошибка: Неверный выбор!"));
        assert_eq!(books.len(), 1);
    }

    #[test]
    fn test_sessions_share_the_catalog_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("library.json");
        let messages = Messages::for_language(Language::English);

        let mut output = Vec::new();
        {
            let catalog = Catalog::new(JsonFileStorage::new(&path));
            let input = "1\nDune\nFrank Herbert\n1965\n0\n";
            let mut menu = Menu::new(catalog, messages, input.as_bytes(), &mut output);
            menu.run().unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"Dune\""));
        assert!(contents.contains("\"В наличии\""));

        let mut output = Vec::new();
        let transcript = {
            let catalog = Catalog::new(JsonFileStorage::new(&path));
            let mut menu = Menu::new(catalog, messages, "4\n0\n".as_bytes(), &mut output);
            menu.run().unwrap();
            drop(menu);
            String::from_utf8(output).unwrap()
        };
        assert!(transcript.contains("| 1  | Dune  |"));
    }
}
