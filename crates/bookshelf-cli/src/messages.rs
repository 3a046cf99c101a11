//! User-facing text
//!
//! Every string the menu prints lives here, in Russian (the program's
//! original wording, kept verbatim) and English. Statuses are stored in
//! the catalog file in Russian regardless of language; translation
//! happens only at display time.

use bookshelf_core::Status;

/// Interface language
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Russian,
    English,
}

impl Language {
    /// Parse a language tag from config or the command line
    pub fn from_tag(tag: &str) -> Option<Language> {
        if tag.eq_ignore_ascii_case("ru") {
            Some(Language::Russian)
        } else if tag.eq_ignore_ascii_case("en") {
            Some(Language::English)
        } else {
            None
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Russian
    }
}

/// The complete set of strings for one language
pub struct Messages {
    pub language: Language,

    /// The numbered menu, printed before every prompt for an action
    pub menu: [&'static str; 6],

    pub prompt_action: &'static str,
    pub prompt_title: &'static str,
    pub prompt_author: &'static str,
    pub prompt_year: &'static str,
    pub prompt_id: &'static str,
    pub prompt_search_mode: &'static str,
    pub prompt_search_query: &'static str,

    pub invalid_choice: &'static str,
    pub invalid_search_mode: &'static str,
    pub invalid_number: &'static str,
    pub empty_value: &'static str,
    pub duplicate_book: &'static str,
    pub no_books_found: &'static str,

    pub header_id: &'static str,
    pub header_title: &'static str,
    pub header_author: &'static str,
    pub header_year: &'static str,
    pub header_status: &'static str,

    pub status_available: &'static str,
    pub status_checked_out: &'static str,
}

impl Messages {
    /// Message catalog for the given language
    pub fn for_language(language: Language) -> &'static Messages {
        match language {
            Language::Russian => &RUSSIAN,
            Language::English => &ENGLISH,
        }
    }

    /// Status name as shown in tables
    pub fn status_name(&self, status: Status) -> &'static str {
        match status {
            Status::Available => self.status_available,
            Status::CheckedOut => self.status_checked_out,
        }
    }

    /// Notice printed when no book has the requested id
    pub fn not_found(&self, id: u64) -> String {
        match self.language {
            Language::Russian => format!("Ошибка: Книги с id = {} не существует!", id),
            Language::English => format!("Error: no book with id = {}!", id),
        }
    }
}

static RUSSIAN: Messages = Messages {
    language: Language::Russian,

    menu: [
        "1. Добавить книгу",
        "2. Удалить книгу",
        "3. Найти книгу",
        "4. Показать все книги",
        "5. Изменить статус книги",
        "0. Выход",
    ],

    prompt_action: "Выберите действие: ",
    prompt_title: "Введите название книги: ",
    prompt_author: "Введите автора: ",
    prompt_year: "Введите год издания: ",
    prompt_id: "Введите ID книги: ",
    prompt_search_mode: "Введите режим поиска (1 - по названию, 2 - по автору, 3 - по году издания): ",
    prompt_search_query: "Введите поисковый запрос: ",

    invalid_choice: "Ошибка: Неверный выбор!",
    invalid_search_mode: "Ошибка: Неверный режим поиска!",
    invalid_number: "Ошибка: Ожидалось число!",
    empty_value: "Ошибка: Значение не может быть пустым!",
    duplicate_book: "Ошибка: Книга уже есть в библиотеке!",
    no_books_found: "Книги не найдены!",

    header_id: "ID",
    header_title: "Название",
    header_author: "Автор",
    header_year: "Год",
    header_status: "Статус",

    status_available: "В наличии",
    status_checked_out: "Выдана",
};

static ENGLISH: Messages = Messages {
    language: Language::English,

    menu: [
        "1. Add a book",
        "2. Remove a book",
        "3. Find a book",
        "4. Show all books",
        "5. Change book status",
        "0. Exit",
    ],

    prompt_action: "Choose an action: ",
    prompt_title: "Enter the book title: ",
    prompt_author: "Enter the author: ",
    prompt_year: "Enter the publication year: ",
    prompt_id: "Enter the book ID: ",
    prompt_search_mode: "Enter the search mode (1 - by title, 2 - by author, 3 - by publication year): ",
    prompt_search_query: "Enter the search query: ",

    invalid_choice: "Error: invalid choice!",
    invalid_search_mode: "Error: invalid search mode!",
    invalid_number: "Error: expected a number!",
    empty_value: "Error: value must not be empty!",
    duplicate_book: "Error: the book is already in the library!",
    no_books_found: "No books found!",

    header_id: "ID",
    header_title: "Title",
    header_author: "Author",
    header_year: "Year",
    header_status: "Status",

    status_available: "Available",
    status_checked_out: "Checked out",
};
