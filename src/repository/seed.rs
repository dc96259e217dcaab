//! Sample catalog loaded at startup

use chrono::NaiveDate;

use crate::models::{Author, Book, Borrowing};

pub(super) fn authors() -> Vec<Author> {
    vec![
        author(1, "Victor Hugo", "France", 1802),
        author(2, "Agatha Christie", "UK", 1890),
        author(3, "Naguib Mahfouz", "Egypt", 1911),
    ]
}

pub(super) fn books() -> Vec<Book> {
    vec![
        book(1, "Les Misérables", 1, 1463, 1862),
        book(2, "Notre-Dame de Paris", 1, 512, 1831),
        book(3, "Murder on the Orient Express", 2, 256, 1934),
        book(4, "Cairo Trilogy", 3, 1344, 1956),
    ]
}

pub(super) fn borrowings() -> Vec<Borrowing> {
    vec![
        borrowing(1, 1, "Ahmed", (2024, 10, 15), false),
        borrowing(2, 3, "Sarah", (2024, 10, 20), true),
    ]
}

fn author(id: i32, name: &str, country: &str, birth_year: i32) -> Author {
    Author {
        id,
        name: name.to_string(),
        country: country.to_string(),
        birth_year,
    }
}

fn book(id: i32, title: &str, author_id: i32, pages: i32, year: i32) -> Book {
    Book {
        id,
        title: title.to_string(),
        author_id,
        pages,
        year,
    }
}

fn borrowing(
    id: i32,
    book_id: i32,
    user_name: &str,
    (y, m, d): (i32, u32, u32),
    returned: bool,
) -> Borrowing {
    Borrowing {
        id,
        book_id,
        user_name: user_name.to_string(),
        // Seed dates are literal calendar dates
        borrow_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        returned,
    }
}
