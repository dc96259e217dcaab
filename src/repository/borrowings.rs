//! Borrowing domain methods on Repository

use chrono::NaiveDate;

use super::Repository;
use crate::models::{Borrowing, CreateBorrowing};

impl Repository {
    /// List all borrowings in insertion order
    pub async fn borrowings_list(&self) -> Vec<Borrowing> {
        self.data.read().await.borrowings.clone()
    }

    /// Get borrowing by ID
    pub async fn borrowings_get_by_id(&self, id: i32) -> Option<Borrowing> {
        self.data
            .read()
            .await
            .borrowings
            .iter()
            .find(|b| b.id == id)
            .cloned()
    }

    /// Borrowings of the given book
    pub async fn borrowings_by_book(&self, book_id: i32) -> Vec<Borrowing> {
        self.data
            .read()
            .await
            .borrowings
            .iter()
            .filter(|b| b.book_id == book_id)
            .cloned()
            .collect()
    }

    /// Append a new, not yet returned, borrowing dated `borrow_date`
    pub async fn borrowings_append(
        &self,
        data: &CreateBorrowing,
        borrow_date: NaiveDate,
    ) -> Borrowing {
        let mut catalog = self.data.write().await;
        let borrowing = Borrowing {
            id: catalog.allocate_borrowing_id(),
            book_id: data.book_id,
            user_name: data.user_name.clone(),
            borrow_date,
            returned: false,
        };
        catalog.borrowings.push(borrowing.clone());
        borrowing
    }

    /// Flag a borrowing as returned. Returns `None` if there is no such borrowing.
    pub async fn borrowings_mark_returned(&self, id: i32) -> Option<Borrowing> {
        let mut catalog = self.data.write().await;
        let borrowing = catalog.borrowings.iter_mut().find(|b| b.id == id)?;
        borrowing.returned = true;
        Some(borrowing.clone())
    }
}
