//! Members repository: the membership store

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::{
    error::{AppError, AppResult},
    models::{Member, MemberInput},
    repository::Library,
};

#[derive(Clone)]
pub struct MembersRepository {
    state: Arc<RwLock<Library>>,
}

impl MembersRepository {
    pub fn new(state: Arc<RwLock<Library>>) -> Self {
        Self { state }
    }

    fn read(&self) -> RwLockReadGuard<'_, Library> {
        self.state.read().expect("library lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Library> {
        self.state.write().expect("library lock poisoned")
    }

    /// All members in insertion order
    pub fn list(&self) -> Vec<Member> {
        self.read().members.clone()
    }

    /// Get member by ID
    pub fn get_by_id(&self, id: i32) -> AppResult<Member> {
        self.read()
            .members
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))
    }

    /// Create a new member with a zeroed borrow counter
    pub fn create(&self, input: &MemberInput) -> AppResult<Member> {
        let mut library = self.write();
        let id = library.members.iter().map(|m| m.id).max().unwrap_or(0) + 1;
        let now = Utc::now();

        let member = Member {
            id,
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            membership_date: input.membership_date.unwrap_or_else(|| now.date_naive()),
            membership_type: input.membership_type.unwrap_or_default(),
            status: input.status.unwrap_or_default(),
            borrowed_books: 0,
            created_at: now,
            updated_at: now,
        };

        library.members.push(member.clone());
        Ok(member)
    }

    /// Update an existing member, preserving ID and borrow counter
    pub fn update(&self, id: i32, input: &MemberInput) -> AppResult<Member> {
        let mut library = self.write();
        let member = library
            .members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))?;

        member.name = input.name.clone();
        member.email = input.email.clone();
        member.phone = input.phone.clone();
        if let Some(date) = input.membership_date {
            member.membership_date = date;
        }
        if let Some(kind) = input.membership_type {
            member.membership_type = kind;
        }
        if let Some(status) = input.status {
            member.status = status;
        }
        member.updated_at = Utc::now();

        Ok(member.clone())
    }

    /// Delete a member. Blocked while books are checked out to them unless
    /// `force` is set, in which case their active loans are cascade-cleared
    /// and the copies put back in circulation, under the same lock.
    pub fn delete(&self, id: i32, force: bool) -> AppResult<()> {
        let mut library = self.write();
        let index = library
            .members
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))?;

        if library.members[index].borrowed_books > 0 && !force {
            return Err(AppError::Conflict(format!(
                "Member with id {} has borrowed books; resend with force=true to delete them",
                id
            )));
        }

        if force {
            let now = Utc::now();
            for book in library.books.iter_mut() {
                if book.loan.as_ref().map(|l| l.borrowed_by) == Some(id) {
                    book.loan = None;
                    book.available_copies = (book.available_copies + 1).min(book.total_copies);
                    book.updated_at = now;
                }
            }
        }

        library.members.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::Repository;

    fn input(name: &str) -> MemberInput {
        MemberInput {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            phone: "+1234567890".to_string(),
            membership_date: None,
            membership_type: None,
            status: None,
        }
    }

    #[test]
    fn create_assigns_id_and_zero_counter() {
        let repo = Repository::in_memory();
        let member = repo.members.create(&input("John Doe")).unwrap();
        assert_eq!(member.id, 1);
        assert_eq!(member.borrowed_books, 0);
        assert_eq!(member.membership_date, Utc::now().date_naive());
    }

    #[test]
    fn update_preserves_borrow_counter() {
        let repo = Repository::in_memory();
        let member = repo.members.create(&input("John Doe")).unwrap();
        {
            let mut library = repo.members.write();
            library.members[0].borrowed_books = 2;
        }

        let updated = repo.members.update(member.id, &input("John Q Doe")).unwrap();
        assert_eq!(updated.id, member.id);
        assert_eq!(updated.name, "John Q Doe");
        assert_eq!(updated.borrowed_books, 2);
    }

    #[test]
    fn delete_missing_member_is_not_found() {
        let repo = Repository::in_memory();
        assert!(matches!(repo.members.delete(7, false), Err(AppError::NotFound(_))));
    }

    #[test]
    fn delete_with_borrowed_books_is_blocked() {
        let repo = Repository::in_memory();
        let member = repo.members.create(&input("John Doe")).unwrap();
        {
            let mut library = repo.members.write();
            library.members[0].borrowed_books = 1;
        }

        let err = repo.members.delete(member.id, false).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
        assert_eq!(repo.members.list().len(), 1);

        repo.members.delete(member.id, true).unwrap();
        assert!(repo.members.list().is_empty());
    }
}
