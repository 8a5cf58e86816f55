//! Membership management service

use validator::Validate;

use crate::{
    error::AppResult,
    models::{Member, MemberInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list_members(&self) -> Vec<Member> {
        self.repository.members.list()
    }

    pub fn get_member(&self, id: i32) -> AppResult<Member> {
        self.repository.members.get_by_id(id)
    }

    /// Register a new member after validating the input
    pub fn create_member(&self, input: MemberInput) -> AppResult<Member> {
        input.validate()?;
        let created = self.repository.members.create(&input)?;
        tracing::info!("Membership: registered member id={} \"{}\"", created.id, created.name);
        Ok(created)
    }

    pub fn update_member(&self, id: i32, input: MemberInput) -> AppResult<Member> {
        input.validate()?;
        self.repository.members.update(id, &input)
    }

    /// Delete a member; `force` cascade-clears their active loans
    pub fn delete_member(&self, id: i32, force: bool) -> AppResult<()> {
        self.repository.members.delete(id, force)?;
        tracing::info!("Membership: deleted member id={} (force={})", id, force);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn service() -> MembersService {
        MembersService::new(Repository::in_memory())
    }

    #[test]
    fn bad_email_fails_before_any_mutation() {
        let members = service();
        let input = MemberInput {
            name: "John Doe".to_string(),
            email: "not-an-email".to_string(),
            phone: "+1234567890".to_string(),
            membership_date: None,
            membership_type: None,
            status: None,
        };

        let err = members.create_member(input).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(members.list_members().is_empty());
    }
}
