//! User service: read use-cases for users.

use holonet_domain::error::HolonetError;
use holonet_domain::user::UserDetail;

use crate::ports::UserRepository;

/// Application service for reading users.
pub struct UserService<R> {
    repo: R,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all users with their favorites.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_users(&self) -> Result<Vec<UserDetail>, HolonetError> {
        self.repo.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use holonet_domain::id::UserId;
    use holonet_domain::user::User;
    use std::future::Future;

    struct FixedUserRepo(Vec<UserDetail>);

    impl UserRepository for FixedUserRepo {
        fn get_by_id(
            &self,
            id: UserId,
        ) -> impl Future<Output = Result<Option<User>, HolonetError>> + Send {
            let result = self
                .0
                .iter()
                .find(|d| d.user.id == id)
                .map(|d| d.user.clone());
            async { Ok(result) }
        }

        fn get_all(&self) -> impl Future<Output = Result<Vec<UserDetail>, HolonetError>> + Send {
            let result = self.0.clone();
            async { Ok(result) }
        }
    }

    #[tokio::test]
    async fn should_list_empty_when_no_users() {
        let svc = UserService::new(FixedUserRepo(vec![]));
        assert!(svc.list_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_list_users_with_favorites() {
        let user = User::builder()
            .id(UserId::new(1))
            .username("leia")
            .build()
            .unwrap();
        let svc = UserService::new(FixedUserRepo(vec![UserDetail {
            user,
            favorites: vec![],
        }]));

        let all = svc.list_users().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].user.username, "leia");
    }
}
