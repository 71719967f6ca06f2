use sqlx::PgPool;

use crate::models::auth::AuthenticatedUser;
use crate::models::user::UserStats;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppResult;

pub struct DashboardController {
    users: UserRepository,
}

impl DashboardController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    pub async fn user_stats(&self, user: &AuthenticatedUser) -> AppResult<UserStats> {
        self.users.stats(user.user_id).await
    }
}
