use compact_str::CompactString;
use kanau::processor::Processor;
use uuid::Uuid;

use crate::framework::DatabaseProcessor;

/// A storefront customer account.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserRecord {
    pub id: Uuid,
    pub name: CompactString,
    pub email: CompactString,
    pub created_at: time::PrimitiveDateTime,
}

#[derive(Debug, Clone)]
/// Look up a user by primary key.
///
/// Only the fields needed for the gateway customer block are read back.
pub struct GetUserById {
    pub user_id: Uuid,
}

impl Processor<GetUserById> for DatabaseProcessor {
    type Output = Option<UserRecord>;
    type Error = sqlx::Error;
    #[tracing::instrument(skip_all, err, name = "SQL:GetUserById")]
    async fn process(&self, query: GetUserById) -> Result<Option<UserRecord>, sqlx::Error> {
        sqlx::query_as::<_, UserRecord>(
            "SELECT id, name, email, created_at FROM users WHERE id = $1",
        )
        .bind(query.user_id)
        .fetch_optional(&self.pool)
        .await
    }
}
