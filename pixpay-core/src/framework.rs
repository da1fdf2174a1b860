use sqlx::PgPool;

/// Executes database messages against the shared connection pool.
pub struct DatabaseProcessor {
    pub pool: PgPool,
}
