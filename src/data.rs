use crate::error::RollbookResult;
use sqlx::SqliteConnection;

pub mod student;

/// Seam between the HTTP layer and persistence. Operations borrow a bare
/// connection so the caller decides the unit of work: a pool connection for
/// reads, a transaction for mutations.
pub trait DataType: Sized {
    type Id;
    type FormForAdding;

    /// Absence is a normal result, never an error.
    async fn get_from_db_by_id(
        id: Self::Id,
        conn: &mut SqliteConnection,
    ) -> RollbookResult<Option<Self>>;
    async fn insert_into_database(
        to_be_added: Self::FormForAdding,
        conn: &mut SqliteConnection,
    ) -> RollbookResult<Self>;
    async fn remove_from_database(
        id: Self::Id,
        conn: &mut SqliteConnection,
    ) -> RollbookResult<()>;
}
