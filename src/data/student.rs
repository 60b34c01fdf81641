use crate::{
    data::DataType,
    error::{InvalidStudentNameSnafu, MakeQuerySnafu, RollbookResult},
};
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, ensure};
use sqlx::SqliteConnection;

#[derive(Serialize, Deserialize, sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
}

/// Creation payload. The id is assigned by the database on insert.
#[derive(Serialize, Deserialize, Debug)]
pub struct NewStudent {
    pub name: String,
}

impl DataType for Student {
    type Id = i64;
    type FormForAdding = NewStudent;

    async fn get_from_db_by_id(
        id: Self::Id,
        conn: &mut SqliteConnection,
    ) -> RollbookResult<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT id, name FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(conn)
            .await
            .context(MakeQuerySnafu)
    }

    async fn insert_into_database(
        to_be_added: Self::FormForAdding,
        conn: &mut SqliteConnection,
    ) -> RollbookResult<Self> {
        ensure!(!to_be_added.name.trim().is_empty(), InvalidStudentNameSnafu);

        sqlx::query_as::<_, Self>("INSERT INTO students (name) VALUES (?) RETURNING id, name")
            .bind(to_be_added.name)
            .fetch_one(conn)
            .await
            .context(MakeQuerySnafu)
    }

    async fn remove_from_database(
        id: Self::Id,
        conn: &mut SqliteConnection,
    ) -> RollbookResult<()> {
        //deleting an id with no row is fine, so no rows-affected check
        sqlx::query("DELETE FROM students WHERE id = ?")
            .bind(id)
            .execute(conn)
            .await
            .context(MakeQuerySnafu)?;
        Ok(())
    }
}
