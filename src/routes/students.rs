use crate::{
    data::{
        DataType,
        student::{NewStudent, Student},
    },
    error::{CommitTransactionSnafu, MissingStudentSnafu, RollbookResult},
    state::AppState,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use snafu::{OptionExt, ResultExt};

#[derive(Deserialize, Debug)]
pub struct StudentFilter {
    pub graduate: Option<bool>,
}

pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(filter): Query<StudentFilter>,
) -> RollbookResult<Json<Student>> {
    //accepted for caller compatibility, storage never consults it
    if let Some(graduate) = filter.graduate {
        debug!(id, graduate, "ignoring graduate filter");
    }

    let mut conn = state.get_connection().await?;
    let student = Student::get_from_db_by_id(id, &mut conn)
        .await?
        .context(MissingStudentSnafu { id })?;

    Ok(Json(student))
}

pub async fn post_student(
    State(state): State<AppState>,
    Json(new_student): Json<NewStudent>,
) -> RollbookResult<(StatusCode, Json<Student>)> {
    let mut tx = state.get_transaction().await?;
    let student = Student::insert_into_database(new_student, &mut tx).await?;
    tx.commit().await.context(CommitTransactionSnafu)?;

    info!(id = student.id, "created student");
    Ok((StatusCode::CREATED, Json(student)))
}
