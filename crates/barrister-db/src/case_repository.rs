use barrister_core::error::AppError;
use barrister_core::models::{Case, CasePatch};
use barrister_core::store::CaseStore;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Pool, Postgres};

/// Repository for the `cases` table.
#[derive(Clone)]
pub struct CaseRepository {
    pool: Pool<Postgres>,
}

impl CaseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// -- Internal row type for sqlx deserialization --

#[derive(sqlx::FromRow)]
struct CaseRow {
    id: String,
    case_number: String,
    title: String,
    description: Option<String>,
    status: String,
    assigned_lawyer_id: Option<String>,
    client_name: String,
    start_date: Option<DateTime<Utc>>,
    expected_end_date: Option<DateTime<Utc>>,
    actual_end_date: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl From<CaseRow> for Case {
    fn from(row: CaseRow) -> Self {
        Case {
            id: row.id,
            case_number: row.case_number,
            title: row.title,
            description: row.description,
            status: row.status,
            assigned_lawyer_id: row.assigned_lawyer_id,
            client_name: row.client_name,
            start_date: row.start_date,
            expected_end_date: row.expected_end_date,
            actual_end_date: row.actual_end_date,
            created_at: row.created_at,
        }
    }
}

impl CaseStore for CaseRepository {
    async fn list_cases(&self) -> Result<Vec<Case>, AppError> {
        let rows = sqlx::query_as::<_, CaseRow>(
            r#"SELECT * FROM cases ORDER BY created_at DESC"#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn get_case(&self, id: &str) -> Result<Option<Case>, AppError> {
        let row = sqlx::query_as::<_, CaseRow>(r#"SELECT * FROM cases WHERE id = $1"#)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn insert_case(&self, case: &Case) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO cases (
                id, case_number, title, description, status, assigned_lawyer_id,
                client_name, start_date, expected_end_date, actual_end_date, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(&case.id)
        .bind(&case.case_number)
        .bind(&case.title)
        .bind(&case.description)
        .bind(&case.status)
        .bind(&case.assigned_lawyer_id)
        .bind(&case.client_name)
        .bind(case.start_date)
        .bind(case.expected_end_date)
        .bind(case.actual_end_date)
        .bind(case.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn update_case(&self, id: &str, patch: &CasePatch) -> Result<Option<Case>, AppError> {
        // NULL parameters keep the current column value.
        let row = sqlx::query_as::<_, CaseRow>(
            r#"
            UPDATE cases
            SET case_number = COALESCE($2, case_number),
                title = COALESCE($3, title),
                description = COALESCE($4, description),
                status = COALESCE($5, status),
                assigned_lawyer_id = COALESCE($6, assigned_lawyer_id),
                client_name = COALESCE($7, client_name),
                start_date = COALESCE($8, start_date),
                expected_end_date = COALESCE($9, expected_end_date),
                actual_end_date = COALESCE($10, actual_end_date)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&patch.case_number)
        .bind(&patch.title)
        .bind(&patch.description)
        .bind(&patch.status)
        .bind(&patch.assigned_lawyer_id)
        .bind(&patch.client_name)
        .bind(patch.start_date)
        .bind(patch.expected_end_date)
        .bind(patch.actual_end_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(row.map(Into::into))
    }

    async fn delete_case(&self, id: &str) -> Result<u64, AppError> {
        let result = sqlx::query(r#"DELETE FROM cases WHERE id = $1"#)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected())
    }
}
