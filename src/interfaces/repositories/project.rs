use async_trait::async_trait;
use mockall::automock;
use sqlx::{self, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::{
    entities::{
        member::{Member, MemberRow},
        pagination::Paginated,
        project::{NewProjectRequest, Project, ProjectRow, ProjectStatus, UpdateProjectRequest},
    },
    errors::AppError,
    repositories::sqlx_repo::{page_offset, push_opt, push_patch, SqlxProjectRepo},
};

#[automock]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, req: &NewProjectRequest) -> Result<Project, AppError>;
    async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, AppError>;
    async fn get_project_team(&self, project_id: &Uuid) -> Result<Vec<Member>, AppError>;
    async fn get_all_projects(
        &self,
        segment: Option<Uuid>,
        status: Option<ProjectStatus>,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<Project>, AppError>;
    async fn get_completed_projects(&self, limit: u32) -> Result<Vec<Project>, AppError>;
    async fn get_related_projects(
        &self,
        segment_id: &Uuid,
        exclude_id: &Uuid,
        limit: u32,
    ) -> Result<Vec<Project>, AppError>;
    async fn update_project(&self, id: &Uuid, req: &UpdateProjectRequest) -> Result<Project, AppError>;
    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn create_project(&self, req: &NewProjectRequest) -> Result<Project, AppError> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
            INSERT INTO projects (
                title, description, technologies, github_url, live_demo_url,
                image, status, segment_id, start_date, completion_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&req.title)
        .bind(&req.description)
        .bind(&req.technologies)
        .bind(&req.github_url)
        .bind(&req.live_demo_url)
        .bind(&req.image)
        .bind(req.status)
        .bind(req.segment_id)
        .bind(req.start_date)
        .bind(req.completion_date)
        .fetch_one(&mut *tx)
        .await?;

        if !req.team_member_ids.is_empty() {
            let mut builder =
                QueryBuilder::<Postgres>::new("INSERT INTO project_members (project_id, member_id) ");
            builder.push_values(req.team_member_ids.iter(), |mut b, member_id| {
                b.push_bind(row.id);
                b.push_bind(*member_id);
            });
            builder.build().execute(&mut *tx).await?;
        }

        tx.commit().await?;

        Ok(Project::from(row))
    }

    async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, AppError> {
        let row = sqlx::query_as::<_, ProjectRow>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

        Ok(Project::from(row))
    }

    async fn get_project_team(&self, project_id: &Uuid) -> Result<Vec<Member>, AppError> {
        let rows = sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT m.*
            FROM members m
            INNER JOIN project_members pm ON pm.member_id = m.id
            WHERE pm.project_id = $1
            ORDER BY m.display_order ASC, m.name ASC
            "#,
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Member::from).collect())
    }

    async fn get_all_projects(
        &self,
        segment: Option<Uuid>,
        status: Option<ProjectStatus>,
        page: u32,
        per_page: u32,
    ) -> Result<Paginated<Project>, AppError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT * FROM projects
            WHERE ($1::uuid IS NULL OR segment_id = $1)
              AND ($2::text IS NULL OR status = $2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(segment)
        .bind(status)
        .bind(per_page as i64)
        .bind(page_offset(page, per_page))
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM projects
            WHERE ($1::uuid IS NULL OR segment_id = $1)
              AND ($2::text IS NULL OR status = $2)
            "#,
        )
        .bind(segment)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        let items = rows.into_iter().map(Project::from).collect();
        Ok(Paginated::new(items, total, page, per_page))
    }

    async fn get_completed_projects(&self, limit: u32) -> Result<Vec<Project>, AppError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            "SELECT * FROM projects WHERE status = 'completed' ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn get_related_projects(
        &self,
        segment_id: &Uuid,
        exclude_id: &Uuid,
        limit: u32,
    ) -> Result<Vec<Project>, AppError> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
            SELECT * FROM projects
            WHERE segment_id = $1 AND id <> $2
            ORDER BY created_at DESC
            LIMIT $3
            "#,
        )
        .bind(segment_id)
        .bind(exclude_id)
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Project::from).collect())
    }

    async fn update_project(&self, id: &Uuid, req: &UpdateProjectRequest) -> Result<Project, AppError> {
        let mut tx = self.pool.begin().await?;

        let mut builder = QueryBuilder::<Postgres>::new("UPDATE projects SET updated_at = NOW()");

        push_opt(&mut builder, "title", &req.title);
        push_opt(&mut builder, "description", &req.description);
        push_opt(&mut builder, "technologies", &req.technologies);
        push_patch(&mut builder, "github_url", &req.github_url);
        push_patch(&mut builder, "live_demo_url", &req.live_demo_url);
        push_patch(&mut builder, "image", &req.image);
        push_opt(&mut builder, "status", &req.status);
        push_patch(&mut builder, "segment_id", &req.segment_id);
        push_patch(&mut builder, "start_date", &req.start_date);
        push_patch(&mut builder, "completion_date", &req.completion_date);

        builder.push(" WHERE id = ");
        builder.push_bind(*id);
        builder.push(" RETURNING *");

        let row = builder
            .build_query_as::<ProjectRow>()
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".into()))?;

        if let Some(team) = &req.team_member_ids {
            sqlx::query("DELETE FROM project_members WHERE project_id = $1")
                .bind(row.id)
                .execute(&mut *tx)
                .await?;

            if !team.is_empty() {
                let mut insert =
                    QueryBuilder::<Postgres>::new("INSERT INTO project_members (project_id, member_id) ");
                insert.push_values(team.iter(), |mut b, member_id| {
                    b.push_bind(row.id);
                    b.push_bind(*member_id);
                });
                insert.build().execute(&mut *tx).await?;
            }
        }

        tx.commit().await?;

        Ok(Project::from(row))
    }

    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Project not found".into()));
        }

        Ok(())
    }
}
