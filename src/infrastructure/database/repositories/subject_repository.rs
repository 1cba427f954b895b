//! SeaORM implementation of SubjectRepository

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func, IntoColumnRef, LikeExpr, SimpleExpr};
use sea_orm::{
    Condition, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::domain::subject::{
    Department, Subject, SubjectListQuery, SubjectRepository, SubjectWithDepartment,
};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::{department, subject};
use crate::shared::escape_like;
use crate::shared::pagination::PaginatedResult;

pub struct SeaOrmSubjectRepository {
    db: DatabaseConnection,
}

impl SeaOrmSubjectRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> DomainError {
    DomainError::Database(e.to_string())
}

/// Case-insensitive substring predicate: `lower(col) LIKE '%needle%' ESCAPE '\'`.
///
/// The needle is lowercased and its LIKE metacharacters are escaped, so
/// user-supplied `%`/`_` match literally. The value travels as a bound
/// pattern, never as interpolated query text.
fn contains_ci<C>(col: C, needle: &str) -> SimpleExpr
where
    C: IntoColumnRef,
{
    let pattern = format!("%{}%", escape_like(&needle.to_lowercase()));
    Expr::expr(Func::lower(Expr::col(col))).like(LikeExpr::new(pattern).escape('\\'))
}

fn with_department(
    model: subject::Model,
    dept: Option<department::Model>,
) -> SubjectWithDepartment {
    SubjectWithDepartment {
        subject: Subject {
            id: model.id,
            name: model.name,
            code: model.code,
            department_id: model.department_id,
            created_at: model.created_at,
        },
        department: dept.map(|d| Department {
            id: d.id,
            name: d.name,
        }),
    }
}

#[async_trait]
impl SubjectRepository for SeaOrmSubjectRepository {
    async fn list(
        &self,
        query: &SubjectListQuery,
    ) -> DomainResult<PaginatedResult<SubjectWithDepartment>> {
        let mut select = subject::Entity::find()
            .find_also_related(department::Entity)
            .order_by_desc(subject::Column::CreatedAt);

        // Successive .filter() calls combine with AND
        if let Some(search) = &query.search {
            select = select.filter(
                Condition::any()
                    .add(contains_ci(
                        (subject::Entity, subject::Column::Name),
                        search,
                    ))
                    .add(contains_ci(
                        (subject::Entity, subject::Column::Code),
                        search,
                    )),
            );
        }
        if let Some(dept) = &query.department {
            select = select.filter(contains_ci(
                (department::Entity, department::Column::Name),
                dept,
            ));
        }

        // Count and page fetch are two independent reads with no transaction
        // between them; a concurrent insert can make them disagree.
        let total = select.clone().count(&self.db).await.map_err(db_err)?;

        let rows = select
            .offset(query.page.offset())
            .limit(query.page.limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items = rows
            .into_iter()
            .map(|(s, d)| with_department(s, d))
            .collect();

        Ok(PaginatedResult::new(items, total, &query.page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::shared::pagination::PageRequest;
    use chrono::{TimeZone, Utc};
    use sea_orm::{ActiveModelTrait, Database, Set};
    use sea_orm_migration::MigratorTrait;

    async fn setup_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    async fn insert_department(db: &DatabaseConnection, name: &str) -> i32 {
        department::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
        .id
    }

    async fn insert_subject(
        db: &DatabaseConnection,
        name: &str,
        code: &str,
        department_id: Option<i32>,
        created_secs: u32,
    ) -> i32 {
        subject::ActiveModel {
            name: Set(name.to_string()),
            code: Set(code.to_string()),
            department_id: Set(department_id),
            created_at: Set(Utc
                .with_ymd_and_hms(2024, 1, 1, 12, 0, created_secs)
                .unwrap()),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
        .id
    }

    fn query(page: u64, limit: u64) -> SubjectListQuery {
        SubjectListQuery {
            search: None,
            department: None,
            page: PageRequest { page, limit },
        }
    }

    #[tokio::test]
    async fn empty_store_returns_empty_page() {
        let db = setup_db().await;
        let repo = SeaOrmSubjectRepository::new(db);

        let result = repo.list(&query(1, 10)).await.unwrap();

        assert!(result.items.is_empty());
        assert_eq!(result.total, 0);
        assert_eq!(result.total_pages, 0);
        assert_eq!(result.page, 1);
        assert_eq!(result.limit, 10);
    }

    #[tokio::test]
    async fn orders_by_created_at_descending() {
        let db = setup_db().await;
        insert_subject(&db, "Algebra", "MATH101", None, 1).await;
        insert_subject(&db, "Biology", "BIO101", None, 3).await;
        insert_subject(&db, "Chemistry", "CHEM101", None, 2).await;
        let repo = SeaOrmSubjectRepository::new(db);

        let result = repo.list(&query(1, 10)).await.unwrap();

        let names: Vec<_> = result
            .items
            .iter()
            .map(|s| s.subject.name.as_str())
            .collect();
        assert_eq!(names, vec!["Biology", "Chemistry", "Algebra"]);
    }

    #[tokio::test]
    async fn last_page_holds_the_remainder() {
        let db = setup_db().await;
        for i in 0..25 {
            insert_subject(&db, &format!("Subject {i}"), &format!("S{i:03}"), None, i).await;
        }
        let repo = SeaOrmSubjectRepository::new(db);

        let result = repo.list(&query(3, 10)).await.unwrap();

        assert_eq!(result.items.len(), 5);
        assert_eq!(result.total, 25);
        assert_eq!(result.total_pages, 3);
        assert_eq!(result.page, 3);
    }

    #[tokio::test]
    async fn search_matches_name_or_code_case_insensitively() {
        let db = setup_db().await;
        insert_subject(&db, "Mathematics", "M1", None, 1).await;
        insert_subject(&db, "History", "MATH-HIST", None, 2).await;
        insert_subject(&db, "Physics", "PHY101", None, 3).await;
        let repo = SeaOrmSubjectRepository::new(db);

        let mut q = query(1, 10);
        q.search = Some("math".to_string());
        let result = repo.list(&q).await.unwrap();

        assert_eq!(result.total, 2);
        let names: Vec<_> = result
            .items
            .iter()
            .map(|s| s.subject.name.as_str())
            .collect();
        assert_eq!(names, vec!["History", "Mathematics"]);
    }

    #[tokio::test]
    async fn department_filter_matches_by_name() {
        let db = setup_db().await;
        let science = insert_department(&db, "Science").await;
        let arts = insert_department(&db, "Liberal Arts").await;
        insert_subject(&db, "Physics", "PHY101", Some(science), 1).await;
        insert_subject(&db, "Painting", "ART101", Some(arts), 2).await;
        let repo = SeaOrmSubjectRepository::new(db);

        let mut q = query(1, 10);
        q.department = Some("science".to_string());
        let result = repo.list(&q).await.unwrap();

        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].subject.name, "Physics");
        assert_eq!(
            result.items[0].department.as_ref().unwrap().name,
            "Science"
        );
    }

    #[tokio::test]
    async fn like_metacharacters_match_literally() {
        let db = setup_db().await;
        let literal = insert_department(&db, "100%").await;
        let decoy = insert_department(&db, "100 Club").await;
        insert_subject(&db, "Effort", "EFF1", Some(literal), 1).await;
        insert_subject(&db, "Decoy", "DEC1", Some(decoy), 2).await;
        let repo = SeaOrmSubjectRepository::new(db);

        let mut q = query(1, 10);
        q.department = Some("100%".to_string());
        let result = repo.list(&q).await.unwrap();

        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].subject.name, "Effort");
    }

    #[tokio::test]
    async fn subjects_without_department_are_still_listed() {
        let db = setup_db().await;
        let science = insert_department(&db, "Science").await;
        insert_subject(&db, "Physics", "PHY101", Some(science), 1).await;
        insert_subject(&db, "Elective", "ELEC1", None, 2).await;
        let repo = SeaOrmSubjectRepository::new(db);

        let result = repo.list(&query(1, 10)).await.unwrap();

        assert_eq!(result.total, 2);
        assert_eq!(result.items[0].subject.name, "Elective");
        assert!(result.items[0].department.is_none());
        assert!(result.items[1].department.is_some());
    }

    #[tokio::test]
    async fn filters_combine_with_and() {
        let db = setup_db().await;
        let science = insert_department(&db, "Science").await;
        let arts = insert_department(&db, "Arts").await;
        insert_subject(&db, "Mathematics", "MATH101", Some(science), 1).await;
        insert_subject(&db, "Math for Artists", "ART-M1", Some(arts), 2).await;
        insert_subject(&db, "Physics", "PHY101", Some(science), 3).await;
        let repo = SeaOrmSubjectRepository::new(db);

        let mut q = query(1, 10);
        q.search = Some("math".to_string());
        q.department = Some("Science".to_string());
        let result = repo.list(&q).await.unwrap();

        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].subject.name, "Mathematics");
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty_but_keeps_total() {
        let db = setup_db().await;
        insert_subject(&db, "Algebra", "MATH101", None, 1).await;
        let repo = SeaOrmSubjectRepository::new(db);

        let result = repo.list(&query(5, 10)).await.unwrap();

        assert!(result.items.is_empty());
        assert_eq!(result.total, 1);
        assert_eq!(result.total_pages, 1);
    }
}
