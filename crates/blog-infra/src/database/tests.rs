#[cfg(test)]
mod tests {
    use crate::database::entity::post;
    use crate::database::postgres_repo::PostgresPostRepository;
    use blog_core::domain::Post;
    use blog_core::error::RepoError;
    use blog_core::ports::{BaseRepository, PostRepository};
    use chrono::{TimeZone, Utc};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i32, day: u32) -> post::Model {
        let at = Utc.with_ymd_and_hms(2023, 11, day, 20, 46, 4).unwrap();
        post::Model {
            id,
            created_at: at.into(),
            updated_at: at.into(),
            slug: Some(format!("some-post-fixture-{id}")),
            title: Some(format!("Some post fixture {id}")),
            content: Some(format!("Some text of some post fixture {id}.")),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(1, 28)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = BaseRepository::<Post, i32>::find_by_id(&repo, 1)
            .await
            .unwrap();

        let post = result.expect("post should be found");
        assert_eq!(post.id, Some(1));
        assert_eq!(post.slug.as_deref(), Some("some-post-fixture-1"));
        assert_eq!(
            post.created_at,
            Utc.with_ymd_and_hms(2023, 11, 28, 20, 46, 4).unwrap()
        );
    }

    #[tokio::test]
    async fn test_find_post_by_id_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = BaseRepository::<Post, i32>::find_by_id(&repo, 1000)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_all_limited() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(3, 30)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let posts = repo.find_all_limited(1, 2).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, Some(3));
    }

    #[tokio::test]
    async fn test_save_new_post_gets_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(4, 28)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let draft = Post::from(model(4, 28)).detach();
        let saved = BaseRepository::<Post, i32>::save(&repo, draft)
            .await
            .unwrap();
        assert_eq!(saved.id, Some(4));
    }

    #[tokio::test]
    async fn test_delete_missing_post() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = BaseRepository::<Post, i32>::delete(&repo, 1000).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }
}
