//! Post resource handlers.

use std::future::{Future, ready};
use std::pin::Pin;

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{Either, FromRequest, HttpRequest, HttpResponse, web};
use chrono::{DateTime, SecondsFormat, Utc};

use blog_core::domain::{Limitation, Post};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};
use blog_core::{DomainError, Validateable};
use blog_shared::dto::{ListPostsQuery, PostForm, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// Create/update body, as JSON or as an urlencoded form. A request with
/// neither a body nor a content type carries no fields at all.
pub struct PostPayload(PostForm);

impl PostPayload {
    pub fn into_inner(self) -> PostForm {
        self.0
    }
}

impl FromRequest for PostPayload {
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        if is_empty_request(req) {
            return Box::pin(ready(Ok(PostPayload(PostForm::default()))));
        }

        let fut = Either::<web::Json<PostForm>, web::Form<PostForm>>::from_request(req, payload);
        Box::pin(async move {
            match fut.await {
                Ok(Either::Left(json)) => Ok(PostPayload(json.into_inner())),
                Ok(Either::Right(form)) => Ok(PostPayload(form.into_inner())),
                Err(e) => Err(e.into()),
            }
        })
    }
}

fn is_empty_request(req: &HttpRequest) -> bool {
    let headers = req.headers();
    if headers.contains_key(header::CONTENT_TYPE) || headers.contains_key(header::TRANSFER_ENCODING) {
        return false;
    }
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .is_none_or(|len| len.trim() == "0")
}

/// GET /api/posts?limit=&offset=
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let limitation = Limitation::from_query(query.limit.as_deref(), query.offset.as_deref());
    limitation.ensure_valid()?;

    let (limit, offset) = limitation.window();
    let posts = state.posts.find_all_limited(limit, offset).await?;

    let body: Vec<PostResponse> = posts.iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/posts/{id}
pub async fn show(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let post = find_post(&state, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(to_response(&post)))
}

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    request_id: RequestId,
    payload: PostPayload,
) -> AppResult<HttpResponse> {
    let form = payload.into_inner();

    let post = Post::new(form.slug, form.title, form.content);
    post.ensure_valid()?;

    let saved = state.posts.save(post).await?;
    tracing::info!(request_id = %request_id.as_str(), post_id = ?saved.id, "Post created");

    Ok(HttpResponse::Created().json(to_response(&saved)))
}

/// PUT|PATCH /api/posts/{id}
///
/// Every editable field is taken from the request; absent fields are cleared.
pub async fn update(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<i32>,
    payload: PostPayload,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let form = payload.into_inner();

    let mut post = find_post(&state, id).await?;
    post.revise(form.slug, form.title, form.content);
    post.ensure_valid()?;

    let saved = state
        .posts
        .save(post)
        .await
        .map_err(|e| storage_error(id, e))?;
    tracing::info!(request_id = %request_id.as_str(), post_id = id, "Post updated");

    Ok(HttpResponse::Ok().json(to_response(&saved)))
}

/// DELETE /api/posts/{id}
///
/// Responds with the removed post, its id cleared.
pub async fn delete(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = find_post(&state, id).await?;
    state
        .posts
        .delete(id)
        .await
        .map_err(|e| storage_error(id, e))?;
    tracing::info!(request_id = %request_id.as_str(), post_id = id, "Post deleted");

    Ok(HttpResponse::Ok().json(to_response(&post.detach())))
}

async fn find_post(state: &AppState, id: i32) -> AppResult<Post> {
    state
        .posts
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))
}

fn not_found(id: i32) -> AppError {
    DomainError::NotFound {
        entity_type: "Post",
        id,
    }
    .into()
}

/// The post may vanish between lookup and write.
fn storage_error(id: i32, err: RepoError) -> AppError {
    match err {
        RepoError::NotFound => not_found(id),
        other => other.into(),
    }
}

fn to_response(post: &Post) -> PostResponse {
    PostResponse {
        id: post.id,
        created_at: format_timestamp(&post.created_at),
        updated_at: format_timestamp(&post.updated_at),
        slug: post.slug.clone(),
        title: post.title.clone(),
        content: post.content.clone(),
    }
}

/// ISO-8601 with a numeric offset, e.g. `2023-11-28T20:46:04+00:00`.
fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, false)
}
