//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
    #[sea_orm(column_type = "String(StringLen::N(127))", nullable)]
    pub slug: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(255))", nullable)]
    pub title: Option<String>,
    #[sea_orm(column_type = "String(StringLen::N(1023))", nullable)]
    pub content: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for blog_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: Some(model.id),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
            slug: model.slug,
            title: model.title,
            content: model.content,
        }
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
///
/// A post without an id leaves the primary key unset so that `save` inserts
/// it and lets the database assign one.
impl From<blog_core::domain::Post> for ActiveModel {
    fn from(post: blog_core::domain::Post) -> Self {
        Self {
            id: match post.id {
                Some(id) => Unchanged(id),
                None => NotSet,
            },
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
            slug: Set(post.slug),
            title: Set(post.title),
            content: Set(post.content),
        }
    }
}
