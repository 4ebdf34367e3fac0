//! Shared fixtures: test entities, their stores and an in-memory database.

#![allow(dead_code)]

use sea_orm::entity::prelude::*;
use sea_orm::{
    ConnectOptions, Condition, ConnectionTrait, DatabaseConnection, IntoActiveModel, NotSet,
    Schema, Set,
};
use validator::Validate;

use storekit::{DeleteStore, ReadStore, RuleViolation, Store, WriteStore};

/// Soft-deletable, versioned entity.
pub mod article {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "articles")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub title: String,
        pub body: String,
        /// Row version checked by the concurrency guard
        pub version: i64,
        pub deleted: bool,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Plain entity without soft delete or versioning.
pub mod note {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
    #[sea_orm(table_name = "notes")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub text: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

#[derive(Debug, Clone, Validate)]
pub struct CreateArticle {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub body: String,
}

impl IntoActiveModel<article::ActiveModel> for CreateArticle {
    fn into_active_model(self) -> article::ActiveModel {
        article::ActiveModel {
            id: NotSet,
            title: Set(self.title),
            body: Set(self.body),
            version: Set(1),
            deleted: Set(false),
        }
    }
}

#[derive(Debug, Clone, Validate)]
pub struct UpdateArticle {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub body: String,
    /// Version the edit was based on
    pub version: i64,
}

impl IntoActiveModel<article::ActiveModel> for UpdateArticle {
    fn into_active_model(self) -> article::ActiveModel {
        article::ActiveModel {
            id: NotSet,
            title: Set(self.title),
            body: Set(self.body),
            // The guard checks the expected version, the flush writes the next one
            version: Set(self.version + 1),
            deleted: NotSet,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNote {
    pub text: String,
}

impl IntoActiveModel<note::ActiveModel> for CreateNote {
    fn into_active_model(self) -> note::ActiveModel {
        note::ActiveModel {
            id: NotSet,
            text: Set(self.text),
        }
    }
}

/// Article store: hides soft-deleted rows, validates input, guards updates
/// with the row version.
pub struct ArticleStore {
    db: DatabaseConnection,
}

impl ArticleStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadStore<article::Entity, article::Model> for ArticleStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn id_column(&self) -> article::Column {
        article::Column::Id
    }

    fn restriction(&self) -> Condition {
        Condition::all().add(article::Column::Deleted.eq(false))
    }
}

impl WriteStore<article::Entity, article::Model, article::ActiveModel, CreateArticle, UpdateArticle>
    for ArticleStore
{
    fn validate_create(&self, input: &CreateArticle) -> Vec<RuleViolation> {
        match input.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => RuleViolation::from_validation(&errors),
        }
    }

    fn validate_update(&self, input: &UpdateArticle) -> Vec<RuleViolation> {
        match input.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => RuleViolation::from_validation(&errors),
        }
    }

    fn concurrency_guard(&self, input: &UpdateArticle) -> Condition {
        Condition::all().add(article::Column::Version.eq(input.version))
    }
}

impl DeleteStore<article::Entity, article::Model, article::ActiveModel> for ArticleStore {
    fn mark_deleted(&self, model: article::Model) -> Option<article::ActiveModel> {
        let mut tombstone = model.into_active_model();
        tombstone.deleted = Set(true);
        Some(tombstone)
    }

    fn mark_restored(&self, model: article::Model) -> Option<article::ActiveModel> {
        let mut revived = model.into_active_model();
        revived.deleted = Set(false);
        Some(revived)
    }
}

/// Note store: no restriction, no validation, hard delete.
pub struct NoteStore {
    db: DatabaseConnection,
}

impl NoteStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl ReadStore<note::Entity, note::Model> for NoteStore {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    fn id_column(&self) -> note::Column {
        note::Column::Id
    }
}

impl WriteStore<note::Entity, note::Model, note::ActiveModel, CreateNote, CreateNote>
    for NoteStore
{
}

impl DeleteStore<note::Entity, note::Model, note::ActiveModel> for NoteStore {}

/// Fresh single-connection in-memory database with both tables created.
pub async fn connect_memory() -> Store {
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1);
    let store = Store::connect(options)
        .await
        .expect("connect to in-memory sqlite");

    let backend = store.connection().get_database_backend();
    let schema = Schema::new(backend);
    for statement in [
        schema.create_table_from_entity(article::Entity),
        schema.create_table_from_entity(note::Entity),
    ] {
        store
            .connection()
            .execute(backend.build(&statement))
            .await
            .expect("create table");
    }

    store
}

pub async fn article_store() -> ArticleStore {
    ArticleStore::new(connect_memory().await.connection().clone())
}

pub async fn note_store() -> NoteStore {
    NoteStore::new(connect_memory().await.connection().clone())
}

pub fn create_article(title: &str, body: &str) -> CreateArticle {
    CreateArticle {
        title: title.to_string(),
        body: body.to_string(),
    }
}

/// Insert `count` articles, alternating "even"/"odd" bodies.
pub async fn seed_articles(repo: &ArticleStore, count: usize) -> Vec<article::Model> {
    let mut models = Vec::with_capacity(count);
    for index in 0..count {
        let body = if index % 2 == 0 { "even" } else { "odd" };
        let outcome = repo
            .create(create_article(&format!("article-{index}"), body))
            .await
            .expect("create article");
        models.push(outcome.ok().expect("created article"));
    }
    models
}
