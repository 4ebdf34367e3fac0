//! Base store traits following Interface Segregation Principle (ISP).
//!
//! These traits provide a generic CRUD facade over SeaORM that concrete
//! per-entity stores implement. Reads route through an overridable
//! restriction, mutations run a validation hook before staging anything,
//! and updates detect optimistic concurrency races at flush time.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, IntoActiveModel, PaginatorTrait, PrimaryKeyTrait, QueryFilter,
    QueryOrder, QuerySelect, Select, Value,
};

use crate::config::EVENT_CONCURRENCY_CONFLICT;
use crate::errors::StoreResult;
use crate::types::{Outcome, Page, RuleViolation, Search};

/// Read operations (Query) - Single Responsibility
#[async_trait]
pub trait ReadStore<E, M>: Send + Sync
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult,
{
    /// Get database connection reference
    fn db(&self) -> &DatabaseConnection;

    /// Identity column, used for ordering and direct lookups
    fn id_column(&self) -> E::Column;

    /// Row-level restriction applied to every read, to update flushes and
    /// to delete lookups. Override to scope rows per tenant/owner or to
    /// hide soft-deleted rows; every restricted operation routes through
    /// this single point.
    fn restriction(&self) -> Condition {
        Condition::all()
    }

    /// Base queryable every restricted operation goes through
    fn scoped(&self) -> Select<E> {
        E::find().filter(self.restriction())
    }

    /// Find entity by identity through the restriction. Absence is `None`,
    /// never an error.
    async fn find_by_id(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> StoreResult<Option<M>>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Into<Value> + Send,
    {
        self.scoped()
            .filter(self.id_column().eq(id))
            .one(self.db())
            .await
            .map_err(Into::into)
    }

    /// Find entity by identity ignoring the restriction
    async fn find_by_id_unscoped(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> StoreResult<Option<M>> {
        E::find_by_id(id).one(self.db()).await.map_err(Into::into)
    }

    /// True iff a row with that identity is visible through the restriction
    async fn exists(&self, id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType) -> StoreResult<bool>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Into<Value> + Send,
    {
        let matching = self
            .scoped()
            .filter(self.id_column().eq(id))
            .count(self.db())
            .await?;
        Ok(matching > 0)
    }

    /// Count rows matching the filter under the restriction
    async fn count(&self, filter: Option<Condition>) -> StoreResult<u64> {
        let mut query = self.scoped();
        if let Some(filter) = filter {
            query = query.filter(filter);
        }
        query.count(self.db()).await.map_err(Into::into)
    }

    /// Count every row in the table, restriction ignored
    async fn count_unscoped(&self) -> StoreResult<u64> {
        E::find().count(self.db()).await.map_err(Into::into)
    }

    /// Find all visible entities, newest identity first
    async fn find_all(&self) -> StoreResult<Vec<M>> {
        self.scoped()
            .order_by_desc(self.id_column())
            .all(self.db())
            .await
            .map_err(Into::into)
    }

    /// Find one page of entities matching the filter.
    ///
    /// The page is ordered by descending identity and the total is computed
    /// under the same filter and restriction, ignoring the page window, so
    /// both views are consistent absent concurrent writes.
    async fn find_paginated(
        &self,
        search: &Search,
        filter: Option<Condition>,
    ) -> StoreResult<Page<M>> {
        let mut query = self.scoped();
        if let Some(filter) = filter {
            query = query.filter(filter);
        }

        let total = query.clone().count(self.db()).await?;
        let items = query
            .order_by_desc(self.id_column())
            .offset(search.offset)
            .limit(search.page_size())
            .all(self.db())
            .await?;

        Ok(Page::new(items, total, search.clone()))
    }
}

/// Write operations (Command) - Single Responsibility
#[async_trait]
pub trait WriteStore<E, M, A, C, U>: ReadStore<E, M>
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
    C: IntoActiveModel<A> + Send + 'static,
    U: IntoActiveModel<A> + Send + 'static,
{
    /// Business-rule check run before `create` stages anything.
    ///
    /// Default passes. Override to reject inputs; a non-empty result
    /// short-circuits the call with a `Conflict` outcome. Must not have
    /// side effects beyond inspection.
    fn validate_create(&self, _input: &C) -> Vec<RuleViolation> {
        Vec::new()
    }

    /// Business-rule check run before `update` stages anything
    fn validate_update(&self, _input: &U) -> Vec<RuleViolation> {
        Vec::new()
    }

    /// Condition an update flush must match beyond row identity and the
    /// restriction.
    ///
    /// Entities carrying a version column return `version.eq(expected)`
    /// here, while their update conversion writes the incremented version;
    /// a flush that no longer matches is reported as a concurrency
    /// conflict. Default adds no guard.
    fn concurrency_guard(&self, _input: &U) -> Condition {
        Condition::all()
    }

    /// Insert a new entity.
    ///
    /// Identity is assigned by the database; the returned model carries it.
    /// Unexpected staging faults are logged and propagated, never reshaped
    /// into an outcome.
    async fn create(&self, input: C) -> StoreResult<Outcome<M>> {
        let violations = self.validate_create(&input);
        if !violations.is_empty() {
            return Ok(Outcome::Conflict(violations));
        }

        let staged = input.into_active_model();
        match staged.insert(self.db()).await {
            Ok(model) => Ok(Outcome::Ok(model)),
            Err(err) => {
                tracing::error!("Insert staging failed: {}", err);
                Err(err.into())
            }
        }
    }

    /// Overwrite an existing entity without re-reading it first.
    ///
    /// The converted input is attached by identity and flushed as-is; every
    /// converted field is assumed modified. A flush that matches no row
    /// (identity gone, restriction unmet, or version token stale) is the
    /// optimistic concurrency conflict: it is logged at warning level and
    /// returned as `Conflict`, leaving the winning writer's row intact.
    async fn update(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
        input: U,
    ) -> StoreResult<Outcome<M>>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Into<Value> + Clone + Send,
    {
        let violations = self.validate_update(&input);
        if !violations.is_empty() {
            return Ok(Outcome::Conflict(violations));
        }

        let guard = self.concurrency_guard(&input);
        let mut staged = input.into_active_model();
        staged.set(self.id_column(), id.clone().into());

        let flushed = E::update(staged)
            .filter(self.restriction())
            .filter(guard)
            .exec(self.db())
            .await;

        match flushed {
            Ok(model) => Ok(Outcome::Ok(model)),
            Err(DbErr::RecordNotUpdated) => {
                tracing::warn!(
                    event = EVENT_CONCURRENCY_CONFLICT,
                    "Update of row {:?} lost an optimistic concurrency race",
                    id
                );
                Ok(Outcome::Conflict(vec![RuleViolation::concurrency()]))
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Delete operations - Single Responsibility
#[async_trait]
pub trait DeleteStore<E, M, A>: ReadStore<E, M>
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    /// Soft-delete capability hook.
    ///
    /// Return the active model with its deleted flag set to keep the row;
    /// the default `None` removes the row outright.
    fn mark_deleted(&self, _model: M) -> Option<A> {
        None
    }

    /// Soft-delete undo hook, the inverse of [`DeleteStore::mark_deleted`]
    fn mark_restored(&self, _model: M) -> Option<A> {
        None
    }

    /// Delete the entity with the given identity.
    ///
    /// Looks the row up through the restriction first; an invisible row is
    /// `NotFound` and nothing is mutated. Soft-deletable entities keep the
    /// row with the flag set, others lose it entirely.
    async fn delete(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> StoreResult<Outcome<()>>
    where
        <E::PrimaryKey as PrimaryKeyTrait>::ValueType: Into<Value> + Clone + Send,
    {
        let Some(model) = self.find_by_id(id.clone()).await? else {
            return Ok(Outcome::NotFound);
        };

        match self.mark_deleted(model) {
            Some(tombstone) => match tombstone.update(self.db()).await {
                Ok(_) => Ok(Outcome::Ok(())),
                // Row vanished between lookup and flush
                Err(DbErr::RecordNotUpdated) => Ok(Outcome::NotFound),
                Err(err) => Err(err.into()),
            },
            None => {
                E::delete_by_id(id).exec(self.db()).await?;
                Ok(Outcome::Ok(()))
            }
        }
    }

    /// Bring a soft-deleted entity back.
    ///
    /// Soft-deleted rows are invisible through the restriction, so the
    /// lookup bypasses it. Entities without the soft-delete capability
    /// resolve to `NotFound`.
    async fn restore(
        &self,
        id: <E::PrimaryKey as PrimaryKeyTrait>::ValueType,
    ) -> StoreResult<Outcome<M>> {
        let Some(model) = self.find_by_id_unscoped(id).await? else {
            return Ok(Outcome::NotFound);
        };

        match self.mark_restored(model) {
            Some(revived) => match revived.update(self.db()).await {
                Ok(model) => Ok(Outcome::Ok(model)),
                Err(DbErr::RecordNotUpdated) => Ok(Outcome::NotFound),
                Err(err) => Err(err.into()),
            },
            None => Ok(Outcome::NotFound),
        }
    }
}

/// Full CRUD store - Combines all operations
/// Follows Open/Closed Principle: extend by implementing individual traits
pub trait CrudStore<E, M, A, C, U>: WriteStore<E, M, A, C, U> + DeleteStore<E, M, A>
where
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
    C: IntoActiveModel<A> + Send + 'static,
    U: IntoActiveModel<A> + Send + 'static,
{
}

// Auto-implement CrudStore for types implementing all traits
impl<T, E, M, A, C, U> CrudStore<E, M, A, C, U> for T
where
    T: WriteStore<E, M, A, C, U> + DeleteStore<E, M, A>,
    E: EntityTrait<Model = M>,
    M: Send + Sync + FromQueryResult + IntoActiveModel<A>,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
    C: IntoActiveModel<A> + Send + 'static,
    U: IntoActiveModel<A> + Send + 'static,
{
}
