use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::prelude::{TodoItem, TodoList};
use crate::db::entities::{todo_item, todo_list};

#[derive(Clone)]
pub struct TodoDao {
    db: DatabaseConnection,
}

impl DaoBase for TodoDao {
    type Entity = TodoList;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[derive(Clone)]
struct TodoItemDao {
    db: DatabaseConnection,
}

impl DaoBase for TodoItemDao {
    type Entity = TodoItem;

    fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TodoDao {
    fn item_dao(&self) -> TodoItemDao {
        TodoItemDao::new(&self.db)
    }

    pub async fn create_list(&self, name: &str) -> DaoResult<todo_list::Model> {
        let model = todo_list::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        };
        self.create(model).await
    }

    /// Lists in whatever order the database hands them back.
    pub async fn list_lists(&self) -> DaoResult<Vec<todo_list::Model>> {
        self.find_all(|query| query).await
    }

    pub async fn list_lists_by_name(&self) -> DaoResult<Vec<todo_list::Model>> {
        self.find_all(|query| query.order_by_asc(todo_list::Column::Name))
            .await
    }

    pub async fn find_list_by_id(&self, id: i32) -> DaoResult<Option<todo_list::Model>> {
        self.find_by_id(id).await
    }

    pub async fn update_list_name(&self, id: i32, name: &str) -> DaoResult<todo_list::Model> {
        let name = name.to_string();
        self.update(id, move |active| {
            active.name = Set(name);
        })
        .await
    }

    /// Removes the list's items and then the list inside one transaction.
    /// Returns `false` when the list does not exist.
    pub async fn delete_list_with_items(&self, id: i32) -> DaoResult<bool> {
        let txn = self.db.begin().await.map_err(DaoLayerError::Db)?;

        let list = TodoList::find_by_id(id)
            .one(&txn)
            .await
            .map_err(DaoLayerError::Db)?;
        if list.is_none() {
            txn.rollback().await.map_err(DaoLayerError::Db)?;
            return Ok(false);
        }

        let items = TodoItem::delete_many()
            .filter(todo_item::Column::ListId.eq(id))
            .exec(&txn)
            .await
            .map_err(DaoLayerError::Db)?;
        TodoList::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(DaoLayerError::Db)?;

        txn.commit().await.map_err(DaoLayerError::Db)?;
        tracing::debug!(list_id = id, items = items.rows_affected, "deleted list with items");
        Ok(true)
    }

    pub async fn create_item(&self, list_id: i32, description: &str) -> DaoResult<todo_item::Model> {
        let model = todo_item::ActiveModel {
            list_id: Set(list_id),
            description: Set(description.to_string()),
            ..Default::default()
        };
        self.item_dao().create(model).await
    }

    pub async fn list_items(&self, list_id: i32) -> DaoResult<Vec<todo_item::Model>> {
        self.item_dao()
            .find_all(|query| {
                query
                    .filter(todo_item::Column::ListId.eq(list_id))
                    .order_by_asc(todo_item::Column::Id)
            })
            .await
    }

    /// Finds an item only when it belongs to `list_id`.
    pub async fn find_item_by_id(
        &self,
        list_id: i32,
        item_id: i32,
    ) -> DaoResult<Option<todo_item::Model>> {
        TodoItem::find()
            .filter(todo_item::Column::Id.eq(item_id))
            .filter(todo_item::Column::ListId.eq(list_id))
            .one(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }

    pub async fn update_item_description(
        &self,
        list_id: i32,
        item_id: i32,
        description: &str,
    ) -> DaoResult<Option<todo_item::Model>> {
        let Some(_) = self.find_item_by_id(list_id, item_id).await? else {
            return Ok(None);
        };
        let description = description.to_string();
        let model = self
            .item_dao()
            .update(item_id, move |active| {
                active.description = Set(description);
            })
            .await?;
        Ok(Some(model))
    }

    pub async fn delete_item(&self, list_id: i32, item_id: i32) -> DaoResult<bool> {
        let Some(_) = self.find_item_by_id(list_id, item_id).await? else {
            return Ok(false);
        };
        self.item_dao().delete(item_id).await?;
        Ok(true)
    }
}
