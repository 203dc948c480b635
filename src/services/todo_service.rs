use crate::{
    db::dao::{DaoLayerError, TodoDao},
    db::entities::{todo_item, todo_list},
    error::{AppError, ITEM_CREATION_FAILED, LIST_CREATION_FAILED},
};

#[derive(Clone)]
pub struct TodoService {
    todo_dao: TodoDao,
}

impl TodoService {
    pub fn new(todo_dao: TodoDao) -> Self {
        Self { todo_dao }
    }

    pub async fn list_lists(&self) -> Result<Vec<todo_list::Model>, AppError> {
        Ok(self.todo_dao.list_lists().await?)
    }

    pub async fn list_lists_by_name(&self) -> Result<Vec<todo_list::Model>, AppError> {
        Ok(self.todo_dao.list_lists_by_name().await?)
    }

    pub async fn create_list(&self, name: &str) -> Result<todo_list::Model, AppError> {
        let list = self
            .todo_dao
            .create_list(name)
            .await
            .map_err(|err| creation_failed(err, LIST_CREATION_FAILED))?;
        tracing::info!(list_id = list.id, "created todo list");
        Ok(list)
    }

    pub async fn require_list(&self, list_id: i32) -> Result<todo_list::Model, AppError> {
        self.todo_dao
            .find_list_by_id(list_id)
            .await?
            .ok_or_else(AppError::list_not_found)
    }

    pub async fn list_with_items(
        &self,
        list_id: i32,
    ) -> Result<(todo_list::Model, Vec<todo_item::Model>), AppError> {
        let list = self.require_list(list_id).await?;
        let items = self.todo_dao.list_items(list_id).await?;
        Ok((list, items))
    }

    pub async fn rename_list(&self, list_id: i32, name: &str) -> Result<todo_list::Model, AppError> {
        let list = self
            .todo_dao
            .update_list_name(list_id, name)
            .await
            .map_err(|err| match err {
                DaoLayerError::NotFound { .. } => AppError::list_not_found(),
                other => other.into(),
            })?;
        tracing::info!(list_id, "renamed todo list");
        Ok(list)
    }

    /// Deletes the list and every item it owns; returns the deleted list id.
    pub async fn delete_list(&self, list_id: i32) -> Result<i32, AppError> {
        if !self.todo_dao.delete_list_with_items(list_id).await? {
            return Err(AppError::list_not_found());
        }
        tracing::info!(list_id, "deleted todo list");
        Ok(list_id)
    }

    pub async fn create_item(
        &self,
        list_id: i32,
        description: &str,
    ) -> Result<todo_item::Model, AppError> {
        self.require_list(list_id).await?;
        let item = self
            .todo_dao
            .create_item(list_id, description)
            .await
            .map_err(|err| creation_failed(err, ITEM_CREATION_FAILED))?;
        tracing::info!(list_id, item_id = item.id, "created todo item");
        Ok(item)
    }

    /// A missing list is reported before a missing item.
    pub async fn require_list_and_item(
        &self,
        list_id: i32,
        item_id: i32,
    ) -> Result<(todo_list::Model, todo_item::Model), AppError> {
        let list = self.require_list(list_id).await?;
        let item = self
            .todo_dao
            .find_item_by_id(list_id, item_id)
            .await?
            .ok_or_else(AppError::item_not_found)?;
        Ok((list, item))
    }

    pub async fn require_item(
        &self,
        list_id: i32,
        item_id: i32,
    ) -> Result<todo_item::Model, AppError> {
        let (_, item) = self.require_list_and_item(list_id, item_id).await?;
        Ok(item)
    }

    pub async fn update_item(
        &self,
        list_id: i32,
        item_id: i32,
        description: &str,
    ) -> Result<todo_item::Model, AppError> {
        self.require_list(list_id).await?;
        let item = self
            .todo_dao
            .update_item_description(list_id, item_id, description)
            .await?
            .ok_or_else(AppError::item_not_found)?;
        tracing::info!(list_id, item_id, "updated todo item");
        Ok(item)
    }

    pub async fn delete_item(&self, list_id: i32, item_id: i32) -> Result<i32, AppError> {
        self.require_list(list_id).await?;
        if !self.todo_dao.delete_item(list_id, item_id).await? {
            return Err(AppError::item_not_found());
        }
        tracing::info!(list_id, item_id, "deleted todo item");
        Ok(item_id)
    }
}

fn creation_failed(err: DaoLayerError, message: &'static str) -> AppError {
    tracing::error!(error = %err, "{message}");
    AppError::internal(message)
}

#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase};

    use super::TodoService;
    use crate::{
        db::dao::{DaoBase, TodoDao},
        db::entities::{todo_item, todo_list},
        error::{AppError, ITEM_NOT_FOUND, LIST_CREATION_FAILED, LIST_NOT_FOUND},
    };

    fn service(db: &sea_orm::DatabaseConnection) -> TodoService {
        TodoService::new(TodoDao::new(db))
    }

    fn list_model(id: i32, name: &str) -> todo_list::Model {
        todo_list::Model {
            id,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn require_item_reports_missing_list_first() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<todo_list::Model>::new()])
            .into_connection();

        let err = service(&db)
            .require_item(1, 1)
            .await
            .expect_err("missing list should fail");
        assert!(err.is_not_found());
        assert_eq!(err.message(), LIST_NOT_FOUND);
    }

    #[tokio::test]
    async fn require_item_reports_missing_item_under_live_list() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([[list_model(1, "Groceries")]])
            .append_query_results([Vec::<todo_item::Model>::new()])
            .into_connection();

        let err = service(&db)
            .require_item(1, 99)
            .await
            .expect_err("missing item should fail");
        assert_eq!(err.message(), ITEM_NOT_FOUND);
    }

    #[tokio::test]
    async fn create_item_requires_live_list() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<todo_list::Model>::new()])
            .into_connection();

        let err = service(&db)
            .create_item(3, "Milk")
            .await
            .expect_err("missing list should fail");
        assert_eq!(err.message(), LIST_NOT_FOUND);
    }

    #[tokio::test]
    async fn rename_list_maps_missing_row_to_list_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<todo_list::Model>::new()])
            .into_connection();

        let err = service(&db)
            .rename_list(8, "Chores")
            .await
            .expect_err("missing list should fail");
        assert_eq!(err.message(), LIST_NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_list_reports_missing_list() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<todo_list::Model>::new()])
            .into_connection();

        let err = service(&db)
            .delete_list(8)
            .await
            .expect_err("missing list should fail");
        assert_eq!(err.message(), LIST_NOT_FOUND);
    }

    #[tokio::test]
    async fn create_list_failure_uses_creation_message() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("insert failed".to_string())])
            .into_connection();

        let err = service(&db)
            .create_list("Groceries")
            .await
            .expect_err("insert should fail");
        assert!(matches!(err, AppError::Internal(_)));
        assert_eq!(err.message(), LIST_CREATION_FAILED);
    }
}
