use sea_orm::entity::prelude::*;

// No `on_delete` cascade: list deletion removes items explicitly, in a transaction.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "todo_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(250))")]
    pub description: String,
    #[sea_orm(indexed)]
    pub list_id: i32,
    #[sea_orm(belongs_to, from = "list_id", to = "id")]
    pub list: HasOne<super::todo_list::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
