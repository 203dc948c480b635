#[allow(unused_imports)]
pub mod prelude {
    pub use super::todo_item::Entity as TodoItem;
    pub use super::todo_list::Entity as TodoList;
}

pub mod todo_item;
pub mod todo_list;
