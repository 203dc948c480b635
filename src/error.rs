use crate::db::dao::DaoLayerError;

pub const LIST_NOT_FOUND: &str = "Todo list not found";
pub const ITEM_NOT_FOUND: &str = "Todo item not found";
pub const LIST_CREATION_FAILED: &str = "Unable to create todo list";
pub const ITEM_CREATION_FAILED: &str = "Unable to create todo item";
pub const INVALID_PARAMS: &str = "Invalid params";
pub const INTERNAL_ERROR: &str = "Internal server error";

/// The record a failed lookup was after.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Missing {
    List,
    Item,
    Record,
}

impl Missing {
    fn for_table(table: &str) -> Self {
        match table {
            "todo_list" => Self::List,
            "todo_item" => Self::Item,
            _ => Self::Record,
        }
    }
}

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    NotFound(Missing, String),
    Internal(String),
}

impl AppError {
    pub fn invalid_params() -> Self {
        Self::BadRequest(INVALID_PARAMS.to_string())
    }

    pub fn list_not_found() -> Self {
        Self::NotFound(Missing::List, LIST_NOT_FOUND.to_string())
    }

    pub fn item_not_found() -> Self {
        Self::NotFound(Missing::Item, ITEM_NOT_FOUND.to_string())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message) | Self::NotFound(_, message) | Self::Internal(message) => {
                message.as_str()
            }
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(..))
    }

    pub fn missing(&self) -> Option<Missing> {
        match self {
            Self::NotFound(missing, _) => Some(*missing),
            _ => None,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl From<DaoLayerError> for AppError {
    fn from(err: DaoLayerError) -> Self {
        match err {
            DaoLayerError::NotFound { entity, .. } => {
                AppError::NotFound(Missing::for_table(entity), err.to_string())
            }
            DaoLayerError::Db(db_err) => {
                tracing::error!(error = %db_err, "database operation failed");
                AppError::internal(INTERNAL_ERROR)
            }
        }
    }
}
