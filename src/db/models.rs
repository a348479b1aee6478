use crate::types::todo::TodoOut;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct DbTodo {
    pub id: i32,
    pub title: String,
    pub done: bool,
}

impl From<DbTodo> for TodoOut {
    fn from(d: DbTodo) -> Self {
        TodoOut {
            id: d.id,
            title: d.title,
            done: d.done,
        }
    }
}
