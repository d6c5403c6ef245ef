pub mod todo;

pub use todo::{TodoDto, TodoPayload, TodoRecord};
