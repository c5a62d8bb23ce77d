pub mod digits;
pub mod etl;
pub mod extract;
pub mod phone;
pub mod pipeline;
pub mod processor;

pub use crate::domain::model::{Table, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
