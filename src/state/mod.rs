//! Application state module

mod app_state;
mod forms;
mod model;
mod navigator;
mod store;
mod validation;

pub use app_state::*;
pub use forms::*;
pub use model::*;
pub use navigator::*;
pub use store::*;
pub use validation::*;
