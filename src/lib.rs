mod driver;
mod error;
mod gui;
pub mod input;
mod seed;
pub mod sparse;
mod utils;

pub use driver::{Driver, Status, Summary};
pub use error::InputError;
pub use gui::{cell_rect, App};
pub use seed::random_cells;
pub use sparse::{step, Cell, Generation};
pub use utils::{Config, FpsLimiter, NiceInt, Settings};
