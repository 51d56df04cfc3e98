mod cell;
mod engine;
mod generation;

pub use cell::{Cell, NEIGHBORHOOD};
pub use engine::{candidate_cells, live_neighbor_count, neighbors_of, step};
pub use generation::Generation;
