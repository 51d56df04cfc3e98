mod app;
mod draw;

pub use app::App;
pub use draw::cell_rect;
