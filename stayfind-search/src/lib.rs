pub mod engine;
pub mod view;

pub use engine::{EngineConfig, SearchEngine};
pub use view::SearchView;
