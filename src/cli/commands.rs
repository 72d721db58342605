pub mod inspect_dataset;
pub mod serve;

pub use inspect_dataset::inspect_dataset;
pub use serve::serve;
