pub mod layout;
pub mod resources;
pub mod visualization;
