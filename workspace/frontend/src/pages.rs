pub mod home;
pub mod visualization;
