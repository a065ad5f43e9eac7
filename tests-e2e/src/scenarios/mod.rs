pub mod disconnect;
pub mod happy_path;
pub mod rejection;
