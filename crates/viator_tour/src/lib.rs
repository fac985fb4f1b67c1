pub mod location;
pub mod matrix;
pub mod meters;
pub mod tour;
