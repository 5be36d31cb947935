pub mod panels;
pub mod pie;
pub mod scatter;
