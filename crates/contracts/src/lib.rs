pub mod flow;
pub mod shared;
