mod check;
mod input;
pub mod report;


pub use check::*;
pub use input::read_input;
