pub mod bounds;
pub mod guides;
pub mod palette;
pub mod parser;
pub mod profile;
pub mod segments;
pub mod session;
