pub mod ampersand;
pub mod articles;
pub mod chars;
pub mod dots;
