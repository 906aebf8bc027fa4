pub mod pattern;
pub mod robot;
pub mod sales;
pub mod story;
pub mod weather;
