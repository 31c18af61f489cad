pub mod app;
pub mod audio;
pub mod booking;
pub mod catalog;
pub mod showcase;
pub mod ui;
pub mod visualizer;
