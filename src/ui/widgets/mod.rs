pub mod booking;
pub mod help;
pub mod modal;
pub mod player;
pub mod showcase;
pub mod toast;
pub mod visualizer;
