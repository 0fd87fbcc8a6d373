pub mod artifact;
pub mod bitmap;
pub mod config;
pub mod error;
pub mod font;
pub mod icon;
pub mod preview;
