//! Wheel artifact handling: parsing distributable filenames, scraping a
//! wheel index page, reading the torch/torchvision compatibility matrix, and
//! matching artifacts against user criteria.

pub mod filename;
pub mod index;
pub mod matcher;
pub mod matrix;
