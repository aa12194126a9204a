// dirzip-compress/src/lib.rs

pub mod packer;

pub use packer::zip_dir;
