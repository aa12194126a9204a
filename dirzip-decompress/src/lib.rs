// dirzip-decompress/src/lib.rs

pub mod unpacker;

pub use unpacker::unzip_archive;
