pub mod assets;
pub mod filesystem;
pub mod source_reader;
pub mod template;
