mod artifact_template_store;
mod scaffold_filesystem;
mod source_reader;

pub use artifact_template_store::ArtifactTemplateStore;
pub use scaffold_filesystem::ScaffoldFilesystem;
pub use source_reader::SourceReader;
