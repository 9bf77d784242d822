mod manifest_resolver;
mod materializer;

pub use manifest_resolver::ManifestResolver;
pub use materializer::Materializer;
