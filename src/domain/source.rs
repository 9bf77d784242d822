/// Text extracted from a reference document.
///
/// Only its size is observable. Scaffold content never depends on it.
#[derive(Debug, Clone)]
pub struct SourceText(String);

impl SourceText {
    pub fn new(text: String) -> Self {
        Self(text)
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}
