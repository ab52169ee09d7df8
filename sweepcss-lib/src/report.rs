/// Collects best-effort diagnostics while the pipeline runs.
///
/// The transform itself never fails on malformed CSS; anything it has to
/// drop (an unterminated block, a line it cannot classify) lands here.
/// The caller decides whether the collected warnings are fatal.
#[derive(Debug, Default)]
pub struct Report {
    warnings: Vec<String>,
}

impl Report {
    pub fn new() -> Self {
        Report::default()
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// One warning per line, for embedding in an error message.
    pub fn summary(&self) -> String {
        self.warnings.join("\n")
    }
}
