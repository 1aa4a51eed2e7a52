/// A fixed pair of locations that map onto each other ahead of the general
/// directory grid, e.g. Rails controllers and their request specs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairRule {
    pub source_dir: &'static str,
    pub source_suffix: &'static str,
    pub test_dir: &'static str,
    pub test_suffix: &'static str,
}

pub const CONTROLLER_REQUEST_SPEC: PairRule = PairRule {
    source_dir: "app/controllers/",
    source_suffix: "_controller.rb",
    test_dir: "spec/requests/",
    test_suffix: "_controller_spec.rb",
};

impl PairRule {
    pub fn is_source(&self, path: &str) -> bool {
        path.contains(self.source_dir) && path.ends_with(self.source_suffix)
    }

    pub fn is_test(&self, path: &str) -> bool {
        path.contains(self.test_dir) && path.ends_with(self.test_suffix)
    }

    pub fn test_for(&self, path: &str) -> Option<String> {
        if !self.is_source(path) {
            return None;
        }
        let candidate = path.replacen(self.source_dir, self.test_dir, 1);
        Some(candidate.replacen(self.source_suffix, self.test_suffix, 1))
    }

    pub fn source_for(&self, path: &str) -> Option<String> {
        if !self.is_test(path) {
            return None;
        }
        let candidate = path.replacen(self.test_dir, self.source_dir, 1);
        Some(candidate.replacen(self.test_suffix, self.source_suffix, 1))
    }
}
