use logrun_core::classify::{Classifier, GrammarTier};
use logrun_core::pipeline::Analysis;
use std::path::PathBuf;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

pub fn read_fixture(file: &str) -> Vec<u8> {
    let path = fixture_path(file);
    std::fs::read(&path).unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}

pub fn analyze_fixture(file: &str, tier: GrammarTier) -> Analysis {
    Analysis::run(&read_fixture(file), &Classifier::new(tier))
}
