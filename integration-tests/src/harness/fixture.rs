use montehist_core::sections::SectionWriter;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A results file in a private temp directory, removed on drop.
pub struct Fixture {
    _dir: TempDir,
    path: PathBuf,
}

impl Fixture {
    pub fn with_contents(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("results.txt");
        fs::write(&path, contents).expect("failed to write fixture");

        Self { _dir: dir, path }
    }

    /// Writes raw (untransformed) values through `SectionWriter`.
    pub fn with_sections(sections: &[(&str, Vec<f64>)]) -> Self {
        let mut writer = SectionWriter::new(Vec::new());
        for (label, values) in sections {
            writer
                .write_section(label, values.iter().copied())
                .expect("failed to write section");
        }
        let bytes = writer.into_inner().expect("failed to flush sections");

        Self::with_contents(&String::from_utf8(bytes).expect("fixture is not UTF-8"))
    }

    /// A checked-in file under `fixtures/`.
    pub fn bundled(name: &str) -> PathBuf {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join(name);

        assert!(path.exists(), "fixture does not exist: {:?}", path);
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
