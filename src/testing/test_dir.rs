// Copyright 2023-5 Seth Pendergrass. See LICENSE.

//! Helper for setting up test libraries on disk.

use std::{
  env, fs,
  path::{Path, PathBuf},
  sync::LazyLock,
};

use crate::Config;

static TEST_ROOT: LazyLock<PathBuf> =
  LazyLock::new(|| env::temp_dir().join(format!("{}_tests", env!("CARGO_PKG_NAME"))));

/// Helper for creating library directories for tests needing actual files.
pub struct TestDir {
  root: PathBuf,
}

impl TestDir {
  /// Creates a new directory under `TEST_ROOT`, containing `files`.
  /// Note: Prefer using `test_dir!()` macro.
  pub fn new(test_path: PathBuf, files: Vec<(&'static str, String)>) -> Self {
    let root_rel = TEST_ROOT.join(test_path);
    if root_rel.exists() {
      fs::remove_dir_all(&root_rel).unwrap();
    }
    fs::create_dir_all(&root_rel).unwrap();

    let root = root_rel.canonicalize().unwrap();

    for (file, contents) in files {
      let full_path = root.join(file);
      assert!(!full_path.exists(), "File already exists: {full_path:?}");
      fs::create_dir_all(full_path.parent().unwrap()).unwrap();
      fs::write(full_path, contents).unwrap();
    }

    Self { root }
  }

  /// A `Config` pointing at this directory as the library root.
  pub fn config(&self) -> Config {
    Config::new(self.root.clone())
  }

  pub fn get_path(&self, file: impl AsRef<Path>) -> PathBuf {
    self.root.join(file)
  }

  pub fn root(&self) -> &Path {
    &self.root
  }
}

#[macro_export]
macro_rules! test_path {
  () => {{
    // HACK: Get module hierarchy for caller.
    let mut function = $crate::testing::type_of(|| ()).rsplit("::");
    // 0th element is `{closure}`.
    let case = function.nth(1).unwrap();
    let suite = function.next().unwrap();
    let module = function.next().unwrap();

    std::path::PathBuf::from(format!("{module}/{suite}/{case}"))
  }};
}

#[macro_export]
macro_rules! test_dir {
  ($($file:literal: $contents:expr),* $(,)?) => {{
    let files: Vec<(&'static str, String)> = vec![$(($file, $contents)),*];
    TestDir::new(test_path!(), files)
  }};
}
