// Released under MIT License.
// Copyright (c) 2026 mdshot_rs developers

//! Resolution of input trajectory paths to frame series.

use std::path::{Path, PathBuf};

use crate::errors::ResolveInputError;

/// Path to the input trajectory. May contain one `*` wildcard in the file name
/// component, standing for the numeric frame index of a like-named file series.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputPath(Box<Path>);

impl InputPath {
    /// Create a new `InputPath` structure. The path is not checked until
    /// [`InputPath::resolve`] is called.
    pub fn new(path: impl AsRef<Path>) -> Self {
        InputPath(Box::from(path.as_ref()))
    }

    /// Get the raw path of the input.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.0
    }

    /// Check whether the path contains a wildcard.
    #[inline]
    pub fn has_wildcard(&self) -> bool {
        self.0.to_string_lossy().contains('*')
    }

    /// Resolve the path on the filesystem into an ordered series of frame files.
    ///
    /// An exact path resolves to a single-file series if the file exists.
    /// A path whose file name contains exactly one `*` resolves to every file
    /// where the `*` stands for a run of ASCII digits; the matched files are
    /// ordered by the numeric value the wildcard matched, not lexically.
    ///
    /// ## Returns
    /// `FrameSeries` with at least one file, or `ResolveInputError` if the path
    /// does not exist, the pattern matches nothing, or the pattern is malformed.
    ///
    /// ## Example
    /// ```no_run
    /// # use mdshot_rs::prelude::*;
    /// #
    /// // matches e.g. `model/friction_0.xyz`, `model/friction_1.xyz`, ...
    /// let series = InputPath::new("model/friction_*.xyz").resolve().unwrap();
    /// println!("found {} frames", series.n_files());
    /// ```
    pub fn resolve(&self) -> Result<FrameSeries, ResolveInputError> {
        let raw = self.0.to_string_lossy();

        match raw.matches('*').count() {
            0 => {
                if self.0.exists() {
                    Ok(FrameSeries {
                        files: vec![self.0.to_path_buf()],
                    })
                } else {
                    Err(ResolveInputError::FileNotFound(self.0.clone()))
                }
            }
            1 => self.resolve_wildcard(),
            _ => Err(ResolveInputError::MultipleWildcards(self.0.clone())),
        }
    }

    /// Expand a single-wildcard pattern into a numerically ordered frame series.
    fn resolve_wildcard(&self) -> Result<FrameSeries, ResolveInputError> {
        let file_name = match self.0.file_name().and_then(|name| name.to_str()) {
            Some(name) if name.contains('*') => name,
            Some(_) | None => {
                return Err(ResolveInputError::WildcardOutsideFileName(self.0.clone()))
            }
        };

        // safety of the unwrap is guaranteed by the check above
        let (prefix, suffix) = file_name.split_once('*').unwrap();

        let parent = match self.0.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            Some(_) | None => Path::new("."),
        };

        let entries = std::fs::read_dir(parent)
            .map_err(|_| ResolveInputError::PatternNotFound(self.0.clone()))?;

        let mut matched = Vec::new();
        for entry in entries.flatten() {
            let name = entry.file_name();
            let name = match name.to_str() {
                Some(name) => name,
                None => continue,
            };

            if let Some(frame) = match_frame_number(name, prefix, suffix) {
                matched.push((frame, parent.join(name)));
            }
        }

        if matched.is_empty() {
            return Err(ResolveInputError::PatternNotFound(self.0.clone()));
        }

        matched.sort_by_key(|(frame, _)| *frame);

        Ok(FrameSeries {
            files: matched.into_iter().map(|(_, path)| path).collect(),
        })
    }
}

/// Check whether `name` matches `prefix*suffix` with the wildcard standing for
/// a non-empty run of ASCII digits. Returns the numeric value of the run.
fn match_frame_number(name: &str, prefix: &str, suffix: &str) -> Option<u64> {
    let middle = name.strip_prefix(prefix)?.strip_suffix(suffix)?;

    if middle.is_empty() || !middle.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    middle.parse().ok()
}

/// Ordered series of frame files resolved from an `InputPath`.
/// Guaranteed to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSeries {
    files: Vec<PathBuf>,
}

impl FrameSeries {
    /// Get the number of files in the series.
    #[inline]
    pub fn n_files(&self) -> usize {
        self.files.len()
    }

    /// Get the files of the series, ordered by frame number.
    #[inline]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }
}

/******************************/
/*         UNIT TESTS         */
/******************************/

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    fn series_dir(names: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for name in names {
            File::create(dir.path().join(name)).unwrap();
        }
        dir
    }

    #[test]
    fn resolve_exact_existing() {
        let dir = series_dir(&["friction_0.xyz"]);
        let path = dir.path().join("friction_0.xyz");

        let series = InputPath::new(&path).resolve().unwrap();

        assert_eq!(series.n_files(), 1);
        assert_eq!(series.files(), &[path]);
    }

    #[test]
    fn resolve_exact_missing() {
        let dir = series_dir(&[]);
        let path = dir.path().join("nonexistent.xyz");

        assert_eq!(
            InputPath::new(&path).resolve(),
            Err(ResolveInputError::FileNotFound(Box::from(path.as_path())))
        );
    }

    #[test]
    fn resolve_wildcard_numeric_order() {
        let dir = series_dir(&[
            "friction_2.xyz",
            "friction_10.xyz",
            "friction_1.xyz",
            "friction_0.xyz",
        ]);
        let pattern = dir.path().join("friction_*.xyz");

        let series = InputPath::new(&pattern).resolve().unwrap();

        let expected: Vec<_> = ["friction_0.xyz", "friction_1.xyz", "friction_2.xyz", "friction_10.xyz"]
            .iter()
            .map(|name| dir.path().join(name))
            .collect();

        assert_eq!(series.n_files(), 4);
        assert_eq!(series.files(), expected.as_slice());
    }

    #[test]
    fn resolve_wildcard_ignores_nonmatching() {
        let dir = series_dir(&[
            "friction_3.xyz",
            "friction_a.xyz",
            "friction_.xyz",
            "friction_3.gro",
            "other_3.xyz",
        ]);
        let pattern = dir.path().join("friction_*.xyz");

        let series = InputPath::new(&pattern).resolve().unwrap();

        assert_eq!(series.n_files(), 1);
        assert_eq!(series.files(), &[dir.path().join("friction_3.xyz")]);
    }

    #[test]
    fn resolve_wildcard_no_match() {
        let dir = series_dir(&["deform_1.xyz"]);
        let pattern = dir.path().join("friction_*.xyz");

        assert_eq!(
            InputPath::new(&pattern).resolve(),
            Err(ResolveInputError::PatternNotFound(Box::from(
                pattern.as_path()
            )))
        );
    }

    #[test]
    fn resolve_wildcard_missing_directory() {
        let pattern = Path::new("this_directory_does_not_exist/friction_*.xyz");

        assert_eq!(
            InputPath::new(pattern).resolve(),
            Err(ResolveInputError::PatternNotFound(Box::from(pattern)))
        );
    }

    #[test]
    fn resolve_multiple_wildcards() {
        let pattern = Path::new("friction_*_*.xyz");

        assert_eq!(
            InputPath::new(pattern).resolve(),
            Err(ResolveInputError::MultipleWildcards(Box::from(pattern)))
        );
    }

    #[test]
    fn resolve_wildcard_in_directory() {
        let pattern = Path::new("model_*/friction_1.xyz");

        assert_eq!(
            InputPath::new(pattern).resolve(),
            Err(ResolveInputError::WildcardOutsideFileName(Box::from(
                pattern
            )))
        );
    }

    #[test]
    fn has_wildcard() {
        assert!(InputPath::new("friction_*.xyz").has_wildcard());
        assert!(!InputPath::new("friction_1.xyz").has_wildcard());
    }

    #[test]
    fn match_frame_number_basic() {
        assert_eq!(match_frame_number("friction_7.xyz", "friction_", ".xyz"), Some(7));
        assert_eq!(
            match_frame_number("friction_120.xyz", "friction_", ".xyz"),
            Some(120)
        );
        assert_eq!(match_frame_number("friction_x.xyz", "friction_", ".xyz"), None);
        assert_eq!(match_frame_number("friction_.xyz", "friction_", ".xyz"), None);
        assert_eq!(match_frame_number("friction_7.gro", "friction_", ".xyz"), None);
    }
}
