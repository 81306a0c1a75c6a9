//! Output name resolution
//!
//! Pairs every input application with a destination. Explicit `--output`
//! values are used in order; inputs without one get a name derived from the
//! input path.

use crate::app::handler::MAIN_SCRIPTS;
use crate::error::{AppError, Result};
use std::collections::HashSet;
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// Output value that selects standard output
pub const STDOUT_SENTINEL: &str = "-";

/// Where a job's bytes go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    File(PathBuf),
    Stdout,
}

impl Destination {
    /// Parse an `--output` value
    pub fn from_arg(value: &str) -> Self {
        if value == STDOUT_SENTINEL {
            Self::Stdout
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Stdout => f.write_str("<stdout>"),
        }
    }
}

/// One input application and its destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub destination: Destination,
}

/// Default output path for `input`
///
/// Scripts get their extension replaced; directories get the extension
/// appended to their name. Paths without a final component (such as `.`)
/// map to `index.<extension>`.
pub fn default_output_path(input: &Path, extension: &str) -> PathBuf {
    let Some(name) = input.file_name() else {
        return PathBuf::from(format!("index.{extension}"));
    };

    if input.is_dir() {
        let mut file_name = name.to_os_string();
        file_name.push(".");
        file_name.push(extension);
        input.with_file_name(file_name)
    } else {
        input.with_extension(extension)
    }
}

/// Lexically normalized absolute form of `path`, used to compare paths
///
/// Relative paths are resolved against the working directory. `.` segments
/// are dropped and `..` removes the preceding segment. Symlinks are not
/// followed.
pub fn normalize_path(path: &Path) -> PathBuf {
    let absolute = match std::env::current_dir() {
        Ok(cwd) if path.is_relative() => cwd.join(path),
        _ => path.to_path_buf(),
    };

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Files an application reads when it is loaded
fn input_files(input: &Path) -> Vec<PathBuf> {
    let mut files = vec![normalize_path(input)];
    if input.is_dir() {
        files.extend(MAIN_SCRIPTS.iter().map(|name| normalize_path(&input.join(name))));
    }
    files
}

/// Build the job list for `files` and the given `--output` values
///
/// # Errors
/// - `AppError::TooManyOutputs` when there are more outputs than files
/// - `AppError::DuplicateOutput` when two jobs would write the same file
/// - `AppError::OutputOverwritesInput` when a job would write over an input
pub fn resolve_jobs<P: AsRef<Path>, S: AsRef<str>>(
    files: &[P],
    outputs: &[S],
    extension: &str,
) -> Result<Vec<Job>> {
    if outputs.len() > files.len() {
        return Err(AppError::TooManyOutputs {
            outputs: outputs.len(),
            applications: files.len(),
        });
    }

    let inputs: HashSet<PathBuf> = files
        .iter()
        .flat_map(|file| input_files(file.as_ref()))
        .collect();
    let mut seen = HashSet::new();
    let mut jobs = Vec::with_capacity(files.len());

    for (index, file) in files.iter().enumerate() {
        let input = file.as_ref().to_path_buf();
        let destination = match outputs.get(index) {
            Some(value) => Destination::from_arg(value.as_ref()),
            None => Destination::File(default_output_path(&input, extension)),
        };

        if let Destination::File(path) = &destination {
            let normalized = normalize_path(path);
            if inputs.contains(&normalized) {
                return Err(AppError::OutputOverwritesInput(path.clone()));
            }
            if !seen.insert(normalized) {
                return Err(AppError::DuplicateOutput(path.clone()));
            }
        }

        log::debug!("Resolved {} -> {}", input.display(), destination);
        jobs.push(Job { input, destination });
    }

    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_OUTPUTS: [&str; 0] = [];

    #[test]
    fn test_default_names_replace_extension() {
        let jobs = resolve_jobs(&["scatter1.toml", "sub/scatter2.json"], &NO_OUTPUTS, "png").unwrap();
        assert_eq!(
            jobs,
            vec![
                Job {
                    input: PathBuf::from("scatter1.toml"),
                    destination: Destination::File(PathBuf::from("scatter1.png")),
                },
                Job {
                    input: PathBuf::from("sub/scatter2.json"),
                    destination: Destination::File(PathBuf::from("sub/scatter2.png")),
                },
            ]
        );
    }

    #[test]
    fn test_outputs_paired_in_order() {
        let jobs = resolve_jobs(&["a.toml", "b.toml"], &["first.png", "second.png"], "png").unwrap();
        assert_eq!(jobs[0].destination, Destination::File("first.png".into()));
        assert_eq!(jobs[1].destination, Destination::File("second.png".into()));
    }

    #[test]
    fn test_fewer_outputs_than_files() {
        let jobs = resolve_jobs(&["a.toml", "b.toml"], &["first.png"], "png").unwrap();
        assert_eq!(jobs[0].destination, Destination::File("first.png".into()));
        assert_eq!(jobs[1].destination, Destination::File("b.png".into()));
    }

    #[test]
    fn test_too_many_outputs() {
        let err = resolve_jobs(&["a.toml"], &["x.png", "y.png"], "png").unwrap_err();
        assert!(matches!(
            err,
            AppError::TooManyOutputs {
                outputs: 2,
                applications: 1
            }
        ));
    }

    #[test]
    fn test_stdout_sentinel() {
        let jobs = resolve_jobs(&["a.toml", "b.toml"], &["-", "-"], "png").unwrap();
        assert!(jobs.iter().all(|j| j.destination == Destination::Stdout));
    }

    #[test]
    fn test_duplicate_outputs_rejected() {
        let err = resolve_jobs(&["plot.toml", "plot.json"], &NO_OUTPUTS, "png").unwrap_err();
        assert!(matches!(err, AppError::DuplicateOutput(ref p) if p == Path::new("plot.png")));
    }

    #[test]
    fn test_duplicates_detected_after_normalizing() {
        let err = resolve_jobs(&["a.toml", "b.toml"], &["out.png", "./out.png"], "png").unwrap_err();
        assert!(matches!(err, AppError::DuplicateOutput(ref p) if p == Path::new("./out.png")));

        let err = resolve_jobs(&["a.toml", "b.toml"], &["sub/../out.png", "out.png"], "png").unwrap_err();
        assert!(matches!(err, AppError::DuplicateOutput(_)));
    }

    #[test]
    fn test_output_naming_an_input_rejected() {
        let err = resolve_jobs(&["a.toml", "b.toml"], &["b.toml"], "png").unwrap_err();
        assert!(matches!(err, AppError::OutputOverwritesInput(ref p) if p == Path::new("b.toml")));

        let err = resolve_jobs(&["./a.toml"], &["a.toml"], "png").unwrap_err();
        assert!(matches!(err, AppError::OutputOverwritesInput(_)));
    }

    #[test]
    fn test_output_naming_a_main_script_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let app = dir.path().join("app");
        std::fs::create_dir(&app).unwrap();
        let target = app.join("main.toml").to_string_lossy().into_owned();

        let err = resolve_jobs(&[&app], &[target], "png").unwrap_err();
        assert!(matches!(err, AppError::OutputOverwritesInput(_)));
    }

    #[test]
    fn test_normalize_path() {
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(normalize_path(Path::new("./a/./b.png")), cwd.join("a/b.png"));
        assert_eq!(normalize_path(Path::new("a/../b.png")), cwd.join("b.png"));
        assert_eq!(normalize_path(Path::new("/x/y/../z")), PathBuf::from("/x/z"));
    }

    #[test]
    fn test_directory_appends_extension() {
        let dir = tempfile::tempdir().unwrap();
        let app = dir.path().join("demo.app");
        std::fs::create_dir(&app).unwrap();
        assert_eq!(default_output_path(&app, "png"), dir.path().join("demo.app.png"));
    }

    #[test]
    fn test_current_directory_maps_to_index() {
        assert_eq!(default_output_path(Path::new("."), "png"), PathBuf::from("index.png"));
        assert_eq!(default_output_path(Path::new(".."), "svg"), PathBuf::from("index.svg"));
    }
}
