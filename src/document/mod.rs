use crate::error::RelayError;

/// Directory of the repository that holds the site sources
pub const DOCS_ROOT: &str = "docs/";
/// Extension of every documentation source file
pub const DOC_EXTENSION: &str = ".md";

const GITHUB_HOST: &str = "github.com";
const BLOB_SEGMENT: &str = "/blob/";

/// A documentation page, identified both by its repository file path and by
/// the path it is served under on the public site.
///
/// `repo_path` always starts with [`DOCS_ROOT`] and ends with
/// [`DOC_EXTENSION`]; `display_path` contains neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReference {
    pub repo_path: String,
    pub display_path: String,
}

impl PageReference {
    /// Normalize any accepted page reference.
    ///
    /// Accepts a bare path (`slurm/tutorial`), a path rooted at the docs
    /// directory (`docs/slurm/tutorial.md`) or a GitHub file view URL
    /// (`https://github.com/<owner>/<repo>/blob/<branch>/docs/slurm/tutorial.md`).
    pub fn parse(reference: &str) -> Result<Self, RelayError> {
        let reference = reference.trim();
        if reference.is_empty() {
            return Err(RelayError::invalid_reference(reference, "Page reference is empty"));
        }

        let path = if is_url(reference) {
            path_from_github_url(reference)?
        } else {
            reference
        };

        // Empty segments come from repeated or leading slashes
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return Err(RelayError::invalid_reference(
                reference,
                "Page reference does not name a file",
            ));
        }
        if segments.iter().any(|s| is_dot_segment(s)) {
            return Err(RelayError::invalid_reference(
                reference,
                "Page reference may not contain '.' or '..' segments",
            ));
        }

        let path = segments.join("/");
        Ok(Self::from_repo_path(&path))
    }

    /// Build a reference from a repository-relative path, adding the docs
    /// root and extension when missing.
    pub fn from_repo_path(path: &str) -> Self {
        let mut repo_path = if path.starts_with(DOCS_ROOT) {
            path.to_string()
        } else {
            format!("{DOCS_ROOT}{path}")
        };
        if !repo_path.ends_with(DOC_EXTENSION) {
            repo_path.push_str(DOC_EXTENSION);
        }

        let display_path = display_path(&repo_path);
        Self {
            repo_path,
            display_path,
        }
    }
}

fn display_path(repo_path: &str) -> String {
    let path = repo_path.strip_prefix(DOCS_ROOT).unwrap_or(repo_path);
    let path = path.strip_suffix(DOC_EXTENSION).unwrap_or(path);
    path.trim_end_matches('/').to_string()
}

/// Site path for an arbitrary repository file, as returned by code search.
///
/// Unlike [`PageReference`], search hits may live outside the docs root, and
/// a `README` resolves to its directory index.
pub fn site_path(repo_path: &str) -> String {
    let path = repo_path.strip_suffix(DOC_EXTENSION).unwrap_or(repo_path);
    let path = path.strip_suffix("README").unwrap_or(path);
    let path = path.strip_prefix(DOCS_ROOT).unwrap_or(path);
    path.trim_end_matches('/').to_string()
}

fn is_url(reference: &str) -> bool {
    reference.starts_with("http://") || reference.starts_with("https://")
}

/// Extract the file path following `/blob/<branch>/` in a GitHub file URL
fn path_from_github_url(url: &str) -> Result<&str, RelayError> {
    if !url.contains(GITHUB_HOST) {
        return Err(RelayError::invalid_reference(url, "URL provided is not a GitHub URL"));
    }

    let path = url
        .split_once(BLOB_SEGMENT)
        .and_then(|(_, after)| after.split_once('/'))
        .map(|(_branch, path)| path)
        // `?plain=1` and `#L10` style suffixes are not part of the file path
        .map(|path| path.split(['?', '#']).next().unwrap_or(path))
        .filter(|path| !path.is_empty());

    path.ok_or_else(|| {
        RelayError::invalid_reference(url, "Could not extract file path from GitHub URL")
    })
}

/// `.` and `..`, including percent-encoded dots, which URL parsing resolves
fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}
