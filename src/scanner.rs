use anyhow::Result;
use log::warn;
use std::path::PathBuf;
use walkdir::WalkDir;

/// File scanner for traversing Go project directories.
///
/// The `GoFileScanner` recursively walks through a directory to find all Go source
/// files. It automatically skips directories that should be ignored: `vendor`
/// (vendored dependencies) and hidden directories (those starting with `.`).
///
/// # Example
///
/// ```no_run
/// use openapi_from_go::scanner::GoFileScanner;
/// use std::path::PathBuf;
///
/// let scanner = GoFileScanner::new(PathBuf::from("./my-service"));
/// let result = scanner.scan().unwrap();
/// println!("Found {} Go files", result.go_files.len());
/// ```
pub struct GoFileScanner {
    root_path: PathBuf,
}

/// Result of directory scanning operation.
pub struct ScanResult {
    /// List of paths to all discovered `.go` files
    pub go_files: Vec<PathBuf>,
    /// Warning messages for any issues encountered (e.g., inaccessible directories)
    pub warnings: Vec<String>,
}

impl GoFileScanner {
    /// Creates a new `GoFileScanner` for the specified root directory.
    pub fn new(root_path: PathBuf) -> Self {
        Self { root_path }
    }

    /// Scans the directory tree and collects all `.go` files.
    ///
    /// If any directories or files cannot be accessed, warnings are logged and added
    /// to the result, but scanning continues.
    ///
    /// # Errors
    ///
    /// Returns an error if the root directory cannot be accessed.
    pub fn scan(&self) -> Result<ScanResult> {
        let mut go_files = Vec::new();
        let mut warnings = Vec::new();

        for entry in WalkDir::new(&self.root_path).into_iter().filter_entry(|e| {
            // Don't filter the root directory itself
            if e.path() == self.root_path {
                return true;
            }

            // Skip vendored dependencies and hidden directories
            let file_name = e.file_name().to_string_lossy();
            let is_hidden = file_name.starts_with('.');
            let is_vendor = file_name == "vendor";

            !is_hidden && !is_vendor
        }) {
            match entry {
                Ok(entry) => {
                    let path = entry.path();

                    if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("go") {
                        go_files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    let warning = format!("Failed to access path: {}", e);
                    warn!("{}", warning);
                    warnings.push(warning);
                }
            }
        }

        Ok(ScanResult { go_files, warnings })
    }
}
