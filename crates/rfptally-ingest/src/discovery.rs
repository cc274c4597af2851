use crate::error::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extensions recognized as proposal documents.
const PROPOSAL_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Find proposal documents under a directory, sorted for stable output.
pub fn find_proposal_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let recognized = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| PROPOSAL_EXTENSIONS.contains(&ext));
        if recognized {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}
