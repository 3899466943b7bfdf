// src/discovery/content_reader.rs

use super::entry_processor::{relative_path_string, Candidate, EntryKind};
use crate::core_types::{FileContent, FileRecord};
use crate::filtering::{decode_text, Filters};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Reads one candidate into a [`FileRecord`].
///
/// Read failures become [`FileContent::Skipped`] records instead of errors.
/// A symbolic link is read only if it resolves to a file inside
/// `canonical_root` that is not pinned by the ignore set (the `.git`
/// directory); links to directories are never followed and yield `None`.
pub(super) fn read_candidate(
    candidate: &Candidate,
    canonical_root: &Path,
    filters: &Filters,
) -> Option<FileRecord> {
    if candidate.kind == EntryKind::Symlink {
        match check_symlink(&candidate.absolute_path, canonical_root, filters) {
            LinkTarget::File => {}
            LinkTarget::Directory => {
                debug!("Not following directory link: {}", candidate.relative_path);
                return None;
            }
            LinkTarget::Rejected(reason) => {
                debug!("Skipping link {}: {}", candidate.relative_path, reason);
                return Some(skipped(candidate, 0, reason));
            }
        }
    }

    match fs::read(&candidate.absolute_path) {
        Ok(bytes) => {
            let size = bytes.len() as u64;
            let content = match decode_text(bytes) {
                Some(text) => FileContent::Text(text),
                None => {
                    debug!("Binary file detected: {}", candidate.relative_path);
                    FileContent::Binary
                }
            };
            Some(FileRecord {
                path: candidate.relative_path.clone(),
                size,
                content,
            })
        }
        Err(e) => {
            warn!("Could not read '{}': {}", candidate.relative_path, e);
            let size = fs::metadata(&candidate.absolute_path)
                .map(|md| md.len())
                .unwrap_or(0);
            Some(skipped(candidate, size, e.to_string()))
        }
    }
}

enum LinkTarget {
    File,
    Directory,
    Rejected(String),
}

fn check_symlink(link: &Path, canonical_root: &Path, filters: &Filters) -> LinkTarget {
    let target = match fs::canonicalize(link) {
        Ok(target) => target,
        Err(e) => return LinkTarget::Rejected(format!("broken symbolic link: {}", e)),
    };
    if !target.starts_with(canonical_root) {
        return LinkTarget::Rejected("symbolic link points outside the repository".to_string());
    }
    let is_dir = target.is_dir();
    let Some(relative_target) = relative_path_string(canonical_root, &target) else {
        return LinkTarget::Rejected("symbolic link target is not valid UTF-8".to_string());
    };
    if filters.ignore.is_pinned(&relative_target, is_dir) {
        return LinkTarget::Rejected(
            "symbolic link points into version-control metadata".to_string(),
        );
    }
    if is_dir {
        LinkTarget::Directory
    } else {
        LinkTarget::File
    }
}

fn skipped(candidate: &Candidate, size: u64, reason: String) -> FileRecord {
    FileRecord {
        path: candidate.relative_path.clone(),
        size,
        content: FileContent::Skipped { reason },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn no_filters() -> Filters {
        Filters::default()
    }

    fn candidate(root: &Path, rel: &str, kind: EntryKind) -> Candidate {
        Candidate {
            absolute_path: root.join(rel),
            relative_path: rel.to_string(),
            kind,
        }
    }

    #[test]
    fn test_reads_text_and_binary() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        let root = temp.path().canonicalize()?;
        fs::write(root.join("a.txt"), "hello\n")?;
        fs::write(root.join("b.bin"), b"\0\x01\x02")?;

        let text = read_candidate(
            &candidate(&root, "a.txt", EntryKind::File),
            &root,
            &no_filters(),
        )
        .ok_or("no record")?;
        assert_eq!(text.content, FileContent::Text("hello\n".to_string()));
        assert_eq!(text.size, 6);

        let binary = read_candidate(
            &candidate(&root, "b.bin", EntryKind::File),
            &root,
            &no_filters(),
        )
        .ok_or("no record")?;
        assert!(binary.is_binary());
        assert_eq!(binary.size, 3);
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_missing_file_is_skipped_not_fatal() -> Result<(), Box<dyn std::error::Error>> {
        let temp = tempdir()?;
        let root = temp.path().canonicalize()?;
        let record = read_candidate(
            &candidate(&root, "gone.txt", EntryKind::File),
            &root,
            &no_filters(),
        )
        .ok_or("no record")?;
        assert!(record.skip_reason().is_some());
        temp.close()?;
        Ok(())
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinks() -> Result<(), Box<dyn std::error::Error>> {
        use std::os::unix::fs::symlink;

        let temp = tempdir()?;
        let outside = tempdir()?;
        let root = temp.path().canonicalize()?;
        fs::write(root.join("real.txt"), "inside")?;
        fs::create_dir(root.join("dir"))?;
        fs::write(outside.path().join("secret.txt"), "outside")?;

        symlink(root.join("real.txt"), root.join("inside_link"))?;
        symlink(outside.path().join("secret.txt"), root.join("outside_link"))?;
        symlink(root.join("missing"), root.join("broken_link"))?;
        symlink(root.join("dir"), root.join("dir_link"))?;

        let inside = read_candidate(
            &candidate(&root, "inside_link", EntryKind::Symlink),
            &root,
            &no_filters(),
        )
        .ok_or("no record")?;
        assert_eq!(inside.content.as_text(), Some("inside"));

        let escaped = read_candidate(
            &candidate(&root, "outside_link", EntryKind::Symlink),
            &root,
            &no_filters(),
        )
        .ok_or("no record")?;
        assert!(escaped
            .skip_reason()
            .is_some_and(|r| r.contains("outside the repository")));

        let broken = read_candidate(
            &candidate(&root, "broken_link", EntryKind::Symlink),
            &root,
            &no_filters(),
        )
        .ok_or("no record")?;
        assert!(broken
            .skip_reason()
            .is_some_and(|r| r.contains("broken symbolic link")));

        assert!(
            read_candidate(&candidate(&root, "dir_link", EntryKind::Symlink), &root, &no_filters())
                .is_none()
        );

        temp.close()?;
        outside.close()?;
        Ok(())
    }

    #[test]
    #[cfg(unix)]
    fn test_symlink_into_vcs_metadata_is_rejected() -> Result<(), Box<dyn std::error::Error>> {
        use crate::filtering::build_ignore_set;
        use std::os::unix::fs::symlink;

        let temp = tempdir()?;
        let root = temp.path().canonicalize()?;
        fs::create_dir(root.join(".git"))?;
        fs::write(root.join(".git/config"), "url=https://token@host")?;
        symlink(root.join(".git/config"), root.join("cfg"))?;
        let filters = Filters {
            ignore: build_ignore_set(&root, None, false)?,
            ..Filters::default()
        };

        let record = read_candidate(&candidate(&root, "cfg", EntryKind::Symlink), &root, &filters)
            .ok_or("no record")?;
        assert!(record
            .skip_reason()
            .is_some_and(|r| r.contains("version-control metadata")));
        assert_eq!(record.content.as_text(), None);

        temp.close()?;
        Ok(())
    }
}
