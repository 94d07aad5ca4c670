use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path without touching the filesystem.
///
/// `.` components are dropped, `name/..` pairs cancel, `..` directly after
/// the root is discarded, and an empty result becomes `.`. So `./a.log`
/// becomes `a.log` and `./testdata/dir2/../dir.log` becomes `testdata/dir.log`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_path() {
        let cases = [
            ("./a.log", "a.log"),
            ("./testdata/dir.log", "testdata/dir.log"),
            ("testdata/./dir2/script.sh", "testdata/dir2/script.sh"),
            ("testdata/dir2/../dir.log", "testdata/dir.log"),
            ("../up/a.log", "../up/a.log"),
            ("a/../../b", "../b"),
            ("/../etc/x", "/etc/x"),
            ("testdata//dir.log", "testdata/dir.log"),
            (".", "."),
            ("./", "."),
            ("", "."),
            ("a/..", "."),
            ("/tmp/root/a.log", "/tmp/root/a.log"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                clean_path(Path::new(input)),
                PathBuf::from(expected),
                "input: {input:?}"
            );
        }
    }
}
