//! `file://` URLs <-> absolute file names

use std::path::{Path, PathBuf};

use lsp_types::Url;

use crate::BridgeError;

pub fn url_to_abs_filename(url: &Url) -> Result<PathBuf, BridgeError> {
    if url.scheme() != "file" {
        return Err(BridgeError::NotAFileUrl(url.to_string()));
    }
    url.to_file_path()
        .map_err(|()| BridgeError::NotAFileUrl(url.to_string()))
}

pub fn abs_filename_to_url(path: &Path) -> Result<Url, BridgeError> {
    if !path.is_absolute() {
        return Err(BridgeError::RelativePath(path.to_path_buf()));
    }
    Url::from_file_path(path).map_err(|()| BridgeError::RelativePath(path.to_path_buf()))
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn file_url_round_trip() {
        let path = Path::new("/home/u/src/a b.go");
        let url = abs_filename_to_url(path).unwrap();
        assert_eq!(url.as_str(), "file:///home/u/src/a%20b.go");
        assert_eq!(url_to_abs_filename(&url).unwrap(), path);
    }

    #[test]
    fn rejects_other_schemes() {
        let url = Url::parse("https://example.com/a.go").unwrap();
        assert_eq!(
            url_to_abs_filename(&url),
            Err(BridgeError::NotAFileUrl("https://example.com/a.go".to_string()))
        );
    }

    #[test]
    fn rejects_relative_paths() {
        assert_eq!(
            abs_filename_to_url(Path::new("src/a.go")),
            Err(BridgeError::RelativePath(PathBuf::from("src/a.go")))
        );
    }
}
