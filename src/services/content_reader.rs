//! Raw content acquisition for local and remote import sources.

use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use tracing::debug;
use url::Url;

use crate::domain::{ImportError, file_name, remote_name};

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Raw text of one import source, keyed by its source-relative name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    pub filename: String,
    pub content: String,
}

/// Reads import sources as UTF-8 text.
///
/// One blocking request per remote source, no retries; a connection failure
/// aborts the resolution run.
#[derive(Debug, Clone)]
pub struct ContentReader {
    client: Client,
}

impl ContentReader {
    pub fn new() -> Result<Self, ImportError> {
        let client = Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self { client })
    }

    /// Read a local file's full contents.
    pub fn read_local(&self, path: &Path) -> Result<RawDocument, ImportError> {
        debug!(path = %path.display(), "reading local import");
        let content = fs::read_to_string(path)?;
        Ok(RawDocument { filename: file_name(path), content })
    }

    /// Fetch a remote document with a single GET request.
    ///
    /// URL-embedded user-info is stripped from the request target and sent
    /// as an HTTP Basic authorization header instead.
    pub fn read_remote(&self, url: &Url) -> Result<RawDocument, ImportError> {
        let filename = remote_name(url)?;

        let mut target = url.clone();
        let credentials = if url.username().is_empty() {
            None
        } else {
            Some((url.username().to_string(), url.password().map(str::to_string)))
        };
        let _ = target.set_username("");
        let _ = target.set_password(None);

        debug!(url = %target, "fetching remote import");
        let mut request = self.client.get(target);
        if let Some((username, password)) = credentials {
            request = request.basic_auth(username, password);
        }

        let response = request.send()?.error_for_status()?;
        let content = response.text()?;
        Ok(RawDocument { filename, content })
    }
}

#[cfg(test)]
mod tests {
    use assert_fs::TempDir;
    use assert_fs::prelude::*;

    use super::*;

    #[test]
    fn reads_local_file_as_utf8() {
        let dir = TempDir::new().unwrap();
        let file = dir.child("realm.yaml");
        file.write_str("realm: exämple\n").unwrap();

        let reader = ContentReader::new().unwrap();
        let document = reader.read_local(file.path()).unwrap();
        assert_eq!(document.filename, "realm.yaml");
        assert_eq!(document.content, "realm: exämple\n");
    }

    #[test]
    fn missing_local_file_is_an_io_error() {
        let dir = TempDir::new().unwrap();
        let reader = ContentReader::new().unwrap();

        let err = reader.read_local(&dir.path().join("absent.yaml")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn fetches_remote_document_body() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/realm.json")
            .with_status(200)
            .with_body(r#"{"realm": "remote"}"#)
            .expect(1)
            .create();

        let url = Url::parse(&format!("{}/realm.json", server.url())).unwrap();
        let reader = ContentReader::new().unwrap();
        let document = reader.read_remote(&url).unwrap();

        assert_eq!(document.filename, "realm.json");
        assert_eq!(document.content, r#"{"realm": "remote"}"#);
        mock.assert();
    }

    #[test]
    fn url_user_info_becomes_basic_auth_header() {
        let mut server = mockito::Server::new();
        // base64("user:pass")
        let mock = server
            .mock("GET", "/realm.json")
            .match_header("authorization", "Basic dXNlcjpwYXNz")
            .with_status(200)
            .with_body(r#"{"realm": "secured"}"#)
            .expect(1)
            .create();

        let mut url = Url::parse(&format!("{}/realm.json", server.url())).unwrap();
        url.set_username("user").unwrap();
        url.set_password(Some("pass")).unwrap();

        let reader = ContentReader::new().unwrap();
        let document = reader.read_remote(&url).unwrap();
        assert_eq!(document.content, r#"{"realm": "secured"}"#);
        mock.assert();
    }

    #[test]
    fn non_success_status_is_an_error() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", "/realm.json").with_status(404).expect(1).create();

        let url = Url::parse(&format!("{}/realm.json", server.url())).unwrap();
        let reader = ContentReader::new().unwrap();

        let err = reader.read_remote(&url).unwrap_err();
        assert!(matches!(err, ImportError::Http(_)));
        mock.assert();
    }
}
