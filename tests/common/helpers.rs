use docharvest::{Download, DownloaderBuilder, FileKind};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use url::Url;

// Common test constants
pub const TEST_DOMAIN: &str = "https://www.example.com";
pub const TEST_USER_AGENT: &str = "docharvest-test-agent";
pub const PDF_BYTES: &[u8] = b"%PDF-1.4\n1 0 obj\n<<>>\nendobj\n%%EOF\n";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a temporary file with the given content
pub fn create_temp_file(dir: &Path, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).expect("Failed to write temporary file");
    file_path
}

/// Asserts that a file exists at the given path
pub fn assert_file_exists(path: &Path) {
    assert!(path.exists(), "File should exist at path: {:?}", path);
}

/// Asserts that nothing exists at the given path
pub fn assert_file_missing(path: &Path) {
    assert!(!path.exists(), "File should not exist at path: {:?}", path);
}

/// Asserts that a file holds exactly `expected`
pub fn assert_file_content(path: &Path, expected: &[u8]) {
    let content = fs::read(path).expect("Failed to read file");
    assert_eq!(content, expected, "File content mismatch at path: {:?}", path);
}

/// Number of entries in a directory
pub fn count_entries(dir: &Path) -> usize {
    fs::read_dir(dir).expect("Failed to read directory").count()
}

// === Download Creation Helpers ===

/// Creates a PDF download for `url`
pub fn create_pdf_download(url: &str) -> Download {
    Download::parse(url, FileKind::Pdf).expect("Failed to create download")
}

// === HTTP Configuration Helpers ===

/// Creates test headers with common user agent
pub fn create_test_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(TEST_USER_AGENT));
    headers
}

/// Creates test headers with custom user agent
pub fn create_test_headers_with_agent(agent: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_str(agent).expect("Invalid header value"));
    headers
}

/// Bypass any proxy configured in the environment.
pub fn direct_proxy() -> reqwest::Proxy {
    reqwest::Proxy::custom(|_| None::<Url>)
}

// === Downloader Builder Helpers ===

/// Downloader writing into `dir`, without progress bars, talking to localhost directly
pub fn create_test_downloader_builder(dir: &Path) -> DownloaderBuilder {
    DownloaderBuilder::hidden()
        .directory(dir.to_path_buf())
        .proxy(direct_proxy())
        .headers(create_test_headers())
}

/// Address on localhost nothing listens on
pub async fn closed_port_url(path: &str) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get local address");
    drop(listener);
    format!("http://{}{}", addr, path)
}
