//! GitLab repository HTTP client.

use reqwest::Client;
use url::Url;

use crate::api::types::TreeEntry;
use crate::error::{Error, Result};

/// Maximum number of entries requested per tree listing.
///
/// Only a single page is ever fetched; folders with more entries than this
/// are truncated at the cap.
pub const PAGE_SIZE: u32 = 100;

/// GitLab authentication header name.
const TOKEN_HEADER: &str = "PRIVATE-TOKEN";

/// Client for the repository tree and raw-content endpoints.
pub struct GitLabApi {
    client: Client,
    host: Url,
    project: String,
    branch: String,
    token: Option<String>,
}

impl GitLabApi {
    /// Create a new API client.
    ///
    /// An empty token means unauthenticated access; the auth header is then
    /// omitted entirely rather than sent with an empty value.
    pub fn new(host: &str, project: &str, branch: &str, token: String) -> Result<Self> {
        let client = Client::builder().build()?;
        let host = Url::parse(host)?;

        Ok(Self {
            client,
            host,
            project: project.to_string(),
            branch: branch.to_string(),
            token: (!token.is_empty()).then_some(token),
        })
    }

    /// List the entries of a repository folder on the configured branch.
    pub async fn list_tree(&self, folder: &str) -> Result<Vec<TreeEntry>> {
        let url = self.tree_url(folder)?;
        tracing::debug!("GET {}", url);

        let response = self.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::RemoteList {
                url: url.to_string(),
                status: status.to_string(),
            });
        }

        let text = response.text().await?;
        tracing::debug!("Tree listing response: {}", text);

        let entries: Vec<TreeEntry> = serde_json::from_str(&text)?;
        Ok(entries)
    }

    /// Fetch the raw content of a repository file on the configured branch.
    ///
    /// The whole body is buffered; asset sizes are expected to stay small.
    pub async fn fetch_raw(&self, relative_path: &str) -> Result<Vec<u8>> {
        let url = self.raw_url(relative_path)?;
        tracing::debug!("GET {}", url);

        let response = self.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Fetch {
                url: url.to_string(),
                status: status.to_string(),
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Build a GET request with the auth header attached when present.
    fn get(&self, url: Url) -> reqwest::RequestBuilder {
        let mut request = self.client.get(url);
        if let Some(token) = &self.token {
            request = request.header(TOKEN_HEADER, token);
        }
        request
    }

    /// Build the tree listing URL for a folder.
    ///
    /// The project path goes in as a single percent-encoded segment.
    fn tree_url(&self, folder: &str) -> Result<Url> {
        let mut url = self.host.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("Host URL cannot be a base: {}", self.host)))?
            .pop_if_empty()
            .extend(["api", "v4", "projects"])
            .push(&self.project)
            .extend(["repository", "tree"]);
        url.query_pairs_mut()
            .append_pair("path", folder)
            .append_pair("ref", &self.branch)
            .append_pair("per_page", &PAGE_SIZE.to_string());
        Ok(url)
    }

    /// Build the raw-content URL for a repository file.
    fn raw_url(&self, relative_path: &str) -> Result<Url> {
        let mut url = self.host.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("Host URL cannot be a base: {}", self.host)))?
            .pop_if_empty()
            .extend(self.project.split('/'))
            .extend(["-", "raw"])
            .extend(self.branch.split('/'))
            .extend(relative_path.split('/'));
        Ok(url)
    }
}
