// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// GitHub REST client for the contributor listing.
///
/// Wraps an authenticated reqwest client and exposes it as a [`PageSource`].
/// The configured label is the only `User-Agent` sent. Non-success responses
/// are surfaced with their status code and raw body; reqwest issues no
/// retries, so a failing request is never repeated.
use reqwest::{Client, header::ACCEPT};
use tracing::{debug, warn};

use crate::{
    config::{ApiSettings, RepositoryRef},
    contributors::{Contributor, PER_PAGE, PageSource},
    error::Error,
};

/// Media type requested from the REST API.
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";

/// Authenticated contributor listing client.
#[derive(Clone,)]
pub struct GitHubClient
{
    client:   Client,
    base_url: String,
    token:    String,
}

impl GitHubClient
{
    /// Builds a client sending `Authorization: Bearer <token>` and the
    /// configured `User-Agent` to `settings.base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the HTTP client cannot be
    /// initialized.
    pub fn new(settings: &ApiSettings, token: &str,) -> Result<Self, Error,>
    {
        let mut builder = Client::builder().user_agent(settings.user_agent.as_str(),);

        if let Some(timeout,) = settings.timeout {
            builder = builder.connect_timeout(timeout,).timeout(timeout,);
        }

        let client = builder.build().map_err(|e| {
            Error::configuration(format!("failed to initialize GitHub client: {e}"),)
        },)?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            token: token.to_owned(),
        },)
    }
}

impl PageSource for GitHubClient
{
    async fn fetch_page(
        &self,
        repository: &RepositoryRef,
        page: u32,
    ) -> Result<Vec<Contributor,>, Error,>
    {
        let route = contributors_route(repository, page,);
        debug!("GET {}", route);

        let response = self
            .client
            .get(format!("{}{}", self.base_url, route),)
            .bearer_auth(&self.token,)
            .header(ACCEPT, GITHUB_MEDIA_TYPE,)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Contributors page {} for {} failed with {}", page, repository, status);
            return Err(Error::Upstream {
                status: status.as_u16(),
                body,
            },);
        }

        serde_json::from_str(&body,).map_err(|source| Error::Decode {
            page,
            source,
        },)
    }
}

/// Path and query of one listing page, relative to the API base URL.
pub fn contributors_route(repository: &RepositoryRef, page: u32,) -> String
{
    format!(
        "/repos/{}/{}/contributors?per_page={PER_PAGE}&page={page}",
        repository.owner(),
        repository.repository()
    )
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn route_includes_page_size_and_number()
    {
        let repository = RepositoryRef::new("atakanbayil", "changelogR",).expect("valid repository",);
        assert_eq!(
            contributors_route(&repository, 3,),
            "/repos/atakanbayil/changelogR/contributors?per_page=100&page=3"
        );
    }

    #[test]
    fn client_builds_with_timeout()
    {
        let settings = ApiSettings {
            timeout: Some(std::time::Duration::from_secs(5,),),
            ..ApiSettings::default()
        };
        assert!(GitHubClient::new(&settings, "ghp_token",).is_ok());
    }
}
