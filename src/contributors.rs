// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Contributor listing and pagination.
///
/// Pages through a repository's contributor listing until the first empty
/// page and accumulates every entry in API order.
use std::future::Future;

use serde::Deserialize;
use tracing::{debug, info};

use crate::{config::RepositoryRef, error::Error};

/// Number of entries requested per page.
pub const PER_PAGE: u32 = 100;

/// Single entry of the contributor listing.
///
/// Only the fields needed for rendering are kept; the rest of the API
/// payload is ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize,)]
pub struct Contributor
{
    pub login:      String,
    pub avatar_url: String,
}

impl std::fmt::Display for Contributor
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        write!(f, "{} ({})", self.login, self.avatar_url)
    }
}

/// Insertion-ordered contributors accumulated across pages.
///
/// No de-duplication is performed: the listing is unique per repository.
#[derive(Debug, Clone, Default, PartialEq, Eq,)]
pub struct ContributorCollection
{
    entries: Vec<Contributor,>,
}

impl ContributorCollection
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Appends one page of entries, preserving their order.
    pub fn extend_page(&mut self, page: Vec<Contributor,>,)
    {
        self.entries.extend(page,);
    }

    pub fn len(&self,) -> usize
    {
        self.entries.len()
    }

    pub fn is_empty(&self,) -> bool
    {
        self.entries.is_empty()
    }

    pub fn iter(&self,) -> std::slice::Iter<'_, Contributor,>
    {
        self.entries.iter()
    }

    pub fn as_slice(&self,) -> &[Contributor]
    {
        &self.entries
    }
}

impl FromIterator<Contributor,> for ContributorCollection
{
    fn from_iter<I: IntoIterator<Item = Contributor,>,>(iter: I,) -> Self
    {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a,> IntoIterator for &'a ContributorCollection
{
    type IntoIter = std::slice::Iter<'a, Contributor,>;
    type Item = &'a Contributor;

    fn into_iter(self,) -> Self::IntoIter
    {
        self.entries.iter()
    }
}

/// One fetched batch of the listing.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct Page
{
    /// 1-based page number.
    pub number:       u32,
    pub contributors: Vec<Contributor,>,
}

/// Source of contributor listing pages.
///
/// Implementations return the entries of page `page` (1-based, [`PER_PAGE`]
/// entries at most) or an error for any non-success response. An empty
/// vector marks the end of the listing.
pub trait PageSource
{
    fn fetch_page(
        &self,
        repository: &RepositoryRef,
        page: u32,
    ) -> impl Future<Output = Result<Vec<Contributor,>, Error,>,> + Send;
}

/// Lazy paginator over a [`PageSource`].
///
/// Yields pages starting at 1 until the first empty page. Once the listing
/// ends or a request fails the paginator is exhausted and issues no further
/// requests; it cannot be restarted.
#[derive(Debug,)]
pub struct ContributorPages<'a, S,>
{
    source:     &'a S,
    repository: &'a RepositoryRef,
    next:       u32,
    requests:   u32,
    exhausted:  bool,
}

impl<'a, S: PageSource,> ContributorPages<'a, S,>
{
    pub fn new(source: &'a S, repository: &'a RepositoryRef,) -> Self
    {
        Self {
            source,
            repository,
            next: 1,
            requests: 0,
            exhausted: false,
        }
    }

    /// Fetches the next page.
    ///
    /// Returns `Ok(None)` once an empty page has been seen.
    ///
    /// # Errors
    ///
    /// Propagates the source error unchanged; the paginator is exhausted
    /// afterwards.
    pub async fn next_page(&mut self,) -> Result<Option<Page,>, Error,>
    {
        if self.exhausted {
            return Ok(None,);
        }

        let number = self.next;
        self.requests += 1;
        debug!("Requesting contributors page {} for {}", number, self.repository);

        match self.source.fetch_page(self.repository, number,).await {
            Ok(contributors,) if contributors.is_empty() => {
                self.exhausted = true;
                Ok(None,)
            }
            Ok(contributors,) => {
                self.next += 1;
                Ok(Some(Page {
                    number,
                    contributors,
                },),)
            }
            Err(error,) => {
                self.exhausted = true;
                Err(error,)
            }
        }
    }

    /// Number of requests issued so far, including the terminating one.
    pub fn requests(&self,) -> u32
    {
        self.requests
    }

    pub fn is_exhausted(&self,) -> bool
    {
        self.exhausted
    }

    /// Drains the paginator into a collection.
    ///
    /// `observe` is called after each non-empty page with the page and the
    /// running total.
    ///
    /// # Errors
    ///
    /// Fails fast on the first source error; no partial collection is
    /// returned.
    pub async fn collect_with<F,>(&mut self, mut observe: F,) -> Result<ContributorCollection, Error,>
    where
        F: FnMut(&Page, usize,),
    {
        let mut collection = ContributorCollection::new();

        while let Some(page,) = self.next_page().await? {
            observe(&page, collection.len() + page.contributors.len(),);
            collection.extend_page(page.contributors,);
        }

        Ok(collection,)
    }
}

/// Fetches every contributor of `repository` in API order.
///
/// # Arguments
///
/// * `source` - Page source, typically an authenticated [`crate::GitHubClient`]
/// * `repository` - Repository whose listing is paged
///
/// # Errors
///
/// Returns the first error reported by `source`, e.g.
/// [`Error::Upstream`] for a non-success response.
///
/// # Example
///
/// ```no_run
/// use contrib_feed::{ApiSettings, GitHubClient, RepositoryRef, fetch_all_contributors};
///
/// # async fn example() -> Result<(), contrib_feed::Error> {
/// let client = GitHubClient::new(&ApiSettings::default(), "ghp_token",)?;
/// let repository = RepositoryRef::new("octocat", "hello-world",)?;
/// let contributors = fetch_all_contributors(&client, &repository,).await?;
/// for contributor in &contributors {
///     println!("{}", contributor);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn fetch_all_contributors<S: PageSource,>(
    source: &S,
    repository: &RepositoryRef,
) -> Result<ContributorCollection, Error,>
{
    let mut pages = ContributorPages::new(source, repository,);
    let collection = pages.collect_with(|_, _| {},).await?;

    info!(
        "Fetched {} contributors for {} in {} requests",
        collection.len(),
        repository,
        pages.requests()
    );

    Ok(collection,)
}
