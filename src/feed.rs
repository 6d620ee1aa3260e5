// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// End-to-end contributor wall pipeline.
///
/// Runs the stages strictly in sequence: fetch every page, render the grid,
/// write the document. A failure in any stage ends the run; the output file
/// is only touched once the whole listing has been fetched.
use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::{
    config::{FeedSettings, RepositoryRef, require_token},
    contributors::{ContributorPages, PageSource},
    error::Error,
    github::GitHubClient,
    layout::GridLayout,
    output::write_output,
    render::render_grid,
};

/// Summary of a successful run.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct FeedReport
{
    /// Location of the written document.
    pub output:       PathBuf,
    /// Number of contributors rendered.
    pub contributors: usize,
    /// Listing requests issued, including the terminating empty page.
    pub requests:     u32,
    pub layout:       GridLayout,
}

impl std::fmt::Display for FeedReport
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        write!(f, "Wrote {} with {} avatars", self.output.display(), self.contributors)
    }
}

/// Validates the credential, connects to the API and builds the wall.
///
/// The token is checked before the client exists, so a missing credential
/// never produces a request.
///
/// # Errors
///
/// Returns [`Error::Configuration`] for a missing token and propagates every
/// error of [`build_feed`].
///
/// # Example
///
/// ```no_run
/// use contrib_feed::{FeedConfig, FeedSettings, run_feed};
///
/// # async fn example() -> Result<(), contrib_feed::Error> {
/// let settings = FeedSettings::resolve(FeedConfig {
///     owner: Some("octocat".to_owned(),),
///     repository: Some("hello-world".to_owned(),),
///     ..FeedConfig::default()
/// },)?;
/// let token = std::env::var("GH_TOKEN",).ok();
/// let report = run_feed(&settings, token.as_deref(),).await?;
/// println!("{report}");
/// # Ok(())
/// # }
/// ```
pub async fn run_feed(settings: &FeedSettings, token: Option<&str,>,) -> Result<FeedReport, Error,>
{
    let token = require_token(token,)?;
    let client = GitHubClient::new(&settings.api, token,)?;
    build_feed(&client, &settings.repository, &settings.output,).await
}

/// Fetches, renders and writes the contributor wall for `repository`.
///
/// # Errors
///
/// Propagates the first fetch error (nothing is written in that case) and
/// returns [`Error::Io`] when the document cannot be written.
pub async fn build_feed<S: PageSource,>(
    source: &S,
    repository: &RepositoryRef,
    output: &Path,
) -> Result<FeedReport, Error,>
{
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}",)
            .unwrap_or_else(|_| ProgressStyle::default_spinner(),),
    );
    pb.set_message(format!("Fetching contributors for {repository}..."),);

    let mut pages = ContributorPages::new(source, repository,);
    let fetched = pages
        .collect_with(|page, total| {
            pb.set_message(format!("Fetched page {} ({total} contributors so far)...", page.number),);
        },)
        .await;

    let collection = match fetched {
        Ok(collection,) => collection,
        Err(error,) => {
            pb.abandon_with_message(format!("Fetching contributors for {repository} failed"),);
            warn!("Aborting after {} requests: {}", pages.requests(), error);
            return Err(error,);
        }
    };

    pb.set_message(format!("Rendering {} avatars...", collection.len()),);
    let layout = GridLayout::for_count(collection.len(),);
    let document = render_grid(&collection,);

    pb.set_message(format!("Writing {}...", output.display()),);
    let written = write_output(&document, output,);
    pb.finish_and_clear();
    written?;

    let report = FeedReport {
        output: output.to_path_buf(),
        contributors: collection.len(),
        requests: pages.requests(),
        layout,
    };
    info!("{} ({} rows, {} requests)", report, layout.rows, report.requests);

    Ok(report,)
}
