// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Contributor wall generation for GitHub repositories.
//!
//! The library pages through a repository's contributor listing, lays the
//! avatars out on a fixed grid and writes the result as a standalone SVG
//! document. The stages are exposed individually ([`fetch_all_contributors`],
//! [`render_grid`], [`write_output`]) and combined by [`build_feed`] and
//! [`run_feed`].

mod config;
mod contributors;
mod error;
mod feed;
mod github;
mod layout;
mod output;
mod render;

pub use config::{
    ApiSettings, DEFAULT_API_URL, DEFAULT_OUTPUT, DEFAULT_USER_AGENT, FeedConfig, FeedSettings,
    RepositoryRef, TOKEN_ENV, load_config, parse_config, require_token,
};
pub use contributors::{
    Contributor, ContributorCollection, ContributorPages, PER_PAGE, Page, PageSource,
    fetch_all_contributors,
};
pub use error::{Error, config_io_error, io_error};
pub use feed::{FeedReport, build_feed, run_feed};
pub use github::{GitHubClient, contributors_route};
pub use layout::{
    AVATAR_RESOLUTION, CELL_GAP, CELL_SIZE, COLUMNS, GridCell, GridLayout, PROFILE_BASE_URL,
    avatar_url,
};
pub use output::write_output;
pub use render::render_grid;
