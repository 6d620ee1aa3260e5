// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Grid geometry for the avatar wall.
//!
//! Contributors are placed row by row on a grid with a fixed number of
//! columns. Cell `i` sits at column `i mod COLUMNS` and row `i div COLUMNS`,
//! each step being one cell plus one gap. The canvas spans every column as
//! soon as one contributor exists and drops the trailing gap on both axes.
//! Dimensions never go below zero: an empty collection yields zero rows and
//! a zero-height canvas.

use crate::contributors::{Contributor, ContributorCollection};

/// Edge length of one avatar cell in pixels.
pub const CELL_SIZE: u32 = 48;
/// Space between neighbouring cells in pixels.
pub const CELL_GAP: u32 = 8;
/// Number of cells per row.
pub const COLUMNS: u32 = 12;
/// Requested avatar resolution, twice the cell size for high-DPI screens.
pub const AVATAR_RESOLUTION: u32 = CELL_SIZE * 2;
/// Base of the profile link attached to each cell.
pub const PROFILE_BASE_URL: &str = "https://github.com";

/// Derived canvas geometry for a collection size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub columns:   u32,
    pub rows:      u32,
    pub cell_size: u32,
    pub gap:       u32,
    pub width:     u32,
    pub height:    u32
}

impl GridLayout {
    /// Computes the layout for `count` contributors.
    ///
    /// # Examples
    ///
    /// ```
    /// use contrib_feed::GridLayout;
    ///
    /// let layout = GridLayout::for_count(13);
    /// assert_eq!((layout.rows, layout.width, layout.height), (2, 664, 104));
    /// ```
    pub fn for_count(count: usize) -> Self {
        let pitch = CELL_SIZE + CELL_GAP;
        let rows = u32::try_from(count.div_ceil(COLUMNS as usize)).unwrap_or(u32::MAX);

        Self {
            columns: COLUMNS,
            rows,
            cell_size: CELL_SIZE,
            gap: CELL_GAP,
            width: (COLUMNS * pitch).saturating_sub(CELL_GAP),
            height: rows.saturating_mul(pitch).saturating_sub(CELL_GAP)
        }
    }

    /// Distance between the origins of two neighbouring cells.
    pub fn pitch(&self) -> u32 {
        self.cell_size + self.gap
    }

    /// Top-left corner of cell `index`.
    ///
    /// Coordinates saturate at `u32::MAX` like the canvas dimensions.
    pub fn position(&self, index: usize) -> (u32, u32) {
        let columns = self.columns as usize;
        let pitch = self.pitch() as usize;
        let x = (index % columns).saturating_mul(pitch);
        let y = (index / columns).saturating_mul(pitch);
        (
            u32::try_from(x).unwrap_or(u32::MAX),
            u32::try_from(y).unwrap_or(u32::MAX)
        )
    }

    /// Positions every contributor of `collection` in order.
    pub fn cells<'a>(
        &self,
        collection: &'a ContributorCollection
    ) -> impl Iterator<Item = GridCell<'a>> + use<'a> {
        let layout = *self;
        collection
            .iter()
            .enumerate()
            .map(move |(index, contributor)| GridCell::new(&layout, index, contributor))
    }
}

/// One positioned avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridCell<'a> {
    pub index:       usize,
    pub x:           u32,
    pub y:           u32,
    /// Profile link wrapping the image.
    pub href:        String,
    /// Avatar URL with the resolution parameter appended.
    pub image_url:   String,
    pub contributor: &'a Contributor
}

impl<'a> GridCell<'a> {
    pub fn new(layout: &GridLayout, index: usize, contributor: &'a Contributor) -> Self {
        let (x, y) = layout.position(index);
        Self {
            index,
            x,
            y,
            href: format!("{PROFILE_BASE_URL}/{}", contributor.login),
            image_url: avatar_url(&contributor.avatar_url, AVATAR_RESOLUTION),
            contributor
        }
    }
}

/// Appends the `s` size parameter to an avatar URL.
///
/// Listing URLs already carry a query (`?v=4`), so the parameter is usually
/// joined with `&`.
pub fn avatar_url(raw: &str, size: u32) -> String {
    let separator = if raw.contains('?') { '&' } else { '?' };
    format!("{raw}{separator}s={size}")
}
