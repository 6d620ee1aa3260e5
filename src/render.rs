// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! SVG serialization of the avatar wall.
//!
//! The document is a pure function of the collection: no timestamps and no
//! reordering, so identical input renders byte-identical output.

use std::{borrow::Cow, fmt::Write as _};

use crate::{
    contributors::ContributorCollection,
    layout::{GridCell, GridLayout}
};

/// Identifier of the shared rounded-corner clip path.
const CLIP_ID: &str = "r";
/// Corner radius relative to the cell edge (8px on a 48px cell).
const CLIP_RADIUS: &str = "0.1667";

/// Renders `collection` as a self-contained SVG document.
///
/// Every contributor becomes an `<image>` clipped to rounded corners and
/// wrapped in a link to the profile. The clip uses object bounding box
/// units so one definition fits every cell position.
///
/// # Example
///
/// ```
/// use contrib_feed::{Contributor, ContributorCollection, render_grid};
///
/// let collection: ContributorCollection = vec![Contributor {
///     login:      "octocat".to_owned(),
///     avatar_url: "https://avatars.githubusercontent.com/u/583231?v=4".to_owned()
/// }]
/// .into_iter()
/// .collect();
///
/// let svg = render_grid(&collection);
/// assert!(svg.contains("width=\"664\" height=\"48\""));
/// assert!(svg.contains("https://github.com/octocat"));
/// ```
pub fn render_grid(collection: &ContributorCollection) -> String {
    let layout = GridLayout::for_count(collection.len());
    let mut buffer = String::with_capacity(512 + collection.len() * 256);

    let _ = writeln!(
        buffer,
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\">",
        w = layout.width,
        h = layout.height,
    );
    let _ = writeln!(
        buffer,
        "  <defs><clipPath id=\"{CLIP_ID}\" clipPathUnits=\"objectBoundingBox\"><rect x=\"0\" y=\"0\" width=\"1\" height=\"1\" rx=\"{CLIP_RADIUS}\" ry=\"{CLIP_RADIUS}\"/></clipPath></defs>",
    );

    for cell in layout.cells(collection) {
        write_cell(&mut buffer, &layout, &cell);
    }

    buffer.push_str("</svg>\n");
    buffer
}

fn write_cell(buffer: &mut String, layout: &GridLayout, cell: &GridCell<'_>) {
    let _ = writeln!(
        buffer,
        "  <a xlink:href=\"{href}\" target=\"_blank\">\n    <image x=\"{x}\" y=\"{y}\" width=\"{size}\" height=\"{size}\" href=\"{src}\" clip-path=\"url(#{CLIP_ID})\"><title>{login}</title></image>\n  </a>",
        href = escape_xml(&cell.href),
        x = cell.x,
        y = cell.y,
        size = layout.cell_size,
        src = escape_xml(&cell.image_url),
        login = escape_xml(&cell.contributor.login),
    );
}

fn escape_xml(value: &str) -> Cow<'_, str> {
    if value
        .chars()
        .any(|character| matches!(character, '&' | '<' | '>' | '\"' | '\''))
    {
        let mut escaped = String::with_capacity(value.len() + 8);
        for character in value.chars() {
            match character {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '\"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                other => escaped.push(other)
            }
        }
        Cow::Owned(escaped)
    } else {
        Cow::Borrowed(value)
    }
}
