// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

/// Output sink for rendered documents.
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use tracing::debug;

use crate::error::{self, Error};

/// Writes `document` to `path`, replacing any existing content.
///
/// Missing parent directories are created. The file handle is flushed
/// before returning and closed on every path.
///
/// # Errors
///
/// Returns [`Error::Io`] with the destination path when the directory, the
/// file or the write fails.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
///
/// use contrib_feed::write_output;
///
/// # fn example() -> Result<(), contrib_feed::Error> {
/// write_output("<svg/>", Path::new("contributors.svg",),)?;
/// # Ok(())
/// # }
/// ```
pub fn write_output(document: &str, path: &Path,) -> Result<(), Error,>
{
    if let Some(parent,) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent,).map_err(|source| error::io_error(path, source,),)?;
    }

    let file = File::create(path,).map_err(|source| error::io_error(path, source,),)?;
    let mut writer = BufWriter::new(file,);
    writer.write_all(document.as_bytes(),).map_err(|source| error::io_error(path, source,),)?;
    writer.flush().map_err(|source| error::io_error(path, source,),)?;

    debug!("Wrote {} bytes to {}", document.len(), path.display());
    Ok((),)
}

#[cfg(test)]
mod tests
{
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn write_output_overwrites_existing_content()
    {
        let dir = tempdir().expect("failed to create tempdir",);
        let path = dir.path().join("contributors.svg",);
        fs::write(&path, "previous content that is longer than the new one",)
            .expect("failed to seed file",);

        write_output("<svg/>", &path,).expect("write should succeed",);

        let contents = fs::read_to_string(&path,).expect("failed to read output",);
        assert_eq!(contents, "<svg/>");
    }

    #[test]
    fn write_output_creates_parent_directories()
    {
        let dir = tempdir().expect("failed to create tempdir",);
        let path = dir.path().join("nested/dir/contributors.svg",);

        write_output("<svg/>", &path,).expect("write should succeed",);

        assert!(path.exists());
    }

    #[test]
    fn write_output_reports_path_on_failure()
    {
        let dir = tempdir().expect("failed to create tempdir",);
        let blocker = dir.path().join("blocked",);
        fs::write(&blocker, "file, not a directory",).expect("failed to create blocker",);
        let path = blocker.join("contributors.svg",);

        let error = write_output("<svg/>", &path,).expect_err("expected io failure",);

        match error {
            Error::Io {
                path: failed, ..
            } => assert_eq!(failed, path),
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}
