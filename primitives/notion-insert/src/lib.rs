//! Notion Insert - One Database Page Per Line
//!
//! Reads a text file line by line and creates a title-only page in a Notion
//! database for each line. Lines are submitted one at a time, in file order.
//! The first file or request error aborts the run; a non-2xx response is
//! logged and the run continues.

pub mod client;
pub mod error;
pub mod page;
pub mod reader;

pub use client::{DEFAULT_API_URL, NOTION_VERSION, NotionClient, PageSubmitter};
pub use error::{Error, SubmitError};
pub use page::NewPage;
pub use reader::LineReader;

use std::path::Path;
use tokio::io::AsyncBufRead;

/// Creates one page per line of the file at `path`.
///
/// Returns the number of pages submitted.
pub async fn run<S: PageSubmitter>(path: impl AsRef<Path>, submitter: &S) -> Result<usize, Error> {
    let mut reader = LineReader::open(path).await?;
    submit_lines(&mut reader, submitter).await
}

/// Submits every remaining line of `reader`, stopping at the first error.
pub async fn submit_lines<R, S>(reader: &mut LineReader<R>, submitter: &S) -> Result<usize, Error>
where
    R: AsyncBufRead + Unpin,
    S: PageSubmitter,
{
    let mut submitted = 0;

    while let Some(title) = reader.next_line().await? {
        if let Err(source) = submitter.create_page(&title).await {
            return Err(Error::CreatePage { title, source });
        }
        submitted += 1;
    }

    Ok(submitted)
}
