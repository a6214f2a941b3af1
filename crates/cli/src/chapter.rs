use d2lmd_core::D2lError;
use d2lmd_filter::{Options, convert};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Default file name of the combined chapter page.
pub const COMBINED_FILE_NAME: &str = "chapter.html";

/// Pages written by [`build_chapter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterReport {
    /// One HTML page per Markdown source, in source order.
    pub pages: Vec<PathBuf>,
    /// The combined chapter page.
    pub combined: PathBuf,
}

/// Lists the `*.md` files directly inside `dir`, sorted by file name.
pub fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>, D2lError> {
    if !dir.is_dir() {
        return Err(D2lError::NotADirectory(dir.display().to_string()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|err| D2lError::io_at(dir, err))? {
        let path = entry.map_err(|err| D2lError::io_at(dir, err))?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Converts every Markdown file in `dir` to a sibling HTML page, then
/// converts their concatenation into one combined chapter page.
///
/// Every conversion is a separate run with its own wrap state, so each page
/// and the combined chapter carry exactly one page header.
pub fn build_chapter(
    dir: &Path,
    output: Option<&Path>,
    options: &Options,
    threads: Option<usize>,
) -> Result<ChapterReport, D2lError> {
    let files = markdown_files(dir)?;
    if files.is_empty() {
        return Err(D2lError::EmptyChapter(dir.display().to_string()));
    }

    let sources = files
        .iter()
        .map(|path| std::fs::read_to_string(path).map_err(|err| D2lError::io_at(path, err)))
        .collect::<Result<Vec<_>, _>>()?;

    let pool = threads.and_then(|n| rayon::ThreadPoolBuilder::new().num_threads(n).build().ok());

    let convert_page = |(path, source): (&PathBuf, &String)| -> Result<PathBuf, D2lError> {
        let html = convert(source, options).map_err(|err| err.in_file(path))?;
        let page = path.with_extension("html");
        std::fs::write(&page, html).map_err(|err| D2lError::io_at(&page, err))?;
        log::info!("Wrote {}", page.display());
        Ok(page)
    };

    let results: Vec<Result<PathBuf, D2lError>> = if let Some(pool) = pool {
        pool.install(|| files.par_iter().zip(sources.par_iter()).map(convert_page).collect())
    } else {
        files.par_iter().zip(sources.par_iter()).map(convert_page).collect()
    };
    let pages = results.into_iter().collect::<Result<Vec<_>, _>>()?;

    let combined = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| dir.join(COMBINED_FILE_NAME));
    let html = convert(&sources.join("\n\n"), options)?;
    std::fs::write(&combined, html).map_err(|err| D2lError::io_at(&combined, err))?;
    log::info!("Wrote combined chapter {} from {} files", combined.display(), pages.len());

    Ok(ChapterReport { pages, combined })
}
