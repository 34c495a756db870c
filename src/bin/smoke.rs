//! Reader smoke check
//!
//! Opens a book page against a reader deployment, reports the TOC, runs an
//! unmatched-term search, and prints the resulting panel state. For checking
//! a deployment by hand before pointing the full suite at it.

use anyhow::Context;
use clap::Parser;
use reader_e2e::{
    expected_no_results_message, random_unmatched_term, BrowserSession, ContentPage, LaunchOptions,
    Library, Region,
};

#[derive(Parser)]
#[command(name = "reader-smoke")]
#[command(version)]
#[command(about = "Smoke-check a textbook reader deployment", long_about = None)]
struct Cli {
    /// Base URL of the reader deployment
    #[arg(long, default_value = "http://localhost:3000")]
    base_url: String,

    /// Book slug to open
    #[arg(long, default_value = "college-physics")]
    book: String,

    /// Page slug to open
    #[arg(long, default_value = "preface")]
    page: String,

    /// Launch browser in headed mode (default: headless)
    #[arg(long, short = 'H')]
    headed: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let library = Library::bundled().context("loading bundled book table")?;
    if library.record(&cli.book).is_err() {
        eprintln!("note: '{}' has no reference data; search-count checks unavailable", cli.book);
    }

    let session = BrowserSession::launch(LaunchOptions::new().headless(!cli.headed))
        .context("launching browser")?;

    let page = ContentPage::new(&session, &cli.base_url, &cli.book, &cli.page);
    eprintln!("opening {}", page.url());
    page.open().context("opening content page")?;
    page.dismiss_notifications().context("dismissing notifications")?;

    let toc = page.toc();
    let sections = toc.sections().context("reading TOC")?;
    println!("TOC: {} sections", sections.len());
    if let Some(first) = sections.first() {
        println!("  first: {}", first.title().context("reading first section title")?);
    }
    if let Some(last) = sections.last() {
        println!("  last:  {}", last.title().context("reading last section title")?);
    }

    let term = random_unmatched_term();
    eprintln!("searching for unmatched term {}", term);
    page.search_for(&term).context("submitting search")?;

    let sidebar = page.search_sidebar();
    let message = sidebar.no_results_message().context("reading no-results message")?;
    let ok = message == expected_no_results_message(&term);
    println!("no-results message: {}", if ok { "ok" } else { "MISMATCH" });
    if !ok {
        println!("  displayed: {}", message);
    }

    println!("search sidebar displayed: {}", sidebar.is_displayed().context("probing sidebar")?);

    session.close().ok();
    Ok(())
}
