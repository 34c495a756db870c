//! Previous/next link boundary scenarios
//!
//! Link absence is asserted through explicit existence probes of the live
//! DOM, not by catching a failed locate call.

mod common;

use reader_e2e::{ContentPage, SectionState};

use common::{base_url, desktop_session, DEFAULT_BOOK, DEFAULT_PAGE};

#[test]
#[ignore] // Requires Chrome and a running reader instance
fn test_previous_link_absent_on_first_page() {
    let session = desktop_session();
    let page = ContentPage::new(&session, base_url(), DEFAULT_BOOK, DEFAULT_PAGE);
    page.open().expect("Failed to open content page");

    // Confirm the first section is the one displayed
    let toc = page.toc();
    let first = toc.first_section().expect("TOC is empty");
    assert_eq!(first.state().expect("Failed to read section state"), SectionState::Active);

    // No previous link on the first page; the next link is there
    assert!(
        !page.previous_link_exists().expect("Failed to probe previous link"),
        "first page unexpectedly has a previous link"
    );
    assert!(page.next_link_displayed().expect("Failed to probe next link"));
}

#[test]
#[ignore] // Requires Chrome and a running reader instance
fn test_next_link_absent_on_last_page() {
    let session = desktop_session();
    let page = ContentPage::new(&session, base_url(), DEFAULT_BOOK, DEFAULT_PAGE);
    page.open().expect("Failed to open content page");

    // Jump to the end of the book through the TOC
    let toc = page.toc();
    toc.last_section().expect("TOC is empty").click().expect("Failed to open last section");

    let last = toc.last_section().expect("TOC is empty");
    assert_eq!(last.state().expect("Failed to read section state"), SectionState::Active);

    // No next link on the last page; the previous link is there
    assert!(
        !page.next_link_exists().expect("Failed to probe next link"),
        "last page unexpectedly has a next link"
    );
    assert!(page.previous_link_displayed().expect("Failed to probe previous link"));
}

#[test]
#[ignore] // Requires Chrome and a running reader instance
fn test_section_click_moves_active_state() {
    let session = desktop_session();
    let page = ContentPage::new(&session, base_url(), DEFAULT_BOOK, DEFAULT_PAGE);
    page.open().expect("Failed to open content page");

    let toc = page.toc();
    let sections = toc.sections().expect("Failed to read TOC");
    assert!(sections.len() > 1, "book has a single-section TOC");

    let target = &sections[1];
    let target_title = target.title().expect("Failed to read section title");
    target.click().expect("Failed to open section");

    // The clicked entry is now the active one, and the only one
    let active = toc
        .active_section()
        .expect("Failed to scan TOC")
        .expect("no section is marked active after navigation");
    assert_eq!(active.title().expect("Failed to read active title"), target_title);
    assert_eq!(active.index(), 1);
}
