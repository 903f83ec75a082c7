//! Full page lifecycle driven through the public API.
//!
//! These tests play the host: build the page skeleton, mount the app with
//! stock content and a fake clock, then feed it scroll events, observer
//! batches, clicks, and timer pumps, checking the document after each step.

use chrono::{TimeZone, Utc};
use scrollwork::app::App;
use scrollwork::content::SiteContent;
use scrollwork::dom::{Document, NodeId};
use scrollwork::effects::Viewport;
use scrollwork::markers;
use scrollwork::observer::IntersectionEntry;
use scrollwork::time::{Clock, FakeClock};

struct Page {
    doc: Document,
    nav_toggle: NodeId,
    nav_list: NodeId,
    link_about: NodeId,
    link_projects: NodeId,
    about: NodeId,
    projects: NodeId,
    progress: NodeId,
    layer: NodeId,
    headline: NodeId,
    skills_cloud: NodeId,
    cards: NodeId,
    year: NodeId,
    static_reveal: NodeId,
}

fn build_page() -> Page {
    let mut doc = Document::new();
    let root = doc.root();

    let header = child(&mut doc, root, "header", &[]);
    child(&mut doc, header, "div", &[markers::LOGO]);
    let nav_toggle = child(&mut doc, header, "button", &[markers::NAV_TOGGLE]);
    let nav_list = child(&mut doc, header, "ul", &[markers::NAV_LIST]);
    let link_about = link(&mut doc, nav_list, "#about", "About");
    let link_projects = link(&mut doc, nav_list, "#projects", "Projects");

    let progress = child(&mut doc, root, "div", &[markers::SCROLL_PROGRESS]);

    let main = child(&mut doc, root, "main", &[]);

    let hero = child(&mut doc, main, "section", &[]);
    doc.set_attr(hero, "id", "hero");
    let layer = child(&mut doc, hero, "div", &[markers::LAYER]);
    doc.set_attr(layer, markers::DEPTH_ATTR, "0.2");
    child(&mut doc, hero, "p", &[markers::EYEBROW]);
    let headline = child(&mut doc, hero, "h1", &[markers::HEADLINE]);
    child(&mut doc, hero, "p", &[markers::SUBHEAD]);
    let static_reveal = child(&mut doc, hero, "h2", &[markers::REVEAL_UP]);
    doc.set_attr(static_reveal, markers::DELAY_ATTR, "0.15");

    let about = child(&mut doc, main, "section", &[]);
    doc.set_attr(about, "id", "about");
    child(&mut doc, about, "p", &[markers::ABOUT_INTRO]);
    child(&mut doc, about, "ul", &[markers::BULLETS]);
    let skills_cloud = child(&mut doc, about, "div", &[markers::SKILLS_CLOUD]);

    let projects = child(&mut doc, main, "section", &[]);
    doc.set_attr(projects, "id", "projects");
    let cards = child(&mut doc, projects, "div", &[markers::CARDS]);

    let contact = child(&mut doc, main, "section", &[]);
    doc.set_attr(contact, "id", "contact");
    child(&mut doc, contact, "p", &[markers::CONTACT_LEAD]);
    child(&mut doc, contact, "div", &[markers::SOCIALS]);

    let footer = child(&mut doc, root, "footer", &[]);
    let year = child(&mut doc, footer, "span", &[markers::FOOTER_YEAR]);

    Page {
        doc,
        nav_toggle,
        nav_list,
        link_about,
        link_projects,
        about,
        projects,
        progress,
        layer,
        headline,
        skills_cloud,
        cards,
        year,
        static_reveal,
    }
}

fn child(doc: &mut Document, parent: NodeId, tag: &str, classes: &[&str]) -> NodeId {
    let id = doc.create_element(tag);
    for class in classes {
        doc.add_class(id, class);
    }
    doc.append_child(parent, id).unwrap();
    id
}

fn link(doc: &mut Document, list: NodeId, href: &str, text: &str) -> NodeId {
    let item = child(doc, list, "li", &[]);
    let anchor = child(doc, item, "a", &[markers::NAV_LINK]);
    doc.set_attr(anchor, "href", href);
    doc.set_text(anchor, text);
    anchor
}

fn mounted() -> (App<FakeClock>, FakeClock, Page) {
    let page = build_page();
    let start = Utc
        .with_ymd_and_hms(2026, 8, 25, 9, 0, 0)
        .unwrap()
        .timestamp_millis() as u64;
    let clock = FakeClock::new(start);
    let mut app = App::with_clock(page.doc.clone(), SiteContent::stock(), clock.clone());
    app.mount(Viewport::new(0.0, 800.0, 2800.0)).unwrap();
    (app, clock, page)
}

#[test]
fn mount_populates_and_prepares_the_page() {
    let (app, _clock, page) = mounted();
    let doc = app.document();

    // Content landed
    assert_eq!(doc.text(page.headline), "Avery Vale • Frontend Developer");
    assert_eq!(doc.children(page.skills_cloud).len(), 6);
    assert_eq!(doc.children(page.cards).len(), 3);
    assert_eq!(doc.text(page.year), "2026");

    // Initial effects pass ran before any scroll
    assert_eq!(doc.style(page.progress, "width"), Some("0%"));
    assert_eq!(doc.style(page.layer, "transform"), Some("translate3d(0, 0px, 0)"));

    // Observation wiring is ready for the host
    assert_eq!(app.reveal_targets().len(), 1 + 6 + 3);
    assert_eq!(app.section_targets().len(), 4);
    assert_eq!(app.reveal_options().threshold, 0.12);
    assert_eq!(app.reveal_options().root_margin_bottom, 40.0);
    assert_eq!(app.section_options().threshold, 0.55);
}

#[test]
fn scrolling_updates_progress_and_parallax() {
    let (mut app, clock, page) = mounted();

    clock.advance(100);
    assert!(app.on_scroll(Viewport::new(1000.0, 800.0, 2800.0)));
    assert_eq!(app.document().style(page.progress, "width"), Some("50%"));
    // depth 0.2: 1000 * 0.2 * 0.25 = 50
    assert_eq!(
        app.document().style(page.layer, "transform"),
        Some("translate3d(0, 50px, 0)")
    );

    // Inside the 20 ms window: dropped, styles unchanged
    clock.advance(10);
    assert!(!app.on_scroll(Viewport::new(2000.0, 800.0, 2800.0)));
    assert_eq!(app.document().style(page.progress, "width"), Some("50%"));

    clock.advance(10);
    assert!(app.on_scroll(Viewport::new(2000.0, 800.0, 2800.0)));
    assert_eq!(app.document().style(page.progress, "width"), Some("100%"));
}

#[test]
fn reveals_fire_in_delay_order_through_the_timer_pump() {
    let (mut app, clock, page) = mounted();
    let doc = app.document();
    let first_tag = doc.children(page.skills_cloud)[0]; // delay 0.05
    let second_tag = doc.children(page.skills_cloud)[1]; // delay 0.075
    let heading = page.static_reveal; // delay 0.15

    // The host's observer reports three elements entering the viewport
    app.deliver_reveal_entries(&[
        IntersectionEntry::visible(heading),
        IntersectionEntry::visible(first_tag),
        IntersectionEntry::visible(second_tag),
    ]);

    // They all left the observation set for good
    assert!(!app.reveal_targets().contains(&heading));
    assert!(!app.reveal_targets().contains(&first_tag));

    // The host pumps timers deadline by deadline
    let base = clock.now_ms();
    assert_eq!(app.next_timer_deadline(), Some(base + 50));

    clock.set(base + 50);
    assert_eq!(app.run_timers(), 1);
    assert!(app.document().has_class(first_tag, markers::VISIBLE));
    assert!(!app.document().has_class(second_tag, markers::VISIBLE));

    clock.set(base + 75);
    assert_eq!(app.run_timers(), 1);
    assert!(app.document().has_class(second_tag, markers::VISIBLE));
    assert!(!app.document().has_class(heading, markers::VISIBLE));

    clock.set(base + 150);
    assert_eq!(app.run_timers(), 1);
    assert!(app.document().has_class(heading, markers::VISIBLE));
    assert_eq!(app.next_timer_deadline(), None);

    // A late duplicate batch schedules nothing
    app.deliver_reveal_entries(&[IntersectionEntry::visible(first_tag)]);
    assert_eq!(app.next_timer_deadline(), None);
}

#[test]
fn sections_drive_the_nav_highlight() {
    let (mut app, _clock, page) = mounted();

    app.deliver_section_entries(&[IntersectionEntry::visible(page.about)]);
    assert!(app.document().has_class(page.link_about, markers::ACTIVE));

    // Two sections cross in one batch: the later entry wins
    app.deliver_section_entries(&[
        IntersectionEntry::visible(page.about),
        IntersectionEntry::visible(page.projects),
    ]);
    assert!(!app.document().has_class(page.link_about, markers::ACTIVE));
    assert!(app.document().has_class(page.link_projects, markers::ACTIVE));

    // Departures change nothing
    app.deliver_section_entries(&[IntersectionEntry::hidden(page.projects)]);
    assert!(app.document().has_class(page.link_projects, markers::ACTIVE));
}

#[test]
fn clicks_resolve_and_the_nav_toggles() {
    let (mut app, _clock, page) = mounted();

    let outcome = app.on_click(page.link_about);
    assert!(outcome.prevent_default);
    assert_eq!(outcome.scroll_to, Some(page.about));

    // A click on a non-anchor falls through
    let outcome = app.on_click(page.headline);
    assert!(!outcome.prevent_default);
    assert_eq!(outcome.scroll_to, None);

    assert_eq!(app.on_nav_toggle(), Some(true));
    assert!(app.document().has_class(page.nav_list, markers::OPEN));
    assert_eq!(
        app.document().attr(page.nav_toggle, "aria-expanded"),
        Some("true")
    );
    assert_eq!(app.on_nav_toggle(), Some(false));
    assert_eq!(
        app.document().attr(page.nav_toggle, "aria-expanded"),
        Some("false")
    );
}

#[test]
fn rendered_cards_follow_the_content_shapes() {
    let (app, _clock, page) = mounted();
    let doc = app.document();
    let cards = doc.children(page.cards).to_vec();

    // Stock content: linked project, badge-only project, bare project
    let linked = all_with_class(doc, cards[0], markers::CARD_LINK);
    assert_eq!(doc.text(linked[0]), "View project");

    let badged = all_with_class(doc, cards[1], markers::CARD_BADGE);
    assert!(!badged.is_empty());
    assert!(all_with_class(doc, cards[1], markers::CARD_LINK).is_empty());

    let bare = all_with_class(doc, cards[2], markers::CARD_BADGE);
    assert_eq!(doc.text(bare[0]), "Coming Soon");
}

fn all_with_class(doc: &Document, root: NodeId, class: &str) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        if doc.has_class(id, class) {
            out.push(id);
        }
        for c in doc.children(id).iter().rev() {
            stack.push(*c);
        }
    }
    out
}
