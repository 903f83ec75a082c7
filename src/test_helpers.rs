//! Shared test fixtures for the scrollwork test suite.
//!
//! Provides the standard page skeleton the component tests work against,
//! plus finder helpers that panic with a useful message on a miss.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let mut page = full_page();
//! render::populate(&mut page.doc, &SiteContent::stock()).unwrap();
//!
//! let card = page.doc.children(page.cards)[0];
//! let link = find_in(&page.doc, card, markers::CARD_LINK);
//! assert_eq!(page.doc.text(link), "View project");
//! ```

use crate::dom::{Document, NodeId};
use crate::markers;

/// The standard page skeleton with every node a test might want to touch.
pub struct PageFixture {
    pub doc: Document,
    // Chrome
    pub nav_toggle: NodeId,
    pub nav_list: NodeId,
    pub link_hero: NodeId,
    pub link_about: NodeId,
    pub link_projects: NodeId,
    pub link_contact: NodeId,
    pub progress: NodeId,
    pub year: NodeId,
    // Sections
    pub hero: NodeId,
    pub about: NodeId,
    pub projects: NodeId,
    pub contact: NodeId,
    // Hero internals
    pub layer_a: NodeId,
    pub layer_b: NodeId,
    pub hero_title: NodeId,
    // Content containers
    pub logo: NodeId,
    pub eyebrow: NodeId,
    pub headline: NodeId,
    pub subhead: NodeId,
    pub about_intro: NodeId,
    pub bullets: NodeId,
    pub skills_cloud: NodeId,
    pub cards: NodeId,
    pub socials: NodeId,
    pub contact_lead: NodeId,
}

// =========================================================================
// Fixture setup
// =========================================================================

/// Build the page skeleton: header nav, progress bar, hero with parallax
/// layers and one static reveal heading, about/projects/contact sections
/// with their content containers, and a footer year slot.
pub fn full_page() -> PageFixture {
    let mut doc = Document::new();
    let root = doc.root();

    // Header: logo, nav toggle, nav list with one link per section
    let header = el(&mut doc, root, "header", None);
    let logo = el(&mut doc, header, "div", Some(markers::LOGO));
    let nav_toggle = el(&mut doc, header, "button", Some(markers::NAV_TOGGLE));
    doc.set_attr(nav_toggle, "aria-expanded", "false");
    let nav_list = el(&mut doc, header, "ul", Some(markers::NAV_LIST));
    let link_hero = nav_link(&mut doc, nav_list, "#hero", "Home");
    let link_about = nav_link(&mut doc, nav_list, "#about", "About");
    let link_projects = nav_link(&mut doc, nav_list, "#projects", "Projects");
    let link_contact = nav_link(&mut doc, nav_list, "#contact", "Contact");

    let progress = el(&mut doc, root, "div", Some(markers::SCROLL_PROGRESS));

    let main = el(&mut doc, root, "main", None);

    // Hero: two parallax layers, identity texts, one static reveal heading
    let hero = section(&mut doc, main, "hero");
    let layer_a = el(&mut doc, hero, "div", Some(markers::LAYER));
    doc.set_attr(layer_a, markers::DEPTH_ATTR, "0.2");
    let layer_b = el(&mut doc, hero, "div", Some(markers::LAYER));
    let eyebrow = el(&mut doc, hero, "p", Some(markers::EYEBROW));
    let headline = el(&mut doc, hero, "h1", Some(markers::HEADLINE));
    let subhead = el(&mut doc, hero, "p", Some(markers::SUBHEAD));
    let hero_title = el(&mut doc, hero, "h2", Some(markers::REVEAL_UP));
    doc.set_attr(hero_title, markers::DELAY_ATTR, "0.15");
    doc.set_text(hero_title, "Selected work");

    // About: intro, bullets, skills cloud
    let about = section(&mut doc, main, "about");
    let about_intro = el(&mut doc, about, "p", Some(markers::ABOUT_INTRO));
    let bullets = el(&mut doc, about, "ul", Some(markers::BULLETS));
    let skills_cloud = el(&mut doc, about, "div", Some(markers::SKILLS_CLOUD));

    // Projects: card grid
    let projects = section(&mut doc, main, "projects");
    let cards = el(&mut doc, projects, "div", Some(markers::CARDS));

    // Contact: lead, socials
    let contact = section(&mut doc, main, "contact");
    let contact_lead = el(&mut doc, contact, "p", Some(markers::CONTACT_LEAD));
    let socials = el(&mut doc, contact, "div", Some(markers::SOCIALS));

    let footer = el(&mut doc, root, "footer", None);
    let year = el(&mut doc, footer, "span", Some(markers::FOOTER_YEAR));

    PageFixture {
        doc,
        nav_toggle,
        nav_list,
        link_hero,
        link_about,
        link_projects,
        link_contact,
        progress,
        year,
        hero,
        about,
        projects,
        contact,
        layer_a,
        layer_b,
        hero_title,
        logo,
        eyebrow,
        headline,
        subhead,
        about_intro,
        bullets,
        skills_cloud,
        cards,
        socials,
        contact_lead,
    }
}

fn el(doc: &mut Document, parent: NodeId, tag: &str, class: Option<&str>) -> NodeId {
    let id = doc.create_element(tag);
    if let Some(c) = class {
        doc.add_class(id, c);
    }
    doc.append_child(parent, id).unwrap();
    id
}

fn section(doc: &mut Document, parent: NodeId, id_value: &str) -> NodeId {
    let id = el(doc, parent, markers::SECTION_TAG, None);
    doc.set_attr(id, "id", id_value);
    id
}

fn nav_link(doc: &mut Document, list: NodeId, href: &str, text: &str) -> NodeId {
    let item = el(doc, list, "li", None);
    let link = el(doc, item, markers::ANCHOR_TAG, Some(markers::NAV_LINK));
    doc.set_attr(link, "href", href);
    doc.set_text(link, text);
    link
}

// =========================================================================
// Finders: panic with a clear message on miss
// =========================================================================

/// Every element in the subtree of `root` (root included), tree order.
pub fn descendants(doc: &Document, root: NodeId) -> Vec<NodeId> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        if doc.tag(id).is_some() {
            out.push(id);
            for child in doc.children(id).iter().rev() {
                stack.push(*child);
            }
        }
    }
    out
}

/// Every element under `root` carrying `class`, tree order.
pub fn all_in(doc: &Document, root: NodeId, class: &str) -> Vec<NodeId> {
    descendants(doc, root)
        .into_iter()
        .filter(|id| doc.has_class(*id, class))
        .collect()
}

/// First element under `root` carrying `class`. Panics if none exists.
pub fn find_in(doc: &Document, root: NodeId, class: &str) -> NodeId {
    all_in(doc, root, class)
        .into_iter()
        .next()
        .unwrap_or_else(|| {
            let present: Vec<String> = descendants(doc, root)
                .iter()
                .map(|id| doc.classes(*id).join("."))
                .filter(|c| !c.is_empty())
                .collect();
            panic!("no element with class '{class}' under node {root}. Classes present: {present:?}")
        })
}

/// Text content of each child of `container`, in order.
pub fn text_of_children(doc: &Document, container: NodeId) -> Vec<String> {
    doc.children(container)
        .iter()
        .map(|child| doc.text(*child))
        .collect()
}
