//! Content rendering: projecting [`SiteContent`] into the page containers.
//!
//! Runs once at mount. Every container is located by class marker and every
//! one of them is optional; a page without a skills cloud simply gets no
//! skills. List containers are cleared before appending, so whatever
//! placeholder markup the page shipped with is replaced wholesale.
//!
//! | Container | Written content |
//! |-----------|-----------------|
//! | `logo` | logo text |
//! | `eyebrow` | the greeting line |
//! | `headline` | `{name} • {role}` |
//! | `subhead` | tagline |
//! | `about-intro` | about intro paragraph |
//! | `bullets` | one `li` per bullet |
//! | `skills-cloud` | `span.tag.reveal-up` per skill, staggered delays |
//! | `cards` | `article.card.reveal-fade` per project, staggered delays |
//! | `socials` | `a.social` per linked profile |
//! | `contact-lead` | contact call to action |
//!
//! ## Project cards
//!
//! A card is `card-media` plus a `card-body` holding title, blurb, and a
//! primary action. The primary action is a `"View project"` link when the
//! project has a url, otherwise a badge carrying the project's badge text or
//! `"Coming Soon"`. A set url always wins over a badge; only a url-less
//! project with badge text also gets the small badge chip inside its title.
//! A secondary link, when present, renders after the primary action.
//!
//! Generated skill tags and cards carry reveal markers and `data-delay`
//! attributes; the app re-registers reveal targets right after rendering so
//! they animate like the static ones.

use log::debug;
use thiserror::Error;

use crate::content::{Project, SiteContent, SocialLink};
use crate::dom::{Document, DomError, NodeId};
use crate::markers;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("DOM error: {0}")]
    Dom(#[from] DomError),
}

/// Badge text for a url-less project without badge text of its own.
pub const FALLBACK_BADGE: &str = "Coming Soon";

/// Label of every primary project link.
pub const PROJECT_LINK_LABEL: &str = "View project";

/// Greeting line above the headline.
pub const EYEBROW_TEXT: &str = "Hi, I’m";

/// Reveal delay for the i-th skill tag, in seconds.
pub fn skill_delay(index: usize) -> f64 {
    0.05 + index as f64 * 0.025
}

/// Reveal delay for the i-th project card, in seconds.
pub fn project_delay(index: usize) -> f64 {
    0.05 + index as f64 * 0.05
}

/// How many items each list container received.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    pub bullets: usize,
    pub skills: usize,
    pub projects: usize,
    /// Social entries actually rendered; entries without a url are skipped.
    pub socials: usize,
}

/// Write the whole content model into the document.
pub fn populate(doc: &mut Document, content: &SiteContent) -> Result<RenderStats, RenderError> {
    set_container_text(doc, markers::LOGO, &content.logo);
    set_container_text(doc, markers::EYEBROW, EYEBROW_TEXT);
    set_container_text(
        doc,
        markers::HEADLINE,
        &format!("{} • {}", content.name, content.role),
    );
    set_container_text(doc, markers::SUBHEAD, &content.tagline);
    set_container_text(doc, markers::ABOUT_INTRO, &content.about.intro);
    set_container_text(doc, markers::CONTACT_LEAD, &content.contact_cta);

    let stats = RenderStats {
        bullets: render_bullets(doc, &content.about.bullets)?,
        skills: render_skills(doc, &content.skills)?,
        projects: render_projects(doc, &content.projects)?,
        socials: render_socials(doc, &content.socials)?,
    };
    debug!(
        "event=render status=ok bullets={} skills={} projects={} socials={}",
        stats.bullets, stats.skills, stats.projects, stats.socials
    );
    Ok(stats)
}

fn container(doc: &Document, class: &str) -> Option<NodeId> {
    doc.elements_by_class(class).into_iter().next()
}

fn set_container_text(doc: &mut Document, class: &str, text: &str) {
    if let Some(id) = container(doc, class) {
        doc.set_text(id, text);
    }
}

fn render_bullets(doc: &mut Document, bullets: &[String]) -> Result<usize, RenderError> {
    let Some(list) = container(doc, markers::BULLETS) else {
        return Ok(0);
    };
    doc.clear_children(list);
    for bullet in bullets {
        let li = doc.create_element("li");
        doc.set_text(li, bullet);
        doc.append_child(list, li)?;
    }
    Ok(bullets.len())
}

fn render_skills(doc: &mut Document, skills: &[String]) -> Result<usize, RenderError> {
    let Some(cloud) = container(doc, markers::SKILLS_CLOUD) else {
        return Ok(0);
    };
    doc.clear_children(cloud);
    for (i, skill) in skills.iter().enumerate() {
        let tag = doc.create_element("span");
        doc.add_class(tag, markers::SKILL_TAG);
        doc.add_class(tag, markers::REVEAL_UP);
        doc.set_attr(tag, markers::DELAY_ATTR, &skill_delay(i).to_string());
        doc.set_text(tag, skill);
        doc.append_child(cloud, tag)?;
    }
    Ok(skills.len())
}

fn render_projects(doc: &mut Document, projects: &[Project]) -> Result<usize, RenderError> {
    let Some(grid) = container(doc, markers::CARDS) else {
        return Ok(0);
    };
    doc.clear_children(grid);
    for (i, project) in projects.iter().enumerate() {
        let card = build_card(doc, project, project_delay(i))?;
        doc.append_child(grid, card)?;
    }
    Ok(projects.len())
}

fn build_card(doc: &mut Document, project: &Project, delay_s: f64) -> Result<NodeId, RenderError> {
    let card = doc.create_element("article");
    doc.add_class(card, markers::CARD);
    doc.add_class(card, markers::REVEAL_FADE);
    doc.set_attr(card, markers::DELAY_ATTR, &delay_s.to_string());

    let media = doc.create_element("div");
    doc.add_class(media, markers::CARD_MEDIA);
    doc.append_child(card, media)?;

    let body = doc.create_element("div");
    doc.add_class(body, markers::CARD_BODY);
    doc.append_child(card, body)?;

    let title = doc.create_element("h3");
    doc.set_text(title, &project.title);
    // A url takes the badge's place; the title chip only exists without one
    if project.url.is_none() {
        if let Some(badge_text) = &project.badge {
            let chip = doc.create_element("span");
            doc.add_class(chip, markers::CARD_BADGE);
            doc.set_text(chip, badge_text);
            doc.append_child(title, chip)?;
        }
    }
    doc.append_child(body, title)?;

    let blurb = doc.create_element("p");
    doc.set_text(blurb, &project.blurb);
    doc.append_child(body, blurb)?;

    match &project.url {
        Some(url) => {
            let link = outbound_link(doc, url, PROJECT_LINK_LABEL);
            doc.add_class(link, markers::CARD_LINK);
            doc.append_child(body, link)?;
        }
        None => {
            let badge = doc.create_element("span");
            doc.add_class(badge, markers::CARD_BADGE);
            doc.set_text(badge, project.badge.as_deref().unwrap_or(FALLBACK_BADGE));
            doc.append_child(body, badge)?;
        }
    }

    if let Some(secondary) = &project.secondary {
        let link = outbound_link(doc, &secondary.url, &secondary.text);
        doc.add_class(link, markers::CARD_LINK);
        doc.add_class(link, markers::CARD_LINK_SECONDARY);
        doc.append_child(body, link)?;
    }

    Ok(card)
}

fn render_socials(doc: &mut Document, socials: &[SocialLink]) -> Result<usize, RenderError> {
    let Some(wrap) = container(doc, markers::SOCIALS) else {
        return Ok(0);
    };
    doc.clear_children(wrap);
    let mut rendered = 0;
    for social in socials {
        let Some(url) = &social.url else {
            continue;
        };
        let link = outbound_link(doc, url, &social.label);
        doc.add_class(link, markers::SOCIAL);
        doc.set_attr(link, "aria-label", &social.label);
        doc.append_child(wrap, link)?;
        rendered += 1;
    }
    Ok(rendered)
}

/// New-tab anchor with the rel attributes every outbound link carries.
fn outbound_link(doc: &mut Document, url: &str, text: &str) -> NodeId {
    let link = doc.create_element("a");
    doc.set_attr(link, "href", url);
    doc.set_attr(link, "target", "_blank");
    doc.set_attr(link, "rel", "noopener noreferrer");
    doc.set_text(link, text);
    link
}
