//! # Scrollwork
//!
//! The interactive core of a static portfolio page: content population and
//! scroll-linked effects. One content record (name, about section, skills,
//! project cards, social links) drives the whole page, and a small set of
//! effects makes it feel alive: a scroll progress bar, parallax hero layers,
//! one-shot reveal animations, an active-section nav highlight, smooth
//! in-page scrolling, a mobile nav toggle, and a footer year stamp.
//!
//! # Architecture: An Engine Behind a Host Seam
//!
//! The crate never talks to a browser. Everything happens against an
//! in-memory document tree, and the environment that owns the real page
//! (the host) drives the engine through a narrow event surface:
//!
//! ```text
//! host events                    engine                     document writes
//! scroll + geometry   →   App::on_scroll          →   progress width, parallax transforms
//! observer batches    →   App::deliver_*_entries  →   nav highlight / reveal timers
//! timer deadlines     →   App::run_timers         →   is-visible classes
//! clicks, toggle      →   App::on_click / on_nav_toggle
//! ```
//!
//! This inversion exists for three reasons:
//!
//! - **Testability**: visibility and time are the two things a test cannot
//!   wait for. Both arrive as plain values (entry batches, a fake clock),
//!   so every behavior is checkable in microseconds.
//! - **No hidden machinery**: the host keeps its native scroll listeners,
//!   intersection primitives, and timers; the engine only decides what they
//!   mean.
//! - **One owner**: [`app::App`] owns the document, the content, the clock,
//!   and all component state. There is no global anywhere, so two pages in
//!   one process cannot step on each other.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`app`] | Application context that owns everything and exposes the host event surface |
//! | [`content`] | `SiteContent` data model, stock demo content, validation |
//! | [`dom`] | Arena-backed document tree: elements, text, classes, attributes, queries |
//! | [`markers`] | The selector/attribute contract with the markup, plus its parsers |
//! | [`render`] | Projects `SiteContent` into the page containers, once at mount |
//! | [`effects`] | Progress bar, parallax layers, active-section tracking |
//! | [`reveal`] | One-shot reveal scheduling with per-element delays |
//! | [`interact`] | Smooth-scroll click resolution, nav toggle, footer year |
//! | [`observer`] | Observation registries, the seam to the host's visibility primitive |
//! | [`throttle`] | Drop-excess rate gate for scroll handling |
//! | [`time`] | Clock trait, system/fake clocks, cancellable one-shot timers |
//!
//! # Design Decisions
//!
//! ## Optional Everything, Fatal Nothing
//!
//! Every page lookup is optional presence: a page without a progress bar,
//! without a nav, or without a skills container simply runs without that
//! feature. Per-item content problems degrade per item (a social link
//! without a url is skipped, a project without one gets a badge). The only
//! hard errors are construction-time content validation and structural
//! document misuse, and neither fires during normal operation.
//!
//! ## Reveals Run Exactly Once
//!
//! A reveal element is observed, scheduled on its first intersection, and
//! permanently retired; duplicate intersection entries and repeated
//! registration passes cannot schedule it twice, and the scheduled write
//! lands even if the node has been detached by the time its timer fires.
//! Timers are cancellable handles in a queue the host pumps, not detached
//! callbacks.
//!
//! ## Batch Order Is Meaning
//!
//! Section observer batches are processed in delivery order and the last
//! intersecting section wins the nav highlight. That matches how visibility
//! primitives report transitions and keeps ties deterministic without any
//! geometry knowledge in the engine.
//!
//! ## The Clock Is a Dependency
//!
//! Throttling, reveal delays, and the footer year all read an injected
//! [`time::Clock`]. Production uses the system clock; tests share a
//! [`time::FakeClock`] with the app and advance it by hand.

pub mod app;
pub mod content;
pub mod dom;
pub mod effects;
pub mod interact;
pub mod markers;
pub mod observer;
pub mod render;
pub mod reveal;
pub mod throttle;
pub mod time;

#[cfg(test)]
pub(crate) mod test_helpers;
