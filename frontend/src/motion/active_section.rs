use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use web_sys::js_sys::Array;
use web_sys::IntersectionObserver;
use yew::prelude::*;

use super::visibility::{entries, intersection_observer, ObserverCallback};

pub const ACTIVE_THRESHOLD: f64 = 0.2;
/// Excludes the fixed nav band at the top and the lower 80% of the
/// viewport, so the section nearest the top wins.
pub const ACTIVE_ROOT_MARGIN: &str = "-80px 0px -80% 0px";

/// One entry of an intersection batch, reduced to what the tracker needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionCrossing<'a> {
    pub id: &'a str,
    pub intersecting: bool,
}

/// Which registered section the navigation highlights.
///
/// Within one batch every intersecting entry is applied in delivery order,
/// so when two sections enter the band together the later one wins.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSection {
    sections: Vec<String>,
    active: usize,
}

impl ActiveSection {
    /// `None` when there is nothing to track.
    pub fn new(sections: Vec<String>) -> Option<Self> {
        if sections.is_empty() {
            return None;
        }
        Some(Self { sections, active: 0 })
    }

    pub fn active(&self) -> &str {
        &self.sections[self.active]
    }

    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    /// Applies a batch of crossings. Unknown ids are ignored. Returns true if
    /// the active section changed.
    pub fn apply<'a, I>(&mut self, batch: I) -> bool
    where
        I: IntoIterator<Item = SectionCrossing<'a>>,
    {
        let before = self.active;
        for crossing in batch.into_iter().filter(|c| c.intersecting) {
            match self.sections.iter().position(|id| id == crossing.id) {
                Some(index) => self.active = index,
                None => debug!("ignoring crossing for unregistered section {}", crossing.id),
            }
        }
        before != self.active
    }
}

/// Highlight for a freshly bound tracker: the first id, or nothing.
pub fn initial_active(ids: &[String]) -> String {
    ids.first().cloned().unwrap_or_default()
}

/// Observes every section in `ids` that exists in the document and returns
/// the id of the active one. Defaults to the first id.
///
/// Elements are looked up each time `ids` changes, and the highlight resets
/// to the first id. Callers pass an empty list on pages without sections so
/// that returning to a page re-binds against its live nodes.
#[hook]
pub fn use_active_section(ids: Vec<String>) -> String {
    let active = use_state(|| initial_active(&ids));

    {
        let active = active.clone();
        use_effect_with_deps(
            move |ids: &Vec<String>| {
                let first = initial_active(ids);
                if *active != first {
                    active.set(first);
                }

                let mut observing: Option<(IntersectionObserver, ObserverCallback)> = None;

                if let Some(tracker) = ActiveSection::new(ids.clone()) {
                    let document = web_sys::window().and_then(|window| window.document());
                    let elements: Vec<_> = match document {
                        Some(document) => tracker
                            .sections()
                            .iter()
                            .filter_map(|id| document.get_element_by_id(id))
                            .collect(),
                        None => Vec::new(),
                    };

                    if !elements.is_empty() {
                        let tracker = Rc::new(RefCell::new(tracker));
                        let setter = active.setter();
                        let callback = Closure::wrap(Box::new(
                            move |batch: Array, _observer: IntersectionObserver| {
                                let reports: Vec<(String, bool)> = entries(&batch)
                                    .map(|entry| (entry.target().id(), entry.is_intersecting()))
                                    .collect();
                                let mut tracker = tracker.borrow_mut();
                                let changed = tracker.apply(reports.iter().map(|(id, intersecting)| {
                                    SectionCrossing { id, intersecting: *intersecting }
                                }));
                                if changed {
                                    setter.set(tracker.active().to_string());
                                }
                            },
                        )
                            as Box<dyn FnMut(Array, IntersectionObserver)>);

                        match intersection_observer(&callback, ACTIVE_THRESHOLD, ACTIVE_ROOT_MARGIN) {
                            Ok(observer) => {
                                for element in &elements {
                                    observer.observe(element);
                                }
                                observing = Some((observer, callback));
                            }
                            Err(e) => warn!("could not observe page sections: {:?}", e),
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = observing {
                        observer.disconnect();
                    }
                }
            },
            ids,
        );
    }

    (*active).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> ActiveSection {
        ActiveSection::new(
            ["home", "mission", "activities", "about"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap()
    }

    fn hit(id: &str) -> SectionCrossing<'_> {
        SectionCrossing { id, intersecting: true }
    }

    fn miss(id: &str) -> SectionCrossing<'_> {
        SectionCrossing { id, intersecting: false }
    }

    #[test]
    fn defaults_to_first_section() {
        assert_eq!(tracker().active(), "home");
        assert!(ActiveSection::new(Vec::new()).is_none());
    }

    #[test]
    fn rebinding_starts_from_first_section() {
        let mut tracker = tracker();
        tracker.apply([hit("about")]);

        let ids = tracker.sections().to_vec();
        assert_eq!(initial_active(&ids), "home");
        assert_eq!(ActiveSection::new(ids).unwrap().active(), "home");
        assert_eq!(initial_active(&[]), "");
    }

    #[test]
    fn last_intersecting_report_wins() {
        let mut tracker = tracker();
        assert!(tracker.apply([hit("mission")]));
        assert!(tracker.apply([hit("activities"), miss("mission")]));
        assert_eq!(tracker.active(), "activities");

        tracker.apply([hit("about"), hit("mission"), miss("about")]);
        assert_eq!(tracker.active(), "mission");
    }

    #[test]
    fn non_intersecting_reports_do_not_move_highlight() {
        let mut tracker = tracker();
        tracker.apply([hit("about")]);
        assert!(!tracker.apply([miss("about"), miss("home")]));
        assert_eq!(tracker.active(), "about");
    }

    #[test]
    fn unknown_sections_never_become_active() {
        let mut tracker = tracker();
        assert!(!tracker.apply([hit("get-involved"), hit("team")]));
        assert_eq!(tracker.active(), "home");

        let sequence = [hit("mission"), hit("nowhere"), miss("mission"), hit("about"), hit("elsewhere")];
        for crossing in sequence {
            tracker.apply([crossing]);
            assert!(tracker.sections().iter().any(|id| id == tracker.active()));
        }
        assert_eq!(tracker.active(), "about");
    }
}
