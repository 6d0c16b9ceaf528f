//! Thumbnail gallery state.
//!
//! The gallery owns its nodes outright; the view only reads them, and nothing
//! else writes them. Each node is keyed by its normalized path and moves
//! through `Entering -> Shown -> Leaving` before it is detached.

use std::collections::HashSet;

use crate::app::paths::{normalize, same_path};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Just inserted; the fade-in class is still on.
    Entering,
    Shown,
    /// Fading out after a double click; detached on transition end.
    Leaving,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ThumbnailNode {
    pub key: String,
    pub phase: Phase,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct GalleryState {
    nodes: Vec<ThumbnailNode>,
    // detached nodes whose remove call has not come back yet
    removing: HashSet<String>,
}

impl GalleryState {
    pub fn keys(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.key.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn phase_of(&self, key: &str) -> Option<Phase> {
        self.find(key).map(|i| self.nodes[i].phase)
    }

    fn find(&self, key: &str) -> Option<usize> {
        self.nodes.iter().position(|n| same_path(&n.key, key))
    }

    /// Initial load: replace everything with one node per path, in order.
    pub fn render_all(&mut self, paths: &[String]) {
        self.nodes.clear();
        self.removing.clear();
        for path in paths {
            self.append_one(path);
        }
    }

    /// Append a node unless one with the same normalized path exists.
    pub fn append_one(&mut self, path: &str) -> bool {
        if self.find(path).is_some() {
            return false;
        }
        self.nodes.push(ThumbnailNode { key: normalize(path), phase: Phase::Entering });
        true
    }

    /// Bring the gallery in line with an authoritative list from the store.
    ///
    /// Only appends. A response can arrive after a later one, so a node that is
    /// missing from it may just be newer than it. Paths whose removal is still
    /// in flight are skipped for the same reason, unless the user has asked
    /// for them again (see [`GalleryState::readmit`]). Returns how many were added.
    pub fn reconcile(&mut self, authoritative: &[String]) -> usize {
        let mut added = 0;
        for path in authoritative {
            if self.removing.contains(&normalize(path)) {
                continue;
            }
            if self.append_one(path) {
                added += 1;
            }
        }
        added
    }

    /// Fade-in done (runs one animation frame after insertion).
    pub fn reveal(&mut self, key: &str) -> bool {
        match self.find(key) {
            Some(i) if self.nodes[i].phase == Phase::Entering => {
                self.nodes[i].phase = Phase::Shown;
                true
            }
            _ => false,
        }
    }

    /// Double click: start fading the node out. A node already leaving is
    /// left alone so one gesture never turns into two removals.
    pub fn begin_remove(&mut self, key: &str) -> bool {
        match self.find(key) {
            Some(i) if self.nodes[i].phase != Phase::Leaving => {
                self.nodes[i].phase = Phase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Transition end of a leaving node: detach it and hand back its key so
    /// the caller can tell the store. Further calls for the same key return
    /// `None`.
    pub fn finish_remove(&mut self, key: &str) -> Option<String> {
        let i = self.find(key)?;
        if self.nodes[i].phase != Phase::Leaving {
            return None;
        }
        let node = self.nodes.remove(i);
        self.removing.insert(node.key.clone());
        Some(node.key)
    }

    /// The store answered the remove call, whatever the outcome.
    pub fn settle_removal(&mut self, key: &str) {
        self.removing.remove(&normalize(key));
    }

    /// The user asked for these paths again, so a pending removal no longer
    /// hides them from the next authoritative list.
    pub fn readmit(&mut self, paths: &[String]) {
        for path in paths {
            self.removing.remove(&normalize(path));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn render_all_keeps_order_and_normalizes() {
        let mut gallery = GalleryState::default();
        gallery.render_all(&strings(&["C:\\img\\b.png", "C:\\img\\a.png"]));
        assert_eq!(gallery.keys(), strings(&["C:/img/b.png", "C:/img/a.png"]));
        assert_eq!(gallery.phase_of("C:\\img\\a.png"), Some(Phase::Entering));
        assert_eq!(gallery.phase_of("C:/img/b.png"), Some(Phase::Entering));
    }

    #[test]
    fn render_all_replaces_previous_nodes() {
        let mut gallery = GalleryState::default();
        gallery.render_all(&strings(&["/a.png", "/b.png"]));
        gallery.render_all(&strings(&["/c.png"]));
        assert_eq!(gallery.keys(), strings(&["/c.png"]));
    }

    #[test]
    fn append_one_is_idempotent() {
        let mut gallery = GalleryState::default();
        assert!(gallery.append_one("C:\\img\\a.png"));
        assert!(!gallery.append_one("C:\\img\\a.png"));
        assert!(!gallery.append_one("C:/img/a.png"));
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn reconcile_appends_only_missing_paths() {
        let mut gallery = GalleryState::default();
        gallery.render_all(&strings(&["C:/img/a.png"]));

        let added = gallery.reconcile(&strings(&["C:/img/a.png", "C:/img/b.png", "C:/img/b.png"]));

        assert_eq!(added, 1);
        assert_eq!(gallery.keys(), strings(&["C:/img/a.png", "C:/img/b.png"]));
    }

    #[test]
    fn stale_response_does_not_drop_newer_nodes() {
        let mut gallery = GalleryState::default();
        gallery.reconcile(&strings(&["/a.png", "/b.png"]));
        // older response arriving late
        gallery.reconcile(&strings(&["/a.png"]));
        assert_eq!(gallery.keys(), strings(&["/a.png", "/b.png"]));
    }

    #[test]
    fn reveal_moves_entering_to_shown_once() {
        let mut gallery = GalleryState::default();
        gallery.append_one("/a.png");
        assert!(gallery.reveal("/a.png"));
        assert!(!gallery.reveal("/a.png"));
        assert_eq!(gallery.phase_of("/a.png"), Some(Phase::Shown));
        assert!(!gallery.reveal("/missing.png"));
    }

    #[test]
    fn removal_detaches_exactly_one_node_once() {
        let mut gallery = GalleryState::default();
        gallery.render_all(&strings(&["C:/img/a.png", "C:/img/b.png"]));

        assert!(gallery.begin_remove("C:/img/b.png"));
        assert!(!gallery.begin_remove("C:/img/b.png"));
        assert_eq!(gallery.phase_of("C:/img/b.png"), Some(Phase::Leaving));

        assert_eq!(gallery.finish_remove("C:/img/b.png"), Some("C:/img/b.png".to_string()));
        assert_eq!(gallery.finish_remove("C:/img/b.png"), None);
        assert_eq!(gallery.keys(), strings(&["C:/img/a.png"]));
    }

    #[test]
    fn finish_without_begin_does_nothing() {
        let mut gallery = GalleryState::default();
        gallery.append_one("/a.png");
        assert_eq!(gallery.finish_remove("/a.png"), None);
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn in_flight_removal_is_not_resurrected() {
        let mut gallery = GalleryState::default();
        gallery.render_all(&strings(&["/a.png", "/b.png"]));
        gallery.begin_remove("/b.png");
        gallery.finish_remove("/b.png");

        // an add answered before the store saw the removal
        gallery.reconcile(&strings(&["/a.png", "/b.png"]));
        assert_eq!(gallery.keys(), strings(&["/a.png"]));

        // once settled the user may add it again
        gallery.settle_removal("/b.png");
        gallery.reconcile(&strings(&["/a.png", "/b.png"]));
        assert_eq!(gallery.keys(), strings(&["/a.png", "/b.png"]));
    }

    #[test]
    fn readded_path_shows_while_its_removal_is_pending() {
        let mut gallery = GalleryState::default();
        gallery.render_all(&strings(&["/a.png", "/b.png"]));
        gallery.begin_remove("/b.png");
        gallery.finish_remove("/b.png");

        gallery.readmit(&strings(&["/b.png"]));
        assert_eq!(gallery.reconcile(&strings(&["/a.png", "/b.png"])), 1);

        gallery.settle_removal("/b.png");
        assert_eq!(gallery.keys(), strings(&["/a.png", "/b.png"]));
    }

    #[test]
    fn empty_gallery_reports_empty() {
        let gallery = GalleryState::default();
        assert!(gallery.is_empty());
        assert!(gallery.keys().is_empty());
    }
}
