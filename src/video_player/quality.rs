// SPDX-License-Identifier: MPL-2.0
//! Quality selector model.
//!
//! The menu lists the labels the current video offers, in preference order.
//! The active label is never offered as a switch target.

use crate::domain::video::{QualityLabel, QualityLevels};

/// One selector entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityEntry {
    pub label: QualityLabel,
    pub visible: bool,
}

/// State of the quality selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualityMenu {
    active: Option<QualityLabel>,
    entries: Vec<QualityEntry>,
    open: bool,
}

impl QualityMenu {
    /// Rebuilds the entries for a newly loaded video.
    pub fn rebuild(&mut self, levels: &QualityLevels) {
        self.entries = levels
            .labels()
            .map(|label| QualityEntry {
                label,
                visible: true,
            })
            .collect();
        self.active = None;
        self.open = false;
    }

    /// Marks `label` active and hides it from the list.
    ///
    /// Returns false (and changes nothing) if the label is not listed.
    pub fn activate(&mut self, label: QualityLabel) -> bool {
        if !self.entries.iter().any(|e| e.label == label) {
            return false;
        }
        self.active = Some(label);
        for entry in &mut self.entries {
            entry.visible = entry.label != label;
        }
        true
    }

    #[must_use]
    pub fn active(&self) -> Option<QualityLabel> {
        self.active
    }

    #[must_use]
    pub fn entries(&self) -> &[QualityEntry] {
        &self.entries
    }

    /// Labels currently offered as switch targets.
    pub fn selectable(&self) -> impl Iterator<Item = QualityLabel> + '_ {
        self.entries.iter().filter(|e| e.visible).map(|e| e.label)
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu() -> QualityMenu {
        let levels = QualityLevels::new()
            .with(QualityLabel::P480, "b")
            .with(QualityLabel::P720, "a")
            .with(QualityLabel::P240, "c");
        let mut menu = QualityMenu::default();
        menu.rebuild(&levels);
        menu
    }

    #[test]
    fn active_label_is_hidden() {
        let mut menu = menu();
        assert!(menu.activate(QualityLabel::P720));
        let selectable: Vec<_> = menu.selectable().collect();
        assert_eq!(selectable, vec![QualityLabel::P480, QualityLabel::P240]);

        assert!(menu.activate(QualityLabel::P480));
        let selectable: Vec<_> = menu.selectable().collect();
        assert_eq!(selectable, vec![QualityLabel::P720, QualityLabel::P240]);
        assert_eq!(menu.active(), Some(QualityLabel::P480));
    }

    #[test]
    fn unknown_label_is_a_no_op() {
        let mut menu = menu();
        menu.activate(QualityLabel::P720);
        assert!(!menu.activate(QualityLabel::P360));
        assert_eq!(menu.active(), Some(QualityLabel::P720));
    }

    #[test]
    fn rebuild_closes_and_clears() {
        let mut menu = menu();
        menu.activate(QualityLabel::P240);
        menu.open();
        menu.rebuild(&QualityLevels::new().with(QualityLabel::P360, "d"));
        assert!(!menu.is_open());
        assert_eq!(menu.active(), None);
        assert_eq!(menu.entries().len(), 1);
    }
}
