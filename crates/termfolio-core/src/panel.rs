use serde::Serialize;

use crate::actions::Direction;
use crate::model::PanelKind;
use crate::model::PanelPayload;

/// Which structured panel is on screen, and the page for paginated kinds.
///
/// The page is always 0 unless an Experience panel is showing, in which case
/// it indexes into its items.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PanelState {
    #[default]
    Empty,
    Showing { payload: PanelPayload, page: usize },
}

impl PanelState {
    /// Replaces whatever is showing and rewinds to the first page.
    pub fn show(&mut self, payload: PanelPayload) {
        *self = Self::Showing { payload, page: 0 };
    }

    /// Returns whether a panel was showing.
    pub fn dismiss(&mut self) -> bool {
        let was_showing = self.is_showing();
        *self = Self::Empty;
        was_showing
    }

    /// Steps through Experience pages. Returns whether the page changed.
    pub fn paginate(&mut self, direction: Direction) -> bool {
        let Some((len, page)) = self.pages() else {
            return false;
        };
        let target = match direction {
            Direction::Backward => page.checked_sub(1),
            Direction::Forward => Some(page + 1).filter(|next| *next < len),
        };
        match target {
            Some(target) => self.set_page(target),
            None => false,
        }
    }

    pub fn select_page(&mut self, index: usize) -> bool {
        match self.pages() {
            Some((len, page)) if index < len && index != page => self.set_page(index),
            _ => false,
        }
    }

    pub fn active(&self) -> Option<&PanelPayload> {
        match self {
            Self::Empty => None,
            Self::Showing { payload, .. } => Some(payload),
        }
    }

    pub fn kind(&self) -> Option<PanelKind> {
        self.active().map(PanelPayload::kind)
    }

    pub fn page(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Showing { page, .. } => *page,
        }
    }

    pub fn is_showing(&self) -> bool {
        matches!(self, Self::Showing { .. })
    }

    fn pages(&self) -> Option<(usize, usize)> {
        match self {
            Self::Showing { payload, page } if payload.kind().is_paginated() => {
                Some((payload.len(), *page))
            }
            _ => None,
        }
    }

    fn set_page(&mut self, target: usize) -> bool {
        if let Self::Showing { page, .. } = self {
            *page = target;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::ContactInfo;
    use crate::model::Experience;

    fn experience(count: usize) -> PanelPayload {
        PanelPayload::Experience(
            (0..count)
                .map(|index| Experience {
                    title: format!("Role {index}"),
                    company: "Acme".to_string(),
                    period: "2020 - 2021".to_string(),
                    responsibilities: Vec::new(),
                })
                .collect(),
        )
    }

    fn contact() -> PanelPayload {
        PanelPayload::Contact(ContactInfo {
            email: "me@example.com".to_string(),
            linkedin: String::new(),
            github: String::new(),
            website: String::new(),
            message: String::new(),
        })
    }

    #[test]
    fn experience_pages_clamp_at_both_ends() {
        let mut panel = PanelState::default();
        panel.show(experience(4));

        assert!(!panel.paginate(Direction::Backward));
        assert_eq!(panel.page(), 0);

        let mut pages = Vec::new();
        for _ in 0..4 {
            panel.paginate(Direction::Forward);
            pages.push(panel.page());
        }
        assert_eq!(pages, vec![1, 2, 3, 3]);
    }

    #[test]
    fn other_kinds_ignore_pagination() {
        let mut panel = PanelState::default();
        assert!(!panel.paginate(Direction::Forward));

        panel.show(contact());
        assert!(!panel.paginate(Direction::Forward));
        assert!(!panel.select_page(0));
        assert_eq!(panel.page(), 0);
    }

    #[test]
    fn show_rewinds_to_first_page() {
        let mut panel = PanelState::default();
        panel.show(experience(3));
        assert!(panel.select_page(2));

        panel.show(experience(3));
        assert_eq!(panel.page(), 0);
        assert_eq!(panel.kind(), Some(PanelKind::Experience));
    }

    #[test]
    fn select_page_rejects_out_of_range() {
        let mut panel = PanelState::default();
        panel.show(experience(2));
        assert!(!panel.select_page(2));
        assert!(!panel.select_page(0));
        assert!(panel.select_page(1));
        assert_eq!(panel.page(), 1);
    }

    #[test]
    fn dismiss_reports_prior_state() {
        let mut panel = PanelState::default();
        assert!(!panel.dismiss());
        panel.show(contact());
        assert!(panel.dismiss());
        assert_eq!(panel, PanelState::Empty);
        assert_eq!(panel.page(), 0);
    }
}
