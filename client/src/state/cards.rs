//! Project card click routing.
//!
//! A card is one big link to its project, except for the small sub-links
//! inside it (e.g. "view source"), which open in a new browsing context so
//! the visitor keeps the portfolio open.

#[cfg(test)]
#[path = "cards_test.rs"]
mod cards_test;

use crate::util::navigation::Navigator;

/// Where a click on a card came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOrigin {
    /// Anywhere on the card that is not a sub-link.
    Card,
    /// A sub-link, with its own URL when it carries one.
    SubLink { secondary_url: Option<String> },
}

impl ClickOrigin {
    pub fn sub_link(secondary_url: Option<String>) -> Self {
        Self::SubLink { secondary_url: non_empty(secondary_url) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardAction {
    /// Replace the current page.
    Navigate(String),
    /// Open in a new browsing context.
    OpenNewContext(String),
    Nothing,
}

impl CardAction {
    pub fn dispatch(&self, navigator: &impl Navigator) {
        match self {
            Self::Navigate(url) => navigator.navigate(url),
            Self::OpenNewContext(url) => navigator.open_new_context(url),
            Self::Nothing => {}
        }
    }
}

/// Resolved click: what to do, and whether the event must stop here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardClick {
    pub action: CardAction,
    pub stop_propagation: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectCard {
    project_url: Option<String>,
}

impl ProjectCard {
    /// A card linking to `project_url`; an empty attribute counts as none.
    pub fn new(project_url: Option<String>) -> Self {
        Self { project_url: non_empty(project_url) }
    }

    pub fn resolve(&self, origin: &ClickOrigin) -> CardClick {
        match origin {
            ClickOrigin::SubLink { secondary_url } => {
                let url = secondary_url.as_ref().or(self.project_url.as_ref());
                CardClick {
                    action: url.map_or(CardAction::Nothing, |url| CardAction::OpenNewContext(url.clone())),
                    stop_propagation: true,
                }
            }
            ClickOrigin::Card => CardClick {
                action: self
                    .project_url
                    .as_ref()
                    .map_or(CardAction::Nothing, |url| CardAction::Navigate(url.clone())),
                stop_propagation: false,
            },
        }
    }
}

fn non_empty(url: Option<String>) -> Option<String> {
    url.filter(|url| !url.is_empty())
}
