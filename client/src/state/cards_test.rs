use std::cell::RefCell;

use super::*;

#[derive(Default)]
struct FakeNavigator {
    calls: RefCell<Vec<String>>,
}

impl Navigator for FakeNavigator {
    fn navigate(&self, url: &str) {
        self.calls.borrow_mut().push(format!("same {url}"));
    }

    fn open_new_context(&self, url: &str) {
        self.calls.borrow_mut().push(format!("new {url}"));
    }
}

fn card(url: &str) -> ProjectCard {
    ProjectCard::new(Some(url.to_owned()))
}

#[test]
fn body_click_navigates_in_place() {
    let click = card("projects/weather.html").resolve(&ClickOrigin::Card);
    assert_eq!(click.action, CardAction::Navigate("projects/weather.html".into()));
    assert!(!click.stop_propagation);
}

#[test]
fn body_click_without_url_is_inert() {
    let click = ProjectCard::default().resolve(&ClickOrigin::Card);
    assert_eq!(click.action, CardAction::Nothing);
    assert!(!click.stop_propagation);
}

#[test]
fn sub_link_with_secondary_url_opens_it_in_new_context() {
    let origin = ClickOrigin::sub_link(Some("https://github.com/me/weather".into()));
    let click = card("https://weather.example").resolve(&origin);
    assert_eq!(click.action, CardAction::OpenNewContext("https://github.com/me/weather".into()));
    assert!(click.stop_propagation);
}

#[test]
fn sub_link_without_secondary_url_opens_project_in_new_context() {
    let click = card("https://weather.example").resolve(&ClickOrigin::sub_link(None));
    assert_eq!(click.action, CardAction::OpenNewContext("https://weather.example".into()));
    assert!(click.stop_propagation);
}

#[test]
fn sub_link_on_card_without_urls_only_stops_propagation() {
    let click = ProjectCard::new(None).resolve(&ClickOrigin::sub_link(None));
    assert_eq!(click.action, CardAction::Nothing);
    assert!(click.stop_propagation);
}

#[test]
fn empty_urls_count_as_missing() {
    assert_eq!(ProjectCard::new(Some(String::new())).project_url, None);
    assert_eq!(ClickOrigin::sub_link(Some(String::new())), ClickOrigin::SubLink { secondary_url: None });
}

#[test]
fn whitespace_urls_are_still_followed() {
    let spaced = ProjectCard::new(Some("  ".into()));
    assert_eq!(spaced.project_url.as_deref(), Some("  "));
    assert_eq!(spaced.resolve(&ClickOrigin::Card).action, CardAction::Navigate("  ".into()));

    let origin = ClickOrigin::sub_link(Some(" ".into()));
    let click = card("https://weather.example").resolve(&origin);
    assert_eq!(click.action, CardAction::OpenNewContext(" ".into()));
}

#[test]
fn dispatch_picks_browsing_context() {
    let navigator = FakeNavigator::default();
    CardAction::Navigate("a.html".into()).dispatch(&navigator);
    CardAction::OpenNewContext("b.html".into()).dispatch(&navigator);
    CardAction::Nothing.dispatch(&navigator);
    assert_eq!(*navigator.calls.borrow(), vec!["same a.html".to_owned(), "new b.html".to_owned()]);
}
