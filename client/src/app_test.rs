use super::*;

#[test]
fn settle_keeps_mounted_component() {
    assert_eq!(settle("slider", Ok::<_, MountError>(3)), Some(3));
}

#[test]
fn settle_drops_component_with_missing_markup() {
    assert_eq!(settle::<()>("theme toggle", Err(MountError::MissingElement("themeToggle"))), None);
}

#[test]
fn settle_drops_component_on_browser_failure() {
    assert_eq!(settle::<()>("skill bars", Err(MountError::Js("TypeError".into()))), None);
}

#[test]
fn only_missing_elements_count_as_missing_markup() {
    assert!(MountError::MissingElement("backToTop").is_missing_markup());
    assert!(!MountError::NoDocument.is_missing_markup());
    assert!(!MountError::WrongElement { id: "myCanvas", expected: "canvas" }.is_missing_markup());
    assert!(!MountError::Js("boom".into()).is_missing_markup());
}

#[test]
fn mount_errors_render_readably() {
    assert_eq!(MountError::MissingElement("contactForm").to_string(), "element #contactForm not found");
    assert_eq!(
        MountError::WrongElement { id: "myCanvas", expected: "canvas" }.to_string(),
        "element #myCanvas is not a canvas"
    );
}
