#![cfg(test)]


use sedge::Selector;

test!(selector_element, Ok(Selector::new().element("a")?), "a");
test!(selector_id, Ok(Selector::new().id("id")?), "#id");
test!(selector_class, Ok(Selector::new().class("class")?), ".class");
test!(selector_attribute, Ok(Selector::new().attr("attr")?), "[attr]");
test!(
    selector_attribute_suffix_op,
    Ok(Selector::new().attr("href$=\".png\"")?),
    "[href$=\".png\"]"
);
test!(
    selector_pseudo_class,
    Ok(Selector::new().pseudo_class("hover")?),
    ":hover"
);
test!(
    selector_pseudo_element,
    Ok(Selector::new().pseudo_element("before")?),
    "::before"
);
test!(
    selector_el_class_and,
    Ok(Selector::new().element("a")?.class("class")?),
    "a.class"
);
test!(
    selector_el_id_and,
    Ok(Selector::new().element("a")?.id("id")?),
    "a#id"
);
test!(
    selector_id_classes,
    Ok(Selector::new().id("main")?.class("container")?.class("editable")?),
    "#main.container.editable"
);
test!(
    selector_el_attr_pseudo_class,
    Ok(Selector::new()
        .element("a")?
        .attr("href$=\".png\"")?
        .pseudo_class("focus")?),
    "a[href$=\".png\"]:focus"
);
test!(
    selector_repeated_attributes,
    Ok(Selector::new().attr("a")?.attr("b")?),
    "[a][b]"
);
test!(
    selector_repeated_pseudo_classes,
    Ok(Selector::new().pseudo_class("focus")?.pseudo_class("hover")?),
    ":focus:hover"
);
test!(
    selector_all_six_kinds,
    Ok(Selector::new()
        .element("div")?
        .id("main")?
        .class("container")?
        .class("draggable")?
        .attr("data-id=\"x\"")?
        .pseudo_class("hover")?
        .pseudo_element("first-line")?),
    "div#main.container.draggable[data-id=\"x\"]:hover::first-line"
);
test!(
    selector_functional_pseudo_class,
    Ok(Selector::new().element("tr")?.pseudo_class("nth-of-type(even)")?),
    "tr:nth-of-type(even)"
);

#[test]
fn stringify_resets_the_builder() {
    let mut selector = Selector::new().element("a").unwrap();
    assert_eq!("a", selector.stringify());
    assert_eq!("", selector.stringify());
}

#[test]
fn builder_is_reusable_after_stringify() {
    let mut selector = Selector::new().id("main").unwrap();
    assert_eq!("#main", selector.stringify());

    // the reset cleared the id flag and the rank high-water mark,
    // so an element may start a fresh selector on the same value
    let mut selector = selector.element("table").unwrap();
    assert_eq!("table", selector.stringify());
}

#[test]
fn display_renders_without_resetting() {
    let mut selector = Selector::new().element("a").unwrap().class("b").unwrap();
    assert_eq!("a.b", selector.to_string());
    assert_eq!("a.b", selector.stringify());
}

#[test]
fn new_selector_is_empty() {
    assert!(Selector::new().is_empty());
    assert!(!Selector::new().element("a").unwrap().is_empty());
}
