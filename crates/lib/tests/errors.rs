#![cfg(test)]


use sedge::{ErrorKind, Selector};

static DUPLICATION: &str =
    "Element, id and pseudo-element should not occur more then one time inside the selector";
static ORDER: &str =
    "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element";

error!(
    duplicate_element,
    Ok(Selector::new().element("table")?.element("div")?),
    DUPLICATION
);
error!(
    duplicate_id,
    Ok(Selector::new().id("main")?.id("nav")?),
    DUPLICATION
);
error!(
    duplicate_pseudo_element,
    Ok(Selector::new().pseudo_element("before")?.pseudo_element("after")?),
    DUPLICATION
);
error!(
    duplicate_element_with_parts_between,
    Ok(Selector::new().element("div")?.class("row")?.element("span")?),
    DUPLICATION
);
error!(
    element_after_id,
    Ok(Selector::new().id("main")?.element("div")?),
    ORDER
);
error!(
    id_after_class,
    Ok(Selector::new().class("container")?.id("main")?),
    ORDER
);
error!(
    class_after_attribute,
    Ok(Selector::new().attr("title")?.class("container")?),
    ORDER
);
error!(
    attribute_after_pseudo_class,
    Ok(Selector::new().pseudo_class("hover")?.attr("title")?),
    ORDER
);
error!(
    pseudo_class_after_pseudo_element,
    Ok(Selector::new().pseudo_element("before")?.pseudo_class("hover")?),
    ORDER
);
error!(
    element_after_pseudo_element,
    Ok(Selector::new().pseudo_element("before")?.element("div")?),
    ORDER
);

#[test]
fn error_kinds_are_distinguishable() {
    let duplication = Selector::new()
        .element("a")
        .unwrap()
        .element("b")
        .unwrap_err();
    assert!(matches!(duplication.kind(), ErrorKind::Duplication));

    let order = Selector::new().class("a").unwrap().id("b").unwrap_err();
    assert!(matches!(order.kind(), ErrorKind::Order));
}
