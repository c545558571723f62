//! Shared type graphs for unit tests.

use crate::graph::{ClassHandle, DeclParent, TypeGraph, TypeId, UnitId};
use crate::provider::LiteralValue;

pub(crate) const CONST_PROPS: [&str; 6] = ["name", "message", "number", "fileName", "lineno", "colno"];

/// Nested configuration types around a single exported `Component` class
/// whose constructor takes `a: Props`.
pub(crate) struct GalleryFixture {
    pub graph: TypeGraph,
    pub unit: UnitId,
    pub component: ClassHandle,
    pub props: TypeId,
    pub gallery: TypeId,
    pub page: TypeId,
    pub image: TypeId,
    pub image_type: TypeId,
    pub error_report: TypeId,
}

pub(crate) fn gallery_fixture() -> GalleryFixture {
    let mut graph = TypeGraph::new();
    let unit = graph.add_source_unit("nested-types/index.ts", false);

    let jpg = graph.enum_member("JPG", LiteralValue::Number(0.0));
    graph.document_type(jpg, "JPG description");
    let webp = graph.enum_member("WEBP", LiteralValue::Number(1.0));
    graph.document_type(webp, "WEBP description");
    let gif = graph.enum_member("GIF", LiteralValue::String("gif".to_string()));
    graph.document_type(gif, "GIF description");
    let image_type = graph.named_union("ImageType", vec![jpg, webp, gif]);

    let string = graph.string();
    let number = graph.number();
    let boolean = graph.boolean();
    let any = graph.any();

    let image = graph.object("Image");
    let src = graph.property("src", string);
    graph.document(src, "src description");
    let show_loading = graph.property("showLoading", boolean);
    graph.document(show_loading, "showLoading description");
    let img_type = graph.property("imgType", image_type);
    graph.document(img_type, "imgType description");
    for property in [src, show_loading, img_type] {
        graph.add_property(image, property);
    }

    let page = graph.object("Page");
    let index = graph.property("index", number);
    graph.document(index, "index description");
    let page_image = graph.property("image", image);
    graph.document(page_image, "image description");
    graph.add_property(page, index);
    graph.add_property(page, page_image);

    let gallery = graph.object("Gallery");
    let pages_type = graph.array(page);
    let main_image = graph.property("mainImage", image);
    graph.document(main_image, "mainImage description");
    let pages = graph.property("pages", pages_type);
    graph.document(pages, "pages description");
    graph.add_property(gallery, main_image);
    graph.add_property(gallery, pages);

    let error_report = graph.object("ErrorReport");
    for name in CONST_PROPS {
        let member = graph.mapped_property(name, any, true);
        graph.document(member, "key description");
        graph.add_property(error_report, member);
    }

    let const_members = CONST_PROPS.map(|name| graph.string_literal(name));
    let const_tuple = graph.readonly_tuple(const_members.to_vec());
    let empty_tuple = graph.tuple(Vec::new());
    let any_array = graph.array(any);

    let page_param = graph.parameter("page", page);
    let first = graph.signature(vec![page_param], boolean);
    let page_param = graph.parameter("page", page);
    let is_default = graph.parameter("isDefault", boolean);
    let second = graph.signature(vec![page_param, is_default], boolean);
    let show_page_type = graph.function(vec![first, second]);

    let one_two_three = graph.number_literal(123.0);
    let optional_union = graph.union(vec![boolean, one_two_three]);

    let props = graph.object("Props");
    graph.document_type(props, "Props description");
    let members = [
        graph.property("gallery", gallery),
        graph.property("test", empty_tuple),
        graph.property("test2", any_array),
        graph.optional_property("constProp", const_tuple),
        graph.optional_property("showPage", show_page_type),
        graph.optional_property("report", error_report),
        graph.optional_property("optional", optional_union),
    ];
    let docs = [
        "gallery description",
        "empty array",
        "any array",
        "as const",
        "function",
        "shaped object",
        "inline union",
    ];
    for (member, doc) in members.into_iter().zip(docs) {
        graph.document(member, doc);
        graph.add_property(props, member);
    }

    let component = graph.declare_class(DeclParent::Unit(unit), "Component", true);
    graph.document(component.symbol, "Documentation for C");
    let a = graph.parameter("a", props);
    graph.document(a, "my parameter documentation");
    let constructor = graph.add_constructor(&component, vec![a]);
    graph.document_signature(constructor, "constructor documentation");

    GalleryFixture {
        graph,
        unit,
        component,
        props,
        gallery,
        page,
        image,
        image_type,
        error_report,
    }
}

/// Button component whose `Props` mixes string-literal unions, booleans
/// and callback properties.
pub(crate) fn button_fixture() -> (TypeGraph, ClassHandle) {
    let mut graph = TypeGraph::new();
    let unit = graph.add_source_unit("react/index.tsx", false);

    let string = graph.string();
    let boolean = graph.boolean();
    let void = graph.void();

    let kinds = ["filled", "stroke", "transparent", "semitransparent", "monochrome", "link"]
        .map(|kind| graph.string_literal(kind));
    let kind_union = graph.union(kinds.to_vec());
    let mut colors = ["primary", "secondary", "generic-red"]
        .map(|color| graph.string_literal(color))
        .to_vec();
    colors.push(graph.boolean_literal(false));
    let color_union = graph.union(colors);

    let mouse_event = graph.object("MouseEvent");
    let event = graph.parameter("event", mouse_event);
    let on_click_signature = graph.signature(vec![event], boolean);
    let on_click = graph.function(vec![on_click_signature]);
    let touch_signature = graph.signature(Vec::new(), void);
    let on_touch = graph.function(vec![touch_signature]);

    let props = graph.object("Props");
    let members = [
        ("type", kind_union, "The type of button"),
        ("narrow", boolean, "If the button should fit the smallest space available (\"inline\")"),
        ("color", color_union, "Color applied to the button"),
        ("icon", string, "Name of the icon to show inside the button"),
        ("text", string, "Text to show inside the button"),
        ("isDisabled", boolean, "If the button is disabled"),
        ("onClick", on_click, "\"onClick\" handler attached to the element"),
        ("onTouchStart", on_touch, "\"onTouchStart\" handler attached to the element"),
    ];
    for (name, ty, doc) in members {
        let property = graph.property(name, ty);
        graph.document(property, doc);
        graph.add_property(props, property);
    }

    let button = graph.declare_class(DeclParent::Unit(unit), "Button", false);
    let props_param = graph.parameter("props", props);
    graph.add_constructor(&button, vec![props_param]);

    (graph, button)
}
