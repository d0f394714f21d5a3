//! Helpers for driving a `VirtualDom` with synthetic events in tests.

use dioxus::dioxus_core::{AttributeValue, ElementId, Mutation, Mutations};
use dioxus::prelude::*;
use dioxus_html::{
    set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
};
use std::any::Any;
use std::rc::Rc;

/// Element whose dynamic `id` attribute was set to `id` during the rebuild.
pub(crate) fn element_with_id(mutations: &Mutations, id: &str) -> ElementId {
    mutations
        .edits
        .iter()
        .find_map(|edit| match edit {
            Mutation::SetAttribute {
                name: "id",
                value: AttributeValue::Text(value),
                id: element,
                ..
            } if value == id => Some(*element),
            _ => None,
        })
        .unwrap_or_else(|| panic!("no element with id {id}"))
}

/// Elements that registered a listener for `event`, in creation order.
pub(crate) fn listeners(mutations: &Mutations, event: &str) -> Vec<ElementId> {
    mutations
        .edits
        .iter()
        .filter_map(|edit| match edit {
            Mutation::NewEventListener { name, id } if name == event => Some(*id),
            _ => None,
        })
        .collect()
}

pub(crate) fn click(dom: &VirtualDom, element: ElementId) {
    set_event_converter(Box::new(SerializedHtmlEventConverter));
    let event = Event::new(
        Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default())) as Rc<dyn Any>,
        true,
    );
    dom.runtime().handle_event("click", event, element);
}
