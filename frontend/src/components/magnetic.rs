use leptos::prelude::*;
use leptos_router::components::A;
use portfolio_site::motion::{Offset, magnetic_offset};

use super::rect_of;

/// Nav link that leans toward the pointer while hovered.
#[component]
pub fn MagneticLink(to: &'static str, children: Children) -> impl IntoView {
    let node = NodeRef::<leptos::html::Span>::new();
    let offset = RwSignal::new(Offset::default());
    let hover = RwSignal::new(false);

    let on_move = move |ev: web_sys::MouseEvent| {
        let Some(el) = node.get() else { return };
        let rect = rect_of(&el.get_bounding_client_rect());
        offset.set(magnetic_offset(rect, ev.client_x() as f64, ev.client_y() as f64));
    };

    view! {
        <span
            node_ref=node
            class="magnetic"
            class:hover=move || hover.get()
            style=move || offset.get().css()
            on:mousemove=on_move
            on:mouseenter=move |_| hover.set(true)
            on:mouseleave=move |_| {
                offset.set(Offset::default());
                hover.set(false);
            }
        >
            <A href=to>{children()}</A>
        </span>
    }
}
