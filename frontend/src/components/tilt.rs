use leptos::prelude::*;
use portfolio_site::motion::{Tilt, tilt};

use super::rect_of;

/// Glass card that rotates slightly under the pointer.
#[component]
pub fn TiltCard(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();
    let angle = RwSignal::new(Tilt::default());

    let on_move = move |ev: web_sys::MouseEvent| {
        let Some(el) = node.get() else { return };
        let rect = rect_of(&el.get_bounding_client_rect());
        angle.set(tilt(rect, ev.client_x() as f64, ev.client_y() as f64));
    };

    view! {
        <div
            node_ref=node
            class=format!("tilt-card glass {class}")
            style=move || angle.get().css()
            on:mousemove=on_move
            on:mouseleave=move |_| angle.set(Tilt::default())
        >
            {children()}
        </div>
    }
}
