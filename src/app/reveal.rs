use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::trigger::{RevealState, ScrollTrigger};

/// Wraps children in a block that gains `revealed` while its scroll trigger
/// is active. The observer is dropped with the component.
#[component]
pub fn Reveal(
    #[prop(optional)] trigger: ScrollTrigger,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let (revealed, set_revealed) = signal(RevealState::default());

    use_intersection_observer_with_options(
        node,
        move |entries, _| {
            for entry in entries {
                let above = entry.bounding_client_rect().top() < 0.0;
                set_revealed.update(|state| {
                    state.observe(entry.is_intersecting(), above);
                });
            }
        },
        UseIntersectionObserverOptions::default().root_margin(trigger.root_margin()),
    );

    view! {
        <div
            node_ref=node
            class=move || {
                if revealed.with(RevealState::is_visible) {
                    format!("reveal revealed {class}")
                } else {
                    format!("reveal {class}")
                }
            }
        >
            {children()}
        </div>
    }
}
