use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::site::Section;

const REVEAL_THRESHOLD: f64 = 0.1;

/// Whether the enclosing [`RevealSection`] has been scrolled into view yet.
#[derive(Debug, Clone, Copy)]
pub struct Revealed(pub Signal<bool>);

/// Latches to `true` the first time `target` is at least 10% visible, then
/// stops observing.
pub fn use_reveal(target: NodeRef<html::Section>) -> Signal<bool> {
    let (revealed, set_revealed) = signal(false);
    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            if entries.iter().any(|entry| entry.is_intersecting()) {
                set_revealed.set(true);
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );
    Effect::new(move |_| {
        if revealed.get() {
            stop();
        }
    });
    revealed.into()
}

/// A page section that fades its children in once it scrolls into view.
/// Children can read the signal through the [`Revealed`] context.
#[component]
pub fn RevealSection(
    section: Section,
    #[prop(into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Section>::new();
    let revealed = use_reveal(node_ref);
    provide_context(Revealed(revealed));

    view! {
        <section id=section.anchor() node_ref=node_ref class=class>
            <div
                class="container mx-auto px-6 reveal"
                class:reveal-visible=move || revealed.get()
            >
                {children()}
            </div>
        </section>
    }
}
