use leptos::{either::Either, ev::MouseEvent, prelude::*};
use leptos_use::use_window_scroll;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

use crate::content::SiteContent;
use crate::site::Section;

const SCROLLED_PAST: f64 = 50.0;

/// Smooth-scrolls the page to `section`. Missing anchors are ignored.
pub fn scroll_to(section: Section) {
    let el = if let Some(el) = document().get_element_by_id(section.anchor()) {
        el
    } else {
        log::warn!("no element for section #{}", section.anchor());
        return;
    };
    let opts = ScrollIntoViewOptions::new();
    opts.set_behavior(ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[component]
pub fn Header() -> impl IntoView {
    let profile = expect_context::<SiteContent>().profile;
    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| scroll_y.get() > SCROLLED_PAST);
    let (menu_open, set_menu_open) = signal(false);

    let go = move |section: Section| {
        scroll_to(section);
        set_menu_open.set(false);
    };

    let nav_button = move |section: Section, mobile: bool| {
        let class = if mobile {
            "block w-full text-left text-gray-700 hover:text-accent-600 transition-colors duration-300 font-medium py-3 border-b border-gray-100"
        } else {
            "text-gray-700 hover:text-accent-600 transition-colors duration-300 font-medium hover:-translate-y-0.5"
        };
        view! {
            <a
                href=section.href()
                class=class
                on:click=move |ev: MouseEvent| {
                    ev.prevent_default();
                    go(section);
                }
            >
                {section.label()}
            </a>
        }
    };

    view! {
        <header class=move || {
            if scrolled.get() {
                "fixed top-0 w-full z-50 transition-all duration-300 glass backdrop-blur-md py-2 shadow-md"
            } else {
                "fixed top-0 w-full z-50 transition-all duration-300 bg-white/95 backdrop-blur-sm py-4 shadow-sm"
            }
        }>
            <nav class="container mx-auto px-6 flex justify-between items-center">
                <button
                    class="w-12 h-12 rounded-full bg-gradient-to-br from-primary-700 to-accent-600 flex items-center justify-center text-white font-bold text-lg hover:scale-105 transition-transform"
                    aria-label="Back to top"
                    on:click=move |_| go(Section::Home)
                >
                    {profile.initials}
                </button>
                <div class="hidden md:flex items-center space-x-8">
                    {Section::ALL.into_iter().map(|s| nav_button(s, false)).collect_view()}
                    <a
                        href=profile.resume_url
                        target="_blank"
                        rel="noopener noreferrer"
                        class="px-6 py-2 bg-accent-600 hover:bg-accent-700 text-white rounded-full font-medium transition-colors duration-300"
                    >
                        "Resume"
                    </a>
                </div>
                <button
                    class="md:hidden text-gray-700 z-[60] relative p-2 text-2xl"
                    aria-label="Toggle menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || {
                        if menu_open.get() {
                            Either::Left(view! { <i class="extra-close"></i> })
                        } else {
                            Either::Right(view! { <i class="extra-menu"></i> })
                        }
                    }}
                </button>
            </nav>
        </header>
        {move || {
            menu_open
                .get()
                .then(|| {
                    view! {
                        <div
                            class="fixed inset-0 bg-black/20 z-40 md:hidden"
                            on:click=move |_| set_menu_open.set(false)
                        ></div>
                        <div class="fixed top-0 right-0 h-full w-64 bg-white shadow-2xl z-50 md:hidden overflow-y-auto slide-in-right">
                            <div class="p-6 space-y-6 mt-20">
                                {Section::ALL.into_iter().map(|s| nav_button(s, true)).collect_view()}
                                <a
                                    href=profile.resume_url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="block w-full text-center px-6 py-3 bg-accent-600 hover:bg-accent-700 text-white rounded-full font-medium transition-colors duration-300 mt-6"
                                    on:click=move |_| set_menu_open.set(false)
                                >
                                    "Resume"
                                </a>
                            </div>
                        </div>
                    }
                })
        }}
    }
}
