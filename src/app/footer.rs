use leptos::prelude::*;

use super::header::scroll_to;
use crate::content::SiteContent;
use crate::site::{copyright_year, Section};

#[component]
pub fn Footer() -> impl IntoView {
    let profile = expect_context::<SiteContent>().profile;
    let year = copyright_year().map(|y| format!("© {y} ")).unwrap_or_default();

    view! {
        <footer class="bg-gray-950 py-8 relative">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row justify-between items-center">
                    <div class="flex items-center space-x-2 text-gray-400 mb-4 md:mb-0">
                        <span>{year} {profile.name}</span>
                        <i class="extra-heart text-red-500 animate-pulse"></i>
                    </div>
                    <div class="flex items-center gap-4">
                        <a
                            href=profile.github_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-gray-400 hover:text-white text-2xl"
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-plain"></i>
                        </a>
                        <a
                            href=profile.linkedin_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-gray-400 hover:text-white text-2xl"
                            aria-label="LinkedIn Profile"
                        >
                            <i class="devicon-linkedin-plain"></i>
                        </a>
                        <button
                            class="p-3 bg-purple-600 hover:bg-purple-700 text-white rounded-full transition-colors duration-300 hover-lift"
                            aria-label="Scroll to top"
                            on:click=move |_| scroll_to(Section::Home)
                        >
                            <i class="extra-arrow-up"></i>
                        </button>
                    </div>
                </div>
                <div class="mt-8 h-px bg-gradient-to-r from-transparent via-purple-500 to-transparent"></div>
            </div>
        </footer>
    }
}
