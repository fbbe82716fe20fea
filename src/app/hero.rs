use leptos::prelude::*;

use super::header::scroll_to;
use crate::content::SiteContent;
use crate::site::Section;

#[component]
pub fn Hero() -> impl IntoView {
    let profile = expect_context::<SiteContent>().profile;

    view! {
        <section id=Section::Home.anchor() class="relative min-h-screen flex items-center animated-bg">
            <div class="container mx-auto px-6 grid lg:grid-cols-2 gap-12 items-center">
                <div class="space-y-8 fade-up">
                    <div class="space-y-6">
                        <p class="text-purple-400 text-lg font-semibold tracking-wide uppercase">
                            "Hello! I'm"
                        </p>
                        <h1 class="text-5xl lg:text-7xl font-black text-white leading-tight tracking-tight">
                            {profile.name}
                        </h1>
                        <p class="text-xl lg:text-2xl text-gray-300 max-w-2xl font-medium leading-relaxed">
                            {profile.headline}
                        </p>
                    </div>
                    <p class="text-lg text-gray-400 max-w-2xl leading-relaxed font-light">
                        {profile.tagline}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-6 pt-4">
                        <button
                            class="px-8 py-4 bg-purple-600 hover:bg-purple-700 text-white rounded-full font-semibold text-lg transition-all duration-300 hover-lift shadow-lg"
                            on:click=move |_| scroll_to(Section::Contact)
                        >
                            "Contact Me"
                        </button>
                        <button
                            class="px-8 py-4 border-2 border-purple-400 text-purple-400 hover:bg-purple-400 hover:text-white rounded-full font-semibold text-lg transition-all duration-300 hover-lift shadow-lg"
                            on:click=move |_| scroll_to(Section::Projects)
                        >
                            "View Projects"
                        </button>
                    </div>
                </div>
                <div class="hidden lg:flex flex-col items-center text-center space-y-6 zoom-in">
                    <div class="w-96 h-96 rounded-full bg-gradient-to-br from-purple-600 to-blue-600 p-1 hover:scale-105 transition-transform duration-300">
                        <img
                            src=profile.portrait
                            alt=profile.name
                            class="w-full h-full rounded-full object-cover"
                        />
                    </div>
                    <div class="flex flex-wrap justify-center gap-3 mt-6">
                        {profile
                            .badges
                            .iter()
                            .map(|badge| {
                                view! {
                                    <span class="px-5 py-3 bg-purple-600 hover:bg-purple-700 text-white text-sm font-semibold rounded-full transition-all duration-300 shadow-lg">
                                        {*badge}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
            <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce">
                <div class="w-6 h-10 border-2 border-white/30 rounded-full flex justify-center">
                    <div class="w-1 h-3 bg-white/60 rounded-full mt-2"></div>
                </div>
            </div>
        </section>
    }
}
