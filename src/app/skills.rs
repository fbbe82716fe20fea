use leptos::prelude::*;

use super::{
    reveal::{RevealSection, Revealed},
    SectionHeading,
};
use crate::content::{SiteContent, SkillCategory};
use crate::site::Section;

#[component]
pub fn Skills() -> impl IntoView {
    let skills = expect_context::<SiteContent>().skills;

    view! {
        <RevealSection section=Section::Skills class="py-20 bg-white">
            <div class="space-y-16">
                <SectionHeading title="Skills" light=true />
                <div class="grid md:grid-cols-2 xl:grid-cols-3 gap-8">
                    {skills
                        .into_iter()
                        .enumerate()
                        .map(|(index, category)| view! { <SkillCard category index /> })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn SkillCard(category: SkillCategory, index: usize) -> impl IntoView {
    let Revealed(revealed) = expect_context::<Revealed>();
    // accent bar grows in once the section is on screen, staggered per card
    let bar_style = move || {
        let width = if revealed.get() { "100%" } else { "0" };
        format!(
            "width: {width}; transition: width 1s ease {}ms",
            index * 100
        )
    };

    view! {
        <div class="bg-gray-50 rounded-xl p-6 hover-lift group border border-gray-200 reveal-item">
            <div class="flex items-center mb-6">
                <div class=format!(
                    "p-3 rounded-lg bg-gradient-to-r {} mr-4 text-white",
                    category.accent,
                )>
                    <i class=category.icon.class()></i>
                </div>
                <h3 class="text-xl font-semibold text-gray-900 group-hover:text-accent-600 transition-colors">
                    {category.title}
                </h3>
            </div>
            <div class="space-y-3">
                {category
                    .skills
                    .iter()
                    .enumerate()
                    .map(|(i, skill)| {
                        view! {
                            <div class="flex items-center justify-between p-3 bg-white rounded-lg hover:bg-gray-100 transition-colors border border-gray-200">
                                <span class="text-gray-700 font-medium">{*skill}</span>
                                <span
                                    class="w-2 h-2 bg-accent-500 rounded-full animate-pulse"
                                    style=format!("animation-delay: {}ms", i * 200)
                                ></span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <div
                class=format!("mt-6 h-1 bg-gradient-to-r {} rounded-full", category.accent)
                style=bar_style
            ></div>
        </div>
    }
}
