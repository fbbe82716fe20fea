use leptos::prelude::*;

use super::reveal::RevealSection;
use crate::content::{Education, Icon, Role, SiteContent};
use crate::site::Section;

#[component]
pub fn About() -> impl IntoView {
    let content = expect_context::<SiteContent>();

    view! {
        <RevealSection section=Section::About class="py-20 bg-gray-900">
            <div class="space-y-8">
                <div class="reveal-item">
                    <h2 class="text-4xl lg:text-5xl font-bold text-white mb-6">"About Me"</h2>
                    <div class="w-20 h-1 bg-purple-600 mb-8"></div>
                </div>
                <div class="space-y-6 reveal-item">
                    <h3 class="text-2xl font-semibold text-purple-400 flex items-center">
                        <i class=format!("{} mr-3", Icon::GraduationCap.class())></i>
                        "Bio"
                    </h3>
                    <p class="text-gray-300 leading-relaxed text-lg">{content.profile.bio}</p>
                </div>
                <div class="grid md:grid-cols-2 gap-8 reveal-item">
                    <div class="space-y-4">
                        <h4 class="text-xl font-semibold text-purple-400 flex items-center">
                            <i class=format!("{} mr-2", Icon::GraduationCap.class())></i>
                            "Education"
                        </h4>
                        {content.education.into_iter().map(education_card).collect_view()}
                    </div>
                    <div class="space-y-4">
                        <h4 class="text-xl font-semibold text-purple-400 flex items-center">
                            <i class=format!("{} mr-2", Icon::Briefcase.class())></i>
                            "Experience"
                        </h4>
                        {content.internships.into_iter().map(internship_card).collect_view()}
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}

fn education_card(entry: Education) -> impl IntoView {
    view! {
        <div class="p-4 bg-gray-800 rounded-lg border border-gray-700 hover-lift h-32 flex flex-col justify-between">
            <div>
                <h5 class="font-semibold text-white">{entry.institution}</h5>
                <p class="text-purple-400 text-sm">{entry.degree}</p>
            </div>
            <div>
                <p class="text-gray-400 text-sm">{entry.period}</p>
                {entry.grade.map(|g| view! { <p class="text-gray-400 text-sm">{g}</p> })}
            </div>
        </div>
    }
}

fn internship_card(role: Role) -> impl IntoView {
    view! {
        <div class="p-4 bg-gray-800 rounded-lg border border-gray-700 hover-lift h-32 flex flex-col justify-between">
            <div>
                <h5 class="font-semibold text-white">{role.organization}</h5>
                <p class="text-purple-400 text-sm">{role.title}</p>
            </div>
            <p class="text-gray-400 text-sm">{role.period}</p>
        </div>
    }
}
