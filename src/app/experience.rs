use leptos::prelude::*;

use super::{reveal::RevealSection, SectionHeading};
use crate::content::{Icon, Role, SiteContent};
use crate::site::Section;

#[component]
pub fn Experience() -> impl IntoView {
    let roles = expect_context::<SiteContent>().roles;

    view! {
        <RevealSection section=Section::Experience class="py-20 bg-gray-50">
            <div class="space-y-12">
                <SectionHeading title="Work Experience" light=true />
                {roles.into_iter().map(|role| view! { <RoleCard role /> }).collect_view()}
            </div>
        </RevealSection>
    }
}

#[component]
fn RoleCard(role: Role) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-8 lg:p-10 border border-gray-200 shadow-lg reveal-item">
            <div class="flex flex-col lg:flex-row lg:items-start lg:justify-between gap-4 mb-6">
                <div class="flex items-start gap-4">
                    <div class="p-3 bg-accent-600 rounded-lg flex-shrink-0 text-white">
                        <i class=Icon::Briefcase.class()></i>
                    </div>
                    <div>
                        <h3 class="text-xl lg:text-2xl font-bold text-gray-900 mb-2">
                            {role.title}
                        </h3>
                        <div class="text-accent-600 font-semibold mb-2">{role.organization}</div>
                    </div>
                </div>
                <div class="text-gray-600 bg-gray-50 px-4 py-2 rounded-lg border border-gray-200 whitespace-nowrap self-start">
                    <span class="text-sm font-medium">{role.period}</span>
                </div>
            </div>
            {role
                .location
                .map(|loc| {
                    view! {
                        <div class="flex items-center gap-2 text-gray-700 mb-6">
                            <i class="extra-location text-accent-600"></i>
                            <span class="font-medium">{loc}</span>
                        </div>
                    }
                })}
            {role
                .summary
                .map(|s| view! { <p class="text-gray-700 leading-relaxed text-base">{s}</p> })}
        </div>
    }
}
