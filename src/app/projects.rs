use leptos::prelude::*;

use super::{reveal::RevealSection, SectionHeading};
use crate::content::{Icon, Project, SiteContent};
use crate::site::Section;

#[component]
pub fn Projects() -> impl IntoView {
    let projects = expect_context::<SiteContent>().projects;

    view! {
        <RevealSection section=Section::Projects class="py-20 bg-gray-800">
            <div class="space-y-16">
                <SectionHeading
                    title="Projects"
                    blurb="Here are some of the projects I've worked on, showcasing my skills in various technologies and problem domains."
                />
                <div class="grid md:grid-cols-2 xl:grid-cols-3 gap-8">
                    {projects
                        .into_iter()
                        .map(|project| view! { <ProjectCard project /> })
                        .collect_view()}
                </div>
            </div>
        </RevealSection>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <article
            class="bg-gray-900 rounded-xl overflow-hidden hover-lift group flex flex-col h-full reveal-item"
            data-category=project.category
        >
            <div class="relative overflow-hidden">
                <img
                    src=project.image
                    alt=project.title
                    loading="lazy"
                    class="w-full h-48 object-cover transition-transform duration-300 group-hover:scale-110"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-gray-900/80 to-transparent opacity-0 group-hover:opacity-100 transition-opacity duration-300">
                    <div class="absolute bottom-4 right-4 flex space-x-2">
                        <a
                            href=project.source_url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="p-2 bg-gray-800 rounded-full text-white hover:bg-gray-700 transition-colors"
                            aria-label="Source code"
                        >
                            <i class=Icon::Github.class()></i>
                        </a>
                        {project
                            .live_url
                            .map(|url| {
                                view! {
                                    <a
                                        href=url
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="p-2 bg-purple-600 rounded-full text-white hover:bg-purple-700 transition-colors"
                                        aria-label="Live demo"
                                    >
                                        <i class="extra-link"></i>
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </div>
            <div class="p-6 flex flex-col flex-grow">
                <h3 class="text-xl font-semibold text-white mb-3 group-hover:text-purple-400 transition-colors">
                    {project.title}
                </h3>
                <p class="text-gray-400 mb-4 leading-relaxed flex-grow text-sm">
                    {project.description}
                </p>
                <div class="flex flex-wrap gap-2 mt-auto">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-purple-600/20 text-purple-400 text-xs rounded-full border border-purple-600/30">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </article>
    }
}
