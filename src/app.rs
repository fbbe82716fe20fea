mod about;
mod achievements;
mod contact;
mod experience;
mod footer;
mod header;
mod hero;
mod projects;
mod reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::SiteContent;
use about::About;
use achievements::Achievements;
use contact::Contact;
use experience::Experience;
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let content = SiteContent::default();
    let name = content.profile.name;
    let description = content.profile.tagline;
    provide_context(content);

    view! {
        <Title formatter=move |title| format!("{name} - {title}") />
        <Meta name="description" content=description />

        <Router>
            <Header />
            <main class="flex flex-col w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}

/// The whole portfolio, one section after another.
#[component]
fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <Experience />
        <Projects />
        <Skills />
        <Achievements />
        <Contact />
    }
}

/// Section heading with the accent rule underneath.
#[component]
fn SectionHeading(
    title: &'static str,
    #[prop(optional)] blurb: Option<&'static str>,
    #[prop(optional)] light: bool,
) -> impl IntoView {
    let (title_class, rule_class) = if light {
        (
            "text-3xl lg:text-4xl font-bold text-gray-900 mb-3",
            "w-20 h-1 bg-accent-600 mx-auto",
        )
    } else {
        (
            "text-4xl lg:text-5xl font-bold text-white mb-4",
            "w-20 h-1 bg-purple-600 mx-auto",
        )
    };
    view! {
        <div class="text-center reveal-item">
            <h2 class=title_class>{title}</h2>
            {blurb.map(|b| view! { <p class="text-gray-400 text-lg max-w-2xl mx-auto mb-8">{b}</p> })}
            <div class=rule_class></div>
        </div>
    }
}
