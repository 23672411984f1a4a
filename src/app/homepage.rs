use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    contact::ContactSection,
    projects::ProjectsSection,
    resume::{ExperienceSection, SkillsSection},
};
use crate::content::{CHANNELS, EDUCATION, HEADLINE, INTRO, NAME, SUMMARY};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <About />
        <SkillsSection />
        <ExperienceSection />
        <ProjectsSection />
        <ContactSection />
        <Footer />
    }
}

#[component]
pub fn SectionHeading(title: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-12">
            <h2 class="text-4xl font-extrabold">{title}</h2>
            <div class="mx-auto mt-4 w-20 h-1 rounded bg-green-500"></div>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <section id="home" class="min-h-[80vh] flex items-center justify-center px-8">
            <div class="text-center max-w-3xl">
                <p class="text-lg font-semibold text-green-600 mb-4">{HEADLINE}</p>
                <h1 class="text-5xl md:text-6xl font-extrabold mb-6 leading-tight">{NAME}</h1>
                <p class="text-xl leading-relaxed mb-12 max-w-xl mx-auto">{INTRO}</p>
                <div class="flex gap-6 justify-center flex-wrap">
                    <a
                        href="#projects"
                        class="px-8 py-4 rounded-lg bg-green-600 hover:bg-green-700 text-white font-semibold"
                    >
                        "View My Work"
                    </a>
                    <a
                        href="#contact"
                        class="px-8 py-4 rounded-lg border-2 border-green-600 text-green-700 hover:bg-green-50 font-semibold"
                    >
                        "💬 Let's Talk"
                    </a>
                </div>
                <div class="flex gap-4 justify-center mt-16 text-3xl">
                    {CHANNELS
                        .iter()
                        .filter(|c| c.icon.starts_with("devicon-"))
                        .map(|c| {
                            view! {
                                <a
                                    href=c.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label=c.label
                                    class="text-gray-700 hover:text-green-600"
                                >
                                    <i class=c.icon></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="py-20 px-8 bg-gray-50">
            <div class="max-w-4xl mx-auto">
                <SectionHeading title="About Me" />
                <div class="flex flex-col items-center gap-8">
                    <img
                        src="/profile.jpg"
                        alt="Profile"
                        class="w-48 h-48 rounded-full object-cover shadow-xl"
                    />
                    <p class="text-lg leading-relaxed text-center">{SUMMARY}</p>
                    <div class="w-full bg-white rounded-xl shadow p-8">
                        <h3 class="text-2xl font-bold mb-4">"Education"</h3>
                        <p class="leading-relaxed">
                            <strong>{EDUCATION.degree}</strong>
                            <br />
                            {EDUCATION.school}
                            <br />
                            <br />
                            {EDUCATION.focus}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

fn copyright_year() -> i32 {
    // Use the build time so the footer doesn't depend on the visitor's clock
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .map(|dt| dt.year())
        .unwrap_or_else(|_| Utc::now().year())
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 px-8 bg-gray-900 text-gray-300 text-center">
            <p class="text-xl font-bold text-white mb-4">{NAME}</p>
            <p class="mb-8">{HEADLINE}</p>
            <p class="border-t border-gray-700 pt-8 m-0">
                {format!("© {} {NAME}. All rights reserved.", copyright_year())}
            </p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copyright_year_from_build_time() {
        let year = copyright_year();
        assert!(year >= 2024, "unexpected year {year}");
    }
}
