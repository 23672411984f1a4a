use leptos::prelude::*;

use super::homepage::SectionHeading;
use crate::content::{LinkKind, Project, PROJECTS};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 px-8">
            <div class="max-w-6xl mx-auto">
                <SectionHeading title="Featured Projects" />
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="flex flex-col bg-white rounded-xl shadow hover:shadow-lg transition-shadow p-8">
            <div class="text-4xl mb-4">{project.icon}</div>
            <h3 class="text-xl font-bold mb-3">{project.title}</h3>
            <p class="leading-relaxed mb-4 flex-grow">{project.description}</p>
            <div class="flex flex-wrap gap-2 mb-6">
                {project
                    .tags
                    .iter()
                    .map(|tag| {
                        view! {
                            <span class="rounded-md px-2 py-1 bg-gray-100 text-sm">{*tag}</span>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="flex gap-3">
                {project
                    .links
                    .iter()
                    .map(|link| {
                        let class = match link.kind {
                            LinkKind::Demo => {
                                "px-4 py-2 rounded-md bg-green-600 hover:bg-green-700 text-white text-sm font-semibold"
                            }
                            LinkKind::Code => {
                                "px-4 py-2 rounded-md border border-gray-300 hover:border-green-600 text-sm font-semibold"
                            }
                        };
                        view! {
                            <a href=link.url target="_blank" rel="noopener noreferrer" class=class>
                                {link.label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}
