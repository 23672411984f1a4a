use leptos::prelude::*;

use super::homepage::SectionHeading;
use crate::content::{Experience, Skill, EXPERIENCE, SKILLS};

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 px-8">
            <div class="max-w-4xl mx-auto">
                <SectionHeading title="Technical Skills" />
                <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-4 gap-6">
                    {SKILLS.iter().map(|skill| view! { <SkillChip skill /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillChip(skill: &'static Skill) -> impl IntoView {
    let icon = if skill.is_devicon() {
        view! { <i class=skill.icon></i> }.into_any()
    } else {
        view! { <span>{skill.icon}</span> }.into_any()
    };
    view! {
        <div class="flex flex-col items-center gap-3 p-6 rounded-xl bg-white shadow hover:shadow-lg transition-shadow">
            <div class="text-4xl">{icon}</div>
            <span class="font-semibold text-center">{skill.name}</span>
        </div>
    }
}

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section id="experience" class="py-20 px-8 bg-gray-50">
            <div class="max-w-5xl mx-auto">
                <SectionHeading title="Experience" />
                <div class="flex flex-col gap-8">
                    {EXPERIENCE.iter().map(|job| view! { <Job job /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Job(job: &'static Experience) -> impl IntoView {
    view! {
        <article class="bg-white rounded-xl shadow p-8">
            <div class="flex items-center gap-4 mb-4">
                <img
                    src=job.logo
                    alt=job.company
                    class="w-12 h-12 rounded-xl object-contain bg-white shadow"
                />
                <div>
                    <h3 class="text-xl font-bold">{job.title}</h3>
                    <div class="text-green-700 font-semibold">{job.company}</div>
                    <div class="text-sm text-gray-500">{job.duration}</div>
                </div>
            </div>
            <p class="leading-relaxed mb-4">{job.description}</p>
            <ul class="flex flex-wrap gap-2">
                {job
                    .highlights
                    .iter()
                    .map(|h| {
                        view! {
                            <li class="rounded-md px-3 py-1 bg-green-50 text-green-800 text-sm">
                                {*h}
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </article>
    }
}
