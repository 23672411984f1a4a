use leptos::prelude::*;

use crate::content::{NAME, NAV_ITEMS};

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (active, set_active) = signal("home");

    let nav_links = move |mobile: bool| {
        NAV_ITEMS
            .iter()
            .map(|item| {
                let id = item.id;
                view! {
                    <a
                        href=format!("#{id}")
                        class=move || {
                            let base = if mobile {
                                "block px-4 py-2 rounded-md"
                            } else {
                                "px-3 py-2 rounded-md"
                            };
                            if active() == id {
                                format!("{base} text-green-600 font-semibold")
                            } else {
                                format!("{base} text-gray-700 hover:text-green-600")
                            }
                        }
                        on:click=move |_| {
                            set_active(id);
                            set_menu_open(false);
                        }
                    >
                        <span class="mr-1">{item.icon}</span>
                        {item.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="sticky top-0 z-10 bg-white/90 backdrop-blur shadow-sm">
            <div class="mx-auto px-4 sm:px-6 lg:px-8 py-4 max-w-6xl">
                <div class="flex items-center justify-between">
                    <a href="#home" class="text-xl font-extrabold text-green-600">
                        {NAME.split_whitespace().filter_map(|w| w.chars().next()).collect::<String>()}
                    </a>
                    <nav class="hidden md:flex gap-2">{nav_links(false)}</nav>
                    <button
                        class="md:hidden px-3 py-2 rounded-md border border-gray-300"
                        aria-label="Toggle navigation"
                        aria-expanded=move || menu_open().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>
                <Show when=move || menu_open()>
                    <nav class="md:hidden mt-2 flex flex-col">{nav_links(true)}</nav>
                </Show>
            </div>
        </header>
    }
}
