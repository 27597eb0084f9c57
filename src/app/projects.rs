use leptos::{html, prelude::*};
use leptos_use::use_element_hover;

use crate::content::Project;

use super::reveal::Reveal;

#[component]
pub fn Projects(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section id="projects" class="py-32 relative overflow-hidden">
            <div class="glow-orb w-96 h-96 top-10 -right-48"></div>
            <div class="glow-orb glow-blue w-64 h-64 bottom-20 -left-32"></div>

            <div class="container mx-auto px-6 lg:px-8">
                <Reveal class="projects-title text-center mb-20">
                    <h2 class="text-4xl md:text-6xl font-bold gradient-text mb-6">
                        "Featured Projects"
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "A showcase of my recent work in web development, featuring cutting-edge technologies and innovative solutions."
                    </p>
                </Reveal>

                <div class="projects-wrapper">
                    // desktop: horizontal strip
                    <div class="hidden lg:block overflow-x-auto">
                        <div class="projects-horizontal flex gap-8 pb-8">
                            {projects
                                .iter()
                                .enumerate()
                                .map(|(i, project)| view! { <ProjectCard project index=i /> })
                                .collect_view()}
                        </div>
                    </div>
                    // mobile: grid
                    <Reveal class="lg:hidden projects-grid grid grid-cols-1 md:grid-cols-2 gap-8">
                        {projects
                            .iter()
                            .enumerate()
                            .map(|(i, project)| view! { <ProjectCard project index=i /> })
                            .collect_view()}
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project, index: usize) -> impl IntoView {
    let card_ref = NodeRef::<html::Div>::new();
    let hovered = use_element_hover(card_ref);

    view! {
        <div
            node_ref=card_ref
            class="project-card stagger relative min-w-[350px] lg:min-w-[400px] glass-card p-6 group cursor-pointer"
            class:hovered=move || hovered.get()
            style=format!("--stagger: {index}")
        >
            <div
                class="project-glow absolute -inset-1 bg-gradient-to-r from-primary/30 to-blue-accent/30 rounded-3xl blur-xl"
                class:glowing=move || hovered.get()
            ></div>
            <div class="relative z-10">
                <div class="relative overflow-hidden rounded-2xl mb-6 aspect-video">
                    <img
                        src=project.image.clone()
                        alt=project.title.clone()
                        class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                    />
                    <div class="absolute inset-0 bg-gradient-to-t from-background/60 to-transparent"></div>
                    <div class="absolute top-4 left-4">
                        <span class="px-3 py-1 text-xs font-medium bg-primary/90 text-primary-foreground rounded-full backdrop-blur-sm">
                            {project.category.clone()}
                        </span>
                    </div>
                </div>

                <div class="space-y-4">
                    <div class="flex items-start justify-between gap-4">
                        <h3 class="text-xl font-semibold text-foreground group-hover:text-primary transition-colors">
                            {project.title.clone()}
                        </h3>
                        <span class="text-muted-foreground group-hover:text-primary">"↗"</span>
                    </div>
                    <p class="text-sm text-muted-foreground leading-relaxed">
                        {project.description.clone()}
                    </p>
                    <div class="flex flex-wrap gap-2">
                        {project
                            .tech
                            .iter()
                            .map(|tech| {
                                view! {
                                    <span class="px-2 py-1 text-xs font-medium bg-secondary/50 text-secondary-foreground rounded-md">
                                        {tech.clone()}
                                    </span>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}
