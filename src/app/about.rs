use leptos::{html, prelude::*};
use leptos_use::use_element_hover;

use crate::{
    content::{Profile, Skill},
    trigger::ScrollTrigger,
};

use super::reveal::Reveal;

#[component]
pub fn About(profile: &'static Profile, skills: &'static [Skill]) -> impl IntoView {
    let image_ref = NodeRef::<html::Div>::new();
    let image_hovered = use_element_hover(image_ref);

    view! {
        <section id="about" class="py-32 relative">
            <Reveal trigger=ScrollTrigger::SECTION class="container mx-auto px-6 lg:px-8">
                <div class="grid lg:grid-cols-2 gap-16 items-center">
                    <Reveal class="relative">
                        <div
                            node_ref=image_ref
                            class="profile-image relative w-80 h-80 mx-auto lg:mx-0"
                            class:hovered=move || image_hovered.get()
                        >
                            <div class="absolute inset-0 rounded-full bg-gradient-to-r from-primary via-blue-accent to-orange-accent p-1 animate-pulse">
                                <div class="w-full h-full rounded-full bg-background p-2">
                                    <img
                                        src=profile.image.clone()
                                        alt=format!("{} - {}", profile.name, profile.headline)
                                        class="w-full h-full object-cover rounded-full"
                                    />
                                </div>
                            </div>
                            <div class="absolute -inset-4 rounded-full bg-gradient-to-r from-primary/20 to-blue-accent/20 blur-xl"></div>
                        </div>
                    </Reveal>

                    <div class="space-y-12">
                        <Reveal class="bio-text space-y-6">
                            <h2 class="text-4xl md:text-5xl font-bold gradient-text">"About Me"</h2>
                            {profile
                                .bio
                                .iter()
                                .map(|p| {
                                    view! {
                                        <p class="text-lg text-muted-foreground leading-relaxed">
                                            {p.clone()}
                                        </p>
                                    }
                                })
                                .collect_view()}
                        </Reveal>

                        <Reveal class="skills-grid">
                            <h3 class="text-2xl font-semibold mb-8 text-foreground">
                                "Skills & Technologies"
                            </h3>
                            <div class="grid grid-cols-3 gap-6">
                                {skills
                                    .iter()
                                    .enumerate()
                                    .map(|(i, skill)| {
                                        view! {
                                            <div
                                                class="skill-icon stagger glass-card p-6 text-center hover:scale-105 transition-transform cursor-pointer group"
                                                style=format!("--stagger: {i}")
                                            >
                                                <div class=format!(
                                                    "w-8 h-8 mx-auto mb-3 rounded-full border-2 border-current {}",
                                                    skill.accent,
                                                )></div>
                                                <p class="text-sm font-medium text-foreground">
                                                    {skill.name.clone()}
                                                </p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </Reveal>
                    </div>
                </div>
            </Reveal>
        </section>
    }
}
