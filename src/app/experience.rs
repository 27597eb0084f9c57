use leptos::prelude::*;

use crate::{
    content::{Experience, SKILL_PREVIEW_LIMIT},
    trigger::ScrollTrigger,
};

use super::reveal::Reveal;

#[component]
pub fn ExperienceSection(entries: &'static [Experience]) -> impl IntoView {
    view! {
        <section id="experience" class="py-32 relative">
            <div class="glow-orb glow-blue w-80 h-80 top-20 -right-40"></div>
            <div class="glow-orb w-64 h-64 bottom-32 -left-32"></div>

            <div class="container mx-auto px-6 lg:px-8">
                <Reveal class="experience-title text-center mb-20">
                    <h2 class="text-4xl md:text-6xl font-bold gradient-text mb-6">
                        "Professional Experience"
                    </h2>
                    <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                        "My journey in technology, from internships to leadership roles, showcasing growth in development and project coordination."
                    </p>
                </Reveal>

                <Reveal
                    trigger=ScrollTrigger::SECTION
                    class="experience-timeline relative max-w-4xl mx-auto"
                >
                    <div class="timeline-line absolute left-8 top-0 w-0.5 h-full bg-gradient-to-b from-primary via-blue-accent to-orange-accent"></div>
                    <div class="space-y-12">
                        {entries
                            .iter()
                            .enumerate()
                            .map(|(i, entry)| view! { <ExperienceCard entry index=i /> })
                            .collect_view()}
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn ExperienceCard(entry: &'static Experience, index: usize) -> impl IntoView {
    let (shown, hidden) = entry.skill_preview(SKILL_PREVIEW_LIMIT);
    view! {
        <div class="experience-card stagger relative pl-20" style=format!("--stagger: {index}")>
            <div class="absolute left-6 top-6 w-4 h-4 bg-background border-2 border-primary rounded-full z-10">
                <div class="absolute inset-1 bg-primary rounded-full animate-pulse"></div>
            </div>

            <div class="glass-card p-8 group hover:scale-[1.02] transition-all duration-300">
                <div class="flex items-start gap-4 mb-4">
                    <div class=format!("p-3 bg-secondary/50 rounded-xl {}", entry.accent)>
                        <div class="w-6 h-6 rounded-md border-2 border-current"></div>
                    </div>
                    <div class="flex-1">
                        <h3 class="text-xl font-semibold text-foreground mb-1 group-hover:text-primary transition-colors">
                            {entry.position.clone()}
                        </h3>
                        <p class="text-primary font-medium mb-2">{entry.company.clone()}</p>
                        <div class="flex flex-wrap items-center gap-4 text-sm text-muted-foreground mb-3">
                            <span>"📅 " {entry.duration.clone()}</span>
                            <span>"📍 " {entry.location.clone()}</span>
                            <span class="px-2 py-1 bg-primary/10 text-primary rounded-md text-xs font-medium">
                                {entry.engagement.clone()}
                            </span>
                        </div>
                        <p class="text-muted-foreground leading-relaxed mb-4">
                            {entry.description.clone()}
                        </p>
                    </div>
                </div>
                <div class="flex flex-wrap gap-2">
                    {shown
                        .iter()
                        .map(|skill| {
                            view! {
                                <span class="px-3 py-1 text-xs font-medium bg-secondary/30 text-secondary-foreground rounded-full border border-border/50">
                                    {skill.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                    {(hidden > 0)
                        .then(|| {
                            view! {
                                <span class="px-3 py-1 text-xs font-medium text-muted-foreground">
                                    {format!("+{hidden} more")}
                                </span>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
