use leptos::{html, prelude::*};
use leptos_use::use_element_hover;

use crate::content::Profile;

#[component]
pub fn Hero(profile: &'static Profile) -> impl IntoView {
    let cta_ref = NodeRef::<html::A>::new();
    let cta_hovered = use_element_hover(cta_ref);

    view! {
        <section class="hero relative min-h-screen flex items-center justify-center overflow-hidden">
            <div class="hero-orb glow-orb w-96 h-96 -top-48 -left-48"></div>
            <div class="hero-orb glow-orb glow-blue w-64 h-64 top-1/3 -right-32"></div>
            <div class="hero-orb glow-orb glow-orange w-48 h-48 bottom-20 left-1/4"></div>

            <div class="container mx-auto px-6 lg:px-8 relative z-10">
                <div class="grid lg:grid-cols-2 gap-12 items-center">
                    <div class="space-y-8">
                        <h1 class="hero-title text-5xl md:text-7xl lg:text-8xl font-bold leading-tight">
                            "Hi, I'm " <span class="gradient-text">{profile.name.clone()}</span>
                            <br />
                            <span class="text-3xl md:text-4xl lg:text-5xl font-light text-muted-foreground">
                                {profile.headline.clone()}
                            </span>
                        </h1>
                        <p class="hero-subtitle text-lg md:text-xl text-muted-foreground font-light leading-relaxed max-w-2xl">
                            {profile.tagline.clone()}
                        </p>
                        <div class="hero-cta">
                            <a
                                node_ref=cta_ref
                                href="#contact"
                                class="cta-button glow-button group inline-flex items-center gap-3 text-lg font-medium"
                                class:hovered=move || cta_hovered.get()
                            >
                                "Hire Me"
                                <span class="transition-transform group-hover:translate-x-1">"→"</span>
                            </a>
                        </div>
                    </div>

                    <div class="spline-container relative h-[600px] rounded-3xl overflow-hidden glass-card">
                        <iframe
                            src=profile.scene_url.clone()
                            title="3D scene"
                            width="100%"
                            height="100%"
                            class="rounded-3xl border-0"
                        ></iframe>
                        <div class="absolute inset-0 bg-gradient-to-t from-background/20 to-transparent pointer-events-none"></div>
                    </div>
                </div>
            </div>
        </section>
    }
}
