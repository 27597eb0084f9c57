use leptos::prelude::*;

use crate::{
    content::{build_year, NavLink, Profile},
    trigger::ScrollTrigger,
};

use super::{dom, reveal::Reveal};

#[component]
pub fn Footer(profile: &'static Profile, nav: &'static [NavLink]) -> impl IntoView {
    let to_top = move |_: leptos::ev::MouseEvent| dom::scroll_to_top();

    view! {
        <footer class="relative py-16 border-t border-border/50">
            <div class="footer-particle glow-orb w-32 h-32 top-10 left-1/4"></div>
            <div class="footer-particle glow-orb glow-blue w-24 h-24 bottom-10 right-1/3"></div>
            <div class="footer-particle glow-orb glow-orange w-20 h-20 top-20 right-1/4"></div>

            <Reveal
                trigger=ScrollTrigger::FOOTER
                class="container mx-auto px-6 lg:px-8 relative z-10"
            >
                <div class="text-center space-y-8">
                    <button
                        on:click=to_top
                        class="text-3xl font-bold gradient-text hover:scale-105 transition-transform duration-300 cursor-pointer"
                    >
                        {profile.initials.clone()}
                    </button>

                    <nav>
                        <ul class="flex flex-wrap justify-center gap-8 md:gap-12">
                            {nav
                                .iter()
                                .map(|link| {
                                    view! {
                                        <li>
                                            <a
                                                href=link.href.clone()
                                                class="footer-nav-link text-muted-foreground hover:text-primary transition-colors duration-300 font-medium"
                                            >
                                                {link.label.clone()}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </nav>

                    <div class="w-32 h-px bg-gradient-to-r from-transparent via-border to-transparent mx-auto"></div>

                    <div class="space-y-4">
                        <p class="text-muted-foreground text-sm">
                            "Made with " <span class="text-red-500 animate-pulse">"♥"</span>
                            " and " <span class="text-primary">"</>"</span> " by "
                            {profile.name.clone()}
                        </p>
                        <p class="text-muted-foreground text-sm">
                            {profile.copyright_line(build_year())}
                        </p>
                    </div>

                    <div class="pt-4">
                        <button
                            on:click=to_top
                            class="group inline-flex flex-col items-center gap-2 text-muted-foreground hover:text-primary transition-colors duration-300"
                        >
                            <div class="w-6 h-6 rounded-full border border-current flex items-center justify-center">
                                <div class="w-2 h-2 rounded-full bg-current"></div>
                            </div>
                            <span class="text-xs font-medium">"Back to top"</span>
                        </button>
                    </div>
                </div>
            </Reveal>
        </footer>
    }
}
