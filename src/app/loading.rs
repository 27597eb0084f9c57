use leptos::prelude::*;

use crate::gate::GatePhase;

#[component]
pub fn LoadingScreen(
    initials: String,
    #[prop(into)] progress: Signal<u8>,
    #[prop(into)] phase: Signal<GatePhase>,
) -> impl IntoView {
    let content_class = move || {
        if phase.get() >= GatePhase::ExitingContent {
            "preloader-content exiting text-center"
        } else {
            "preloader-content text-center"
        }
    };
    let overlay_class = move || {
        if phase.get() >= GatePhase::ExitingOverlay {
            "preloader exiting fixed inset-0 z-50 bg-background flex flex-col items-center justify-center"
        } else {
            "preloader fixed inset-0 z-50 bg-background flex flex-col items-center justify-center"
        }
    };

    view! {
        <div class=overlay_class aria-busy="true">
            <div class="loading-orb glow-orb w-32 h-32 top-1/4 left-1/4"></div>
            <div class="loading-orb glow-orb glow-blue w-24 h-24 top-1/3 right-1/4"></div>
            <div class="loading-orb glow-orb glow-orange w-20 h-20 bottom-1/4 left-1/3"></div>

            <div class=content_class>
                <div class="logo-text mb-12">
                    <h1 class="text-6xl md:text-8xl font-bold gradient-text mb-4">{initials}</h1>
                    <p class="text-lg font-light text-muted-foreground tracking-wider">
                        "Loading Portfolio..."
                    </p>
                </div>

                <div class="w-80 max-w-sm mx-auto">
                    <div class="flex justify-between items-center mb-2">
                        <span class="text-sm text-muted-foreground">"Progress"</span>
                        <span class="text-sm font-mono text-primary">
                            {move || format!("{}%", progress.get())}
                        </span>
                    </div>
                    <div
                        class="h-1 bg-secondary rounded-full overflow-hidden"
                        role="progressbar"
                        aria-valuemin="0"
                        aria-valuemax="100"
                        aria-valuenow=move || progress.get().to_string()
                    >
                        <div
                            class="h-full bg-gradient-to-r from-primary to-blue-accent rounded-full"
                            style:width=move || format!("{}%", progress.get())
                        ></div>
                    </div>
                </div>
            </div>
        </div>
    }
}
