use std::time::Duration;

use leptos::{either::Either, prelude::*};
use leptos_meta::Title;
use leptos_use::{use_raf_fn, utils::Pausable, UseRafFnCallbackArgs};

use crate::{
    content::{portfolio, Portfolio},
    gate::{GateEvent, LoadingGate},
};

use super::{
    about::About, contact::Contact, dom, experience::ExperienceSection, footer::Footer,
    hero::Hero, loading::LoadingScreen, projects::Projects, toast::Toast, toast::Toaster,
};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    match portfolio() {
        Ok(content) => Either::Left(view! { <GatedPortfolio content /> }),
        Err(e) => {
            log::error!("{e}");
            Either::Right(view! {
                <main class="min-h-screen flex items-center justify-center">
                    <p class="text-muted-foreground">{e.to_string()}</p>
                </main>
            })
        }
    }
}

/// Holds the page behind the intro overlay until the gate reveals it.
#[component]
fn GatedPortfolio(content: &'static Portfolio) -> impl IntoView {
    let gate = RwSignal::new(LoadingGate::new());
    let loading = Memo::new(move |_| gate.with(LoadingGate::is_loading));
    let scroll_locked = Memo::new(move |_| gate.with(LoadingGate::scroll_locked));
    let content_visible = Memo::new(move |_| gate.with(LoadingGate::content_visible));
    let progress = Signal::derive(move || gate.with(LoadingGate::progress));
    let phase = Signal::derive(move || gate.with(LoadingGate::phase));

    provide_context(Toaster::new());

    let Pausable { pause, .. } = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let delta = Duration::from_secs_f64(args.delta.max(0.0) / 1000.0);
        let events = gate
            .try_update(|g| g.advance_by(delta))
            .unwrap_or_default();
        for event in events {
            match event {
                GateEvent::ProgressComplete => log::debug!("intro progress complete"),
                GateEvent::Dismissed => log::debug!("intro dismissed, scroll unlocked"),
                GateEvent::Revealed => log::info!("portfolio content revealed"),
            }
        }
    });

    Effect::new(move |_| {
        if gate.with(LoadingGate::is_finished) {
            pause();
        }
    });

    Effect::new(move |_| dom::set_scroll_locked(scroll_locked.get()));
    on_cleanup(|| dom::set_scroll_locked(false));

    view! {
        <Title text=content.profile.document_title() />
        <div id="top" class="relative min-h-screen bg-background text-foreground font-inter">
            <Show when=move || loading.get()>
                <LoadingScreen initials=content.profile.initials.clone() progress phase />
            </Show>
            <Show when=move || content_visible.get()>
                <main class="main-content">
                    <Hero profile=&content.profile />
                    <About profile=&content.profile skills=content.skills.as_slice() />
                    <ExperienceSection entries=content.experience.as_slice() />
                    <Projects projects=content.projects.as_slice() />
                    <Contact profile=&content.profile socials=content.socials.as_slice() />
                    <Footer profile=&content.profile nav=content.nav.as_slice() />
                </main>
            </Show>
            <Toast />
        </div>
    }
}
