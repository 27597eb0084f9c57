use std::time::Duration;

use leptos::{either::Either, ev::SubmitEvent, prelude::*};

use crate::{
    contact::{ContactError, ContactForm, Field, SIMULATED_SEND_DELAY},
    content::{Profile, SocialLink},
};

use super::{reveal::Reveal, toast::Toaster};

const BOUNCE_DURATION: Duration = Duration::from_millis(400);

#[component]
pub fn Contact(profile: &'static Profile, socials: &'static [SocialLink]) -> impl IntoView {
    let form = RwSignal::new(ContactForm::default());
    let (error, set_error) = signal(None::<String>);
    let (bounce, set_bounce) = signal(false);
    let sending = Memo::new(move |_| form.with(ContactForm::is_sending));
    let toaster = expect_context::<Toaster>();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let started = form
            .try_update(ContactForm::begin_submit)
            .unwrap_or(Err(ContactError::Busy));
        if let Err(e) = started {
            log::debug!("contact submission rejected: {e}");
            set_error.set(Some(e.to_string()));
            return;
        }
        set_error.set(None);
        log::info!("sending contact message");
        set_timeout(
            move || {
                if let Some(Some(notice)) = form.try_update(ContactForm::finish_submit) {
                    toaster.show(notice);
                    set_bounce.set(true);
                    set_timeout(move || set_bounce.set(false), BOUNCE_DURATION);
                }
            },
            SIMULATED_SEND_DELAY,
        );
    };

    view! {
        <section id="contact" class="py-32 relative">
            <div class="glow-orb w-64 h-64 top-20 -left-32"></div>
            <div class="glow-orb glow-orange w-96 h-96 bottom-10 -right-48"></div>

            <div class="container mx-auto px-6 lg:px-8">
                <div class="max-w-4xl mx-auto">
                    <Reveal class="contact-title text-center mb-16">
                        <h2 class="text-4xl md:text-6xl font-bold gradient-text mb-6">
                            "Let's Connect"
                        </h2>
                        <p class="text-lg text-muted-foreground max-w-2xl mx-auto">
                            "Ready to bring your ideas to life? Let's discuss your next project and create something amazing together."
                        </p>
                    </Reveal>

                    <div class="grid lg:grid-cols-2 gap-16 items-start">
                        <Reveal class="contact-form glass-card p-8">
                            <h3 class="text-2xl font-semibold mb-8 text-foreground">
                                "Send a Message"
                            </h3>
                            <form on:submit=on_submit class="space-y-6">
                                <FormField form field=Field::Name placeholder="Your full name" />
                                <FormField
                                    form
                                    field=Field::Email
                                    placeholder="your.email@example.com"
                                />
                                <FormField
                                    form
                                    field=Field::Message
                                    placeholder="Tell me about your project..."
                                />
                                {move || {
                                    error
                                        .get()
                                        .map(|e| {
                                            view! {
                                                <p class="text-sm text-red-400" role="alert">
                                                    {e}
                                                </p>
                                            }
                                        })
                                }}
                                <button
                                    type="submit"
                                    disabled=move || sending.get()
                                    class="submit-btn w-full glow-button group disabled:opacity-50 disabled:cursor-not-allowed"
                                    class:bounce=move || bounce.get()
                                >
                                    <span class="flex items-center justify-center gap-3">
                                        {move || {
                                            if sending.get() {
                                                Either::Left(view! {
                                                    <span class="w-5 h-5 border-2 border-current border-t-transparent rounded-full animate-spin"></span>
                                                    "Sending..."
                                                })
                                            } else {
                                                Either::Right(view! {
                                                    <span class="transition-transform group-hover:translate-x-1">
                                                        "➤"
                                                    </span>
                                                    "Send Message"
                                                })
                                            }
                                        }}
                                    </span>
                                </button>
                            </form>
                        </Reveal>

                        <div class="space-y-12">
                            <div class="glass-card p-8">
                                <h3 class="text-2xl font-semibold mb-6 text-foreground">
                                    "Get in Touch"
                                </h3>
                                <div class="flex items-center gap-4">
                                    <div class="p-3 bg-primary/10 rounded-xl text-primary">"✉"</div>
                                    <div>
                                        <p class="font-medium text-foreground">"Email"</p>
                                        <a
                                            href=format!("mailto:{}", profile.email)
                                            class="text-muted-foreground hover:text-primary"
                                        >
                                            {profile.email.clone()}
                                        </a>
                                    </div>
                                </div>
                            </div>

                            <Reveal class="social-links glass-card p-8">
                                <h3 class="text-2xl font-semibold mb-6 text-foreground">
                                    "Follow Me"
                                </h3>
                                <div class="flex gap-4">
                                    {socials
                                        .iter()
                                        .enumerate()
                                        .map(|(i, social)| {
                                            view! {
                                                <a
                                                    href=social.url.clone()
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    aria-label=social.label.clone()
                                                    class="social-icon stagger p-4 bg-secondary/50 rounded-xl text-muted-foreground text-2xl transition-all duration-300 hover:scale-110 hover:bg-secondary"
                                                    style=format!("--stagger: {i}")
                                                >
                                                    <i class=social.icon.clone()></i>
                                                    <span class="sr-only">{social.label.clone()}</span>
                                                </a>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Reveal>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormField(form: RwSignal<ContactForm>, field: Field, placeholder: &'static str) -> impl IntoView {
    let value = move || form.with(|f| f.draft.get(field).to_string());
    let on_input = move |ev: leptos::ev::Event| form.update(|f| f.draft.set(field, event_target_value(&ev)));
    let input_class = "w-full px-4 py-3 bg-secondary/50 border border-border rounded-xl text-foreground placeholder-muted-foreground focus:outline-none focus:ring-2 focus:ring-primary/50 input-glow transition-all duration-300";

    let input_type = if field == Field::Email { "email" } else { "text" };

    let control = match field {
        Field::Message => Either::Left(view! {
            <textarea
                id=field.id()
                name=field.id()
                rows="5"
                required
                placeholder=placeholder
                class=format!("{input_class} resize-none")
                prop:value=value
                on:input=on_input
            ></textarea>
        }),
        Field::Name | Field::Email => Either::Right(view! {
            <input
                type=input_type
                id=field.id()
                name=field.id()
                required
                placeholder=placeholder
                class=input_class
                prop:value=value
                on:input=on_input
            />
        }),
    };

    view! {
        <div class="form-input">
            <label for=field.id() class="block text-sm font-medium text-foreground mb-2">
                {field.label()}
            </label>
            {control}
        </div>
    }
}
