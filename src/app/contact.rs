use chrono::Utc;
use leptos::{
    either::Either,
    ev::SubmitEvent,
    prelude::*,
    task::spawn_local,
};
use strum::IntoEnumIterator;

use super::reveal::Reveal;
use crate::{
    config::ContactConfig,
    contact::{ContactForm, Field, Purpose, SubmissionState, Transport, WebhookTransport},
    content::{CONTACT_EMAIL, CONTACT_LOCATION, CONTACT_PHONE, SOCIAL_LINKS},
    motion::CONTACT_CARD,
};

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-background/50 border rounded-lg text-foreground placeholder-foreground/40 focus:outline-none focus:ring-2 focus:ring-primary/50 transition-all";

#[component]
pub fn Contact() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());

    view! {
        <section id="contact" class="py-24 md:py-32 relative">
            <div class="container mx-auto px-6 relative z-10">
                <h2 class="section-title">"Contact"</h2>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    <Reveal motion=CONTACT_CARD index=0 class="card p-8">
                        <h3 class="text-xl font-bold gradient-text mb-4">"Akash's Portfolio"</h3>
                        <p class="text-foreground/80 leading-relaxed">
                            "Thanks for exploring my little corner of the web." <br />
                            "This portfolio is just the trailer, the real story begins when we connect."
                        </p>
                    </Reveal>

                    <Reveal motion=CONTACT_CARD index=1 class="card p-8">
                        <h3 class="text-xl font-bold gradient-text mb-6">"Reach Out"</h3>
                        <div class="space-y-4 selectable">
                            <div class="flex items-center gap-4 text-foreground/80">
                                <span class="text-primary">"📞"</span>
                                <span>{CONTACT_PHONE}</span>
                            </div>
                            <div class="flex items-center gap-4 text-foreground/80">
                                <span class="text-primary">"✉"</span>
                                <span>{CONTACT_EMAIL}</span>
                            </div>
                            <div class="flex items-center gap-4 text-foreground/80">
                                <span class="text-primary">"📍"</span>
                                <span>{CONTACT_LOCATION}</span>
                            </div>
                        </div>
                    </Reveal>

                    <Reveal motion=CONTACT_CARD index=2 class="card p-8">
                        <h3 class="text-xl font-bold gradient-text mb-6">"Catch Me Online"</h3>
                        <div class="flex justify-center gap-4 mb-8">
                            {SOCIAL_LINKS
                                .iter()
                                .map(|social| {
                                    view! {
                                        <a
                                            href=social.href
                                            target="_blank"
                                            rel="noopener noreferrer"
                                            title=social.label
                                            class=format!(
                                                "w-12 h-12 rounded-full {} flex items-center justify-center text-white font-bold transition-all duration-300 hover:scale-110 hover:shadow-lg",
                                                social.class,
                                            )
                                        >
                                            {social.glyph}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <button
                            class="w-full px-6 py-2 bg-gradient-to-r from-primary to-blue-600 text-white rounded-lg font-medium hover:shadow-lg transition-all duration-300 hover:scale-105"
                            on:click=move |_| form.update(ContactForm::toggle)
                        >
                            {move || if form.with(ContactForm::is_open) { "Close" } else { "Let's Talk" }}
                        </button>
                    </Reveal>
                </div>

                <div class=move || {
                    if form.with(ContactForm::is_open) {
                        "overflow-hidden transition-all duration-500 ease-out mt-12 max-h-[950px] opacity-100"
                    } else {
                        "overflow-hidden transition-all duration-500 ease-out mt-12 max-h-0 opacity-0"
                    }
                }>
                    <div class="max-w-5xl mx-auto">
                        <div class="card p-8 md:p-12">
                            <div class="flex justify-between items-center mb-8">
                                <h3 class="text-2xl md:text-3xl font-bold text-foreground">
                                    "Drop a Message"
                                </h3>
                                <button
                                    class="text-foreground/60 hover:text-foreground transition-colors p-1 text-2xl"
                                    aria-label="Close form"
                                    on:click=move |_| form.update(ContactForm::close)
                                >
                                    "✕"
                                </button>
                            </div>
                            <ContactFormView form />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// The form itself. Field state lives in `form`; submission runs on the local executor.
#[component]
fn ContactFormView(form: RwSignal<ContactForm>) -> impl IntoView {
    let config = StoredValue::new(ContactConfig::from_build_env());
    let submitting = move || form.with(|f| f.status().is_submitting());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let submission = match form.try_update(|f| f.begin_submit(Utc::now())) {
            Some(Ok(submission)) => submission,
            // invalid fields are already on the form, and a double submit is ignored
            _ => return,
        };
        let config = config.get_value();
        spawn_local(async move {
            let transport = WebhookTransport::new(&config);
            let outcome = transport.send(&submission).await;
            // the section may have been torn down while the request was out
            if let Some(Some(ticket)) = form.try_update(|f| f.finish_submit(outcome)) {
                set_timeout(
                    move || {
                        form.try_update(|f| f.auto_close(ticket));
                    },
                    config.auto_close,
                );
            }
        });
    };

    view! {
        <form on:submit=on_submit novalidate>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-8 mb-8">
                <div class="space-y-5">
                    <InputField form field=Field::Name kind="text" placeholder="Your name" />
                    <InputField form field=Field::Email kind="email" placeholder="your@email.com" />
                    <InputField
                        form
                        field=Field::MobileNumber
                        kind="tel"
                        placeholder="10-digit number"
                    />
                    <InputField
                        form
                        field=Field::CompanyName
                        kind="text"
                        placeholder="Your company (optional)"
                    />
                </div>
                <div class="space-y-5">
                    <div>
                        <FieldLabel field=Field::Purpose />
                        <select
                            id=Field::Purpose.key()
                            name=Field::Purpose.key()
                            class=format!("{INPUT_CLASS} border-border/50 appearance-none cursor-pointer")
                            prop:value=move || form.with(|f| f.value(Field::Purpose).to_string())
                            on:change=move |ev| {
                                form.update(|f| f.update_field(Field::Purpose, event_target_value(&ev)))
                            }
                        >
                            <option value="">"Select a purpose…"</option>
                            {Purpose::iter()
                                .map(|p| view! { <option value=p.label()>{p.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="md:row-span-3">
                        <FieldLabel field=Field::Message />
                        <textarea
                            id=Field::Message.key()
                            name=Field::Message.key()
                            rows="8"
                            placeholder="Tell me what's on your mind…"
                            class=format!("{INPUT_CLASS} border-border/50 resize-none")
                            prop:value=move || form.with(|f| f.value(Field::Message).to_string())
                            on:input=move |ev| {
                                form.update(|f| f.update_field(Field::Message, event_target_value(&ev)))
                            }
                        />
                    </div>
                </div>
            </div>

            {move || {
                form.with(|f| {
                    f.message()
                        .map(|text| {
                            let class = if f.status() == SubmissionState::Succeeded {
                                "mb-6 p-4 rounded-lg text-sm font-medium border bg-green-500/20 text-green-300 border-green-500/40"
                            } else {
                                "mb-6 p-4 rounded-lg text-sm font-medium border bg-red-500/20 text-red-300 border-red-500/40"
                            };
                            view! { <div class=class role="status">{text}</div> }
                        })
                })
            }}

            <div class="flex justify-end">
                <button
                    type="submit"
                    disabled=submitting
                    class="px-8 py-3 bg-gradient-to-r from-purple-600 to-blue-600 hover:from-purple-500 hover:to-blue-500 text-white font-semibold rounded-lg transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed flex items-center gap-2 shadow-lg hover:shadow-xl"
                >
                    {move || {
                        if submitting() {
                            Either::Left(
                                view! {
                                    <span class="spinner" aria-hidden="true" />
                                    "Sending..."
                                },
                            )
                        } else {
                            Either::Right("Send Message")
                        }
                    }}
                </button>
            </div>
        </form>
    }
}

#[component]
fn FieldLabel(field: Field) -> impl IntoView {
    view! {
        <label for=field.key() class="block text-sm font-semibold text-foreground/80 mb-2">
            {field.label()}
            {field.is_required().then(|| view! { " " <span class="text-red-500">"*"</span> })}
        </label>
    }
}

#[component]
fn InputField(
    form: RwSignal<ContactForm>,
    field: Field,
    kind: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let error = move || form.with(|f| f.error(field));

    view! {
        <div>
            <FieldLabel field />
            <input
                id=field.key()
                name=field.key()
                type=kind
                placeholder=placeholder
                class=move || {
                    if error().is_some() {
                        format!("{INPUT_CLASS} border-red-500 focus:border-red-500")
                    } else {
                        format!("{INPUT_CLASS} border-border/50")
                    }
                }
                prop:value=move || form.with(|f| f.value(field).to_string())
                on:input=move |ev| form.update(|f| f.update_field(field, event_target_value(&ev)))
            />
            {move || error().map(|e| view! { <p class="text-red-400 text-xs mt-1.5">{e}</p> })}
        </div>
    }
}
