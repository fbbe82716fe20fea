use leptos::{
    either::Either,
    ev::{Event, SubmitEvent},
    prelude::*,
    task::spawn_local,
};

use super::{reveal::RevealSection, SectionHeading};
use crate::contact::{ContactFlow, ContactForm, Field, SUCCESS_DISPLAY};
use crate::content::{ContactChannel, SiteContent};
use crate::relay::{EmailJsRelay, MailRelay, RelayConfig};
use crate::site::Section;

const INPUT_CLASS: &str = "w-full px-4 py-3 bg-gray-700 border border-gray-600 rounded-lg text-white placeholder-gray-400 focus:outline-none focus:border-purple-500 focus:ring-2 focus:ring-purple-500/20 transition-all";

#[component]
pub fn Contact() -> impl IntoView {
    let content = expect_context::<SiteContent>();
    let channels = content.contact_channels();

    view! {
        <RevealSection section=Section::Contact class="py-20 bg-gray-900 relative overflow-hidden">
            <div class="space-y-16">
                <SectionHeading
                    title="Get In Touch"
                    blurb="Have a question or want to work together? Feel free to drop me a message. I'd love to hear from you!"
                />
                <div class="grid lg:grid-cols-2 gap-16 items-start">
                    <div class="space-y-8 reveal-item">
                        <div>
                            <h3 class="text-2xl font-bold text-white mb-6">"Contact Information"</h3>
                            <p class="text-gray-400 mb-8">
                                "Fill up the form and I'll get back to you as soon as possible."
                            </p>
                        </div>
                        <div class="space-y-6">
                            {channels.into_iter().map(channel_link).collect_view()}
                        </div>
                    </div>
                    <div class="bg-gray-800 rounded-xl p-8 reveal-item">
                        <ContactPanel />
                    </div>
                </div>
            </div>
        </RevealSection>
    }
}

fn channel_link(channel: ContactChannel) -> impl IntoView {
    view! {
        <a
            href=channel.href
            class="flex items-center p-4 bg-gray-800 rounded-xl hover:bg-gray-700 transition-all duration-300 hover-lift group hover:translate-x-2"
        >
            <div class=format!("p-3 rounded-lg bg-gradient-to-r {} mr-4 text-white", channel.accent)>
                <i class=channel.icon.class()></i>
            </div>
            <div>
                <h4 class="text-white font-medium group-hover:text-purple-400 transition-colors">
                    {channel.label}
                </h4>
                <p class="text-gray-400">{channel.value}</p>
            </div>
        </a>
    }
}

#[component]
fn ContactPanel() -> impl IntoView {
    let profile = expect_context::<SiteContent>().profile;
    let config = RelayConfig::from_build_env(profile.name, profile.email);
    let form = RwSignal::new(ContactForm::default());
    let flow = RwSignal::new(ContactFlow::new(profile.email));
    let dismiss_timer = StoredValue::new(None::<TimeoutHandle>);

    let schedule_dismiss = move || {
        if let Some(pending) = dismiss_timer.get_value() {
            pending.clear();
        }
        let handle = set_timeout_with_handle(
            move || {
                flow.update(|f| f.dismiss());
                dismiss_timer.set_value(None);
            },
            SUCCESS_DISPLAY,
        );
        match handle {
            Ok(handle) => dismiss_timer.set_value(Some(handle)),
            Err(err) => log::warn!("couldn't schedule success dismissal: {err:?}"),
        }
    };

    on_cleanup(move || {
        if let Some(pending) = dismiss_timer.try_get_value().flatten() {
            pending.clear();
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let begun = flow.try_update(|f| form.with_untracked(|fields| f.begin(fields, &config)));
        let message = match begun {
            Some(Ok(message)) => message,
            Some(Err(err)) => {
                log::warn!("contact submission not sent: {err}");
                return;
            }
            None => return,
        };
        spawn_local(async move {
            let result = EmailJsRelay::default().send(&message).await;
            let outcome = form
                .try_update(|fields| flow.try_update(|f| f.complete(result, fields)))
                .flatten();
            match outcome {
                Some(Ok(())) => schedule_dismiss(),
                Some(Err(err)) => log::error!("contact submission failed: {err}"),
                // unmounted before the relay answered
                None => {}
            }
        });
    };

    let submitted = Memo::new(move |_| flow.with(|f| f.is_submitted()));
    let submitting = Memo::new(move |_| flow.with(|f| f.is_submitting()));

    view! {
        <div class="text-center py-16 zoom-in" class:hidden=move || !submitted.get()>
            <div class="inline-block p-6 bg-green-500 rounded-full mb-6 text-white text-5xl">
                <i class="extra-check-circle"></i>
            </div>
            <h3 class="text-2xl font-bold text-white mb-4">"Message Sent!"</h3>
            <p class="text-gray-400">"Thank you for reaching out. I'll get back to you soon!"</p>
        </div>
        <form class="space-y-6" class:hidden=move || submitted.get() on:submit=on_submit>
            {move || {
                flow.with(|f| f.error_message().map(str::to_string))
                    .map(|msg| {
                        view! {
                            <div class="p-4 bg-red-500/20 border border-red-500/50 rounded-lg flex items-center fade-down">
                                <i class="extra-alert-circle text-red-400 mr-3 flex-shrink-0"></i>
                                <p class="text-red-400 text-sm">{msg}</p>
                            </div>
                        }
                    })
            }}
            <div class="grid md:grid-cols-2 gap-6">
                <FormField field=Field::Name form />
                <FormField field=Field::Email form />
            </div>
            <FormField field=Field::Subject form />
            <FormField field=Field::Message form />
            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full flex items-center justify-center px-8 py-4 bg-purple-600 hover:bg-purple-700 disabled:bg-purple-600/50 text-white rounded-lg font-medium transition-all duration-300 hover-lift"
            >
                {move || {
                    if submitting.get() {
                        Either::Left(
                            view! {
                                <span class="w-6 h-6 border-2 border-white/30 border-t-white rounded-full animate-spin"></span>
                            },
                        )
                    } else {
                        Either::Right(
                            view! {
                                <i class="extra-send mr-2"></i>
                                "Send Message"
                            },
                        )
                    }
                }}
            </button>
        </form>
    }
}

#[component]
fn FormField(field: Field, form: RwSignal<ContactForm>) -> impl IntoView {
    let value = move || form.with(|f| f.field(field).to_string());
    let on_input = move |ev: Event| form.update(|f| f.set(field, event_target_value(&ev)));

    view! {
        <div class="focus-within:scale-[1.02] transition-transform">
            <label for=field.key() class="block text-gray-300 font-medium mb-2">
                {field.label()}
            </label>
            {if field == Field::Message {
                Either::Left(
                    view! {
                        <textarea
                            id=field.key()
                            name=field.key()
                            placeholder=field.placeholder()
                            rows="6"
                            required
                            class=format!("{INPUT_CLASS} resize-none")
                            prop:value=value
                            on:input=on_input
                        ></textarea>
                    },
                )
            } else {
                Either::Right(
                    view! {
                        <input
                            type=field.input_type()
                            id=field.key()
                            name=field.key()
                            placeholder=field.placeholder()
                            required
                            class=INPUT_CLASS
                            prop:value=value
                            on:input=on_input
                        />
                    },
                )
            }}
        </div>
    }
}
