use leptos::{
    ev::{Event, SubmitEvent},
    prelude::*,
    server_fn::{
        codec::JsonEncoding,
        error::{FromServerFnError, ServerFnErrorErr},
    },
    task::spawn_local,
};
use leptos_use::{use_timeout_fn, UseTimeoutFnReturn};

use super::homepage::SectionHeading;
use crate::{
    contact::{ContactForm, ContactMessage, DispatchError, EmailDispatcher, Field},
    content::CHANNELS,
};

const NOTICE_MS: f64 = 6000.0;
const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-gray-300 focus:outline-none focus:ring-2 focus:ring-green-500 disabled:bg-gray-100";

impl FromServerFnError for DispatchError {
    type Encoder = JsonEncoding;

    fn from_server_fn_error(value: ServerFnErrorErr) -> Self {
        DispatchError::Transport(value.to_string())
    }
}

/// Delivers a contact message through the relay configured on the server.
#[server]
pub async fn send_contact_message(message: ContactMessage) -> Result<(), DispatchError> {
    use crate::contact::relay::EmailJsDispatcher;

    if let Err(err) = message.validate() {
        tracing::warn!("refusing contact message: {err}");
        return Err(DispatchError::Refused(err));
    }
    let Some(dispatcher) = use_context::<EmailJsDispatcher>() else {
        tracing::error!("contact message dropped, email relay is not configured");
        return Err(DispatchError::Unavailable);
    };
    dispatcher.deliver(message.trimmed()).await.map_err(|err| {
        tracing::error!("contact message not delivered: {err}");
        err.redacted()
    })
}

/// Browser-side dispatcher that hands the message to [`send_contact_message`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RelayProxy;

impl EmailDispatcher for RelayProxy {
    async fn send(&self, message: ContactMessage) -> Result<(), DispatchError> {
        send_contact_message(message).await
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    view! {
        <section id="contact" class="py-20 px-8 bg-gray-50">
            <div class="max-w-6xl mx-auto">
                <SectionHeading title="Get In Touch" />
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8">
                    <div class="bg-white rounded-xl shadow p-8">
                        <h3 class="text-2xl font-bold mb-6">"Let's Connect"</h3>
                        <ul class="flex flex-col gap-4">
                            {CHANNELS
                                .iter()
                                .map(|c| {
                                    view! {
                                        <li>
                                            <a
                                                href=c.href
                                                target="_blank"
                                                rel="noopener noreferrer"
                                                class="flex items-center gap-4 p-3 rounded-lg hover:bg-green-50"
                                            >
                                                <i class=format!("{} text-2xl", c.icon)></i>
                                                <div>
                                                    <div class="text-sm text-gray-500">{c.label}</div>
                                                    <div class="font-semibold">{c.value}</div>
                                                </div>
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                    <div class="bg-white rounded-xl shadow p-8">
                        <h3 class="text-2xl font-bold mb-6">"Send a Message"</h3>
                        <ContactFormView />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactFormView() -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());
    let sending = move || form.with(ContactForm::is_sending);

    let UseTimeoutFnReturn {
        start: start_dismiss,
        stop: stop_dismiss,
        ..
    } = use_timeout_fn(
        move |_: ()| form.update(ContactForm::dismiss_notice),
        NOTICE_MS,
    );

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let message = match form.try_update(ContactForm::begin_submit) {
            Some(Ok(message)) => message,
            Some(Err(err)) => {
                log::debug!("contact form not submitted: {err}");
                return;
            }
            None => return,
        };
        stop_dismiss();
        let start_dismiss = start_dismiss.clone();
        spawn_local(async move {
            let result = RelayProxy.send(message).await;
            form.update(|f| {
                f.complete_submit(result);
            });
            start_dismiss(());
        });
    };

    view! {
        <form class="flex flex-col gap-5" on:submit=on_submit>
            <FieldInput form field=Field::Name />
            <FieldInput form field=Field::Email />
            <FieldInput form field=Field::Subject />
            <FieldInput form field=Field::Body />
            {move || {
                form.with(|f| f.validation_error().map(ToString::to_string))
                    .map(|msg| {
                        view! {
                            <p role="alert" class="text-sm text-red-600">
                                {msg}
                            </p>
                        }
                    })
            }}
            <button
                type="submit"
                disabled=sending
                class="w-full px-8 py-4 rounded-lg bg-green-600 hover:bg-green-700 disabled:opacity-60 text-white font-semibold"
            >
                {move || if sending() { "Sending..." } else { "📤 Send Message" }}
            </button>
            {move || {
                form.with(ContactForm::notice)
                    .map(|notice| {
                        let class = if notice.is_error() {
                            "p-4 rounded-lg bg-red-50 text-red-700 border border-red-200"
                        } else {
                            "p-4 rounded-lg bg-green-50 text-green-800 border border-green-200"
                        };
                        view! {
                            <div role="status" class=class>
                                {notice.text()}
                            </div>
                        }
                    })
            }}
        </form>
    }
}

#[component]
fn FieldInput(form: RwSignal<ContactForm>, field: Field) -> impl IntoView {
    let value = move || form.with(|f| f.draft().get(field).to_string());
    let disabled = move || form.with(ContactForm::is_sending);
    let on_input = move |ev: Event| {
        form.update(|f| f.update_field(field, event_target_value(&ev)));
    };

    let control = match field {
        Field::Body => view! {
            <textarea
                id=field.name()
                name=field.name()
                rows="5"
                maxlength=field.max_len().to_string()
                required=true
                class=INPUT_CLASS
                prop:value=value
                on:input=on_input
                disabled=disabled
            ></textarea>
        }
        .into_any(),
        _ => view! {
            <input
                id=field.name()
                name=field.name()
                type=if field == Field::Email { "email" } else { "text" }
                maxlength=field.max_len().to_string()
                required=true
                class=INPUT_CLASS
                prop:value=value
                on:input=on_input
                disabled=disabled
            />
        }
        .into_any(),
    };

    view! {
        <div>
            <label for=field.name() class="block mb-2 font-semibold">
                {field.label()}
            </label>
            {control}
        </div>
    }
}
