use leptos::prelude::*;
use portfolio_site::{CONFIRMATION_WINDOW, ContactForm, Field, SENT_MESSAGE, content};

use crate::components::section::SectionTitle;
use crate::timer::DismissTimer;

#[component]
pub fn ContactPage() -> impl IntoView {
    let profile = content::profile();
    let mailto = profile.mailto();
    let form = RwSignal::new(ContactForm::new());
    let timer = DismissTimer::new();

    let value = move |field: Field| form.with(|f| f.value(field).to_string());
    let edit = move |field: Field, ev: web_sys::Event| {
        form.update(|f| f.set(field, event_target_value(&ev)));
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        form.update(|f| {
            let _ = f.submit_scheduled(|ticket| {
                timer.arm(CONFIRMATION_WINDOW, move || {
                    form.try_update(|f| f.dismiss(ticket));
                })
            });
        });
    };

    view! {
        <div class="page-container">
            <SectionTitle
                eyebrow="Say Salaam"
                title="Let’s build something joyful"
                desc="I’m open to freelance and internships. Drop a message, and I’ll get back to you soon!"
            />
            <div class="contact-grid">
                <form class="contact-form glass" on:submit=on_submit>
                    <label>"Name"</label>
                    <input
                        name="name"
                        placeholder="Your name"
                        prop:value=move || value(Field::Name)
                        on:input=move |ev| edit(Field::Name, ev)
                    />
                    <label>"Email"</label>
                    <input
                        type="email"
                        name="email"
                        placeholder="you@example.com"
                        prop:value=move || value(Field::Email)
                        on:input=move |ev| edit(Field::Email, ev)
                    />
                    <label>"Message"</label>
                    <textarea
                        rows="5"
                        name="message"
                        placeholder="Write your message..."
                        prop:value=move || value(Field::Message)
                        on:input=move |ev| edit(Field::Message, ev)
                    ></textarea>

                    {move || form.with(ContactForm::error_message).map(|msg| view! {
                        <p class="form-error">{msg}</p>
                    })}

                    <button type="submit" class="button primary wide">"Send Message"</button>

                    {move || form.with(ContactForm::is_sent).then(|| view! {
                        <p class="form-sent">{SENT_MESSAGE}</p>
                    })}
                </form>

                <div class="quick-links glass">
                    <h3>"Quick Links"</h3>
                    <ul>
                        <li>"📧 " <a href=mailto>{profile.email}</a></li>
                        <li>"📍 " {profile.location}</li>
                        <li>"🔗 " <a href=profile.linkedin_url target="_blank" rel="noopener">"LinkedIn"</a></li>
                        <li>"💻 " <a href=profile.github_url target="_blank" rel="noopener">"GitHub"</a></li>
                        <li>"📄 " <a href=profile.resume_path target="_blank" rel="noopener">"Resume"</a></li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
