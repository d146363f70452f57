use yew::prelude::*;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use gloo_console::log;
use gloo_timers::callback::Timeout;
use serde::Serialize;

use crate::config;
use crate::content::CONTACT_CHANNELS;

/// What a delivery backend would receive. Serializable so wiring one up
/// later is a transport change, not a state-machine change.
#[derive(Clone, PartialEq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

pub enum DeliveryOutcome {
    Delivered,
}

/// Hands the message to the delivery channel and invokes `done` once the
/// round trip completes. No backend exists, so the round trip is a fixed
/// timer; a real transport would send the request here and emit the
/// outcome instead. Dropping the returned handle cancels the delivery,
/// which is how the section avoids touching state after teardown.
pub fn deliver(message: ContactMessage, done: Callback<DeliveryOutcome>) -> Timeout {
    log!("contact message queued:", message.subject);
    Timeout::new(config::SUBMIT_ROUND_TRIP_MS, move || {
        done.emit(DeliveryOutcome::Delivered)
    })
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

#[derive(Clone, PartialEq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: SubmitStatus,
}

impl ContactForm {
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.subject.is_empty()
            && !self.message.is_empty()
    }

    /// Idle -> Submitting. Refused while a submission is in flight or a
    /// required field is empty; returns whether the transition fired.
    pub fn begin_submit(&mut self) -> bool {
        if self.status != SubmitStatus::Idle || !self.is_complete() {
            return false;
        }
        self.status = SubmitStatus::Submitting;
        true
    }

    /// Submitting -> Submitted, once the round trip finishes.
    pub fn mark_delivered(&mut self) {
        if self.status == SubmitStatus::Submitting {
            self.status = SubmitStatus::Submitted;
        }
    }

    /// Submitted -> Idle. Clears the fields; no other path does.
    pub fn dismiss_banner(&mut self) {
        if self.status == SubmitStatus::Submitted {
            *self = ContactForm::default();
        }
    }

    pub fn payload(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.clone(),
            email: self.email.clone(),
            subject: self.subject.clone(),
            message: self.message.clone(),
        }
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let form = use_state(ContactForm::default);

    // One pending timer at most, keyed on the status. The handle lives in
    // the effect so teardown cancels whatever is still in flight.
    {
        let status = form.status;
        let form = form.clone();
        use_effect_with_deps(
            move |status| {
                let pending = match status {
                    SubmitStatus::Submitting => {
                        let done = {
                            let form = form.clone();
                            Callback::from(move |DeliveryOutcome::Delivered| {
                                let mut next = (*form).clone();
                                next.mark_delivered();
                                form.set(next);
                            })
                        };
                        Some(deliver(form.payload(), done))
                    }
                    SubmitStatus::Submitted => {
                        let form = form.clone();
                        Some(Timeout::new(config::SUCCESS_BANNER_MS, move || {
                            let mut next = (*form).clone();
                            next.dismiss_banner();
                            form.set(next);
                        }))
                    }
                    SubmitStatus::Idle => None,
                };
                move || drop(pending)
            },
            status,
        );
    }

    let onsubmit = {
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            if next.begin_submit() {
                form.set(next);
            }
        })
    };

    let edit_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.name = input.value();
            form.set(next);
        })
    };
    let edit_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.email = input.value();
            form.set(next);
        })
    };
    let edit_subject = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.subject = input.value();
            form.set(next);
        })
    };
    let edit_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.message = area.value();
            form.set(next);
        })
    };

    let busy = form.status != SubmitStatus::Idle;

    html! {
        <section id="contact" class="contact-section">
            <style>
                {r#"
                    .contact-section {
                        padding: 7rem 2rem;
                        background: #0f172a;
                    }
                    .contact-header {
                        text-align: center;
                        max-width: 720px;
                        margin: 0 auto 4rem;
                    }
                    .contact-header h2 {
                        font-size: 2.5rem;
                        color: #f8fafc;
                        margin-bottom: 1rem;
                    }
                    .contact-header h2 span {
                        background: linear-gradient(90deg, #2dd4bf, #818cf8);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .contact-header p {
                        color: #94a3b8;
                        line-height: 1.6;
                    }
                    .contact-columns {
                        display: grid;
                        grid-template-columns: 2fr 3fr;
                        gap: 3rem;
                        max-width: 1100px;
                        margin: 0 auto;
                    }
                    @media (max-width: 900px) {
                        .contact-columns {
                            grid-template-columns: 1fr;
                        }
                    }
                    .contact-info h3 {
                        color: #f8fafc;
                        margin-bottom: 0.75rem;
                    }
                    .contact-info > p {
                        color: #94a3b8;
                        line-height: 1.6;
                        margin-bottom: 1.5rem;
                    }
                    .contact-channel {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        padding: 1rem 1.25rem;
                        margin-bottom: 1rem;
                        border: 1px solid rgba(148, 163, 184, 0.2);
                        border-radius: 12px;
                        background: rgba(30, 41, 59, 0.5);
                        color: inherit;
                        text-decoration: none;
                        transition: border-color 0.3s ease;
                    }
                    a.contact-channel:hover {
                        border-color: rgba(45, 212, 191, 0.5);
                    }
                    .contact-channel .channel-label {
                        color: #64748b;
                        font-size: 0.85rem;
                    }
                    .contact-channel .channel-value {
                        color: #e2e8f0;
                        font-weight: 500;
                    }
                    .business-hours {
                        margin-top: 2rem;
                        padding: 1.5rem;
                        border: 1px solid rgba(148, 163, 184, 0.2);
                        border-radius: 12px;
                        background: rgba(30, 41, 59, 0.5);
                    }
                    .business-hours h4 {
                        color: #f8fafc;
                        margin-bottom: 1rem;
                    }
                    .business-hours .hours-row {
                        display: flex;
                        justify-content: space-between;
                        font-size: 0.9rem;
                        margin-bottom: 0.5rem;
                    }
                    .business-hours .hours-row span:first-child {
                        color: #94a3b8;
                    }
                    .business-hours .hours-row span:last-child {
                        color: #e2e8f0;
                    }
                    .contact-form-card {
                        padding: 2rem;
                        border: 1px solid rgba(148, 163, 184, 0.2);
                        border-radius: 16px;
                        background: rgba(30, 41, 59, 0.5);
                    }
                    .contact-form-card .field-row {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem;
                    }
                    @media (max-width: 600px) {
                        .contact-form-card .field-row {
                            grid-template-columns: 1fr;
                        }
                    }
                    .contact-form-card label {
                        display: block;
                        color: #cbd5e1;
                        font-size: 0.85rem;
                        font-weight: 500;
                        margin-bottom: 0.5rem;
                    }
                    .contact-form-card input,
                    .contact-form-card textarea {
                        width: 100%;
                        margin-bottom: 1.5rem;
                        padding: 0.75rem 1rem;
                        border: 1px solid rgba(148, 163, 184, 0.3);
                        border-radius: 8px;
                        background: rgba(15, 23, 42, 0.5);
                        color: #f8fafc;
                        font: inherit;
                    }
                    .contact-form-card input:focus,
                    .contact-form-card textarea:focus {
                        outline: none;
                        border-color: #2dd4bf;
                    }
                    .contact-submit {
                        width: 100%;
                        padding: 1rem;
                        border: none;
                        border-radius: 12px;
                        background: linear-gradient(90deg, #14b8a6, #6366f1);
                        color: #fff;
                        font-size: 1rem;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .contact-submit:disabled {
                        opacity: 0.6;
                        cursor: wait;
                    }
                    .contact-success {
                        text-align: center;
                        padding: 3rem 1rem;
                    }
                    .contact-success .success-mark {
                        width: 4rem;
                        height: 4rem;
                        margin: 0 auto 1rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        border-radius: 50%;
                        background: rgba(34, 197, 94, 0.2);
                        color: #4ade80;
                        font-size: 1.75rem;
                    }
                    .contact-success h3 {
                        color: #f8fafc;
                        margin-bottom: 0.5rem;
                    }
                    .contact-success p {
                        color: #94a3b8;
                    }
                "#}
            </style>

            <div class="contact-header">
                <h2>{"Let's Build Something "}<span>{"Amazing Together"}</span></h2>
                <p>
                    {"Have a project in mind? We'd love to hear about it. Drop us a message \
                      and let's start a conversation about your digital future."}
                </p>
            </div>

            <div class="contact-columns">
                <div class="contact-info">
                    <h3>{"Contact Information"}</h3>
                    <p>
                        {"Ready to start your project? Contact us through any of the following \
                          channels and we'll get back to you within 24 hours."}
                    </p>
                    {
                        for CONTACT_CHANNELS.iter().map(|channel| {
                            let body = html! {
                                <>
                                    <span class="channel-label">{channel.label}</span>
                                    <span class="channel-value">{channel.value}</span>
                                </>
                            };
                            if let Some(href) = channel.href {
                                html! { <a class="contact-channel" href={href}>{body}</a> }
                            } else {
                                html! { <div class="contact-channel">{body}</div> }
                            }
                        })
                    }
                    <div class="business-hours">
                        <h4>{"Business Hours"}</h4>
                        <div class="hours-row"><span>{"Monday - Friday"}</span><span>{"9:00 AM - 8:00 PM"}</span></div>
                        <div class="hours-row"><span>{"Saturday"}</span><span>{"10:00 AM - 4:00 PM"}</span></div>
                        <div class="hours-row"><span>{"Sunday"}</span><span>{"Closed"}</span></div>
                    </div>
                </div>

                <div class="contact-form-card">
                    {
                        if form.status == SubmitStatus::Submitted {
                            html! {
                                <div class="contact-success">
                                    <div class="success-mark">{"✓"}</div>
                                    <h3>{"Message Sent!"}</h3>
                                    <p>{"Thank you for reaching out. We'll get back to you soon!"}</p>
                                </div>
                            }
                        } else {
                            html! {
                                <form onsubmit={onsubmit}>
                                    <div class="field-row">
                                        <div>
                                            <label for="contact-name">{"Your Name"}</label>
                                            <input
                                                id="contact-name"
                                                type="text"
                                                placeholder="your name"
                                                required={true}
                                                disabled={busy}
                                                value={form.name.clone()}
                                                oninput={edit_name}
                                            />
                                        </div>
                                        <div>
                                            <label for="contact-email">{"Email Address"}</label>
                                            <input
                                                id="contact-email"
                                                type="email"
                                                placeholder="yourmail@example.com"
                                                required={true}
                                                disabled={busy}
                                                value={form.email.clone()}
                                                oninput={edit_email}
                                            />
                                        </div>
                                    </div>
                                    <label for="contact-subject">{"Subject"}</label>
                                    <input
                                        id="contact-subject"
                                        type="text"
                                        placeholder="How can we help?"
                                        required={true}
                                        disabled={busy}
                                        value={form.subject.clone()}
                                        oninput={edit_subject}
                                    />
                                    <label for="contact-message">{"Message"}</label>
                                    <textarea
                                        id="contact-message"
                                        rows="5"
                                        placeholder="Tell us about your project..."
                                        required={true}
                                        disabled={busy}
                                        value={form.message.clone()}
                                        oninput={edit_message}
                                    />
                                    <button class="contact-submit" type="submit" disabled={busy}>
                                        {
                                            if form.status == SubmitStatus::Submitting {
                                                "Sending..."
                                            } else {
                                                "Send Message"
                                            }
                                        }
                                    </button>
                                </form>
                            }
                        }
                    }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
            status: SubmitStatus::Idle,
        }
    }

    #[test]
    fn empty_required_field_blocks_submission() {
        let blank_each: [fn(&mut ContactForm); 4] = [
            |f| f.name.clear(),
            |f| f.email.clear(),
            |f| f.subject.clear(),
            |f| f.message.clear(),
        ];
        for blank in blank_each {
            let mut form = filled();
            blank(&mut form);
            assert!(!form.begin_submit());
            assert_eq!(form.status, SubmitStatus::Idle);
        }
    }

    #[test]
    fn complete_form_starts_submitting() {
        let mut form = filled();
        assert!(form.begin_submit());
        assert_eq!(form.status, SubmitStatus::Submitting);
    }

    #[test]
    fn exactly_one_cycle_per_submission() {
        // A double click reaches begin_submit twice; only the first fires.
        let mut form = filled();
        assert!(form.begin_submit());
        assert!(!form.begin_submit());
        assert_eq!(form.status, SubmitStatus::Submitting);
    }

    #[test]
    fn delivery_completes_the_cycle() {
        let mut form = filled();
        form.begin_submit();
        form.mark_delivered();
        assert_eq!(form.status, SubmitStatus::Submitted);
    }

    #[test]
    fn fields_survive_until_dismissal() {
        let mut form = filled();
        form.begin_submit();
        form.mark_delivered();
        assert_eq!(form.name, "Jane");
        assert_eq!(form.message, "Hello");
    }

    #[test]
    fn banner_dismissal_clears_the_fields() {
        let mut form = filled();
        form.begin_submit();
        form.mark_delivered();
        form.dismiss_banner();
        assert_eq!(form.status, SubmitStatus::Idle);
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.subject.is_empty());
        assert!(form.message.is_empty());
    }

    #[test]
    fn out_of_order_transitions_are_ignored() {
        let mut form = filled();
        form.mark_delivered();
        assert_eq!(form.status, SubmitStatus::Idle);
        form.dismiss_banner();
        assert_eq!(form.status, SubmitStatus::Idle);
        assert_eq!(form.name, "Jane");

        form.begin_submit();
        form.dismiss_banner();
        assert_eq!(form.status, SubmitStatus::Submitting);
        assert_eq!(form.name, "Jane");
    }

    #[test]
    fn payload_mirrors_the_fields() {
        let form = filled();
        let payload = form.payload();
        assert_eq!(payload.name, form.name);
        assert_eq!(payload.email, form.email);
        assert_eq!(payload.subject, form.subject);
        assert_eq!(payload.message, form.message);
    }
}
