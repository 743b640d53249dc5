use chrono::NaiveDate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use shared_types::{BookingDraft, DogSize, SubmissionPhase, AVAILABLE_HOURS};
use thaw::*;
use thaw_utils::Model;

use crate::components::booking_calendar::{format_long_date, BookingCalendar};
use crate::components::loading::LoadingView;
use crate::webhook::send_booking;

#[component]
pub fn BookingForm() -> impl IntoView {
    // Form state
    let dog_name = RwSignal::new(String::new());
    let dog_size = RwSignal::new(String::new());
    let date = RwSignal::new(None::<NaiveDate>);
    let time = RwSignal::new(None::<String>);
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    // UI state
    let phase = RwSignal::new(SubmissionPhase::Idle);
    let mounted = RwSignal::new(false);

    // Effects never run during the server-rendered pass, so this flips only
    // once the page is interactive. The calendar is gated on it to keep the
    // server and client markup identical until hydration is done.
    Effect::new(move |_| {
        mounted.set(true);
    });

    let dog_size_model: Model<String> = dog_size.into();

    let current_draft = move || BookingDraft {
        dog_name: dog_name.get(),
        dog_size: DogSize::from_value(&dog_size.get()),
        date: date.get(),
        time: time.get(),
        phone: phone.get(),
        email: email.get(),
        message: message.get(),
    };

    let is_form_valid = move || current_draft().is_complete();

    let is_submitting = Memo::new(move |_| phase.get().is_submitting());
    let is_submitted = Memo::new(move |_| phase.get().is_submitted());
    let is_button_disabled = Memo::new(move |_| !is_form_valid() || !phase.get().can_submit());

    let handle_submit = move || {
        if !phase.get().can_submit() {
            return;
        }
        // None on an incomplete draft, so a programmatic submit with a
        // missing field sends nothing
        let Some(payload) = current_draft().to_payload() else {
            return;
        };

        phase.set(SubmissionPhase::Submitting);

        spawn_local(async move {
            // The no-cors transport gives no success signal, so a failed
            // delivery is shown to the visitor exactly like a successful one
            if let Err(err) = send_booking(&payload).await {
                leptos::logging::error!("webhook delivery failed: {err}");
            }
            phase.set(SubmissionPhase::Submitted);
        });
    };

    let on_date_selected = move |_day: NaiveDate| {
        // A slot belongs to the date it was picked under
        time.set(None);
    };

    view! {
        <form
            class="booking-form"
            on:submit=move |ev| {
                ev.prevent_default();
                if is_form_valid() {
                    handle_submit();
                }
            }
        >
            <fieldset class="booking-fieldset" disabled=move || is_submitted.get()>
                <section class="form-section">
                    <h2 class="form-section-title">"Informacje o psie"</h2>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="dog-name">"Imię psa"</label>
                            <Input
                                id="dog-name"
                                placeholder="np. Burek"
                                value=dog_name
                            />
                        </div>
                        <div class="form-group">
                            <label for="dog-size">"Rozmiar psa"</label>
                            <Select value=dog_size_model>
                                <option value="" disabled=true>"Wybierz rozmiar"</option>
                                <option value=DogSize::Small.value()>{DogSize::Small.label()}</option>
                                <option value=DogSize::Large.value()>{DogSize::Large.label()}</option>
                            </Select>
                        </div>
                    </div>
                </section>

                <section class="form-section">
                    <h2 class="form-section-title">"Termin wizyty"</h2>
                    <div class="calendar-slot">
                        {move || {
                            if mounted.get() {
                                view! {
                                    <BookingCalendar
                                        selected_date=date
                                        on_date_selected=on_date_selected
                                    />
                                }
                                    .into_any()
                            } else {
                                view! {
                                    <div class="calendar-placeholder">
                                        <LoadingView message=None/>
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </div>

                    {move || {
                        date.get()
                            .map(|selected| {
                                view! {
                                    <div class="time-slots">
                                        <p class="time-slots-label">
                                            {format!(
                                                "Dostępne godziny — {}",
                                                format_long_date(selected),
                                            )}
                                        </p>
                                        <div class="time-slots-grid">
                                            {AVAILABLE_HOURS
                                                .into_iter()
                                                .map(|hour| {
                                                    view! {
                                                        <button
                                                            type="button"
                                                            class="time-slot-button"
                                                            class:selected=move || {
                                                                time.get().as_deref() == Some(hour)
                                                            }
                                                            on:click=move |_| {
                                                                time.set(Some(hour.to_string()));
                                                            }
                                                        >
                                                            {hour}
                                                        </button>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </div>
                                    </div>
                                }
                            })
                    }}
                </section>

                <section class="form-section">
                    <h2 class="form-section-title">"Dane kontaktowe"</h2>
                    <div class="form-row">
                        <div class="form-group">
                            <label for="phone">"Telefon"</label>
                            <Input
                                id="phone"
                                input_type=InputType::Tel
                                placeholder="+48 000 000 000"
                                value=phone
                            />
                        </div>
                        <div class="form-group">
                            <label for="email">"E-mail"</label>
                            <Input
                                id="email"
                                input_type=InputType::Email
                                placeholder="email@example.com"
                                value=email
                            />
                        </div>
                    </div>
                </section>

                <section class="form-section">
                    <h2 class="form-section-title">"Opis usługi"</h2>
                    <div class="form-group">
                        <label for="message">"Opis usługi"</label>
                        <Textarea
                            id="message"
                            placeholder="Opisz jakiej usługi potrzebujesz, np. strzyżenie, kąpiel, trymowanie..."
                            value=message
                        />
                    </div>
                </section>

                <div class="form-actions">
                    <Button
                        button_type=ButtonType::Submit
                        appearance=ButtonAppearance::Primary
                        class="submit-button"
                        disabled=Signal::from(is_button_disabled)
                        loading=Signal::from(is_submitting)
                    >
                        {move || match phase.get() {
                            SubmissionPhase::Idle => "Zarezerwuj wizytę",
                            SubmissionPhase::Submitting => "Wysyłanie...",
                            SubmissionPhase::Submitted => "Wysłano prośbę o potwierdzenie",
                        }}
                    </Button>
                </div>
            </fieldset>

            {move || {
                is_submitted
                    .get()
                    .then(|| {
                        view! {
                            <div role="alert" class="success-alert">
                                <p>
                                    "Dziękujemy! Po potwierdzeniu godziny przez groomera otrzymasz e-mail z potwierdzeniem."
                                </p>
                            </div>
                        }
                    })
            }}
        </form>
    }
}
