use crate::forms::{ContactForm, CONTACT_REASONS, SUCCESS_BANNER_MS};
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

#[function_component(ContactPage)]
pub fn contact_page() -> Html {
    let form = use_state(ContactForm::default);
    let show_success = use_state(|| false);

    let on_input = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_field(&input.name(), input.value());
            form.set(next);
        })
    };

    let on_select = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_field(&select.name(), select.value());
            form.set(next);
        })
    };

    let on_textarea = {
        let form = form.clone();
        Callback::from(move |event: InputEvent| {
            let area: HtmlTextAreaElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_field(&area.name(), area.value());
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let show_success = show_success.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            show_success.set(true);

            let form = form.clone();
            let show_success = show_success.clone();
            Timeout::new(SUCCESS_BANNER_MS, move || {
                show_success.set(false);
                form.set(ContactForm::default());
            })
            .forget();
        })
    };

    html! {
        <main class="contact">
            { if *show_success {
                html! { <div class="success-banner">{ "✔ Bericht succesvol verzonden!" }</div> }
            } else {
                html! {}
            } }

            <header class="page-header hero-header">
                <h1>{ "Neem Contact Op" }</h1>
                <p>
                    { "Heb je vragen over kaarten, wil je ruilen, of heb je andere vragen? \
                       Ik hoor graag van je!" }
                </p>
            </header>

            <div class="contact-layout">
                <form class="contact-form" onsubmit={on_submit}>
                    <h2>{ "Stuur een bericht" }</h2>
                    <div class="field-grid">
                        <label>
                            { "Naam *" }
                            <input
                                type="text"
                                name="name"
                                required=true
                                placeholder="Je volledige naam"
                                value={form.name.clone()}
                                oninput={on_input.clone()}
                            />
                        </label>
                        <label>
                            { "E-mailadres *" }
                            <input
                                type="email"
                                name="email"
                                required=true
                                placeholder="je@email.com"
                                value={form.email.clone()}
                                oninput={on_input}
                            />
                        </label>
                    </div>
                    <label>
                        { "Onderwerp *" }
                        <select name="subject" required=true onchange={on_select}>
                            <option value="" selected={form.subject.is_empty()}>{ "Selecteer een onderwerp" }</option>
                            { for CONTACT_REASONS.iter().map(|reason| html! {
                                <option value={*reason} selected={form.subject == *reason}>{ *reason }</option>
                            }) }
                        </select>
                    </label>
                    <label>
                        { "Bericht *" }
                        <textarea
                            name="message"
                            required=true
                            rows="6"
                            placeholder="Beschrijf je vraag, ruilvoorstel, of andere bericht hier..."
                            value={form.message.clone()}
                            oninput={on_textarea}
                        />
                    </label>
                    <button type="submit" class="button-primary">{ "Verstuur Bericht" }</button>
                </form>

                <aside class="contact-side">
                    <div class="side-panel">
                        <h3>{ "Direct Contact" }</h3>
                        <p>{ "✉ info@pokevault.nl" }</p>
                        <p>{ "💬 WhatsApp: +31 6 1234 5678" }</p>
                    </div>
                    <div class="side-panel">
                        <h3>{ "Volg ons" }</h3>
                        <p>{ "Instagram: @pokevault_nl" }</p>
                        <p>{ "TikTok: @pokevault_tiktok" }</p>
                        <p>{ "YouTube: PokéVault Channel" }</p>
                    </div>
                    <div class="side-panel accent">
                        <h3>{ "Reactietijd" }</h3>
                        <p>{ "Ik probeer binnen 24 uur te reageren op alle berichten." }</p>
                        <ul>
                            <li>{ "E-mail: binnen 24 uur" }</li>
                            <li>{ "WhatsApp: meestal binnen 2-4 uur" }</li>
                            <li>{ "Social media: binnen 1-2 dagen" }</li>
                        </ul>
                    </div>
                    <div class="side-panel accent">
                        <h3>{ "Handelsrichtlijnen" }</h3>
                        <ul>
                            <li>{ "Alle kaarten worden gecontroleerd op echtheid" }</li>
                            <li>{ "Verzending met track & trace" }</li>
                            <li>{ "14 dagen retourrecht" }</li>
                            <li>{ "Veilige betaling via iDEAL of PayPal" }</li>
                        </ul>
                    </div>
                </aside>
            </div>

            <section class="faq">
                <h2>{ "Veelgestelde Vragen" }</h2>
                <div class="faq-grid">
                    <div class="faq-item">
                        <h4>{ "Hoe weet ik of een kaart echt is?" }</h4>
                        <p>
                            { "Alle kaarten in mijn collectie zijn gecontroleerd op echtheid. Bij dure \
                               kaarten verstuur ik altijd extra foto's en certificaten indien beschikbaar." }
                        </p>
                    </div>
                    <div class="faq-item">
                        <h4>{ "Kan ik kaarten inruilen?" }</h4>
                        <p>
                            { "Ja! Ik accepteer kaarten in ruil. Stuur foto's en beschrijving van je \
                               kaarten, dan maken we een eerlijke afspraak." }
                        </p>
                    </div>
                    <div class="faq-item">
                        <h4>{ "Hoe zit het met verzending?" }</h4>
                        <p>
                            { "Verzending binnen Nederland is €3,95. Boven €50 is verzending gratis. \
                               Internationale verzending is mogelijk." }
                        </p>
                    </div>
                    <div class="faq-item">
                        <h4>{ "Kan ik kaarten laten waarderen?" }</h4>
                        <p>
                            { "Ik help graag met het inschatten van de waarde van je kaarten. Stuur \
                               foto's voor een gratis indicatie." }
                        </p>
                    </div>
                </div>
            </section>
        </main>
    }
}
