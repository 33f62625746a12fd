use crate::catalog::Condition;
use crate::forms::{
    ContactMethod, ImageAttachment, ListingType, SellTradeForm, MAX_IMAGES, SUCCESS_BANNER_MS,
};
use gloo_timers::callback::Timeout;
use log::warn;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, Url};
use yew::prelude::*;

/// Type choices for a new listing; wider than the collection filter list on
/// purpose, a submitted card can be of any type.
const POKEMON_TYPES: [&str; 18] = [
    "Fire", "Water", "Electric", "Grass", "Psychic", "Fighting", "Dark", "Steel", "Fairy",
    "Dragon", "Normal", "Flying", "Rock", "Ground", "Poison", "Bug", "Ghost", "Ice",
];

#[function_component(SellTradePage)]
pub fn sell_trade_page() -> Html {
    let form = use_state(SellTradeForm::default);
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

    let on_radio = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*form).clone();
            next.set_field("contact_method", input.value());
            form.set(next);
        })
    };

    let set_listing = |listing_type: ListingType| {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.listing_type = listing_type;
            form.set(next);
        })
    };

    let on_upload = {
        let form = form.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let Some(files) = input.files() else {
                return;
            };

            let mut selected = Vec::new();
            for index in 0..files.length() {
                if let Some(file) = files.get(index) {
                    match Url::create_object_url_with_blob(&file) {
                        Ok(url) => selected.push(ImageAttachment {
                            name: file.name(),
                            preview_url: url,
                        }),
                        Err(_) => warn!("Geen voorbeeld beschikbaar voor '{}'", file.name()),
                    }
                }
            }

            let mut next = (*form).clone();
            next.add_images(selected);
            form.set(next);
            // Clear the picker so the same file can be selected again.
            input.set_value("");
        })
    };

    let remove_image = |index: usize| {
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*form).clone();
            next.remove_image(index);
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
                form.set(SellTradeForm::default());
            })
            .forget();
        })
    };

    let listing_type = form.listing_type;

    html! {
        <main class="sell-trade">
            { if *show_success {
                html! { <div class="success-banner">{ "✔ Kaart succesvol toegevoegd!" }</div> }
            } else {
                html! {}
            } }

            <header class="page-header">
                <h1>{ "Kaart Toevoegen" }</h1>
                <p>{ "Voeg je eigen Pokémon kaart toe om te verkopen of ruilen" }</p>
            </header>

            <form class="listing-form" onsubmit={on_submit}>
                <section class="form-section">
                    <h3>{ "Wat wil je doen met deze kaart?" }</h3>
                    <div class="listing-type-buttons">
                        { for ListingType::ALL.iter().map(|option| html! {
                            <button
                                type="button"
                                class={classes!(
                                    "listing-type-button",
                                    if listing_type == *option { Some("selected") } else { None }
                                )}
                                onclick={set_listing(*option)}>
                                { option.label() }
                            </button>
                        }) }
                    </div>
                </section>

                <section class="form-section">
                    <h3>{ "Kaart Informatie" }</h3>
                    <div class="field-grid">
                        <label>
                            { "Kaart Naam *" }
                            <input
                                type="text"
                                name="card_name"
                                required=true
                                placeholder="bijv. Charizard"
                                value={form.card_name.clone()}
                                oninput={on_input.clone()}
                            />
                        </label>
                        <label>
                            { "Set *" }
                            <input
                                type="text"
                                name="set"
                                required=true
                                placeholder="bijv. Base Set"
                                value={form.set.clone()}
                                oninput={on_input.clone()}
                            />
                        </label>
                        <label>
                            { "Kaart Nummer" }
                            <input
                                type="text"
                                name="card_number"
                                placeholder="bijv. 4/102"
                                value={form.card_number.clone()}
                                oninput={on_input.clone()}
                            />
                        </label>
                        <label>
                            { "Type" }
                            <select name="type" onchange={on_select.clone()}>
                                <option value="" selected={form.card_type.is_empty()}>{ "Selecteer type" }</option>
                                { for POKEMON_TYPES.iter().map(|option| html! {
                                    <option value={*option} selected={form.card_type == *option}>{ *option }</option>
                                }) }
                            </select>
                        </label>
                        <label>
                            { "Conditie *" }
                            <select name="condition" required=true onchange={on_select.clone()}>
                                <option value="" selected={form.condition.is_empty()}>{ "Selecteer conditie" }</option>
                                { for Condition::ALL.iter().map(|option| html! {
                                    <option value={option.label()} selected={form.condition == option.label()}>
                                        { option.label() }
                                    </option>
                                }) }
                            </select>
                        </label>
                        { if listing_type.price_required() {
                            html! {
                                <label>
                                    { "Prijs (€) *" }
                                    <input
                                        type="number"
                                        name="price"
                                        required=true
                                        min="0"
                                        step="0.01"
                                        placeholder="0.00"
                                        value={form.price.clone()}
                                        oninput={on_input.clone()}
                                    />
                                </label>
                            }
                        } else {
                            html! {}
                        } }
                    </div>
                </section>

                { if listing_type.wanted_trade_required() {
                    html! {
                        <section class="form-section">
                            <h3>{ "Ruil Informatie" }</h3>
                            <label>
                                { "Wat zoek je in ruil? *" }
                                <textarea
                                    name="wanted_trade"
                                    required=true
                                    rows="3"
                                    placeholder="Beschrijf welke kaarten je zoekt, bijv. 'Blastoise Base Set in Near Mint conditie'"
                                    value={form.wanted_trade.clone()}
                                    oninput={on_textarea.clone()}
                                />
                            </label>
                        </section>
                    }
                } else {
                    html! {}
                } }

                <section class="form-section">
                    <h3>
                        { format!("Foto's (max {})", MAX_IMAGES) }
                        <span class="section-hint">{ "Voeg duidelijke foto's toe van voor- en achterkant" }</span>
                    </h3>
                    <label class="upload-zone">
                        <input
                            type="file"
                            multiple=true
                            accept="image/*"
                            onchange={on_upload}
                        />
                        <p>{ "Klik om foto's toe te voegen" }</p>
                    </label>
                    { if form.images.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <div class="image-previews">
                                { for form.images.iter().enumerate().map(|(index, image)| html! {
                                    <div key={image.preview_url.clone()} class="image-preview">
                                        <img src={image.preview_url.clone()} alt={image.name.clone()} />
                                        <button type="button" class="remove-image" onclick={remove_image(index)}>
                                            { "✕" }
                                        </button>
                                    </div>
                                }) }
                            </div>
                        }
                    } }
                </section>

                <section class="form-section">
                    <label>
                        { "Aanvullende Beschrijving" }
                        <textarea
                            name="description"
                            rows="4"
                            placeholder="Vertel meer over de kaart, bijzonderheden, waarom je hem verkoopt/ruilt, etc."
                            value={form.description.clone()}
                            oninput={on_textarea.clone()}
                        />
                    </label>
                </section>

                <section class="form-section">
                    <h3>{ "Contact Informatie" }</h3>
                    <div class="radio-row">
                        <span>{ "Voorkeurscontact methode" }</span>
                        <label class="radio-label">
                            <input
                                type="radio"
                                name="contact_method"
                                value="email"
                                checked={form.contact_method == ContactMethod::Email}
                                onchange={on_radio.clone()}
                            />
                            { "E-mail" }
                        </label>
                        <label class="radio-label">
                            <input
                                type="radio"
                                name="contact_method"
                                value="phone"
                                checked={form.contact_method == ContactMethod::Phone}
                                onchange={on_radio}
                            />
                            { "Telefoon" }
                        </label>
                    </div>
                    <div class="field-grid">
                        <label>
                            { "E-mailadres *" }
                            <input
                                type="email"
                                name="email"
                                required=true
                                placeholder="je@email.com"
                                value={form.email.clone()}
                                oninput={on_input.clone()}
                            />
                        </label>
                        <label>
                            { if form.contact_method.phone_required() { "Telefoonnummer *" } else { "Telefoonnummer" } }
                            <input
                                type="tel"
                                name="phone"
                                required={form.contact_method.phone_required()}
                                placeholder="+31 6 1234 5678"
                                value={form.phone.clone()}
                                oninput={on_input}
                            />
                        </label>
                    </div>
                </section>

                <div class="form-footer">
                    <button type="submit" class="button-primary large">{ "+ Kaart Toevoegen" }</button>
                    <p class="form-footnote">
                        { "Je kaart wordt toegevoegd en getoond aan andere verzamelaars" }
                    </p>
                </div>
            </form>
        </main>
    }
}
