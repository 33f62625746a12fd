use crate::catalog::{Card, Catalog};
use crate::forms::{TradeProposal, SUCCESS_BANNER_MS};
use crate::nav::Page;
use crate::wishlist::Wishlist;
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardDetailProps {
    pub catalog: Catalog,
    pub card_id: Option<String>,
    pub wishlist: Wishlist,
    pub on_navigate: Callback<(Page, Option<String>)>,
    pub on_toggle_wishlist: Callback<String>,
}

#[function_component(CardDetailPage)]
pub fn card_detail_page(props: &CardDetailProps) -> Html {
    let show_trade_form = use_state(|| false);
    let proposal = use_state(TradeProposal::default);
    let show_success = use_state(|| false);

    let back_to_collection = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit((Page::Collection, None)))
    };

    // The only defined error path: an unknown id renders the not-found state
    // with a way back to the listing.
    let Some(card) = props
        .card_id
        .as_deref()
        .and_then(|id| props.catalog.find(id))
    else {
        return html! {
            <main class="card-detail not-found">
                <h2>{ "Kaart niet gevonden" }</h2>
                <button class="button-primary" onclick={back_to_collection}>
                    { "Terug naar collectie" }
                </button>
            </main>
        };
    };

    let toggle_wishlist = {
        let on_toggle_wishlist = props.on_toggle_wishlist.clone();
        let card_id = card.id.clone();
        Callback::from(move |_: MouseEvent| on_toggle_wishlist.emit(card_id.clone()))
    };
    let wishlisted = props.wishlist.contains(&card.id);

    let open_trade_form = {
        let show_trade_form = show_trade_form.clone();
        Callback::from(move |_: MouseEvent| show_trade_form.set(true))
    };
    let close_trade_form = {
        let show_trade_form = show_trade_form.clone();
        Callback::from(move |_: MouseEvent| show_trade_form.set(false))
    };

    let on_email = {
        let proposal = proposal.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            let mut next = (*proposal).clone();
            next.email = input.value();
            proposal.set(next);
        })
    };
    let on_message = {
        let proposal = proposal.clone();
        Callback::from(move |event: InputEvent| {
            let area: HtmlTextAreaElement = event.target_unchecked_into();
            let mut next = (*proposal).clone();
            next.message = area.value();
            proposal.set(next);
        })
    };

    let on_trade_submit = {
        let show_trade_form = show_trade_form.clone();
        let show_success = show_success.clone();
        let proposal = proposal.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            show_trade_form.set(false);
            show_success.set(true);

            let show_success = show_success.clone();
            let proposal = proposal.clone();
            Timeout::new(SUCCESS_BANNER_MS, move || {
                show_success.set(false);
                proposal.set(TradeProposal::default());
            })
            .forget();
        })
    };

    let trade_modal = if *show_trade_form {
        html! {
            <div class="modal-overlay">
                <form class="modal" onsubmit={on_trade_submit}>
                    <h3>{ format!("Ruilvoorstel voor {}", card.name) }</h3>
                    <label>
                        { "Je e-mailadres" }
                        <input
                            type="email"
                            required=true
                            placeholder="je@email.com"
                            value={proposal.email.clone()}
                            oninput={on_email}
                        />
                    </label>
                    <label>
                        { "Wat bied je aan? Beschrijf je kaart(en)" }
                        <textarea
                            required=true
                            rows="4"
                            placeholder="Ik bied aan: [kaart naam, set, conditie, waarde]. Waarom is dit een eerlijke ruil..."
                            value={proposal.message.clone()}
                            oninput={on_message}
                        />
                    </label>
                    <div class="modal-actions">
                        <button type="button" class="button-outline" onclick={close_trade_form}>
                            { "Annuleren" }
                        </button>
                        <button type="submit" class="button-primary">{ "Verstuur voorstel" }</button>
                    </div>
                </form>
            </div>
        }
    } else {
        html! {}
    };

    html! {
        <main class="card-detail">
            { if *show_success {
                html! { <div class="success-banner">{ "✔ Ruilvoorstel succesvol verzonden!" }</div> }
            } else {
                html! {}
            } }

            <header class="page-header slim">
                <button class="back-link" onclick={back_to_collection.clone()}>
                    { "← Terug naar collectie" }
                </button>
            </header>

            <div class="detail-panel">
                <div class="detail-image">
                    <img src={card.image_url.clone()} alt={card.name.clone()} />
                    <button
                        class={classes!("heart-button", "large", if wishlisted { Some("wishlisted") } else { None })}
                        title="Wishlist"
                        onclick={toggle_wishlist}>
                        { if wishlisted { "♥" } else { "♡" } }
                    </button>
                </div>

                <div class="detail-body">
                    <h1>{ &card.name }</h1>
                    <p class="card-subtitle">{ format!("{} • {}", card.set, card.number) }</p>

                    <dl class="detail-facts">
                        <div>
                            <dt>{ "Type" }</dt>
                            <dd><span class={card.type_badge_class()}>{ &card.card_type }</span></dd>
                        </div>
                        <div>
                            <dt>{ "Zeldzaamheid" }</dt>
                            <dd><span class={card.rarity.badge_class()}>{ card.rarity.label() }</span></dd>
                        </div>
                        <div>
                            <dt>{ "Conditie" }</dt>
                            <dd><span class={card.condition.badge_class()}>{ card.condition.label() }</span></dd>
                        </div>
                        <div>
                            <dt>{ "Prijs" }</dt>
                            <dd class="detail-price">{ card.price_display() }</dd>
                        </div>
                    </dl>

                    { render_description(card) }

                    <div class="detail-actions">
                        { if card.for_sale {
                            html! {
                                <button class="button-buy">
                                    { format!("🛒 Koop nu voor {}", card.price_display()) }
                                </button>
                            }
                        } else {
                            html! {}
                        } }
                        { if card.for_trade {
                            html! {
                                <button class="button-primary" onclick={open_trade_form}>
                                    { "⇄ Stel ruil voor" }
                                </button>
                            }
                        } else {
                            html! {}
                        } }
                        <button class="button-outline">{ "Deel kaart" }</button>
                    </div>

                    <div class="detail-footnotes">
                        <span>{ "★ Authentiek gegarandeerd" }</span>
                        <span>{ "✔ Veilige transactie" }</span>
                    </div>
                </div>
            </div>

            { trade_modal }
        </main>
    }
}

fn render_description(card: &Card) -> Html {
    match &card.description {
        Some(description) => html! {
            <div class="detail-description">
                <h3>{ "Beschrijving" }</h3>
                <p>{ description }</p>
            </div>
        },
        None => html! {},
    }
}
