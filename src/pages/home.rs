use crate::catalog::{Card, Catalog};
use crate::nav::Page;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub catalog: Catalog,
    pub on_navigate: Callback<(Page, Option<String>)>,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomeProps) -> Html {
    let go_to = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit((page, None)))
    };

    html! {
        <main class="home">
            <section class="hero">
                <div class="hero-inner">
                    <div class="hero-logo"><span class="brand-ball large"></span></div>
                    <h1>
                        { "Welkom in mijn" }
                        <span class="hero-highlight">{ "Pokémon Card Vault" }</span>
                    </h1>
                    <p class="hero-sub">
                        { "Ontdek zeldzame kaarten, vind de perfecte toevoeging voor je collectie, \
                           en handel met vertrouwen in mijn uitgebreide Pokémon kaarten database." }
                    </p>
                    <div class="hero-actions">
                        <button class="button-primary" onclick={go_to(Page::Collection)}>
                            { "Bekijk mijn collectie →" }
                        </button>
                        <button class="button-outline" onclick={go_to(Page::SellTrade)}>
                            { "Start met handelen" }
                        </button>
                    </div>
                </div>
            </section>

            <section class="stats-strip">
                <div class="stat">
                    <h3>{ "500+" }</h3>
                    <p>{ "Unieke kaarten in collectie" }</p>
                </div>
                <div class="stat">
                    <h3>{ "200+" }</h3>
                    <p>{ "Succesvolle handelingen" }</p>
                </div>
                <div class="stat">
                    <h3>{ "100%" }</h3>
                    <p>{ "Veilige transacties" }</p>
                </div>
            </section>

            <section class="featured">
                <div class="section-header">
                    <h2>{ "Uitgelichte Kaarten" }</h2>
                    <p>{ "Ontdek enkele van de meest bijzondere kaarten uit mijn collectie" }</p>
                </div>
                <div class="card-grid">
                    { for props.catalog.featured().map(|card| render_featured_card(card, &props.on_navigate)) }
                </div>
                <div class="section-footer">
                    <button class="button-primary" onclick={go_to(Page::Collection)}>
                        { "Bekijk alle kaarten →" }
                    </button>
                </div>
            </section>

            <section class="cta">
                <h2>{ "Klaar om te beginnen met handelen?" }</h2>
                <p>
                    { "Neem contact op voor vragen, handel voorstellen, of om je eigen kaarten \
                       toe te voegen aan onze database." }
                </p>
                <button class="button-primary" onclick={go_to(Page::Contact)}>
                    { "Neem contact op" }
                </button>
            </section>
        </main>
    }
}

fn render_featured_card(card: &Card, on_navigate: &Callback<(Page, Option<String>)>) -> Html {
    let open_detail = {
        let on_navigate = on_navigate.clone();
        let card_id = card.id.clone();
        Callback::from(move |_: MouseEvent| {
            on_navigate.emit((Page::CardDetail, Some(card_id.clone())));
        })
    };

    html! {
        <div key={card.id.clone()} class="card-tile featured-tile" onclick={open_detail}>
            <div class="card-tile-image">
                <img src={card.image_url.clone()} alt={card.name.clone()} loading="lazy" />
                <span class={card.rarity.badge_class()}>{ card.rarity.label() }</span>
            </div>
            <div class="card-tile-body">
                <h3>{ &card.name }</h3>
                <p class="card-subtitle">{ format!("{} • {}", card.set, card.number) }</p>
                <div class="card-tile-footer">
                    <div class="listing-flags">
                        { if card.for_sale { html! { <span class="flag flag-sale">{ "Te koop" }</span> } } else { html! {} } }
                        { if card.for_trade { html! { <span class="flag flag-trade">{ "Ruilbaar" }</span> } } else { html! {} } }
                    </div>
                    <span class="card-price">{ card.price_display() }</span>
                </div>
            </div>
        </div>
    }
}
