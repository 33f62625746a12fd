use crate::catalog::{
    Card, Catalog, Condition, Rarity, ALL_CONDITIONS, ALL_RARITIES, ALL_TYPES, FILTER_TYPES,
};
use crate::filter::{filter_and_sort, parse_bound, Criteria, SortKey};
use crate::nav::Page;
use crate::wishlist::Wishlist;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CollectionProps {
    pub catalog: Catalog,
    pub wishlist: Wishlist,
    pub on_navigate: Callback<(Page, Option<String>)>,
    pub on_toggle_wishlist: Callback<String>,
}

#[function_component(CollectionPage)]
pub fn collection_page(props: &CollectionProps) -> Html {
    let search = use_state(String::new);
    let type_label = use_state(|| ALL_TYPES.to_string());
    let rarity_label = use_state(|| ALL_RARITIES.to_string());
    let condition_label = use_state(|| ALL_CONDITIONS.to_string());
    let min_price = use_state(String::new);
    let max_price = use_state(String::new);
    let sort_value = use_state(|| SortKey::Name.value().to_string());
    let grid_view = use_state(|| true);
    let show_filters = use_state(|| false);

    // Derived view; recomputed whenever any criterion handle changes.
    let criteria = Criteria {
        search: (*search).clone(),
        card_type: if *type_label == ALL_TYPES {
            None
        } else {
            Some((*type_label).clone())
        },
        rarity: Rarity::from_label(&rarity_label),
        condition: Condition::from_label(&condition_label),
        min_price: parse_bound(&min_price),
        max_price: parse_bound(&max_price),
        sort: SortKey::from_value(&sort_value),
    };
    let results = filter_and_sort(props.catalog.cards(), &criteria);

    let on_search = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            search.set(input.value());
        })
    };

    let select_handler = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            handle.set(select.value());
        })
    };

    let price_handler = |handle: &UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let toggle_filters = {
        let show_filters = show_filters.clone();
        Callback::from(move |_: MouseEvent| show_filters.set(!*show_filters))
    };

    let set_grid_view = |value: bool| {
        let grid_view = grid_view.clone();
        Callback::from(move |_: MouseEvent| grid_view.set(value))
    };

    let reset_filters = {
        let search = search.clone();
        let type_label = type_label.clone();
        let rarity_label = rarity_label.clone();
        let condition_label = condition_label.clone();
        let min_price = min_price.clone();
        let max_price = max_price.clone();
        Callback::from(move |_: MouseEvent| {
            search.set(String::new());
            type_label.set(ALL_TYPES.to_string());
            rarity_label.set(ALL_RARITIES.to_string());
            condition_label.set(ALL_CONDITIONS.to_string());
            min_price.set(String::new());
            max_price.set(String::new());
        })
    };

    let rarity_options: Vec<String> = std::iter::once(ALL_RARITIES.to_string())
        .chain(Rarity::ALL.iter().map(|r| r.label().to_string()))
        .collect();
    let condition_options: Vec<String> = std::iter::once(ALL_CONDITIONS.to_string())
        .chain(Condition::ALL.iter().map(|c| c.label().to_string()))
        .collect();

    let cards_view = if results.is_empty() {
        html! {
            <div class="empty-state">
                <h3>{ "Geen kaarten gevonden" }</h3>
                <p>{ "Probeer je zoekcriteria aan te passen" }</p>
                <button class="button-primary" onclick={reset_filters}>{ "Reset filters" }</button>
            </div>
        }
    } else if *grid_view {
        render_card_grid(
            &results,
            &props.wishlist,
            &props.on_navigate,
            &props.on_toggle_wishlist,
        )
    } else {
        render_card_list(
            &results,
            &props.wishlist,
            &props.on_navigate,
            &props.on_toggle_wishlist,
        )
    };

    html! {
        <main class="collection">
            <header class="page-header">
                <h1>{ "Pokémon Kaarten Collectie" }</h1>
                <p>{ format!("Ontdek {} unieke kaarten in mijn collectie", props.catalog.len()) }</p>
            </header>

            <section class="filter-panel">
                <div class="search-bar">
                    <input
                        type="text"
                        placeholder="Zoek kaarten op naam of set..."
                        value={(*search).clone()}
                        oninput={on_search}
                    />
                </div>

                <div class="filter-toolbar">
                    <button class="filter-toggle" onclick={toggle_filters}>{ "Filters" }</button>
                    <div class="view-and-sort">
                        <button
                            class={classes!("view-toggle", if *grid_view { Some("active") } else { None })}
                            title="Rasterweergave"
                            onclick={set_grid_view(true)}>{ "▦" }</button>
                        <button
                            class={classes!("view-toggle", if !*grid_view { Some("active") } else { None })}
                            title="Lijstweergave"
                            onclick={set_grid_view(false)}>{ "☰" }</button>
                        <select onchange={select_handler(&sort_value)}>
                            <option value="name" selected={*sort_value == "name"}>{ "Sorteer op naam" }</option>
                            <option value="price-low" selected={*sort_value == "price-low"}>{ "Prijs: laag naar hoog" }</option>
                            <option value="price-high" selected={*sort_value == "price-high"}>{ "Prijs: hoog naar laag" }</option>
                            <option value="rarity" selected={*sort_value == "rarity"}>{ "Zeldzaamheid" }</option>
                        </select>
                    </div>
                </div>

                <div class={classes!("filter-grid", if *show_filters { Some("expanded") } else { None })}>
                    <select onchange={select_handler(&type_label)}>
                        { for FILTER_TYPES.iter().map(|option| html! {
                            <option value={*option} selected={*type_label == *option}>{ *option }</option>
                        }) }
                    </select>
                    <select onchange={select_handler(&rarity_label)}>
                        { for rarity_options.iter().map(|option| html! {
                            <option value={option.clone()} selected={*rarity_label == *option}>{ option }</option>
                        }) }
                    </select>
                    <select onchange={select_handler(&condition_label)}>
                        { for condition_options.iter().map(|option| html! {
                            <option value={option.clone()} selected={*condition_label == *option}>{ option }</option>
                        }) }
                    </select>
                    <input
                        type="number"
                        placeholder="Min prijs"
                        value={(*min_price).clone()}
                        oninput={price_handler(&min_price)}
                    />
                    <input
                        type="number"
                        placeholder="Max prijs"
                        value={(*max_price).clone()}
                        oninput={price_handler(&max_price)}
                    />
                </div>
            </section>

            <p class="result-count">{ format!("{} kaarten gevonden", results.len()) }</p>

            { cards_view }
        </main>
    }
}

fn wishlist_heart(
    card_id: &str,
    wishlist: &Wishlist,
    on_toggle_wishlist: &Callback<String>,
) -> Html {
    let wishlisted = wishlist.contains(card_id);
    let onclick = {
        let on_toggle_wishlist = on_toggle_wishlist.clone();
        let card_id = card_id.to_string();
        Callback::from(move |event: MouseEvent| {
            // The tile itself navigates; the heart must not.
            event.stop_propagation();
            on_toggle_wishlist.emit(card_id.clone());
        })
    };

    html! {
        <button
            class={classes!("heart-button", if wishlisted { Some("wishlisted") } else { None })}
            title="Wishlist"
            onclick={onclick}>
            { if wishlisted { "♥" } else { "♡" } }
        </button>
    }
}

fn render_card_grid(
    cards: &[&Card],
    wishlist: &Wishlist,
    on_navigate: &Callback<(Page, Option<String>)>,
    on_toggle_wishlist: &Callback<String>,
) -> Html {
    html! {
        <div class="card-grid">
            { for cards.iter().map(|card| {
                let open_detail = {
                    let on_navigate = on_navigate.clone();
                    let card_id = card.id.clone();
                    Callback::from(move |_: MouseEvent| {
                        on_navigate.emit((Page::CardDetail, Some(card_id.clone())));
                    })
                };

                html! {
                    <div key={card.id.clone()} class="card-tile" onclick={open_detail}>
                        <div class="card-tile-image">
                            <img src={card.image_url.clone()} alt={card.name.clone()} loading="lazy" />
                            <span class={card.rarity.badge_class()}>{ card.rarity.label() }</span>
                            { wishlist_heart(&card.id, wishlist, on_toggle_wishlist) }
                        </div>
                        <div class="card-tile-body">
                            <h3>{ &card.name }</h3>
                            <p class="card-subtitle">{ format!("{} • {}", card.set, card.number) }</p>
                            <div class="card-tile-meta">
                                <span class={card.type_badge_class()}>{ &card.card_type }</span>
                                <span class="card-price">{ card.price_display() }</span>
                            </div>
                            <div class="listing-flags">
                                { if card.for_sale { html! { <span class="flag flag-sale">{ "Te koop" }</span> } } else { html! {} } }
                                { if card.for_trade { html! { <span class="flag flag-trade">{ "Ruilbaar" }</span> } } else { html! {} } }
                            </div>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

fn render_card_list(
    cards: &[&Card],
    wishlist: &Wishlist,
    on_navigate: &Callback<(Page, Option<String>)>,
    on_toggle_wishlist: &Callback<String>,
) -> Html {
    html! {
        <div class="card-rows">
            { for cards.iter().map(|card| {
                let open_detail = {
                    let on_navigate = on_navigate.clone();
                    let card_id = card.id.clone();
                    Callback::from(move |_: MouseEvent| {
                        on_navigate.emit((Page::CardDetail, Some(card_id.clone())));
                    })
                };

                html! {
                    <div key={card.id.clone()} class="card-row" onclick={open_detail}>
                        <img src={card.image_url.clone()} alt={card.name.clone()} loading="lazy" />
                        <div class="card-row-body">
                            <h3>{ &card.name }</h3>
                            <p class="card-subtitle">
                                { format!("{} • {} • {}", card.set, card.number, card.condition.label()) }
                            </p>
                        </div>
                        <div class="card-row-right">
                            <span class="card-price">{ card.price_display() }</span>
                            <div class="listing-flags">
                                { if card.for_sale { html! { <span class="flag flag-sale">{ "Te koop" }</span> } } else { html! {} } }
                                { if card.for_trade { html! { <span class="flag flag-trade">{ "Ruilbaar" }</span> } } else { html! {} } }
                            </div>
                        </div>
                        { wishlist_heart(&card.id, wishlist, on_toggle_wishlist) }
                    </div>
                }
            }) }
        </div>
    }
}
