use crate::catalog::{Card, Catalog};
use crate::nav::Page;
use crate::wishlist::Wishlist;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeStatus {
    Pending,
    Accepted,
    Declined,
}

impl TradeStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TradeStatus::Pending => "In afwachting",
            TradeStatus::Accepted => "Geaccepteerd",
            TradeStatus::Declined => "Afgewezen",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            TradeStatus::Pending => "badge badge-pending",
            TradeStatus::Accepted => "badge badge-accepted",
            TradeStatus::Declined => "badge badge-declined",
        }
    }

    /// Parses the status-filter select; "all" and anything unknown mean no
    /// filter.
    pub fn from_value(value: &str) -> Option<TradeStatus> {
        match value {
            "pending" => Some(TradeStatus::Pending),
            "accepted" => Some(TradeStatus::Accepted),
            "declined" => Some(TradeStatus::Declined),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TradeRequest {
    pub id: &'static str,
    pub card_name: &'static str,
    pub proposed_card: &'static str,
    pub status: TradeStatus,
    pub date: &'static str,
    pub user_email: &'static str,
}

/// Placeholder inbox; there is no backend to source real requests from.
pub fn mock_trade_requests() -> Vec<TradeRequest> {
    vec![
        TradeRequest {
            id: "1",
            card_name: "Charizard Base Set",
            proposed_card: "Blastoise Base Set + €50",
            status: TradeStatus::Pending,
            date: "15-01-2024",
            user_email: "trainer@pokemon.com",
        },
        TradeRequest {
            id: "2",
            card_name: "Pikachu Promo",
            proposed_card: "3x Neo Genesis Rare kaarten",
            status: TradeStatus::Accepted,
            date: "12-01-2024",
            user_email: "collector@cards.nl",
        },
        TradeRequest {
            id: "3",
            card_name: "Venusaur Base Set",
            proposed_card: "Team Rocket set (compleet)",
            status: TradeStatus::Declined,
            date: "10-01-2024",
            user_email: "cardmaster@trading.com",
        },
    ]
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalesStats {
    pub total_sales: u32,
    pub revenue: f64,
    pub avg_price: f64,
    pub top_card: &'static str,
}

pub const SALES_STATS: SalesStats = SalesStats {
    total_sales: 12,
    revenue: 850.50,
    avg_price: 70.87,
    top_card: "Charizard Base Set",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Wishlist,
    Trades,
    Sales,
}

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub catalog: Catalog,
    pub wishlist: Wishlist,
    pub on_navigate: Callback<(Page, Option<String>)>,
}

#[function_component(DashboardPage)]
pub fn dashboard_page(props: &DashboardProps) -> Html {
    let active_tab = use_state(|| Tab::Wishlist);
    let status_filter = use_state(|| None::<TradeStatus>);

    let trade_requests = mock_trade_requests();
    let pending_count = trade_requests
        .iter()
        .filter(|t| t.status == TradeStatus::Pending)
        .count();

    let select_tab = |tab: Tab| {
        let active_tab = active_tab.clone();
        Callback::from(move |_: MouseEvent| active_tab.set(tab))
    };

    let go_to_collection = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit((Page::Collection, None)))
    };

    let on_status_filter = {
        let status_filter = status_filter.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            status_filter.set(TradeStatus::from_value(&select.value()));
        })
    };

    let tab_button = |tab: Tab, label: &'static str| {
        html! {
            <button
                class={classes!("tab", if *active_tab == tab { Some("active") } else { None })}
                onclick={select_tab(tab)}>
                { label }
            </button>
        }
    };

    let tab_content = match *active_tab {
        Tab::Wishlist => render_wishlist_tab(props, &go_to_collection),
        Tab::Trades => render_trades_tab(&trade_requests, *status_filter, &on_status_filter),
        Tab::Sales => render_sales_tab(),
    };

    html! {
        <main class="dashboard">
            <header class="page-header">
                <h1>{ "Dashboard" }</h1>
                <p>{ "Beheer je wishlist, bekijk ruilverzoeken en verkoop statistieken" }</p>
            </header>

            <div class="stat-cards">
                <div class="stat-card">
                    <p class="stat-label">{ "Wishlist Items" }</p>
                    <p class="stat-value">{ props.wishlist.len() }</p>
                </div>
                <div class="stat-card">
                    <p class="stat-label">{ "Actieve Ruilverzoeken" }</p>
                    <p class="stat-value">{ pending_count }</p>
                </div>
                <div class="stat-card">
                    <p class="stat-label">{ "Verkopen (deze maand)" }</p>
                    <p class="stat-value">{ SALES_STATS.total_sales }</p>
                </div>
                <div class="stat-card">
                    <p class="stat-label">{ "Omzet (€)" }</p>
                    <p class="stat-value">{ format!("€{:.2}", SALES_STATS.revenue) }</p>
                </div>
            </div>

            <nav class="tab-bar">
                { tab_button(Tab::Wishlist, "♥ Wishlist") }
                { tab_button(Tab::Trades, "⇄ Ruilverzoeken") }
                { tab_button(Tab::Sales, "📈 Verkoop Statistieken") }
            </nav>

            <section class="tab-content">
                { tab_content }
            </section>
        </main>
    }
}

fn render_wishlist_tab(props: &DashboardProps, go_to_collection: &Callback<MouseEvent>) -> Html {
    let items: Vec<&Card> = props
        .catalog
        .cards()
        .iter()
        .filter(|card| props.wishlist.contains(&card.id))
        .collect();

    if items.is_empty() {
        return html! {
            <div class="empty-state">
                <h3>{ "Je wishlist is nog leeg" }</h3>
                <p>{ "Voeg kaarten toe aan je wishlist door op het hart-icoon te klikken" }</p>
                <button class="button-primary" onclick={go_to_collection.clone()}>
                    { "Blader door collectie" }
                </button>
            </div>
        };
    }

    html! {
        <>
            <div class="tab-header">
                <h2>{ "Mijn Wishlist" }</h2>
                <button class="button-primary" onclick={go_to_collection.clone()}>
                    { "Voeg kaarten toe" }
                </button>
            </div>
            <div class="card-grid">
                { for items.iter().map(|card| {
                    let open_detail = {
                        let on_navigate = props.on_navigate.clone();
                        let card_id = card.id.clone();
                        Callback::from(move |_: MouseEvent| {
                            on_navigate.emit((Page::CardDetail, Some(card_id.clone())));
                        })
                    };

                    html! {
                        <div key={card.id.clone()} class="card-tile" onclick={open_detail}>
                            <div class="card-tile-image">
                                <img src={card.image_url.clone()} alt={card.name.clone()} loading="lazy" />
                            </div>
                            <div class="card-tile-body">
                                <h3>{ &card.name }</h3>
                                <p class="card-subtitle">{ format!("{} • {}", card.set, card.number) }</p>
                                <div class="card-tile-footer">
                                    <span class="card-price">{ card.price_display() }</span>
                                    <div class="listing-flags">
                                        { if card.for_sale { html! { <span class="flag flag-sale">{ "Te koop" }</span> } } else { html! {} } }
                                        { if card.for_trade { html! { <span class="flag flag-trade">{ "Ruilbaar" }</span> } } else { html! {} } }
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </>
    }
}

fn render_trades_tab(
    requests: &[TradeRequest],
    status_filter: Option<TradeStatus>,
    on_status_filter: &Callback<Event>,
) -> Html {
    let visible: Vec<&TradeRequest> = requests
        .iter()
        .filter(|request| status_filter.map_or(true, |status| request.status == status))
        .collect();

    html! {
        <>
            <div class="tab-header">
                <h2>{ "Ruilverzoeken" }</h2>
                <select onchange={on_status_filter.clone()}>
                    <option value="all" selected={status_filter.is_none()}>{ "Alle statussen" }</option>
                    <option value="pending" selected={status_filter == Some(TradeStatus::Pending)}>{ "In afwachting" }</option>
                    <option value="accepted" selected={status_filter == Some(TradeStatus::Accepted)}>{ "Geaccepteerd" }</option>
                    <option value="declined" selected={status_filter == Some(TradeStatus::Declined)}>{ "Afgewezen" }</option>
                </select>
            </div>
            <div class="trade-list">
                { for visible.iter().map(|request| html! {
                    <div key={request.id} class="trade-card">
                        <div class="trade-card-top">
                            <div>
                                <h3>{ request.card_name }</h3>
                                <p class="card-subtitle">{ request.user_email }</p>
                            </div>
                            <span class={request.status.badge_class()}>{ request.status.label() }</span>
                        </div>
                        <div class="trade-offer">
                            <p class="trade-offer-label">{ "Geboden ruil:" }</p>
                            <p>{ request.proposed_card }</p>
                        </div>
                        <div class="trade-card-bottom">
                            <span class="trade-date">{ request.date }</span>
                            { if request.status == TradeStatus::Pending {
                                html! {
                                    <div class="trade-actions">
                                        <button class="button-buy">{ "Accepteren" }</button>
                                        <button class="button-decline">{ "Afwijzen" }</button>
                                    </div>
                                }
                            } else {
                                html! {}
                            } }
                        </div>
                    </div>
                }) }
            </div>
        </>
    }
}

fn render_sales_tab() -> Html {
    html! {
        <>
            <h2>{ "Verkoop Statistieken" }</h2>
            <div class="stat-cards">
                <div class="stat-card accent-green">
                    <p class="stat-label">{ "Totale Verkopen" }</p>
                    <p class="stat-value">{ SALES_STATS.total_sales }</p>
                </div>
                <div class="stat-card accent-blue">
                    <p class="stat-label">{ "Totale Omzet" }</p>
                    <p class="stat-value">{ format!("€{:.2}", SALES_STATS.revenue) }</p>
                </div>
                <div class="stat-card accent-purple">
                    <p class="stat-label">{ "Gemiddelde Prijs" }</p>
                    <p class="stat-value">{ format!("€{:.2}", SALES_STATS.avg_price) }</p>
                </div>
                <div class="stat-card accent-yellow">
                    <p class="stat-label">{ "Populairste Kaart" }</p>
                    <p class="stat-value small">{ SALES_STATS.top_card }</p>
                </div>
            </div>
            <div class="sales-placeholder">
                <h3>{ "Recente Verkopen" }</h3>
                <p>{ "Gedetailleerde verkoophistorie komt binnenkort beschikbaar" }</p>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_values_parse() {
        assert_eq!(TradeStatus::from_value("pending"), Some(TradeStatus::Pending));
        assert_eq!(TradeStatus::from_value("accepted"), Some(TradeStatus::Accepted));
        assert_eq!(TradeStatus::from_value("declined"), Some(TradeStatus::Declined));
        assert_eq!(TradeStatus::from_value("all"), None);
        assert_eq!(TradeStatus::from_value(""), None);
    }

    #[test]
    fn mock_requests_have_unique_ids() {
        let requests = mock_trade_requests();
        let mut ids: Vec<&str> = requests.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), requests.len());
    }

    #[test]
    fn pending_count_matches_mock_data() {
        let pending = mock_trade_requests()
            .iter()
            .filter(|r| r.status == TradeStatus::Pending)
            .count();
        assert_eq!(pending, 1);
    }
}
