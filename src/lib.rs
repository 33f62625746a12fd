pub mod catalog;
pub mod filter;
pub mod forms;
pub mod nav;
pub mod pages;
pub mod wishlist;

use catalog::{Catalog, CatalogError};
use log::error;
use nav::{NavState, Navbar, Page};
use pages::card_detail::CardDetailPage;
use pages::collection::CollectionPage;
use pages::contact::ContactPage;
use pages::dashboard::DashboardPage;
use pages::home::HomePage;
use pages::sell_trade::SellTradePage;
use wasm_bindgen::prelude::wasm_bindgen;
use wishlist::Wishlist;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let nav = use_state(NavState::default);
    let menu_open = use_state(|| false);
    let wishlist = use_state(Wishlist::new);
    let catalog = use_state(|| {
        Catalog::load().map_err(|err| {
            error!("Card data rejected at startup: {}", err);
            err
        })
    });

    let on_navigate = {
        let nav = nav.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |(page, card_id): (Page, Option<String>)| {
            nav.set(nav.navigate(page, card_id));
            menu_open.set(false);
        })
    };

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let on_toggle_wishlist = {
        let wishlist = wishlist.clone();
        Callback::from(move |card_id: String| {
            let mut next = (*wishlist).clone();
            next.toggle(&card_id);
            wishlist.set(next);
        })
    };

    let page_view = match &*catalog {
        Err(err) => render_load_error(err),
        Ok(catalog) => match nav.page {
            Page::Home => html! {
                <HomePage catalog={catalog.clone()} on_navigate={on_navigate.clone()} />
            },
            Page::Collection => html! {
                <CollectionPage
                    catalog={catalog.clone()}
                    wishlist={(*wishlist).clone()}
                    on_navigate={on_navigate.clone()}
                    on_toggle_wishlist={on_toggle_wishlist.clone()}
                />
            },
            Page::CardDetail => html! {
                <CardDetailPage
                    catalog={catalog.clone()}
                    card_id={nav.selected_card.clone()}
                    wishlist={(*wishlist).clone()}
                    on_navigate={on_navigate.clone()}
                    on_toggle_wishlist={on_toggle_wishlist.clone()}
                />
            },
            Page::SellTrade => html! { <SellTradePage /> },
            Page::Contact => html! { <ContactPage /> },
            Page::Dashboard => html! {
                <DashboardPage
                    catalog={catalog.clone()}
                    wishlist={(*wishlist).clone()}
                    on_navigate={on_navigate.clone()}
                />
            },
        },
    };

    html! {
        <div class="app">
            <Navbar
                current_page={nav.page}
                menu_open={*menu_open}
                on_navigate={on_navigate}
                on_toggle_menu={on_toggle_menu}
            />
            { page_view }
        </div>
    }
}

fn render_load_error(err: &CatalogError) -> Html {
    html! {
        <main class="load-error">
            <h2>{ "Kon de collectie niet laden" }</h2>
            <p class="error">{ err.to_string() }</p>
        </main>
    }
}

#[wasm_bindgen(start)]
pub fn run_app() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
