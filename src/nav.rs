use yew::prelude::*;

/// Closed set of page identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Collection,
    CardDetail,
    SellTrade,
    Contact,
    Dashboard,
}

impl Page {
    /// Entries shown in the navbar, in order. CardDetail and Dashboard are
    /// reached through cards and the icon shortcuts instead.
    pub const NAV_ITEMS: [Page; 4] = [Page::Home, Page::Collection, Page::SellTrade, Page::Contact];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Collection => "Collectie",
            Page::CardDetail => "Kaart",
            Page::SellTrade => "Verkopen/Ruilen",
            Page::Contact => "Contact",
            Page::Dashboard => "Dashboard",
        }
    }
}

/// Current page plus the card selected for the detail view. The card id is
/// only replaced when a navigation supplies one, so it can go stale on other
/// pages — harmless, since only CardDetail reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    pub page: Page,
    pub selected_card: Option<String>,
}

impl Default for NavState {
    fn default() -> Self {
        NavState {
            page: Page::Home,
            selected_card: None,
        }
    }
}

impl NavState {
    /// Both fields change in one state write; a navigation without a card id
    /// keeps the previously selected one.
    pub fn navigate(&self, page: Page, card_id: Option<String>) -> NavState {
        NavState {
            page,
            selected_card: card_id.or_else(|| self.selected_card.clone()),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current_page: Page,
    pub menu_open: bool,
    pub on_navigate: Callback<(Page, Option<String>)>,
    pub on_toggle_menu: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let nav_to = |page: Page| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| on_navigate.emit((page, None)))
    };

    let toggle_menu = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| on_toggle_menu.emit(()))
    };

    let nav_link = |page: Page, current: Page, extra: &'static str| {
        let class = classes!(
            extra,
            if page == current { Some("active") } else { None }
        );
        html! {
            <button class={class} onclick={nav_to(page)}>{ page.label() }</button>
        }
    };

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <button class="brand" onclick={nav_to(Page::Home)}>
                    <span class="brand-ball"></span>
                    <span class="brand-name">{ "PokéVault" }</span>
                </button>

                <div class="nav-links">
                    { for Page::NAV_ITEMS.iter().map(|page| nav_link(*page, props.current_page, "nav-link")) }
                </div>

                <div class="nav-actions">
                    <button class="icon-button" title="Wishlist" onclick={nav_to(Page::Dashboard)}>{ "♥" }</button>
                    <button class="icon-button" title="Dashboard" onclick={nav_to(Page::Dashboard)}>{ "👤" }</button>
                </div>

                <button class={classes!("hamburger", if props.menu_open { Some("open") } else { None })}
                    onclick={toggle_menu}>
                    { if props.menu_open { "✕" } else { "☰" } }
                </button>
            </div>

            {
                if props.menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for Page::NAV_ITEMS.iter().map(|page| nav_link(*page, props.current_page, "mobile-link")) }
                            <button class="mobile-link" onclick={nav_to(Page::Dashboard)}>
                                { "♥ Wishlist" }
                            </button>
                            <button class="mobile-link" onclick={nav_to(Page::Dashboard)}>
                                { "👤 Dashboard" }
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_home_without_selection() {
        let state = NavState::default();
        assert_eq!(state.page, Page::Home);
        assert!(state.selected_card.is_none());
    }

    #[test]
    fn navigating_with_card_id_updates_both_fields() {
        let state = NavState::default();
        let next = state.navigate(Page::CardDetail, Some("3".to_string()));
        assert_eq!(next.page, Page::CardDetail);
        assert_eq!(next.selected_card.as_deref(), Some("3"));
    }

    #[test]
    fn navigating_without_card_id_keeps_previous_selection() {
        let state = NavState::default().navigate(Page::CardDetail, Some("3".to_string()));
        let next = state.navigate(Page::Contact, None);
        assert_eq!(next.page, Page::Contact);
        assert_eq!(next.selected_card.as_deref(), Some("3"));
    }

    #[test]
    fn navigation_is_always_re_enterable() {
        let mut state = NavState::default();
        for page in [Page::Collection, Page::Home, Page::Collection, Page::Home] {
            state = state.navigate(page, None);
            assert_eq!(state.page, page);
        }
    }
}
