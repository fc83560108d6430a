//! Header and mobile drawer view models.
//!
//! Both are projections of the [`SessionProvider`]; navigation goes through a
//! host-supplied [`Router`].

use crate::error::Result;
use bridge_traits::platform::PlatformSendSync;
use bridge_traits::session::SessionProvider;
use serde::Serialize;
use tracing::{debug, info};

/// Navigation targets known to the shell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Search,
    SearchQuery(String),
    Messages,
    Profile,
    CreateListing,
    Settings,
    BuyCredits,
    Login,
    Listing(String),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Search => "/search".to_string(),
            Route::SearchQuery(query) => format!("/search?q={}", urlencoding::encode(query)),
            Route::Messages => "/messages".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::CreateListing => "/create-listing".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::BuyCredits => "/acheter-credits".to_string(),
            Route::Login => "/login".to_string(),
            Route::Listing(id) => format!("/listings/{id}"),
        }
    }
}

/// Host router.
pub trait Router: PlatformSendSync {
    fn navigate(&self, path: &str);

    /// Path of the page currently shown, without query string.
    fn current_path(&self) -> String;
}

/// Trimmed query as a search route; `None` for blank input.
pub fn search_route(query: &str) -> Option<Route> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then(|| Route::SearchQuery(trimmed.to_string()))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavLink {
    pub label: &'static str,
    pub path: String,
    pub active: bool,
}

impl NavLink {
    fn new(label: &'static str, route: Route, current_path: &str) -> Self {
        let path = route.path();
        Self {
            label,
            active: path == current_path,
            path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub search_placeholder: &'static str,
    /// Profile for a signed-in user, login otherwise
    pub account_link: NavLink,
    pub sell_link: NavLink,
    pub menu_open: bool,
    pub menu_button_label: &'static str,
}

/// Top bar state: the search field and the drawer toggle.
#[derive(Debug, Default)]
pub struct Header {
    search_query: String,
    menu_open: bool,
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Navigate to the search page; blank queries are ignored.
    pub fn submit_search(&self, router: &dyn Router) -> bool {
        match search_route(&self.search_query) {
            Some(route) => {
                router.navigate(&route.path());
                true
            }
            None => false,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn view(&self, session: &dyn SessionProvider, current_path: &str) -> HeaderView {
        let account_link = if session.current_user().is_some() {
            NavLink::new("Mon profil", Route::Profile, current_path)
        } else {
            NavLink::new("Connexion", Route::Login, current_path)
        };

        HeaderView {
            search_placeholder: "Rechercher un produit...",
            account_link,
            sell_link: NavLink::new("Vendre", Route::CreateListing, current_path),
            menu_open: self.menu_open,
            menu_button_label: if self.menu_open {
                "Fermer le menu"
            } else {
                "Ouvrir le menu"
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawerView {
    pub avatar_initial: String,
    pub display_name: String,
    pub email: Option<String>,
    pub items: Vec<NavLink>,
    /// Empty when signed out
    pub account_actions: Vec<NavLink>,
}

pub const SIGN_OUT_LABEL: &str = "Sortir";

/// The drawer opened from the header on small screens.
pub struct MobileMenu<'a> {
    session: &'a dyn SessionProvider,
    router: &'a dyn Router,
}

impl<'a> MobileMenu<'a> {
    pub fn new(session: &'a dyn SessionProvider, router: &'a dyn Router) -> Self {
        Self { session, router }
    }

    pub fn view(&self) -> DrawerView {
        let profile = self.session.profile().unwrap_or_default();
        let user = self.session.current_user();
        let current = self.router.current_path();

        let full_name = profile.full_name.filter(|name| !name.is_empty());
        let avatar_initial = full_name
            .as_deref()
            .and_then(|name| name.chars().next())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string());

        let items = vec![
            NavLink::new("Accueil", Route::Home, &current),
            NavLink::new("Recherche", Route::Search, &current),
            NavLink::new("Vendre", Route::CreateListing, &current),
            NavLink::new("Messages", Route::Messages, &current),
            NavLink::new("Profil", Route::Profile, &current),
        ];

        let account_actions = if user.is_some() {
            vec![
                NavLink::new("Crédits", Route::BuyCredits, &current),
                NavLink::new("Réglages", Route::Settings, &current),
            ]
        } else {
            Vec::new()
        };

        DrawerView {
            avatar_initial,
            display_name: full_name.unwrap_or_else(|| "Utilisateur".to_string()),
            email: user.and_then(|u| u.email),
            items,
            account_actions,
        }
    }

    /// Navigate, then close the drawer.
    pub fn select(&self, route: &Route, close: impl FnOnce()) {
        debug!(path = %route.path(), "Drawer navigation");
        self.router.navigate(&route.path());
        close();
    }

    /// Sign out, then close the drawer and go home.
    ///
    /// On failure the drawer stays open and nothing navigates.
    pub async fn sign_out(&self, close: impl FnOnce()) -> Result<()> {
        self.session.sign_out().await?;
        info!("Signed out");
        close();
        self.router.navigate(&Route::Home.path());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::BuyCredits.path(), "/acheter-credits");
        assert_eq!(Route::Listing("9".into()).path(), "/listings/9");
        assert_eq!(
            Route::SearchQuery("vélo rouge".into()).path(),
            "/search?q=v%C3%A9lo%20rouge"
        );
    }

    #[test]
    fn test_search_route_trims_and_ignores_blank() {
        assert_eq!(
            search_route("  frigo  "),
            Some(Route::SearchQuery("frigo".into()))
        );
        assert_eq!(search_route("   "), None);
        assert_eq!(search_route(""), None);
    }

    #[test]
    fn test_menu_toggle() {
        let mut header = Header::new();
        assert!(!header.is_menu_open());
        header.toggle_menu();
        assert!(header.is_menu_open());
        header.close_menu();
        assert!(!header.is_menu_open());
    }
}
