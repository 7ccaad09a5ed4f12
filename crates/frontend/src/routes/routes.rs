//! Screen routing.
//!
//! The active screen lives in [`crate::layout::app_context::AppContext`]
//! and is mirrored to the URL query string (`?page=...&id=...`) so a
//! reload lands back on the same screen. Parsing and rendering of the
//! query string are pure and unit-tested; only the history sync touches
//! the browser.

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::clients::ui::details::ClientDetails;
use crate::domain::clients::ui::form::ClientForm;
use crate::domain::clients::ui::list::ClientList;
use crate::domain::orders::ui::details::OrderDetails;
use crate::domain::orders::ui::list::OrderList;
use crate::domain::orders::ui::new_order::NewOrder;
use crate::domain::products::ui::form::ProductForm;
use crate::domain::products::ui::list::ProductList;
use crate::domain::promo_codes::ui::form::PromoCodeForm;
use crate::domain::promo_codes::ui::list::PromoCodeList;
use crate::layout::app_context::AppContext;
use crate::layout::MainLayout;
use crate::system::pages::dashboard::DashboardPage;
use crate::system::pages::login::LoginPage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Products,
    ProductNew,
    ProductEdit(u64),
    Clients,
    ClientNew,
    ClientDetails(u64),
    ClientEdit(u64),
    Orders,
    OrderNew,
    OrderDetails(u64),
    PromoCodes,
    PromoCodeNew,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct RouteQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    page: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
}

impl Route {
    fn page_name(self) -> &'static str {
        match self {
            Route::Dashboard => "dashboard",
            Route::Products => "products",
            Route::ProductNew => "products-new",
            Route::ProductEdit(_) => "products-edit",
            Route::Clients => "clients",
            Route::ClientNew => "clients-new",
            Route::ClientDetails(_) => "clients-details",
            Route::ClientEdit(_) => "clients-edit",
            Route::Orders => "orders",
            Route::OrderNew => "orders-new",
            Route::OrderDetails(_) => "orders-details",
            Route::PromoCodes => "promo-codes",
            Route::PromoCodeNew => "promo-codes-new",
        }
    }

    fn id(self) -> Option<u64> {
        match self {
            Route::ProductEdit(id)
            | Route::ClientDetails(id)
            | Route::ClientEdit(id)
            | Route::OrderDetails(id) => Some(id),
            _ => None,
        }
    }

    /// Render as a query string, e.g. `page=clients-details&id=7`.
    pub fn to_query(self) -> String {
        serde_qs::to_string(&RouteQuery {
            page: Some(self.page_name().to_string()),
            id: self.id(),
        })
        .unwrap_or_default()
    }

    /// Parse a query string (without the leading `?`). Unknown pages and
    /// id-routes missing their id fall back to the dashboard.
    pub fn from_query(query: &str) -> Route {
        let params: RouteQuery = serde_qs::from_str(query).unwrap_or_default();
        let id = params.id;
        match (params.page.as_deref(), id) {
            (Some("products"), _) => Route::Products,
            (Some("products-new"), _) => Route::ProductNew,
            (Some("products-edit"), Some(id)) => Route::ProductEdit(id),
            (Some("clients"), _) => Route::Clients,
            (Some("clients-new"), _) => Route::ClientNew,
            (Some("clients-details"), Some(id)) => Route::ClientDetails(id),
            (Some("clients-edit"), Some(id)) => Route::ClientEdit(id),
            (Some("orders"), _) => Route::Orders,
            (Some("orders-new"), _) => Route::OrderNew,
            (Some("orders-details"), Some(id)) => Route::OrderDetails(id),
            (Some("promo-codes"), _) => Route::PromoCodes,
            (Some("promo-codes-new"), _) => Route::PromoCodeNew,
            _ => Route::Dashboard,
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    view! {
        <Show
            when=move || ctx.user.get().is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}

/// Dispatches the active route to its screen. Lives inside the shell, so
/// every screen renders with the sidebar present.
#[component]
pub fn RouteOutlet() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not found");

    view! {
        {move || match ctx.route.get() {
            Route::Dashboard => view! { <DashboardPage /> }.into_any(),
            Route::Products => view! { <ProductList /> }.into_any(),
            Route::ProductNew => view! { <ProductForm id=None /> }.into_any(),
            Route::ProductEdit(id) => view! { <ProductForm id=Some(id) /> }.into_any(),
            Route::Clients => view! { <ClientList /> }.into_any(),
            Route::ClientNew => view! { <ClientForm id=None /> }.into_any(),
            Route::ClientDetails(id) => view! { <ClientDetails id=id /> }.into_any(),
            Route::ClientEdit(id) => view! { <ClientForm id=Some(id) /> }.into_any(),
            Route::Orders => view! { <OrderList /> }.into_any(),
            Route::OrderNew => view! { <NewOrder /> }.into_any(),
            Route::OrderDetails(id) => view! { <OrderDetails id=id /> }.into_any(),
            Route::PromoCodes => view! { <PromoCodeList /> }.into_any(),
            Route::PromoCodeNew => view! { <PromoCodeForm /> }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_routes_round_trip() {
        for route in [Route::Dashboard, Route::Products, Route::OrderNew] {
            assert_eq!(Route::from_query(&route.to_query()), route);
        }
    }

    #[test]
    fn id_routes_round_trip() {
        let route = Route::ClientDetails(42);
        assert_eq!(route.to_query(), "page=clients-details&id=42");
        assert_eq!(Route::from_query(&route.to_query()), route);
    }

    #[test]
    fn unknown_or_broken_queries_fall_back_to_dashboard() {
        assert_eq!(Route::from_query(""), Route::Dashboard);
        assert_eq!(Route::from_query("page=nope"), Route::Dashboard);
        // id-route without an id
        assert_eq!(Route::from_query("page=products-edit"), Route::Dashboard);
    }
}
