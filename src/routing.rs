// Route surface and navigation guards. Parsing and resolution only; page
// rendering lives elsewhere.

use crate::catalog::Catalog;

// Query-parameter fallbacks on the payment page.
pub const DEFAULT_PAYMENT_ID: &str = "default";
pub const DEFAULT_PAYMENT_AMOUNT: u32 = 80000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
    Hostels,
    HostelDetails(String),
    Payment { id: String, amount: u32 },
    PaymentSuccess,
}

impl Route {
    pub fn parse(target: &str) -> Option<Route> {
        let (path, query) = match target.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (target, None),
        };

        match path {
            "/" => Some(Route::Home),
            "/login" => Some(Route::Login),
            "/register" => Some(Route::Register),
            "/dashboard" => Some(Route::Dashboard),
            "/hostels" => Some(Route::Hostels),
            "/payment/success" => Some(Route::PaymentSuccess),
            "/payment" => {
                let id = query_param(query, "id")
                    .unwrap_or_else(|| DEFAULT_PAYMENT_ID.to_string());
                let amount = query_param(query, "amount")
                    .and_then(|raw| raw.parse().ok())
                    .unwrap_or(DEFAULT_PAYMENT_AMOUNT);
                Some(Route::Payment { id, amount })
            }
            _ => path
                .strip_prefix("/hostels/")
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| Route::HostelDetails(id.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Hostels => "/hostels".to_string(),
            Route::HostelDetails(id) => format!("/hostels/{}", id),
            Route::Payment { id, amount } => format!("/payment?id={}&amount={}", id, amount),
            Route::PaymentSuccess => "/payment/success".to_string(),
        }
    }

    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Home | Route::Login | Route::Register)
    }
}

fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    query?
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Render(Route),
    Redirect(Route),
}

// Protected routes bounce unauthenticated visitors to the login page;
// an unknown hostel id bounces to the hostel list instead of erroring.
pub fn resolve(route: Route, logged_in: bool, catalog: &Catalog) -> Destination {
    if route.is_protected() && !logged_in {
        return Destination::Redirect(Route::Login);
    }

    if let Route::HostelDetails(id) = &route {
        if catalog.hostel(id).is_none() {
            return Destination::Redirect(Route::Hostels);
        }
    }

    Destination::Render(route)
}
