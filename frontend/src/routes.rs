use dioxus::prelude::*;

use crate::components::navbar::Navbar;

use crate::pages::home_page::HomePage;
use crate::pages::not_found_page::NotFoundPage;
use crate::pages::product_details_page::ProductDetailsPage;
use crate::pages::search_page::SearchPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/search?:query")]
    SearchPage {
        query: Option<String>,
    },


    #[route("/products/:id")]
    ProductDetailsPage { id: String },


    #[route("/:..segments")]
    NotFoundPage { segments: Vec<String> },

}

impl Route {
    /// Search route for a normalized query; an empty query keeps the URL
    /// parameter absent.
    pub fn search_page_from_query(query: String) -> Self {
        Self::SearchPage {
            query: if query.is_empty() { None } else { Some(query) },
        }
    }
}
