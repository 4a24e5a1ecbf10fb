//! Top bar with logo, navigation and account buttons.
//!
//! Everything here is static: the linked pages and the account flow live
//! outside this app.

use leptos::*;

use crate::{APP_NAME, NAV_LINKS};

#[component]
pub fn Header() -> impl IntoView {
    let nav = NAV_LINKS
        .iter()
        .map(|link| view! { <a href=link.href class="nav-link">{link.label}</a> })
        .collect_view();

    view! {
        <header>
            <div class="header-left">
                <div class="logo-mark">
                    <svg viewBox="0 0 48 48" fill="none" xmlns="http://www.w3.org/2000/svg">
                        <path
                            fill-rule="evenodd"
                            clip-rule="evenodd"
                            d="M47.2426 24L24 47.2426L0.757355 24L24 0.757355L47.2426 24ZM12.2426 21H35.7574L24 9.24264L12.2426 21Z"
                            fill="currentColor"
                        />
                    </svg>
                </div>
                <a href="/" class="logo">{APP_NAME}</a>
            </div>
            <div class="header-right">
                <nav>{nav}</nav>
                <div class="account-buttons">
                    <button class="button-primary">"Log in"</button>
                    <button class="button-secondary">"Sign up"</button>
                </div>
            </div>
        </header>
    }
}
