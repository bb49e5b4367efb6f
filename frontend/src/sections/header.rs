use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::content::SITE;

const SCROLL_SHADOW_OFFSET: f64 = 20.0;

fn shows_shadow(offset: f64) -> bool {
    offset > SCROLL_SHADOW_OFFSET
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(shows_shadow(offset));
                }) as Box<dyn FnMut()>);

                if window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("Could not attach scroll listener");
                }
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let brand = &SITE.brand;

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-bar">
                <div class="container header-bar-content">
                    <a href={format!("tel:{}", SITE.contact.phone.replace(' ', ""))}>{SITE.contact.phone}</a>
                    <a href={format!("mailto:{}", SITE.contact.email)}>{SITE.contact.email}</a>
                    <span class="header-coverage">{brand.coverage}</span>
                </div>
            </div>
            <nav class="container nav-content">
                <a href="#home" class="nav-logo">
                    <span class="logo-mark">{brand.monogram}</span>
                    <span class="logo-text">
                        <strong>{brand.name}</strong>
                        <small>{brand.tagline}</small>
                    </span>
                </a>

                <button
                    class={classes!("burger-menu", (*menu_open).then(|| "open"))}
                    aria-label="Toggle navigation"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={classes!("nav-links", (*menu_open).then(|| "mobile-menu-open"))}>
                    { for SITE.nav.iter().map(|link| html! {
                        <a href={link.href} class="nav-link" onclick={close_menu.clone()}>{link.label}</a>
                    }) }
                    <a href="#contact" class="button button-primary nav-cta" onclick={close_menu.clone()}>
                        {"Free Consultation"}
                    </a>
                </div>
            </nav>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shadow_flag_only_flips_past_the_offset() {
        // The flag is held in `use_state_eq`, so scrolling within one side of
        // the offset produces the same value and no re-render.
        let near_top: Vec<bool> = [0.0, 5.0, 20.0].into_iter().map(shows_shadow).collect();
        let further: Vec<bool> = [20.5, 300.0, 4000.0].into_iter().map(shows_shadow).collect();
        assert!(near_top.iter().all(|flag| !flag));
        assert!(further.iter().all(|flag| *flag));
    }
}
