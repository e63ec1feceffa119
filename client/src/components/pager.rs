use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::util::pagination::{PageItem, Pagination};

const MAX_BUTTONS: u32 = 7;

/// Previous / numbered / next page controls.
#[component]
pub fn Pager(#[prop(into)] pagination: Signal<Pagination>, on_change: Callback<u32>) -> impl IntoView {
    let go = move |page: u32| {
        let current = pagination.get_untracked();
        let target = current.clamp_page(page);
        if target != current.page {
            on_change.run(target);
        }
    };

    view! {
        <nav class="pager" aria-label="Pagination">
            <button
                class="pager__step"
                disabled=move || !pagination.get().has_prev()
                on:click=move |_| go(pagination.get_untracked().page.saturating_sub(1))
            >
                "Previous"
            </button>
            {move || {
                let p = pagination.get();
                p.window(MAX_BUTTONS)
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(n) => {
                            view! {
                                <button
                                    class="pager__page"
                                    class:pager__page--current=n == p.page
                                    aria-current=if n == p.page { Some("page") } else { None }
                                    on:click=move |_| go(n)
                                >
                                    {n}
                                </button>
                            }
                                .into_any()
                        }
                        PageItem::Gap => view! { <span class="pager__gap">"..."</span> }.into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pager__step"
                disabled=move || !pagination.get().has_next()
                on:click=move |_| go(pagination.get_untracked().page + 1)
            >
                "Next"
            </button>
            <span class="pager__summary">{move || pagination.get().range_label()}</span>
        </nav>
    }
}
