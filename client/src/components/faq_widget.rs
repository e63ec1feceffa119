//! Floating FAQ chat bubble.

use leptos::prelude::*;

use crate::state::faq::{FaqChatState, FaqSender};
use crate::util::markdown::render_markdown_html;

#[component]
pub fn FaqWidget() -> impl IntoView {
    let chat = RwSignal::new(FaqChatState::new());
    let input = RwSignal::new(String::new());
    let transcript_ref = NodeRef::<leptos::html::Div>::new();

    let ask = move |question: String| {
        if chat.try_update(|c| c.ask(&question)).flatten().is_some() {
            input.set(String::new());
        }
    };

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());
        if let Some(el) = transcript_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        ask(input.get_untracked());
    };

    view! {
        <aside class="faq" class:faq--open=move || chat.with(|c| c.open)>
            <button class="faq__toggle" on:click=move |_| chat.update(FaqChatState::toggle)>
                {move || if chat.with(|c| c.open) { "Close" } else { "Questions?" }}
            </button>
            <Show when=move || chat.with(|c| c.open)>
                <div class="faq__panel">
                    <div class="faq__transcript" node_ref=transcript_ref>
                        <For
                            each=move || chat.with(|c| c.messages.clone().into_iter().enumerate().collect::<Vec<_>>())
                            key=|(i, _)| *i
                            children=move |(_, message)| {
                                match message.from {
                                    FaqSender::Bot => {
                                        view! {
                                            <div
                                                class="faq__message faq__message--bot"
                                                inner_html=render_markdown_html(&message.text)
                                            ></div>
                                        }
                                            .into_any()
                                    }
                                    FaqSender::Visitor => {
                                        view! {
                                            <div class="faq__message faq__message--visitor">{message.text}</div>
                                        }
                                            .into_any()
                                    }
                                }
                            }
                        />
                    </div>
                    <div class="faq__suggestions">
                        {move || {
                            chat.with(|c| c.suggestions.clone())
                                .into_iter()
                                .map(|question| {
                                    view! {
                                        <button class="faq__suggestion" on:click=move |_| ask(question.to_owned())>
                                            {question}
                                        </button>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <form class="faq__form" on:submit=on_submit>
                        <input
                            class="faq__input"
                            type="text"
                            placeholder="Ask about hours, delivery, payment..."
                            prop:value=move || input.get()
                            on:input=move |ev| input.set(event_target_value(&ev))
                        />
                        <button class="faq__send" type="submit">"Ask"</button>
                    </form>
                </div>
            </Show>
        </aside>
    }
}
