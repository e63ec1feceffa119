//! Support chat with the restaurant team.
//!
//! This page gates itself with `use_route_protection` and shows a short
//! explanation while a redirect to sign in is pending.

use access::{GateDecision, GatePolicy};
use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use menu::{MAX_SUPPORT_MESSAGE_LEN, SupportAuthor};

use crate::components::loading::LoadingIndicator;
use crate::state::session::SessionStore;
use crate::state::support_chat::SupportChatState;
use crate::util::auth::use_route_protection;

#[component]
pub fn SupportPage(session: SessionStore) -> impl IntoView {
    let decision = use_route_protection(session.session(), GatePolicy::authenticated());

    move || match decision.get() {
        GateDecision::Wait => view! { <LoadingIndicator/> }.into_any(),
        GateDecision::Redirect { .. } => {
            view! { <p class="notice">"Sign in to chat with our team."</p> }.into_any()
        }
        GateDecision::Render => view! { <SupportChat session=session/> }.into_any(),
    }
}

#[component]
fn SupportChat(session: SessionStore) -> impl IntoView {
    let chat = RwSignal::new(SupportChatState::default());
    let transcript_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_support_messages().await;
        if matches!(&result, Err(e) if e.is_unauthenticated()) {
            session.expire();
        }
        chat.update(|c| c.load_finished(result.map_err(|e| e.message)));
    });

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let _ = chat.with(|c| c.messages.len());
        if let Some(el) = transcript_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(body) = chat.try_update(SupportChatState::begin_send).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::send_support_message(&body).await;
            if matches!(&result, Err(e) if e.is_unauthenticated()) {
                session.expire();
            }
            chat.update(|c| c.send_finished(result.map_err(|e| e.message)));
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (body, session);
            chat.update(|c| c.send_finished(Err("not available on server".to_owned())));
        }
    };

    view! {
        <div class="support-page">
            <h1>"Support"</h1>
            <div class="support-chat__transcript" node_ref=transcript_ref>
                <Show when=move || !chat.with(|c| c.loaded)>
                    <LoadingIndicator label="Loading conversation..."/>
                </Show>
                <Show when=move || chat.with(|c| c.loaded && c.messages.is_empty())>
                    <p class="notice">"Ask us anything about your order."</p>
                </Show>
                <For
                    each=move || chat.with(|c| c.messages.clone())
                    key=|m| m.id.clone()
                    children=move |message| {
                        let agent = message.author == SupportAuthor::Agent;
                        view! {
                            <div class="support-chat__message" class:support-chat__message--agent=agent>
                                <span class="support-chat__author">{if agent { "Support" } else { "You" }}</span>
                                <p>{message.body}</p>
                            </div>
                        }
                    }
                />
            </div>
            <form class="support-chat__form" on:submit=on_submit>
                <textarea
                    maxlength=MAX_SUPPORT_MESSAGE_LEN.to_string()
                    placeholder="Type your message"
                    prop:value=move || chat.with(|c| c.draft.clone())
                    on:input=move |ev| chat.update(|c| c.draft = event_target_value(&ev))
                ></textarea>
                <button class="btn btn--primary" type="submit" disabled=move || chat.with(|c| c.sending)>
                    {move || if chat.with(|c| c.sending) { "Sending..." } else { "Send" }}
                </button>
            </form>
            {move || chat.with(|c| c.error.clone()).map(|e| view! { <p class="notice notice--error">{e}</p> })}
        </div>
    }
}
