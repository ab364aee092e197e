//! Login Page Component
//!
//! Sign-in / register form in front of the board. Submitting only runs the
//! local form checks, then the simulated delay in [`crate::auth::sign_in`].

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{self, AuthMode};
use crate::context::use_app_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = use_app_context();

    let (mode, set_mode) = signal(AuthMode::Login);
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<&'static str>);

    let is_register = move || mode.get() == AuthMode::Register;

    let toggle_mode = move |_| {
        set_mode.update(|m| *m = m.toggled());
        set_error.set(None);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let checked = email.with_untracked(|email| {
            password.with_untracked(|password| {
                name.with_untracked(|name| auth::validate_login(mode.get_untracked(), email, password, name))
            })
        });
        if let Err(message) = checked {
            set_error.set(Some(message));
            return;
        }

        set_loading.set(true);
        spawn_local(async move {
            auth::sign_in().await;
            web_sys::console::log_1(&"[AUTH] Signed in".into());
            set_loading.set(false);
            ctx.set_signed_in(true);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-brand">"Kanban"</div>
                <h2>{move || if is_register() { "创建账号" } else { "欢迎回来" }}</h2>

                <form class="login-form" on:submit=on_submit>
                    <Show when=is_register>
                        <input
                            type="text"
                            placeholder="昵称"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </Show>
                    <input
                        type="email"
                        placeholder="邮箱"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                    <input
                        type="password"
                        placeholder="密码"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />

                    {move || error.get().map(|message| view! { <div class="login-error">{message}</div> })}

                    <button type="submit" class="login-submit" disabled=move || loading.get()>
                        {move || match (loading.get(), is_register()) {
                            (true, _) => "请稍候...",
                            (false, true) => "注册",
                            (false, false) => "登录",
                        }}
                    </button>
                </form>

                <button class="login-toggle" on:click=toggle_mode>
                    {move || if is_register() { "已有账号？去登录" } else { "没有账号？去注册" }}
                </button>
            </div>
        </div>
    }
}
