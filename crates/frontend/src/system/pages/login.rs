use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::toast::use_toasts;
use crate::system::auth::{api, context::use_session};

#[component]
pub fn LoginPage(on_switch: Callback<()>) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let session = use_session();
    let toasts = use_toasts();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = LoginRequest {
            email: email.get(),
            password: password.get(),
        };

        set_is_loading.set(true);

        spawn_local(async move {
            match api::login(&request).await {
                Ok(response) => {
                    session.establish(response.access_token);
                    toasts.success("Sucesso", "Login realizado com sucesso");
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    toasts.error("Erro", "Credenciais inválidas");
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="auth-container">
            <div class="auth-box">
                <h1>"🏠 Na Porta"</h1>
                <h2>"Faça login para acessar o sistema"</h2>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"E-mail"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Senha"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Entrando..." } else { "Entrar" }}
                    </button>
                </form>

                <button class="auth-box__link" on:click=move |_| on_switch.run(())>
                    "Não tem conta? Registre-se"
                </button>
            </div>
        </div>
    }
}
