use std::future::Future;
use std::pin::Pin;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff, LdMoon, LdShield, LdSun, LdTruck};
use dioxus_free_icons::Icon;
use shared_types::{LoginAttempt, PortalFlags, Role, CREDENTIALS};
use shared_ui::theme::ThemeState;
use shared_ui::{
    Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Input,
    Label,
};

/// What the login form submits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Settles once the owner has checked and committed a [`LoginRequest`].
pub type LoginFuture = Pin<Box<dyn Future<Output = ()>>>;

/// Sign-in card: email, password, role selector.
///
/// `on_login` receives each submission and resolves when the attempt is
/// settled. Until then the submit button is disabled and further submits
/// are dropped.
#[component]
pub fn LoginView(on_login: Callback<LoginRequest, LoginFuture>) -> Element {
    let flags: PortalFlags = use_context();
    let mut theme: ThemeState = use_context();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(Role::default);
    let mut show_password = use_signal(|| false);
    let mut attempt = use_signal(LoginAttempt::default);

    let handle_login = move |evt: FormEvent| async move {
        evt.prevent_default();
        if !attempt.write().begin() {
            tracing::debug!("login already pending, submit dropped");
            return;
        }

        let request = LoginRequest {
            email: email(),
            password: password(),
            role: role(),
        };
        tracing::debug!(role = %request.role, "submitting login");
        on_login.call(request).await;

        attempt.write().finish();
    };

    let loading = attempt.read().is_pending();
    let is_dark = theme.mode().is_dark();
    let password_type = if show_password() { "text" } else { "password" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./login.css") }

        div { class: "login-page",
            div { class: "login-theme-toggle",
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "icon-button",
                    title: "Toggle dark mode",
                    onclick: move |_| theme.toggle(),
                    if is_dark {
                        Icon::<LdSun> { icon: LdSun, width: 20, height: 20 }
                    } else {
                        Icon::<LdMoon> { icon: LdMoon, width: 20, height: 20 }
                    }
                }
            }

            Card {
                class: "login-card",

                CardHeader { class: "login-card-header",
                    div { class: "login-logo",
                        Icon::<LdTruck> { icon: LdTruck, width: 36, height: 36 }
                    }
                    CardTitle { "Transport Management" }
                    CardDescription { "Shivpuri Transport Business Portal" }
                }

                CardContent {
                    form { class: "login-form", onsubmit: handle_login,
                        div { class: "login-field",
                            Label { html_for: "email", "Email Address" }
                            Input {
                                id: "email",
                                input_type: "email",
                                placeholder: "Enter your email",
                                required: true,
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                        }

                        div { class: "login-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                id: "password",
                                input_type: password_type,
                                placeholder: "Enter your password",
                                required: true,
                                value: password(),
                                on_input: move |e: FormEvent| password.set(e.value()),
                                trailing: rsx! {
                                    button {
                                        r#type: "button",
                                        class: "login-reveal",
                                        "aria-label": if show_password() { "Hide password" } else { "Show password" },
                                        onclick: move |_| show_password.toggle(),
                                        if show_password() {
                                            Icon::<LdEyeOff> { icon: LdEyeOff, width: 16, height: 16 }
                                        } else {
                                            Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                                        }
                                    }
                                },
                            }
                        }

                        div { class: "login-field",
                            Label { html_for: "role", "Login As" }
                            div { id: "role", class: "login-roles", role: "radiogroup",
                                RoleOption { role: Role::Admin, selected: role() == Role::Admin, on_pick: move |r| role.set(r) }
                                RoleOption { role: Role::SubAdmin, selected: role() == Role::SubAdmin, on_pick: move |r| role.set(r) }
                            }
                        }

                        Button {
                            button_type: "submit",
                            class: "login-submit",
                            disabled: loading,
                            if loading { "Signing In..." } else { "Sign In" }
                        }
                    }

                    if flags.demo_credentials {
                        div { class: "login-demo",
                            p { "Demo Credentials:" }
                            for (r, cred) in CREDENTIALS.iter() {
                                p { key: "{r}", "{r.short_label()}: {cred.email} / {cred.password}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One of the two role buttons on the login card.
#[component]
fn RoleOption(role: Role, selected: bool, on_pick: EventHandler<Role>) -> Element {
    let variant = if selected {
        ButtonVariant::Primary
    } else {
        ButtonVariant::Outline
    };

    rsx! {
        Button {
            variant,
            class: "login-role",
            onclick: move |_| on_pick.call(role),
            match role {
                Role::Admin => rsx! { Icon::<LdShield> { icon: LdShield, width: 16, height: 16 } },
                Role::SubAdmin => rsx! { Icon::<LdTruck> { icon: LdTruck, width: 16, height: 16 } },
            }
            "{role.short_label()}"
        }
    }
}
