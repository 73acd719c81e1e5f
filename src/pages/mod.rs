//! Server-Rendered Entry Pages
//!
//! The page guard: `/`, `/login` and `/dashboard` read the session at
//! render time and redirect accordingly.
//!
//! - `/` redirects to `/dashboard` when a session exists, else to `/login`
//! - `/login` redirects to `/dashboard` when a session already exists,
//!   else renders the login form
//! - `/dashboard` renders when a session exists, else redirects to `/login`
//!
//! Every page response carries `Cache-Control: no-store`: the output
//! depends on per-request cookie state and must never be cached.

use axum::{
    extract::State,
    http::{header, HeaderValue},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::auth::sessions::{session_from_jar, Session, SessionKeys};

/// Login form markup
///
/// The form posts to `/api/auth/login` and follows the redirect itself;
/// the page stays static so the server renders the same bytes for every
/// anonymous visitor.
const LOGIN_FORM: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head>
  <meta charset="utf-8">
  <title>Connexion - Moana Yachting</title>
</head>
<body>
  <main>
    <h1>Moana Yachting</h1>
    <form id="login-form">
      <label for="broker">Nom d'utilisateur</label>
      <input id="broker" name="broker" type="text" autocomplete="username" required>
      <label for="password">Mot de passe</label>
      <input id="password" name="password" type="password" autocomplete="current-password" required>
      <button type="submit">Connexion</button>
      <p id="login-error" role="alert" hidden></p>
    </form>
  </main>
  <script>
    document.getElementById('login-form').addEventListener('submit', async (event) => {
      event.preventDefault();
      const form = new FormData(event.target);
      const response = await fetch('/api/auth/login', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ broker: form.get('broker'), password: form.get('password') }),
      });
      if (response.ok) {
        window.location.href = '/dashboard';
      } else {
        const body = await response.json().catch(() => ({ error: 'Erreur serveur' }));
        const error = document.getElementById('login-error');
        error.textContent = body.error;
        error.hidden = false;
      }
    });
  </script>
</body>
</html>
"#;

/// Mark a response as uncacheable
///
/// Page output depends on the request's cookie, so shared caches must not
/// store it.
fn no_store(mut response: Response) -> Response {
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
    response
}

/// `GET /` - entry redirect
pub async fn home_page(State(keys): State<SessionKeys>, jar: CookieJar) -> Response {
    let target = match session_from_jar(&keys, &jar) {
        Some(_) => "/dashboard",
        None => "/login",
    };
    no_store(Redirect::to(target).into_response())
}

/// `GET /login` - login form, or redirect when already authenticated
pub async fn login_page(State(keys): State<SessionKeys>, jar: CookieJar) -> Response {
    let response = match session_from_jar(&keys, &jar) {
        Some(_) => Redirect::to("/dashboard").into_response(),
        None => Html(LOGIN_FORM).into_response(),
    };
    no_store(response)
}

/// `GET /dashboard` - dashboard, or redirect when unauthenticated
pub async fn dashboard_page(State(keys): State<SessionKeys>, jar: CookieJar) -> Response {
    let response = match session_from_jar(&keys, &jar) {
        Some(session) => Html(render_dashboard(&session)).into_response(),
        None => Redirect::to("/login").into_response(),
    };
    no_store(response)
}

fn render_dashboard(session: &Session) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="fr">
<head>
  <meta charset="utf-8">
  <title>Tableau de bord - Moana Yachting</title>
</head>
<body>
  <main>
    <h1>Bienvenue, {broker}</h1>
    <form method="post" action="/api/auth/logout">
      <button type="submit">Déconnexion</button>
    </form>
  </main>
</body>
</html>
"#,
        broker = escape_html(&session.broker_name)
    )
}

/// Minimal HTML escaping for values interpolated into page markup
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
